//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Screens keep their state local; `screen` holds the list/form/delete model
//! shared by every record screen.

pub mod screen;
