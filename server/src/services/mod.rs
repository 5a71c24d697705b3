//! Service layer.
//!
//! ARCHITECTURE
//! ============
//! Route handlers stay thin and delegate persistence and validation here.

pub mod store;
