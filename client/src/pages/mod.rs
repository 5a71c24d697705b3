//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages are thin route targets; the record pages delegate everything to the
//! generic `components::record_screen`.

pub mod doctors;
pub mod home;
pub mod not_found;
pub mod patients;
