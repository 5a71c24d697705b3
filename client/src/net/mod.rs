//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the list/create/update/delete calls for a record collection
//! and `error` turns failed responses into values screens can render.

pub mod api;
pub mod error;
