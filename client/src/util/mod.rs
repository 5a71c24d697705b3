//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser-only concerns live here so components stay free of `web-sys`
//! plumbing.

pub mod download;
