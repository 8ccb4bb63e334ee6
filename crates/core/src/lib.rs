//! Domain types shared by the RelooMate API and its profile store.
//!
//! Nothing in this crate performs I/O beyond reading an onboarding catalog
//! file at startup.

pub mod error;
pub mod onboarding;
pub mod profile;
pub mod types;
