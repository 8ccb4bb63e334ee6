//! Row models for the database tables.

pub mod profile;
