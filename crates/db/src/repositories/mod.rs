//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod profile_repo;

pub use profile_repo::ProfileRepo;
