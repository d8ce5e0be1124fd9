//! # PetClinic Infrastructure
//!
//! Infrastructure implementations of the core clinic ports.
//!
//! This crate contains:
//! - SQLite repository implementations (rusqlite + r2d2)
//! - The database manager (pool, migrations, sample data, transactions)
//! - Configuration loading (environment variables and config files)
//!
//! ## Architecture
//! - Implements traits defined in `petclinic-core`
//! - Depends on `petclinic-domain` and `petclinic-core`
//! - Contains all "impure" code (I/O, SQLite)

pub mod config;
pub mod database;
pub mod errors;

// Re-export commonly used items
pub use database::*;
pub use errors::InfraError;
