//! Database implementations

pub mod manager;
pub mod owner_repository;
pub mod pet_repository;
pub mod pool;
pub mod vet_repository;
pub mod visit_repository;

pub(crate) mod rows;

pub use manager::*;
pub use owner_repository::*;
pub use pet_repository::*;
pub use pool::*;
pub use vet_repository::*;
pub use visit_repository::*;
