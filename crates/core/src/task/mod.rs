//! Task module
//!
//! This module contains the task record, its repository interface and the
//! storage-backed implementation.

mod model;
mod repository;
mod store;

pub use model::*;
pub use repository::TaskRepository;
pub use store::TaskStore;
