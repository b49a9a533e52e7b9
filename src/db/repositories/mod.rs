//! Repository implementations module.
//!
//! This module contains implementations of the `ProductRepository` trait:
//! - `local`: In-memory implementation for unit testing and local development
pub mod local;

pub use local::LocalRepository;
