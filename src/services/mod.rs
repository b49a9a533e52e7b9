//! Service layer for business logic and orchestration.
//!
//! This module sits between the HTTP handlers and the repository. It owns
//! DTO/entity mapping and the transactional scoping of write operations;
//! handlers never touch the repository directly.

pub mod mapper;
pub mod product;

pub use mapper::{EntityMapper, ProductMapper};
pub use product::ProductService;
