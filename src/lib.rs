//! # Portal Rust Backend
//!
//! CRUD backend for the portal's product catalog.
//!
//! This crate provides a Rust-based backend exposing the `Produto` entity
//! over a REST API via Axum, with the alert-header and pagination-header
//! conventions the portal frontend expects.
//!
//! ## Features
//!
//! - **Entity CRUD**: Create, update, paged listing, lookup and deletion of
//!   products
//! - **Mapper Boundary**: Explicit DTO ↔ entity conversion behind a trait
//! - **Repository Pattern**: Storage behind an async trait with an
//!   in-memory implementation
//! - **REST Conventions**: Creation/update/deletion alert headers, `Link`
//!   pagination headers, empty-body 404 lookups
//! - **HTTP API**: RESTful endpoints for the frontend
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier, DTO and pagination types shared across layers
//! - [`models`]: Persisted entity types
//! - [`db`]: Repository pattern, storage backends and configuration
//! - [`services`]: Business logic between handlers and the repository
//! - [`http`]: Axum-based HTTP server, handlers and REST helpers

pub mod api;

pub mod db;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
