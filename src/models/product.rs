//! Product entity as the persistence layer sees it.

use crate::api::ProductId;

/// A stored product.
///
/// `id` is `None` until the repository has persisted the entity. The
/// wire-facing counterpart is [`crate::api::ProductDto`]; conversions in
/// both directions go through [`crate::services::EntityMapper`].
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Option<ProductId>,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
}
