//! Repository trait for abstracting product storage.
//!
//! This trait defines the interface for all product storage operations,
//! allowing different implementations (in-memory, SQL, etc.) to be swapped
//! via dependency injection.

use async_trait::async_trait;

use crate::api::{Page, PageRequest, ProductId};
use crate::models::Product;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Data validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<String> for RepositoryError {
    fn from(s: String) -> Self {
        RepositoryError::InternalError(s)
    }
}

impl From<&str> for RepositoryError {
    fn from(s: &str) -> Self {
        RepositoryError::InternalError(s.to_string())
    }
}

/// Repository trait for product database operations.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust and allow
/// sharing across threads.
///
/// # Error Handling
/// All methods return `RepositoryResult<T>` which wraps either the expected
/// return type or a `RepositoryError` describing what went wrong.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Check if the backing store is healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if the store is healthy
    /// - `Ok(false)` if the store is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Persist a product.
    ///
    /// Inserts when the entity has no id (assigning the next sequential one)
    /// and upserts at the given id otherwise. An id the counter cannot be
    /// reserved past (`i64::MAX`) is rejected as a validation error.
    ///
    /// # Returns
    /// * `Ok(Product)` - The stored entity, id always populated
    /// * `Err(RepositoryError)` - If the operation fails
    async fn save(&self, product: Product) -> RepositoryResult<Product>;

    /// Fetch one page of products.
    ///
    /// Ordering follows the request's sort; `total_elements` counts the
    /// whole store, not just this page.
    async fn find_all(&self, page: &PageRequest) -> RepositoryResult<Page<Product>>;

    /// Fetch a single product by id.
    ///
    /// # Returns
    /// * `Ok(Some(Product))` - If the product exists
    /// * `Ok(None)` - If it does not (absence is not an error)
    /// * `Err(RepositoryError)` - If the operation fails
    async fn find_one(&self, id: ProductId) -> RepositoryResult<Option<Product>>;

    /// Delete a product by id. Deleting an absent id is a no-op.
    async fn delete(&self, id: ProductId) -> RepositoryResult<()>;
}
