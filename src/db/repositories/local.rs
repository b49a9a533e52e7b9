//! In-memory local repository implementation.
//!
//! This module provides a local implementation of the `ProductRepository`
//! trait suitable for unit testing and local development. All data is stored
//! in memory behind an `RwLock`, providing fast, deterministic, and isolated
//! execution.

use async_trait::async_trait;
use parking_lot::{RwLock, RwLockWriteGuard};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::{Page, PageRequest, ProductId, Sort, SortDirection, SortProperty};
use crate::db::repository::{ProductRepository, RepositoryError, RepositoryResult};
use crate::models::Product;

/// In-memory product repository.
///
/// Ideal for unit tests and local development that need isolation and speed.
/// Cloning is cheap and clones share the same underlying store.
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    products: HashMap<ProductId, Product>,

    // ID counter
    next_product_id: i64,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            products: HashMap::new(),
            next_product_id: 1,
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write();
        data.is_healthy = healthy;
    }

    /// Clear all data, keeping the health flag.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Get the number of products stored.
    pub fn product_count(&self) -> usize {
        self.data.read().products.len()
    }

    /// Acquire the store's write scope.
    ///
    /// The returned guard is the transaction for a write: mutations happen
    /// while it is held, and dropping it (on any exit path, normal or error)
    /// releases the scope.
    fn begin_write(&self) -> RwLockWriteGuard<'_, LocalData> {
        self.data.write()
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn compare_optional_f64(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x.total_cmp(&y),
    }
}

// `None` sorts before `Some` in ascending order; ties always break by id so
// repeated queries page through a stable sequence.
fn compare_products(a: &Product, b: &Product, sort: &Sort) -> Ordering {
    let by_property = match sort.property {
        SortProperty::Id => a.id.cmp(&b.id),
        SortProperty::Name => a.name.cmp(&b.name),
        SortProperty::Price => compare_optional_f64(a.price, b.price),
        SortProperty::Quantity => a.quantity.cmp(&b.quantity),
    };
    let directed = match sort.direction {
        SortDirection::Ascending => by_property,
        SortDirection::Descending => by_property.reverse(),
    };
    directed.then(a.id.cmp(&b.id))
}

#[async_trait]
impl ProductRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn save(&self, mut product: Product) -> RepositoryResult<Product> {
        let mut txn = self.begin_write();
        if !txn.is_healthy {
            return Err(RepositoryError::ConnectionError(
                "Database is not healthy".to_string(),
            ));
        }

        let id = match product.id {
            Some(id) => {
                // Reserve the counter past caller-supplied ids so later
                // inserts cannot collide.
                if id.value() >= txn.next_product_id {
                    txn.next_product_id = id.value().checked_add(1).ok_or_else(|| {
                        RepositoryError::ValidationError(format!(
                            "Product id {} is too large",
                            id
                        ))
                    })?;
                }
                id
            }
            None => {
                let id = ProductId::new(txn.next_product_id);
                txn.next_product_id += 1;
                id
            }
        };

        product.id = Some(id);
        txn.products.insert(id, product.clone());

        Ok(product)
    }

    async fn find_all(&self, page: &PageRequest) -> RepositoryResult<Page<Product>> {
        let data = self.data.read();

        let mut products: Vec<Product> = data.products.values().cloned().collect();
        products.sort_by(|a, b| compare_products(a, b, &page.sort));

        let total = products.len() as u64;
        let start = page.offset().min(products.len());
        let end = (start + page.size).min(products.len());
        let content = products[start..end].to_vec();

        Ok(Page::new(content, page.page, page.size, total))
    }

    async fn find_one(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        Ok(self.data.read().products.get(&id).cloned())
    }

    async fn delete(&self, id: ProductId) -> RepositoryResult<()> {
        let mut txn = self.begin_write();
        if !txn.is_healthy {
            return Err(RepositoryError::ConnectionError(
                "Database is not healthy".to_string(),
            ));
        }

        txn.products.remove(&id);
        Ok(())
    }
}
