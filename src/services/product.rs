//! Product service: CRUD orchestration over the repository.
//!
//! Mirrors the repository surface but speaks DTOs on both sides. Reads go
//! straight through; writes run inside the repository's write scope.

use std::sync::Arc;

use log::debug;

use crate::api::{Page, PageRequest, ProductDto, ProductId};
use crate::db::{ProductRepository, RepositoryResult};
use crate::models::Product;

use super::mapper::{EntityMapper, ProductMapper};

/// Business service for products.
///
/// The repository and mapper are injected as trait objects at construction
/// time; there is no global repository instance behind this type.
#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
    mapper: Arc<dyn EntityMapper<ProductDto, Product>>,
}

impl ProductService {
    pub fn new(
        repository: Arc<dyn ProductRepository>,
        mapper: Arc<dyn EntityMapper<ProductDto, Product>>,
    ) -> Self {
        ProductService { repository, mapper }
    }

    /// Convenience constructor wiring in the stock [`ProductMapper`].
    pub fn with_default_mapper(repository: Arc<dyn ProductRepository>) -> Self {
        ProductService::new(repository, Arc::new(ProductMapper))
    }

    /// Save a product and return the persisted DTO.
    ///
    /// The repository assigns an id when the DTO carries none, so the
    /// returned DTO always has `id` populated.
    pub async fn save(&self, dto: ProductDto) -> RepositoryResult<ProductDto> {
        debug!("Request to save product: {:?}", dto);
        let entity = self.mapper.to_entity(dto);
        let saved = self.repository.save(entity).await?;
        Ok(self.mapper.to_dto(saved))
    }

    /// Return one page of products.
    ///
    /// Element order and page metadata (total count, page index, size) come
    /// through from the repository unchanged.
    pub async fn find_all(&self, page: &PageRequest) -> RepositoryResult<Page<ProductDto>> {
        debug!("Request to get all products: {:?}", page);
        let entities = self.repository.find_all(page).await?;
        Ok(entities.map(|entity| self.mapper.to_dto(entity)))
    }

    /// Look up a single product; `None` when the id is not stored.
    pub async fn find_one(&self, id: ProductId) -> RepositoryResult<Option<ProductDto>> {
        debug!("Request to get product: {}", id);
        let entity = self.repository.find_one(id).await?;
        Ok(entity.map(|entity| self.mapper.to_dto(entity)))
    }

    /// Delete a product by id. Deleting an absent id succeeds.
    pub async fn delete(&self, id: ProductId) -> RepositoryResult<()> {
        debug!("Request to delete product: {}", id);
        self.repository.delete(id).await
    }

    /// Check whether the backing store is reachable.
    pub async fn health_check(&self) -> RepositoryResult<bool> {
        self.repository.health_check().await
    }
}
