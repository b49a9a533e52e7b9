//! DTO/entity mapping.
//!
//! Conversions between wire DTOs and stored entities go through the
//! [`EntityMapper`] contract so the service layer can be handed any mapping
//! strategy at construction time instead of reaching for a fixed one.

use crate::api::ProductDto;
use crate::models::Product;

/// Bidirectional mapper between a DTO type `D` and an entity type `E`.
///
/// Both directions are total: mapping never fails and never drops a field.
/// The list forms map element-wise and preserve order.
pub trait EntityMapper<D, E>: Send + Sync {
    /// Converts a DTO into its entity representation.
    fn to_entity(&self, dto: D) -> E;

    /// Converts an entity into its DTO representation.
    fn to_dto(&self, entity: E) -> D;

    /// Converts a list of DTOs into entities, preserving order.
    fn to_entity_list(&self, dtos: Vec<D>) -> Vec<E> {
        dtos.into_iter().map(|dto| self.to_entity(dto)).collect()
    }

    /// Converts a list of entities into DTOs, preserving order.
    fn to_dto_list(&self, entities: Vec<E>) -> Vec<D> {
        entities
            .into_iter()
            .map(|entity| self.to_dto(entity))
            .collect()
    }
}

/// Field-for-field mapper for products.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductMapper;

impl EntityMapper<ProductDto, Product> for ProductMapper {
    fn to_entity(&self, dto: ProductDto) -> Product {
        Product {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            price: dto.price,
            quantity: dto.quantity,
        }
    }

    fn to_dto(&self, entity: Product) -> ProductDto {
        ProductDto {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            price: entity.price,
            quantity: entity.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ProductId;

    fn sample_dto() -> ProductDto {
        ProductDto {
            id: Some(ProductId::new(1)),
            name: "Widget".to_string(),
            description: Some("A widget".to_string()),
            price: Some(9.99),
            quantity: Some(3),
        }
    }

    #[test]
    fn test_round_trip_is_identity() {
        let mapper = ProductMapper;
        let dto = sample_dto();

        let back = mapper.to_dto(mapper.to_entity(dto.clone()));
        assert_eq!(back, dto);
    }

    #[test]
    fn test_entity_round_trip_is_identity() {
        let mapper = ProductMapper;
        let entity = mapper.to_entity(sample_dto());

        let back = mapper.to_entity(mapper.to_dto(entity.clone()));
        assert_eq!(back, entity);
    }

    #[test]
    fn test_to_entity_keeps_missing_id() {
        let mapper = ProductMapper;
        let dto = ProductDto {
            id: None,
            name: "Widget".to_string(),
            description: None,
            price: None,
            quantity: None,
        };

        let entity = mapper.to_entity(dto);
        assert_eq!(entity.id, None);
        assert_eq!(entity.name, "Widget");
    }

    #[test]
    fn test_list_forms_preserve_order() {
        let mapper = ProductMapper;
        let dtos: Vec<ProductDto> = (1..=3)
            .map(|n| ProductDto {
                id: Some(ProductId::new(n)),
                name: format!("Product {}", n),
                description: None,
                price: None,
                quantity: None,
            })
            .collect();

        let entities = mapper.to_entity_list(dtos.clone());
        let names: Vec<&str> = entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Product 1", "Product 2", "Product 3"]);

        let back = mapper.to_dto_list(entities);
        assert_eq!(back, dtos);
    }
}
