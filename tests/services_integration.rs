use std::sync::Arc;

use portal_rust::api::{PageRequest, ProductDto, ProductId, Sort, SortProperty};
use portal_rust::db::LocalRepository;
use portal_rust::models::Product;
use portal_rust::services::{EntityMapper, ProductService};

fn create_dto(name: &str) -> ProductDto {
    ProductDto {
        id: None,
        name: name.to_string(),
        description: None,
        price: None,
        quantity: None,
    }
}

fn local_service() -> ProductService {
    ProductService::with_default_mapper(Arc::new(LocalRepository::new()))
}

#[tokio::test]
async fn test_health_check() {
    let service = local_service();
    let result = service.health_check().await;

    assert!(result.is_ok());
    assert!(result.unwrap());
}

#[tokio::test]
async fn test_save_assigns_id() {
    let service = local_service();

    let saved = service.save(create_dto("First")).await.unwrap();
    assert_eq!(saved.id, Some(ProductId::new(1)));
    assert_eq!(saved.name, "First");

    let saved = service.save(create_dto("Second")).await.unwrap();
    assert_eq!(saved.id, Some(ProductId::new(2)));
}

#[tokio::test]
async fn test_save_preserves_all_fields() {
    let service = local_service();

    let dto = ProductDto {
        id: None,
        name: "Complete".to_string(),
        description: Some("Every field set".to_string()),
        price: Some(19.5),
        quantity: Some(7),
    };

    let saved = service.save(dto).await.unwrap();
    assert_eq!(saved.description.as_deref(), Some("Every field set"));
    assert_eq!(saved.price, Some(19.5));
    assert_eq!(saved.quantity, Some(7));
}

#[tokio::test]
async fn test_save_with_id_updates_existing() {
    let service = local_service();

    let mut saved = service.save(create_dto("Original")).await.unwrap();
    saved.name = "Renamed".to_string();

    let updated = service.save(saved.clone()).await.unwrap();
    assert_eq!(updated.id, saved.id);

    let found = service.find_one(ProductId::new(1)).await.unwrap().unwrap();
    assert_eq!(found.name, "Renamed");
}

#[tokio::test]
async fn test_find_all_returns_dto_page() {
    let service = local_service();
    for name in ["Gamma", "Alpha", "Beta"] {
        service.save(create_dto(name)).await.unwrap();
    }

    let request = PageRequest::new(0, 2, Sort::ascending(SortProperty::Name));
    let page = service.find_all(&request).await.unwrap();

    assert_eq!(page.total_elements, 3);
    assert_eq!(page.number, 0);
    assert_eq!(page.size, 2);

    let names: Vec<&str> = page.content.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Beta"]);
}

#[tokio::test]
async fn test_find_one_missing_is_none() {
    let service = local_service();
    let found = service.find_one(ProductId::new(404)).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_delete_removes_product() {
    let service = local_service();
    let saved = service.save(create_dto("Doomed")).await.unwrap();
    let id = saved.id.unwrap();

    service.delete(id).await.unwrap();
    assert!(service.find_one(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_missing_id_succeeds() {
    let service = local_service();
    let result = service.delete(ProductId::new(12345)).await;
    assert!(result.is_ok());
}

/// Mapper that tags names on the way out, proving the service uses whatever
/// mapper it was constructed with.
struct TaggingMapper;

impl EntityMapper<ProductDto, Product> for TaggingMapper {
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
            name: format!("mapped:{}", entity.name),
            description: entity.description,
            price: entity.price,
            quantity: entity.quantity,
        }
    }
}

#[tokio::test]
async fn test_injected_mapper_is_used() {
    let service = ProductService::new(
        Arc::new(LocalRepository::new()),
        Arc::new(TaggingMapper),
    );

    let saved = service.save(create_dto("Widget")).await.unwrap();
    assert_eq!(saved.name, "mapped:Widget");
}

#[tokio::test]
async fn test_unhealthy_repository_error_surfaces() {
    let repository = Arc::new(LocalRepository::new());
    let service = ProductService::with_default_mapper(repository.clone());

    repository.set_healthy(false);
    assert!(service.save(create_dto("Never")).await.is_err());

    repository.set_healthy(true);
    assert!(service.save(create_dto("Now")).await.is_ok());
}
