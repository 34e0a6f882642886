//! # 상품 서비스
//!
//! 목록/검색/상세 조회는 공개, 생성/수정/삭제는 인증된 사용자만 호출합니다.
//! 필수 필드 검사는 DTO에서 끝나고, 이 계층은 존재 여부와 페이지 계산을 담당합니다.

use std::sync::Arc;

use log::info;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::common::DeletedResponse;
use crate::domain::dto::products::ProductPageResponse;
use crate::domain::entities::products::{Product, ProductDraft, ProductListOptions};
use crate::domain::models::pagination::{PageRequest, Pagination};
use crate::repositories::ProductRepository;

pub struct ProductService {
    products: Arc<dyn ProductRepository>,
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Product with id {} does not exist", id))
}

impl ProductService {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    /// 정렬/페이지 목록
    pub async fn list(&self, options: ProductListOptions) -> AppResult<ProductPageResponse> {
        let page = options.page;
        let (products, total) = self.products.list(options).await?;

        Ok(ProductPageResponse {
            products,
            pagination: Pagination::new(total, page),
        })
    }

    /// 부분 일치 검색. 빈 검색어는 전체 상품과 일치합니다.
    pub async fn search(&self, term: &str, page: PageRequest) -> AppResult<ProductPageResponse> {
        let (products, total) = self.products.search(term, page).await?;

        Ok(ProductPageResponse {
            products,
            pagination: Pagination::new(total, page),
        })
    }

    pub async fn get(&self, id: i64) -> AppResult<Product> {
        self.products.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// # Errors
    ///
    /// * `AppError::ValidationError` - code 또는 sku 중복
    pub async fn create(&self, draft: ProductDraft) -> AppResult<Product> {
        let product = self.products.create(draft).await?;
        info!("🛒 상품 생성: id={} code={}", product.id, product.code);
        Ok(product)
    }

    pub async fn update(&self, id: i64, draft: ProductDraft) -> AppResult<Product> {
        let product = self
            .products
            .update(id, draft)
            .await?
            .ok_or_else(|| not_found(id))?;

        info!("상품 수정: id={}", product.id);
        Ok(product)
    }

    pub async fn delete(&self, id: i64) -> AppResult<DeletedResponse> {
        if !self.products.delete(id).await? {
            return Err(not_found(id));
        }

        info!("🗑️ 상품 삭제: id={}", id);
        Ok(DeletedResponse {
            message: "Product deleted successfully".to_string(),
            id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::products::{ProductImage, ProductSortField};
    use crate::domain::models::pagination::SortOrder;
    use crate::repositories::memory::InMemoryProductRepository;

    fn service() -> ProductService {
        ProductService::new(Arc::new(InMemoryProductRepository::default()))
    }

    fn draft(code: &str, name: &str, price: f64) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            description: format!("{} description", name),
            sub_description: None,
            code: code.to_string(),
            sku: format!("SKU-{}", code),
            price,
            price_sale: None,
            quantity: 0,
            taxes: None,
            images: None,
            colors: vec!["black".to_string()],
            sizes: Vec::new(),
            tags: Vec::new(),
            gender: Vec::new(),
            category: None,
            new_label: None,
            sale_label: None,
            is_published: false,
        }
    }

    fn options(sort: Option<&str>, order: Option<&str>, limit: &str) -> ProductListOptions {
        ProductListOptions {
            page: PageRequest::from_raw(Some("1"), Some(limit)),
            sort: ProductSortField::parse(sort),
            order: SortOrder::parse(order),
        }
    }

    #[actix_web::test]
    async fn test_create_and_get() {
        let service = service();
        let created = service.create(draft("P1", "Tee", 19.9)).await.unwrap();

        let found = service.get(created.id).await.unwrap();
        assert_eq!(found.code, "P1");
        assert!(found.images.is_empty());
        assert_eq!(found.quantity, 0);
    }

    #[actix_web::test]
    async fn test_duplicate_code_or_sku() {
        let service = service();
        service.create(draft("P1", "Tee", 19.9)).await.unwrap();

        let mut same_sku = draft("P2", "Hoodie", 39.0);
        same_sku.sku = "SKU-P1".to_string();

        for duplicate in [draft("P1", "Other", 1.0), same_sku] {
            match service.create(duplicate).await {
                Err(AppError::ValidationError(message)) => {
                    assert_eq!(message, "Product with this code or SKU already exists")
                }
                other => panic!("expected duplicate error, got {:?}", other),
            }
        }
    }

    #[actix_web::test]
    async fn test_update_keeps_images_unless_given() {
        let service = service();
        let mut initial = draft("P1", "Tee", 19.9);
        initial.images = Some(vec![ProductImage { url: "/img/tee.png".to_string() }]);
        let created = service.create(initial).await.unwrap();

        // 자기 자신의 code/sku는 중복으로 보지 않음
        let updated = service
            .update(created.id, draft("P1", "Tee v2", 21.0))
            .await
            .unwrap();
        assert_eq!(updated.name, "Tee v2");
        assert_eq!(updated.images.len(), 1);

        let mut cleared = draft("P1", "Tee v3", 21.0);
        cleared.images = Some(Vec::new());
        let updated = service.update(created.id, cleared).await.unwrap();
        assert!(updated.images.is_empty());
    }

    #[actix_web::test]
    async fn test_update_rejects_other_products_code() {
        let service = service();
        service.create(draft("P1", "Tee", 19.9)).await.unwrap();
        let second = service.create(draft("P2", "Hoodie", 39.0)).await.unwrap();

        let result = service.update(second.id, draft("P1", "Hoodie", 39.0)).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_missing_product() {
        let service = service();

        match service.get(99).await {
            Err(AppError::NotFound(message)) => assert_eq!(message, "Product with id 99 does not exist"),
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert!(matches!(
            service.update(99, draft("P1", "Tee", 1.0)).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(service.delete(99).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_delete() {
        let service = service();
        let created = service.create(draft("P1", "Tee", 19.9)).await.unwrap();

        let response = service.delete(created.id).await.unwrap();
        assert_eq!(response.id, created.id);
        assert_eq!(response.message, "Product deleted successfully");
        assert!(service.get(created.id).await.is_err());
    }

    #[actix_web::test]
    async fn test_list_sorting_and_pagination() {
        let service = service();
        service.create(draft("P1", "Cap", 30.0)).await.unwrap();
        service.create(draft("P2", "Apron", 10.0)).await.unwrap();
        service.create(draft("P3", "Boot", 20.0)).await.unwrap();

        let page = service.list(options(Some("price"), Some("DESC"), "2")).await.unwrap();
        let names: Vec<_> = page.products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Cap", "Boot"]);
        assert_eq!(page.pagination.total, 3);
        assert_eq!(page.pagination.total_pages, 2);

        let page = service.list(options(Some("name"), None, "10")).await.unwrap();
        let names: Vec<_> = page.products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Apron", "Boot", "Cap"]);
    }

    #[actix_web::test]
    async fn test_unknown_sort_falls_back_to_created_at() {
        let service = service();
        service.create(draft("P1", "Cap", 30.0)).await.unwrap();
        service.create(draft("P2", "Apron", 10.0)).await.unwrap();

        let fallback = service
            .list(options(Some("password_hash; DROP TABLE"), None, "10"))
            .await
            .unwrap();
        let by_created = service.list(options(Some("created_at"), None, "10")).await.unwrap();

        let ids = |page: &ProductPageResponse| page.products.iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids(&fallback), ids(&by_created));
    }

    #[actix_web::test]
    async fn test_search() {
        let service = service();
        service.create(draft("TEE-1", "Cotton Tee", 19.9)).await.unwrap();
        service.create(draft("HD-1", "Hoodie", 39.0)).await.unwrap();

        let page = service
            .search("cotton", PageRequest::from_raw(None, None))
            .await
            .unwrap();
        assert_eq!(page.products.len(), 1);
        assert_eq!(page.products[0].code, "TEE-1");

        let page = service.search("", PageRequest::from_raw(None, None)).await.unwrap();
        assert_eq!(page.pagination.total, 2);

        let page = service.search("50%", PageRequest::from_raw(None, None)).await.unwrap();
        assert_eq!(page.pagination.total, 0);
        assert_eq!(page.pagination.total_pages, 0);
    }
}
