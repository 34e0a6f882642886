use serde::Serialize;

use crate::domain::entities::products::Product;
use crate::domain::models::pagination::Pagination;

/// 상품 목록/검색 응답
#[derive(Debug, Clone, Serialize)]
pub struct ProductPageResponse {
    pub products: Vec<Product>,
    pub pagination: Pagination,
}
