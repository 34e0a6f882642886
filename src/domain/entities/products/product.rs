//! Product Entity Implementation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::pagination::{PageRequest, SortOrder};

/// 상품 이미지 참조
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
}

/// "NEW", "SALE" 등 상품 카드에 표시되는 라벨
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductLabel {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub content: String,
}

/// 상품 엔티티
///
/// `code`와 `sku`는 전체 상품에서 각각 유일합니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub sub_description: Option<String>,
    pub code: String,
    pub sku: String,
    pub price: f64,
    pub price_sale: Option<f64>,
    pub quantity: i32,
    pub taxes: Option<f64>,
    pub images: Vec<ProductImage>,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub tags: Vec<String>,
    pub gender: Vec<String>,
    pub category: Option<String>,
    pub new_label: Option<ProductLabel>,
    pub sale_label: Option<ProductLabel>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 필수 필드 검증을 통과한 상품 입력 값
///
/// `images`가 `None`이면 수정 시 기존 이미지를 유지하고, 생성 시 빈 목록으로 저장합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub sub_description: Option<String>,
    pub code: String,
    pub sku: String,
    pub price: f64,
    pub price_sale: Option<f64>,
    pub quantity: i32,
    pub taxes: Option<f64>,
    pub images: Option<Vec<ProductImage>>,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub tags: Vec<String>,
    pub gender: Vec<String>,
    pub category: Option<String>,
    pub new_label: Option<ProductLabel>,
    pub sale_label: Option<ProductLabel>,
    pub is_published: bool,
}

/// 목록 정렬 기준 (허용 목록)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSortField {
    #[default]
    CreatedAt,
    Name,
    Price,
    Quantity,
}

impl ProductSortField {
    /// 쿼리 파라미터를 정렬 기준으로 변환합니다.
    ///
    /// 허용되지 않은 값은 에러 없이 `created_at`으로 대체됩니다.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("name") => Self::Name,
            Some("price") => Self::Price,
            Some("quantity") => Self::Quantity,
            _ => Self::CreatedAt,
        }
    }

    /// SQL `ORDER BY`에 그대로 사용할 수 있는 컬럼명
    pub fn column(&self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::Name => "name",
            Self::Price => "price",
            Self::Quantity => "quantity",
        }
    }
}

/// 상품 목록 조회 옵션
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProductListOptions {
    pub page: PageRequest,
    pub sort: ProductSortField,
    pub order: SortOrder,
}
