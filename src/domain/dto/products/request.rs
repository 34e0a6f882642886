//! 상품 요청 DTO
//!
//! 관리 화면의 폼은 숫자와 불리언을 문자열로 보내는 경우가 많아
//! 숫자 필드는 `"19.90"`, 불리언은 `"true"`도 허용합니다.

use serde::Deserialize;

use crate::core::errors::AppResult;
use crate::domain::entities::products::{
    ProductDraft, ProductImage, ProductLabel, ProductListOptions, ProductSortField,
};
use crate::domain::models::pagination::{PageRequest, SortOrder};
use crate::utils::string_utils::{
    deserialize_lenient_bool, deserialize_optional_f64, deserialize_optional_i32,
    deserialize_optional_string, deserialize_string_list, require_fields,
};

/// 상품 생성/수정 요청
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub sub_description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub sku: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub price_sale: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub quantity: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub taxes: Option<f64>,
    /// 명시적으로 보낸 경우에만 이미지 목록을 교체합니다.
    #[serde(default)]
    pub images: Option<Vec<ProductImage>>,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub colors: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub sizes: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub gender: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub category: Option<String>,
    #[serde(default)]
    pub new_label: Option<ProductLabel>,
    #[serde(default)]
    pub sale_label: Option<ProductLabel>,
    #[serde(default, deserialize_with = "deserialize_lenient_bool")]
    pub is_published: bool,
}

impl ProductRequest {
    /// 필수 필드(name, description, code, sku, price, quantity)를 검사하고
    /// 도메인 입력 값으로 변환합니다.
    ///
    /// 값이 아예 없는 경우만 누락으로 보며, `quantity: 0`은 유효합니다.
    pub fn into_draft(self) -> AppResult<ProductDraft> {
        require_fields(&[
            ("name", self.name.is_some()),
            ("description", self.description.is_some()),
            ("code", self.code.is_some()),
            ("sku", self.sku.is_some()),
            ("price", self.price.is_some()),
            ("quantity", self.quantity.is_some()),
        ])?;

        Ok(ProductDraft {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            sub_description: self.sub_description,
            code: self.code.unwrap_or_default(),
            sku: self.sku.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            price_sale: self.price_sale,
            quantity: self.quantity.unwrap_or_default(),
            taxes: self.taxes,
            images: self.images,
            colors: self.colors,
            sizes: self.sizes,
            tags: self.tags,
            gender: self.gender,
            category: self.category,
            new_label: self.new_label,
            sale_label: self.sale_label,
            is_published: self.is_published,
        })
    }
}

/// `GET /api/products/list` 쿼리 파라미터
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl ProductListQuery {
    pub fn to_options(&self) -> ProductListOptions {
        ProductListOptions {
            page: PageRequest::from_raw(self.page.as_deref(), self.limit.as_deref()),
            sort: ProductSortField::parse(self.sort.as_deref()),
            order: SortOrder::parse(self.order.as_deref()),
        }
    }
}

/// `GET /api/products/search` 쿼리 파라미터
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductSearchQuery {
    pub query: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ProductSearchQuery {
    /// 검색어 (없으면 빈 문자열, 전체 일치)
    pub fn term(&self) -> &str {
        self.query.as_deref().map(str::trim).unwrap_or("")
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_raw(self.page.as_deref(), self.limit.as_deref())
    }
}
