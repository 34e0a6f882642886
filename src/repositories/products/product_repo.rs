//! # 상품 리포지토리 구현
//!
//! 배열형 필드와 라벨은 이 파일의 [`ProductRow`]에서만 JSONB(`sqlx::types::Json`)로 다루고,
//! 밖으로는 타입이 있는 [`Product`]만 내보냅니다.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, Transaction};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::products::{
    Product, ProductDraft, ProductImage, ProductLabel, ProductListOptions,
};
use crate::domain::models::pagination::PageRequest;
use crate::repositories::{map_unique_violation, DUPLICATE_PRODUCT};

const PRODUCT_COLUMNS: &str = "id, name, description, sub_description, code, sku, price, \
     price_sale, quantity, taxes, images, colors, sizes, tags, gender, category, new_label, \
     sale_label, is_published, created_at, updated_at";

const SEARCH_CONDITION: &str = "name ILIKE $1 ESCAPE '\\' OR description ILIKE $1 ESCAPE '\\' \
     OR code ILIKE $1 ESCAPE '\\' OR sku ILIKE $1 ESCAPE '\\'";

/// 상품 데이터 액세스 트레이트
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 정렬/페이지 옵션에 따른 목록과 전체 개수
    async fn list(&self, options: ProductListOptions) -> AppResult<(Vec<Product>, i64)>;

    /// name/description/code/sku 부분 일치 검색 (대소문자 무시, id 순)
    async fn search(&self, term: &str, page: PageRequest) -> AppResult<(Vec<Product>, i64)>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>>;

    /// # Errors
    ///
    /// * `AppError::ValidationError` - code 또는 sku 중복
    async fn create(&self, draft: ProductDraft) -> AppResult<Product>;

    /// 상품이 없으면 `Ok(None)`.
    ///
    /// `draft.images`가 `None`이면 기존 이미지를 유지합니다.
    async fn update(&self, id: i64, draft: ProductDraft) -> AppResult<Option<Product>>;

    /// 삭제된 행이 있으면 `true`
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    sub_description: Option<String>,
    code: String,
    sku: String,
    price: f64,
    price_sale: Option<f64>,
    quantity: i32,
    taxes: Option<f64>,
    images: Json<Vec<ProductImage>>,
    colors: Json<Vec<String>>,
    sizes: Json<Vec<String>>,
    tags: Json<Vec<String>>,
    gender: Json<Vec<String>>,
    category: Option<String>,
    new_label: Option<Json<ProductLabel>>,
    sale_label: Option<Json<ProductLabel>>,
    is_published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            sub_description: row.sub_description,
            code: row.code,
            sku: row.sku,
            price: row.price,
            price_sale: row.price_sale,
            quantity: row.quantity,
            taxes: row.taxes,
            images: row.images.0,
            colors: row.colors.0,
            sizes: row.sizes.0,
            tags: row.tags.0,
            gender: row.gender.0,
            category: row.category,
            new_label: row.new_label.map(|label| label.0),
            sale_label: row.sale_label.map(|label| label.0),
            is_published: row.is_published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// `LIKE` 패턴용 이스케이프 후 `%...%`로 감쌉니다.
pub fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// PostgreSQL 기반 상품 리포지토리
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 같은 code 또는 sku를 가진 다른 상품이 있는지 확인합니다.
    async fn ensure_unique(
        tx: &mut Transaction<'_, Postgres>,
        draft: &ProductDraft,
        exclude_id: Option<i64>,
    ) -> AppResult<()> {
        let duplicate: Option<i64> = sqlx::query_scalar(
            "SELECT id FROM products WHERE (code = $1 OR sku = $2) \
             AND ($3::BIGINT IS NULL OR id <> $3) LIMIT 1",
        )
        .bind(&draft.code)
        .bind(&draft.sku)
        .bind(exclude_id)
        .fetch_optional(&mut **tx)
        .await?;

        match duplicate {
            Some(_) => Err(AppError::ValidationError(DUPLICATE_PRODUCT.to_string())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list(&self, options: ProductListOptions) -> AppResult<(Vec<Product>, i64)> {
        // 정렬 컬럼과 방향은 허용 목록 enum에서만 나옵니다.
        let sql = format!(
            "SELECT {} FROM products ORDER BY {} {}, id {} LIMIT $1 OFFSET $2",
            PRODUCT_COLUMNS,
            options.sort.column(),
            options.order.as_sql(),
            options.order.as_sql()
        );

        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(options.page.limit as i64)
            .bind(options.page.offset())
            .fetch_all(&self.pool)
            .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok((rows.into_iter().map(Product::from).collect(), total))
    }

    async fn search(&self, term: &str, page: PageRequest) -> AppResult<(Vec<Product>, i64)> {
        let pattern = like_pattern(term);

        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {} FROM products WHERE {} ORDER BY id LIMIT $2 OFFSET $3",
            PRODUCT_COLUMNS, SEARCH_CONDITION
        ))
        .bind(&pattern)
        .bind(page.limit as i64)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM products WHERE {}",
            SEARCH_CONDITION
        ))
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await?;

        Ok((rows.into_iter().map(Product::from).collect(), total))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {} FROM products WHERE id = $1",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    async fn create(&self, draft: ProductDraft) -> AppResult<Product> {
        let mut tx = self.pool.begin().await?;

        Self::ensure_unique(&mut tx, &draft, None).await?;

        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "INSERT INTO products (name, description, sub_description, code, sku, price, \
             price_sale, quantity, taxes, images, colors, sizes, tags, gender, category, \
             new_label, sale_label, is_published) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18) \
             RETURNING {}",
            PRODUCT_COLUMNS
        ))
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(&draft.sub_description)
        .bind(&draft.code)
        .bind(&draft.sku)
        .bind(draft.price)
        .bind(draft.price_sale)
        .bind(draft.quantity)
        .bind(draft.taxes)
        .bind(Json(draft.images.clone().unwrap_or_default()))
        .bind(Json(&draft.colors))
        .bind(Json(&draft.sizes))
        .bind(Json(&draft.tags))
        .bind(Json(&draft.gender))
        .bind(&draft.category)
        .bind(draft.new_label.as_ref().map(Json))
        .bind(draft.sale_label.as_ref().map(Json))
        .bind(draft.is_published)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_unique_violation(DUPLICATE_PRODUCT))?;

        tx.commit().await?;
        Ok(row.into())
    }

    async fn update(&self, id: i64, draft: ProductDraft) -> AppResult<Option<Product>> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<i64> =
            sqlx::query_scalar("SELECT id FROM products WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        if existing.is_none() {
            return Ok(None);
        }

        Self::ensure_unique(&mut tx, &draft, Some(id)).await?;

        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "UPDATE products SET name = $2, description = $3, sub_description = $4, code = $5, \
             sku = $6, price = $7, price_sale = $8, quantity = $9, taxes = $10, \
             images = COALESCE($11, images), colors = $12, sizes = $13, tags = $14, gender = $15, \
             category = $16, new_label = $17, sale_label = $18, is_published = $19, \
             updated_at = NOW() \
             WHERE id = $1 RETURNING {}",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(&draft.sub_description)
        .bind(&draft.code)
        .bind(&draft.sku)
        .bind(draft.price)
        .bind(draft.price_sale)
        .bind(draft.quantity)
        .bind(draft.taxes)
        .bind(draft.images.as_ref().map(Json))
        .bind(Json(&draft.colors))
        .bind(Json(&draft.sizes))
        .bind(Json(&draft.tags))
        .bind(Json(&draft.gender))
        .bind(&draft.category)
        .bind(draft.new_label.as_ref().map(Json))
        .bind(draft.sale_label.as_ref().map(Json))
        .bind(draft.is_published)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_unique_violation(DUPLICATE_PRODUCT))?;

        tx.commit().await?;
        Ok(Some(row.into()))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
