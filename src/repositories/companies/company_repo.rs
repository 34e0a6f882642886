use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::errors::AppResult;
use crate::domain::entities::companies::{Company, CompanyDraft};

/// 회사 데이터 액세스 트레이트
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Company>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Company>>;

    async fn create(&self, draft: CompanyDraft) -> AppResult<Company>;

    /// 회사가 없으면 `Ok(None)`
    async fn update(&self, id: i64, draft: CompanyDraft) -> AppResult<Option<Company>>;

    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// PostgreSQL 기반 회사 리포지토리
#[derive(Clone)]
pub struct PgCompanyRepository {
    pool: PgPool,
}

impl PgCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyRepository for PgCompanyRepository {
    async fn list(&self) -> AppResult<Vec<Company>> {
        let companies = sqlx::query_as::<_, Company>(
            "SELECT id, name, industry, created_at, updated_at FROM companies ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(companies)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Company>> {
        let company = sqlx::query_as::<_, Company>(
            "SELECT id, name, industry, created_at, updated_at FROM companies WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(company)
    }

    async fn create(&self, draft: CompanyDraft) -> AppResult<Company> {
        let company = sqlx::query_as::<_, Company>(
            "INSERT INTO companies (name, industry) VALUES ($1, $2) \
             RETURNING id, name, industry, created_at, updated_at",
        )
        .bind(&draft.name)
        .bind(&draft.industry)
        .fetch_one(&self.pool)
        .await?;
        Ok(company)
    }

    async fn update(&self, id: i64, draft: CompanyDraft) -> AppResult<Option<Company>> {
        let company = sqlx::query_as::<_, Company>(
            "UPDATE companies SET name = $2, industry = $3, updated_at = NOW() WHERE id = $1 \
             RETURNING id, name, industry, created_at, updated_at",
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.industry)
        .fetch_optional(&self.pool)
        .await?;
        Ok(company)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
