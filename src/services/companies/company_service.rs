use std::sync::Arc;

use log::info;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::common::DeletedResponse;
use crate::domain::entities::companies::{Company, CompanyDraft};
use crate::repositories::CompanyRepository;

/// 회사 CRUD 서비스 (인증 필요)
pub struct CompanyService {
    companies: Arc<dyn CompanyRepository>,
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Company with id {} does not exist", id))
}

impl CompanyService {
    pub fn new(companies: Arc<dyn CompanyRepository>) -> Self {
        Self { companies }
    }

    pub async fn list(&self) -> AppResult<Vec<Company>> {
        self.companies.list().await
    }

    pub async fn get(&self, id: i64) -> AppResult<Company> {
        self.companies.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, draft: CompanyDraft) -> AppResult<Company> {
        let company = self.companies.create(draft).await?;
        info!("🏢 회사 생성: id={} name={}", company.id, company.name);
        Ok(company)
    }

    pub async fn update(&self, id: i64, draft: CompanyDraft) -> AppResult<Company> {
        self.companies
            .update(id, draft)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i64) -> AppResult<DeletedResponse> {
        if !self.companies.delete(id).await? {
            return Err(not_found(id));
        }

        info!("회사 삭제: id={}", id);
        Ok(DeletedResponse {
            message: "Company deleted successfully".to_string(),
            id,
        })
    }
}
