use serde::Deserialize;
use validator::Validate;

use crate::core::errors::AppResult;
use crate::domain::entities::companies::CompanyDraft;
use crate::utils::string_utils::{deserialize_optional_string, require_fields};

/// 회사 생성/수정 요청
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CompanyRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 255, message = "Company name is too long"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 255, message = "Industry is too long"))]
    pub industry: Option<String>,
}

impl CompanyRequest {
    pub fn into_draft(self) -> AppResult<CompanyDraft> {
        require_fields(&[("name", self.name.is_some())])?;
        self.validate()?;

        Ok(CompanyDraft {
            name: self.name.unwrap_or_default(),
            industry: self.industry,
        })
    }
}
