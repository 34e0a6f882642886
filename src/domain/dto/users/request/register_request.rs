use serde::Deserialize;
use validator::Validate;

use crate::core::errors::AppResult;
use crate::utils::string_utils::{deserialize_optional_string, require_fields};

/// 회원 가입 요청 DTO
///
/// 네 필드 모두 필수이며, 비밀번호 길이/강도 규칙은 두지 않습니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    /// 비밀번호는 공백을 포함해 입력 그대로 사용합니다.
    #[serde(default)]
    pub password: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub first_name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub last_name: Option<String>,
}

/// 필수 필드와 형식 검증을 통과한 가입 입력 값
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterInput {
    /// 소문자로 정규화된 이메일
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl RegisterRequest {
    /// 필수 필드 검사 후 이메일 형식을 검증합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::MissingFields` - 누락된 필드 목록
    /// * `AppError::ValidationError` - 이메일 형식 오류
    pub fn into_input(self) -> AppResult<RegisterInput> {
        require_fields(&[
            ("email", self.email.is_some()),
            ("password", self.password.as_deref().is_some_and(|p| !p.is_empty())),
            ("first_name", self.first_name.is_some()),
            ("last_name", self.last_name.is_some()),
        ])?;

        self.validate()?;

        Ok(RegisterInput {
            email: self.email.unwrap_or_default().to_lowercase(),
            password: self.password.unwrap_or_default(),
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;

    fn parse(json: &str) -> RegisterRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_valid_request() {
        let input = parse(r#"{"email":" A@X.com ","password":"pw123","first_name":"A","last_name":"B"}"#)
            .into_input()
            .unwrap();

        assert_eq!(input.email, "a@x.com");
        assert_eq!(input.password, "pw123");
        assert_eq!(input.first_name, "A");
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let result = parse(r#"{"email":"a@x.com","password":"","last_name":"  "}"#).into_input();

        match result {
            Err(AppError::MissingFields(fields)) => {
                assert_eq!(fields, vec!["password", "first_name", "last_name"])
            }
            other => panic!("expected MissingFields, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_email_format() {
        let result = parse(r#"{"email":"not-an-email","password":"pw","first_name":"A","last_name":"B"}"#)
            .into_input();

        match result {
            Err(AppError::ValidationError(message)) => assert_eq!(message, "Invalid email format"),
            other => panic!("expected ValidationError, got {:?}", other),
        }
    }
}
