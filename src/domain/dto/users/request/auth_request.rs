use serde::Deserialize;

use crate::core::errors::AppResult;
use crate::utils::string_utils::{deserialize_optional_string, require_fields};

/// 로컬 로그인 요청 구조체
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,

    #[serde(default)]
    pub password: Option<String>,
}

impl LoginRequest {
    /// `(email, password)` 반환. 이메일은 소문자로 정규화됩니다.
    pub fn into_credentials(self) -> AppResult<(String, String)> {
        let password = self.password.filter(|p| !p.is_empty());

        require_fields(&[
            ("email", self.email.is_some()),
            ("password", password.is_some()),
        ])?;

        Ok((
            self.email.unwrap_or_default().to_lowercase(),
            password.unwrap_or_default(),
        ))
    }
}

/// 비밀번호 재설정 메일 요청
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForgotPasswordRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,
}

impl ForgotPasswordRequest {
    pub fn into_email(self) -> AppResult<String> {
        require_fields(&[("email", self.email.is_some())])?;
        Ok(self.email.unwrap_or_default().to_lowercase())
    }
}

/// 비밀번호 재설정 요청
///
/// 새 비밀번호는 `new_password`와 `newPassword` 두 가지 키를 모두 허용합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResetPasswordRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub token: Option<String>,

    #[serde(default, alias = "newPassword")]
    pub new_password: Option<String>,
}

impl ResetPasswordRequest {
    /// `(token, new_password)` 반환
    pub fn into_parts(self) -> AppResult<(String, String)> {
        let new_password = self.new_password.filter(|p| !p.is_empty());

        require_fields(&[
            ("token", self.token.is_some()),
            ("new_password", new_password.is_some()),
        ])?;

        Ok((self.token.unwrap_or_default(), new_password.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;

    #[test]
    fn test_login_requires_both_fields() {
        let request: LoginRequest = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        match request.into_credentials() {
            Err(AppError::MissingFields(fields)) => assert_eq!(fields, vec!["password"]),
            other => panic!("expected MissingFields, got {:?}", other),
        }
    }

    #[test]
    fn test_reset_accepts_camel_case_password() {
        let request: ResetPasswordRequest =
            serde_json::from_str(r#"{"token":"abc","newPassword":"secret"}"#).unwrap();
        assert_eq!(
            request.into_parts().unwrap(),
            ("abc".to_string(), "secret".to_string())
        );
    }

    #[test]
    fn test_forgot_password_normalizes_email() {
        let request: ForgotPasswordRequest =
            serde_json::from_str(r#"{"email":"  A@X.COM "}"#).unwrap();
        assert_eq!(request.into_email().unwrap(), "a@x.com");
    }
}
