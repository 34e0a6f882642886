use serde::Deserialize;

use crate::utils::string_utils::deserialize_optional_string;

/// 토큰 갱신 요청 DTO
///
/// 클라이언트별로 다른 키(`refresh_token`, `refreshToken`, `refresh`)를 모두 허용합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RefreshTokenRequest {
    #[serde(
        default,
        alias = "refreshToken",
        alias = "refresh",
        deserialize_with = "deserialize_optional_string"
    )]
    pub refresh_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_aliases() {
        for body in [
            r#"{"refresh_token":"t"}"#,
            r#"{"refreshToken":"t"}"#,
            r#"{"refresh":"t"}"#,
        ] {
            let request: RefreshTokenRequest = serde_json::from_str(body).unwrap();
            assert_eq!(request.refresh_token.as_deref(), Some("t"));
        }
    }

    #[test]
    fn test_missing_token_is_none() {
        let request: RefreshTokenRequest = serde_json::from_str("{}").unwrap();
        assert!(request.refresh_token.is_none());
    }
}
