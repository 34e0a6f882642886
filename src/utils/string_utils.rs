//! # 문자열 및 요청 필드 유틸리티
//!
//! 요청 본문의 필드를 정리하고, 필수 필드 누락을 검사하며,
//! 폼 기반 클라이언트가 보내는 "숫자 문자열"이나 `"true"` 같은 값을
//! 관대하게 역직렬화하는 serde 헬퍼들입니다.
//!
//! 모든 헬퍼는 `#[serde(default, deserialize_with = "...")]` 형태로 사용합니다.

use serde::{Deserialize, Deserializer};
use serde::de::Error as DeError;
use serde_json::Value;

use crate::core::errors::{AppError, AppResult};

/// 필수 필드 누락 검사
///
/// `(필드명, 값 존재 여부)` 목록을 받아 누락된 필드가 하나라도 있으면
/// 누락된 필드 전체를 담은 `AppError::MissingFields`를 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// require_fields(&[
///     ("email", req.email.is_some()),
///     ("password", req.password.is_some()),
/// ])?;
/// ```
pub fn require_fields(fields: &[(&str, bool)]) -> AppResult<()> {
    let missing: Vec<String> = fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| name.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::MissingFields(missing))
    }
}

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// 빈 문자열이나 공백만 있는 문자열은 None, 그 외에는 앞뒤 공백을 제거한 값입니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 숫자 또는 숫자 문자열을 `f64`로 역직렬화합니다.
///
/// `null`, 빈 문자열은 None입니다.
pub fn deserialize_optional_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| D::Error::custom("number out of range")),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid number: {}", s))),
        Some(other) => Err(D::Error::custom(format!("expected a number, got {}", other))),
    }
}

/// 정수 또는 정수 문자열을 `i32`로 역직렬화합니다.
///
/// 소수는 버림 처리합니다.
pub fn deserialize_optional_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .ok_or_else(|| D::Error::custom("number out of range"))?,
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().map(|f| f.trunc() as i64))
                .ok_or_else(|| D::Error::custom(format!("invalid integer: {}", s)))?
        }
        Some(other) => return Err(D::Error::custom(format!("expected an integer, got {}", other))),
    };

    i32::try_from(number)
        .map(Some)
        .map_err(|_| D::Error::custom("integer out of range"))
}

/// `true` 또는 `"true"`만 참으로 취급하는 불리언 역직렬화
pub fn deserialize_lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}

/// 문자열 배열 역직렬화
///
/// 배열 외에 JSON 배열이 인코딩된 문자열(`"[\"red\",\"blue\"]"`)도 허용하며,
/// `null`이나 빈 문자열은 빈 목록이 됩니다.
pub fn deserialize_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(Vec::new()),
        Some(Value::String(s)) => serde_json::from_str::<Value>(&s)
            .map_err(|_| D::Error::custom(format!("expected a list, got {}", s)))?,
        Some(other) => other,
    };

    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                other => Err(D::Error::custom(format!("expected a string, got {}", other))),
            })
            .collect(),
        other => Err(D::Error::custom(format!("expected a list, got {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        name: Option<String>,
        #[serde(default, deserialize_with = "deserialize_optional_f64")]
        price: Option<f64>,
        #[serde(default, deserialize_with = "deserialize_optional_i32")]
        quantity: Option<i32>,
        #[serde(default, deserialize_with = "deserialize_lenient_bool")]
        is_published: bool,
        #[serde(default, deserialize_with = "deserialize_string_list")]
        tags: Vec<String>,
    }

    fn parse(json: &str) -> Form {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_require_fields_lists_every_missing_field() {
        assert!(require_fields(&[("email", true), ("password", true)]).is_ok());

        match require_fields(&[("email", false), ("password", true), ("first_name", false)]) {
            Err(AppError::MissingFields(fields)) => assert_eq!(fields, vec!["email", "first_name"]),
            other => panic!("expected MissingFields, got {:?}", other),
        }
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_missing_fields_default() {
        let form = parse("{}");
        assert_eq!(form.name, None);
        assert_eq!(form.price, None);
        assert_eq!(form.quantity, None);
        assert!(!form.is_published);
        assert!(form.tags.is_empty());
    }

    #[test]
    fn test_blank_string_is_none() {
        let form = parse(r#"{"name":"  ","price":"","quantity":" "}"#);
        assert_eq!(form.name, None);
        assert_eq!(form.price, None);
        assert_eq!(form.quantity, None);
    }

    #[test]
    fn test_numbers_accept_numeric_strings() {
        let form = parse(r#"{"name":"  Tee ","price":"19.90","quantity":"5"}"#);
        assert_eq!(form.name.as_deref(), Some("Tee"));
        assert_eq!(form.price, Some(19.9));
        assert_eq!(form.quantity, Some(5));

        let form = parse(r#"{"price":20,"quantity":0}"#);
        assert_eq!(form.price, Some(20.0));
        assert_eq!(form.quantity, Some(0));
    }

    #[test]
    fn test_invalid_number_is_rejected() {
        assert!(serde_json::from_str::<Form>(r#"{"price":"abc"}"#).is_err());
        assert!(serde_json::from_str::<Form>(r#"{"quantity":[1]}"#).is_err());
    }

    #[test]
    fn test_lenient_bool() {
        assert!(parse(r#"{"is_published":true}"#).is_published);
        assert!(parse(r#"{"is_published":"true"}"#).is_published);
        assert!(!parse(r#"{"is_published":"yes"}"#).is_published);
        assert!(!parse(r#"{"is_published":1}"#).is_published);
    }

    #[test]
    fn test_string_list_accepts_encoded_json() {
        assert_eq!(parse(r#"{"tags":["a","b"]}"#).tags, vec!["a", "b"]);
        assert_eq!(parse(r#"{"tags":"[\"a\",\"b\"]"}"#).tags, vec!["a", "b"]);
        assert!(parse(r#"{"tags":null}"#).tags.is_empty());
        assert!(serde_json::from_str::<Form>(r#"{"tags":"red"}"#).is_err());
    }
}
