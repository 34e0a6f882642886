//! 페이지네이션 모델
//!
//! 쿼리 문자열의 `page`, `limit`, `order` 값을 관대하게 해석합니다.
//! 숫자가 아닌 값이나 범위를 벗어난 값은 에러 대신 기본값 또는 경계값으로 보정됩니다.

use serde::Serialize;

/// 기본 페이지 크기
pub const DEFAULT_LIMIT: u32 = 10;
/// 최대 페이지 크기
pub const MAX_LIMIT: u32 = 100;

/// 보정이 끝난 페이지 요청
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1부터 시작하는 페이지 번호
    pub page: u32,
    /// 1..=100
    pub limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, limit: DEFAULT_LIMIT }
    }
}

impl PageRequest {
    /// 원시 쿼리 값으로부터 페이지 요청을 만듭니다.
    ///
    /// - `page`: 없거나 해석 불가, 1 미만이면 1
    /// - `limit`: 없거나 해석 불가, 0 이하이면 10, 100 초과면 100
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = page
            .and_then(parse_leading_int)
            .map(|p| p.clamp(1, u32::MAX as i64) as u32)
            .unwrap_or(1);

        let limit = match limit.and_then(parse_leading_int) {
            Some(l) if l > 0 => l.min(MAX_LIMIT as i64) as u32,
            _ => DEFAULT_LIMIT,
        };

        Self { page, limit }
    }

    /// SQL `OFFSET` 값
    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.limit as i64
    }
}

/// 정렬 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// 대소문자 구분 없이 `desc`일 때만 내림차순, 나머지는 모두 오름차순
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.trim().eq_ignore_ascii_case("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// 응답에 포함되는 페이지 메타데이터
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(total: i64, request: PageRequest) -> Self {
        let limit = request.limit.max(1) as i64;
        Self {
            total,
            page: request.page,
            limit: request.limit,
            total_pages: (total + limit - 1) / limit,
        }
    }
}

/// 문자열 앞부분의 정수만 읽습니다. (`"12abc"` → 12, `"abc"` → None)
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());

    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = PageRequest::from_raw(None, None);
        assert_eq!(request, PageRequest { page: 1, limit: 10 });
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn test_lenient_parsing() {
        assert_eq!(PageRequest::from_raw(Some("3"), Some("20")), PageRequest { page: 3, limit: 20 });
        assert_eq!(PageRequest::from_raw(Some("2abc"), Some("x")), PageRequest { page: 2, limit: 10 });
        assert_eq!(PageRequest::from_raw(Some("0"), Some("0")), PageRequest { page: 1, limit: 10 });
        assert_eq!(PageRequest::from_raw(Some("-4"), Some("-1")), PageRequest { page: 1, limit: 10 });
    }

    #[test]
    fn test_limit_is_capped() {
        assert_eq!(PageRequest::from_raw(None, Some("5000")).limit, MAX_LIMIT);
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest { page: 3, limit: 25 }.offset(), 50);
    }

    #[test]
    fn test_sort_order() {
        assert_eq!(SortOrder::parse(Some("desc")), SortOrder::Desc);
        assert_eq!(SortOrder::parse(Some("DESC")), SortOrder::Desc);
        assert_eq!(SortOrder::parse(Some("descending")), SortOrder::Asc);
        assert_eq!(SortOrder::parse(None), SortOrder::Asc);
        assert_eq!(SortOrder::Desc.as_sql(), "DESC");
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let request = PageRequest { page: 1, limit: 10 };
        assert_eq!(Pagination::new(0, request).total_pages, 0);
        assert_eq!(Pagination::new(10, request).total_pages, 1);
        assert_eq!(Pagination::new(11, request).total_pages, 2);
    }
}
