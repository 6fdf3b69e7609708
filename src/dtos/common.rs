use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_PAGE_LIMIT: i64 = 20;
pub const MAX_PAGE_LIMIT: i64 = 100;

// Response wrappers
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(message: &str, data: T) -> Self {
        Self {
            status: "success".to_string(),
            message: message.to_string(),
            data,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Pagination {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    #[serde(rename = "hasMore")]
    pub has_more: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, total: i64, limit: i64, offset: i64) -> Self {
        Self {
            data,
            pagination: Pagination {
                total,
                limit,
                offset,
                has_more: offset + limit < total,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct PageQueryDto {
    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: Option<i64>,

    #[validate(range(min = 0, message = "Offset must not be negative"))]
    pub offset: Option<i64>,
}

impl PageQueryDto {
    pub fn limit_or_default(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT)
    }

    pub fn offset_or_default(&self) -> i64 {
        self.offset.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_more_is_set_only_when_rows_remain() {
        let page = PaginatedResponse::new(vec![1, 2, 3], 10, 3, 0);
        assert!(page.pagination.has_more);

        let last_page = PaginatedResponse::new(vec![1], 10, 3, 9);
        assert!(!last_page.pagination.has_more);

        let exact = PaginatedResponse::new(vec![1, 2], 2, 2, 0);
        assert!(!exact.pagination.has_more);
    }

    #[test]
    fn page_query_defaults_and_caps() {
        let query = PageQueryDto {
            limit: None,
            offset: None,
        };
        assert_eq!(query.limit_or_default(), DEFAULT_PAGE_LIMIT);
        assert_eq!(query.offset_or_default(), 0);

        let oversized = PageQueryDto {
            limit: Some(500),
            offset: Some(40),
        };
        assert_eq!(oversized.limit_or_default(), MAX_PAGE_LIMIT);
        assert_eq!(oversized.offset_or_default(), 40);
    }

    #[test]
    fn pagination_envelope_uses_camel_case_has_more() {
        let page = PaginatedResponse::new(vec![1], 5, 1, 0);
        let json = serde_json::to_string(&page).unwrap();
        assert!(json.contains("\"hasMore\":true"));
    }
}
