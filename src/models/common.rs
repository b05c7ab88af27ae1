//! 通用数据结构

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::utils::parse_int;

/// 成功
pub const CODE_OK: u8 = 0;
/// 失败
pub const CODE_FAILED: u8 = 1;

/// 统一 API 响应信封 `{code, data, msg}`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: u8,
    pub data: Option<T>,
    pub msg: String,
}

impl<T: Serialize> ApiResponse<T> {
    /// 创建成功响应
    pub fn success(data: T, msg: &str) -> Self {
        Self {
            code: CODE_OK,
            data: Some(data),
            msg: msg.to_string(),
        }
    }
}

impl ApiResponse<()> {
    /// 创建成功响应（data 为 null）
    pub fn success_message(msg: &str) -> Self {
        Self {
            code: CODE_OK,
            data: None,
            msg: msg.to_string(),
        }
    }

    /// 创建失败响应
    pub fn failure(msg: &str) -> Self {
        Self {
            code: CODE_FAILED,
            data: None,
            msg: msg.to_string(),
        }
    }
}

/// 列表查询参数
///
/// 原样接收字符串，无法解析的值回落到默认值而不是报错。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub size: Option<String>,
}

impl PageQuery {
    pub fn new(page: i64, size: i64) -> Self {
        Self {
            page: Some(page.to_string()),
            size: Some(size.to_string()),
        }
    }

    /// 解析为具体分页参数；页码小于 1 视为 1，每页数量小于 1 视为默认值
    pub fn resolve(&self, default_size: i64) -> Pagination {
        let page = self
            .page
            .as_deref()
            .and_then(parse_int)
            .filter(|p| *p >= 1)
            .unwrap_or(1);
        let size = self
            .size
            .as_deref()
            .and_then(parse_int)
            .filter(|s| *s >= 1)
            .unwrap_or(default_size.max(1));

        Pagination { page, size }
    }
}

/// 分页参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub size: i64,
}

impl Pagination {
    pub fn offset(&self) -> usize {
        usize::try_from((self.page - 1).saturating_mul(self.size)).unwrap_or(usize::MAX)
    }

    pub fn limit(&self) -> usize {
        usize::try_from(self.size).unwrap_or(usize::MAX)
    }

    /// ceil(total / size)，无符号运算避免大 size 溢出
    pub fn total_pages(&self, total: usize) -> i64 {
        let size = u64::try_from(self.size).unwrap_or(1).max(1);
        i64::try_from((total as u64).div_ceil(size)).unwrap_or(i64::MAX)
    }
}

/// 分页响应
///
/// 序列化为 `{<key>: [...], totalPages, total, page, size}`，
/// 列表字段名随资源而变（albums、photos、wishes ...）。
#[derive(Debug, Clone)]
pub struct PaginatedResponse<T> {
    pub key: &'static str,
    pub items: Vec<T>,
    pub total_pages: i64,
    pub total: usize,
    pub page: i64,
    pub size: i64,
}

impl<T> PaginatedResponse<T> {
    pub fn new(key: &'static str, items: Vec<T>, pagination: Pagination, total: usize) -> Self {
        Self {
            key,
            items,
            total_pages: pagination.total_pages(total),
            total,
            page: pagination.page,
            size: pagination.size,
        }
    }
}

impl<T: Serialize> Serialize for PaginatedResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        map.serialize_entry(self.key, &self.items)?;
        map.serialize_entry("totalPages", &self.total_pages)?;
        map.serialize_entry("total", &self.total)?;
        map.serialize_entry("page", &self.page)?;
        map.serialize_entry("size", &self.size)?;
        map.end()
    }
}

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>, size: Option<&str>) -> PageQuery {
        PageQuery {
            page: page.map(str::to_string),
            size: size.map(str::to_string),
        }
    }

    #[test]
    fn test_resolve_defaults() {
        assert_eq!(query(None, None).resolve(5), Pagination { page: 1, size: 5 });
    }

    #[test]
    fn test_resolve_non_numeric_falls_back() {
        let p = query(Some("abc"), Some("x9")).resolve(10);
        assert_eq!(p, Pagination { page: 1, size: 10 });
    }

    #[test]
    fn test_resolve_parses_leading_digits() {
        let p = query(Some("2nd"), Some("3 per page")).resolve(10);
        assert_eq!(p, Pagination { page: 2, size: 3 });
    }

    #[test]
    fn test_resolve_non_positive_size_uses_default() {
        assert_eq!(query(Some("1"), Some("0")).resolve(9).size, 9);
        assert_eq!(query(Some("1"), Some("-4")).resolve(9).size, 9);
        assert_eq!(query(Some("0"), None).resolve(9).page, 1);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        let p = Pagination { page: 1, size: 5 };
        assert_eq!(p.total_pages(0), 0);
        assert_eq!(p.total_pages(5), 1);
        assert_eq!(p.total_pages(6), 2);
        assert_eq!(p.total_pages(11), 3);
    }

    #[test]
    fn test_huge_size_does_not_overflow() {
        let p = query(Some("9223372036854775807"), Some("9223372036854775807")).resolve(5);
        assert_eq!(p.size, i64::MAX);
        assert_eq!(p.total_pages(5), 1);
        assert_eq!(p.total_pages(0), 0);
        assert_eq!(p.offset(), i64::MAX as usize);
        assert_eq!(p.limit(), i64::MAX as usize);
    }

    #[test]
    fn test_paginated_response_uses_collection_key() {
        let page = PaginatedResponse::new("albums", vec![1, 2], Pagination { page: 1, size: 2 }, 3);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["albums"], serde_json::json!([1, 2]));
        assert_eq!(json["totalPages"], 2);
        assert_eq!(json["total"], 3);
    }

    #[test]
    fn test_success_message_has_null_data() {
        let json = serde_json::to_value(ApiResponse::success_message("删除成功")).unwrap();
        assert_eq!(json, serde_json::json!({"code": 0, "data": null, "msg": "删除成功"}));
    }
}
