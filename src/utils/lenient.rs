//! 宽松的字段反序列化
//!
//! 请求体中类型不符的字段按缺省处理，不让整个请求失败。

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// 配合 `#[serde(default, deserialize_with = "lenient")]` 使用：
/// 字段值无法转换为目标类型时取 `T::default()`（`Option` 即 `None`）
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "lenient")]
        title: Option<String>,
        #[serde(default, deserialize_with = "lenient")]
        count: Option<i64>,
        #[serde(default, deserialize_with = "lenient")]
        tags: Vec<i64>,
    }

    #[test]
    fn test_wrong_types_become_defaults() {
        let patch: Patch =
            serde_json::from_str(r#"{"title": 123, "count": "x", "tags": "a"}"#).unwrap();
        assert_eq!(patch.title, None);
        assert_eq!(patch.count, None);
        assert!(patch.tags.is_empty());
    }

    #[test]
    fn test_valid_and_missing_fields() {
        let patch: Patch = serde_json::from_str(r#"{"title": "B", "tags": [1, 2]}"#).unwrap();
        assert_eq!(patch.title.as_deref(), Some("B"));
        assert_eq!(patch.count, None);
        assert_eq!(patch.tags, vec![1, 2]);
    }

    #[test]
    fn test_null_is_none() {
        let patch: Patch = serde_json::from_str(r#"{"title": null}"#).unwrap();
        assert_eq!(patch.title, None);
    }
}
