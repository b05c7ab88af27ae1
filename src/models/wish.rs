//! 祝福数据模型

use serde::{Deserialize, Serialize};

use super::Resource;
use crate::utils::{format_datetime, lenient};

/// 祝福实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wish {
    pub id: i64,
    pub content: String,
    pub author_name: String,
    pub email: String,
    pub created_at: String,
    /// 新提交的祝福默认未批准
    pub approved: bool,
}

/// 提交祝福请求
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWishRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub author_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub email: Option<String>,
}

/// 更新祝福请求（批准状态只能通过 approve 修改）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWishRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub author_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub email: Option<String>,
}

/// 空字符串与缺省同样视为未填写
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl Resource for Wish {
    type Create = CreateWishRequest;
    type Update = UpdateWishRequest;

    const COLLECTION: &'static str = "wishes";
    const LABEL: &'static str = "愿望";

    fn id(&self) -> i64 {
        self.id
    }

    fn build(id: i64, request: CreateWishRequest) -> Self {
        Self {
            id,
            content: non_empty(request.content).unwrap_or_else(|| format!("{}测试", id)),
            author_name: non_empty(request.author_name).unwrap_or_else(|| format!("{}测试", id)),
            email: non_empty(request.email).unwrap_or_else(|| format!("{}测试@example.com", id)),
            created_at: format_datetime(&chrono::Utc::now()),
            approved: false,
        }
    }

    fn merge(&self, patch: UpdateWishRequest) -> Self {
        Self {
            id: self.id,
            content: patch.content.unwrap_or_else(|| self.content.clone()),
            author_name: patch.author_name.unwrap_or_else(|| self.author_name.clone()),
            email: patch.email.unwrap_or_else(|| self.email.clone()),
            created_at: self.created_at.clone(),
            approved: self.approved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_defaults_use_new_id() {
        let wish = Wish::build(9, CreateWishRequest {
            content: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(wish.content, "9测试");
        assert_eq!(wish.author_name, "9测试");
        assert_eq!(wish.email, "9测试@example.com");
        assert!(!wish.approved);
    }
}
