//! 用户数据模型

use serde::{Deserialize, Serialize};

use super::Resource;
use crate::utils::{format_date, lenient};

/// 用户实体（id 与 joinDate 创建后不可变）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub join_date: String,
    pub avatar: String,
    pub avatar_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub avatar_id: Option<i64>,
}

/// 更新用户请求
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub avatar_id: Option<i64>,
    /// 仅记录，不保存
    #[serde(default, deserialize_with = "lenient")]
    pub new_password: Option<String>,
}

/// 登录请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub username: String,
    #[serde(default, deserialize_with = "lenient")]
    pub password: String,
}

/// 登录令牌
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// 当前登录用户
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub user_name: String,
    pub user_id: i64,
    pub user_email: String,
}

impl Resource for User {
    type Create = CreateUserRequest;
    type Update = UpdateUserRequest;

    const COLLECTION: &'static str = "users";
    const LABEL: &'static str = "用户";

    fn id(&self) -> i64 {
        self.id
    }

    fn build(id: i64, request: CreateUserRequest) -> Self {
        Self {
            id,
            name: request.name.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            role: request.role.unwrap_or_default(),
            join_date: format_date(&chrono::Utc::now()),
            avatar: request.avatar.unwrap_or_default(),
            avatar_id: request.avatar_id.unwrap_or_default(),
        }
    }

    fn merge(&self, patch: UpdateUserRequest) -> Self {
        Self {
            id: self.id,
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            email: patch.email.unwrap_or_else(|| self.email.clone()),
            role: patch.role.unwrap_or_else(|| self.role.clone()),
            join_date: self.join_date.clone(),
            avatar: patch.avatar.unwrap_or_else(|| self.avatar.clone()),
            avatar_id: patch.avatar_id.unwrap_or(self.avatar_id),
        }
    }
}
