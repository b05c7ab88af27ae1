//! 动态数据模型

use serde::{Deserialize, Serialize};

use super::Resource;
use crate::utils::{format_datetime, lenient};

/// 动态作者
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub avatar: String,
}

impl Default for Author {
    /// 未指定作者时使用的占位身份
    fn default() -> Self {
        Self {
            name: "小陆".to_string(),
            avatar: String::new(),
        }
    }
}

/// 作者的部分字段
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorPatch {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub avatar: Option<String>,
}

impl Author {
    fn patched(&self, patch: Option<AuthorPatch>) -> Self {
        match patch {
            Some(p) => Self {
                name: p.name.unwrap_or_else(|| self.name.clone()),
                avatar: p.avatar.unwrap_or_else(|| self.avatar.clone()),
            },
            None => self.clone(),
        }
    }
}

/// 动态配图
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MomentImage {
    pub id: i64,
    pub moment_id: i64,
    pub url: String,
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// 动态实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moment {
    pub id: i64,
    pub content: String,
    pub images: Vec<MomentImage>,
    pub likes: i64,
    pub created_at: String,
    pub author: Author,
    pub is_public: bool,
}

/// 创建动态请求（likes 仅能通过点赞增加）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMomentRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub images: Option<Vec<MomentImage>>,
    #[serde(default, deserialize_with = "lenient")]
    pub author: Option<AuthorPatch>,
    #[serde(default, deserialize_with = "lenient")]
    pub is_public: Option<bool>,
}

/// 更新动态请求
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMomentRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub images: Option<Vec<MomentImage>>,
    #[serde(default, deserialize_with = "lenient")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub author: Option<AuthorPatch>,
    #[serde(default, deserialize_with = "lenient")]
    pub is_public: Option<bool>,
}

/// 更新公开状态请求
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePublicRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub is_public: Option<bool>,
}

impl Resource for Moment {
    type Create = CreateMomentRequest;
    type Update = UpdateMomentRequest;

    const COLLECTION: &'static str = "moments";
    const LABEL: &'static str = "动态";

    fn id(&self) -> i64 {
        self.id
    }

    fn build(id: i64, request: CreateMomentRequest) -> Self {
        Self {
            id,
            content: request.content.unwrap_or_default(),
            images: request.images.unwrap_or_default(),
            likes: 0,
            created_at: format_datetime(&chrono::Utc::now()),
            author: Author::default().patched(request.author),
            is_public: request.is_public.unwrap_or(true),
        }
    }

    fn merge(&self, patch: UpdateMomentRequest) -> Self {
        Self {
            id: self.id,
            content: patch.content.unwrap_or_else(|| self.content.clone()),
            images: patch.images.unwrap_or_else(|| self.images.clone()),
            likes: self.likes,
            created_at: patch.created_at.unwrap_or_else(|| self.created_at.clone()),
            author: self.author.patched(patch.author),
            is_public: patch.is_public.unwrap_or(self.is_public),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_fills_placeholder_author_fields() {
        let moment = Moment::build(
            1,
            CreateMomentRequest {
                author: Some(AuthorPatch {
                    name: Some("小伍".to_string()),
                    avatar: None,
                }),
                ..Default::default()
            },
        );
        assert_eq!(moment.author.name, "小伍");
        assert_eq!(moment.author.avatar, "");
        assert!(moment.is_public);
        assert_eq!(moment.likes, 0);
    }

    #[test]
    fn test_merge_keeps_likes() {
        let moment = Moment::build(1, CreateMomentRequest::default());
        let merged = moment.merge(UpdateMomentRequest {
            content: Some("新内容".to_string()),
            ..Default::default()
        });
        assert_eq!(merged.content, "新内容");
        assert_eq!(merged.likes, moment.likes);
        assert_eq!(merged.author, moment.author);
    }
}
