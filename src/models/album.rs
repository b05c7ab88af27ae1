//! 相册与相册照片数据模型

use serde::{Deserialize, Serialize};

use super::Resource;
use crate::utils::{now_iso8601, lenient};

/// 相册照片
///
/// 作为封面嵌入相册时可能只有 id/albumId/url/thumbnailUrl。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: i64,
    pub album_id: i64,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// 相册实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<Photo>,
    pub created_at: String,
    pub photo_count: i64,
}

/// 创建相册请求（id、createdAt、photoCount 由服务端生成）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlbumRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub cover_image: Option<Photo>,
}

/// 更新相册请求
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAlbumRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub cover_image: Option<Photo>,
}

/// 设置封面请求
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCoverRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub photo_id: Option<i64>,
}

/// 添加照片请求
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPhotosRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub photo_ids: Vec<i64>,
}

impl Resource for Album {
    type Create = CreateAlbumRequest;
    type Update = UpdateAlbumRequest;

    const COLLECTION: &'static str = "albums";
    const LABEL: &'static str = "相册";

    fn id(&self) -> i64 {
        self.id
    }

    fn build(id: i64, request: CreateAlbumRequest) -> Self {
        Self {
            id,
            name: request.name.unwrap_or_default(),
            description: request.description.unwrap_or_default(),
            cover_image: request.cover_image,
            created_at: now_iso8601(),
            photo_count: 0,
        }
    }

    fn merge(&self, patch: UpdateAlbumRequest) -> Self {
        Self {
            id: self.id,
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            description: patch.description.unwrap_or_else(|| self.description.clone()),
            cover_image: patch.cover_image.or_else(|| self.cover_image.clone()),
            created_at: self.created_at.clone(),
            photo_count: self.photo_count,
        }
    }
}
