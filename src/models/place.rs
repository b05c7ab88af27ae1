//! 足迹（地点）数据模型

use serde::{Deserialize, Serialize};

use super::Resource;
use crate::utils::lenient;

/// 地点配图
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceImage {
    pub id: i64,
    pub place_id: i64,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// 地点实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<PlaceImage>,
    pub description: String,
    /// YYYY-MM-DD
    pub date: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePlaceRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub image: Option<PlaceImage>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePlaceRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub image: Option<PlaceImage>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<String>,
}

impl Resource for Place {
    type Create = CreatePlaceRequest;
    type Update = UpdatePlaceRequest;

    const COLLECTION: &'static str = "places";
    const LABEL: &'static str = "地点";

    fn id(&self) -> i64 {
        self.id
    }

    fn build(id: i64, request: CreatePlaceRequest) -> Self {
        Self {
            id,
            name: request.name.unwrap_or_default(),
            latitude: request.latitude.unwrap_or_default(),
            longitude: request.longitude.unwrap_or_default(),
            image: request.image,
            description: request.description.unwrap_or_default(),
            date: request.date.unwrap_or_default(),
        }
    }

    fn merge(&self, patch: UpdatePlaceRequest) -> Self {
        Self {
            id: self.id,
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            latitude: patch.latitude.unwrap_or(self.latitude),
            longitude: patch.longitude.unwrap_or(self.longitude),
            image: patch.image.or_else(|| self.image.clone()),
            description: patch.description.unwrap_or_else(|| self.description.clone()),
            date: patch.date.unwrap_or_else(|| self.date.clone()),
        }
    }
}
