//! 纪念日数据模型

use serde::{Deserialize, Serialize};

use super::Resource;
use crate::utils::lenient;

/// 历法
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Calendar {
    #[default]
    Solar,
    Lunar,
}

/// 纪念日实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anniversary {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub description: String,
    pub calendar: Calendar,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAnniversaryRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub calendar: Option<Calendar>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAnniversaryRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub calendar: Option<Calendar>,
}

impl Resource for Anniversary {
    type Create = CreateAnniversaryRequest;
    type Update = UpdateAnniversaryRequest;

    const COLLECTION: &'static str = "anniversaries";
    const LABEL: &'static str = "纪念日";

    fn id(&self) -> i64 {
        self.id
    }

    fn build(id: i64, request: CreateAnniversaryRequest) -> Self {
        Self {
            id,
            title: request.title.unwrap_or_default(),
            date: request.date.unwrap_or_default(),
            description: request.description.unwrap_or_default(),
            calendar: request.calendar.unwrap_or_default(),
        }
    }

    fn merge(&self, patch: UpdateAnniversaryRequest) -> Self {
        Self {
            id: self.id,
            title: patch.title.unwrap_or_else(|| self.title.clone()),
            date: patch.date.unwrap_or_else(|| self.date.clone()),
            description: patch.description.unwrap_or_else(|| self.description.clone()),
            calendar: patch.calendar.unwrap_or(self.calendar),
        }
    }
}
