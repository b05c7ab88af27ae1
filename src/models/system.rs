//! 系统初始化、站点设置与仪表盘数据模型

use serde::{Deserialize, Serialize};

use crate::utils::lenient;

/// 初始化请求（JSON 或表单）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInitRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub site_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub site_description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_a_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_a_role: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_a_email: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_a_phone: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub avatar_a: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_b_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_b_role: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_b_email: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_b_phone: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub avatar_b: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub site_password: Option<String>,
}

/// 站点基本信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    pub site_name: String,
    pub site_description: String,
    pub start_date: String,
}

/// 情侣成员
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoupleMember {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub avatar: Option<String>,
}

/// 初始化后保存的系统数据
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemData {
    pub site_info: SiteInfo,
    pub users: Vec<CoupleMember>,
    /// 不回显
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitStatus {
    pub initialized: bool,
}

/// 前台展示的站点信息
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub site: SiteSummary,
    pub couple: Couple,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSummary {
    pub name: String,
    pub description: String,
    pub start_date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Couple {
    pub boy: CoupleProfile,
    pub girl: CoupleProfile,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoupleProfile {
    pub name: String,
    pub avatar: String,
}

/// 站点设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub site_title: String,
    pub site_description: String,
    pub site_footer: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_title: "爱的纪念册".to_string(),
            site_description: "记录我们美好时光的地方".to_string(),
            site_footer: "© 2023 爱的纪念册. 保留所有权利.".to_string(),
        }
    }
}

/// 站点设置的部分更新
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSiteSettingsRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub site_title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub site_description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub site_footer: Option<String>,
}

/// 仪表盘统计
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub album_stats: AlbumStats,
    pub place_stats: CountStats,
    pub moment_stats: CountStats,
    pub wish_stats: WishStats,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumStats {
    pub total: usize,
    pub total_photos: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CountStats {
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct WishStats {
    pub total: usize,
    pub pending: usize,
}
