//! 系统初始化与站点设置

use crate::models::{
    Couple, CoupleMember, CoupleProfile, InitStatus, SiteInfo, SiteSettings, SiteSummary,
    SystemData, SystemInfo, SystemInitRequest, UpdateSiteSettingsRequest,
};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct SystemState {
    initialized: bool,
    data: Option<SystemData>,
    settings: SiteSettings,
}

/// 系统服务
pub struct SystemService {
    state: RwLock<SystemState>,
}

fn text(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn member(
    id: i64,
    name: Option<String>,
    role: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    avatar: Option<String>,
    defaults: (&str, &str, &str),
) -> CoupleMember {
    let (default_name, default_role, avatar_marker) = defaults;
    CoupleMember {
        id,
        name: text(name, default_name),
        role: text(role, default_role),
        email: email.unwrap_or_default(),
        phone: phone.unwrap_or_default(),
        avatar: avatar
            .filter(|v| !v.is_empty())
            .map(|_| avatar_marker.to_string()),
    }
}

impl SystemService {
    /// `initialized` 为启动时状态（载入示例数据即视为已初始化）
    pub fn new(initialized: bool) -> Self {
        Self {
            state: RwLock::new(SystemState {
                initialized,
                ..SystemState::default()
            }),
        }
    }

    /// 初始化站点
    pub async fn init(&self, request: SystemInitRequest) -> SystemData {
        let data = SystemData {
            site_info: SiteInfo {
                site_name: request.site_name.unwrap_or_default(),
                site_description: request.site_description.unwrap_or_default(),
                start_date: request.start_date.unwrap_or_default(),
            },
            users: vec![
                member(
                    1,
                    request.user_a_name,
                    request.user_a_role,
                    request.user_a_email,
                    request.user_a_phone,
                    request.avatar_a,
                    ("用户A", "角色A", "data:image/avatar-a"),
                ),
                member(
                    2,
                    request.user_b_name,
                    request.user_b_role,
                    request.user_b_email,
                    request.user_b_phone,
                    request.avatar_b,
                    ("用户B", "角色B", "data:image/avatar-b"),
                ),
            ],
            password: request.site_password.unwrap_or_default(),
        };

        let mut state = self.state.write().await;
        state.initialized = true;
        state.data = Some(data.clone());

        tracing::info!(site = %data.site_info.site_name, "系统已初始化");
        data
    }

    pub async fn init_status(&self) -> InitStatus {
        InitStatus {
            initialized: self.state.read().await.initialized,
        }
    }

    /// 前台站点信息；未初始化时返回默认情侣信息
    pub async fn info(&self) -> SystemInfo {
        let state = self.state.read().await;

        let Some(data) = state.data.as_ref() else {
            return SystemInfo {
                site: SiteSummary {
                    name: "小伍与小陆".to_string(),
                    description: "始于心动，守于日常。往后余生，皆是彼此。".to_string(),
                    start_date: "2021-01-01".to_string(),
                },
                couple: Couple {
                    boy: CoupleProfile {
                        name: "小伍".to_string(),
                        avatar: String::new(),
                    },
                    girl: CoupleProfile {
                        name: "小陆".to_string(),
                        avatar: String::new(),
                    },
                },
            };
        };

        let profile = |index: usize| {
            data.users
                .get(index)
                .map(|m| CoupleProfile {
                    name: m.name.clone(),
                    avatar: m.avatar.clone().unwrap_or_default(),
                })
                .unwrap_or(CoupleProfile {
                    name: String::new(),
                    avatar: String::new(),
                })
        };

        SystemInfo {
            site: SiteSummary {
                name: data.site_info.site_name.clone(),
                description: data.site_info.site_description.clone(),
                start_date: data.site_info.start_date.clone(),
            },
            couple: Couple {
                boy: profile(0),
                girl: profile(1),
            },
        }
    }

    pub async fn site_settings(&self) -> SiteSettings {
        self.state.read().await.settings.clone()
    }

    /// 部分更新站点设置
    pub async fn update_site_settings(&self, patch: UpdateSiteSettingsRequest) -> SiteSettings {
        let mut state = self.state.write().await;
        let current = &mut state.settings;

        if let Some(title) = patch.site_title {
            current.site_title = title;
        }
        if let Some(description) = patch.site_description {
            current.site_description = description;
        }
        if let Some(footer) = patch.site_footer {
            current.site_footer = footer;
        }

        current.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_applies_member_defaults() {
        let service = SystemService::new(false);
        assert!(!service.init_status().await.initialized);

        let data = service
            .init(SystemInitRequest {
                site_name: Some("我们的家".to_string()),
                start_date: Some("2022-02-14".to_string()),
                user_a_name: Some("阿伍".to_string()),
                avatar_b: Some("b.png".to_string()),
                ..SystemInitRequest::default()
            })
            .await;

        assert!(service.init_status().await.initialized);
        assert_eq!(data.users[0].name, "阿伍");
        assert_eq!(data.users[0].role, "角色A");
        assert_eq!(data.users[0].avatar, None);
        assert_eq!(data.users[1].name, "用户B");
        assert_eq!(data.users[1].avatar.as_deref(), Some("data:image/avatar-b"));

        let info = service.info().await;
        assert_eq!(info.site.name, "我们的家");
        assert_eq!(info.couple.boy.name, "阿伍");
        assert_eq!(info.couple.girl.avatar, "data:image/avatar-b");
    }

    #[tokio::test]
    async fn test_info_defaults_before_init() {
        let info = SystemService::new(true).info().await;
        assert_eq!(info.site.start_date, "2021-01-01");
        assert_eq!(info.couple.girl.name, "小陆");
    }

    #[tokio::test]
    async fn test_site_settings_partial_update() {
        let service = SystemService::new(true);
        let settings = service
            .update_site_settings(UpdateSiteSettingsRequest {
                site_title: Some("新标题".to_string()),
                ..UpdateSiteSettingsRequest::default()
            })
            .await;

        assert_eq!(settings.site_title, "新标题");
        assert_eq!(settings.site_footer, SiteSettings::default().site_footer);
        assert_eq!(service.site_settings().await, settings);
    }
}
