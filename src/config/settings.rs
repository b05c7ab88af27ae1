//! 应用配置加载和管理

use crate::errors::AppError;
use config::{Config, Environment, File};
use secrecy::SecretString;
use serde::Deserialize;
use std::env;

/// 应用配置结构
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub pagination: PaginationSettings,
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub upload: UploadSettings,
    #[serde(default)]
    pub seed: SeedSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// 0 表示按 CPU 核数
    #[serde(default)]
    pub workers: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3000 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// pretty 或 json
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info,memoria=debug".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

/// 各资源列表接口的默认每页数量
///
/// 未提供或无法解析的 `size` 参数回落到这里的值。
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationSettings {
    #[serde(default = "default_size_5")]
    pub albums: i64,
    #[serde(default = "default_size_9")]
    pub photos: i64,
    #[serde(default = "default_size_10")]
    pub anniversaries: i64,
    #[serde(default = "default_size_5")]
    pub moments: i64,
    #[serde(default = "default_size_5")]
    pub places: i64,
    #[serde(default = "default_size_5")]
    pub wishes: i64,
    #[serde(default = "default_size_10")]
    pub users: i64,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            albums: 5,
            photos: 9,
            anniversaries: 10,
            moments: 5,
            places: 5,
            wishes: 5,
            users: 10,
        }
    }
}

fn default_size_5() -> i64 { 5 }
fn default_size_9() -> i64 { 9 }
fn default_size_10() -> i64 { 10 }

/// 模拟登录配置
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// 唯一可登录的用户名
    #[serde(default = "default_username")]
    pub username: String,
    /// 令牌有效期（秒）
    #[serde(default = "default_expiry")]
    pub expiry_seconds: u64,
    #[serde(default = "default_issuer")]
    pub issuer: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            username: default_username(),
            expiry_seconds: default_expiry(),
            issuer: default_issuer(),
        }
    }
}

fn default_username() -> String { "admin".to_string() }
fn default_expiry() -> u64 { 3600 }
fn default_issuer() -> String { "memoria".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    /// 上传请求体上限（字节）
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            max_bytes: default_max_bytes(),
        }
    }
}

fn default_max_bytes() -> usize { 10 * 1024 * 1024 }

#[derive(Debug, Clone, Deserialize)]
pub struct SeedSettings {
    /// 启动时是否载入示例数据
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_true() -> bool { true }

impl Settings {
    /// 从配置文件和环境变量加载配置
    pub fn load() -> Result<Self, AppError> {
        let run_mode = env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        let settings = Config::builder()
            // 加载默认配置
            .add_source(File::with_name("config/development").required(false))
            // 根据环境加载对应配置
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // 环境变量覆盖，前缀 MEMORIA，分隔符 __
            .add_source(
                Environment::with_prefix("MEMORIA")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// 获取 JWT 密钥（环境变量，未设置时使用开发密钥）
    pub fn jwt_secret() -> SecretString {
        SecretString::new(
            env::var("JWT_SECRET").unwrap_or_else(|_| "memoria-development-secret".to_string()),
        )
    }

    /// 获取管理员密码（环境变量，未设置时为 123456）
    pub fn admin_password() -> SecretString {
        SecretString::new(
            env::var("MEMORIA_ADMIN_PASSWORD").unwrap_or_else(|_| "123456".to_string()),
        )
    }

    /// 获取服务器地址
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use serial_test::serial;

    #[test]
    fn test_defaults_match_endpoint_sizes() {
        let settings = Settings::default();
        assert_eq!(settings.pagination.albums, 5);
        assert_eq!(settings.pagination.photos, 9);
        assert_eq!(settings.pagination.anniversaries, 10);
        assert_eq!(settings.pagination.users, 10);
        assert_eq!(settings.auth.username, "admin");
        assert!(settings.seed.enabled);
    }

    #[test]
    #[serial]
    fn test_env_overrides_server_port() {
        env::set_var("MEMORIA_SERVER__PORT", "4100");
        let settings = Settings::load().unwrap();
        env::remove_var("MEMORIA_SERVER__PORT");

        assert_eq!(settings.server.port, 4100);
        assert_eq!(settings.server_addr(), format!("{}:4100", settings.server.host));
    }

    #[test]
    #[serial]
    fn test_admin_password_falls_back_to_default() {
        env::remove_var("MEMORIA_ADMIN_PASSWORD");
        assert_eq!(Settings::admin_password().expose_secret(), "123456");
    }
}
