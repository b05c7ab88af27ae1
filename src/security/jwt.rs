//! JWT 令牌处理

use crate::config::AuthSettings;
use crate::errors::AppError;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT Claims（载荷）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// 用户名
    pub sub: String,
    /// 签发者
    pub iss: String,
    /// 过期时间（Unix 时间戳）
    pub exp: i64,
    /// 签发时间
    pub iat: i64,
    /// 令牌 ID
    pub jti: String,
}

/// JWT 管理器
pub struct JwtManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    expiry_seconds: i64,
}

impl JwtManager {
    pub fn new(settings: &AuthSettings, secret: &SecretString) -> Self {
        let secret = secret.expose_secret().as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            issuer: settings.issuer.clone(),
            expiry_seconds: settings.expiry_seconds as i64,
        }
    }

    pub fn expiry_seconds(&self) -> i64 {
        self.expiry_seconds
    }

    /// 生成访问令牌
    pub fn generate_access_token(&self, subject: &str) -> Result<String, AppError> {
        let now = Utc::now();

        let claims = Claims {
            sub: subject.to_string(),
            iss: self.issuer.clone(),
            exp: (now + Duration::seconds(self.expiry_seconds)).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("令牌生成失败: {}", e)))
    }

    /// 验证令牌
    pub fn validate_token(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);

        let token_data: TokenData<Claims> = decode(token, &self.decoding_key, &validation)
            .map_err(|e| {
                tracing::debug!("令牌验证失败: {}", e);
                AppError::Unauthorized("未授权访问".to_string())
            })?;

        Ok(token_data.claims)
    }
}
