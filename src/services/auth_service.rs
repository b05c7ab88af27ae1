//! 认证服务（单一固定账号）

use crate::config::AuthSettings;
use crate::errors::AppError;
use crate::models::{LoginRequest, TokenResponse, UserInfo};
use crate::security::JwtManager;
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

/// 认证服务
pub struct AuthService {
    jwt_manager: Arc<JwtManager>,
    username: String,
    password: SecretString,
}

impl AuthService {
    pub fn new(jwt_manager: Arc<JwtManager>, settings: &AuthSettings, password: SecretString) -> Self {
        Self {
            jwt_manager,
            username: settings.username.clone(),
            password,
        }
    }

    /// 用户名密码换取访问令牌
    pub fn login(&self, request: &LoginRequest) -> Result<TokenResponse, AppError> {
        if request.username != self.username
            || request.password != *self.password.expose_secret()
        {
            tracing::warn!(username = %request.username, "登录失败");
            return Err(AppError::ValidationError("用户名或密码错误".to_string()));
        }

        let access_token = self.jwt_manager.generate_access_token(&self.username)?;
        tracing::info!(username = %self.username, "登录成功");

        Ok(TokenResponse {
            access_token,
            token_type: "bearer".to_string(),
            expires_in: self.jwt_manager.expiry_seconds(),
        })
    }

    /// 根据令牌获取当前用户
    pub fn current_user(&self, token: &str) -> Result<UserInfo, AppError> {
        let claims = self.jwt_manager.validate_token(token)?;

        Ok(UserInfo {
            user_id: 1,
            user_email: format!("{}@example.com", claims.sub),
            user_name: claims.sub,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        let settings = AuthSettings::default();
        let jwt = Arc::new(JwtManager::new(
            &settings,
            &SecretString::new("test-secret".to_string()),
        ));
        AuthService::new(jwt, &settings, SecretString::new("123456".to_string()))
    }

    fn login(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_login_then_current_user() {
        let service = service();
        let token = service.login(&login("admin", "123456")).unwrap();
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.expires_in, 3600);

        let user = service.current_user(&token.access_token).unwrap();
        assert_eq!(user.user_name, "admin");
        assert_eq!(user.user_id, 1);
        assert_eq!(user.user_email, "admin@example.com");
    }

    #[test]
    fn test_wrong_password() {
        let err = service().login(&login("admin", "wrong")).unwrap_err();
        assert_eq!(err.to_string(), "用户名或密码错误");
    }

    #[test]
    fn test_invalid_token() {
        let err = service().current_user("fake-jwt-token").unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
