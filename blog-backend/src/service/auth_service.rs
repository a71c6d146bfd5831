// src/service/auth_service.rs
use crate::api::dto::auth_dto::*;
use crate::domain::user_model::UserClaims;
use crate::error::{AppError, AppResult, FieldErrors};
use crate::repository::user_repository::{CreateUser, UserRepository};
use crate::utils::jwt::JwtManager;
use crate::utils::password::{PasswordError, PasswordManager};
use sea_orm::SqlErr;
use std::sync::Arc;
use tracing::{error, info, warn};
use validator::Validate;

const DUPLICATE_USERNAME_MESSAGE: &str = "A user with that username already exists.";
const INVALID_CREDENTIALS_MESSAGE: &str = "Unable to log in with provided credentials.";

/// 認証サービス
pub struct AuthService {
    user_repo: Arc<UserRepository>,
    password_manager: Arc<PasswordManager>,
    jwt_manager: Arc<JwtManager>,
}

impl AuthService {
    pub fn new(
        user_repo: Arc<UserRepository>,
        password_manager: Arc<PasswordManager>,
        jwt_manager: Arc<JwtManager>,
    ) -> Self {
        Self {
            user_repo,
            password_manager,
            jwt_manager,
        }
    }

    /// ユーザー登録
    pub async fn register(&self, payload: RegisterRequest) -> AppResult<RegisterResponse> {
        payload.validate()?;

        if self.user_repo.is_username_taken(&payload.username).await? {
            return Err(AppError::field_error(
                "username",
                DUPLICATE_USERNAME_MESSAGE,
            ));
        }

        // パスワード強度チェック
        self.password_manager
            .validate_password_strength(&payload.password, &payload.username)
            .map_err(|e| match e {
                PasswordError::WeakPassword(messages) => {
                    let mut errors = FieldErrors::new();
                    errors.insert("password".to_string(), messages);
                    AppError::ValidationErrors(errors)
                }
                other => AppError::InternalServerError(other.to_string()),
            })?;

        let password_hash = self
            .password_manager
            .hash_password(&payload.password)
            .map_err(|e| {
                AppError::InternalServerError(format!("Password hashing failed: {}", e))
            })?;

        let create_user = CreateUser {
            username: payload.username,
            password_hash,
        };

        // 同時登録で一意制約に当たった場合も重複として扱う
        let user = self.user_repo.create(create_user).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                AppError::field_error("username", DUPLICATE_USERNAME_MESSAGE)
            } else {
                AppError::DbErr(e)
            }
        })?;

        info!(
            user_id = %user.id,
            username = %user.username,
            "User registered successfully"
        );

        Ok(user.into())
    }

    /// アクセストークン発行
    pub async fn issue_token(&self, payload: TokenRequest) -> AppResult<TokenResponse> {
        payload.validate()?;

        let user = self
            .user_repo
            .find_by_username(&payload.username)
            .await?
            .ok_or_else(|| {
                warn!(
                    username = %payload.username,
                    "Token request with unknown username"
                );
                AppError::BadRequest(INVALID_CREDENTIALS_MESSAGE.to_string())
            })?;

        // アカウント状態チェック
        if !user.can_authenticate() {
            warn!(user_id = %user.id, "Token request for inactive account");
            return Err(AppError::BadRequest(INVALID_CREDENTIALS_MESSAGE.to_string()));
        }

        let is_valid = self
            .password_manager
            .verify_password(&payload.password, &user.password_hash)
            .map_err(|e| {
                error!(
                    user_id = %user.id,
                    error = %e,
                    "Password verification failed"
                );
                AppError::InternalServerError("Authentication failed".to_string())
            })?;

        if !is_valid {
            warn!(user_id = %user.id, "Token request with incorrect password");
            return Err(AppError::BadRequest(INVALID_CREDENTIALS_MESSAGE.to_string()));
        }

        let token = self
            .jwt_manager
            .generate_access_token(UserClaims::from(&user))
            .map_err(|e| {
                AppError::InternalServerError(format!("Token generation failed: {}", e))
            })?;

        info!(user_id = %user.id, "Access token issued");

        Ok(TokenResponse::bearer(
            token,
            self.jwt_manager.access_token_expires_in(),
        ))
    }
}
