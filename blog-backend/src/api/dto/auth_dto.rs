// src/api/dto/auth_dto.rs

use crate::domain::user_model;
use crate::utils::validation;
use serde::{Deserialize, Serialize};
use validator::Validate;

// --- リクエストDTO ---

/// ユーザー登録リクエスト
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        length(
            min = validation::username::MIN_LENGTH,
            max = validation::username::MAX_LENGTH,
            message = "Ensure this field has no more than 150 characters."
        ),
        custom(function = validation::validate_username)
    )]
    pub username: String,

    /// 強度チェックはサービス層でユーザー名と合わせて行う
    #[validate(custom(function = validation::validate_not_empty_or_whitespace))]
    pub password: String,
}

/// トークン発行リクエスト
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TokenRequest {
    #[validate(custom(function = validation::validate_not_empty_or_whitespace))]
    pub username: String,

    #[validate(custom(function = validation::validate_not_empty_or_whitespace))]
    pub password: String,
}

// --- レスポンスDTO ---

/// 登録結果（パスワードは返さない）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub id: i32,
    pub username: String,
}

impl From<user_model::Model> for RegisterResponse {
    fn from(user: user_model::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// トークン発行結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub token_type: String,
    /// 有効期限（秒）
    pub expires_in: i64,
}

impl TokenResponse {
    pub fn bearer(token: String, expires_in: i64) -> Self {
        Self {
            token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}
