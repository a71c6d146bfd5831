// src/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// フィールド名 -> エラーメッセージ一覧
pub type FieldErrors = HashMap<String, Vec<String>>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DbErr(#[from] DbErr),

    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Multiple validation errors")]
    ValidationErrors(FieldErrors),

    #[error("Validation failed")]
    ValidationFailure(#[from] ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl AppError {
    /// 単一フィールドのバリデーションエラーを作成
    pub fn field_error(field: &str, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.to_string(), vec![message.into()]);
        AppError::ValidationErrors(errors)
    }
}

// axum でエラーをHTTPレスポンスに変換するための実装
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::DbErr(db_err) => {
                // サーバーログには詳細を出す
                error!(error = ?db_err, "Database error");

                match db_err {
                    DbErr::RecordNotFound(_) => (
                        StatusCode::NOT_FOUND,
                        ErrorResponse::new("Not found."),
                    ),
                    _ => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorResponse::new("A database error occurred"),
                    ),
                }
            }
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, ErrorResponse::new(message)),
            AppError::ValidationErrors(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_errors("Validation failed", errors),
            ),
            AppError::ValidationFailure(errors) => {
                let field_errors: FieldErrors = errors
                    .field_errors()
                    .into_iter()
                    .map(|(field, errors)| {
                        let messages = errors
                            .iter()
                            .map(|e| {
                                e.message
                                    .as_ref()
                                    .map_or_else(|| "Invalid value".to_string(), |m| m.to_string())
                            })
                            .collect();
                        (field.to_string(), messages)
                    })
                    .collect();
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_errors("Validation failed", field_errors),
                )
            }
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, ErrorResponse::new(message)),
            AppError::Unauthorized(message) => {
                (StatusCode::UNAUTHORIZED, ErrorResponse::new(message))
            }
            AppError::Forbidden(message) => (StatusCode::FORBIDDEN, ErrorResponse::new(message)),
            AppError::InternalServerError(message) => {
                error!(error = %message, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("An internal server error occurred"),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

// Result 型のエイリアス
pub type AppResult<T> = Result<T, AppError>;

/// 統一的なエラーレスポンス構造
///
/// `{"detail": "..."}` を基本形とし、フィールド単位のエラーがある場合のみ `errors` を付与する。
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
            errors: None,
        }
    }

    pub fn with_errors(detail: impl Into<String>, errors: FieldErrors) -> Self {
        Self {
            detail: detail.into(),
            errors: Some(errors),
        }
    }
}
