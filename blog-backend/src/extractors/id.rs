// src/extractors/id.rs

use crate::error::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use tracing::debug;

/// 整数IDのパスパラメータ
///
/// 整数として解釈できない値はリソースが存在しないものとして 404 を返す。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound("Not found.".to_string()))?;

        parse_id(&raw).map(IdPath).ok_or_else(|| {
            debug!(path = %parts.uri.path(), value = %raw, "Non-integer id in path");
            AppError::NotFound("Not found.".to_string())
        })
    }
}

/// パスの文字列を正の整数IDとして解釈する
///
/// 符号付き（`+1`, `-1`）や数字以外を含む値は受け付けない。
pub fn parse_id(raw: &str) -> Option<i32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<i32>().ok().filter(|id| *id > 0)
}
