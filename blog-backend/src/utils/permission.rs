// src/utils/permission.rs

use crate::domain::post_model;
use crate::domain::user_model::UserClaims;
use axum::http::Method;

/// 権限チェック機能
pub struct PermissionChecker;

impl PermissionChecker {
    /// 投稿の編集・削除が可能か（作成者本人のみ）
    pub fn can_modify(post: &post_model::Model, requesting_user: &UserClaims) -> bool {
        post.author_id == requesting_user.user_id
    }

    /// 読み取り専用（安全な）メソッドか
    ///
    /// 「認証済み、または読み取り専用」ポリシーで未認証でも許可されるメソッド。
    pub fn is_safe_method(method: &Method) -> bool {
        matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
    }
}
