// src/utils/password.rs

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use std::env;
use thiserror::Error;

/// パスワード関連のエラー
#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingError(#[from] argon2::password_hash::Error),

    #[error("Argon2 parameter error: {0}")]
    Argon2Error(#[from] argon2::Error),

    /// ポリシー違反（メッセージは利用者向け）
    #[error("Weak password: {}", .0.join("; "))]
    WeakPassword(Vec<String>),

    #[error("Password configuration error: {0}")]
    ConfigurationError(String),
}

/// パスワード要件
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    /// 最小文字数
    pub min_length: usize,
    /// 最大文字数
    pub max_length: usize,
    /// 数字のみのパスワードを拒否
    pub reject_numeric_only: bool,
    /// 共通パスワードをチェック
    pub check_common_passwords: bool,
    /// ユーザー名と同一・包含を拒否
    pub reject_username_similarity: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 128,
            reject_numeric_only: true,
            check_common_passwords: true,
            reject_username_similarity: true,
        }
    }
}

impl PasswordPolicy {
    /// パスワードポリシーを検証
    pub fn validate(&self) -> Result<(), PasswordError> {
        if self.min_length < 4 {
            return Err(PasswordError::ConfigurationError(
                "Minimum password length must be at least 4".to_string(),
            ));
        }

        if self.max_length < self.min_length {
            return Err(PasswordError::ConfigurationError(
                "Maximum password length must not be less than minimum length".to_string(),
            ));
        }

        Ok(())
    }
}

/// Argon2 設定
#[derive(Debug, Clone)]
pub struct Argon2Config {
    /// メモリコスト（KB）
    pub memory_cost: u32,
    /// 時間コスト（反復回数）
    pub time_cost: u32,
    /// 並列度
    pub parallelism: u32,
    /// 出力長
    pub output_length: usize,
}

impl Default for Argon2Config {
    fn default() -> Self {
        Self {
            memory_cost: 65536, // 64MB
            time_cost: 3,       // 3回反復
            parallelism: 4,     // 4並列
            output_length: 32,  // 32バイト出力
        }
    }
}

impl Argon2Config {
    /// 環境変数から設定を読み込み（不正値はデフォルトにフォールバック）
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            memory_cost: env_or("ARGON2_MEMORY_COST", defaults.memory_cost),
            time_cost: env_or("ARGON2_TIME_COST", defaults.time_cost),
            parallelism: env_or("ARGON2_PARALLELISM", defaults.parallelism),
            output_length: env_or("ARGON2_OUTPUT_LENGTH", defaults.output_length),
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// パスワードハッシュマネージャー
pub struct PasswordManager {
    argon2: Argon2<'static>,
    policy: PasswordPolicy,
}

impl PasswordManager {
    /// 新しいPasswordManagerを作成
    pub fn new(argon2_config: Argon2Config, policy: PasswordPolicy) -> Result<Self, PasswordError> {
        policy.validate()?;

        let argon2 = Argon2::new(
            argon2::Algorithm::Argon2id,
            argon2::Version::V0x13,
            argon2::Params::new(
                argon2_config.memory_cost,
                argon2_config.time_cost,
                argon2_config.parallelism,
                Some(argon2_config.output_length),
            )
            .map_err(PasswordError::Argon2Error)?,
        );

        Ok(Self { argon2, policy })
    }

    /// パスワードをハッシュ化（ポリシーチェックは呼び出し側で済ませておくこと）
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(PasswordError::HashingError)?;

        Ok(password_hash.to_string())
    }

    /// パスワードを検証
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(PasswordError::HashingError)?;

        match self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
        {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordError::HashingError(e)),
        }
    }

    /// パスワード要件をチェック
    pub fn validate_password_strength(
        &self,
        password: &str,
        username: &str,
    ) -> Result<(), PasswordError> {
        let mut errors = Vec::new();
        let length = password.chars().count();

        // 長さチェック
        if length < self.policy.min_length {
            errors.push(format!(
                "This password is too short. It must contain at least {} characters.",
                self.policy.min_length
            ));
        }

        if length > self.policy.max_length {
            errors.push(format!(
                "Password must be no more than {} characters long.",
                self.policy.max_length
            ));
        }

        // 数字のみチェック
        if self.policy.reject_numeric_only
            && !password.is_empty()
            && password.chars().all(|c| c.is_ascii_digit())
        {
            errors.push("This password is entirely numeric.".to_string());
        }

        // 共通パスワードチェック
        if self.policy.check_common_passwords && is_common_password(password) {
            errors.push("This password is too common.".to_string());
        }

        // ユーザー名との類似チェック
        if self.policy.reject_username_similarity && is_similar_to_username(password, username) {
            errors.push("The password is too similar to the username.".to_string());
        }

        if !errors.is_empty() {
            return Err(PasswordError::WeakPassword(errors));
        }

        Ok(())
    }
}

// --- ヘルパー関数 ---

/// 共通パスワードかどうかをチェック
fn is_common_password(password: &str) -> bool {
    const COMMON_PASSWORDS: &[&str] = &[
        "password",
        "password1",
        "password123",
        "123456",
        "123456789",
        "12345678",
        "1234567890",
        "qwerty",
        "qwertyuiop",
        "abc123",
        "admin",
        "letmein",
        "welcome",
        "monkey",
        "dragon",
        "111111",
        "123123",
        "654321",
        "superman",
        "qazwsx",
        "football",
        "baseball",
        "sunshine",
        "iloveyou",
        "princess",
        "trustno1",
    ];

    let lower_password = password.to_lowercase();
    COMMON_PASSWORDS.contains(&lower_password.as_str())
}

/// パスワードがユーザー名と同一、または包含関係にあるか
fn is_similar_to_username(password: &str, username: &str) -> bool {
    if username.is_empty() {
        return false;
    }
    let password = password.to_lowercase();
    let username = username.to_lowercase();
    password == username || (username.len() >= 4 && password.contains(&username))
}
