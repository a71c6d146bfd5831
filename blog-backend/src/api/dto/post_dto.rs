// src/api/dto/post_dto.rs
use crate::domain::post_model;
use crate::utils::validation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct CreatePostDto {
    #[validate(
        length(
            min = validation::post::TITLE_MIN_LENGTH,
            max = validation::post::TITLE_MAX_LENGTH,
            message = "Ensure this field has no more than 255 characters."
        ),
        custom(function = validation::validate_post_title)
    )]
    pub title: String,

    #[validate(
        length(min = validation::post::CONTENT_MIN_LENGTH, message = "This field may not be blank."),
        custom(function = validation::validate_not_empty_or_whitespace)
    )]
    pub content: String,
}

/// PUT による全置換なので作成時と同じ項目を必須とする
pub type UpdatePostDto = CreatePostDto;

// --- Response DTOs ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PostDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// 作成者のユーザーID（読み取り専用）
    pub author: i32,
}

impl From<post_model::Model> for PostDto {
    fn from(model: post_model::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            created_at: model.created_at,
            updated_at: model.updated_at,
            author: model.author_id,
        }
    }
}
