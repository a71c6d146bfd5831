// src/api/dto/statistics_dto.rs

use crate::domain::post_statistics::{MonthBucket, StatisticsReport};
use serde::{Serialize, Serializer};

/// 月ごとの投稿数
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyPostCount {
    /// "YYYY-MM"
    pub month: String,
    pub post_count: u64,
}

impl From<MonthBucket> for MonthlyPostCount {
    fn from(bucket: MonthBucket) -> Self {
        Self {
            month: bucket.month.to_string(),
            post_count: bucket.post_count,
        }
    }
}

/// ユーザー投稿統計レスポンス
#[derive(Debug, Clone, Serialize)]
pub struct UserPostStatisticsResponse {
    pub user_id: i32,
    pub username: String,
    pub total_posts: u64,
    pub total_months: u64,
    #[serde(serialize_with = "serialize_average")]
    pub average_posts_per_month: f64,
    pub posts_per_month: Vec<MonthlyPostCount>,
}

impl From<StatisticsReport> for UserPostStatisticsResponse {
    fn from(report: StatisticsReport) -> Self {
        Self {
            user_id: report.user_id,
            username: report.username,
            total_posts: report.total_posts,
            total_months: report.total_months,
            average_posts_per_month: report.average_posts_per_month,
            posts_per_month: report
                .posts_per_month
                .into_iter()
                .map(MonthlyPostCount::from)
                .collect(),
        }
    }
}

/// 投稿のないユーザーの平均は `0.0` ではなく整数の `0` として出力する
fn serialize_average<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if *value == 0.0 {
        serializer.serialize_u64(0)
    } else {
        serializer.serialize_f64(*value)
    }
}
