// src/domain/post_statistics.rs

//! ユーザー別の月次投稿統計
//!
//! 投稿の作成日時を (年, 月) に切り詰めてグループ化し、月ごとの件数と
//! 月あたりの平均投稿数を計算する。I/O を持たない純粋関数で、
//! 複数のタスクから同時に呼び出してよい。

use chrono::{DateTime, Datelike, Utc};
use std::collections::BTreeMap;
use std::fmt;

/// 統計対象のユーザー（解決済みの識別情報）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectUser {
    pub user_id: i32,
    pub username: String,
}

impl SubjectUser {
    pub fn new(user_id: i32, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }
}

/// 暦月のキー。年→月の順で比較されるため、そのまま時系列順になる
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// 日・時・分・秒を切り捨てて月単位のキーにする（タイムゾーン変換は行わない）
    pub fn from_datetime(timestamp: &DateTime<Utc>) -> Self {
        Self {
            year: timestamp.year(),
            month: timestamp.month(),
        }
    }
}

/// `YYYY-MM` 形式
impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// 1か月分の投稿数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthBucket {
    pub month: MonthKey,
    pub post_count: u64,
}

/// 統計レポート
///
/// `posts_per_month` は時系列の昇順で、投稿が1件以上ある月のみを含む。
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsReport {
    pub user_id: i32,
    pub username: String,
    pub total_posts: u64,
    pub total_months: u64,
    pub average_posts_per_month: f64,
    pub posts_per_month: Vec<MonthBucket>,
}

/// 投稿作成日時の集合から統計レポートを作成する
///
/// 入力の順序には依存しない。投稿が0件の場合、平均は 0 とする。
pub fn compute<I>(user: SubjectUser, created_at: I) -> StatisticsReport
where
    I: IntoIterator<Item = DateTime<Utc>>,
{
    let mut counts: BTreeMap<MonthKey, u64> = BTreeMap::new();
    for timestamp in created_at {
        *counts.entry(MonthKey::from_datetime(&timestamp)).or_insert(0) += 1;
    }

    // BTreeMap なのでキー順（= 時系列順）で取り出せる
    let posts_per_month: Vec<MonthBucket> = counts
        .into_iter()
        .map(|(month, post_count)| MonthBucket { month, post_count })
        .collect();

    let total_posts: u64 = posts_per_month.iter().map(|b| b.post_count).sum();
    let total_months = posts_per_month.len() as u64;
    let average_posts_per_month = if total_months == 0 {
        0.0
    } else {
        total_posts as f64 / total_months as f64
    };

    StatisticsReport {
        user_id: user.user_id,
        username: user.username,
        total_posts,
        total_months,
        average_posts_per_month,
        posts_per_month,
    }
}
