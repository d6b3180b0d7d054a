//! Hotness scoring and trend aggregation.
//!
//! Everything here is pure: callers pass the article snapshot and the
//! reference time, and decide themselves whether to persist what comes back.

use chrono::{DateTime, Timelike, Utc};
use std::collections::{BTreeMap, HashMap};

use super::error::HotnessError;
use super::model::{
    AnalysisResult, ArticleScore, CategoryHotNews, CategorySummary, DailyTrendPoint,
    HourlyTrendPoint, RankedArticle, TrendData, ANALYSIS_TYPE_HOTNESS,
};
use super::weights::SourceWeights;
use crate::domain::news::Article;

pub const MAX_SCORE: f64 = 100.0;
/// Length of the canonical ranking kept in every result
pub const TOP_NEWS_LIMIT: usize = 20;
pub const CATEGORY_TOP_LIMIT: usize = 5;

const VIEW_WEIGHT: f64 = 0.1;
const COMMENT_WEIGHT: f64 = 0.3;
const SHARE_WEIGHT: f64 = 0.6;

/// Engagement score before any multiplier
pub fn base_score(article: &Article) -> f64 {
    article.view_count as f64 * VIEW_WEIGHT
        + article.comment_count as f64 * COMMENT_WEIGHT
        + article.share_count as f64 * SHARE_WEIGHT
}

/// Hours since publication; future timestamps count as zero
pub fn hours_since(published_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let millis = now.signed_duration_since(published_at).num_milliseconds();
    (millis as f64 / 3_600_000.0).max(0.0)
}

/// Step decay with inclusive upper bounds
pub fn time_factor(hours: f64) -> f64 {
    if hours <= 1.0 {
        1.0
    } else if hours <= 6.0 {
        0.8
    } else if hours <= 24.0 {
        0.5
    } else if hours <= 72.0 {
        0.3
    } else {
        0.1
    }
}

/// Weight by title length in characters, not bytes
pub fn title_weight(title: &str) -> f64 {
    match title.chars().count() {
        15..=30 => 1.2,
        10..=14 | 31..=40 => 1.0,
        0..=9 => 0.8,
        _ => 0.7,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Unclamped product of all factors
fn raw_score(article: &Article, now: DateTime<Utc>, weights: &SourceWeights) -> f64 {
    base_score(article)
        * time_factor(hours_since(article.published_at, now))
        * weights.weight_for(&article.source)
        * title_weight(&article.title)
}

fn finalize(raw: f64) -> f64 {
    round2(raw.min(MAX_SCORE))
}

/// Hotness of one article at `now`, capped at 100 and rounded to 2 decimals
pub fn score_article(article: &Article, now: DateTime<Utc>, weights: &SourceWeights) -> f64 {
    finalize(raw_score(article, now, weights))
}

fn try_score_article(
    article: &Article,
    now: DateTime<Utc>,
    weights: &SourceWeights,
) -> Result<f64, HotnessError> {
    let raw = raw_score(article, now, weights);
    if !raw.is_finite() {
        return Err(HotnessError::Computation {
            id: article.id,
            reason: format!("score is not a finite number ({})", raw),
        });
    }
    Ok(finalize(raw))
}

/// Run a full hotness pass over the articles published inside
/// `[window_start, window_end]`.
///
/// Returns `Ok(None)` when no article falls in the window. Articles whose
/// score cannot be computed are skipped and counted in `skipped_count`.
pub fn analyze(
    articles: &[Article],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    now: DateTime<Utc>,
    weights: &SourceWeights,
) -> Result<Option<AnalysisResult>, HotnessError> {
    if window_start > window_end {
        return Err(HotnessError::InvalidInput(format!(
            "window start {} is after window end {}",
            window_start, window_end
        )));
    }

    let in_window: Vec<&Article> = articles
        .iter()
        .filter(|a| a.published_at >= window_start && a.published_at <= window_end)
        .collect();

    if in_window.is_empty() {
        return Ok(None);
    }

    let mut scored: Vec<(&Article, f64)> = Vec::with_capacity(in_window.len());
    let mut skipped_count = 0;
    for article in &in_window {
        match try_score_article(article, now, weights) {
            Ok(score) => scored.push((*article, score)),
            Err(e) => {
                skipped_count += 1;
                tracing::warn!(article_id = %article.id, error = %e, "Skipping article");
            }
        }
    }

    let result = AnalysisResult {
        analysis_type: ANALYSIS_TYPE_HOTNESS.to_string(),
        window_start,
        window_end,
        top_news: rank(&scored, TOP_NEWS_LIMIT),
        trend_data: trend(&scored),
        category_data: summarize_categories(&scored),
        total_news_count: in_window.len(),
        skipped_count,
        analysis_period: format!(
            "{} to {}",
            window_start.date_naive(),
            window_end.date_naive()
        ),
        scores: scored
            .iter()
            .map(|(article, score)| ArticleScore {
                id: article.id,
                hotness_score: *score,
            })
            .collect(),
    };

    tracing::debug!(
        total = result.total_news_count,
        skipped = result.skipped_count,
        categories = result.category_data.len(),
        "Hotness analysis computed"
    );

    Ok(Some(result))
}

/// Stable descending sort by score
fn sort_by_score_desc<T>(items: &mut [T], score: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| score(b).total_cmp(&score(a)));
}

fn rank(scored: &[(&Article, f64)], limit: usize) -> Vec<RankedArticle> {
    let mut ranking: Vec<RankedArticle> = scored
        .iter()
        .map(|(article, score)| RankedArticle::new(article, *score))
        .collect();
    sort_by_score_desc(&mut ranking, |r| r.hotness_score);
    ranking.truncate(limit);
    ranking
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn trend(scored: &[(&Article, f64)]) -> TrendData {
    let mut hourly: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
    let mut daily = BTreeMap::new();

    for (article, score) in scored {
        hourly
            .entry(article.published_at.hour())
            .or_insert_with(Vec::new)
            .push(*score);
        daily
            .entry(article.published_at.date_naive())
            .or_insert_with(Vec::new)
            .push(*score);
    }

    TrendData {
        hourly: hourly
            .into_iter()
            .map(|(hour, scores)| HourlyTrendPoint {
                hour,
                average_hotness: mean(&scores),
            })
            .collect(),
        daily: daily
            .into_iter()
            .map(|(date, scores)| DailyTrendPoint {
                date,
                average_hotness: mean(&scores),
            })
            .collect(),
    }
}

fn summarize_categories(scored: &[(&Article, f64)]) -> Vec<CategorySummary> {
    // Groups keep first-seen order so equal averages stay in input order
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<(&Article, f64)>)> = Vec::new();

    for (article, score) in scored {
        let label = article.category_label();
        let slot = *index.entry(label).or_insert_with(|| {
            groups.push((label, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push((*article, *score));
    }

    let mut summaries: Vec<CategorySummary> = groups
        .into_iter()
        .map(|(label, mut members)| {
            let count = members.len();
            let total: f64 = members.iter().map(|(_, score)| score).sum();

            sort_by_score_desc(&mut members, |(_, score)| *score);
            let hot_news = members
                .iter()
                .take(CATEGORY_TOP_LIMIT)
                .map(|(article, score)| CategoryHotNews {
                    id: article.id,
                    title: article.title.clone(),
                    hotness_score: *score,
                })
                .collect();

            CategorySummary {
                category: label.to_string(),
                count,
                average_hotness: round2(total / count as f64),
                total_hotness: round2(total),
                hot_news,
            }
        })
        .collect();

    sort_by_score_desc(&mut summaries, |s| s.average_hotness);
    summaries
}
