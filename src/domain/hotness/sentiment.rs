//! Keyword-count sentiment. Deliberately crude: lexicon membership by
//! substring containment and a word count approximated as half the text length.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::news::Article;

pub const POSITIVE_WORDS: &[&str] = &[
    "好", "优秀", "成功", "上涨", "创新", "进步", "胜利", "高兴", "繁荣",
];
pub const NEGATIVE_WORDS: &[&str] = &[
    "坏", "失败", "下跌", "危机", "问题", "困难", "错误", "悲伤", "衰退",
];

const CLASSIFICATION_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentClass {
    Positive,
    Negative,
    Neutral,
}

impl SentimentClass {
    pub fn classify(score: f64) -> Self {
        if score > CLASSIFICATION_THRESHOLD {
            SentimentClass::Positive
        } else if score < -CLASSIFICATION_THRESHOLD {
            SentimentClass::Negative
        } else {
            SentimentClass::Neutral
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSentiment {
    pub id: Uuid,
    pub title: String,
    pub sentiment_score: f64,
    pub positive_count: usize,
    pub negative_count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    pub sentiment_data: Vec<ArticleSentiment>,
    pub sentiment_distribution: SentimentDistribution,
    pub average_sentiment: f64,
}

fn lexicon_hits(text: &str, lexicon: &[&str]) -> usize {
    lexicon.iter().filter(|word| text.contains(*word)).count()
}

/// Score a free text in [-1, 1]
pub fn text_sentiment(text: &str) -> (f64, usize, usize) {
    let positive = lexicon_hits(text, POSITIVE_WORDS);
    let negative = lexicon_hits(text, NEGATIVE_WORDS);
    let approx_words = text.chars().count() / 2;

    let score = (positive as f64 - negative as f64) / (approx_words as f64 + 1.0);
    (score.clamp(-1.0, 1.0), positive, negative)
}

pub fn article_sentiment(article: &Article) -> ArticleSentiment {
    let text = format!("{} {}", article.title, article.content);
    let (sentiment_score, positive_count, negative_count) = text_sentiment(&text);

    ArticleSentiment {
        id: article.id,
        title: article.title.clone(),
        sentiment_score,
        positive_count,
        negative_count,
    }
}

pub fn score_sentiment(articles: &[Article]) -> SentimentReport {
    let sentiment_data: Vec<ArticleSentiment> = articles.iter().map(article_sentiment).collect();

    let mut distribution = SentimentDistribution::default();
    for row in &sentiment_data {
        match SentimentClass::classify(row.sentiment_score) {
            SentimentClass::Positive => distribution.positive += 1,
            SentimentClass::Negative => distribution.negative += 1,
            SentimentClass::Neutral => distribution.neutral += 1,
        }
    }

    let average_sentiment = if sentiment_data.is_empty() {
        0.0
    } else {
        sentiment_data.iter().map(|r| r.sentiment_score).sum::<f64>()
            / sentiment_data.len() as f64
    };

    SentimentReport {
        sentiment_data,
        sentiment_distribution: distribution,
        average_sentiment,
    }
}
