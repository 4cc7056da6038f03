use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::debug;
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::{models::discussions::SentimentLabel, utils::errors::AppError};

pub const POSITIVE_KEYWORDS: [&str; 20] = [
    "bullish", "moon", "rocket", "buy", "long", "profit", "gain", "growth", "success", "win",
    "positive", "good", "great", "amazing", "awesome", "breakout", "pump", "surge", "rally",
    "recovery",
];

pub const NEGATIVE_KEYWORDS: [&str; 20] = [
    "bearish", "dump", "sell", "short", "loss", "drop", "crash", "scam", "fraud", "warning",
    "danger", "bad", "terrible", "awful", "failure", "collapse", "plunge", "decline",
    "correction", "fud",
];

/// Polarity strictly above this (or below its negation) decides the label on
/// its own.
pub const POLARITY_THRESHOLD: f64 = 0.1;

static VADER: Lazy<SentimentIntensityAnalyzer<'static>> = Lazy::new(SentimentIntensityAnalyzer::new);

/// Continuous sentiment estimate in `[-1, 1]`.
pub trait PolarityEstimator: Send + Sync {
    fn polarity(&self, text: &str) -> Result<f64, AppError>;
}

/// Lexicon-based estimator backed by VADER's compound score.
#[derive(Debug, Default, Clone, Copy)]
pub struct VaderPolarity;

impl PolarityEstimator for VaderPolarity {
    fn polarity(&self, text: &str) -> Result<f64, AppError> {
        let compound = VADER.polarity_scores(text).get("compound").copied();
        match compound {
            Some(score) if score.is_finite() => Ok(score.clamp(-1.0, 1.0)),
            other => Err(AppError::SentimentError(format!(
                "no usable compound score: {:?}",
                other
            ))),
        }
    }
}

/// Number of keywords that occur anywhere in `text_lower`. Each keyword
/// counts once, however often it appears.
pub fn count_keywords(text_lower: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| text_lower.contains(*k)).count()
}

pub fn keyword_label(text: &str) -> SentimentLabel {
    let text_lower = text.to_lowercase();
    let positive = count_keywords(&text_lower, &POSITIVE_KEYWORDS);
    let negative = count_keywords(&text_lower, &NEGATIVE_KEYWORDS);

    if positive > negative {
        SentimentLabel::Positive
    } else if negative > positive {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

#[derive(Clone)]
pub struct SentimentService {
    estimator: Arc<dyn PolarityEstimator>,
}

impl Default for SentimentService {
    fn default() -> Self {
        Self::new(Arc::new(VaderPolarity))
    }
}

impl SentimentService {
    pub fn new(estimator: Arc<dyn PolarityEstimator>) -> Self {
        Self { estimator }
    }

    pub fn classify(&self, text: &str) -> SentimentLabel {
        if text.is_empty() {
            return SentimentLabel::Neutral;
        }

        let keywords = keyword_label(text);
        let polarity = self.estimator.polarity(text).unwrap_or_else(|e| {
            debug!("Falling back to neutral polarity: {}", e);
            0.0
        });

        if polarity > POLARITY_THRESHOLD || keywords == SentimentLabel::Positive {
            SentimentLabel::Positive
        } else if polarity < -POLARITY_THRESHOLD || keywords == SentimentLabel::Negative {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::test_support::{FailingPolarity, FixedPolarity};

    fn with_polarity(value: f64) -> SentimentService {
        SentimentService::new(Arc::new(FixedPolarity(value)))
    }

    #[test]
    fn empty_text_is_neutral() {
        assert_eq!(SentimentService::default().classify(""), SentimentLabel::Neutral);
    }

    #[test]
    fn hype_is_positive() {
        let service = SentimentService::default();
        assert_eq!(
            service.classify("to the moon, bullish buy"),
            SentimentLabel::Positive
        );
    }

    #[test]
    fn fraud_talk_is_negative() {
        let service = SentimentService::default();
        assert_eq!(service.classify("scam dump crash"), SentimentLabel::Negative);
    }

    #[test]
    fn keywords_count_by_presence_not_frequency() {
        assert_eq!(count_keywords("moon moon moon", &POSITIVE_KEYWORDS), 1);
        // "belong" contains "long"
        assert_eq!(count_keywords("we belong here", &POSITIVE_KEYWORDS), 1);
    }

    #[rstest]
    #[case("Bullish breakout incoming", SentimentLabel::Positive)]
    #[case("Bearish, sell before the crash", SentimentLabel::Negative)]
    #[case("buy the dip or sell the news", SentimentLabel::Neutral)]
    #[case("Weekly discussion thread", SentimentLabel::Neutral)]
    fn keyword_majority_decides(#[case] text: &str, #[case] expected: SentimentLabel) {
        assert_eq!(keyword_label(text), expected);
    }

    #[test]
    fn strong_polarity_wins_over_keywords() {
        let service = with_polarity(0.6);
        assert_eq!(service.classify("scam dump crash"), SentimentLabel::Positive);

        let service = with_polarity(-0.6);
        assert_eq!(service.classify("ETF approval news"), SentimentLabel::Negative);
    }

    #[test]
    fn positive_keywords_beat_negative_polarity() {
        let service = with_polarity(-0.9);
        assert_eq!(service.classify("bullish"), SentimentLabel::Positive);
    }

    #[rstest]
    #[case(0.1)]
    #[case(-0.1)]
    #[case(0.0)]
    fn polarity_at_threshold_is_not_decisive(#[case] polarity: f64) {
        let service = with_polarity(polarity);
        assert_eq!(
            service.classify("Weekly discussion thread"),
            SentimentLabel::Neutral
        );
    }

    #[test]
    fn estimator_failure_falls_back_to_keywords() {
        let service = SentimentService::new(Arc::new(FailingPolarity));
        assert_eq!(service.classify("rally"), SentimentLabel::Positive);
        assert_eq!(service.classify("fud"), SentimentLabel::Negative);
        assert_eq!(service.classify("hello"), SentimentLabel::Neutral);
    }

    #[test]
    fn vader_scores_stay_in_range() {
        for text in ["I love this", "I hate this", "ok", "!!!"] {
            let score = VaderPolarity.polarity(text).unwrap();
            assert!((-1.0..=1.0).contains(&score));
        }
    }
}
