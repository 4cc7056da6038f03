use crate::models::{
    discussions::{DiscussionPost, SentimentTally},
    filters::FilterCriteria,
    markets::{MarketRecord, TrendingCoin},
};

const MISSING: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub struct TrendingCoinView {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub rank: String,
    pub thumb: String,
}

impl From<&TrendingCoin> for TrendingCoinView {
    fn from(coin: &TrendingCoin) -> Self {
        TrendingCoinView {
            id: coin.id.clone(),
            name: coin.name.clone(),
            symbol: coin.symbol.clone(),
            rank: format_rank(coin.market_cap_rank),
            thumb: coin.thumb.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChangeView {
    pub text: String,
    /// CSS class: `up`, `down` or `flat`
    pub class: &'static str,
}

impl From<Option<f64>> for ChangeView {
    fn from(change: Option<f64>) -> Self {
        match change {
            Some(v) if v > 0.0 => ChangeView {
                text: format!("{:+.2}%", v),
                class: "up",
            },
            Some(v) if v < 0.0 => ChangeView {
                text: format!("{:.2}%", v),
                class: "down",
            },
            Some(_) => ChangeView {
                text: "0.00%".to_string(),
                class: "flat",
            },
            None => ChangeView {
                text: MISSING.to_string(),
                class: "flat",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarketRowView {
    pub id: String,
    pub name: String,
    pub symbol: String,
    /// Empty when the listing has no logo
    pub image: String,
    pub rank: String,
    pub price: String,
    pub market_cap: String,
    pub volume: String,
    pub change_24h: ChangeView,
    pub change_7d: ChangeView,
    pub change_30d: ChangeView,
}

impl From<&MarketRecord> for MarketRowView {
    fn from(record: &MarketRecord) -> Self {
        MarketRowView {
            id: record.id.clone(),
            name: record.name.clone(),
            symbol: record.symbol.to_uppercase(),
            image: record.image.clone().unwrap_or_default(),
            rank: format_rank(record.market_cap_rank),
            price: format_price(record.current_price),
            market_cap: format_compact_usd(record.market_cap),
            volume: format_compact_usd(record.total_volume),
            change_24h: record.price_change_percentage_24h.into(),
            change_7d: record.price_change_percentage_7d_in_currency.into(),
            change_30d: record.price_change_percentage_30d_in_currency.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostView {
    pub title: String,
    pub url: String,
    pub upvotes: i64,
    pub posted_at: String,
    pub source: String,
    pub sentiment: &'static str,
}

impl From<&DiscussionPost> for PostView {
    fn from(post: &DiscussionPost) -> Self {
        PostView {
            title: post.title.clone(),
            url: post.url.clone(),
            upvotes: post.upvotes,
            posted_at: post.timestamp.format("%Y-%m-%d %H:%M UTC").to_string(),
            source: post.source.clone(),
            sentiment: post.sentiment.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentimentBreakdownView {
    pub bullish_pct: String,
    pub bearish_pct: String,
    pub neutral_pct: String,
    pub total_posts: usize,
}

impl From<&SentimentTally> for SentimentBreakdownView {
    fn from(tally: &SentimentTally) -> Self {
        let pct = tally.percentages();
        SentimentBreakdownView {
            bullish_pct: format!("{:.1}", pct.positive),
            bearish_pct: format!("{:.1}", pct.negative),
            neutral_pct: format!("{:.1}", pct.neutral),
            total_posts: tally.total(),
        }
    }
}

/// Values echoed back into the screener form inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterFormView {
    pub search: String,
    pub min_market_cap: String,
    pub max_market_cap: String,
    pub min_volume: String,
    pub min_percent_change: String,
}

impl From<&FilterCriteria> for FilterFormView {
    fn from(criteria: &FilterCriteria) -> Self {
        let number = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();
        FilterFormView {
            search: criteria.search.clone().unwrap_or_default(),
            min_market_cap: number(criteria.min_market_cap),
            max_market_cap: number(criteria.max_market_cap),
            min_volume: number(criteria.min_volume),
            min_percent_change: number(criteria.min_percent_change),
        }
    }
}

pub fn format_rank(rank: Option<u32>) -> String {
    rank.map(|r| format!("#{}", r))
        .unwrap_or_else(|| MISSING.to_string())
}

pub fn format_price(price: Option<f64>) -> String {
    match price {
        None => MISSING.to_string(),
        Some(v) if v.abs() >= 1.0 || v == 0.0 => {
            format!("${}", group_thousands(&format!("{:.2}", v)))
        }
        Some(v) => format!("${:.6}", v),
    }
}

pub fn format_compact_usd(value: Option<f64>) -> String {
    let Some(v) = value else {
        return MISSING.to_string();
    };
    let abs = v.abs();
    if abs >= 1e12 {
        format!("${:.2}T", v / 1e12)
    } else if abs >= 1e9 {
        format!("${:.2}B", v / 1e9)
    } else if abs >= 1e6 {
        format!("${:.2}M", v / 1e6)
    } else if abs >= 1e3 {
        format!("${:.2}K", v / 1e3)
    } else {
        format!("${:.2}", v)
    }
}

fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}
