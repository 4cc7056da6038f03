use crate::models::{filters::FilterCriteria, markets::MarketRecord};

/// Keeps the records satisfying every constraint present in `criteria`.
///
/// Missing metrics compare as `0`. Input order is preserved.
pub fn apply(records: Vec<MarketRecord>, criteria: &FilterCriteria) -> Vec<MarketRecord> {
    let mut records = records;

    if let Some(search) = criteria.search.as_deref() {
        let needle = search.to_lowercase();
        records.retain(|r| r.matches_text(&needle));
    }
    if let Some(min) = criteria.min_market_cap {
        records.retain(|r| r.market_cap_or_zero() >= min);
    }
    if let Some(max) = criteria.max_market_cap {
        records.retain(|r| r.market_cap_or_zero() <= max);
    }
    if let Some(min) = criteria.min_volume {
        records.retain(|r| r.total_volume_or_zero() >= min);
    }
    if let Some(min) = criteria.min_percent_change {
        records.retain(|r| r.change_24h_or_zero() >= min);
    }

    records
}
