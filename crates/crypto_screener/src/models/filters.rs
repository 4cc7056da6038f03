use serde::{Deserialize, Serialize};

use crate::utils::serde_utils::{deserialize_optional_number, deserialize_optional_string};

/// Screener constraints. A `None` field places no constraint on the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub search: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub min_market_cap: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub max_market_cap: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub min_volume: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub min_percent_change: Option<f64>,
}

impl FilterCriteria {
    pub fn with_search(text: impl Into<String>) -> Self {
        Self {
            search: Some(text.into()),
            ..Default::default()
        }
    }
}
