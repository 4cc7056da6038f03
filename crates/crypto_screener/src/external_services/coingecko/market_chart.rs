use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartInterval {
    Daily,
    Hourly,
}

impl ChartInterval {
    pub fn for_days(days: u32) -> Self {
        if days > 1 {
            ChartInterval::Daily
        } else {
            ChartInterval::Hourly
        }
    }
}

#[derive(Serialize, Debug)]
pub struct MarketChartQuery<'a> {
    pub vs_currency: &'a str,
    pub days: u32,
    pub interval: ChartInterval,
}

/// `prices` holds `[epoch_millis, price]` pairs.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct MarketChart {
    pub prices: Vec<[f64; 2]>,
}
