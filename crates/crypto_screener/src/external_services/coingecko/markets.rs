use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct MarketsQuery<'a> {
    pub vs_currency: &'a str,
    pub order: &'a str,
    pub per_page: u32,
    pub page: u32,
    pub sparkline: bool,
    pub price_change_percentage: &'a str,
}

impl<'a> MarketsQuery<'a> {
    /// First page of the listing ordered by market cap, quoted in USD.
    pub fn by_market_cap(per_page: u32, price_change_percentage: &'a str) -> Self {
        Self {
            vs_currency: "usd",
            order: "market_cap_desc",
            per_page,
            page: 1,
            sparkline: false,
            price_change_percentage,
        }
    }
}
