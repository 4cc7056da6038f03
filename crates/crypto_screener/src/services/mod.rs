pub mod discussion_service;
pub mod filter_service;
pub mod market_service;
pub mod sentiment_service;
