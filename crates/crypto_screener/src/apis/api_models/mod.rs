pub mod chart;
pub mod query;
pub mod views;
