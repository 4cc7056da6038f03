use serde::Serialize;

use crate::{models::markets::PricePoint, utils::errors::AppError};

pub const PRICE_LINE_COLOR: &str = "#00D395";
pub const PRICE_LINE_WIDTH: u8 = 2;
const TRANSPARENT: &str = "rgba(0,0,0,0)";

/// Figure description handed to the client-side charting library.
#[derive(Debug, Serialize)]
pub struct ChartSpec {
    pub data: Vec<LineTrace>,
    pub layout: ChartLayout,
}

#[derive(Debug, Serialize)]
pub struct LineTrace {
    pub x: Vec<String>,
    pub y: Vec<f64>,
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    pub mode: &'static str,
    pub name: &'static str,
    pub line: LineStyle,
}

#[derive(Debug, Serialize)]
pub struct LineStyle {
    pub color: &'static str,
    pub width: u8,
}

#[derive(Debug, Serialize)]
pub struct ChartLayout {
    pub title: String,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str,
    pub font: Font,
}

#[derive(Debug, Serialize)]
pub struct Axis {
    pub title: &'static str,
    pub gridcolor: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Font {
    pub color: &'static str,
}

impl ChartSpec {
    pub fn price_line(points: &[PricePoint], days: u32) -> Self {
        let (x, y) = points
            .iter()
            .map(|p| (p.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(), p.price))
            .unzip();

        ChartSpec {
            data: vec![LineTrace {
                x,
                y,
                trace_type: "scatter",
                mode: "lines",
                name: "Price",
                line: LineStyle {
                    color: PRICE_LINE_COLOR,
                    width: PRICE_LINE_WIDTH,
                },
            }],
            layout: ChartLayout {
                title: format!("Price Chart - {} days", days),
                xaxis: Axis {
                    title: "Date",
                    gridcolor: "rgba(255,255,255,0.1)",
                },
                yaxis: Axis {
                    title: "Price (USD)",
                    gridcolor: "rgba(255,255,255,0.1)",
                },
                paper_bgcolor: TRANSPARENT,
                plot_bgcolor: TRANSPARENT,
                font: Font { color: "white" },
            },
        }
    }

    /// JSON safe to inline inside a `<script>` element.
    pub fn to_script_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(self)?.replace("</", "<\\/"))
    }
}
