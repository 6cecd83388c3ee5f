//! Built-in sample data: ten Indian large-cap holdings and a six-month
//! benchmark comparison.

use chrono::NaiveDate;

use crate::models::holding::Holding;
use crate::models::performance::{
    AssetReturns, PerformanceSeries, ReturnsTable, TimelinePoint, TrailingReturns,
};

pub fn sample_holdings() -> Vec<Holding> {
    vec![
        Holding::new("RELIANCE", "Reliance Industries Ltd", 50, 2450.00, 2680.50, "Energy", "Large"),
        Holding::new("INFY", "Infosys Limited", 100, 1800.00, 2010.75, "Technology", "Large"),
        Holding::new("TCS", "Tata Consultancy Services", 75, 3200.00, 3890.25, "Technology", "Large"),
        Holding::new("HDFC", "HDFC Bank", 60, 1650.00, 1615.80, "Banking", "Large"),
        Holding::new("ICICIBANK", "ICICI Bank Ltd", 80, 1100.00, 1245.30, "Banking", "Large"),
        Holding::new("HCLTECH", "HCL Technologies", 90, 1350.00, 1520.40, "Technology", "Large"),
        Holding::new("WIPRO", "Wipro Limited", 120, 450.00, 485.75, "Technology", "Large"),
        Holding::new("SBIN", "State Bank of India", 200, 550.00, 612.35, "Banking", "Large"),
        Holding::new("BHARTIARTL", "Bharti Airtel Ltd", 150, 900.00, 1058.60, "Telecom", "Large"),
        Holding::new("DRREDDY", "Dr Reddy's Laboratories", 40, 5200.00, 6150.25, "Healthcare", "Large"),
    ]
}

fn month(m: u32) -> NaiveDate {
    // Every month of 2024 has a first day.
    NaiveDate::from_ymd_opt(2024, m, 1).unwrap_or_default()
}

pub fn sample_performance() -> PerformanceSeries {
    let timeline = [
        (1, 650_000, 21_000, 62_000),
        (2, 672_000, 21_450, 63_200),
        (3, 680_000, 22_100, 64_500),
        (4, 695_000, 22_800, 66_200),
        (5, 715_000, 23_200, 67_800),
        (6, 700_000, 23_500, 68_000),
    ]
    .into_iter()
    .map(|(m, portfolio, nifty50, gold)| TimelinePoint {
        date: month(m),
        portfolio,
        nifty50,
        gold,
    })
    .collect();

    let rows = [
        ("portfolio", 2.3, 8.1, 15.7),
        ("nifty50", 1.8, 6.2, 12.4),
        ("gold", -0.5, 4.1, 8.9),
    ]
    .into_iter()
    .map(|(asset, one_month, three_months, one_year)| AssetReturns {
        asset: asset.to_string(),
        returns: TrailingReturns {
            one_month,
            three_months,
            one_year,
        },
    })
    .collect();

    PerformanceSeries {
        timeline,
        returns: ReturnsTable { rows },
    }
}
