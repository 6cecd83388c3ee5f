// ═══════════════════════════════════════════════════════════════════
// Store Tests — HoldingsStore construction, JSON/file loading, sample data
// ═══════════════════════════════════════════════════════════════════

use std::io::Write;

use portfolio_dashboard_core::errors::CoreError;
use portfolio_dashboard_core::models::holding::Holding;
use portfolio_dashboard_core::store::holdings_store::HoldingsStore;
use portfolio_dashboard_core::store::sample::{sample_holdings, sample_performance};

fn holding(symbol: &str, sector: &str) -> Holding {
    Holding::new(symbol, format!("{symbol} Ltd"), 10, 100.0, 110.0, sector, "Large")
}

const TWO_HOLDINGS_JSON: &str = r#"[
    {
        "symbol": "RELIANCE",
        "name": "Reliance Industries Ltd",
        "quantity": 50,
        "avgPrice": 2450.00,
        "currentPrice": 2680.50,
        "sector": "Energy",
        "marketCap": "Large",
        "value": 134025.00,
        "gainLoss": 11525.00,
        "gainLossPercent": 9.4
    },
    {
        "symbol": "INFY",
        "name": "Infosys Limited",
        "quantity": 100,
        "avgPrice": 1800.00,
        "currentPrice": 2010.75,
        "sector": "Technology",
        "marketCap": "Large"
    }
]"#;

// ═══════════════════════════════════════════════════════════════════
// HoldingsStore::new
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_new_preserves_order() {
    let store = HoldingsStore::new(vec![holding("B", "X"), holding("A", "Y")]).unwrap();
    let symbols: Vec<&str> = store.list().iter().map(|h| h.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["B", "A"]);
}

#[test]
fn test_new_rejects_duplicate_symbol() {
    let err = HoldingsStore::new(vec![holding("TCS", "X"), holding("TCS", "Y")]).unwrap_err();
    assert!(matches!(err, CoreError::DuplicateSymbol(ref s) if s == "TCS"));
}

#[test]
fn test_new_rejects_invalid_holding() {
    let mut bad = holding("TCS", "X");
    bad.quantity = 0;
    let err = HoldingsStore::new(vec![holding("INFY", "X"), bad]).unwrap_err();
    assert!(matches!(err, CoreError::ValidationError(_)));
}

#[test]
fn test_empty_store() {
    let store = HoldingsStore::new(vec![]).unwrap();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert_eq!(store, HoldingsStore::empty());
}

#[test]
fn test_get_is_case_insensitive() {
    let store = HoldingsStore::new(vec![holding("WIPRO", "Technology")]).unwrap();
    assert_eq!(store.get("wipro").unwrap().symbol, "WIPRO");
    assert!(store.get("TCS").is_none());
}

// ═══════════════════════════════════════════════════════════════════
// JSON / file loading
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_from_json() {
    let store = HoldingsStore::from_json(TWO_HOLDINGS_JSON).unwrap();
    assert_eq!(store.len(), 2);
    let reliance = store.get("RELIANCE").unwrap();
    assert_eq!(reliance.value(), 134_025.0);
    assert_eq!(reliance.gain_loss_percent(), 9.4);
}

#[test]
fn test_from_json_malformed() {
    let err = HoldingsStore::from_json("{ not json").unwrap_err();
    assert!(matches!(err, CoreError::Deserialization(_)));
}

#[test]
fn test_from_json_not_an_array() {
    let err = HoldingsStore::from_json(r#"{"symbol": "TCS"}"#).unwrap_err();
    assert!(matches!(err, CoreError::Deserialization(_)));
}

#[test]
fn test_from_json_validates() {
    let json = r#"[{"symbol": "TCS", "name": "TCS", "quantity": 1, "avgPrice": 0.0,
                   "currentPrice": 1.0, "sector": "Technology", "marketCap": "Large"}]"#;
    let err = HoldingsStore::from_json(json).unwrap_err();
    assert!(matches!(err, CoreError::ValidationError(_)));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(TWO_HOLDINGS_JSON.as_bytes()).unwrap();
    let store = HoldingsStore::from_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.list()[1].symbol, "INFY");
}

#[test]
fn test_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let err = HoldingsStore::from_file(path.to_str().unwrap()).unwrap_err();
    match err {
        CoreError::FileIO(msg) => assert!(msg.contains("missing.json")),
        other => panic!("expected FileIO, got {other:?}"),
    }
}

// ═══════════════════════════════════════════════════════════════════
// Sample data
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_sample_passes_validation() {
    let store = HoldingsStore::new(sample_holdings()).unwrap();
    assert_eq!(store, HoldingsStore::sample());
    assert_eq!(store.len(), 10);
}

#[test]
fn test_sample_authored_values_match_derivations() {
    // Published value/gainLoss figures for the sample set.
    let expected = [
        ("RELIANCE", 134_025.00, 11_525.00),
        ("INFY", 201_075.00, 21_075.00),
        ("TCS", 291_768.75, 51_768.75),
        ("HDFC", 96_948.00, -2_052.00),
        ("ICICIBANK", 99_624.00, 11_624.00),
        ("HCLTECH", 136_836.00, 15_336.00),
        ("WIPRO", 58_290.00, 4_290.00),
        ("SBIN", 122_470.00, 12_470.00),
        ("BHARTIARTL", 158_790.00, 23_790.00),
        ("DRREDDY", 246_010.00, 38_010.00),
    ];
    let store = HoldingsStore::sample();
    for (symbol, value, gain_loss) in expected {
        let h = store.get(symbol).unwrap();
        assert!((h.value() - value).abs() < 1e-6, "{symbol} value");
        assert!((h.gain_loss() - gain_loss).abs() < 1e-6, "{symbol} gain/loss");
    }
}

#[test]
fn test_sample_performance_shape() {
    let series = sample_performance();
    assert_eq!(series.timeline.len(), 6);
    let dates: Vec<String> = series.timeline.iter().map(|p| p.date.to_string()).collect();
    assert_eq!(
        dates,
        vec!["2024-01-01", "2024-02-01", "2024-03-01", "2024-04-01", "2024-05-01", "2024-06-01"]
    );
    let assets: Vec<&str> = series.returns.rows.iter().map(|r| r.asset.as_str()).collect();
    assert_eq!(assets, vec!["portfolio", "nifty50", "gold"]);
    assert_eq!(series.returns.get("gold").unwrap().one_month, -0.5);
}
