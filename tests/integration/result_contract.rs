//! Serialized result keys and label strings

use chartwise::indicators::*;
use chartwise::models::*;
use serde_json::Value;

fn keys(value: &Value) -> Vec<&str> {
    let mut keys: Vec<&str> = value
        .as_object()
        .expect("result serializes to an object")
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    keys
}

fn rising(count: usize) -> Vec<f64> {
    (0..count).map(|i| 100.0 + i as f64).collect()
}

#[test]
fn test_ema_result_keys() {
    let json = serde_json::to_value(calculate_ema_default(&rising(20)).unwrap()).unwrap();
    assert_eq!(keys(&json), vec!["current_price", "ema", "period", "price_trend"]);
    assert_eq!(json["price_trend"], "above_ema");
}

#[test]
fn test_macd_result_keys() {
    let json = serde_json::to_value(calculate_macd_default(&rising(40)).unwrap()).unwrap();
    assert_eq!(
        keys(&json),
        vec![
            "crossover_signal",
            "fast_period",
            "histogram",
            "macd",
            "signal",
            "signal_period",
            "slow_period"
        ]
    );
}

#[test]
fn test_adx_result_labels() {
    let candles: Vec<Candle> = rising(30)
        .into_iter()
        .map(|c| Candle::new(c + 1.0, c - 1.0, c))
        .collect();
    let json = serde_json::to_value(calculate_adx_default(&candles).unwrap()).unwrap();
    assert_eq!(
        keys(&json),
        vec!["adx", "minus_di", "period", "plus_di", "signal", "trend_direction", "trend_strength"]
    );
    assert_eq!(json["trend_strength"], "extremely_strong_trend");
    assert_eq!(json["trend_direction"], "bullish");
}

#[test]
fn test_bollinger_result_keys() {
    let json =
        serde_json::to_value(calculate_bollinger_bands_default(&rising(20)).unwrap()).unwrap();
    assert_eq!(
        keys(&json),
        vec![
            "bandwidth",
            "current_price",
            "lower_band",
            "middle_band",
            "percent_b",
            "period",
            "signal",
            "std_dev",
            "upper_band"
        ]
    );
}

#[test]
fn test_vwap_total_volume_is_integer() {
    let candles = vec![Candle::new(10.0, 9.0, 9.5).with_volume(100.7)];
    let json = serde_json::to_value(calculate_vwap(&candles).unwrap()).unwrap();
    assert_eq!(json["total_volume"], 100);
    assert_eq!(json["signal"], "near_vwap");
}

#[test]
fn test_historical_volatility_result_keys() {
    let json = serde_json::to_value(
        calculate_historical_volatility_default(&rising(30)).unwrap(),
    )
    .unwrap();
    assert_eq!(
        keys(&json),
        vec![
            "annualize_factor",
            "annualized_vol",
            "daily_vol",
            "max_vol",
            "mean_vol",
            "min_vol",
            "monthly_vol",
            "percentile_rank",
            "period",
            "regime",
            "weekly_vol"
        ]
    );
}

#[test]
fn test_camarilla_levels_include_outer_levels() {
    let params = PivotParams {
        pivot_type: PivotType::Camarilla,
        current_price: Some(99.0),
    };
    let result = calculate_pivot_points(&Candle::new(100.0, 95.0, 98.0), &params).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["type"], "camarilla");
    assert_eq!(json["levels"]["r4"], 100.75);
    assert_eq!(json["position"], "above_pivot");
    assert_eq!(json["nearest_resistance"]["level"], "r3");
    assert_eq!(json["nearest_support"]["level"], "pivot");
    assert_approx!(json["nearest_support"]["price"].as_f64().unwrap(), 98.0);
}

#[test]
fn test_expected_move_result_shape() {
    let result = calculate_expected_move(&StraddleQuote::from_call_put(450.0, 5.5, 5.0)).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        keys(&json),
        vec![
            "expected_move",
            "iron_condor_strikes",
            "move_boundaries",
            "multiplier_used",
            "probability_estimates",
            "spot_price",
            "straddle_price"
        ]
    );
    assert_eq!(json["probability_estimates"]["touch_1x_boundary"], 32);
    assert_eq!(
        json["iron_condor_strikes"]["conservative"]["description"],
        "Short at 0.5x, Long at 1x move"
    );
}
