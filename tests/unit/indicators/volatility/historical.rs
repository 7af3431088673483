//! Unit tests for historical and Parkinson volatility

use chartwise::indicators::error::IndicatorError;
use chartwise::indicators::volatility::*;
use chartwise::models::*;

const PRICES: [f64; 12] = [
    100.0, 102.0, 101.0, 103.0, 105.0, 104.0, 106.0, 108.0, 107.0, 109.0, 111.0, 110.0,
];

fn params(method: VolatilityMethod) -> VolatilityParams {
    VolatilityParams {
        period: 5,
        annualize_factor: 252,
        method,
    }
}

#[test]
fn test_historical_volatility_insufficient_data() {
    let err = calculate_historical_volatility_default(&[100.0; 20]).unwrap_err();
    assert_eq!(err.to_string(), "Need at least 21 prices, got 20");
}

#[test]
fn test_close_to_close_volatility() {
    let hv = calculate_historical_volatility(&PRICES, &params(VolatilityMethod::CloseToClose))
        .unwrap();
    assert_eq!(hv.daily_vol, 1.52);
    assert_eq!(hv.weekly_vol, 3.4);
    assert_eq!(hv.monthly_vol, 6.97);
    assert_eq!(hv.annualized_vol, 24.15);
    assert_eq!(hv.percentile_rank, 28.6);
    assert_eq!(hv.min_vol, 19.92);
    assert_eq!(hv.max_vol, 25.57);
    assert_eq!(hv.mean_vol, 23.56);
    assert_eq!(hv.regime, VolatilityRegime::Elevated);
    assert_eq!((hv.period, hv.annualize_factor), (5, 252));
}

#[test]
fn test_log_return_volatility() {
    let hv =
        calculate_historical_volatility(&PRICES, &params(VolatilityMethod::LogReturns)).unwrap();
    assert_eq!(hv.daily_vol, 1.51);
    assert_eq!(hv.annualized_vol, 24.04);
}

#[test]
fn test_flat_prices_have_zero_volatility() {
    let hv = calculate_historical_volatility_default(&[100.0; 30]).unwrap();
    assert_eq!(hv.annualized_vol, 0.0);
    assert_eq!(hv.percentile_rank, 0.0);
    assert_eq!(hv.regime, VolatilityRegime::VeryLow);
}

#[test]
fn test_historical_volatility_rejects_parkinson_method() {
    assert!(matches!(
        calculate_historical_volatility(&PRICES, &params(VolatilityMethod::Parkinson)),
        Err(IndicatorError::InvalidParameter { .. })
    ));
}

#[test]
fn test_parkinson_volatility() {
    let candles: Vec<Candle> = (0..5)
        .map(|i| {
            let base = f64::from(i);
            Candle::new(101.0 + base, 99.0 + base, f64::NAN)
        })
        .collect();
    let params = ParkinsonParams {
        period: 5,
        annualize_factor: 252,
    };
    let pv = calculate_parkinson_volatility(&candles, &params).unwrap();
    assert_eq!(pv.parkinson_daily, 1.18);
    assert_eq!(pv.parkinson_annualized, 18.7);
    assert_eq!(pv.period, 5);

    let err = calculate_parkinson_volatility(&candles[..4], &params).unwrap_err();
    assert_eq!(err.to_string(), "Need at least 5 candles, got 4");
}

#[test]
fn test_calculate_volatility_dispatches_on_method() {
    let candles: Vec<Candle> = PRICES.iter().map(|&p| Candle::new(p + 1.0, p - 1.0, p)).collect();

    match calculate_volatility(&candles, &params(VolatilityMethod::CloseToClose)).unwrap() {
        VolatilityIndicator::Historical(hv) => assert_eq!(hv.annualized_vol, 24.15),
        other => panic!("expected historical volatility, got {other:?}"),
    }
    match calculate_volatility(&candles, &params(VolatilityMethod::Parkinson)).unwrap() {
        VolatilityIndicator::Parkinson(pv) => assert_eq!(pv.period, 5),
        other => panic!("expected Parkinson volatility, got {other:?}"),
    }
}

#[test]
fn test_volatility_regime_buckets() {
    assert_eq!(volatility_regime(9.99), VolatilityRegime::VeryLow);
    assert_eq!(volatility_regime(10.0), VolatilityRegime::Low);
    assert_eq!(volatility_regime(15.0), VolatilityRegime::Normal);
    assert_eq!(volatility_regime(20.0), VolatilityRegime::Elevated);
    assert_eq!(volatility_regime(30.0), VolatilityRegime::High);
    assert_eq!(volatility_regime(50.0), VolatilityRegime::Extreme);
}

#[test]
fn test_volatility_method_from_str() {
    assert_eq!("log_returns".parse::<VolatilityMethod>(), Ok(VolatilityMethod::LogReturns));
    assert!("garman_klass".parse::<VolatilityMethod>().is_err());
}
