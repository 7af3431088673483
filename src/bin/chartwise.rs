//! Chartwise CLI
//!
//! Reads a JSON price series, candle series or single candle from the
//! command line, runs one indicator and prints the result as compact JSON.

use std::process::ExitCode;

use chartwise::indicators::{self, ErrorKind, IndicatorError, IndicatorKind, IndicatorRegistry};
use chartwise::logging;
use chartwise::models::*;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use serde::Serialize;
use tracing::{debug, error};

#[derive(Parser)]
#[command(name = "chartwise")]
#[command(about = "Technical indicators with signal classification", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simple moving average of a price array
    Sma {
        /// JSON array of prices
        prices: String,
        #[arg(long, default_value_t = 20)]
        period: usize,
    },

    /// Exponential moving average of a price array
    Ema {
        /// JSON array of prices
        prices: String,
        #[arg(long, default_value_t = 12)]
        period: usize,
    },

    /// MACD line, signal line and histogram
    Macd {
        /// JSON array of prices
        prices: String,
        #[arg(long, default_value_t = 12)]
        fast: usize,
        #[arg(long, default_value_t = 26)]
        slow: usize,
        #[arg(long, default_value_t = 9)]
        signal: usize,
    },

    /// Relative strength index
    Rsi {
        /// JSON array of prices
        prices: String,
        #[arg(long, default_value_t = 14)]
        period: usize,
        #[arg(long, default_value_t = 70)]
        overbought: u32,
        #[arg(long, default_value_t = 30)]
        oversold: u32,
    },

    /// Average true range
    Atr {
        /// JSON array of candles with open, high, low, close
        candles: String,
        #[arg(long, default_value_t = 10)]
        period: usize,
    },

    /// Average directional index with +DI / -DI
    Adx {
        /// JSON array of candles with high, low, close
        candles: String,
        #[arg(long, default_value_t = 14)]
        period: usize,
    },

    /// Bollinger Bands with %B and bandwidth
    Bollinger {
        /// JSON array of prices
        prices: String,
        #[arg(long, default_value_t = 20)]
        period: usize,
        #[arg(long, default_value_t = 2.0)]
        std_dev: f64,
    },

    /// Stochastic oscillator %K / %D
    Stochastic {
        /// JSON array of candles with high, low, close
        candles: String,
        #[arg(long, default_value_t = 14)]
        k_period: usize,
        #[arg(long, default_value_t = 3)]
        d_period: usize,
        #[arg(long, default_value_t = 80)]
        overbought: u32,
        #[arg(long, default_value_t = 20)]
        oversold: u32,
    },

    /// Volume-weighted average price with deviation bands
    Vwap {
        /// JSON array of candles with high, low, close, volume
        candles: String,
    },

    /// Historical (close-to-close, log-return) or Parkinson volatility
    Volatility {
        /// JSON array of prices, or candles (close, or high/low for parkinson)
        prices: String,
        #[arg(long, default_value_t = 20)]
        period: usize,
        /// Periods per year (252 for equities, 365 for crypto)
        #[arg(long, default_value_t = 252)]
        annualize: u32,
        /// close_to_close, log_returns or parkinson
        #[arg(long, default_value = "close_to_close")]
        method: VolatilityMethod,
    },

    /// Pivot point support and resistance levels
    Pivot {
        /// JSON object with the previous period's high, low, close
        prev_candle: String,
        /// standard, fibonacci or camarilla
        #[arg(long = "type", default_value = "standard")]
        pivot_type: PivotType,
        /// Current price for position analysis
        #[arg(long)]
        current: Option<f64>,
    },

    /// Expected move from ATM option premiums or implied volatility
    ExpectedMove {
        /// Current spot price
        #[arg(long)]
        spot: f64,
        #[arg(long)]
        atm_call: Option<f64>,
        #[arg(long)]
        atm_put: Option<f64>,
        /// ATM straddle price (alternative to call + put)
        #[arg(long)]
        straddle: Option<f64>,
        #[arg(long, default_value_t = DEFAULT_MOVE_MULTIPLIER)]
        multiplier: f64,
        /// Implied volatility as a decimal, used with --days
        #[arg(long)]
        iv: Option<f64>,
        /// Days to expiry, used with --iv
        #[arg(long)]
        days: Option<f64>,
    },

    /// List every indicator by category
    List,
}

fn main() -> ExitCode {
    // Load environment variables from .env if present
    dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "indicator calculation failed");
            eprintln!("Error: {e}");
            match e.kind() {
                ErrorKind::Malformed => ExitCode::from(1),
                ErrorKind::Data => ExitCode::from(3),
            }
        }
    }
}

fn run(command: Commands) -> Result<String, IndicatorError> {
    match command {
        Commands::Sma { prices, period } => {
            let prices = indicators::parse_prices(&prices)?;
            to_json(&indicators::calculate_sma(&prices, &SmaParams { period })?)
        }
        Commands::Ema { prices, period } => {
            let prices = indicators::parse_prices(&prices)?;
            to_json(&indicators::calculate_ema(&prices, &EmaParams { period })?)
        }
        Commands::Macd {
            prices,
            fast,
            slow,
            signal,
        } => {
            let prices = indicators::parse_prices(&prices)?;
            let params = MacdParams {
                fast_period: fast,
                slow_period: slow,
                signal_period: signal,
            };
            to_json(&indicators::calculate_macd(&prices, &params)?)
        }
        Commands::Rsi {
            prices,
            period,
            overbought,
            oversold,
        } => {
            let prices = indicators::parse_prices(&prices)?;
            let params = RsiParams {
                period,
                overbought,
                oversold,
            };
            to_json(&indicators::calculate_rsi(&prices, &params)?)
        }
        Commands::Atr { candles, period } => {
            let candles = parse_candles_for(&candles, IndicatorKind::Atr)?;
            to_json(&indicators::calculate_atr(&candles, &AtrParams { period })?)
        }
        Commands::Adx { candles, period } => {
            let candles = parse_candles_for(&candles, IndicatorKind::Adx)?;
            to_json(&indicators::calculate_adx(&candles, &AdxParams { period })?)
        }
        Commands::Bollinger {
            prices,
            period,
            std_dev,
        } => {
            let prices = indicators::parse_prices(&prices)?;
            let params = BollingerParams { period, std_dev };
            to_json(&indicators::calculate_bollinger_bands(&prices, &params)?)
        }
        Commands::Stochastic {
            candles,
            k_period,
            d_period,
            overbought,
            oversold,
        } => {
            let candles = parse_candles_for(&candles, IndicatorKind::Stochastic)?;
            let params = StochasticParams {
                k_period,
                d_period,
                overbought,
                oversold,
            };
            to_json(&indicators::calculate_stochastic(&candles, &params)?)
        }
        Commands::Vwap { candles } => {
            let candles = parse_candles_for(&candles, IndicatorKind::Vwap)?;
            to_json(&indicators::calculate_vwap(&candles)?)
        }
        Commands::Volatility {
            prices,
            period,
            annualize,
            method,
        } => {
            let params = VolatilityParams {
                period,
                annualize_factor: annualize,
                method,
            };
            if method == VolatilityMethod::Parkinson {
                let candles = parse_candles_for(&prices, IndicatorKind::ParkinsonVolatility)?;
                to_json(&indicators::calculate_volatility(&candles, &params)?)
            } else {
                let prices = indicators::parse_prices(&prices)?;
                to_json(&indicators::calculate_historical_volatility(&prices, &params)?)
            }
        }
        Commands::Pivot {
            prev_candle,
            pivot_type,
            current,
        } => {
            let previous = indicators::parse_previous_candle(&prev_candle)?;
            let params = PivotParams {
                pivot_type,
                current_price: current,
            };
            to_json(&indicators::calculate_pivot_points(&previous, &params)?)
        }
        Commands::ExpectedMove {
            spot,
            atm_call,
            atm_put,
            straddle,
            multiplier,
            iv,
            days,
        } => match (iv, days) {
            (Some(iv), Some(days_to_expiry)) => {
                let quote = ImpliedVolQuote {
                    spot_price: spot,
                    iv,
                    days_to_expiry,
                };
                to_json(&indicators::calculate_expected_move_from_iv(&quote)?)
            }
            _ => {
                let quote = StraddleQuote {
                    spot_price: spot,
                    atm_call,
                    atm_put,
                    straddle_price: straddle,
                    multiplier,
                };
                to_json(&indicators::calculate_expected_move(&quote)?)
            }
        },
        Commands::List => list_indicators(),
    }
}

fn parse_candles_for(input: &str, kind: IndicatorKind) -> Result<Vec<Candle>, IndicatorError> {
    debug!(indicator = kind.name(), "parsing candles");
    indicators::parse_candles(input, kind.required_fields())
}

#[derive(Serialize)]
struct ListedIndicator {
    name: &'static str,
    input: indicators::InputShape,
    required_fields: Vec<&'static str>,
}

fn list_indicators() -> Result<String, IndicatorError> {
    let catalog: std::collections::BTreeMap<_, Vec<ListedIndicator>> = IndicatorRegistry::catalog()
        .into_iter()
        .map(|(category, kinds)| {
            let listed = kinds
                .into_iter()
                .map(|kind| ListedIndicator {
                    name: kind.name(),
                    input: kind.input_shape(),
                    required_fields: kind.required_fields().iter().map(|f| f.as_str()).collect(),
                })
                .collect();
            (category, listed)
        })
        .collect();
    to_json(&catalog)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, IndicatorError> {
    serde_json::to_string(value).map_err(|e| IndicatorError::MalformedInput(e.to_string()))
}
