//! Expected move from ATM option premiums or from implied volatility

use tracing::debug;

use crate::common::math;
use crate::indicators::error::{IndicatorError, Result};
use crate::models::indicators::{
    ExpectedMove, ExpectedMoveIndicator, ImpliedMove, ImpliedMoveIndicator, IronCondorStrikes,
    IronCondorSuggestions, MoveBoundaries, MoveProbabilities, StdDevBoundaries,
    StdDevProbabilities,
};
use crate::models::params::{ImpliedVolQuote, StraddleQuote};

/// Normal-distribution rules of thumb, in percent
const WITHIN_ONE_STD: u32 = 68;
const WITHIN_TWO_STD: u32 = 95;

const DAYS_PER_YEAR: f64 = 365.0;

/// Calculate the expected move from the ATM straddle premium
///
/// The straddle price (or call + put) times `multiplier` approximates a one
/// standard deviation move by expiration. Strike suggestions sit at 0.5x,
/// 1x and 1.5x that adjusted move.
pub fn calculate_expected_move(quote: &StraddleQuote) -> Result<ExpectedMoveIndicator> {
    let straddle = match (quote.straddle_price, quote.atm_call, quote.atm_put) {
        (Some(straddle), _, _) => straddle,
        (None, Some(call), Some(put)) => call + put,
        _ => {
            return Err(IndicatorError::InvalidParameter {
                name: "straddle_price".to_string(),
                reason: "Must provide either straddle_price or both atm_call and atm_put"
                    .to_string(),
            })
        }
    };
    debug!(
        spot = quote.spot_price,
        straddle,
        multiplier = quote.multiplier,
        "calculating expected move"
    );

    let spot = quote.spot_price;
    let adjusted = straddle * quote.multiplier;
    let move_up = spot + adjusted;
    let move_down = spot - adjusted;

    let r2 = |v: f64| math::round_to_decimals(v, 2);
    let strike = |v: f64| math::round_to_decimals(v, 1);

    Ok(ExpectedMoveIndicator {
        spot_price: r2(spot),
        straddle_price: r2(straddle),
        expected_move: ExpectedMove {
            raw: r2(straddle),
            adjusted: r2(adjusted),
            percentage: r2((adjusted / spot) * 100.0),
            raw_percentage: r2((straddle / spot) * 100.0),
        },
        move_boundaries: MoveBoundaries {
            upper_1x: r2(move_up),
            lower_1x: r2(move_down),
            upper_2x: r2(spot + (adjusted * 2.0)),
            lower_2x: r2(spot - (adjusted * 2.0)),
        },
        iron_condor_strikes: IronCondorSuggestions {
            conservative: IronCondorStrikes {
                short_call: strike(spot + (adjusted * 0.5)),
                short_put: strike(spot - (adjusted * 0.5)),
                long_call: strike(move_up),
                long_put: strike(move_down),
                description: "Short at 0.5x, Long at 1x move".to_string(),
            },
            aggressive: IronCondorStrikes {
                short_call: strike(move_up),
                short_put: strike(move_down),
                long_call: strike(spot + (adjusted * 1.5)),
                long_put: strike(spot - (adjusted * 1.5)),
                description: "Short at 1x, Long at 1.5x move".to_string(),
            },
        },
        probability_estimates: MoveProbabilities {
            stay_within_1x: WITHIN_ONE_STD,
            stay_within_2x: WITHIN_TWO_STD,
            touch_1x_boundary: 100 - WITHIN_ONE_STD,
        },
        multiplier_used: quote.multiplier,
    })
}

/// Calculate the one standard deviation move implied by volatility
///
/// move = spot * iv * sqrt(days / 365)
pub fn calculate_expected_move_from_iv(quote: &ImpliedVolQuote) -> Result<ImpliedMoveIndicator> {
    debug!(
        spot = quote.spot_price,
        iv = quote.iv,
        days = quote.days_to_expiry,
        "calculating IV expected move"
    );

    let spot = quote.spot_price;
    let one_std = spot * quote.iv * (quote.days_to_expiry / DAYS_PER_YEAR).sqrt();
    let r2 = |v: f64| math::round_to_decimals(v, 2);

    Ok(ImpliedMoveIndicator {
        spot_price: r2(spot),
        implied_volatility: r2(quote.iv * 100.0),
        days_to_expiry: quote.days_to_expiry,
        expected_move: ImpliedMove {
            one_std: r2(one_std),
            percentage: r2((one_std / spot) * 100.0),
        },
        move_boundaries: StdDevBoundaries {
            upper_1std: r2(spot + one_std),
            lower_1std: r2(spot - one_std),
            upper_2std: r2(spot + (2.0 * one_std)),
            lower_2std: r2(spot - (2.0 * one_std)),
        },
        probability_estimates: StdDevProbabilities {
            stay_within_1std: WITHIN_ONE_STD,
            stay_within_2std: WITHIN_TWO_STD,
        },
    })
}
