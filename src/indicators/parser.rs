//! JSON input parsing for price series, candle series and single candles
//!
//! Shape problems (bad JSON, wrong container, non-numeric values) surface as
//! `MalformedInput`; absent fields surface as `MissingField` naming every
//! field the record lacks.

use serde_json::{Map, Value};
use tracing::warn;

use crate::indicators::error::{IndicatorError, Result};
use crate::models::candle::{Candle, CandleField};

const PREVIOUS_CANDLE: &str = "Previous candle";

fn parse_json(input: &str) -> Result<Value> {
    serde_json::from_str(input).map_err(|e| {
        warn!(error = %e, "input is not valid JSON");
        IndicatorError::MalformedInput(format!("Error parsing JSON: {e}"))
    })
}

fn parse_array(input: &str) -> Result<Vec<Value>> {
    match parse_json(input)? {
        Value::Array(items) => Ok(items),
        other => Err(IndicatorError::MalformedInput(format!(
            "expected a JSON array, got {}",
            type_name(&other)
        ))),
    }
}

/// Parse a JSON array of prices.
///
/// An array of candle objects each carrying `close` is also accepted and
/// reduced to its closes.
pub fn parse_prices(input: &str) -> Result<Vec<f64>> {
    let items = parse_array(input)?;
    if !items.is_empty() && items.iter().all(Value::is_object) {
        return items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let record = format!("Candle {i}");
                let fields = as_object(item, &record)?;
                match fields.get("close") {
                    Some(value) => as_number(value, &record, "close"),
                    None => Err(IndicatorError::MissingField {
                        record,
                        fields: vec!["close".to_string()],
                    }),
                }
            })
            .collect();
    }

    items
        .iter()
        .enumerate()
        .map(|(i, item)| as_number(item, &format!("Price {i}"), "value"))
        .collect()
}

/// Parse a JSON array of candle objects, requiring `required` on each one.
///
/// Price fields that are neither required nor present are left NaN; `open`
/// and `volume` stay `None` when absent.
pub fn parse_candles(input: &str, required: &[CandleField]) -> Result<Vec<Candle>> {
    parse_array(input)?
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let record = format!("Candle {i}");
            candle_from_object(as_object(item, &record)?, &record, required)
        })
        .collect()
}

/// Parse the single prior-period candle used for pivot levels
pub fn parse_previous_candle(input: &str) -> Result<Candle> {
    let value = parse_json(input)?;
    let fields = as_object(&value, PREVIOUS_CANDLE)?;
    candle_from_object(
        fields,
        PREVIOUS_CANDLE,
        &[CandleField::High, CandleField::Low, CandleField::Close],
    )
}

fn candle_from_object(
    fields: &Map<String, Value>,
    record: &str,
    required: &[CandleField],
) -> Result<Candle> {
    let missing: Vec<String> = required
        .iter()
        .filter(|field| !fields.contains_key(field.as_str()))
        .map(|field| field.as_str().to_string())
        .collect();
    if !missing.is_empty() {
        warn!(record, missing = %missing.join(", "), "record missing fields");
        return Err(IndicatorError::MissingField {
            record: record.to_string(),
            fields: missing,
        });
    }

    let field = |name: CandleField| -> Result<Option<f64>> {
        fields
            .get(name.as_str())
            .map(|value| as_number(value, record, name.as_str()))
            .transpose()
    };

    Ok(Candle {
        high: field(CandleField::High)?.unwrap_or(f64::NAN),
        low: field(CandleField::Low)?.unwrap_or(f64::NAN),
        close: field(CandleField::Close)?.unwrap_or(f64::NAN),
        open: field(CandleField::Open)?,
        volume: field(CandleField::Volume)?,
    })
}

fn as_object<'a>(value: &'a Value, record: &str) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        IndicatorError::MalformedInput(format!(
            "{record} must be an object, got {}",
            type_name(value)
        ))
    })
}

fn as_number(value: &Value, record: &str, field: &str) -> Result<f64> {
    value.as_f64().ok_or_else(|| {
        IndicatorError::MalformedInput(format!(
            "{record} {field} must be a number, got {}",
            type_name(value)
        ))
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
