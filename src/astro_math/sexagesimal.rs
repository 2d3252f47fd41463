//! Conversion between decimal and sexagesimal coordinates.
//!
//! Right ascension is rendered as `HH:MM:SS.SS` in the range [00h, 24h) and
//! declination as `±DD:MM:SS.SS` clipped to ±90°. Parsing is lenient in the
//! same way: each field is reduced modulo its own cycle, and a negative right
//! ascension is folded into the positive range as `24 - |ra|`.

use super::{dec_to_ms, modulo, Degrees, Hours};
use crate::util::{CatalogError, Result};

const MAX_DEC: Degrees = 90.;

/// Converts decimal hours to `HH:MM:SS.SS`, wrapping the input into [0, 24)
pub fn hours_to_sexagesimal(ra_hr: Hours) -> String {
    let (h, m, s) = round_seconds(dec_to_ms(modulo(ra_hr, 24.)));
    format!("{:02}:{:02}:{:05.2}", h % 24, m, s)
}

/// Converts decimal degrees to `±DD:MM:SS.SS`, saturating at ±90
pub fn degrees_to_sexagesimal(dec_deg: Degrees) -> String {
    let sign = if dec_deg >= 0. { '+' } else { '-' };
    let magnitude = dec_deg.abs().min(MAX_DEC);

    let (d, m, s) = round_seconds(dec_to_ms(magnitude));
    if d >= MAX_DEC as u32 {
        return format!("{}90:00:00.00", sign);
    }
    format!("{}{:02}:{:02}:{:05.2}", sign, d, m, s)
}

/// Parses `[±]HH:MM:SS[.ss]` to decimal hours in [0, 24].
///
/// A leading `-` yields `24 - |ra|`, so `-06:00:00` parses as 18h.
pub fn sexagesimal_to_hours(text: &str) -> Result<Hours> {
    let text = text.trim();
    let is_negative = text.starts_with('-');
    let (h, m, s) = split_fields(text)?;

    let hours = (h.abs() + (m % 60.) / 60. + (s % 60.) / 3600.) % 24.;
    Ok(if is_negative { 24. - hours } else { hours })
}

/// Parses `[±]DD:MM:SS[.ss]` to decimal degrees. A degree field above 90 clips to ±90.
pub fn sexagesimal_to_degrees(text: &str) -> Result<Degrees> {
    let text = text.trim();
    let sign = if text.starts_with('-') { -1. } else { 1. };
    let (d, m, s) = split_fields(text)?;

    let d = d.abs();
    if d > MAX_DEC {
        return Ok(sign * MAX_DEC);
    }
    Ok(sign * (d + (m % 60.) / 60. + (s % 60.) / 3600.))
}

fn split_fields(text: &str) -> Result<(f64, f64, f64)> {
    let fields = text
        .split(':')
        .map(|field| field.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| CatalogError::Parse(format!("Invalid sexagesimal value \"{}\": {}", text, e)))?;

    match fields.as_slice() {
        [a, b, c] => Ok((*a, *b, *c)),
        _ => Err(CatalogError::Parse(format!(
            "Expected three ':' separated fields in \"{}\"",
            text
        ))),
    }
}

// Round seconds to the displayed precision, carrying 60.00 into the next field
fn round_seconds((whole, minutes, seconds): (u32, u32, f64)) -> (u32, u32, f64) {
    let mut seconds = (seconds * 100.).round() / 100.;
    let mut minutes = minutes;
    let mut whole = whole;

    if seconds >= 60. {
        seconds -= 60.;
        minutes += 1;
    }
    if minutes >= 60 {
        minutes -= 60;
        whole += 1;
    }
    (whole, minutes, seconds)
}
