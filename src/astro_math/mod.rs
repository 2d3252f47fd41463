pub use sexagesimal::*;

mod sexagesimal;

pub type Hours = f64;
pub type Degrees = f64;
pub type ArcMinutes = f64;

pub fn deg_to_hours(deg: Degrees) -> Hours {
    deg / 15.
}

pub fn hours_to_deg(hours: Hours) -> Degrees {
    hours * 15.
}

pub fn arcmin_to_deg(arcmin: ArcMinutes) -> Degrees {
    arcmin / 60.
}

/// Splits a non-negative decimal value into whole units, minutes and seconds
pub fn dec_to_ms(dec: f64) -> (u32, u32, f64) {
    debug_assert!(dec >= 0., "dec must not be negative");

    let h = dec as u32;
    let m_raw = (dec - h as f64) * 60.;
    let m = m_raw as u32;
    let s = (m_raw - m as f64) * 60.;

    (h, m, s)
}

pub fn modulo(val: f64, base: f64) -> f64 {
    ((val % base) + base) % base
}
