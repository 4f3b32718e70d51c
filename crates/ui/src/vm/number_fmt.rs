/// `75` → `"75%"`, `82.5` → `"82.5%"`: no trailing `.0`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value}%")
}

/// One decimal place, with exact `.x5` ties rounded away from zero.
///
/// `{:.1}` alone rounds such ties to even (`6.25` → `"6.2"`); scores shown to
/// users read `6.3`.
#[must_use]
pub fn to_fixed_1(value: f64) -> String {
    // A double sits exactly halfway between two tenths iff it is an odd
    // number of quarters.
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        let tenths = (value * 10.0).round();
        return format!("{:.1}", tenths / 10.0);
    }
    format!("{value:.1}")
}
