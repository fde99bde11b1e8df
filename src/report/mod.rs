pub mod json;
pub mod text;

/// Shortest round-trip rendering of a score, in the notation the GP job
/// reports use: `2.0`, `0.5`, `1e-05`, `1.5e+16`, `inf`, `nan`.
pub fn format_score(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    // Debug switches to exponent form below 1e-4 and from 1e16 up.
    let shortest = format!("{v:?}");
    match shortest.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => shortest,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
