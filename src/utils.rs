// values below this are shown as a bare "0"
pub const DISPLAY_ZERO: f64 = 1e-9;

pub fn format_number(x: f64) -> String {
    if !x.is_finite() {
        return x.to_string();
    }
    if x.abs() < DISPLAY_ZERO {
        return "0".into();
    }

    // `{:.3}` rounds exact ties to even; the display rounds them away from zero
    let scaled = x.abs() * 1000.0;
    let exact_tie = scaled.fract() == 0.5 && x.abs().mul_add(1000.0, -scaled) == 0.0;
    let rounded: f64 = if exact_tie {
        x.signum() * (scaled + 0.5) / 1000.0
    } else {
        format!("{:.3}", x).parse().unwrap_or(0.0)
    };
    if rounded == 0.0 {
        // "-0.000" would otherwise print as "-0"
        return "0".into();
    }
    format!("{}", rounded)
}

pub fn parse_cell(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

// Leading integer of the field ("3.7" -> 3, "12abc" -> 12), at least 1.
pub fn parse_dimension(raw: &str) -> usize {
    let raw = raw.trim();
    let (negative, rest) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();

    match rest[..digits].parse::<usize>() {
        Ok(value) if !negative && value >= 1 => value,
        _ => 1,
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
