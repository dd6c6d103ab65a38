//! Fixed-point number formatting for display code.

/// Rounds `value` to `decimal_places` digits and formats it with exactly that
/// many digits after the decimal point.
///
/// Rounding works on the decimal digits of the shortest representation that
/// reads back as `value`, not on a scaled binary product, so `1.005` rounds to
/// `"1.01"`. Ties round away from zero on both sides of zero, so `2.5 -> "3"`
/// and `-2.5 -> "-3"`. A result of zero never carries a sign.
///
/// Reading the result back and formatting it again with the same
/// `decimal_places` returns the same string.
///
/// Non-finite input formats as `NaN`, `Infinity` or `-Infinity`.
///
/// # Examples
///
/// ```
/// use citymaps_foundation::round_to_fixed;
///
/// assert_eq!(round_to_fixed(3.14159, 2), "3.14");
/// assert_eq!(round_to_fixed(10.0, 3), "10.000");
/// ```
#[must_use]
pub fn round_to_fixed(value: f64, decimal_places: u32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let places = usize::try_from(decimal_places).unwrap_or(usize::MAX);
    let first = round_decimal(value, places);

    // Settle on the double the first result reads back as: its shortest
    // digits already fit in `places`, so a further pass is a no-op.
    match first.parse::<f64>() {
        Ok(settled) => round_decimal(settled, places),
        Err(_) => first,
    }
}

/// [`round_to_fixed`] with zero decimal places.
#[must_use]
pub fn round_to_fixed_default(value: f64) -> String {
    round_to_fixed(value, 0)
}

/// Rounds the shortest decimal digits of a finite `value` at `places`.
fn round_decimal(value: f64, places: usize) -> String {
    let (mut digits, mut point) = shortest_digits(value.abs());
    let places = isize::try_from(places).unwrap_or(isize::MAX);

    match usize::try_from(point.saturating_add(places)) {
        Err(_) => digits.clear(),
        Ok(keep) if keep < digits.len() => {
            let round_up = digits[keep] >= 5;
            digits.truncate(keep);
            if round_up && increment(&mut digits) {
                digits.insert(0, 1);
                point += 1;
            }
        }
        Ok(_) => {}
    }

    let digit_at = |i: isize| {
        usize::try_from(i)
            .ok()
            .and_then(|i| digits.get(i))
            .map_or('0', |&d| char::from(b'0' + d))
    };

    let mut out = String::new();
    if value.is_sign_negative() && digits.iter().any(|&d| d != 0) {
        out.push('-');
    }
    if point <= 0 {
        out.push('0');
    } else {
        out.extend((0..point).map(digit_at));
    }
    if places > 0 {
        out.push('.');
        out.extend((point..point.saturating_add(places)).map(digit_at));
    }
    out
}

/// Significant digits of `magnitude` and the position of the decimal point
/// within them (`12.5` is `[1, 2, 5]` with the point at 2).
fn shortest_digits(magnitude: f64) -> (Vec<u8>, isize) {
    let repr = format!("{magnitude:e}");
    let (mantissa, exponent) = repr.split_once('e').unwrap_or((repr.as_str(), "0"));
    let exponent: isize = exponent.parse().unwrap_or(0);
    let digits = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    (digits, exponent + 1)
}

/// Adds one unit in the last digit. Returns `true` on carry out.
fn increment(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return false;
        }
    }
    true
}
