use std::collections::HashMap;

use crate::error::{AlgoError, AlgoResult};

/// Decimal expansion of `numerator / denominator`, with any recurring part in
/// parentheses.
///
/// Long division repeats as soon as a remainder repeats, so the position at
/// which each remainder first produced a digit marks where the cycle opens.
///
/// ```
/// use textbook_algorithms::hashing::fraction_to_decimal;
///
/// assert_eq!(fraction_to_decimal(1, 3).unwrap(), "0.(3)");
/// assert_eq!(fraction_to_decimal(-50, 8).unwrap(), "-6.25");
/// ```
pub fn fraction_to_decimal(numerator: i64, denominator: i64) -> AlgoResult<String> {
    if denominator == 0 {
        tracing::debug!(numerator, "fraction with zero denominator");
        return Err(AlgoError::DivisionByZero);
    }

    // Widen so that |i64::MIN| is representable.
    let num = numerator as i128;
    let den = denominator as i128;
    let mut out = String::new();
    if num != 0 && (num < 0) != (den < 0) {
        out.push('-');
    }
    let (num, den) = (num.abs(), den.abs());

    out.push_str(&(num / den).to_string());
    let mut remainder = num % den;
    if remainder == 0 {
        return Ok(out);
    }

    out.push('.');
    let mut seen: HashMap<i128, usize> = HashMap::new();
    while remainder != 0 {
        if let Some(&start) = seen.get(&remainder) {
            out.insert(start, '(');
            out.push(')');
            return Ok(out);
        }
        seen.insert(remainder, out.len());
        remainder *= 10;
        out.push_str(&(remainder / den).to_string());
        remainder %= den;
    }
    Ok(out)
}
