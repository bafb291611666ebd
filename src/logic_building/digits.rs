//! Digit manipulation on integers.

use crate::error::{AlgoError, AlgoResult};

/// Number of decimal digits. Zero has one digit; the sign is not counted.
pub fn count_digits(n: i64) -> u32 {
    let mut n = n.unsigned_abs();
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

/// Reverses the decimal digits, keeping the sign.
///
/// Trailing zeros disappear (`-120` becomes `-21`).
///
/// ```
/// use textbook_algorithms::logic_building::reverse_digits;
///
/// assert_eq!(reverse_digits(1234), Ok(4321));
/// assert_eq!(reverse_digits(-120), Ok(-21));
/// ```
pub fn reverse_digits(n: i64) -> AlgoResult<i64> {
    let negative = n < 0;
    let mut rest = n.unsigned_abs();
    let mut reversed: i64 = 0;
    while rest > 0 {
        let digit = (rest % 10) as i64;
        reversed = reversed
            .checked_mul(10)
            .and_then(|r| r.checked_add(digit))
            .ok_or_else(|| {
                tracing::debug!(n, "reversed digits do not fit in i64");
                AlgoError::Overflow("reversed digits exceed i64")
            })?;
        rest /= 10;
    }
    Ok(if negative { -reversed } else { reversed })
}

/// True when the decimal representation reads the same both ways.
/// Negative numbers are never palindromes.
pub fn is_palindrome_number(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let mut rest = n as u64;
    let mut reversed = 0u64;
    while rest > 0 {
        // u64 holds any reversed i64 (at most 19 digits).
        reversed = reversed * 10 + rest % 10;
        rest /= 10;
    }
    reversed == n as u64
}

pub fn sum_of_digits(n: i64) -> u32 {
    let mut n = n.unsigned_abs();
    let mut sum = 0;
    while n > 0 {
        sum += (n % 10) as u32;
        n /= 10;
    }
    sum
}

/// Armstrong (narcissistic) number: equal to the sum of its digits, each raised
/// to the number of digits.
pub fn is_armstrong(n: u64) -> bool {
    let mut digits = 1;
    let mut scale = n;
    while scale >= 10 {
        scale /= 10;
        digits += 1;
    }
    let mut rest = n;
    let mut sum = 0u128;
    while rest > 0 {
        sum += ((rest % 10) as u128).pow(digits);
        rest /= 10;
    }
    sum == n as u128
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn count_digits_cases() {
        assert_eq!(count_digits(0), 1);
        assert_eq!(count_digits(9), 1);
        assert_eq!(count_digits(10), 2);
        assert_eq!(count_digits(-12_345), 5);
        assert_eq!(count_digits(i64::MIN), 19);
    }

    #[test]
    fn reverse_digits_cases() {
        assert_eq!(reverse_digits(1234), Ok(4321));
        assert_eq!(reverse_digits(0), Ok(0));
        assert_eq!(reverse_digits(1200), Ok(21));
        assert_eq!(reverse_digits(-120), Ok(-21));
        assert_eq!(
            reverse_digits(1_999_999_999_999_999_999),
            Err(AlgoError::Overflow("reversed digits exceed i64"))
        );
    }

    #[test]
    fn palindrome_number_cases() {
        assert!(is_palindrome_number(0));
        assert!(is_palindrome_number(121));
        assert!(is_palindrome_number(4554));
        assert!(!is_palindrome_number(123));
        assert!(!is_palindrome_number(-121));
        assert!(!is_palindrome_number(10));
    }

    #[test]
    fn armstrong_cases() {
        for n in [0, 1, 9, 153, 370, 371, 407, 1634, 9474] {
            assert!(is_armstrong(n), "n={n}");
        }
        for n in [10, 100, 154, 9475] {
            assert!(!is_armstrong(n), "n={n}");
        }
    }

    proptest! {
        #[test]
        fn digits_match_string_form(n in any::<i64>()) {
            let text = n.unsigned_abs().to_string();
            prop_assert_eq!(count_digits(n) as usize, text.len());
            let expected: u32 = text.bytes().map(|b| (b - b'0') as u32).sum();
            prop_assert_eq!(sum_of_digits(n), expected);
        }

        #[test]
        fn reverse_matches_string_form(n in -1_000_000_000i64..1_000_000_000) {
            let reversed: String = n.unsigned_abs().to_string().chars().rev().collect();
            let magnitude: i64 = reversed.parse().unwrap();
            let expected = if n < 0 { -magnitude } else { magnitude };
            prop_assert_eq!(reverse_digits(n), Ok(expected));
        }

        #[test]
        fn palindrome_matches_string_form(n in 0i64..10_000_000) {
            let text = n.to_string();
            let reversed: String = text.chars().rev().collect();
            prop_assert_eq!(is_palindrome_number(n), text == reversed);
        }
    }
}
