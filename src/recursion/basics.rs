//! Warm-up recursions.

/// Digit sum of `n`, one recursive call per digit.
pub fn sum_of_digits_recursive(n: u64) -> u32 {
    if n < 10 {
        return n as u32;
    }
    (n % 10) as u32 + sum_of_digits_recursive(n / 10)
}

/// Palindrome check over chars, comparing the outer pair and recursing inward.
pub fn is_palindrome_recursive(s: &str) -> bool {
    fn go(chars: &[char]) -> bool {
        match chars {
            [] | [_] => true,
            [first, inner @ .., last] => first == last && go(inner),
        }
    }
    let chars: Vec<char> = s.chars().collect();
    go(&chars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic_building::sum_of_digits;
    use crate::string::is_palindrome;
    use proptest::prelude::*;

    #[test]
    fn known_cases() {
        assert_eq!(sum_of_digits_recursive(0), 0);
        assert_eq!(sum_of_digits_recursive(253), 10);
        assert_eq!(sum_of_digits_recursive(u64::MAX), 87);
        assert!(is_palindrome_recursive(""));
        assert!(is_palindrome_recursive("abbcbba"));
        assert!(is_palindrome_recursive("été"));
        assert!(!is_palindrome_recursive("geeks"));
    }

    proptest! {
        #[test]
        fn digits_match_iterative(n in 0i64..i64::MAX) {
            prop_assert_eq!(sum_of_digits_recursive(n as u64), sum_of_digits(n));
        }

        #[test]
        fn palindrome_matches_iterative(s in "[ab]{0,12}") {
            prop_assert_eq!(is_palindrome_recursive(&s), is_palindrome(&s));
        }
    }
}
