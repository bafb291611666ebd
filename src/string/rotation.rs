use super::pattern::kmp_search_bytes;

/// Tries every shift of `a` against `b`. O(n²).
pub fn is_rotation_naive(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    let n = a.len();
    (0..n).any(|shift| (0..n).all(|k| a[(shift + k) % n] == b[k]))
}

/// `b` is a rotation of `a` iff the lengths match and `b` occurs in `a + a`.
/// The occurrence check uses KMP, so the whole test is O(n).
///
/// ```
/// use textbook_algorithms::string::is_rotation;
///
/// assert!(is_rotation("ABCD", "CDAB"));
/// assert!(!is_rotation("ABAAA", "BABAA"));
/// ```
pub fn is_rotation(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    let doubled = [a.as_bytes(), a.as_bytes()].concat();
    !kmp_search_bytes(&doubled, b.as_bytes()).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rotation_known_cases() {
        let cases = [
            ("ABCD", "CDAB", true),
            ("ABAB", "ABBA", false),
            ("ABAAA", "BABAA", false),
            ("aab", "aba", true),
            ("", "", true),
            ("a", "", false),
        ];
        for (a, b, expected) in cases {
            assert_eq!(is_rotation(a, b), expected, "{a}/{b}");
            assert_eq!(is_rotation_naive(a, b), expected, "{a}/{b}");
        }
    }

    proptest! {
        #[test]
        fn kmp_matches_naive(a in "[ab]{0,12}", b in "[ab]{0,12}") {
            prop_assert_eq!(is_rotation(&a, &b), is_rotation_naive(&a, &b));
        }

        #[test]
        fn every_shift_is_a_rotation(a in "[abc]{1,20}", shift in 0usize..20) {
            let mut bytes = a.clone().into_bytes();
            let len = bytes.len();
            bytes.rotate_left(shift % len);
            let b = String::from_utf8(bytes).unwrap();
            prop_assert!(is_rotation(&a, &b));
        }
    }
}
