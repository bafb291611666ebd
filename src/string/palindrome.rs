//! Palindromic substrings.
//!
//! # Strategies
//!
//! | Function | Strategy | Time |
//! |----------|----------|------|
//! | [`longest_palindrome_expand`] | Expand around each of the `2n - 1` centres | O(n²) |
//! | [`longest_palindrome_manacher`] | Manacher's radii with mirror reuse | O(n) |
//! | [`PalindromeQueries`] | Manacher table, then O(1) substring checks | O(n) build |
//!
//! Positions are `char` positions, so multi-byte text is handled; for ASCII
//! they coincide with byte offsets. The longest-palindrome functions return
//! the leftmost candidate when several share the maximum length.
//!
//! # References
//!
//! - G. Manacher, "A New Linear-Time On-Line Algorithm for Finding the Smallest
//!   Initial Palindrome of a String" (1975)

use crate::error::{AlgoError, AlgoResult};

/// Two-pointer palindrome check over chars.
pub fn is_palindrome(s: &str) -> bool {
    let mut forward = s.chars();
    let mut backward = s.chars().rev();
    let half = s.chars().count() / 2;
    for _ in 0..half {
        if forward.next() != backward.next() {
            return false;
        }
    }
    true
}

pub fn longest_palindrome_expand(s: &str) -> &str {
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();
    let (mut best_start, mut best_len) = (0usize, 0usize);

    let mut expand = |mut lo: usize, mut hi: usize| {
        // `hi` is exclusive; the window [lo, hi) is already a palindrome.
        while lo > 0 && hi < n && chars[lo - 1] == chars[hi] {
            lo -= 1;
            hi += 1;
        }
        if hi - lo > best_len {
            best_start = lo;
            best_len = hi - lo;
        }
    };

    for i in 0..n {
        expand(i, i + 1);
        if i + 1 < n && chars[i] == chars[i + 1] {
            expand(i, i + 2);
        }
    }

    char_slice(s, best_start, best_len)
}

pub fn longest_palindrome_manacher(s: &str) -> &str {
    let chars: Vec<char> = s.chars().collect();
    let radii = manacher_radii(&chars);
    let mut best = (0usize, 0usize);
    for (i, &r) in radii.iter().enumerate() {
        if r > best.1 {
            best = (i, r);
        }
    }
    let (center, len) = best;
    char_slice(s, (center - len) / 2, len)
}

/// Number of palindromic substrings, counting each occurrence separately.
pub fn count_palindromic_substrings(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    manacher_radii(&chars).iter().map(|&r| r.div_ceil(2)).sum()
}

/// Manacher table answering "is `s[l..=r]` a palindrome" in O(1).
///
/// ```
/// use textbook_algorithms::string::PalindromeQueries;
///
/// let queries = PalindromeQueries::new("abaaba");
/// assert_eq!(queries.is_palindrome(0, 5), Ok(true));
/// assert_eq!(queries.is_palindrome(1, 3), Ok(false));
/// ```
#[derive(Clone, Debug)]
pub struct PalindromeQueries {
    radii: Vec<usize>,
    len: usize,
}

impl PalindromeQueries {
    pub fn new(s: &str) -> Self {
        let chars: Vec<char> = s.chars().collect();
        let radii = manacher_radii(&chars);
        tracing::trace!(len = chars.len(), "built palindrome query table");
        Self {
            radii,
            len: chars.len(),
        }
    }

    /// Number of chars in the indexed string.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the chars at positions `l..=r` form a palindrome.
    pub fn is_palindrome(&self, l: usize, r: usize) -> AlgoResult<bool> {
        if l > r || r >= self.len {
            tracing::debug!(l, r, len = self.len, "rejected palindrome query");
            return Err(AlgoError::InvalidArgument(format!(
                "range {l}..={r} is not within 0..{}",
                self.len
            )));
        }
        // s[i] sits at 2i + 1 in the separator-interleaved string, so the
        // centre of s[l..=r] is at l + r + 1.
        Ok(self.radii[l + r + 1] > r - l)
    }
}

/// Radii over the string interleaved with separators (`#a#b#...#`).
///
/// `radii[i]` is the length of the longest palindrome of the original string
/// centred at interleaved position `i`.
fn manacher_radii(chars: &[char]) -> Vec<usize> {
    let m = 2 * chars.len() + 1;
    let at = |i: usize| if i % 2 == 1 { Some(chars[i / 2]) } else { None };

    let mut radii = vec![0usize; m];
    let (mut center, mut right) = (0usize, 0usize);
    for i in 0..m {
        if i < right {
            radii[i] = (right - i).min(radii[2 * center - i]);
        }
        while radii[i] < i && i + radii[i] + 1 < m && at(i - radii[i] - 1) == at(i + radii[i] + 1) {
            radii[i] += 1;
        }
        if i + radii[i] > right {
            center = i;
            right = i + radii[i];
        }
    }
    radii
}

/// Substring by char position and char length.
fn char_slice(s: &str, start: usize, len: usize) -> &str {
    let mut offsets = s.char_indices().map(|(i, _)| i).chain(std::iter::once(s.len()));
    let begin = offsets.nth(start).unwrap_or(s.len());
    let end = if len == 0 {
        begin
    } else {
        offsets.nth(len - 1).unwrap_or(s.len())
    };
    &s[begin..end]
}
