//! Character-frequency problems: anagrams, first repeating / non-repeating
//! characters and lexicographic rank.

use std::collections::HashMap;

use crate::error::{AlgoError, AlgoResult};

const ALPHABET: usize = 256;

/// Multiset equality of the chars of `a` and `b`.
pub fn is_anagram(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut counts: HashMap<char, i64> = HashMap::new();
    for c in a.chars() {
        *counts.entry(c).or_default() += 1;
    }
    for c in b.chars() {
        *counts.entry(c).or_default() -= 1;
    }
    counts.values().all(|&v| v == 0)
}

/// Whether some window of `text` is a byte permutation of `pattern`.
///
/// Maintains byte counts for a sliding window of `pattern.len()` bytes.
pub fn contains_anagram(text: &str, pattern: &str) -> bool {
    let (t, p) = (text.as_bytes(), pattern.as_bytes());
    if p.len() > t.len() {
        return false;
    }
    let mut want = [0usize; ALPHABET];
    let mut window = [0usize; ALPHABET];
    for (&pb, &tb) in p.iter().zip(t) {
        want[pb as usize] += 1;
        window[tb as usize] += 1;
    }
    if want == window {
        return true;
    }
    for i in p.len()..t.len() {
        window[t[i] as usize] += 1;
        window[t[i - p.len()] as usize] -= 1;
        if want == window {
            return true;
        }
    }
    false
}

/// Index of the leftmost byte that occurs again later in the string.
///
/// Scans from the right recording the smallest index whose byte was already
/// seen further right.
pub fn leftmost_repeating(s: &str) -> Option<usize> {
    let mut seen = [false; ALPHABET];
    let mut result = None;
    for (i, &b) in s.as_bytes().iter().enumerate().rev() {
        if seen[b as usize] {
            result = Some(i);
        } else {
            seen[b as usize] = true;
        }
    }
    result
}

/// Index of the leftmost byte occurring exactly once.
pub fn leftmost_non_repeating(s: &str) -> Option<usize> {
    const UNSEEN: usize = usize::MAX;
    const REPEATED: usize = usize::MAX - 1;
    let mut first = [UNSEEN; ALPHABET];
    for (i, &b) in s.as_bytes().iter().enumerate() {
        let slot = &mut first[b as usize];
        *slot = if *slot == UNSEEN { i } else { REPEATED };
    }
    first.iter().copied().filter(|&i| i < REPEATED).min()
}

/// 1-based rank of `s` among all permutations of its bytes in sorted order.
///
/// Requires distinct bytes. For each position, the rank grows by
/// `(smaller bytes to the right) * (remaining length - 1)!`.
pub fn lexicographic_rank(s: &str) -> AlgoResult<u64> {
    let bytes = s.as_bytes();
    let mut present = [false; ALPHABET];
    for &b in bytes {
        if std::mem::replace(&mut present[b as usize], true) {
            tracing::debug!(byte = b, "lexicographic rank needs distinct bytes");
            return Err(AlgoError::InvalidArgument(format!(
                "byte {:?} occurs more than once",
                b as char
            )));
        }
    }

    let n = bytes.len();
    let mut rank = 1u64;
    for (i, &b) in bytes.iter().enumerate() {
        let smaller_right = bytes[i + 1..].iter().filter(|&&c| c < b).count() as u64;
        if smaller_right == 0 {
            continue;
        }
        rank = (1..(n - i) as u64)
            .try_fold(smaller_right, |acc, k| acc.checked_mul(k))
            .and_then(|v| rank.checked_add(v))
            .ok_or(AlgoError::Overflow("rank exceeds u64"))?;
    }
    Ok(rank)
}
