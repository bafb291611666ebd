//! Substring search.
//!
//! Every function returns the start offsets of all (possibly overlapping)
//! matches in ascending order. An empty pattern matches nowhere.
//!
//! | Function | Time |
//! |----------|------|
//! | [`naive_search`] | O((n - m + 1) · m) |
//! | [`naive_search_distinct`] | O(n), pattern bytes must be distinct |
//! | [`rabin_karp_search`] | O(n + m) expected |
//! | [`kmp_search`] | O(n + m) worst case |

/// Alphabet size for the rolling hash.
const RK_BASE: u32 = 256;
/// Small prime modulus, as in the textbook presentation.
const RK_MODULUS: u32 = 101;

pub fn naive_search(text: &str, pattern: &str) -> Vec<usize> {
    let (t, p) = (text.as_bytes(), pattern.as_bytes());
    if p.is_empty() || p.len() > t.len() {
        return Vec::new();
    }
    (0..=t.len() - p.len())
        .filter(|&i| &t[i..i + p.len()] == p)
        .collect()
}

/// Naive search that exploits a pattern with all-distinct bytes: after a
/// partial match of length `j`, none of those `j` text bytes can start a
/// match, so the window jumps past them.
///
/// With repeated pattern bytes the skip can miss matches; use
/// [`naive_search`] there.
pub fn naive_search_distinct(text: &str, pattern: &str) -> Vec<usize> {
    let (t, p) = (text.as_bytes(), pattern.as_bytes());
    let mut out = Vec::new();
    if p.is_empty() || p.len() > t.len() {
        return out;
    }
    let mut i = 0;
    while i + p.len() <= t.len() {
        let mut j = 0;
        while j < p.len() && t[i + j] == p[j] {
            j += 1;
        }
        if j == p.len() {
            out.push(i);
        }
        i += j.max(1);
    }
    out
}

/// Rabin–Karp with a rolling polynomial hash. Hash hits are confirmed by a
/// byte comparison, so spurious hits never produce false matches.
pub fn rabin_karp_search(text: &str, pattern: &str) -> Vec<usize> {
    let (t, p) = (text.as_bytes(), pattern.as_bytes());
    let m = p.len();
    let mut out = Vec::new();
    if m == 0 || m > t.len() {
        return out;
    }

    // RK_BASE^(m-1) mod q, the weight of the byte leaving the window.
    let mut high = 1u32;
    for _ in 1..m {
        high = high * RK_BASE % RK_MODULUS;
    }

    let mut p_hash = 0u32;
    let mut t_hash = 0u32;
    for k in 0..m {
        p_hash = (p_hash * RK_BASE + p[k] as u32) % RK_MODULUS;
        t_hash = (t_hash * RK_BASE + t[k] as u32) % RK_MODULUS;
    }

    for i in 0..=t.len() - m {
        if p_hash == t_hash && &t[i..i + m] == p {
            out.push(i);
        }
        if i + m < t.len() {
            let leaving = t[i] as u32 * high % RK_MODULUS;
            t_hash = ((t_hash + RK_MODULUS - leaving) * RK_BASE + t[i + m] as u32) % RK_MODULUS;
        }
    }
    out
}

/// Longest proper prefix that is also a suffix, for every prefix of `pattern`.
pub fn lps_array(pattern: &[u8]) -> Vec<usize> {
    let mut lps = vec![0; pattern.len()];
    let mut len = 0;
    for i in 1..pattern.len() {
        while len > 0 && pattern[i] != pattern[len] {
            len = lps[len - 1];
        }
        if pattern[i] == pattern[len] {
            len += 1;
        }
        lps[i] = len;
    }
    lps
}

/// Knuth–Morris–Pratt search over bytes.
pub fn kmp_search(text: &str, pattern: &str) -> Vec<usize> {
    kmp_search_bytes(text.as_bytes(), pattern.as_bytes())
}

pub(crate) fn kmp_search_bytes(t: &[u8], p: &[u8]) -> Vec<usize> {
    let mut res = Vec::new();
    if p.is_empty() {
        return res;
    }
    let lps = lps_array(p);

    let (mut i, mut j) = (0, 0);
    while i < t.len() {
        if t[i] == p[j] {
            i += 1;
            j += 1;
            if j == p.len() {
                res.push(i - j);
                j = lps[j - 1];
            }
        } else if j > 0 {
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }
    res
}
