//! Include/exclude enumeration: subsets, permutations, subset sums and rope
//! cutting.

/// Every subsequence of `s`, `2^n` in total, including the empty string.
///
/// Each char is first excluded, then included, so `""` comes first and `s`
/// last: `"ab"` yields `["", "b", "a", "ab"]`.
pub fn power_set(s: &str) -> Vec<String> {
    fn go(chars: &[char], current: &mut String, out: &mut Vec<String>) {
        let Some((&first, rest)) = chars.split_first() else {
            out.push(current.clone());
            return;
        };
        go(rest, current, out);
        current.push(first);
        go(rest, current, out);
        current.pop();
    }

    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();
    go(&chars, &mut String::with_capacity(s.len()), &mut out);
    out
}

/// All `n!` orderings of the chars of `s`, generated by swapping each char
/// into the front position. Repeated chars produce repeated permutations.
pub fn permutations(s: &str) -> Vec<String> {
    fn go(chars: &mut [char], fixed: usize, out: &mut Vec<String>) {
        if fixed + 1 >= chars.len() {
            out.push(chars.iter().collect());
            return;
        }
        for i in fixed..chars.len() {
            chars.swap(fixed, i);
            go(chars, fixed + 1, out);
            chars.swap(fixed, i);
        }
    }

    let mut chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();
    go(&mut chars, 0, &mut out);
    out
}

/// Number of subsets of `values` summing to `target`. The empty subset counts
/// when `target` is zero.
pub fn subset_sum_count(values: &[i32], target: i64) -> u64 {
    match values.split_first() {
        None => u64::from(target == 0),
        Some((&first, rest)) => {
            let with_first = target
                .checked_sub(first as i64)
                .map_or(0, |t| subset_sum_count(rest, t));
            subset_sum_count(rest, target) + with_first
        }
    }
}

/// Most pieces a rope of length `n` can be cut into when every piece must be
/// of length `a`, `b` or `c`. `None` when no exact cut exists.
///
/// Fills the answer for every length from 1 up to `n`. Each length only looks
/// back by one cut, so a rolling window of `longest cut + 1` entries is
/// enough. Zero-length pieces are ignored.
pub fn max_rope_pieces(n: u32, a: u32, b: u32, c: u32) -> Option<u32> {
    let cuts: Vec<u32> = [a, b, c].into_iter().filter(|&cut| cut > 0).collect();
    let Some(&longest) = cuts.iter().max() else {
        return (n == 0).then_some(0);
    };

    // best[len % window] is the answer for `len`.
    let window = longest.min(n) as usize + 1;
    let mut best: Vec<Option<u32>> = vec![None; window];
    best[0] = Some(0);
    for len in 1..=n {
        best[len as usize % window] = cuts
            .iter()
            .filter(|&&cut| cut <= len)
            .filter_map(|&cut| best[(len - cut) as usize % window])
            .max()
            .map(|pieces| pieces + 1);
    }
    best[n as usize % window]
}
