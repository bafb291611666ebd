/// Elements strictly greater than everything to their right, in left-to-right
/// order. The last element is always a leader.
///
/// Scans from the right keeping the running maximum, then reverses.
pub fn leaders(values: &[i32]) -> Vec<i32> {
    let mut out = Vec::new();
    let mut best: Option<i32> = None;
    for &v in values.iter().rev() {
        if best.is_none_or(|b| v > b) {
            out.push(v);
            best = Some(v);
        }
    }
    out.reverse();
    out
}
