/// Reverses the order of whitespace-separated words. Runs of whitespace
/// collapse to a single space and leading/trailing whitespace is dropped.
pub fn reverse_words(s: &str) -> String {
    let mut words: Vec<&str> = s.split_whitespace().collect();
    words.reverse();
    words.join(" ")
}

/// Whether `s` is a subsequence of `t` (two pointers, O(|s| + |t|)).
pub fn is_subsequence(s: &str, t: &str) -> bool {
    let mut wanted = s.chars().peekable();
    for c in t.chars() {
        if wanted.peek() == Some(&c) {
            wanted.next();
        }
    }
    wanted.peek().is_none()
}
