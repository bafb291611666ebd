//! Tower of Hanoi.

/// Moving `disk` (1 is the smallest) from peg `from` to peg `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HanoiMove {
    pub disk: u32,
    pub from: char,
    pub to: char,
}

/// The `2^n - 1` moves that carry `n` disks from `from` to `to` using `via`.
///
/// ```
/// use textbook_algorithms::recursion::{tower_of_hanoi, HanoiMove};
///
/// let moves = tower_of_hanoi(2, 'A', 'C', 'B');
/// assert_eq!(moves, [
///     HanoiMove { disk: 1, from: 'A', to: 'B' },
///     HanoiMove { disk: 2, from: 'A', to: 'C' },
///     HanoiMove { disk: 1, from: 'B', to: 'C' },
/// ]);
/// ```
pub fn tower_of_hanoi(n: u32, from: char, to: char, via: char) -> Vec<HanoiMove> {
    fn go(n: u32, from: char, to: char, via: char, moves: &mut Vec<HanoiMove>) {
        if n == 0 {
            return;
        }
        go(n - 1, from, via, to, moves);
        moves.push(HanoiMove { disk: n, from, to });
        go(n - 1, via, to, from, moves);
    }

    let mut moves = Vec::new();
    go(n, from, to, via, &mut moves);
    moves
}
