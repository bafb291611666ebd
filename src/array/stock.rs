/// Best profit from one buy followed by one later sell. Zero when prices only
/// fall.
pub fn max_profit_single(prices: &[u32]) -> u64 {
    let mut cheapest = u32::MAX;
    let mut best = 0u64;
    for &p in prices {
        cheapest = cheapest.min(p);
        best = best.max((p - cheapest) as u64);
    }
    best
}

/// Best profit with any number of non-overlapping transactions: collect every
/// rising step.
pub fn max_profit_multiple(prices: &[u32]) -> u64 {
    prices
        .windows(2)
        .filter(|w| w[1] > w[0])
        .map(|w| (w[1] - w[0]) as u64)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn stock_known_cases() {
        assert_eq!(max_profit_single(&[7, 1, 5, 3, 6, 4]), 5);
        assert_eq!(max_profit_single(&[7, 6, 4, 3, 1]), 0);
        assert_eq!(max_profit_single(&[]), 0);
        assert_eq!(max_profit_multiple(&[1, 5, 3, 8, 12]), 13);
        assert_eq!(max_profit_multiple(&[100, 180, 260, 310, 40, 535, 695]), 865);
        assert_eq!(max_profit_multiple(&[5, 4, 3]), 0);
    }

    proptest! {
        #[test]
        fn single_matches_pairwise(prices in prop::collection::vec(0u32..10_000, 0..80)) {
            let mut expected = 0u64;
            for i in 0..prices.len() {
                for j in i + 1..prices.len() {
                    if prices[j] > prices[i] {
                        expected = expected.max((prices[j] - prices[i]) as u64);
                    }
                }
            }
            prop_assert_eq!(max_profit_single(&prices), expected);
            prop_assert!(max_profit_multiple(&prices) >= expected);
        }
    }
}
