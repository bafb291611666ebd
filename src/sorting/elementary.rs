//! Quadratic comparison sorts.

/// Bubble sort with early exit once a pass makes no swaps. Stable.
pub fn bubble_sort<T: Ord>(values: &mut [T]) {
    let n = values.len();
    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Selection sort: at most `n - 1` swaps. Not stable.
pub fn selection_sort<T: Ord>(values: &mut [T]) {
    let n = values.len();
    for i in 0..n {
        let mut min = i;
        for j in i + 1..n {
            if values[j] < values[min] {
                min = j;
            }
        }
        values.swap(i, min);
    }
}

/// Insertion sort by adjacent swaps. Stable, O(n) on sorted input.
pub fn insertion_sort<T: Ord>(values: &mut [T]) {
    for i in 1..values.len() {
        let mut j = i;
        while j > 0 && values[j - 1] > values[j] {
            values.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn sorts_match_std(values in prop::collection::vec(any::<i32>(), 0..100)) {
            let mut expected = values.clone();
            expected.sort();

            let mut bubble = values.clone();
            bubble_sort(&mut bubble);
            prop_assert_eq!(&bubble, &expected);

            let mut selection = values.clone();
            selection_sort(&mut selection);
            prop_assert_eq!(&selection, &expected);

            let mut insertion = values.clone();
            insertion_sort(&mut insertion);
            prop_assert_eq!(&insertion, &expected);
        }

        /// Sorting (key, original index) pairs by key only exposes instability.
        #[test]
        fn bubble_and_insertion_are_stable(keys in prop::collection::vec(0u8..4, 0..60)) {
            #[derive(Debug, Clone, PartialEq, Eq)]
            struct Keyed(u8, usize);
            impl PartialOrd for Keyed {
                fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                    Some(self.cmp(other))
                }
            }
            impl Ord for Keyed {
                fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                    self.0.cmp(&other.0)
                }
            }

            let items: Vec<Keyed> = keys.iter().enumerate().map(|(i, &k)| Keyed(k, i)).collect();
            let mut expected = items.clone();
            expected.sort_by_key(|k| k.0);

            let mut bubble = items.clone();
            bubble_sort(&mut bubble);
            prop_assert_eq!(&bubble, &expected);

            let mut insertion = items;
            insertion_sort(&mut insertion);
            prop_assert_eq!(&insertion, &expected);
        }
    }

    #[test]
    fn sorts_basic() {
        let mut values = [64, 34, 25, 12, 22, 11, 90];
        bubble_sort(&mut values);
        assert_eq!(values, [11, 12, 22, 25, 34, 64, 90]);

        let mut empty: [i32; 0] = [];
        selection_sort(&mut empty);
        insertion_sort(&mut empty);
        bubble_sort(&mut empty);
    }
}
