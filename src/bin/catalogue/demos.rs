use std::fmt::Debug;

use clap::ValueEnum;
use textbook_algorithms::array::*;
use textbook_algorithms::hashing::*;
use textbook_algorithms::logic_building::*;
use textbook_algorithms::recursion::*;
use textbook_algorithms::searching::*;
use textbook_algorithms::sorting::*;
use textbook_algorithms::string::*;
use textbook_algorithms::{AlgoError, AlgoResult};

use crate::value_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum Demo {
    All,
    ArrayBasics,
    Rotation,
    RainWater,
    Leaders,
    Subarrays,
    PrefixSums,
    Stock,
    Palindromes,
    PatternSearch,
    StringRotation,
    Anagrams,
    Words,
    Counting,
    PairSums,
    SubarraySums,
    Fraction,
    BinarySearch,
    TwoPointer,
    ElementarySorts,
    MergeSort,
    Partition,
    CountingSort,
    Intervals,
    Sequences,
    Josephus,
    Hanoi,
    Choices,
    Digits,
    Arithmetic,
    Primes,
}

/// Prints each example and counts the ones whose output is not the expected
/// value.
struct Checker {
    unit: String,
    failures: usize,
}

impl Checker {
    fn check<T: Debug + PartialEq>(&mut self, label: &str, actual: T, expected: T) {
        println!("  {label} -> {actual:?}");
        if actual != expected {
            tracing::error!(
                unit = %self.unit,
                label,
                actual = ?actual,
                expected = ?expected,
                "demo output mismatch"
            );
            self.failures += 1;
        }
    }
}

/// Runs one unit, or every unit for [`Demo::All`], and returns the number of
/// mismatches.
pub fn run(target: Demo) -> usize {
    let units: Vec<Demo> = match target {
        Demo::All => Demo::value_variants()
            .iter()
            .copied()
            .filter(|&d| d != Demo::All)
            .collect(),
        unit => vec![unit],
    };

    let mut failures = 0;
    for unit in units {
        let name = value_name(&unit);
        println!("== {name}");
        let mut checker = Checker {
            unit: name,
            failures: 0,
        };
        demonstrate(unit, &mut checker);
        tracing::debug!(unit = %checker.unit, failures = checker.failures, "demo finished");
        failures += checker.failures;
    }
    failures
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn demonstrate(unit: Demo, c: &mut Checker) {
    match unit {
        Demo::All => {}
        Demo::ArrayBasics => {
            c.check(
                "largest_index([10, 5, 20, 8, 20])",
                largest_index(&[10, 5, 20, 8, 20]),
                Some(2),
            );
            c.check(
                "second_largest_index([20, 10, 20, 8, 12])",
                second_largest_index(&[20, 10, 20, 8, 12]),
                Some(4),
            );
            c.check(
                "is_sorted_non_decreasing([1, 2, 2, 5])",
                is_sorted_non_decreasing(&[1, 2, 2, 5]),
                true,
            );
            let mut values = [10, 20, 20, 30, 30, 30];
            let len = remove_duplicates_sorted(&mut values);
            c.check(
                "remove_duplicates_sorted([10, 20, 20, 30, 30, 30])",
                &values[..len],
                &[10, 20, 30][..],
            );
            let mut zeros = [8, 5, 0, 10, 0, 20];
            move_zeros_to_end(&mut zeros);
            c.check("move_zeros_to_end([8, 5, 0, 10, 0, 20])", zeros, [8, 5, 10, 20, 0, 0]);
            c.check(
                "frequencies_sorted([10, 10, 10, 25, 30, 30])",
                frequencies_sorted(&[10, 10, 10, 25, 30, 30]),
                vec![(10, 3), (25, 1), (30, 2)],
            );
            let votes = [8, 3, 4, 8, 8];
            c.check(
                "majority_element([8, 3, 4, 8, 8])",
                majority_element(&votes).map(|i| votes[i]),
                Some(8),
            );
            c.check(
                "min_group_flips([1, 0, 0, 0, 1, 0, 0, 1, 1, 1, 1])",
                min_group_flips(&[1, 0, 0, 0, 1, 0, 0, 1, 1, 1, 1]),
                vec![(1, 3), (5, 6)],
            );
        }
        Demo::Rotation => {
            let expected = [3, 4, 5, 1, 2];
            let mut naive = [1, 2, 3, 4, 5];
            rotate_left_naive(&mut naive, 2);
            c.check("rotate_left_naive([1, 2, 3, 4, 5], 2)", naive, expected);
            let mut juggling = [1, 2, 3, 4, 5];
            rotate_left_juggling(&mut juggling, 2);
            c.check("rotate_left_juggling([1, 2, 3, 4, 5], 2)", juggling, expected);
            let mut reversal = [1, 2, 3, 4, 5];
            rotate_left_reversal(&mut reversal, 2);
            c.check("rotate_left_reversal([1, 2, 3, 4, 5], 2)", reversal, expected);
            let mut right = [1, 2, 3, 4, 5];
            rotate_right(&mut right, 2);
            c.check("rotate_right([1, 2, 3, 4, 5], 2)", right, [4, 5, 1, 2, 3]);
        }
        Demo::RainWater => {
            let heights = [3, 0, 1, 2, 5];
            c.check("trapped_water_naive([3, 0, 1, 2, 5])", trapped_water_naive(&heights), 6);
            c.check("trapped_water_prefix([3, 0, 1, 2, 5])", trapped_water_prefix(&heights), 6);
            c.check(
                "trapped_water_two_pointer([3, 0, 1, 2, 5])",
                trapped_water_two_pointer(&heights),
                6,
            );
        }
        Demo::Leaders => {
            c.check(
                "leaders([7, 10, 4, 10, 6, 5, 2])",
                leaders(&[7, 10, 4, 10, 6, 5, 2]),
                vec![10, 6, 5, 2],
            );
        }
        Demo::Subarrays => {
            let values = [2, 3, -8, 7, -1, 2, 3];
            c.check(
                "max_subarray_sum_naive([2, 3, -8, 7, -1, 2, 3])",
                max_subarray_sum_naive(&values),
                Some(11),
            );
            c.check(
                "max_subarray_sum([2, 3, -8, 7, -1, 2, 3])",
                max_subarray_sum(&values),
                Some(11),
            );
            c.check(
                "max_circular_subarray_sum([5, -2, 3, 4])",
                max_circular_subarray_sum(&[5, -2, 3, 4]),
                Some(12),
            );
            c.check(
                "max_window_sum([1, 8, 30, -5, 20, 7], 3)",
                max_window_sum(&[1, 8, 30, -5, 20, 7], 3),
                Some(45),
            );
            c.check(
                "longest_even_odd_subarray([10, 12, 14, 7, 8])",
                longest_even_odd_subarray(&[10, 12, 14, 7, 8]),
                3,
            );
            c.check(
                "max_consecutive_ones([0, 1, 1, 0, 1, 1, 1])",
                max_consecutive_ones(&[0, 1, 1, 0, 1, 1, 1]),
                3,
            );
        }
        Demo::PrefixSums => {
            c.check(
                "prefix_sums([1, 2, 3, 4, 5])",
                prefix_sums(&[1, 2, 3, 4, 5]),
                vec![1, 3, 6, 10, 15],
            );
            let sums = PrefixSums::new(&[2, 8, 3, 9, 6, 5, 4]);
            c.check("range_sum(0, 2)", sums.range_sum(0, 2), Ok(13));
            c.check("range_sum(1, 3)", sums.range_sum(1, 3), Ok(20));
            c.check("range_sum(2, 6)", sums.range_sum(2, 6), Ok(27));
            c.check(
                "equilibrium_index([3, 4, 8, -9, 20, 6])",
                equilibrium_index(&[3, 4, 8, -9, 20, 6]),
                Some(4),
            );
            c.check(
                "max_appearing_in_ranges([1, 2, 5, 15], [5, 8, 7, 18])",
                max_appearing_in_ranges(&[1, 2, 5, 15], &[5, 8, 7, 18]),
                Ok(Some(5)),
            );
        }
        Demo::Stock => {
            c.check(
                "max_profit_single([7, 1, 5, 3, 6, 4])",
                max_profit_single(&[7, 1, 5, 3, 6, 4]),
                5,
            );
            c.check(
                "max_profit_multiple([1, 5, 3, 8, 12])",
                max_profit_multiple(&[1, 5, 3, 8, 12]),
                13,
            );
        }
        Demo::Palindromes => {
            c.check("is_palindrome(\"racecar\")", is_palindrome("racecar"), true);
            c.check(
                "longest_palindrome_expand(\"forgeeksskeegfor\")",
                longest_palindrome_expand("forgeeksskeegfor"),
                "geeksskeeg",
            );
            c.check(
                "longest_palindrome_manacher(\"forgeeksskeegfor\")",
                longest_palindrome_manacher("forgeeksskeegfor"),
                "geeksskeeg",
            );
            c.check(
                "count_palindromic_substrings(\"abba\")",
                count_palindromic_substrings("abba"),
                6,
            );
            let queries = PalindromeQueries::new("abacaba");
            c.check("\"abacaba\"[0..=6] is a palindrome", queries.is_palindrome(0, 6), Ok(true));
            c.check("\"abacaba\"[1..=3] is a palindrome", queries.is_palindrome(1, 3), Ok(false));
        }
        Demo::PatternSearch => {
            let text = "ababcababaad";
            c.check(
                "naive_search(\"ababcababaad\", \"ababa\")",
                naive_search(text, "ababa"),
                vec![5],
            );
            c.check(
                "rabin_karp_search(\"ababcababaad\", \"ababa\")",
                rabin_karp_search(text, "ababa"),
                vec![5],
            );
            c.check("kmp_search(\"ababcababaad\", \"ababa\")", kmp_search(text, "ababa"), vec![5]);
            c.check(
                "naive_search_distinct(\"geeksforgeeks\", \"eks\")",
                naive_search_distinct("geeksforgeeks", "eks"),
                vec![2, 10],
            );
            c.check(
                "lps_array(\"abacabad\")",
                lps_array(b"abacabad"),
                vec![0, 0, 1, 0, 1, 2, 3, 0],
            );
        }
        Demo::StringRotation => {
            c.check("is_rotation(\"abcd\", \"cdab\")", is_rotation("abcd", "cdab"), true);
            c.check(
                "is_rotation_naive(\"abab\", \"abba\")",
                is_rotation_naive("abab", "abba"),
                false,
            );
        }
        Demo::Anagrams => {
            c.check("is_anagram(\"listen\", \"silent\")", is_anagram("listen", "silent"), true);
            c.check(
                "contains_anagram(\"geeksforgeeks\", \"frog\")",
                contains_anagram("geeksforgeeks", "frog"),
                true,
            );
            c.check("leftmost_repeating(\"abbcc\")", leftmost_repeating("abbcc"), Some(1));
            c.check(
                "leftmost_non_repeating(\"geeksforgeeks\")",
                leftmost_non_repeating("geeksforgeeks"),
                Some(5),
            );
            c.check("lexicographic_rank(\"string\")", lexicographic_rank("string"), Ok(598));
        }
        Demo::Words => {
            c.check(
                "reverse_words(\"  I love   coding \")",
                reverse_words("  I love   coding "),
                "coding love I".to_string(),
            );
            c.check("is_subsequence(\"ADE\", \"ABCDE\")", is_subsequence("ADE", "ABCDE"), true);
        }
        Demo::Counting => {
            c.check(
                "count_distinct([15, 12, 13, 12, 13, 13, 18])",
                count_distinct(&[15, 12, 13, 12, 13, 13, 18]),
                4,
            );
            c.check(
                "frequencies([10, 12, 10, 15, 10, 20, 12, 12])",
                frequencies(&[10, 12, 10, 15, 10, 20, 12, 12]),
                vec![(10, 3), (12, 3), (15, 1), (20, 1)],
            );
            c.check(
                "intersection_count([10, 15, 20, 15, 30, 30, 5], [30, 5, 30, 80])",
                intersection_count(&[10, 15, 20, 15, 30, 30, 5], &[30, 5, 30, 80]),
                2,
            );
            c.check(
                "union_count([15, 20, 5, 15], [15, 15, 15, 20, 10])",
                union_count(&[15, 20, 5, 15], &[15, 15, 15, 20, 10]),
                4,
            );
            c.check(
                "more_than_n_by_k([30, 10, 20, 20, 10, 20, 30, 30], 4)",
                more_than_n_by_k(&[30, 10, 20, 20, 10, 20, 30, 30], 4),
                vec![20, 30],
            );
        }
        Demo::PairSums => {
            c.check(
                "has_pair_with_sum([3, 2, 8, 15, -8], 17)",
                has_pair_with_sum(&[3, 2, 8, 15, -8], 17),
                true,
            );
            c.check(
                "count_pairs_with_sum([1, 5, 7, -1, 5], 6)",
                count_pairs_with_sum(&[1, 5, 7, -1, 5], 6),
                3,
            );
        }
        Demo::SubarraySums => {
            c.check(
                "has_zero_sum_subarray([1, 4, 13, -3, -10, 5])",
                has_zero_sum_subarray(&[1, 4, 13, -3, -10, 5]),
                true,
            );
            c.check(
                "has_subarray_with_sum([5, 8, 6, 13, 3, -1], 22)",
                has_subarray_with_sum(&[5, 8, 6, 13, 3, -1], 22),
                true,
            );
            c.check(
                "longest_subarray_with_sum([5, 8, -4, -4, 9, -2, 2], 0)",
                longest_subarray_with_sum(&[5, 8, -4, -4, 9, -2, 2], 0),
                3,
            );
            c.check(
                "longest_balanced_binary_subarray([1, 0, 1, 1, 1, 0, 0])",
                longest_balanced_binary_subarray(&[1, 0, 1, 1, 1, 0, 0]),
                6,
            );
            c.check(
                "longest_common_span([0, 1, 0, 0, 0, 0], [1, 0, 1, 0, 0, 1])",
                longest_common_span(&[0, 1, 0, 0, 0, 0], &[1, 0, 1, 0, 0, 1]),
                4,
            );
            c.check(
                "longest_consecutive_run([1, 9, 3, 4, 2, 20])",
                longest_consecutive_run(&[1, 9, 3, 4, 2, 20]),
                4,
            );
            c.check(
                "distinct_in_windows([10, 20, 20, 10, 30, 40, 10], 4)",
                distinct_in_windows(&[10, 20, 20, 10, 30, 40, 10], 4),
                vec![2, 3, 4, 3],
            );
        }
        Demo::Fraction => {
            let decimal = |n, d| fraction_to_decimal(n, d);
            c.check("fraction_to_decimal(1, 3)", decimal(1, 3), Ok("0.(3)".to_string()));
            c.check("fraction_to_decimal(1, 6)", decimal(1, 6), Ok("0.1(6)".to_string()));
            c.check("fraction_to_decimal(22, 7)", decimal(22, 7), Ok("3.(142857)".to_string()));
            c.check("fraction_to_decimal(-1, 4)", decimal(-1, 4), Ok("-0.25".to_string()));
            c.check("fraction_to_decimal(1, 0)", decimal(1, 0), Err(AlgoError::DivisionByZero));
        }
        Demo::BinarySearch => {
            let values = [1, 10, 10, 10, 20, 20, 40];
            c.check(
                "binary_search_iterative(.., 40)",
                binary_search_iterative(&values, &40),
                Some(6),
            );
            c.check(
                "binary_search_recursive(.., 1)",
                binary_search_recursive(&values, &1),
                Some(0),
            );
            c.check("first_occurrence(.., 10)", first_occurrence(&values, &10), Some(1));
            c.check("last_occurrence(.., 10)", last_occurrence(&values, &10), Some(3));
            c.check("count_occurrences(.., 20)", count_occurrences(&values, &20), 2);
            c.check("count_ones_sorted([0, 0, 1, 1, 1])", count_ones_sorted(&[0, 0, 1, 1, 1]), 3);
            c.check("floor_sqrt(99)", floor_sqrt(99), 9);
            c.check("search_unbounded(.., 20)", search_unbounded(&values, &20), Some(4));
            c.check(
                "search_rotated([10, 20, 40, 60, 5, 8], 5)",
                search_rotated(&[10, 20, 40, 60, 5, 8], &5),
                Some(4),
            );
            c.check("find_peak([5, 10, 20, 15, 7])", find_peak(&[5, 10, 20, 15, 7]), Some(2));
        }
        Demo::TwoPointer => {
            c.check(
                "pair_sum_sorted([2, 5, 8, 12, 30], 17)",
                pair_sum_sorted(&[2, 5, 8, 12, 30], 17),
                Some((1, 3)),
            );
            c.check(
                "triplet_sum_sorted([2, 3, 4, 8, 9, 20, 40], 32)",
                triplet_sum_sorted(&[2, 3, 4, 8, 9, 20, 40], 32),
                Some((1, 4, 5)),
            );
            c.check(
                "median_of_sorted_pair([10, 20, 30, 40, 50], [5, 15, 25, 35, 45])",
                median_of_sorted_pair(&[10, 20, 30, 40, 50], &[5, 15, 25, 35, 45]),
                Some(27.5),
            );
            c.check(
                "find_repeating([1, 3, 2, 4, 6, 5, 7, 3])",
                find_repeating(&[1, 3, 2, 4, 6, 5, 7, 3]),
                Some(3),
            );
            c.check(
                "allocate_min_pages([10, 20, 10, 30], 2)",
                allocate_min_pages(&[10, 20, 10, 30], 2),
                Some(40),
            );
        }
        Demo::ElementarySorts => {
            let expected = [11, 12, 22, 25, 34, 64, 90];
            let sorts: [(&str, fn(&mut [i32])); 3] = [
                ("bubble_sort", bubble_sort::<i32>),
                ("selection_sort", selection_sort::<i32>),
                ("insertion_sort", insertion_sort::<i32>),
            ];
            for (name, sort) in sorts {
                let mut values = [64, 34, 25, 12, 22, 11, 90];
                sort(&mut values);
                c.check(&format!("{name}([64, 34, 25, 12, 22, 11, 90])"), values, expected);
            }
        }
        Demo::MergeSort => {
            c.check(
                "merge_sorted([10, 15, 20], [5, 6, 6, 15])",
                merge_sorted(&[10, 15, 20], &[5, 6, 6, 15]),
                vec![5, 6, 6, 10, 15, 15, 20],
            );
            let mut values = [10, 5, 30, 15, 7];
            merge_sort(&mut values);
            c.check("merge_sort([10, 5, 30, 15, 7])", values, [5, 7, 10, 15, 30]);
            c.check("count_inversions([2, 4, 1, 3, 5])", count_inversions(&[2, 4, 1, 3, 5]), 3);
            c.check(
                "surpasser_counts([2, 7, 5, 3, 0, 8, 1])",
                surpasser_counts(&[2, 7, 5, 3, 0, 8, 1]),
                vec![4, 1, 1, 1, 2, 0, 0],
            );
        }
        Demo::Partition => {
            let mut lomuto = [10, 80, 30, 90, 40, 50, 70];
            let p = lomuto_partition(&mut lomuto);
            c.check("lomuto_partition([10, 80, 30, 90, 40, 50, 70]) pivot index", p, 4);
            let mut quick = [8, 4, 7, 9, 3, 10, 5];
            quick_sort(&mut quick);
            c.check("quick_sort([8, 4, 7, 9, 3, 10, 5])", quick, [3, 4, 5, 7, 8, 9, 10]);
            let mut hoare = [8, 4, 7, 9, 3, 10, 5];
            quick_sort_hoare(&mut hoare);
            c.check("quick_sort_hoare([8, 4, 7, 9, 3, 10, 5])", hoare, [3, 4, 5, 7, 8, 9, 10]);
            c.check(
                "kth_smallest([10, 5, 30, 12], 2)",
                kth_smallest(&[10, 5, 30, 12], 2),
                Some(10),
            );
            let mut flags = [0, 1, 1, 2, 0, 1, 1, 2];
            let sorted: AlgoResult<()> = sort_012(&mut flags);
            c.check(
                "sort_012([0, 1, 1, 2, 0, 1, 1, 2])",
                sorted.map(|()| flags),
                Ok([0, 0, 1, 1, 1, 1, 2, 2]),
            );
            let mut signs = [-12, 18, -10, 15];
            segregate_negatives(&mut signs);
            c.check(
                "segregate_negatives([-12, 18, -10, 15]) negatives first",
                signs[..2].iter().all(|&v| v < 0),
                true,
            );
        }
        Demo::CountingSort => {
            c.check(
                "counting_sort([1, 4, 4, 1, 0, 1], 5)",
                counting_sort(&[1, 4, 4, 1, 0, 1], 5),
                Ok(vec![0, 1, 1, 1, 4, 4]),
            );
            let mut values = [319, 212, 6, 8, 100, 50];
            radix_sort(&mut values);
            c.check("radix_sort([319, 212, 6, 8, 100, 50])", values, [6, 8, 50, 100, 212, 319]);
        }
        Demo::Intervals => {
            let intervals = [
                Interval::new(5, 10),
                Interval::new(3, 15),
                Interval::new(18, 30),
                Interval::new(2, 7),
            ];
            c.check(
                "merge_intervals([5,10] [3,15] [18,30] [2,7])",
                merge_intervals(&intervals),
                vec![Interval::new(2, 15), Interval::new(18, 30)],
            );
            c.check(
                "max_guests([900, 600, 700], [1000, 800, 730])",
                max_guests(&[900, 600, 700], &[1000, 800, 730]),
                Ok(Some((2, 700))),
            );
            c.check(
                "min_chocolate_difference([7, 3, 2, 4, 9, 12, 56], 3)",
                min_chocolate_difference(&[7, 3, 2, 4, 9, 12, 56], 3),
                Some(2),
            );
            c.check(
                "intersection_sorted([1, 1, 3, 3, 3], [1, 1, 1, 1, 3, 5, 7])",
                intersection_sorted(&[1, 1, 3, 3, 3], &[1, 1, 1, 1, 3, 5, 7]),
                vec![1, 3],
            );
            c.check(
                "union_sorted([3, 5, 8], [2, 8, 9, 10, 15])",
                union_sorted(&[3, 5, 8], &[2, 8, 9, 10, 15]),
                vec![2, 3, 5, 8, 9, 10, 15],
            );
        }
        Demo::Sequences => {
            c.check("fibonacci(10)", fibonacci(10), Ok(55));
            c.check("fibonacci_naive(10)", fibonacci_naive(10), 55);
            c.check(
                "fibonacci(94)",
                fibonacci(94),
                Err(AlgoError::Overflow("fibonacci exceeds u64")),
            );
            c.check("factorial(5)", factorial(5), Ok(120));
            c.check("sum_of_digits_recursive(253)", sum_of_digits_recursive(253), 10);
            c.check(
                "is_palindrome_recursive(\"abbcbba\")",
                is_palindrome_recursive("abbcbba"),
                true,
            );
        }
        Demo::Josephus => {
            c.check("josephus(7, 3)", josephus(7, 3), Ok(3));
            c.check("josephus_iterative(7, 3)", josephus_iterative(7, 3), Ok(3));
        }
        Demo::Hanoi => {
            let moves = tower_of_hanoi(3, 'A', 'C', 'B');
            for mv in &moves {
                println!("    move disk {} from {} to {}", mv.disk, mv.from, mv.to);
            }
            c.check("tower_of_hanoi(3) move count", moves.len(), 7);
            c.check(
                "tower_of_hanoi(3) middle move",
                moves[3],
                HanoiMove { disk: 3, from: 'A', to: 'C' },
            );
        }
        Demo::Choices => {
            c.check(
                "power_set(\"abc\")",
                power_set("abc"),
                strings(&["", "c", "b", "bc", "a", "ac", "ab", "abc"]),
            );
            c.check(
                "permutations(\"abc\")",
                permutations("abc"),
                strings(&["abc", "acb", "bac", "bca", "cba", "cab"]),
            );
            c.check(
                "subset_sum_count([10, 5, 2, 3, 6], 8)",
                subset_sum_count(&[10, 5, 2, 3, 6], 8),
                2,
            );
            c.check("max_rope_pieces(23, 12, 9, 11)", max_rope_pieces(23, 12, 9, 11), Some(2));
            c.check("max_rope_pieces(5, 4, 2, 6)", max_rope_pieces(5, 4, 2, 6), None);
        }
        Demo::Digits => {
            c.check("count_digits(-12345)", count_digits(-12_345), 5);
            c.check("reverse_digits(1234)", reverse_digits(1234), Ok(4321));
            c.check("reverse_digits(-120)", reverse_digits(-120), Ok(-21));
            c.check("is_palindrome_number(4554)", is_palindrome_number(4554), true);
            c.check("sum_of_digits(253)", sum_of_digits(253), 10);
            c.check("is_armstrong(153)", is_armstrong(153), true);
        }
        Demo::Arithmetic => {
            c.check("gcd_euclid(48, 18)", gcd_euclid(48, 18), 6);
            c.check("gcd_binary(48, 18)", gcd_binary(48, 18), 6);
            c.check("lcm(4, 6)", lcm(4, 6), Ok(12));
            c.check("factorial_trailing_zeros(100)", factorial_trailing_zeros(100), 24);
            c.check("pow_mod(2, 10, 1000)", pow_mod(2, 10, 1000), Ok(24));
            c.check("pow_mod(2, 10, 0)", pow_mod(2, 10, 0), Err(AlgoError::DivisionByZero));
        }
        Demo::Primes => {
            c.check("is_prime(1_000_000_007)", is_prime(1_000_000_007), true);
            c.check("prime_factors(315)", prime_factors(315), vec![3, 3, 5, 7]);
            c.check("divisors(36)", divisors(36), vec![1, 2, 3, 4, 6, 9, 12, 18, 36]);
            c.check("sieve(30)", sieve(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        }
    }
}
