use std::hint::black_box;
use std::time::{Duration, Instant};

use clap::ValueEnum;
use textbook_algorithms::array::{
    max_subarray_sum, max_subarray_sum_naive, rotate_left_juggling, rotate_left_naive,
    rotate_left_reversal, trapped_water_naive, trapped_water_prefix, trapped_water_two_pointer,
};
use textbook_algorithms::logic_building::{gcd_binary, gcd_euclid};
use textbook_algorithms::searching::{binary_search_iterative, binary_search_recursive, lower_bound};
use textbook_algorithms::sorting::{
    bubble_sort, insertion_sort, merge_sort, quick_sort, quick_sort_hoare, radix_sort,
    surpasser_counts, surpasser_counts_naive,
};
use textbook_algorithms::string::{
    kmp_search, longest_palindrome_expand, longest_palindrome_manacher, naive_search,
    rabin_karp_search,
};

use crate::value_name;

pub const DEFAULT_SEED: u64 = 0x1234_5678_9ABC_DEF0;

/// Pattern searched for in the generated two-letter text.
const SEARCH_PATTERN: &str = "abaabaab";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum Bench {
    RotateNaive,
    RotateJuggling,
    RotateReversal,
    RainWaterNaive,
    RainWaterPrefix,
    RainWaterTwoPointer,
    MaxSubarrayNaive,
    MaxSubarrayKadane,
    SearchNaive,
    SearchRabinKarp,
    SearchKmp,
    PalindromeExpand,
    PalindromeManacher,
    BinarySearchIterative,
    BinarySearchRecursive,
    LowerBound,
    BubbleSort,
    InsertionSort,
    MergeSort,
    QuickSort,
    QuickSortHoare,
    RadixSort,
    SurpassersNaive,
    SurpassersMerge,
    GcdEuclid,
    GcdBinary,
}

pub struct BenchConfig {
    pub bench: Bench,
    pub len: usize,
    pub iters: usize,
    pub seed: u64,
    pub report: bool,
}

type SortFn = fn(&mut [i32]);
type SearchFn = fn(&str, &str) -> Vec<usize>;
type RainWaterFn = fn(&[u32]) -> u64;

impl Bench {
    pub fn default_len(self) -> usize {
        match self {
            // Quadratic variants get inputs they can finish in about a second.
            Bench::RainWaterNaive
            | Bench::MaxSubarrayNaive
            | Bench::BubbleSort
            | Bench::InsertionSort
            | Bench::SurpassersNaive => 5_000,
            Bench::PalindromeExpand | Bench::PalindromeManacher => 100_000,
            Bench::GcdEuclid | Bench::GcdBinary => 100_000,
            _ => 1_000_000,
        }
    }

    pub fn default_iters(self) -> usize {
        match self {
            Bench::BinarySearchIterative | Bench::BinarySearchRecursive | Bench::LowerBound => 5,
            Bench::RotateNaive
            | Bench::RotateJuggling
            | Bench::RotateReversal
            | Bench::RainWaterPrefix
            | Bench::RainWaterTwoPointer
            | Bench::MaxSubarrayKadane => 20,
            Bench::GcdEuclid | Bench::GcdBinary => 100,
            _ => 3,
        }
    }

    fn unit(self) -> &'static str {
        match self {
            Bench::SearchNaive
            | Bench::SearchRabinKarp
            | Bench::SearchKmp
            | Bench::PalindromeExpand
            | Bench::PalindromeManacher => "byte",
            Bench::BinarySearchIterative | Bench::BinarySearchRecursive | Bench::LowerBound => {
                "query"
            }
            Bench::GcdEuclid | Bench::GcdBinary => "pair",
            _ => "elem",
        }
    }
}

#[inline]
fn next_u64(state: &mut u64) -> u64 {
    let mut x = *state;
    x ^= x >> 12;
    x ^= x << 25;
    x ^= x >> 27;
    *state = x;
    x.wrapping_mul(0x2545_F491_4F6C_DD1D)
}

fn make_i32_input(len: usize, seed: u64) -> Vec<i32> {
    let mut state = seed;
    (0..len).map(|_| next_u64(&mut state) as u32 as i32).collect()
}

/// Small signed values, so subarray sums exercise both signs.
fn make_small_i32_input(len: usize, seed: u64) -> Vec<i32> {
    let mut state = seed;
    (0..len).map(|_| (next_u64(&mut state) % 201) as i32 - 100).collect()
}

fn make_u32_input(len: usize, seed: u64, mask: u32) -> Vec<u32> {
    let mut state = seed;
    (0..len).map(|_| next_u64(&mut state) as u32 & mask).collect()
}

/// Text over `{a, b}` so both matches and palindromes are frequent.
fn make_text(len: usize, seed: u64) -> String {
    let mut state = seed;
    (0..len)
        .map(|_| if next_u64(&mut state) & 1 == 0 { 'a' } else { 'b' })
        .collect()
}

fn make_sorted_values(len: usize) -> Vec<i32> {
    (0..len).map(|i| (i as i32).wrapping_mul(2)).collect()
}

fn make_search_queries(values: &[i32], seed: u64) -> Vec<i32> {
    let mut state = seed;
    (0..values.len())
        .map(|_| {
            let idx = (next_u64(&mut state) as usize) % values.len();
            // Odd queries miss.
            values[idx] + (next_u64(&mut state) & 1) as i32
        })
        .collect()
}

fn make_pairs(len: usize, seed: u64) -> Vec<(i64, i64)> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            let a = ((next_u64(&mut state) & 0x7FFF_FFFF) as i64) + 1;
            let b = ((next_u64(&mut state) & 0x7FFF_FFFF) as i64) + 1;
            (a, b)
        })
        .collect()
}

pub fn run(config: BenchConfig) {
    let start = Instant::now();
    match config.bench {
        Bench::RotateNaive => bench_rotate(&config, rotate_left_naive::<i32>),
        Bench::RotateJuggling => bench_rotate(&config, rotate_left_juggling::<i32>),
        Bench::RotateReversal => bench_rotate(&config, rotate_left_reversal::<i32>),
        Bench::RainWaterNaive => bench_rain_water(&config, trapped_water_naive),
        Bench::RainWaterPrefix => bench_rain_water(&config, trapped_water_prefix),
        Bench::RainWaterTwoPointer => bench_rain_water(&config, trapped_water_two_pointer),
        Bench::MaxSubarrayNaive => bench_max_subarray(&config, max_subarray_sum_naive),
        Bench::MaxSubarrayKadane => bench_max_subarray(&config, max_subarray_sum),
        Bench::SearchNaive => bench_pattern_search(&config, naive_search),
        Bench::SearchRabinKarp => bench_pattern_search(&config, rabin_karp_search),
        Bench::SearchKmp => bench_pattern_search(&config, kmp_search),
        Bench::PalindromeExpand => bench_palindrome(&config, longest_palindrome_expand),
        Bench::PalindromeManacher => bench_palindrome(&config, longest_palindrome_manacher),
        Bench::BinarySearchIterative => {
            bench_binary_search(&config, binary_search_iterative::<i32>);
        }
        Bench::BinarySearchRecursive => {
            bench_binary_search(&config, binary_search_recursive::<i32>);
        }
        Bench::LowerBound => bench_binary_search(&config, lower_bound_search),
        Bench::BubbleSort => bench_sort(&config, bubble_sort::<i32>),
        Bench::InsertionSort => bench_sort(&config, insertion_sort::<i32>),
        Bench::MergeSort => bench_sort(&config, merge_sort::<i32>),
        Bench::QuickSort => bench_sort(&config, quick_sort::<i32>),
        Bench::QuickSortHoare => bench_sort(&config, quick_sort_hoare::<i32>),
        Bench::RadixSort => bench_radix_sort(&config),
        Bench::SurpassersNaive => bench_surpassers(&config, surpasser_counts_naive::<i32>),
        Bench::SurpassersMerge => bench_surpassers(&config, surpasser_counts::<i32>),
        Bench::GcdEuclid => bench_gcd(&config, gcd_euclid),
        Bench::GcdBinary => bench_gcd(&config, gcd_binary),
    }
    let elapsed = start.elapsed();
    if config.report {
        print_report(&config, elapsed);
    }
}

fn print_report(config: &BenchConfig, elapsed: Duration) {
    let work_items = (config.len as u128) * (config.iters as u128);
    let unit = config.bench.unit();
    let elapsed_s = elapsed.as_secs_f64();
    let items_per_s = work_items as f64 / elapsed_s;
    let ns_per_item = (elapsed_s * 1.0e9) / work_items.max(1) as f64;

    println!(
        "bench={} len={} iters={}",
        value_name(&config.bench),
        config.len,
        config.iters
    );
    println!(
        "elapsed_s={:.6} ns_per_item={:.3} throughput={}",
        elapsed_s,
        ns_per_item,
        format_rate(items_per_s, unit)
    );
    println!("work_items={work_items} unit={unit}");
}

fn format_rate(rate: f64, unit: &str) -> String {
    let (value, prefix) = if rate >= 1.0e12 {
        (rate / 1.0e12, "T")
    } else if rate >= 1.0e9 {
        (rate / 1.0e9, "G")
    } else if rate >= 1.0e6 {
        (rate / 1.0e6, "M")
    } else if rate >= 1.0e3 {
        (rate / 1.0e3, "K")
    } else {
        (rate, "")
    };
    format!("{value:.3} {prefix}{unit}/s")
}

fn bench_rotate(config: &BenchConfig, func: fn(&mut [i32], usize)) {
    let mut values = make_i32_input(config.len, config.seed);
    let d = config.len / 3;
    for _ in 0..config.iters {
        func(black_box(values.as_mut_slice()), black_box(d));
    }
    black_box(values.first().copied());
}

fn bench_rain_water(config: &BenchConfig, func: RainWaterFn) {
    let heights = make_u32_input(config.len, config.seed, 0xFFFF);
    let mut acc = 0u64;
    for _ in 0..config.iters {
        acc ^= func(black_box(&heights));
    }
    black_box(acc);
}

fn bench_max_subarray(config: &BenchConfig, func: fn(&[i32]) -> Option<i64>) {
    let values = make_small_i32_input(config.len, config.seed);
    let mut acc = 0i64;
    for _ in 0..config.iters {
        acc ^= func(black_box(&values)).unwrap_or(0);
    }
    black_box(acc);
}

fn bench_pattern_search(config: &BenchConfig, func: SearchFn) {
    let text = make_text(config.len, config.seed);
    let mut acc = 0usize;
    for _ in 0..config.iters {
        acc ^= func(black_box(&text), black_box(SEARCH_PATTERN)).len();
    }
    black_box(acc);
}

fn bench_palindrome(config: &BenchConfig, func: fn(&str) -> &str) {
    let text = make_text(config.len, config.seed);
    let mut acc = 0usize;
    for _ in 0..config.iters {
        acc ^= func(black_box(&text)).len();
    }
    black_box(acc);
}

fn bench_binary_search(config: &BenchConfig, func: fn(&[i32], &i32) -> Option<usize>) {
    if config.len == 0 {
        return;
    }

    let values = make_sorted_values(config.len);
    let queries = make_search_queries(&values, config.seed);
    let mut acc = 0usize;
    for _ in 0..config.iters {
        let haystack = black_box(values.as_slice());
        for q in &queries {
            if let Some(idx) = func(haystack, black_box(q)) {
                acc ^= idx;
            }
        }
    }
    black_box(acc);
}

fn lower_bound_search(values: &[i32], needle: &i32) -> Option<usize> {
    let idx = lower_bound(values, needle);
    (idx < values.len() && values[idx] == *needle).then_some(idx)
}

fn bench_sort(config: &BenchConfig, func: SortFn) {
    let base = make_i32_input(config.len, config.seed);
    let mut values = base.clone();
    for _ in 0..config.iters {
        values.copy_from_slice(&base);
        func(black_box(values.as_mut_slice()));
    }
    black_box(values.first().copied());
}

fn bench_radix_sort(config: &BenchConfig) {
    let base = make_u32_input(config.len, config.seed, u32::MAX);
    let mut values = base.clone();
    for _ in 0..config.iters {
        values.copy_from_slice(&base);
        radix_sort(black_box(values.as_mut_slice()));
    }
    black_box(values.first().copied());
}

fn bench_surpassers(config: &BenchConfig, func: fn(&[i32]) -> Vec<usize>) {
    let values = make_i32_input(config.len, config.seed);
    let mut acc = 0usize;
    for _ in 0..config.iters {
        acc ^= func(black_box(&values)).first().copied().unwrap_or(0);
    }
    black_box(acc);
}

fn bench_gcd(config: &BenchConfig, func: fn(i64, i64) -> u64) {
    let pairs = make_pairs(config.len, config.seed);
    let mut acc = 0u64;
    for _ in 0..config.iters {
        for &(a, b) in &pairs {
            acc ^= func(black_box(a), black_box(b));
        }
    }
    black_box(acc);
}

fn ensure(ok: bool, what: impl FnOnce() -> String) -> Result<(), String> {
    if ok { Ok(()) } else { Err(what()) }
}

/// Checks the variant behind `bench` against a simple reference on small
/// generated inputs.
pub fn verify(bench: Bench) -> Result<(), String> {
    const LEN: usize = 257;
    let seed = DEFAULT_SEED;

    match bench {
        Bench::RotateNaive | Bench::RotateJuggling | Bench::RotateReversal => {
            let func: fn(&mut [i32], usize) = match bench {
                Bench::RotateNaive => rotate_left_naive::<i32>,
                Bench::RotateJuggling => rotate_left_juggling::<i32>,
                _ => rotate_left_reversal::<i32>,
            };
            let base = make_i32_input(LEN, seed);
            for d in [0, 1, 2, 64, 128, LEN - 1, LEN, LEN + 5] {
                let mut actual = base.clone();
                func(&mut actual, d);
                let mut expected = base.clone();
                expected.rotate_left(d % LEN);
                ensure(actual == expected, || format!("rotation by {d} differs from std"))?;
            }
        }
        Bench::RainWaterNaive | Bench::RainWaterPrefix | Bench::RainWaterTwoPointer => {
            let func: RainWaterFn = match bench {
                Bench::RainWaterNaive => trapped_water_naive,
                Bench::RainWaterPrefix => trapped_water_prefix,
                _ => trapped_water_two_pointer,
            };
            ensure(func(&[3, 0, 1, 2, 5]) == 6, || "[3, 0, 1, 2, 5] should trap 6".into())?;
            let heights = make_u32_input(LEN, seed, 0xFF);
            let expected = trapped_water_naive(&heights);
            ensure(func(&heights) == expected, || format!("expected {expected} units"))?;
        }
        Bench::MaxSubarrayNaive | Bench::MaxSubarrayKadane => {
            let values = make_small_i32_input(LEN, seed);
            let mut expected = i64::MIN;
            for i in 0..values.len() {
                let mut sum = 0i64;
                for &v in &values[i..] {
                    sum += v as i64;
                    expected = expected.max(sum);
                }
            }
            let func: fn(&[i32]) -> Option<i64> = match bench {
                Bench::MaxSubarrayNaive => max_subarray_sum_naive,
                _ => max_subarray_sum,
            };
            ensure(func(&values) == Some(expected), || format!("expected {expected}"))?;
            ensure(func(&[]).is_none(), || "empty input should have no subarray".into())?;
        }
        Bench::SearchNaive | Bench::SearchRabinKarp | Bench::SearchKmp => {
            let func: SearchFn = match bench {
                Bench::SearchNaive => naive_search,
                Bench::SearchRabinKarp => rabin_karp_search,
                _ => kmp_search,
            };
            let text = make_text(LEN * 4, seed);
            let expected: Vec<usize> = text
                .as_bytes()
                .windows(SEARCH_PATTERN.len())
                .enumerate()
                .filter(|(_, w)| *w == SEARCH_PATTERN.as_bytes())
                .map(|(i, _)| i)
                .collect();
            let actual = func(&text, SEARCH_PATTERN);
            ensure(actual == expected, || {
                format!("found {} matches, expected {}", actual.len(), expected.len())
            })?;
        }
        Bench::PalindromeExpand | Bench::PalindromeManacher => {
            let func: fn(&str) -> &str = match bench {
                Bench::PalindromeExpand => longest_palindrome_expand,
                _ => longest_palindrome_manacher,
            };
            ensure(func("forgeeksskeegfor") == "geeksskeeg", || {
                "forgeeksskeegfor should give geeksskeeg".into()
            })?;
            let text = make_text(LEN, seed);
            let mut expected = "";
            for i in 0..text.len() {
                for j in (i + expected.len() + 1)..=text.len() {
                    let candidate = &text[i..j];
                    if candidate.bytes().eq(candidate.bytes().rev()) {
                        expected = candidate;
                    }
                }
            }
            let actual = func(&text);
            ensure(actual == expected, || format!("got {actual:?}, expected {expected:?}"))?;
        }
        Bench::BinarySearchIterative | Bench::BinarySearchRecursive | Bench::LowerBound => {
            let values = make_sorted_values(LEN);
            for q in -1..(2 * LEN as i32 + 1) {
                let expected = values.binary_search(&q).ok();
                let actual = match bench {
                    Bench::BinarySearchIterative => binary_search_iterative(&values, &q),
                    Bench::BinarySearchRecursive => binary_search_recursive(&values, &q),
                    _ => lower_bound_search(&values, &q),
                };
                ensure(actual == expected, || {
                    format!("query {q}: got {actual:?}, expected {expected:?}")
                })?;
            }
        }
        Bench::BubbleSort
        | Bench::InsertionSort
        | Bench::MergeSort
        | Bench::QuickSort
        | Bench::QuickSortHoare => {
            let func: SortFn = match bench {
                Bench::BubbleSort => bubble_sort::<i32>,
                Bench::InsertionSort => insertion_sort::<i32>,
                Bench::MergeSort => merge_sort::<i32>,
                Bench::QuickSort => quick_sort::<i32>,
                _ => quick_sort_hoare::<i32>,
            };
            for input in [make_i32_input(LEN, seed), make_small_i32_input(LEN, seed), Vec::new()] {
                let mut actual = input.clone();
                func(&mut actual);
                let mut expected = input;
                expected.sort();
                ensure(actual == expected, || "output is not the sorted input".into())?;
            }
        }
        Bench::RadixSort => {
            let mut actual = make_u32_input(LEN, seed, u32::MAX);
            let mut expected = actual.clone();
            expected.sort();
            radix_sort(&mut actual);
            ensure(actual == expected, || "output is not the sorted input".into())?;
        }
        Bench::SurpassersNaive | Bench::SurpassersMerge => {
            let expected = vec![4, 1, 1, 1, 2, 0, 0];
            let sample = [2, 7, 5, 3, 0, 8, 1];
            let actual = match bench {
                Bench::SurpassersNaive => surpasser_counts_naive(&sample),
                _ => surpasser_counts(&sample),
            };
            ensure(actual == expected, || format!("got {actual:?}, expected {expected:?}"))?;
            let values = make_small_i32_input(LEN, seed);
            ensure(surpasser_counts(&values) == surpasser_counts_naive(&values), || {
                "merge-based counts differ from the quadratic scan".into()
            })?;
        }
        Bench::GcdEuclid | Bench::GcdBinary => {
            let func: fn(i64, i64) -> u64 = match bench {
                Bench::GcdEuclid => gcd_euclid,
                _ => gcd_binary,
            };
            for (a, b, expected) in [(48, 18, 6), (0, 5, 5), (5, 0, 5), (17, 13, 1), (-12, 18, 6)] {
                let actual = func(a, b);
                ensure(actual == expected, || {
                    format!("gcd({a}, {b}) = {actual}, expected {expected}")
                })?;
            }
            for (a, b) in make_pairs(LEN, seed) {
                let g = func(a, b);
                ensure(g > 0 && a.unsigned_abs() % g == 0 && b.unsigned_abs() % g == 0, || {
                    format!("{g} does not divide {a} and {b}")
                })?;
                ensure(g == gcd_euclid(b, a % b), || format!("gcd({a}, {b}) is not {g}"))?;
            }
        }
    }
    Ok(())
}
