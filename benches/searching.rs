use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use textbook_algorithms::searching::{
    binary_search_iterative, binary_search_recursive, lower_bound, search_unbounded,
};

type SearchFn = fn(&[i32], &i32) -> Option<usize>;

const INPUT_SIZES: &[(&str, usize)] = &[
    ("l1_4k", 4 * 1024),
    ("l2_64k", 64 * 1024),
    ("l3_1m", 1024 * 1024),
];

#[inline]
fn next_u64(state: &mut u64) -> u64 {
    let mut x = *state;
    x ^= x >> 12;
    x ^= x << 25;
    x ^= x >> 27;
    *state = x;
    x.wrapping_mul(0x2545_F491_4F6C_DD1D)
}

fn make_sorted_values(len: usize) -> Vec<i32> {
    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        out.push((i as i32) * 2);
    }
    out
}

fn make_queries(values: &[i32], seed: u64, offset: i32) -> Vec<i32> {
    let mut state = seed;
    let mut out = Vec::with_capacity(values.len());
    for _ in 0..values.len() {
        let idx = (next_u64(&mut state) as usize) % values.len();
        out.push(values[idx].wrapping_add(offset));
    }
    out
}

fn lower_bound_search(values: &[i32], needle: &i32) -> Option<usize> {
    let idx = lower_bound(values, needle);
    (idx < values.len() && values[idx] == *needle).then_some(idx)
}

fn std_search(values: &[i32], needle: &i32) -> Option<usize> {
    values.binary_search(needle).ok()
}

fn bench_variant(c: &mut Criterion, name: &str, func: SearchFn) {
    let mut group = c.benchmark_group(name);
    for &(label, len) in INPUT_SIZES {
        let values = make_sorted_values(len);
        let queries_hit = make_queries(&values, 0xC0FF_EE42_1234_5678u64 ^ len as u64, 0);
        let queries_miss = make_queries(&values, 0xBADC_0FFE_EE11_D00Du64 ^ len as u64, 1);

        group.throughput(Throughput::Elements(queries_hit.len() as u64));
        for (kind, queries) in [("hit", &queries_hit), ("miss", &queries_miss)] {
            group.bench_function(BenchmarkId::new(kind, label), |bench| {
                bench.iter(|| {
                    let haystack = black_box(values.as_slice());
                    let mut acc = 0usize;
                    for q in queries {
                        if let Some(idx) = func(haystack, black_box(q)) {
                            acc ^= idx;
                        }
                    }
                    black_box(acc);
                });
            });
        }
    }
    group.finish();
}

fn bench_binary_search(c: &mut Criterion) {
    bench_variant(c, "binary_search_std", std_search);
    bench_variant(c, "binary_search_iterative", binary_search_iterative::<i32>);
    bench_variant(c, "binary_search_recursive", binary_search_recursive::<i32>);
    bench_variant(c, "lower_bound", lower_bound_search);
    bench_variant(c, "search_unbounded", search_unbounded::<i32>);
}

criterion_group!(benches, bench_binary_search);
criterion_main!(benches);
