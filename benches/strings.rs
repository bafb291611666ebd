use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use textbook_algorithms::string::{
    PalindromeQueries, kmp_search, longest_palindrome_expand, longest_palindrome_manacher,
    naive_search, rabin_karp_search,
};

type SearchFn = fn(&str, &str) -> Vec<usize>;
type LongestPalindromeFn = fn(&str) -> &str;

const INPUT_SIZES: &[(&str, usize)] = &[("4k", 4 * 1024), ("64k", 64 * 1024), ("1m", 1024 * 1024)];

#[inline]
fn next_u64(state: &mut u64) -> u64 {
    let mut x = *state;
    x ^= x >> 12;
    x ^= x << 25;
    x ^= x >> 27;
    *state = x;
    x.wrapping_mul(0x2545_F491_4F6C_DD1D)
}

/// Text drawn from the first `alphabet` lowercase letters.
fn make_text(len: usize, alphabet: u8, seed: u64) -> String {
    let mut state = seed;
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        out.push((b'a' + (next_u64(&mut state) % alphabet as u64) as u8) as char);
    }
    out
}

fn bench_pattern_search(c: &mut Criterion) {
    let variants: [(&str, SearchFn); 3] = [
        ("naive_search", naive_search),
        ("rabin_karp_search", rabin_karp_search),
        ("kmp_search", kmp_search),
    ];
    // A binary alphabet keeps partial matches long, which is where KMP pays off.
    let inputs = [("binary", 2u8, "abaababaabaab"), ("lowercase", 26u8, "needle")];

    for (name, func) in variants {
        let mut group = c.benchmark_group(name);
        for &(label, len) in INPUT_SIZES {
            for (text_label, alphabet, pattern) in inputs {
                let text = make_text(len, alphabet, 0x7E57_0000_0001u64 ^ len as u64);
                group.throughput(Throughput::Bytes(len as u64));
                group.bench_function(BenchmarkId::new(text_label, label), |b| {
                    b.iter(|| black_box(func(black_box(&text), black_box(pattern))));
                });
            }
        }
        group.finish();
    }
}

fn bench_longest_palindrome(c: &mut Criterion) {
    let variants: [(&str, LongestPalindromeFn); 2] = [
        ("longest_palindrome_expand", longest_palindrome_expand),
        ("longest_palindrome_manacher", longest_palindrome_manacher),
    ];
    for (name, func) in variants {
        let mut group = c.benchmark_group(name);
        for &(label, len) in INPUT_SIZES {
            let text = make_text(len, 2, 0x9A11_D000_0001u64 ^ len as u64);
            // A single repeated char is the centre-expansion worst case.
            let uniform = "a".repeat(len.min(4 * 1024));

            group.throughput(Throughput::Bytes(len as u64));
            group.bench_function(BenchmarkId::new("binary", label), |b| {
                b.iter(|| black_box(func(black_box(&text)).len()));
            });
            group.throughput(Throughput::Bytes(uniform.len() as u64));
            group.bench_function(BenchmarkId::new("uniform_capped_4k", label), |b| {
                b.iter(|| black_box(func(black_box(&uniform)).len()));
            });
        }
        group.finish();
    }
}

fn bench_palindrome_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("palindrome_queries");
    for &(label, len) in INPUT_SIZES {
        let text = make_text(len, 2, 0x0B5E_55ED_0001u64 ^ len as u64);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_function(BenchmarkId::new("build", label), |b| {
            b.iter(|| black_box(PalindromeQueries::new(black_box(&text)).len()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pattern_search, bench_longest_palindrome, bench_palindrome_queries);
criterion_main!(benches);
