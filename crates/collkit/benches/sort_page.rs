use collkit::{algebra, sort_page, sort_page_bounded, Natural};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::{
    distributions::Standard,
    prelude::{Distribution, SliceRandom},
    Rng, SeedableRng,
};
use rand_xoshiro::Xoshiro256StarStar;

/// The seed for our prng-generated benchmarks
const SEED: [u8; 32] = [
    0x3a, 0x91, 0x0e, 0x57, 0xd4, 0x62, 0xb8, 0x1f, 0xc7, 0x05, 0x7e, 0xa3, 0x4c, 0xe9, 0x22, 0x68,
    0x9d, 0x10, 0xf6, 0x3b, 0x85, 0x4a, 0xd1, 0x7c, 0x2e, 0xb5, 0x93, 0x06, 0x6f, 0xc8, 0x51, 0xea,
];

/// Number of input sequences each benchmark input is split into.
const SEQUENCES: usize = 8;

fn data<T>(length: usize) -> Vec<Vec<T>>
where
    Standard: Distribution<T>,
{
    let mut rng = Xoshiro256StarStar::from_seed(SEED);

    let mut data: Vec<T> = (0..length).map(|_| rng.gen()).collect();
    data.shuffle(&mut rng);

    let chunk = length.div_ceil(SEQUENCES).max(1);
    let mut sequences = Vec::with_capacity(SEQUENCES);
    while !data.is_empty() {
        let rest = data.split_off(data.len().saturating_sub(chunk));
        sequences.push(rest);
    }
    sequences
}

/// Small domain so that multisets have many repeated elements.
fn multiset_data(length: usize) -> Vec<u8> {
    let mut rng = Xoshiro256StarStar::from_seed(SEED);
    (0..length).map(|_| rng.gen_range(0..64)).collect()
}

macro_rules! sort_page_benches {
    ($($name:literal = $size:literal),* $(,)?) => {
        fn sort_page_benches(c: &mut Criterion) {
            for (page_number, page_size) in [(1, 10), (10, 100)] {
                let mut group =
                    c.benchmark_group(format!("full-sort-page-{page_number}x{page_size}"));
                $(
                    group.bench_function($name, |b| {
                        let inputs = data::<u64>($size);

                        b.iter_batched(
                            || inputs.clone(),
                            |inputs| sort_page(page_number, page_size, Natural, black_box(inputs)),
                            BatchSize::PerIteration,
                        );
                    });
                )*
                group.finish();

                let mut group =
                    c.benchmark_group(format!("bounded-page-{page_number}x{page_size}"));
                $(
                    group.bench_function($name, |b| {
                        let inputs = data::<u64>($size);

                        b.iter_batched(
                            || inputs.clone(),
                            |inputs| {
                                sort_page_bounded(page_number, page_size, Natural, black_box(inputs))
                            },
                            BatchSize::PerIteration,
                        );
                    });
                )*
                group.finish();
            }

            let mut group = c.benchmark_group("union");
            $(
                group.bench_function($name, |b| {
                    let left = multiset_data($size);
                    let right = multiset_data($size / 2);

                    b.iter(|| algebra::union(black_box(&left), black_box(&right)));
                });
            )*
            group.finish();

            let mut group = c.benchmark_group("intersection");
            $(
                group.bench_function($name, |b| {
                    let left = multiset_data($size);
                    let right = multiset_data($size / 2);

                    b.iter(|| algebra::intersection(black_box(&left), black_box(&right)));
                });
            )*
            group.finish();
        }
    };
}

sort_page_benches! {
    "100" = 100,
    "1000" = 1000,
    "10000" = 10000,
    "100000" = 100000,
}

criterion_group!(benches, sort_page_benches);
criterion_main!(benches);
