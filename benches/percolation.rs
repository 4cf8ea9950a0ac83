use criterion::{black_box, criterion_group, criterion_main, Bencher, BenchmarkId, Criterion};
use percolation::{
    stats::run_trial,
    union_find::{UnionFind, WeightedQuickUnion},
    Percolation,
};
use rand::{seq::SliceRandom, Rng, SeedableRng};
use std::sync::{LazyLock, Mutex};

fn open_until_percolates<U: UnionFind>(b: &mut Bencher, seed: u64, n: usize) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut sites: Vec<_> = (1..=n)
        .flat_map(|row| (1..=n).map(move |col| (row, col)))
        .collect();
    sites.shuffle(&mut rng);
    b.iter(|| {
        let mut p = black_box(Percolation::<U>::new(n).unwrap());
        for &(row, col) in &sites {
            p.open(row, col).unwrap();
            if p.percolates() {
                break;
            }
        }
        black_box(p.number_of_open_sites())
    });
}

fn per_grid(c: &mut Criterion) {
    let _ = &*LOGGER;
    let mut g = c.benchmark_group("Open until percolation");
    let mut rng = rand::rngs::StdRng::seed_from_u64(4815162342);
    for n in [16usize, 64, 256] {
        g.throughput(criterion::Throughput::Elements((n * n) as u64));
        let seed = rng.gen();
        log::debug!("Using seed {seed}");
        g.bench_with_input(BenchmarkId::new("weighted", n), &n, |b, &n| {
            open_until_percolates::<WeightedQuickUnion>(b, seed, n)
        });
    }
    g.finish();
}

fn union_find_ops(c: &mut Criterion) {
    let _ = &*LOGGER;
    const N: usize = 1000000;
    let mut g = c.benchmark_group("Per operation N = 10^6");
    g.throughput(criterion::Throughput::Elements(1));
    let mut rng = rand::rngs::StdRng::seed_from_u64(4815162342);
    let mut uf = WeightedQuickUnion::new(N);
    g.bench_function("union", |b| {
        b.iter(|| {
            let (u, v) = (rng.gen_range(0..N), rng.gen_range(0..N));
            black_box(uf.union(u, v).unwrap())
        })
    });
    g.bench_function("connected", |b| {
        b.iter(|| {
            let (u, v) = (rng.gen_range(0..N), rng.gen_range(0..N));
            black_box(uf.connected(u, v).unwrap())
        })
    });
    g.finish();
}

fn trial(c: &mut Criterion) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(2012);
    c.bench_function("trial n = 100", |b| {
        b.iter(|| black_box(run_trial(100, &mut rng).unwrap()))
    });
}

criterion_group!(benches, per_grid, union_find_ops, trial);
criterion_main!(benches);

pub static LOGGER: LazyLock<Mutex<flexi_logger::LoggerHandle>> = LazyLock::new(|| {
    Mutex::new(
        percolation::logging::logger()
            .unwrap()
            .write_mode(flexi_logger::WriteMode::SupportCapture)
            .log_to_stdout()
            .start()
            .unwrap(),
    )
});
