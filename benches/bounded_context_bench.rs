use bounded_context::{BoundedContext, Context, DEFAULT_CAPACITY};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

const KEYS: [&str; DEFAULT_CAPACITY] = [
    "k00", "k01", "k02", "k03", "k04", "k05", "k06", "k07", "k08", "k09", "k10", "k11", "k12",
    "k13", "k14", "k15",
];

fn full_context() -> Context<'static> {
    let mut ctx = Context::new();
    for k in KEYS {
        ctx.set(k, "v").unwrap();
    }
    ctx
}

fn bench_derive_chain(c: &mut Criterion) {
    c.bench_function("bounded_context_derive_chain_16", |b| {
        b.iter(|| {
            let mut ctx = Context::new();
            for k in KEYS {
                ctx = ctx.with_value(k, "v").unwrap();
            }
            black_box(ctx)
        })
    });
}

fn bench_set_fill(c: &mut Criterion) {
    c.bench_function("bounded_context_set_fill_16", |b| {
        b.iter_batched(
            Context::new,
            |mut ctx| {
                for k in KEYS {
                    ctx.set(k, "v").unwrap();
                }
                black_box(ctx)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit(c: &mut Criterion) {
    c.bench_function("bounded_context_get_hit_oldest", |b| {
        let ctx = full_context();
        // Oldest key is the worst case for a newest-first scan.
        b.iter(|| black_box(ctx.get(black_box("k00"))))
    });
}

fn bench_get_miss(c: &mut Criterion) {
    c.bench_function("bounded_context_get_miss", |b| {
        let ctx = full_context();
        b.iter(|| black_box(ctx.get(black_box("absent"))))
    });
}

fn bench_derive_owned(c: &mut Criterion) {
    c.bench_function("bounded_context_derive_owned_strings", |b| {
        let mut parent: BoundedContext<String, String> = BoundedContext::new();
        for k in &KEYS[..DEFAULT_CAPACITY - 1] {
            parent.set(k.to_string(), "v".to_string()).unwrap();
        }
        b.iter(|| black_box(parent.with_value("last".to_string(), "v".to_string()).unwrap()))
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_derive_chain, bench_set_fill, bench_get_hit, bench_get_miss, bench_derive_owned
}
criterion_main!(benches);
