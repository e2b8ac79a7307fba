use criterion::{Criterion, black_box, criterion_group, criterion_main};
use xko_address::address::{self, AddressBody, checksum};

const RAW: &str = "70586beeb7b7aa2e7966df9c8493c6cbfd75c625";
const STANDARD: &str = "0x70586BeEB7b7Aa2e7966DF9c8493C6CbFd75C625";
const ALTERNATE: &str = "XKO70586BeEB7b7Aa2e7966DF9c8493C6CbFd75C625";

fn bench_pipeline_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_stages");
    let body: AddressBody = RAW.parse().unwrap();

    group.bench_function("normalize", |b| {
        b.iter(|| address::normalize(black_box(STANDARD), true).unwrap())
    });

    group.bench_function("keccak256", |b| {
        b.iter(|| checksum::keccak256(black_box(RAW.as_bytes())))
    });

    group.bench_function("encode", |b| b.iter(|| address::encode(black_box(&body))));

    group.finish();
}

fn bench_entry_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("entry_points");

    group.bench_function("to_standard_form_bare", |b| {
        b.iter(|| address::to_standard_form(black_box(RAW)).unwrap())
    });

    group.bench_function("to_standard_form_alternate", |b| {
        b.iter(|| address::to_standard_form(black_box(ALTERNATE)).unwrap())
    });

    group.bench_function("to_alternate_form", |b| {
        b.iter(|| address::to_alternate_form(black_box(STANDARD)).unwrap())
    });

    group.bench_function("is_alternate_form", |b| {
        b.iter(|| address::is_alternate_form(black_box(ALTERNATE)))
    });

    group.finish();
}

criterion_group!(benches, bench_pipeline_stages, bench_entry_points);
criterion_main!(benches);
