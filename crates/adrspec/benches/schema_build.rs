use adrspec::catalog;
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_schema_build(c: &mut Criterion) {
    c.bench_function("address_schema", |b| {
        b.iter(|| catalog::address_schema())
    });

    let schema = catalog::address_schema();
    c.bench_function("check_references", |b| {
        b.iter(|| schema.check_references().unwrap())
    });
}

criterion_group!(benches, bench_schema_build);
criterion_main!(benches);
