use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use apotik_admin::entity::{Product, ProductField};
use apotik_admin::listview::{compute_visible_rows, FilterSet, Matcher, Pagination, SortKey};

fn build_products(size: usize) -> Vec<Product> {
    let categories = ["obat", "antibiotik", "vitamin", "alat kesehatan"];
    (0..size)
        .map(|i| {
            Product::sample(
                i as i64,
                &format!("Produk {}", i),
                categories[i % categories.len()],
                (1000 * (i % 50 + 1)) as f64,
                (i % 40) as i64,
            )
        })
        .collect()
}

fn bench_filter_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_only");

    for size in [100, 1000, 10000].iter() {
        let rows = build_products(*size);
        let mut filters = FilterSet::new(Product::search_fields());
        filters.set_search("produk 1");
        filters.set_filter(ProductField::Category, Matcher::Equals("obat".to_string()));

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                compute_visible_rows(
                    black_box(&rows),
                    black_box(&filters),
                    &[],
                    Pagination::new(10),
                )
            });
        });
    }
    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_sort_paginate");

    for size in [100, 1000, 10000].iter() {
        let rows = build_products(*size);
        let mut filters = FilterSet::new(Product::search_fields());
        filters.set_search("produk");
        let sort = [SortKey::descending(ProductField::Price)];
        let pagination = Pagination {
            page_index: 2,
            page_size: 10,
        };

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                compute_visible_rows(
                    black_box(&rows),
                    black_box(&filters),
                    black_box(&sort),
                    pagination,
                )
            });
        });
    }
    group.finish();
}

fn bench_sort_unfiltered(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_unfiltered");

    for size in [100, 1000, 10000].iter() {
        let rows = build_products(*size);
        let filters = FilterSet::new(Product::search_fields());
        let sort = [
            SortKey::ascending(ProductField::Category),
            SortKey::ascending(ProductField::Name),
        ];

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                compute_visible_rows(
                    black_box(&rows),
                    black_box(&filters),
                    black_box(&sort),
                    Pagination::new(10),
                )
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_filter_only,
    bench_full_pipeline,
    bench_sort_unfiltered
);
criterion_main!(benches);
