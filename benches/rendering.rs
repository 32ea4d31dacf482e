use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;
use serde_html_table::to_string;

#[derive(Serialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Clone)]
struct Order {
    id: u32,
    customer: User,
    shipping: Option<Metadata>,
}

#[derive(Serialize, Clone)]
struct Metadata {
    created: String,
    updated: String,
    version: u32,
}

fn benchmark_render_simple(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    c.bench_function("render_simple_struct", |b| {
        b.iter(|| to_string(black_box(&user)))
    });
}

fn benchmark_render_slice(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_slice");

    for size in [10, 50, 100, 500].iter() {
        let products: Vec<Product> = (0..*size)
            .map(|i| Product {
                sku: format!("SKU{}", i),
                name: format!("Product {}", i),
                price: 9.99 + f64::from(i),
                quantity: i,
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_string(black_box(&products)))
        });
    }
    group.finish();
}

fn benchmark_render_nested(c: &mut Criterion) {
    let order = Order {
        id: 1,
        customer: User {
            id: 123,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            active: true,
        },
        shipping: Some(Metadata {
            created: "2024-01-01".to_string(),
            updated: "2024-01-02".to_string(),
            version: 2,
        }),
    };

    c.bench_function("render_nested_struct", |b| {
        b.iter(|| to_string(black_box(&order)))
    });
}

fn benchmark_escaping(c: &mut Criterion) {
    let mut group = c.benchmark_group("escaping");

    let clean = Metadata {
        created: "a".repeat(256),
        updated: "b".repeat(256),
        version: 1,
    };
    let dirty = Metadata {
        created: "<&>".repeat(86),
        updated: "\"'".repeat(128),
        version: 1,
    };

    group.bench_function("clean_text", |b| b.iter(|| to_string(black_box(&clean))));
    group.bench_function("markup_heavy_text", |b| {
        b.iter(|| to_string(black_box(&dirty)))
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_render_simple,
    benchmark_render_slice,
    benchmark_render_nested,
    benchmark_escaping
);
criterion_main!(benches);
