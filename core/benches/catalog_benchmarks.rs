use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::Arc;
use tea_catalog::{Catalog, MemoryStore, ProductDraft, ProductFilter};
use tokio::runtime::Runtime; // To run async code within Criterion

const CATEGORIES: &[&str] = &["green", "black", "oolong", "white", "herbal"];

fn seeded_catalog(rt: &Runtime, size: usize) -> Catalog {
  let catalog = Catalog::new(Arc::new(MemoryStore::new()));
  rt.block_on(async {
    for i in 0..size {
      let mut draft = ProductDraft::new(
        format!("Tea {}", i),
        format!("tea-{}", i),
        100.0 + i as f64,
        CATEGORIES[i % CATEGORIES.len()],
      );
      draft.in_stock = i % 3 != 0;
      catalog.products.create(draft).await.expect("seed insert");
    }
  });
  catalog
}

fn bench_list_products(c: &mut Criterion) {
  let rt = Runtime::new().expect("tokio runtime");
  let mut group = c.benchmark_group("list_products");

  for size in [100usize, 1_000, 10_000] {
    let catalog = seeded_catalog(&rt, size);
    group.throughput(Throughput::Elements(size as u64));

    let filter = ProductFilter {
      category: Some("green".into()),
      in_stock: Some(true),
      skip: 0,
      limit: Some(50),
    };
    group.bench_with_input(BenchmarkId::new("category_and_stock", size), &filter, |b, f| {
      b.to_async(&rt).iter(|| async { catalog.products.list(f).await.expect("list") });
    });

    group.bench_with_input(BenchmarkId::new("by_category_unbounded", size), &"oolong", |b, name| {
      b.to_async(&rt)
        .iter(|| async { catalog.products.list_by_category(name).await.expect("list") });
    });
  }

  group.finish();
}

criterion_group!(benches, bench_list_products);
criterion_main!(benches);
