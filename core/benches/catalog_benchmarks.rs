use async_trait::async_trait;
use catalog_core::{
  build_list_query, build_lookup_query, classify_listing, Catalog, CatalogStore, DriverFault, Product,
  ProductSummary, QueryOutcome, QuerySpec,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::Arc;
use tokio::runtime::Runtime; // To run async code within Criterion

// --- In-memory store answering every listing with `rows` summaries ---
struct FixedStore {
  rows: Vec<ProductSummary>,
}

#[async_trait]
impl CatalogStore for FixedStore {
  async fn fetch_summaries(&self, _query: &QuerySpec) -> QueryOutcome<ProductSummary> {
    QueryOutcome::from_rows(self.rows.clone())
  }

  async fn fetch_products(&self, _query: &QuerySpec) -> QueryOutcome<Product> {
    QueryOutcome::Empty
  }

  async fn probe(&self, _query: &QuerySpec) -> Result<(), DriverFault> {
    Ok(())
  }
}

fn summaries(n: usize) -> Vec<ProductSummary> {
  (0..n)
    .map(|i| ProductSummary {
      id: i as i64 + 1,
      name: format!("Product {}", i + 1),
    })
    .collect()
}

// --- Benchmark Functions ---

fn bench_query_building(c: &mut Criterion) {
  let mut group = c.benchmark_group("QueryBuilding");

  for term_len in [0usize, 16, 1024].iter() {
    let term = "a".repeat(*term_len);
    group.throughput(Throughput::Bytes(*term_len as u64));
    group.bench_with_input(BenchmarkId::new("list", term_len), &term, |b, term| {
      b.iter(|| criterion::black_box(build_list_query(Some(term.as_str()))));
    });
  }
  group.bench_function("lookup", |b| {
    b.iter(|| criterion::black_box(build_lookup_query(criterion::black_box(42))));
  });
  group.finish();
}

fn bench_listing_classification(c: &mut Criterion) {
  let mut group = c.benchmark_group("ListingClassification");

  for rows in [1usize, 100, 1000].iter() {
    let data = summaries(*rows);
    group.throughput(Throughput::Elements(*rows as u64));
    group.bench_with_input(BenchmarkId::from_parameter(rows), &data, |b, data| {
      b.iter_batched(
        || QueryOutcome::Rows(data.clone()),
        |outcome| criterion::black_box(classify_listing(outcome)),
        criterion::BatchSize::SmallInput,
      );
    });
  }
  group.finish();
}

fn bench_catalog_flow(c: &mut Criterion) {
  let rt = Runtime::new().unwrap();
  let catalog = Catalog::new(Arc::new(FixedStore { rows: summaries(50) }));

  let mut group = c.benchmark_group("CatalogFlow");
  group.bench_function("list_with_search", |b| {
    b.to_async(&rt).iter(|| async { criterion::black_box(catalog.list_products(Some("Product")).await) });
  });
  group.bench_function("detail_malformed_id", |b| {
    b.to_async(&rt).iter(|| async { criterion::black_box(catalog.product_detail("1'--").await) });
  });
  group.finish();
}

criterion_group!(
  benches,
  bench_query_building,
  bench_listing_classification,
  bench_catalog_flow
);
criterion_main!(benches);
