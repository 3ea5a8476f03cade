// tea_catalog/examples/memory_catalog.rs

use std::sync::Arc;

use tea_catalog::{Catalog, CatalogResult, MemoryStore, ProductDraft, ProductFilter, ProductKey, ProductPatch};
use tracing::info;

#[tokio::main]
async fn main() -> CatalogResult<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- In-memory Catalog Example ---");

  // 1. Pick a store and build the services on top of it.
  let catalog = Catalog::new(Arc::new(MemoryStore::new()));

  // 2. Create a couple of products.
  let sencha = catalog
    .products
    .create(ProductDraft::new("Sencha", "sencha", 299.0, "green"))
    .await?;
  let mut assam = ProductDraft::new("Assam Gold", "assam-gold", 249.0, "black");
  assam.in_stock = false;
  catalog.products.create(assam).await?;

  // 3. List what is in stock.
  let in_stock = catalog
    .products
    .list(&ProductFilter {
      in_stock: Some(true),
      ..Default::default()
    })
    .await?;
  info!("In stock: {:?}", in_stock.iter().map(|p| &p.name).collect::<Vec<_>>());

  // 4. Patch one field and look the product up by slug.
  let patch = ProductPatch {
    price: Some(279.0),
    ..Default::default()
  };
  catalog.products.update(sencha.id, patch).await?;
  let reread = catalog.products.get(&ProductKey::parse("sencha")).await?;
  info!("Sencha now costs {}", reread.price);

  Ok(())
}
