// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::sync::Arc;

use once_cell::sync::Lazy;
use tea_catalog::{Catalog, MemoryStore, ProductDraft, Variant};
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Catalog over a fresh in-memory store ---
pub fn memory_catalog() -> Catalog {
  Catalog::new(Arc::new(MemoryStore::new()))
}

// --- Product fixtures ---
pub fn green_tea() -> ProductDraft {
  ProductDraft::new("Green Tea", "green-tea", 199.0, "green")
}

pub fn tea(slug: &str, category: &str, in_stock: bool) -> ProductDraft {
  let mut draft = ProductDraft::new(slug.replace('-', " "), slug, 150.0, category);
  draft.in_stock = in_stock;
  draft
}

/// A draft with every long-form attribute filled in.
pub fn masala_chai() -> ProductDraft {
  let mut draft = ProductDraft::new("Masala Chai", "masala-chai", 349.0, "black");
  draft.description = "Spiced Assam blend".into();
  draft.original_price = Some(399.0);
  draft.image = "https://cdn.example.com/chai.jpg".into();
  draft.benefits = vec!["Warming".into(), "Digestive".into()];
  draft.rating = 4.6;
  draft.reviews = 128;
  draft.story = "Blended in small batches in Kolkata.".into();
  draft.ingredients = vec!["Assam".into(), "Cardamom".into(), "Ginger".into()];
  draft.brew_temp_c = Some(95.0);
  draft.brew_time_min = Some(4.0);
  draft.hero_image = Some("https://cdn.example.com/chai-hero.jpg".into());
  draft.variants = vec![
    Variant {
      label: "100g".into(),
      price: Some(349.0),
      price_delta: None,
      extra: Default::default(),
    },
    Variant {
      label: "250g".into(),
      price: None,
      price_delta: Some(400.0),
      extra: Default::default(),
    },
  ];
  draft
}
