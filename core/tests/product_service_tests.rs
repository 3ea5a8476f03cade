// tests/product_service_tests.rs
mod common;

use common::*;
use tea_catalog::{CatalogError, ObjectId, ProductFilter, ProductKey, ProductPatch};

#[tokio::test]
async fn test_lookup_by_slug_and_by_id_return_same_product() {
  setup_tracing();
  let catalog = memory_catalog();
  let created = catalog.products.create(green_tea()).await.unwrap();

  let by_slug = catalog.products.get(&ProductKey::parse("green-tea")).await.unwrap();
  let by_id = catalog
    .products
    .get(&ProductKey::parse(&created.id.to_hex()))
    .await
    .unwrap();

  assert_eq!(by_slug.id, created.id);
  assert_eq!(by_id, by_slug);
  assert_eq!(by_id.name, "Green Tea");
}

#[tokio::test]
async fn test_full_record_keeps_long_form_fields() {
  setup_tracing();
  let catalog = memory_catalog();
  catalog.products.create(masala_chai()).await.unwrap();

  let product = catalog.products.get(&ProductKey::parse("masala-chai")).await.unwrap();
  assert_eq!(product.ingredients.len(), 3);
  assert_eq!(product.brew_temp_c, Some(95.0));
  assert_eq!(product.variants.len(), 2);
  assert_eq!(product.story, "Blended in small batches in Kolkata.");
}

#[tokio::test]
async fn test_hex_looking_slug_falls_back_to_slug_lookup() {
  setup_tracing();
  let catalog = memory_catalog();
  let hex_slug = ObjectId::new().to_hex();
  let mut draft = green_tea();
  draft.slug = hex_slug.clone();
  let created = catalog.products.create(draft).await.unwrap();

  let found = catalog.products.get(&ProductKey::parse(&hex_slug)).await.unwrap();
  assert_eq!(found.id, created.id);
}

#[tokio::test]
async fn test_uppercase_hex_slug_is_found_as_sent() {
  setup_tracing();
  let catalog = memory_catalog();
  let mut draft = green_tea();
  draft.slug = "ABCDEF0123456789ABCDEF01".to_string();
  let created = catalog.products.create(draft).await.unwrap();

  let found = catalog
    .products
    .get(&ProductKey::parse("ABCDEF0123456789ABCDEF01"))
    .await
    .unwrap();
  assert_eq!(found.id, created.id);

  // The lowercased form is a different slug and names no stored id.
  let err = catalog
    .products
    .get(&ProductKey::parse("abcdef0123456789abcdef01"))
    .await
    .unwrap_err();
  assert!(err.is_not_found());
  assert!(err.to_string().contains("abcdef0123456789abcdef01"));
}

#[tokio::test]
async fn test_unknown_key_is_not_found() {
  setup_tracing();
  let catalog = memory_catalog();
  let err = catalog
    .products
    .get(&ProductKey::parse("no-such-tea"))
    .await
    .unwrap_err();
  assert!(err.is_not_found());
  let err = catalog
    .products
    .get(&ProductKey::id(ObjectId::new()))
    .await
    .unwrap_err();
  assert!(err.is_not_found());
}

#[tokio::test]
async fn test_list_filters_by_category_and_stock() {
  setup_tracing();
  let catalog = memory_catalog();
  catalog.products.create(tea("sencha", "green", true)).await.unwrap();
  catalog.products.create(tea("matcha", "green", false)).await.unwrap();
  catalog.products.create(tea("assam", "black", true)).await.unwrap();

  let green = catalog
    .products
    .list(&ProductFilter {
      category: Some("green".into()),
      ..Default::default()
    })
    .await
    .unwrap();
  assert_eq!(green.len(), 2);
  assert!(green.iter().all(|p| p.category == "green"));

  let in_stock = catalog
    .products
    .list(&ProductFilter {
      in_stock: Some(true),
      ..Default::default()
    })
    .await
    .unwrap();
  let slugs: Vec<_> = in_stock.iter().map(|p| p.slug.as_str()).collect();
  assert_eq!(slugs, vec!["sencha", "assam"]);

  let all = catalog.products.list(&ProductFilter::default()).await.unwrap();
  assert_eq!(all.len(), 3);

  let none = catalog
    .products
    .list(&ProductFilter {
      category: Some("oolong".into()),
      ..Default::default()
    })
    .await
    .unwrap();
  assert!(none.is_empty());
}

#[tokio::test]
async fn test_offset_window_is_repeatable() {
  setup_tracing();
  let catalog = memory_catalog();
  for i in 0..10 {
    catalog
      .products
      .create(tea(&format!("tea-{}", i), "green", true))
      .await
      .unwrap();
  }
  let window = ProductFilter {
    skip: 3,
    limit: Some(4),
    ..Default::default()
  };
  let first = catalog.products.list(&window).await.unwrap();
  let second = catalog.products.list(&window).await.unwrap();
  assert_eq!(first, second);
  let slugs: Vec<_> = first.iter().map(|p| p.slug.as_str()).collect();
  assert_eq!(slugs, vec!["tea-3", "tea-4", "tea-5", "tea-6"]);

  let empty = catalog
    .products
    .list(&ProductFilter {
      limit: Some(0),
      ..Default::default()
    })
    .await
    .unwrap();
  assert!(empty.is_empty());
}

#[tokio::test]
async fn test_list_by_category_ignores_stock_and_pagination() {
  setup_tracing();
  let catalog = memory_catalog();
  for i in 0..60 {
    catalog
      .products
      .create(tea(&format!("green-{}", i), "green", i % 2 == 0))
      .await
      .unwrap();
  }
  catalog.products.create(tea("assam", "black", true)).await.unwrap();

  let green = catalog.products.list_by_category("green").await.unwrap();
  assert_eq!(green.len(), 60);
  assert!(catalog.products.list_by_category("").await.unwrap().is_empty());
  assert!(catalog.products.list_by_category("Green").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicate_slug_is_rejected() {
  setup_tracing();
  let catalog = memory_catalog();
  catalog.products.create(green_tea()).await.unwrap();
  let err = catalog.products.create(green_tea()).await.unwrap_err();
  assert!(matches!(err, CatalogError::DuplicateSlug { ref slug } if slug == "green-tea"));
}

#[tokio::test]
async fn test_invalid_draft_is_rejected_before_store() {
  setup_tracing();
  let catalog = memory_catalog();
  let mut draft = green_tea();
  draft.price = -5.0;
  let err = catalog.products.create(draft).await.unwrap_err();
  assert!(matches!(err, CatalogError::Validation(_)));
  assert!(catalog.products.list(&ProductFilter::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_partial_update_changes_only_supplied_fields() {
  setup_tracing();
  let catalog = memory_catalog();
  let created = catalog.products.create(masala_chai()).await.unwrap();

  let patch: ProductPatch = serde_json::from_value(serde_json::json!({"price": 499})).unwrap();
  let updated = catalog.products.update(created.id, patch).await.unwrap();

  let mut expected = created.clone();
  expected.price = 499.0;
  assert_eq!(updated, expected);
  let reread = catalog.products.get(&ProductKey::id(created.id)).await.unwrap();
  assert_eq!(reread, expected);
}

#[tokio::test]
async fn test_update_rejects_taken_slug_and_invalid_values() {
  setup_tracing();
  let catalog = memory_catalog();
  catalog.products.create(green_tea()).await.unwrap();
  let chai = catalog.products.create(masala_chai()).await.unwrap();

  let patch = ProductPatch {
    slug: Some("green-tea".into()),
    ..Default::default()
  };
  let err = catalog.products.update(chai.id, patch).await.unwrap_err();
  assert!(matches!(err, CatalogError::DuplicateSlug { .. }));

  let patch = ProductPatch {
    rating: Some(7.5),
    ..Default::default()
  };
  let err = catalog.products.update(chai.id, patch).await.unwrap_err();
  assert!(matches!(err, CatalogError::Validation(_)));

  // Neither failed update reached the store.
  let stored = catalog.products.get(&ProductKey::id(chai.id)).await.unwrap();
  assert_eq!(stored, chai);
}

#[tokio::test]
async fn test_update_missing_product_is_not_found() {
  setup_tracing();
  let catalog = memory_catalog();
  let patch = ProductPatch {
    in_stock: Some(false),
    ..Default::default()
  };
  let err = catalog.products.update(ObjectId::new(), patch).await.unwrap_err();
  assert!(err.is_not_found());
}

#[tokio::test]
async fn test_delete_then_lookup_is_not_found() {
  setup_tracing();
  let catalog = memory_catalog();
  let created = catalog.products.create(green_tea()).await.unwrap();

  catalog.products.delete(created.id).await.unwrap();

  assert!(catalog
    .products
    .get(&ProductKey::id(created.id))
    .await
    .unwrap_err()
    .is_not_found());
  assert!(catalog
    .products
    .get(&ProductKey::parse("green-tea"))
    .await
    .unwrap_err()
    .is_not_found());
  assert!(catalog.products.delete(created.id).await.unwrap_err().is_not_found());
}
