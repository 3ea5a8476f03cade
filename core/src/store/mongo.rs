// tea_catalog/src/store/mongo.rs

//! MongoDB-backed store.
//!
//! The client is a pooled handle: acquire it once with [`MongoStore::connect`]
//! at startup, share it, and release it with `shutdown` at process stop.

use async_trait::async_trait;
use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, Database, IndexModel};
use tracing::{debug, info, instrument, warn};

use super::{AddressStore, CatalogStore, CategoryStore, LeadStore, ProductStore};
use crate::error::{CatalogError, CatalogResult};
use crate::models::{
  Address, AddressDraft, Category, CategoryDraft, Lead, LeadInput, Product, ProductDraft, ProductFilter,
  ProductSummary, SUMMARY_FIELDS,
};

pub const DEFAULT_MONGODB_URL: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE: &str = "tea_store";

const PRODUCTS: &str = "products";
const CATEGORIES: &str = "categories";
const LEADS: &str = "leads";
const ADDRESSES: &str = "addresses";

const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Debug, Clone)]
pub struct MongoStore {
  client: Client,
  db: Database,
}

impl MongoStore {
  /// Connects, verifies the server answers, and registers the collection
  /// indexes the catalog relies on (unique slugs, unique category names).
  #[instrument(name = "mongo_store::connect", skip(url), fields(database = %database))]
  pub async fn connect(url: &str, database: &str) -> CatalogResult<Self> {
    let client = Client::with_uri_str(url).await?;
    let db = client.database(database);
    db.run_command(doc! { "ping": 1 }).await?;
    info!("Connected to MongoDB.");

    let store = Self { client, db };
    store.register_indexes().await?;
    Ok(store)
  }

  async fn register_indexes(&self) -> CatalogResult<()> {
    let unique = || IndexOptions::builder().unique(true).build();

    self
      .products()
      .create_index(IndexModel::builder().keys(doc! { "slug": 1 }).options(unique()).build())
      .await?;
    self
      .products()
      .create_index(IndexModel::builder().keys(doc! { "category": 1 }).build())
      .await?;
    self
      .categories()
      .create_index(IndexModel::builder().keys(doc! { "name": 1 }).options(unique()).build())
      .await?;
    self
      .leads()
      .create_index(IndexModel::builder().keys(doc! { "phone": 1 }).build())
      .await?;
    self
      .leads()
      .create_index(IndexModel::builder().keys(doc! { "email": 1 }).build())
      .await?;

    debug!("Collection indexes registered.");
    Ok(())
  }

  fn products(&self) -> Collection<Product> {
    self.db.collection(PRODUCTS)
  }

  fn summaries(&self) -> Collection<ProductSummary> {
    self.db.collection(PRODUCTS)
  }

  fn categories(&self) -> Collection<Category> {
    self.db.collection(CATEGORIES)
  }

  fn leads(&self) -> Collection<Lead> {
    self.db.collection(LEADS)
  }

  fn addresses(&self) -> Collection<Address> {
    self.db.collection(ADDRESSES)
  }
}

fn is_duplicate_key(err: &MongoError) -> bool {
  match err.kind.as_ref() {
    ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY_CODE,
    _ => false,
  }
}

fn summary_projection() -> Document {
  SUMMARY_FIELDS
    .iter()
    .map(|field| (field.to_string(), Bson::Int32(1)))
    .collect()
}

#[async_trait]
impl ProductStore for MongoStore {
  #[instrument(name = "mongo_store::insert_product", skip(self, draft), fields(slug = %draft.slug))]
  async fn insert_product(&self, draft: ProductDraft) -> CatalogResult<Product> {
    let product = draft.into_product(ObjectId::new());
    let inserted = self.products().insert_one(&product).await;
    match inserted {
      Ok(_) => Ok(product),
      Err(e) if is_duplicate_key(&e) => Err(CatalogError::DuplicateSlug { slug: product.slug }),
      Err(e) => Err(e.into()),
    }
  }

  async fn find_product_by_id(&self, id: ObjectId) -> CatalogResult<Option<Product>> {
    Ok(self.products().find_one(doc! { "_id": id }).await?)
  }

  async fn find_product_by_slug(&self, slug: &str) -> CatalogResult<Option<Product>> {
    Ok(self.products().find_one(doc! { "slug": slug }).await?)
  }

  #[instrument(name = "mongo_store::list_products", skip(self))]
  async fn list_products(&self, filter: &ProductFilter) -> CatalogResult<Vec<ProductSummary>> {
    // The server treats a limit of 0 as "no limit".
    if filter.limit == Some(0) {
      return Ok(Vec::new());
    }
    let collection = self.summaries();
    let mut find = collection
      .find(filter.to_document())
      .projection(summary_projection())
      .skip(filter.skip);
    if let Some(limit) = filter.limit {
      find = find.limit(i64::from(limit));
    }
    let summaries: Vec<ProductSummary> = find.await?.try_collect().await?;
    debug!(count = summaries.len(), "Fetched product summaries.");
    Ok(summaries)
  }

  #[instrument(name = "mongo_store::replace_product", skip(self, product), fields(product_id = %product.id))]
  async fn replace_product(&self, product: &Product) -> CatalogResult<()> {
    let result = match self.products().replace_one(doc! { "_id": product.id }, product).await {
      Ok(result) => result,
      Err(e) if is_duplicate_key(&e) => {
        return Err(CatalogError::DuplicateSlug {
          slug: product.slug.clone(),
        })
      }
      Err(e) => return Err(e.into()),
    };
    if result.matched_count == 0 {
      warn!("Product vanished before its replacement landed.");
      return Err(CatalogError::not_found("Product", product.id.to_hex()));
    }
    Ok(())
  }

  async fn delete_product(&self, id: ObjectId) -> CatalogResult<bool> {
    let result = self.products().delete_one(doc! { "_id": id }).await?;
    Ok(result.deleted_count > 0)
  }
}

#[async_trait]
impl CategoryStore for MongoStore {
  async fn insert_category(&self, draft: CategoryDraft) -> CatalogResult<Category> {
    let category = draft.into_category(ObjectId::new());
    let inserted = self.categories().insert_one(&category).await;
    match inserted {
      Ok(_) => Ok(category),
      Err(e) if is_duplicate_key(&e) => Err(CatalogError::DuplicateName { name: category.name }),
      Err(e) => Err(e.into()),
    }
  }

  async fn find_category_by_id(&self, id: ObjectId) -> CatalogResult<Option<Category>> {
    Ok(self.categories().find_one(doc! { "_id": id }).await?)
  }

  async fn list_categories(&self) -> CatalogResult<Vec<Category>> {
    Ok(self.categories().find(doc! {}).await?.try_collect().await?)
  }

  async fn replace_category(&self, category: &Category) -> CatalogResult<()> {
    let result = match self.categories().replace_one(doc! { "_id": category.id }, category).await {
      Ok(result) => result,
      Err(e) if is_duplicate_key(&e) => {
        return Err(CatalogError::DuplicateName {
          name: category.name.clone(),
        })
      }
      Err(e) => return Err(e.into()),
    };
    if result.matched_count == 0 {
      return Err(CatalogError::not_found("Category", category.id.to_hex()));
    }
    Ok(())
  }

  async fn delete_category(&self, id: ObjectId) -> CatalogResult<bool> {
    let result = self.categories().delete_one(doc! { "_id": id }).await?;
    Ok(result.deleted_count > 0)
  }
}

#[async_trait]
impl LeadStore for MongoStore {
  async fn find_lead_by_phone(&self, phone: &str) -> CatalogResult<Option<Lead>> {
    Ok(self.leads().find_one(doc! { "phone": phone }).await?)
  }

  async fn find_lead_by_email(&self, email: &str) -> CatalogResult<Option<Lead>> {
    Ok(self.leads().find_one(doc! { "email": email }).await?)
  }

  async fn insert_lead(&self, input: LeadInput) -> CatalogResult<Lead> {
    let lead = input.into_lead(ObjectId::new(), Utc::now());
    self.leads().insert_one(&lead).await?;
    Ok(lead)
  }

  async fn replace_lead(&self, lead: &Lead) -> CatalogResult<()> {
    let result = self.leads().replace_one(doc! { "_id": lead.id }, lead).await?;
    if result.matched_count == 0 {
      return Err(CatalogError::not_found("Lead", lead.id.to_hex()));
    }
    Ok(())
  }
}

#[async_trait]
impl AddressStore for MongoStore {
  async fn insert_address(&self, draft: AddressDraft) -> CatalogResult<Address> {
    let address = draft.into_address(ObjectId::new(), Utc::now());
    self.addresses().insert_one(&address).await?;
    Ok(address)
  }
}

#[async_trait]
impl CatalogStore for MongoStore {
  async fn shutdown(&self) {
    self.client.clone().shutdown().await;
    info!("MongoDB connection released.");
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn projection_keeps_only_summary_fields() {
    let projection = summary_projection();
    assert_eq!(projection.len(), SUMMARY_FIELDS.len());
    assert!(projection.contains_key("slug"));
    assert!(!projection.contains_key("story"));
    assert!(!projection.contains_key("variants"));
  }
}
