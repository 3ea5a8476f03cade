// src/lib.rs

//! Tea Catalog: the product catalog behind the tea store.
//!
//! The crate owns the catalog's documents and the rules around them:
//!  - Products with a unique slug usable as an alternate lookup key.
//!  - Filtered, offset-windowed listing that returns reduced summaries.
//!  - Partial updates expressed as typed patches, never field reflection.
//!  - Categories, marketing leads and shipping addresses.
//!  - A store seam (`ProductStore`, `CategoryStore`, ...) with an in-memory
//!    implementation and a MongoDB implementation.
//!
//! Nothing here knows about HTTP; the `tea-store` server maps these
//! operations and `CatalogError` onto routes and status codes.

pub mod error;
pub mod models;
pub mod services;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::error::{CatalogError, CatalogResult};

pub use crate::models::{
  parse_id, Address, AddressDraft, Category, CategoryDraft, CategoryPatch, Lead, LeadInput, Product, ProductDraft,
  ProductFilter, ProductKey, ProductPatch, ProductSummary, Variant, DEFAULT_LIST_LIMIT,
};

pub use crate::services::{AddressService, Catalog, CategoryService, LeadService, ProductService};

pub use crate::store::{
  AddressStore, CatalogStore, CategoryStore, LeadStore, MemoryStore, MongoStore, ProductStore,
};

/// Identifier type of every catalog document.
pub use mongodb::bson::oid::ObjectId;
