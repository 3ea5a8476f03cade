// tea_catalog/src/models/mod.rs

//! Document types persisted by the catalog, and the input shapes used to
//! create and patch them.

pub mod address;
pub mod category;
pub mod filter;
pub mod key;
pub mod lead;
mod patch;
pub mod product;

pub use address::{Address, AddressDraft};
pub use category::{Category, CategoryDraft, CategoryPatch};
pub use filter::{ProductFilter, DEFAULT_LIST_LIMIT};
pub use key::{parse_id, ProductKey};
pub use lead::{Lead, LeadInput, LeadLookup};
pub use product::{Product, ProductDraft, ProductPatch, ProductSummary, Variant, SUMMARY_FIELDS};
