// tea_catalog/src/models/address.rs
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

pub const DEFAULT_COUNTRY: &str = "India";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
  #[serde(rename = "_id")]
  pub id: ObjectId,
  #[serde(default)]
  pub user_id: Option<i64>,
  pub line1: String,
  #[serde(default)]
  pub line2: Option<String>,
  pub city: String,
  pub state: String,
  pub pincode: String,
  pub country: String,
  pub is_default: bool,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddressDraft {
  #[serde(default)]
  pub user_id: Option<i64>,
  pub line1: String,
  #[serde(default)]
  pub line2: Option<String>,
  pub city: String,
  pub state: String,
  pub pincode: String,
  #[serde(default = "default_country")]
  pub country: String,
  #[serde(default = "default_is_default")]
  pub is_default: bool,
}

impl AddressDraft {
  pub fn validate(&self) -> CatalogResult<()> {
    for (field, value) in [
      ("line1", &self.line1),
      ("city", &self.city),
      ("state", &self.state),
      ("pincode", &self.pincode),
      ("country", &self.country),
    ] {
      if value.trim().is_empty() {
        return Err(CatalogError::validation(format!("{} must not be empty", field)));
      }
    }
    Ok(())
  }

  pub fn into_address(self, id: ObjectId, now: DateTime<Utc>) -> Address {
    Address {
      id,
      user_id: self.user_id,
      line1: self.line1,
      line2: self.line2,
      city: self.city,
      state: self.state,
      pincode: self.pincode,
      country: self.country,
      is_default: self.is_default,
      created_at: now,
    }
  }
}

fn default_country() -> String {
  DEFAULT_COUNTRY.to_string()
}

fn default_is_default() -> bool {
  true
}
