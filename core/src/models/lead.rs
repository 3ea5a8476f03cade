// tea_catalog/src/models/lead.rs
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

pub const DEFAULT_LEAD_SOURCE: &str = "popup";

/// A marketing contact captured from the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
  #[serde(rename = "_id")]
  pub id: ObjectId,
  #[serde(default)]
  pub phone: Option<String>,
  #[serde(default)]
  pub email: Option<String>,
  pub source: String,
  #[serde(default)]
  pub marketing_optin: bool,
  #[serde(default)]
  pub whatsapp_optin: bool,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Lead capture payload. Every field is optional so an upsert can tell
/// "not sent" apart from "sent with the default value".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LeadInput {
  pub phone: Option<String>,
  pub email: Option<String>,
  pub source: Option<String>,
  pub marketing_optin: Option<bool>,
  pub whatsapp_optin: Option<bool>,
}

impl LeadInput {
  /// Trims contact fields; a blank phone or email counts as not sent.
  pub fn normalized(mut self) -> Self {
    self.phone = non_blank(self.phone);
    self.email = non_blank(self.email);
    self
  }

  /// Expects a [`normalized`](Self::normalized) input.
  pub fn validate(&self) -> CatalogResult<()> {
    if self.phone.is_none() && self.email.is_none() {
      return Err(CatalogError::validation("a lead needs a phone number or an email address"));
    }
    if let Some(email) = self.email.as_deref() {
      validate_email(email)?;
    }
    Ok(())
  }

  /// The key an existing lead is matched on: phone wins over email.
  pub fn lookup(&self) -> Option<LeadLookup<'_>> {
    match (self.phone.as_deref(), self.email.as_deref()) {
      (Some(phone), _) => Some(LeadLookup::Phone(phone)),
      (None, Some(email)) => Some(LeadLookup::Email(email)),
      (None, None) => None,
    }
  }

  pub fn into_lead(self, id: ObjectId, now: DateTime<Utc>) -> Lead {
    Lead {
      id,
      phone: self.phone,
      email: self.email,
      source: self.source.unwrap_or_else(|| DEFAULT_LEAD_SOURCE.to_string()),
      marketing_optin: self.marketing_optin.unwrap_or(false),
      whatsapp_optin: self.whatsapp_optin.unwrap_or(false),
      created_at: now,
      updated_at: now,
    }
  }

  /// Overwrites only the fields the caller sent.
  pub fn apply_to(self, lead: &mut Lead, now: DateTime<Utc>) {
    if self.phone.is_some() {
      lead.phone = self.phone;
    }
    if self.email.is_some() {
      lead.email = self.email;
    }
    if let Some(source) = self.source {
      lead.source = source;
    }
    if let Some(v) = self.marketing_optin {
      lead.marketing_optin = v;
    }
    if let Some(v) = self.whatsapp_optin {
      lead.whatsapp_optin = v;
    }
    lead.updated_at = now;
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadLookup<'a> {
  Phone(&'a str),
  Email(&'a str),
}

fn non_blank(value: Option<String>) -> Option<String> {
  value
    .map(|v| v.trim().to_string())
    .filter(|v| !v.is_empty())
}

fn validate_email(email: &str) -> CatalogResult<()> {
  let plausible = match email.split_once('@') {
    Some((local, domain)) => {
      !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
        && !email.chars().any(char::is_whitespace)
    }
    None => false,
  };
  if !plausible {
    return Err(CatalogError::validation(format!("'{}' is not a valid email address", email)));
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn phone_takes_precedence_for_lookup() {
    let input = LeadInput {
      phone: Some("9999".into()),
      email: Some("a@b.co".into()),
      ..Default::default()
    };
    assert_eq!(input.lookup(), Some(LeadLookup::Phone("9999")));
  }

  #[test]
  fn empty_lead_is_rejected() {
    assert!(LeadInput::default().validate().is_err());
    let blank = LeadInput {
      phone: Some("  ".into()),
      ..Default::default()
    }
    .normalized();
    assert!(blank.validate().is_err());
  }

  #[test]
  fn normalizing_trims_and_drops_blank_contacts() {
    let input = LeadInput {
      phone: Some("   ".into()),
      email: Some(" a@b.co ".into()),
      ..Default::default()
    }
    .normalized();
    assert_eq!(input.phone, None);
    assert_eq!(input.email.as_deref(), Some("a@b.co"));
    assert_eq!(input.lookup(), Some(LeadLookup::Email("a@b.co")));
  }

  #[test]
  fn email_shape_is_checked() {
    for bad in ["nope", "a@b", "@b.co", "a@@b.co", "a b@c.co"] {
      let input = LeadInput {
        email: Some(bad.into()),
        ..Default::default()
      };
      assert!(input.validate().is_err(), "{} should be rejected", bad);
    }
    let ok = LeadInput {
      email: Some("tea@example.com".into()),
      ..Default::default()
    };
    assert!(ok.validate().is_ok());
  }

  #[test]
  fn new_lead_gets_defaults() {
    let now = Utc::now();
    let lead = LeadInput {
      phone: Some("9999".into()),
      ..Default::default()
    }
    .into_lead(ObjectId::new(), now);
    assert_eq!(lead.source, DEFAULT_LEAD_SOURCE);
    assert!(!lead.marketing_optin);
    assert_eq!(lead.created_at, now);
  }
}
