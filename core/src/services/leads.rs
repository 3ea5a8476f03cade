// tea_catalog/src/services/leads.rs
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};

use crate::error::CatalogResult;
use crate::models::{Lead, LeadInput, LeadLookup};
use crate::store::LeadStore;

#[derive(Clone)]
pub struct LeadService {
  store: Arc<dyn LeadStore>,
}

impl LeadService {
  pub fn new(store: Arc<dyn LeadStore>) -> Self {
    Self { store }
  }

  /// Records a lead, merging into an existing one matched by phone (or by
  /// email when no phone is given). Only the fields sent are overwritten.
  #[instrument(name = "lead_service::upsert", skip(self, input), err(Display))]
  pub async fn upsert(&self, input: LeadInput) -> CatalogResult<Lead> {
    let input = input.normalized();
    input.validate()?;

    let existing = match input.lookup() {
      Some(LeadLookup::Phone(phone)) => self.store.find_lead_by_phone(phone).await?,
      Some(LeadLookup::Email(email)) => self.store.find_lead_by_email(email).await?,
      None => None,
    };

    match existing {
      Some(mut lead) => {
        input.apply_to(&mut lead, Utc::now());
        self.store.replace_lead(&lead).await?;
        info!(lead_id = %lead.id, "Lead updated.");
        Ok(lead)
      }
      None => {
        let lead = self.store.insert_lead(input).await?;
        info!(lead_id = %lead.id, "Lead captured.");
        Ok(lead)
      }
    }
  }
}
