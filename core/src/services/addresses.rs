// tea_catalog/src/services/addresses.rs
use std::sync::Arc;

use tracing::{info, instrument};

use crate::error::CatalogResult;
use crate::models::{Address, AddressDraft};
use crate::store::AddressStore;

#[derive(Clone)]
pub struct AddressService {
  store: Arc<dyn AddressStore>,
}

impl AddressService {
  pub fn new(store: Arc<dyn AddressStore>) -> Self {
    Self { store }
  }

  #[instrument(name = "address_service::create", skip(self, draft), fields(user_id = ?draft.user_id), err(Display))]
  pub async fn create(&self, draft: AddressDraft) -> CatalogResult<Address> {
    draft.validate()?;
    let address = self.store.insert_address(draft).await?;
    info!(address_id = %address.id, "Address saved.");
    Ok(address)
  }
}
