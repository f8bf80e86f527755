use std::sync::Arc;

use address_book_sdk::{
    Address, AddressUpdate, DISTANCE_UNIT_KM, Distance, NewAddress, SearchParameters,
};
use tracing::{debug, info, instrument, warn};

use super::error::DomainError;
use super::geo::great_circle_km;
use super::ports::Geocoder;
use super::repo::AddressesRepository;
use super::search::sort_by;
use super::validation::{validate_new_addresses, validate_search, validate_update};

pub struct ServiceConfig {
    /// Size of the unfiltered listing.
    pub default_page_size: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_page_size: 20,
        }
    }
}

/// Address book domain service.
pub struct Service<R: AddressesRepository> {
    repo: Arc<R>,
    geocoder: Arc<dyn Geocoder>,
    config: ServiceConfig,
}

impl<R: AddressesRepository> Service<R> {
    pub fn new(repo: Arc<R>, geocoder: Arc<dyn Geocoder>, config: ServiceConfig) -> Self {
        Self {
            repo,
            geocoder,
            config,
        }
    }

    #[instrument(skip(self))]
    pub async fn get_address(&self, id: i32) -> Result<Address, DomainError> {
        debug!("Getting address by id");
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(id))
    }

    /// Filter and sort addresses.
    ///
    /// Without free text only the first page is returned; with free text every
    /// match is returned.
    #[instrument(skip(self, params))]
    pub async fn search_addresses(
        &self,
        params: &SearchParameters,
    ) -> Result<Vec<Address>, DomainError> {
        let query = validate_search(params)?;

        let mut rows = match query.search_text.as_deref() {
            Some(text) => {
                debug!("Searching addresses by text");
                self.repo.find_by_text(text).await?
            }
            None => {
                debug!(limit = self.config.default_page_size, "Listing addresses");
                self.repo.find_page(self.config.default_page_size).await?
            }
        };

        if let Some(column) = query.sort_column {
            sort_by(&mut rows, column, query.sort_order);
        }

        debug!(count = rows.len(), "Search completed");
        Ok(rows)
    }

    #[instrument(skip(self, addresses), fields(count = addresses.len()))]
    pub async fn create_addresses(
        &self,
        addresses: Vec<NewAddress>,
    ) -> Result<Vec<Address>, DomainError> {
        validate_new_addresses(&addresses)?;

        if addresses.is_empty() {
            debug!("Empty batch, nothing to insert");
            return Ok(Vec::new());
        }

        let created = self.repo.insert_many(addresses).await?;
        info!(created = created.len(), "Successfully created addresses");
        Ok(created)
    }

    #[instrument(skip(self, update))]
    pub async fn update_address(
        &self,
        id: i32,
        update: AddressUpdate,
    ) -> Result<Address, DomainError> {
        if update.id != id {
            return Err(DomainError::id_mismatch(id, update.id));
        }
        validate_update(&update)?;

        let updated = self
            .repo
            .update(update.into_address(id))
            .await?
            .ok_or_else(|| DomainError::not_found(id))?;

        info!("Successfully updated address");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_address(&self, id: i32) -> Result<Address, DomainError> {
        let removed = self
            .repo
            .delete(id)
            .await?
            .ok_or_else(|| DomainError::not_found(id))?;

        info!("Successfully deleted address");
        Ok(removed)
    }

    /// Geocode two stored addresses and measure the distance between them.
    ///
    /// Performs exactly two geocoder lookups, issued concurrently.
    #[instrument(skip(self))]
    pub async fn distance(
        &self,
        address1_id: i32,
        address2_id: i32,
    ) -> Result<Distance, DomainError> {
        let first = self.get_address(address1_id).await?;
        let second = self.get_address(address2_id).await?;

        let origin = first.lookup_string();
        let destination = second.lookup_string();

        let (from, to) = tokio::join!(
            self.geocoder.geocode(&origin),
            self.geocoder.geocode(&destination)
        );

        let from = from.map_err(|e| {
            warn!(address_id = address1_id, error = %e, "Geocoding failed");
            DomainError::geocoding(format!("Could not geocode address {address1_id}: {e}"))
        })?;
        let to = to.map_err(|e| {
            warn!(address_id = address2_id, error = %e, "Geocoding failed");
            DomainError::geocoding(format!("Could not geocode address {address2_id}: {e}"))
        })?;

        let distance = great_circle_km(from, to);
        debug!(distance_km = distance, "Distance computed");

        Ok(Distance {
            distance,
            unit: DISTANCE_UNIT_KM.to_owned(),
            origin,
            destination,
        })
    }
}
