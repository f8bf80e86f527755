use std::sync::Arc;

use address_book_sdk::{
    Address, AddressBookApi, AddressBookError, AddressUpdate, Distance, NewAddress,
    SearchParameters,
};
use async_trait::async_trait;

use crate::domain::repo::AddressesRepository;
use crate::domain::service::Service;

/// In-process implementation of [`AddressBookApi`] over the domain service.
pub struct LocalClient<R: AddressesRepository> {
    service: Arc<Service<R>>,
}

impl<R: AddressesRepository> LocalClient<R> {
    #[must_use]
    pub fn new(service: Arc<Service<R>>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl<R: AddressesRepository + 'static> AddressBookApi for LocalClient<R> {
    async fn get_address(&self, id: i32) -> Result<Address, AddressBookError> {
        self.service.get_address(id).await.map_err(Into::into)
    }

    async fn search_addresses(
        &self,
        params: SearchParameters,
    ) -> Result<Vec<Address>, AddressBookError> {
        self.service
            .search_addresses(&params)
            .await
            .map_err(Into::into)
    }

    async fn create_addresses(
        &self,
        addresses: Vec<NewAddress>,
    ) -> Result<Vec<Address>, AddressBookError> {
        self.service
            .create_addresses(addresses)
            .await
            .map_err(Into::into)
    }

    async fn update_address(
        &self,
        id: i32,
        update: AddressUpdate,
    ) -> Result<Address, AddressBookError> {
        self.service
            .update_address(id, update)
            .await
            .map_err(Into::into)
    }

    async fn delete_address(&self, id: i32) -> Result<Address, AddressBookError> {
        self.service.delete_address(id).await.map_err(Into::into)
    }

    async fn distance(
        &self,
        address1_id: i32,
        address2_id: i32,
    ) -> Result<Distance, AddressBookError> {
        self.service
            .distance(address1_id, address2_id)
            .await
            .map_err(Into::into)
    }
}
