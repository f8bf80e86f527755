use address_book_sdk::{Address, NewAddress};
use async_trait::async_trait;
use sea_orm::sea_query::LikeExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::fields::matches_text;
use crate::domain::repo::AddressesRepository;

use super::db::db_err;
use super::entity::{ActiveModel, Column, Entity as AddressEntity};
use super::mapper::{apply_update, new_active_model};

const LIKE_ESCAPE: char = '\\';

/// Escape `LIKE` wildcards so the text is matched literally.
fn like_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// SeaORM-backed implementation of [`AddressesRepository`].
pub struct SeaOrmAddressesRepository {
    db: DatabaseConnection,
}

impl SeaOrmAddressesRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AddressesRepository for SeaOrmAddressesRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Address>, DomainError> {
        let found = AddressEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn find_page(&self, limit: u64) -> Result<Vec<Address>, DomainError> {
        let rows = AddressEntity::find()
            .order_by_asc(Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_text(&self, text: &str) -> Result<Vec<Address>, DomainError> {
        let pattern = like_pattern(text);
        let condition = [
            Column::Street,
            Column::HouseNumber,
            Column::ZipCode,
            Column::City,
            Column::Country,
        ]
        .into_iter()
        .fold(Condition::any(), |cond, col| {
            cond.add(col.like(LikeExpr::new(pattern.clone()).escape(LIKE_ESCAPE)))
        });

        let candidates = AddressEntity::find()
            .filter(condition)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        // LIKE is case-insensitive on some backends
        let matches: Vec<Address> = candidates
            .into_iter()
            .map(Address::from)
            .filter(|a| matches_text(a, text))
            .collect();

        debug!(count = matches.len(), "Text filter matched addresses");
        Ok(matches)
    }

    async fn insert_many(&self, addresses: Vec<NewAddress>) -> Result<Vec<Address>, DomainError> {
        if addresses.is_empty() {
            return Ok(Vec::new());
        }

        let txn = self.db.begin().await.map_err(db_err)?;

        let mut created = Vec::with_capacity(addresses.len());
        for address in addresses {
            // an early return drops `txn`, which rolls the batch back
            let model = new_active_model(address)
                .insert(&txn)
                .await
                .map_err(db_err)?;
            created.push(model.into());
        }

        txn.commit().await.map_err(db_err)?;
        Ok(created)
    }

    async fn update(&self, address: Address) -> Result<Option<Address>, DomainError> {
        let Some(existing) = AddressEntity::find_by_id(address.id)
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };

        let mut active: ActiveModel = existing.into();
        apply_update(&mut active, address);
        let updated = active.update(&self.db).await.map_err(db_err)?;
        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: i32) -> Result<Option<Address>, DomainError> {
        let Some(existing) = AddressEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };

        let removed = Address::from(existing.clone());
        existing.delete(&self.db).await.map_err(db_err)?;
        Ok(Some(removed))
    }
}
