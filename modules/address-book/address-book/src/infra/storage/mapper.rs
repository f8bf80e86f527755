use address_book_sdk::{Address, NewAddress};
use sea_orm::ActiveValue::{NotSet, Set};

use super::entity::{ActiveModel, Model};

/// Convert a database entity to a contract model
impl From<Model> for Address {
    fn from(e: Model) -> Self {
        Self {
            id: e.id,
            street: e.street,
            house_number: e.house_number,
            zip_code: e.zip_code,
            city: e.city,
            country: e.country,
        }
    }
}

/// Active model for an insert; the id is left to the database.
#[must_use]
pub fn new_active_model(address: NewAddress) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        street: Set(address.street),
        house_number: Set(address.house_number),
        zip_code: Set(address.zip_code),
        city: Set(address.city),
        country: Set(address.country),
    }
}

/// Overwrite the five string columns of an existing row.
pub fn apply_update(active: &mut ActiveModel, address: Address) {
    active.street = Set(address.street);
    active.house_number = Set(address.house_number);
    active.zip_code = Set(address.zip_code);
    active.city = Set(address.city);
    active.country = Set(address.country);
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn entity_to_contract_keeps_every_field() {
        let model = Model {
            id: 7,
            street: "Main St".to_owned(),
            house_number: "1".to_owned(),
            zip_code: "00001".to_owned(),
            city: "Springfield".to_owned(),
            country: "USA".to_owned(),
        };
        let address: Address = model.into();
        assert_eq!(address.id, 7);
        assert_eq!(address.lookup_string(), "Main St,1,00001,Springfield,USA");
    }

    #[test]
    fn new_active_model_leaves_id_unset() {
        let active = new_active_model(NewAddress {
            street: "Main St".to_owned(),
            house_number: "1".to_owned(),
            zip_code: "00001".to_owned(),
            city: "Springfield".to_owned(),
            country: "USA".to_owned(),
        });
        assert!(matches!(active.id, NotSet));
        assert!(matches!(&active.city, Set(city) if city == "Springfield"));
    }
}
