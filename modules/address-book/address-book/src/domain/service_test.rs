use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use address_book_sdk::{Address, AddressUpdate, NewAddress, SearchParameters};
use async_trait::async_trait;

use super::error::DomainError;
use super::fields::matches_text;
use super::geo::Coordinates;
use super::ports::{GeocodeError, Geocoder};
use super::repo::AddressesRepository;
use super::service::{Service, ServiceConfig};

// In-memory repository for testing
#[derive(Default)]
struct MockRepository {
    rows: Mutex<Vec<Address>>,
    fail_with: Option<String>,
}

impl MockRepository {
    fn with_rows(rows: Vec<Address>) -> Self {
        Self {
            rows: Mutex::new(rows),
            fail_with: None,
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail_with: Some(message.to_owned()),
        }
    }

    fn check(&self) -> Result<(), DomainError> {
        match &self.fail_with {
            Some(msg) => Err(DomainError::database(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AddressesRepository for MockRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Address>, DomainError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().iter().find(|a| a.id == id).cloned())
    }

    async fn find_page(&self, limit: u64) -> Result<Vec<Address>, DomainError> {
        self.check()?;
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .take(usize::try_from(limit).unwrap())
            .cloned()
            .collect())
    }

    async fn find_by_text(&self, text: &str) -> Result<Vec<Address>, DomainError> {
        self.check()?;
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|a| matches_text(a, text)).cloned().collect())
    }

    async fn insert_many(&self, addresses: Vec<NewAddress>) -> Result<Vec<Address>, DomainError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let mut next_id = rows.iter().map(|a| a.id).max().unwrap_or(0);
        let mut created = Vec::new();
        for n in addresses {
            next_id += 1;
            let a = Address {
                id: next_id,
                street: n.street,
                house_number: n.house_number,
                zip_code: n.zip_code,
                city: n.city,
                country: n.country,
            };
            rows.push(a.clone());
            created.push(a);
        }
        Ok(created)
    }

    async fn update(&self, address: Address) -> Result<Option<Address>, DomainError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|a| a.id == address.id).map(|slot| {
            *slot = address.clone();
            address
        }))
    }

    async fn delete(&self, id: i32) -> Result<Option<Address>, DomainError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let idx = rows.iter().position(|a| a.id == id);
        Ok(idx.map(|i| rows.remove(i)))
    }
}

// Geocoder answering from a fixed table
#[derive(Default)]
struct MockGeocoder {
    answers: HashMap<String, Result<Coordinates, GeocodeError>>,
    calls: AtomicUsize,
}

impl MockGeocoder {
    fn with(mut self, query: &str, answer: Result<Coordinates, GeocodeError>) -> Self {
        self.answers.insert(query.to_owned(), answer);
        self
    }
}

#[async_trait]
impl Geocoder for MockGeocoder {
    async fn geocode(&self, query: &str) -> Result<Coordinates, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answers
            .get(query)
            .cloned()
            .unwrap_or(Err(GeocodeError::NoResults))
    }
}

fn addr(id: i32, street: &str, house_number: &str, city: &str) -> Address {
    Address {
        id,
        street: street.to_owned(),
        house_number: house_number.to_owned(),
        zip_code: "00001".to_owned(),
        city: city.to_owned(),
        country: "USA".to_owned(),
    }
}

fn new_addr(street: &str) -> NewAddress {
    NewAddress {
        street: street.to_owned(),
        house_number: "1".to_owned(),
        zip_code: "00001".to_owned(),
        city: "Springfield".to_owned(),
        country: "USA".to_owned(),
    }
}

fn sample_rows() -> Vec<Address> {
    vec![
        addr(1, "Main St", "1", "Springfield"),
        addr(2, "Main St", "2", "Springfield"),
        addr(3, "Elm St", "7", "Shelbyville"),
    ]
}

fn service_with(repo: MockRepository, geocoder: MockGeocoder) -> Service<MockRepository> {
    Service::new(Arc::new(repo), Arc::new(geocoder), ServiceConfig::default())
}

fn service(rows: Vec<Address>) -> Service<MockRepository> {
    service_with(MockRepository::with_rows(rows), MockGeocoder::default())
}

fn search(text: Option<&str>, column: Option<&str>, order: Option<&str>) -> SearchParameters {
    SearchParameters {
        search_text: text.map(ToOwned::to_owned),
        sort_column: column.map(ToOwned::to_owned),
        sort_order: order.map(ToOwned::to_owned),
    }
}

#[tokio::test]
async fn get_address_returns_existing() {
    let svc = service(sample_rows());
    let found = svc.get_address(3).await.unwrap();
    assert_eq!(found.street, "Elm St");
}

#[tokio::test]
async fn get_address_missing_is_not_found() {
    let svc = service(sample_rows());
    let err = svc.get_address(99).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { id: 99 }));
}

#[tokio::test]
async fn storage_faults_propagate_as_database_errors() {
    let svc = service_with(MockRepository::failing("boom"), MockGeocoder::default());
    let err = svc.get_address(1).await.unwrap_err();
    assert!(matches!(err, DomainError::Database { .. }));
}

#[tokio::test]
async fn search_without_text_is_capped_by_page_size() {
    let rows: Vec<Address> = (1..=30).map(|i| addr(i, "Main St", "1", "X")).collect();
    let svc = Service::new(
        Arc::new(MockRepository::with_rows(rows)),
        Arc::new(MockGeocoder::default()),
        ServiceConfig {
            default_page_size: 5,
        },
    );

    let found = svc.search_addresses(&search(None, None, None)).await.unwrap();
    let ids: Vec<i32> = found.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn search_with_text_returns_every_match_unpaginated() {
    let rows: Vec<Address> = (1..=30).map(|i| addr(i, "Main St", "1", "X")).collect();
    let svc = Service::new(
        Arc::new(MockRepository::with_rows(rows)),
        Arc::new(MockGeocoder::default()),
        ServiceConfig {
            default_page_size: 5,
        },
    );

    let found = svc
        .search_addresses(&search(Some("Main"), None, None))
        .await
        .unwrap();
    assert_eq!(found.len(), 30);
}

#[tokio::test]
async fn search_filters_and_sorts_descending() {
    let svc = service(sample_rows());
    let found = svc
        .search_addresses(&search(Some("Main"), Some("housenumber"), Some("desc")))
        .await
        .unwrap();
    let ids: Vec<i32> = found.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[tokio::test]
async fn search_without_matches_is_empty_not_error() {
    let svc = service(sample_rows());
    let found = svc
        .search_addresses(&search(Some("Nowhere"), None, None))
        .await
        .unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn search_rejects_invalid_sort_before_store_access() {
    let svc = service_with(MockRepository::failing("must not be reached"), MockGeocoder::default());
    let err = svc
        .search_addresses(&search(None, Some("Planet"), None))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
}

#[tokio::test]
async fn create_assigns_ids_and_round_trips() {
    let svc = service(Vec::new());
    let created = svc
        .create_addresses(vec![new_addr("Main St"), new_addr("Elm St")])
        .await
        .unwrap();
    assert_eq!(created.len(), 2);
    assert_ne!(created[0].id, created[1].id);

    let fetched = svc.get_address(created[1].id).await.unwrap();
    assert_eq!(fetched.street, "Elm St");
    assert_eq!(fetched.city, "Springfield");
}

#[tokio::test]
async fn create_rejects_batch_with_empty_field() {
    let svc = service(Vec::new());
    let mut bad = new_addr("Main St");
    bad.city = String::new();

    let err = svc
        .create_addresses(vec![new_addr("Elm St"), bad])
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidPayload { .. }));

    let all = svc.search_addresses(&search(None, None, None)).await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn create_empty_batch_returns_empty() {
    let svc = service_with(MockRepository::failing("must not be reached"), MockGeocoder::default());
    let created = svc.create_addresses(Vec::new()).await.unwrap();
    assert!(created.is_empty());
}

#[tokio::test]
async fn update_with_matching_ids_overwrites_fields() {
    let svc = service(sample_rows());
    let update = AddressUpdate {
        id: 3,
        street: "Oak Ave".to_owned(),
        house_number: "12".to_owned(),
        zip_code: "99999".to_owned(),
        city: "Ogdenville".to_owned(),
        country: "USA".to_owned(),
    };

    let updated = svc.update_address(3, update).await.unwrap();
    assert_eq!(updated.id, 3);

    let fetched = svc.get_address(3).await.unwrap();
    assert_eq!(fetched.street, "Oak Ave");
    assert_eq!(fetched.zip_code, "99999");
}

#[tokio::test]
async fn update_with_mismatched_ids_is_rejected_before_store_access() {
    let svc = service_with(MockRepository::failing("must not be reached"), MockGeocoder::default());
    let update = AddressUpdate {
        id: 4,
        street: "Oak Ave".to_owned(),
        house_number: "12".to_owned(),
        zip_code: "99999".to_owned(),
        city: "Ogdenville".to_owned(),
        country: "USA".to_owned(),
    };

    let err = svc.update_address(3, update).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::IdMismatch {
            path_id: 3,
            body_id: 4
        }
    ));
}

#[tokio::test]
async fn update_missing_is_not_found() {
    let svc = service(sample_rows());
    let update = AddressUpdate {
        id: 42,
        street: "Oak Ave".to_owned(),
        house_number: "12".to_owned(),
        zip_code: "99999".to_owned(),
        city: "Ogdenville".to_owned(),
        country: "USA".to_owned(),
    };
    let err = svc.update_address(42, update).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { id: 42 }));
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let svc = service(sample_rows());
    let removed = svc.delete_address(2).await.unwrap();
    assert_eq!(removed.house_number, "2");

    let err = svc.get_address(2).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { id: 2 }));
}

#[tokio::test]
async fn delete_missing_is_not_found() {
    let svc = service(sample_rows());
    let err = svc.delete_address(99).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { id: 99 }));
}

#[tokio::test]
async fn distance_between_geocoded_addresses() {
    // 10 km of arc along the equator
    let ten_km_in_degrees = (10_000.0 / super::geo::EARTH_RADIUS_M).to_degrees();
    let geocoder = MockGeocoder::default()
        .with(
            "Main St,1,00001,Springfield,USA",
            Ok(Coordinates::new(0.0, 0.0)),
        )
        .with(
            "Main St,2,00001,Springfield,USA",
            Ok(Coordinates::new(0.0, ten_km_in_degrees)),
        );
    let geocoder = Arc::new(geocoder);
    let svc = Service::new(
        Arc::new(MockRepository::with_rows(sample_rows())),
        geocoder.clone(),
        ServiceConfig::default(),
    );

    let d = svc.distance(1, 2).await.unwrap();
    assert!((d.distance - 10.0).abs() < 1e-6);
    assert_eq!(d.unit, "KM");
    assert_eq!(d.origin, "Main St,1,00001,Springfield,USA");
    assert_eq!(d.destination, "Main St,2,00001,Springfield,USA");
    assert_eq!(geocoder.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn distance_with_missing_address_is_not_found() {
    let geocoder = Arc::new(MockGeocoder::default());
    let svc = Service::new(
        Arc::new(MockRepository::with_rows(sample_rows())),
        geocoder.clone(),
        ServiceConfig::default(),
    );

    let err = svc.distance(1, 77).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { id: 77 }));
    assert_eq!(geocoder.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn distance_with_geocoder_failure_is_not_zero() {
    let geocoder = MockGeocoder::default()
        .with(
            "Main St,1,00001,Springfield,USA",
            Ok(Coordinates::new(0.0, 0.0)),
        )
        .with(
            "Main St,2,00001,Springfield,USA",
            Err(GeocodeError::Provider {
                code: 402,
                message: "quota exceeded".to_owned(),
            }),
        );
    let svc = service_with(MockRepository::with_rows(sample_rows()), geocoder);

    let err = svc.distance(1, 2).await.unwrap_err();
    match err {
        DomainError::Geocoding { message } => assert!(message.contains("address 2")),
        other => panic!("expected geocoding error, got {other:?}"),
    }
}
