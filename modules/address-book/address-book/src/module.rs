use std::sync::Arc;

use address_book_sdk::AddressBookApi;
use axum::Router;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info};

use crate::api::rest::routes;
use crate::config::AddressBookConfig;
use crate::domain::ports::Geocoder;
use crate::domain::service::{Service, ServiceConfig};
use crate::infra::geocoding::OpenCageGeocoder;
use crate::infra::storage::SeaOrmAddressesRepository;
use crate::infra::storage::db;
use crate::infra::storage::migrations::Migrator;
use crate::local_client::LocalClient;

/// Concrete service wired to the SeaORM repository.
pub type ConcreteService = Service<SeaOrmAddressesRepository>;

/// Composition root of the address book module.
pub struct AddressBook {
    service: Arc<ConcreteService>,
}

impl AddressBook {
    /// Wire repository, geocoder and service from configuration.
    ///
    /// # Errors
    ///
    /// Fails when the geocoder client cannot be built.
    pub fn init(cfg: &AddressBookConfig, db: DatabaseConnection) -> anyhow::Result<Self> {
        info!("Initializing address_book module");
        debug!(
            default_page_size = cfg.default_page_size,
            geocoder_url = %cfg.geocoder.base_url,
            "Loaded address_book config"
        );

        let geocoder: Arc<dyn Geocoder> = Arc::new(OpenCageGeocoder::new(&cfg.geocoder)?);
        Ok(Self::with_geocoder(cfg, db, geocoder))
    }

    /// Wire the module with a caller-supplied geocoder.
    #[must_use]
    pub fn with_geocoder(
        cfg: &AddressBookConfig,
        db: DatabaseConnection,
        geocoder: Arc<dyn Geocoder>,
    ) -> Self {
        let repo = Arc::new(SeaOrmAddressesRepository::new(db));
        let service = Service::new(
            repo,
            geocoder,
            ServiceConfig {
                default_page_size: cfg.default_page_size,
            },
        );
        Self {
            service: Arc::new(service),
        }
    }

    /// Open the module's database.
    ///
    /// # Errors
    ///
    /// Returns the connection error from the driver.
    pub async fn connect(dsn: &str, max_connections: u32) -> anyhow::Result<DatabaseConnection> {
        Ok(db::connect(dsn, max_connections).await?)
    }

    /// Apply pending schema migrations.
    ///
    /// # Errors
    ///
    /// Returns the migration error from the database.
    pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
        info!("Running address_book database migrations");
        Migrator::up(db, None).await?;
        info!("Address book database migrations completed successfully");
        Ok(())
    }

    /// REST routes of the module.
    #[must_use]
    pub fn router(&self) -> Router {
        routes::router(self.service.clone())
    }

    /// In-process client for other components.
    #[must_use]
    pub fn client(&self) -> Arc<dyn AddressBookApi> {
        Arc::new(LocalClient::new(self.service.clone()))
    }
}
