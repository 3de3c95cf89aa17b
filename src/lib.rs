pub mod api;
pub mod config;
pub mod entities;
pub mod error;
pub mod routes;
pub mod session;
pub mod transport;
pub mod utils;

use api::admin::{AdminBusesApi, AdminRoutesApi, BusModelsApi, ProfileApi, StationsApi, UsersApi};
use api::{BusesApi, OperatorsApi, PaymentsApi, RoutesApi, SeatTypesApi};
use session::{AuthContext, FileStore};
use transport::HttpClient;

pub use config::Config;
pub use error::{ApiError, ApiResult};

/// Entry point handing out every resource API over one shared transport
#[derive(Clone)]
pub struct BookingClient {
    pub config: Config,
    http: HttpClient,
}

impl BookingClient {
    pub fn new(config: Config) -> ApiResult<Self> {
        let http = HttpClient::new(&config)?;
        Ok(Self { config, http })
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Install a bearer token and return the resulting auth context
    pub fn login(&self, token: impl Into<String>) -> AuthContext {
        let token = token.into();
        let ctx = AuthContext::from_token(Some(&token));
        self.http.set_token(Some(token));
        ctx
    }

    pub fn logout(&self) -> AuthContext {
        self.http.set_token(None);
        AuthContext::unauthenticated()
    }

    pub fn auth_context(&self) -> AuthContext {
        AuthContext::from_token(self.http.token().as_deref())
    }

    pub fn session_store(&self) -> FileStore {
        FileStore::new(&self.config.session_store_path)
    }

    // ========== Booking ==========

    pub fn buses(&self) -> BusesApi {
        BusesApi::new(self.http.clone())
    }

    pub fn operators(&self) -> OperatorsApi {
        OperatorsApi::new(self.http.clone())
    }

    pub fn routes(&self) -> RoutesApi {
        RoutesApi::new(self.http.clone())
    }

    pub fn seat_types(&self) -> SeatTypesApi {
        SeatTypesApi::new(self.http.clone())
    }

    pub fn payments(&self) -> PaymentsApi {
        PaymentsApi::new(self.http.clone(), self.config.app_base_url.clone())
    }

    // ========== Admin ==========

    pub fn admin_buses(&self) -> AdminBusesApi {
        AdminBusesApi::new(self.http.clone())
    }

    pub fn bus_models(&self) -> BusModelsApi {
        BusModelsApi::new(self.http.clone())
    }

    pub fn admin_routes(&self) -> AdminRoutesApi {
        AdminRoutesApi::new(self.http.clone())
    }

    pub fn stations(&self) -> StationsApi {
        StationsApi::new(self.http.clone())
    }

    pub fn profile(&self) -> ProfileApi {
        ProfileApi::new(self.http.clone())
    }

    pub fn users(&self) -> UsersApi {
        UsersApi::new(self.http.clone())
    }
}
