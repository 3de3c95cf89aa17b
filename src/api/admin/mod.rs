//! Back-office APIs. Every response here arrives in an [`Envelope`].
//!
//! Reads always unwrap `data`. Writes on buses, bus models and routes, and
//! the profile update, return the whole envelope so the caller can show the
//! server's message; station and user writes unwrap like reads do.
//!
//! [`Envelope`]: crate::api::envelope::Envelope

pub mod bus_models;
pub mod buses;
pub mod profile;
pub mod routes;
pub mod stations;
pub mod users;

pub use bus_models::BusModelsApi;
pub use buses::AdminBusesApi;
pub use profile::ProfileApi;
pub use routes::AdminRoutesApi;
pub use stations::StationsApi;
pub use users::UsersApi;
