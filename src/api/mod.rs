//! Resource APIs, one per backend resource.

pub mod admin;
pub mod buses;
pub mod envelope;
pub mod operators;
pub mod payments;
pub mod resource;
pub mod routes;
pub mod seat_types;

pub use buses::BusesApi;
pub use envelope::Envelope;
pub use operators::OperatorsApi;
pub use payments::PaymentsApi;
pub use resource::{RestResource, Wrapping};
pub use routes::RoutesApi;
pub use seat_types::SeatTypesApi;
