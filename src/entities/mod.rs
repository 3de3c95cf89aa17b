//! Data-transfer shapes exchanged with the booking backend.
//!
//! Everything here is server-owned; the client never caches these values.

pub mod bus;
pub mod operator;
pub mod payment;
pub mod profile;
pub mod route;
pub mod search;
pub mod seat_type;
pub mod station;
pub mod trip;
pub mod user;

pub use bus::{Bus, BusModel, Seat, SeatLayout};
pub use operator::Operator;
pub use payment::{CreatePaymentLinkRequest, PaymentLink};
pub use profile::{Attachment, Profile, ProfileUpdate};
pub use route::{Route, RouteStop};
pub use search::SearchParams;
pub use seat_type::SeatType;
pub use station::Station;
pub use trip::{TripDraft, TripStatus};
pub use user::{User, UserRole};
