pub use super::airport::Entity as Airport;
pub use super::booking::Entity as Booking;
pub use super::country::Entity as Country;
pub use super::flight::Entity as Flight;
pub use super::passenger::Entity as Passenger;
pub use super::ticket::Entity as Ticket;
pub use super::travel_class::Entity as TravelClass;
