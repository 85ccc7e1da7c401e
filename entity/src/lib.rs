pub mod prelude;

pub mod airport;
pub mod booking;
pub mod country;
pub mod flight;
pub mod passenger;
pub mod ticket;
pub mod travel_class;
