pub mod airport;
pub mod events;
pub mod fixture;
pub mod flight;
