pub mod models;
pub mod roster;

pub use models::Person;
