pub mod errors;
pub mod events;
pub mod extract;
pub mod models;
