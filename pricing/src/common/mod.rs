pub mod distributions;
pub mod models;
