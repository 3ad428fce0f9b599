//! Remote service clients.

pub mod apod_api_client;

pub use apod_api_client::{ApodApiClient, interpret_response};
