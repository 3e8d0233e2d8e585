//! Dog API Client
//!
//! The six remote calls the list view makes, behind one trait so the
//! actions can run against the real HTTP client or an in-memory fake.

mod http;
#[cfg(test)]
pub mod fake;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Dog, NewDog};

pub use http::HttpDogApi;

/// Remote dog collection
#[async_trait(?Send)]
pub trait DogApi {
    /// Fetch the whole collection
    async fn list_dogs(&self) -> ApiResult<Vec<Dog>>;

    /// Fetch a random placeholder image URL from the third-party service
    async fn random_image(&self) -> ApiResult<String>;

    /// Create a record; the server assigns the id
    async fn create_dog(&self, dog: &NewDog) -> ApiResult<Dog>;

    async fn get_dog(&self, id: u32) -> ApiResult<Dog>;

    /// Replace a record wholesale
    async fn update_dog(&self, dog: &Dog) -> ApiResult<Dog>;

    async fn delete_dog(&self, id: u32) -> ApiResult<()>;
}
