//! reqwest-backed DogApi (uses `fetch` on wasm32)

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::DogApi;
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Dog, NewDog, RandomImage};

/// One row of the endpoint table
#[derive(Debug, Clone, Copy)]
enum Call<'a> {
    List,
    RandomImage,
    Create(&'a NewDog),
    Get(u32),
    Update(&'a Dog),
    Delete(u32),
}

#[derive(Debug, Clone)]
pub struct HttpDogApi {
    client: Client,
    config: ApiConfig,
}

impl HttpDogApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Method, URL and body for `call`
    fn request(&self, call: Call<'_>) -> RequestBuilder {
        match call {
            Call::List => self.client.get(&self.config.list_url),
            Call::RandomImage => self.client.get(&self.config.random_image_url),
            Call::Create(dog) => self.client.post(&self.config.dogs_url).json(dog),
            Call::Get(id) => self.client.get(self.config.dog_url(id)),
            Call::Update(dog) => self.client.put(self.config.dog_url(dog.id)).json(dog),
            Call::Delete(id) => self.client.delete(self.config.dog_url(id)),
        }
    }

    async fn send(&self, call: Call<'_>) -> ApiResult<Response> {
        let response = self
            .request(call)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        match ApiError::from_status(response.status().as_u16()) {
            Some(err) => Err(err),
            None => Ok(response),
        }
    }

    async fn send_json<T: DeserializeOwned>(&self, call: Call<'_>) -> ApiResult<T> {
        let body = self
            .send(call)
            .await?
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_body(&body)
    }
}

fn decode_body<T: DeserializeOwned>(body: &[u8]) -> ApiResult<T> {
    serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl DogApi for HttpDogApi {
    async fn list_dogs(&self) -> ApiResult<Vec<Dog>> {
        self.send_json(Call::List).await
    }

    async fn random_image(&self) -> ApiResult<String> {
        let image: RandomImage = self.send_json(Call::RandomImage).await?;
        Ok(image.url)
    }

    async fn create_dog(&self, dog: &NewDog) -> ApiResult<Dog> {
        self.send_json(Call::Create(dog)).await
    }

    async fn get_dog(&self, id: u32) -> ApiResult<Dog> {
        self.send_json(Call::Get(id)).await
    }

    async fn update_dog(&self, dog: &Dog) -> ApiResult<Dog> {
        self.send_json(Call::Update(dog)).await
    }

    async fn delete_dog(&self, id: u32) -> ApiResult<()> {
        // Response body is ignored
        self.send(Call::Delete(id)).await?;
        Ok(())
    }
}
