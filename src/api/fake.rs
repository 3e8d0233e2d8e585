//! In-memory DogApi for tests

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::DogApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{Dog, NewDog};

/// Recorded request, in call order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    RandomImage,
    Create(NewDog),
    Get(u32),
    Update(Dog),
    Delete(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    List,
    RandomImage,
    Create,
    Get,
    Update,
    Delete,
}

pub struct FakeDogApi {
    dogs: RefCell<Vec<Dog>>,
    image: String,
    next_id: Cell<u32>,
    failing: Vec<Op>,
    calls: RefCell<Vec<Call>>,
}

impl FakeDogApi {
    pub fn new(dogs: Vec<Dog>) -> Self {
        let next_id = dogs.iter().map(|d| d.id).max().unwrap_or(0) + 1;
        Self {
            dogs: RefCell::new(dogs),
            image: "https://random.dog/fake.jpg".to_string(),
            next_id: Cell::new(next_id),
            failing: Vec::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_image(mut self, url: &str) -> Self {
        self.image = url.to_string();
        self
    }

    pub fn with_next_id(self, id: u32) -> Self {
        self.next_id.set(id);
        self
    }

    /// Make `op` fail with a network error
    pub fn failing(mut self, op: Op) -> Self {
        self.failing.push(op);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn server_dogs(&self) -> Vec<Dog> {
        self.dogs.borrow().clone()
    }

    fn record(&self, call: Call, op: Op) -> ApiResult<()> {
        self.calls.borrow_mut().push(call);
        if self.failing.contains(&op) {
            return Err(ApiError::Network("simulated failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl DogApi for FakeDogApi {
    async fn list_dogs(&self) -> ApiResult<Vec<Dog>> {
        self.record(Call::List, Op::List)?;
        Ok(self.server_dogs())
    }

    async fn random_image(&self) -> ApiResult<String> {
        self.record(Call::RandomImage, Op::RandomImage)?;
        Ok(self.image.clone())
    }

    async fn create_dog(&self, dog: &NewDog) -> ApiResult<Dog> {
        self.record(Call::Create(dog.clone()), Op::Create)?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let created = Dog {
            id,
            image: dog.image.clone(),
            name: dog.name.clone(),
            dog_type: dog.dog_type.clone(),
            fav_food: dog.fav_food.clone(),
            description: dog.description.clone(),
        };
        self.dogs.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn get_dog(&self, id: u32) -> ApiResult<Dog> {
        self.record(Call::Get(id), Op::Get)?;
        self.dogs
            .borrow()
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn update_dog(&self, dog: &Dog) -> ApiResult<Dog> {
        self.record(Call::Update(dog.clone()), Op::Update)?;
        let mut dogs = self.dogs.borrow_mut();
        let existing = dogs
            .iter_mut()
            .find(|d| d.id == dog.id)
            .ok_or(ApiError::NotFound)?;
        *existing = dog.clone();
        Ok(dog.clone())
    }

    async fn delete_dog(&self, id: u32) -> ApiResult<()> {
        self.record(Call::Delete(id), Op::Delete)?;
        self.dogs.borrow_mut().retain(|d| d.id != id);
        Ok(())
    }
}

/// Test fixture with predictable field values
pub fn dog(id: u32) -> Dog {
    Dog {
        id,
        image: format!("https://random.dog/{}.jpg", id),
        name: format!("Dog {}", id),
        dog_type: "Mixed".to_string(),
        fav_food: "Kibble".to_string(),
        description: format!("Good dog number {}", id),
    }
}
