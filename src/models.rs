//! Frontend Models
//!
//! Data structures matching the dog API's JSON payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// Dog record as stored and returned by the server.
///
/// Only `id` is required. Missing or `null` text fields decode as empty
/// so one incomplete record cannot sink the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dog {
    pub id: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    pub dog_type: String,
    #[serde(rename = "favFood", default, deserialize_with = "null_as_empty")]
    pub fav_food: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// User-editable fields shared by the create and edit forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Type,
    FavFood,
    Description,
}

impl DraftField {
    /// Form order
    pub const ALL: [DraftField; 4] = [
        DraftField::Name,
        DraftField::Type,
        DraftField::FavFood,
        DraftField::Description,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DraftField::Name => "Name:",
            DraftField::Type => "Type:",
            DraftField::FavFood => "Fav Food:",
            DraftField::Description => "Description:",
        }
    }

    /// Description gets a textarea, everything else a single-line input
    pub fn is_multiline(self) -> bool {
        matches!(self, DraftField::Description)
    }
}

/// Anything a dog form can display and edit.
///
/// Edits never mutate in place: each change produces a whole new value.
pub trait DraftFields: Sized {
    fn field(&self, field: DraftField) -> &str;
    fn with_field(self, field: DraftField, value: String) -> Self;
}

/// Unsaved create-form state. The image is attached at submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DogDraft {
    pub name: String,
    pub dog_type: String,
    pub fav_food: String,
    pub description: String,
}

impl DogDraft {
    /// Convert into the POST body once the random image is known
    pub fn into_new_dog(self, image: String) -> NewDog {
        NewDog {
            image,
            name: self.name,
            dog_type: self.dog_type,
            fav_food: self.fav_food,
            description: self.description,
        }
    }
}

impl DraftFields for DogDraft {
    fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Type => &self.dog_type,
            DraftField::FavFood => &self.fav_food,
            DraftField::Description => &self.description,
        }
    }

    fn with_field(self, field: DraftField, value: String) -> Self {
        match field {
            DraftField::Name => Self { name: value, ..self },
            DraftField::Type => Self { dog_type: value, ..self },
            DraftField::FavFood => Self { fav_food: value, ..self },
            DraftField::Description => Self { description: value, ..self },
        }
    }
}

impl DraftFields for Dog {
    fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Type => &self.dog_type,
            DraftField::FavFood => &self.fav_food,
            DraftField::Description => &self.description,
        }
    }

    fn with_field(self, field: DraftField, value: String) -> Self {
        match field {
            DraftField::Name => Self { name: value, ..self },
            DraftField::Type => Self { dog_type: value, ..self },
            DraftField::FavFood => Self { fav_food: value, ..self },
            DraftField::Description => Self { description: value, ..self },
        }
    }
}

/// Create request body (draft + image, no id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewDog {
    pub image: String,
    pub name: String,
    #[serde(rename = "type")]
    pub dog_type: String,
    #[serde(rename = "favFood")]
    pub fav_food: String,
    pub description: String,
}

/// Response of the random image service
#[derive(Debug, Clone, Deserialize)]
pub struct RandomImage {
    pub url: String,
}
