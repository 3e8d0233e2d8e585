//! Dog List Actions
//!
//! Each user action is one request chain followed by a store write.
//! Failures are logged and swallowed; the store is only touched on success.

use leptos::prelude::*;

use crate::api::DogApi;
use crate::banner::{BannerToken, SuccessKind};
use crate::error::{ApiError, ApiResult};
use crate::models::{Dog, DogDraft};
use crate::store::{
    store_add_dog, store_close_create, store_finish_edit, store_remove_dog, store_show_banner,
    DogListStateStoreFields, DogStore,
};

fn failure_line(action: &str, err: &ApiError) -> String {
    format!("{} failed: {}", action, err)
}

fn log_failure(action: &str, err: &ApiError) {
    log::error!("{}", failure_line(action, err));
}

/// Initial load. On failure the list stays as it was (empty on mount).
pub async fn load_dogs<A: DogApi + ?Sized>(api: &A, store: &DogStore) {
    match api.list_dogs().await {
        Ok(dogs) => {
            log::info!("Loaded {} dogs", dogs.len());
            store.dogs().set(dogs);
        }
        Err(e) => log_failure("Load dogs", &e),
    }
}

/// Random image first, then the create call. No image, no create.
async fn create_with_random_image<A: DogApi + ?Sized>(api: &A, draft: DogDraft) -> ApiResult<Dog> {
    let image = api.random_image().await?;
    api.create_dog(&draft.into_new_dog(image)).await
}

/// Submit the create form. Returns the banner token on success so the
/// caller can schedule the auto-hide.
pub async fn submit_new_dog<A: DogApi + ?Sized>(api: &A, store: &DogStore) -> Option<BannerToken> {
    let draft = store.new_dog().get_untracked();
    match create_with_random_image(api, draft).await {
        Ok(dog) => {
            log::info!("Created dog {}", dog.id);
            store_add_dog(store, dog);
            store_close_create(store);
            store.new_dog().set(DogDraft::default());
            Some(store_show_banner(store, SuccessKind::Added))
        }
        Err(e) => {
            log_failure("Create dog", &e);
            None
        }
    }
}

/// Fetch the server's copy of `id` and open the edit modal with it.
/// Returns whether the modal opened.
pub async fn begin_edit<A: DogApi + ?Sized>(api: &A, store: &DogStore, id: u32) -> bool {
    match api.get_dog(id).await {
        Ok(dog) => {
            store.editing().set(Some(dog));
            true
        }
        Err(e) => {
            log_failure(&format!("Fetch dog {} for edit", id), &e);
            false
        }
    }
}

/// Send the edit draft. The server's response replaces the local record.
pub async fn submit_edit<A: DogApi + ?Sized>(api: &A, store: &DogStore) -> Option<BannerToken> {
    let draft = store.editing().get_untracked()?;
    match api.update_dog(&draft).await {
        Ok(updated) => {
            log::info!("Updated dog {}", updated.id);
            store_finish_edit(store, updated);
            Some(store_show_banner(store, SuccessKind::Updated))
        }
        Err(e) => {
            log_failure(&format!("Update dog {}", draft.id), &e);
            None
        }
    }
}

/// Delete on the server, then locally. A failed delete leaves the row.
pub async fn delete_dog<A: DogApi + ?Sized>(api: &A, store: &DogStore, id: u32) -> bool {
    match api.delete_dog(id).await {
        Ok(()) => {
            store_remove_dog(store, id);
            true
        }
        Err(e) => {
            log_failure(&format!("Delete dog {}", id), &e);
            false
        }
    }
}
