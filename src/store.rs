//! Dog List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::banner::{Banner, BannerToken, SuccessKind};
use crate::models::{Dog, DogDraft, DraftField, DraftFields};

/// View state for the dog list with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct DogListState {
    /// Local copy of the collection, in server order
    pub dogs: Vec<Dog>,
    /// 1-based page index
    pub current_page: usize,
    /// Create modal visibility
    pub create_open: bool,
    /// Create form draft
    pub new_dog: DogDraft,
    /// Edit draft; `Some` means the edit modal is open
    pub editing: Option<Dog>,
    pub banner: Banner,
}

impl Default for DogListState {
    fn default() -> Self {
        Self {
            dogs: Vec::new(),
            current_page: 1,
            create_open: false,
            new_dog: DogDraft::default(),
            editing: None,
            banner: Banner::default(),
        }
    }
}

/// Type alias for the store
pub type DogStore = Store<DogListState>;

/// Get the dog store from context
pub fn use_dog_store() -> DogStore {
    expect_context::<DogStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a created dog. An id already in the list is replaced instead.
pub fn store_add_dog(store: &DogStore, dog: Dog) {
    let field = store.dogs();
    let mut dogs = field.write();
    match dogs.iter_mut().find(|d| d.id == dog.id) {
        Some(existing) => *existing = dog,
        None => dogs.push(dog),
    }
}

/// Update a dog in the store by ID
pub fn store_update_dog(store: &DogStore, updated_dog: Dog) {
    store.dogs().write().iter_mut()
        .find(|dog| dog.id == updated_dog.id)
        .map(|dog| *dog = updated_dog);
}

/// Remove a dog from the store by ID
pub fn store_remove_dog(store: &DogStore, dog_id: u32) {
    store.dogs().write().retain(|dog| dog.id != dog_id);
}

/// Reset the create draft and reveal the form
pub fn store_open_create(store: &DogStore) {
    store.new_dog().set(DogDraft::default());
    store.create_open().set(true);
}

pub fn store_close_create(store: &DogStore) {
    store.create_open().set(false);
}

/// Replace the create draft with one field changed
pub fn store_set_draft_field(store: &DogStore, field: DraftField, value: String) {
    let draft = store.new_dog().get_untracked();
    store.new_dog().set(draft.with_field(field, value));
}

/// Replace the edit draft with one field changed. No-op when not editing.
pub fn store_set_edit_field(store: &DogStore, field: DraftField, value: String) {
    let Some(dog) = store.editing().get_untracked() else {
        return;
    };
    store.editing().set(Some(dog.with_field(field, value)));
}

/// Apply a successful update. The edit modal closes only if it still
/// shows the record that was saved.
pub fn store_finish_edit(store: &DogStore, updated: Dog) {
    let still_editing = store
        .editing()
        .with_untracked(|editing| editing.as_ref().map(|d| d.id) == Some(updated.id));
    store_update_dog(store, updated);
    if still_editing {
        store.editing().set(None);
    }
}

/// Discard the edit draft and close the edit modal
pub fn store_cancel_edit(store: &DogStore) {
    store.editing().set(None);
}

pub fn store_set_page(store: &DogStore, page: usize) {
    store.current_page().set(page);
}

pub fn store_show_banner(store: &DogStore, kind: SuccessKind) -> BannerToken {
    let token = store.banner().write().show(kind);
    token
}

pub fn store_expire_banner(store: &DogStore, token: BannerToken) {
    let expired = store.banner().write().expire(token);
    if expired {
        log::debug!("success banner hidden");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::dog;

    fn new_store(dogs: Vec<Dog>) -> (Owner, DogStore) {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(DogListState {
            dogs,
            ..DogListState::default()
        });
        (owner, store)
    }

    fn ids(store: &DogStore) -> Vec<u32> {
        store.dogs().with_untracked(|dogs| dogs.iter().map(|d| d.id).collect())
    }

    #[test]
    fn test_default_state() {
        let state = DogListState::default();
        assert_eq!(state.current_page, 1);
        assert!(state.dogs.is_empty());
        assert!(!state.create_open);
        assert!(state.editing.is_none());
        assert!(!state.banner.is_visible());
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let (_owner, store) = new_store(vec![dog(1), dog(2), dog(3)]);
        store_remove_dog(&store, 2);
        assert_eq!(ids(&store), vec![1, 3]);
        store_remove_dog(&store, 42);
        assert_eq!(ids(&store), vec![1, 3]);
    }

    #[test]
    fn test_add_dog_keeps_ids_unique() {
        let (_owner, store) = new_store(vec![dog(1)]);
        store_add_dog(&store, dog(2));
        let mut renamed = dog(1);
        renamed.name = "Again".to_string();
        store_add_dog(&store, renamed);
        assert_eq!(ids(&store), vec![1, 2]);
        assert_eq!(store.dogs().with_untracked(|d| d[0].name.clone()), "Again");
    }

    #[test]
    fn test_update_replaces_by_id() {
        let (_owner, store) = new_store(vec![dog(1), dog(2)]);
        let mut updated = dog(2);
        updated.name = "Rex".to_string();
        store_update_dog(&store, updated.clone());
        assert_eq!(store.dogs().get_untracked(), vec![dog(1), updated]);
    }

    #[test]
    fn test_update_unknown_id_is_ignored() {
        let (_owner, store) = new_store(vec![dog(1)]);
        store_update_dog(&store, dog(5));
        assert_eq!(store.dogs().get_untracked(), vec![dog(1)]);
    }

    #[test]
    fn test_open_create_resets_draft() {
        let (_owner, store) = new_store(Vec::new());
        store_set_draft_field(&store, DraftField::Name, "Half typed".to_string());
        store_open_create(&store);
        assert!(store.create_open().get_untracked());
        assert_eq!(store.new_dog().get_untracked(), DogDraft::default());
    }

    #[test]
    fn test_close_create_keeps_draft() {
        let (_owner, store) = new_store(Vec::new());
        store_open_create(&store);
        store_set_draft_field(&store, DraftField::Type, "Husky".to_string());
        store_close_create(&store);
        assert!(!store.create_open().get_untracked());
        assert_eq!(store.new_dog().get_untracked().dog_type, "Husky");
    }

    #[test]
    fn test_edit_field_without_draft_is_noop() {
        let (_owner, store) = new_store(vec![dog(1)]);
        store_set_edit_field(&store, DraftField::Name, "Ghost".to_string());
        assert!(store.editing().get_untracked().is_none());
    }

    #[test]
    fn test_cancel_edit_leaves_list_alone() {
        let (_owner, store) = new_store(vec![dog(1)]);
        store.editing().set(Some(dog(1)));
        store_set_edit_field(&store, DraftField::Name, "Changed".to_string());
        store_cancel_edit(&store);
        assert!(store.editing().get_untracked().is_none());
        assert_eq!(store.dogs().get_untracked(), vec![dog(1)]);
    }

    #[test]
    fn test_finish_edit_closes_matching_draft() {
        let (_owner, store) = new_store(vec![dog(1), dog(3)]);
        store.editing().set(Some(dog(3)));
        let mut updated = dog(3);
        updated.name = "Rex".to_string();
        store_finish_edit(&store, updated.clone());
        assert!(store.editing().get_untracked().is_none());
        assert_eq!(store.dogs().get_untracked(), vec![dog(1), updated]);
    }

    #[test]
    fn test_late_update_keeps_other_draft_open() {
        let (_owner, store) = new_store(vec![dog(1), dog(3)]);
        // Edit of 3 was cancelled and 1 opened while the update was in flight
        let other = dog(1).with_field(DraftField::Name, "Half typed".to_string());
        store.editing().set(Some(other.clone()));

        let mut updated = dog(3);
        updated.name = "Rex".to_string();
        store_finish_edit(&store, updated.clone());

        assert_eq!(store.editing().get_untracked(), Some(other));
        assert_eq!(store.dogs().get_untracked(), vec![dog(1), updated]);
    }

    #[test]
    fn test_page_not_clamped_after_shrink() {
        let (_owner, store) = new_store((1..=6).map(dog).collect());
        store_set_page(&store, 2);
        store_remove_dog(&store, 6);
        assert_eq!(store.current_page().get_untracked(), 2);
    }

    #[test]
    fn test_banner_helpers() {
        let (_owner, store) = new_store(Vec::new());
        let first = store_show_banner(&store, SuccessKind::Added);
        let second = store_show_banner(&store, SuccessKind::Updated);
        store_expire_banner(&store, first);
        assert!(store.banner().get_untracked().is_visible());
        store_expire_banner(&store, second);
        assert!(!store.banner().get_untracked().is_visible());
    }
}
