//! Success Banner Component

use leptos::prelude::*;

use crate::store::{use_dog_store, DogListStateStoreFields};

/// Transient confirmation after a create or edit
#[component]
pub fn SuccessBanner() -> impl IntoView {
    let store = use_dog_store();

    view! {
        <Show when=move || store.banner().with(|b| b.is_visible())>
            <div class="success-alert">
                <p>{move || store.banner().with(|b| b.message())}</p>
            </div>
        </Show>
    }
}
