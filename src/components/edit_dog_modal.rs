//! Edit Dog Modal Component

use leptos::prelude::*;

use crate::components::DogFormFields;
use crate::models::{DraftField, DraftFields};
use crate::store::{store_set_edit_field, use_dog_store, DogListStateStoreFields};

/// Edit form, open while the store holds an edit draft
#[component]
pub fn EditDogModal(
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let store = use_dog_store();

    let value = Callback::new(move |field: DraftField| {
        store.editing().with(|editing| {
            editing.as_ref().map(|dog| dog.field(field).to_string()).unwrap_or_default()
        })
    });
    let on_change = Callback::new(move |(field, text): (DraftField, String)| {
        store_set_edit_field(&store, field, text);
    });

    view! {
        <Show when=move || store.editing().with(Option::is_some)>
            <div class="modal modal-visible">
                <div class="modal-content">
                    <span class="close" on:click=move |_| on_cancel.run(())>"×"</span>
                    <h2>"Edit Dog"</h2>
                    <form>
                        <DogFormFields value=value on_change=on_change />
                        <button type="button" on:click=move |_| on_submit.run(())>
                            "Update Dog"
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
