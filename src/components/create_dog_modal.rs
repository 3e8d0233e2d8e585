//! Create Dog Modal Component

use leptos::prelude::*;

use crate::components::DogFormFields;
use crate::models::{DraftField, DraftFields};
use crate::store::{store_set_draft_field, use_dog_store, DogListStateStoreFields};

/// Add-dog form. The image comes from the random image service on submit.
#[component]
pub fn CreateDogModal(
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let store = use_dog_store();

    let value = Callback::new(move |field: DraftField| {
        store.new_dog().with(|draft| draft.field(field).to_string())
    });
    let on_change = Callback::new(move |(field, text): (DraftField, String)| {
        store_set_draft_field(&store, field, text);
    });

    view! {
        <Show when=move || store.create_open().get()>
            <div class="modal">
                <div class="modal-content">
                    <span class="close" on:click=move |_| on_close.run(())>"×"</span>
                    <h2>"Add Dog"</h2>
                    <form>
                        <DogFormFields value=value on_change=on_change />
                        <button type="button" on:click=move |_| on_submit.run(())>
                            "Add Dog"
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
