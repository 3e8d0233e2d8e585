//! Dog Form Fields Component
//!
//! The four editable inputs shared by the create and edit modals.

use leptos::prelude::*;

use crate::models::DraftField;

#[component]
pub fn DogFormFields(
    /// Current value of a field
    #[prop(into)] value: Callback<DraftField, String>,
    /// Called with the new value on every keystroke
    #[prop(into)] on_change: Callback<(DraftField, String)>,
) -> impl IntoView {
    DraftField::ALL.into_iter().map(|field| {
        let input = if field.is_multiline() {
            view! {
                <textarea
                    prop:value=move || value.run(field)
                    on:input=move |ev| on_change.run((field, event_target_value(&ev)))
                />
            }.into_any()
        } else {
            view! {
                <input
                    type="text"
                    prop:value=move || value.run(field)
                    on:input=move |ev| on_change.run((field, event_target_value(&ev)))
                />
            }.into_any()
        };
        view! {
            <div class="form-group">
                <label>{field.label()}</label>
                {input}
            </div>
        }
    }).collect_view()
}
