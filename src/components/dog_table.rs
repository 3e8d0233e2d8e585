//! Dog Table Component
//!
//! Current page of dogs with per-row edit and delete.

use leptos::prelude::*;

use crate::models::Dog;
use crate::pagination::{page_offset, page_slice};
use crate::store::{use_dog_store, DogListStateStoreFields};

#[component]
pub fn DogTable(
    #[prop(into)] on_edit: Callback<u32>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let store = use_dog_store();

    // (row number, dog) for the visible page
    let rows = Memo::new(move |_| {
        let page = store.current_page().get();
        let offset = page_offset(page);
        store.dogs().with(|dogs| {
            page_slice(dogs, page)
                .iter()
                .cloned()
                .enumerate()
                .map(|(i, dog)| (offset + i + 1, dog))
                .collect::<Vec<(usize, Dog)>>()
        })
    });

    view! {
        <table>
            <thead>
                <tr>
                    <th>"#"</th>
                    <th>"Image"</th>
                    <th>"Name"</th>
                    <th>"Type"</th>
                    <th>"Fav Food"</th>
                    <th>"Description"</th>
                    <th>"Action"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || rows.get()
                    key=|row| row.clone()
                    children=move |(number, dog)| {
                        let id = dog.id;
                        view! {
                            <tr>
                                <td>{number}</td>
                                <td>
                                    <img
                                        src=dog.image
                                        alt=dog.name.clone()
                                        style="max-width: 100px; max-height: 100px;"
                                    />
                                </td>
                                <td>{dog.name}</td>
                                <td>{dog.dog_type}</td>
                                <td>{dog.fav_food}</td>
                                <td>{dog.description}</td>
                                <td>
                                    <button on:click=move |_| on_edit.run(id)>"Edit"</button>
                                    <button on:click=move |_| on_delete.run(id)>"Delete"</button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
