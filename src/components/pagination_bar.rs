//! Pagination Bar Component

use leptos::prelude::*;

use crate::pagination::page_count;
use crate::store::{store_set_page, use_dog_store, DogListStateStoreFields};

/// One numbered button per page
#[component]
pub fn PaginationBar() -> impl IntoView {
    let store = use_dog_store();
    let pages = Memo::new(move |_| store.dogs().with(|dogs| page_count(dogs.len())));

    view! {
        <div class="pagination">
            {move || (1..=pages.get()).map(|page| {
                let is_current = move || store.current_page().get() == page;
                view! {
                    <button
                        class=move || if is_current() { "page-btn active" } else { "page-btn" }
                        on:click=move |_| store_set_page(&store, page)
                    >
                        {page}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
