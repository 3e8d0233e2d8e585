//! Dog List View
//!
//! Owns the list store and wires every user action to its request chain.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::banner::{BannerToken, BANNER_DURATION_MS};
use crate::components::{CreateDogModal, DogTable, EditDogModal, PaginationBar, SuccessBanner};
use crate::context::use_app_context;
use crate::store::{
    store_cancel_edit, store_close_create, store_expire_banner, store_open_create, DogListState,
    DogStore,
};

#[component]
pub fn DogList() -> impl IntoView {
    let ctx = use_app_context();
    let store: DogStore = Store::new(DogListState::default());
    provide_context(store);

    // Pending auto-hide. Replacing or dropping the Timeout cancels it.
    let hide_timer = StoredValue::new_local(None::<Timeout>);
    on_cleanup(move || {
        hide_timer.try_update_value(|timer| timer.take());
    });

    let schedule_banner_hide = move |token: BannerToken| {
        let timeout = Timeout::new(BANNER_DURATION_MS, move || store_expire_banner(&store, token));
        hide_timer.set_value(Some(timeout));
    };

    // Load once on mount
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            actions::load_dogs(&api, &store).await;
        });
    });

    let on_open_create = move |_| store_open_create(&store);

    let on_close_create = Callback::new(move |_: ()| store_close_create(&store));

    let on_submit_create = Callback::new(move |_: ()| {
        let api = ctx.api();
        spawn_local(async move {
            if let Some(token) = actions::submit_new_dog(&api, &store).await {
                schedule_banner_hide(token);
            }
        });
    });

    let on_edit = Callback::new(move |id: u32| {
        let api = ctx.api();
        spawn_local(async move {
            actions::begin_edit(&api, &store, id).await;
        });
    });

    let on_submit_edit = Callback::new(move |_: ()| {
        let api = ctx.api();
        spawn_local(async move {
            if let Some(token) = actions::submit_edit(&api, &store).await {
                schedule_banner_hide(token);
            }
        });
    });

    let on_cancel_edit = Callback::new(move |_: ()| store_cancel_edit(&store));

    let on_delete = Callback::new(move |id: u32| {
        let api = ctx.api();
        spawn_local(async move {
            actions::delete_dog(&api, &store, id).await;
        });
    });

    view! {
        <div>
            <h1>"Joyful Dog List"</h1>
            <button on:click=on_open_create>"Add Dog"</button>

            <SuccessBanner />

            <CreateDogModal on_submit=on_submit_create on_close=on_close_create />
            <EditDogModal on_submit=on_submit_edit on_cancel=on_cancel_edit />

            <DogTable on_edit=on_edit on_delete=on_delete />
            <PaginationBar />
        </div>
    }
}
