//! Joyful Dogs Frontend App
//!
//! Root shell: provides configuration and mounts the dog list.

use leptos::prelude::*;

use crate::components::DogList;
use crate::config::ApiConfig;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_build_env();
    log::debug!("Dog API list endpoint: {}", config.list_url);

    // Provide context to all children
    provide_context(AppContext::new(config));

    view! {
        <div class="App">
            <DogList />
        </div>
    }
}
