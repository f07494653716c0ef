//! Message and error banners

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::state::AppStateStoreFields;

#[component]
pub fn Banners() -> impl IntoView {
    let store = use_app_context().store;

    view! {
        {move || store.message().get().map(|message| view! { <div class="alert alert-success">{message}</div> })}
        {move || store.error().get().map(|error| view! { <div class="alert">{error}</div> })}
    }
}
