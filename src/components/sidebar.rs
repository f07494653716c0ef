//! Sidebar Component
//!
//! Product name, signed-in user, backend URL and logout.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::state::AppStateStoreFields;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let email = move || store.session().with(|s| s.as_ref().map(|s| s.email.clone()).unwrap_or_default());

    view! {
        <aside class="sidebar">
            <h1>"zakupAI"</h1>
            <div class="muted sidebar-user">
                {email}
                <br />
                <span class="small">"API: " {ctx.api_url.get_value()}</span>
            </div>
            <button
                class="linkish"
                disabled=move || store.busy().get()
                on:click=move |_| ctx.spawn(|ctl| async move { ctl.logout().await })
            >
                "Выйти"
            </button>
        </aside>
    }
}
