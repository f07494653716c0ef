//! Purchase Details Component
//!
//! Heading, status and НМЦК tags, and the collapsible terms text of the
//! selected purchase.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Purchase;
use crate::state::{Action, AppStateStoreFields, Modal};
use crate::text::{is_longer_than, preview, DETAILS_PREVIEW_LIMIT};

#[component]
pub fn PurchaseDetails() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let selected = Memo::new(move |_| {
        let id = store.selected_purchase_id().get()?;
        store.purchases().with(|list| list.iter().find(|p| p.id == id).cloned())
    });
    let expanded = move || store.details_expanded().get();

    let terms_view = move |purchase: &Purchase| {
        let terms = purchase.terms().to_string();
        let long = is_longer_than(&terms, DETAILS_PREVIEW_LIMIT);
        let shown = move || match (terms.is_empty(), long && !expanded()) {
            (true, _) => "Описание не заполнено".to_string(),
            (false, true) => preview(&terms, DETAILS_PREVIEW_LIMIT),
            (false, false) => terms.clone(),
        };
        view! {
            <p class="muted terms">{shown}</p>
            <Show when=move || long>
                <button type="button" class="linkish" on:click=move |_| ctx.apply(Action::ToggleDetails)>
                    {move || if expanded() { "Свернуть" } else { "Показать полностью" }}
                </button>
            </Show>
        }
    };

    view! {
        {move || selected.get().map(|purchase| view! {
            <div class="card">
                <div class="stack details-header">
                    <div class="stack grow">
                        <h2>{purchase.title().to_string()}</h2>
                        <div class="tag">"Статус: " {purchase.status.clone()}</div>
                    </div>
                    {purchase.nmck_value.map(|value| {
                        let currency = purchase.nmck_currency.clone().unwrap_or_default();
                        view! { <div class="tag nowrap">{format!("НМЦК: {} {}", value, currency)}</div> }
                    })}
                    <button
                        type="button"
                        class="secondary"
                        disabled=move || store.busy().get()
                        on:click=move |_| ctx.apply(Action::OpenModal(Modal::EditPurchase))
                    >
                        "Изменить"
                    </button>
                </div>
                {terms_view(&purchase)}
            </div>
        })}
    }
}
