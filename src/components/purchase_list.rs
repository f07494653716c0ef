//! Purchase List Component
//!
//! Purchase cards with a short terms preview plus the "create" card.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Purchase;
use crate::state::{Action, AppStateStoreFields, Modal};
use crate::text::{preview, CARD_PREVIEW_LIMIT};

#[component]
pub fn PurchaseList() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let purchases = Memo::new(move |_| store.purchases().get());

    view! {
        <div class="list">
            {move || {
                purchases
                    .get()
                    .into_iter()
                    .map(|purchase| view! { <PurchaseCard purchase=purchase /> })
                    .collect_view()
            }}
            <button
                type="button"
                class="card create-card"
                disabled=move || store.busy().get()
                on:click=move |_| ctx.apply(Action::OpenModal(Modal::NewPurchase))
            >
                <div class="create-card__icon">"＋"</div>
                <div class="create-card__text">"Создать новую закупку"</div>
            </button>
        </div>
    }
}

/// Selectable purchase card
#[component]
fn PurchaseCard(purchase: Purchase) -> impl IntoView {
    let ctx = use_app_context();
    let id = purchase.id;
    let is_active = move || ctx.store.selected_purchase_id().get() == Some(id);
    let summary = (!purchase.terms().is_empty()).then(|| preview(purchase.terms(), CARD_PREVIEW_LIMIT));

    view! {
        <div
            class=move || if is_active() { "card purchase-card active" } else { "card purchase-card" }
            on:click=move |_| ctx.apply(Action::SelectPurchase(id))
        >
            <h3>{purchase.title().to_string()}</h3>
            {summary.map(|text| view! { <p class="muted">{text}</p> })}
        </div>
    }
}
