//! Email Log Component
//!
//! Messages stored for the selected purchase, newest last.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::EmailMessage;
use crate::state::AppStateStoreFields;

#[component]
pub fn EmailLog() -> impl IntoView {
    let store = use_app_context().store;
    let emails = Memo::new(move |_| store.emails().get());

    view! {
        <div class="card">
            <h3>"Журнал писем"</h3>
            {move || {
                let emails = emails.get();
                if emails.is_empty() {
                    view! { <p class="muted">"Писем пока нет"</p> }.into_any()
                } else {
                    view! {
                        <div class="list">
                            {emails.into_iter().map(|email| view! { <EmailEntry email=email /> }).collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn EmailEntry(email: EmailMessage) -> impl IntoView {
    let direction = if email.direction == "outgoing" { "Исходящее" } else { "Входящее" };
    let price = email
        .price_value
        .map(|value| format!("{} {}", value, email.currency.clone().unwrap_or_default()));

    view! {
        <div class="email-entry">
            <div class="stack email-entry__header">
                <span class="tag">{direction}</span>
                <strong>{email.subject}</strong>
                {price.map(|price| view! { <span class="tag">{price}</span> })}
                <span class="muted small">{email.created_at.unwrap_or_default()}</span>
            </div>
            <pre class="email-body">{email.body}</pre>
        </div>
    }
}
