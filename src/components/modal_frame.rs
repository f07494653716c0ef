//! Modal Frame Component
//!
//! Overlay + dialog box with a title bar and close button.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::state::{Action, AppStateStoreFields};

/// Dialog chrome shared by every form modal
///
/// # Arguments
/// * `title` - Heading shown next to the close button
/// * `wide` - Use the wider dialog layout (supplier form)
#[component]
pub fn ModalFrame(
    #[prop(into)] title: String,
    #[prop(optional)] wide: bool,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="modal-overlay" role="dialog" aria-modal="true">
            <div class=if wide { "modal modal-wide" } else { "modal" }>
                <div class="stack modal-header">
                    <h3>{title}</h3>
                    <button
                        type="button"
                        class="linkish"
                        aria-label="Закрыть"
                        disabled=move || ctx.store.busy().get()
                        on:click=move |_| ctx.apply(Action::CloseModal)
                    >
                        "✕"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}

/// Cancel + submit button row at the bottom of a modal form
#[component]
pub fn ModalActions(#[prop(into)] submit_label: String) -> impl IntoView {
    let ctx = use_app_context();
    let busy = move || ctx.store.busy().get();

    view! {
        <div class="stack modal-actions">
            <button type="button" class="secondary" disabled=busy on:click=move |_| ctx.apply(Action::CloseModal)>
                "Отмена"
            </button>
            <button type="submit" class="primary" disabled=busy>
                {submit_label}
            </button>
        </div>
    }
}
