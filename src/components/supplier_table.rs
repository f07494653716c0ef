//! Supplier Table Component
//!
//! Suppliers of the selected purchase with their contacts as selectable rows.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;

use crate::components::{ContactModal, SupplierModal};
use crate::context::use_app_context;
use crate::models::{Contact, Supplier};
use crate::selection::RowKey;
use crate::state::{Action, AppStateStoreFields, Modal};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["navigator", "clipboard"], js_name = writeText)]
    async fn write_clipboard_text(text: &str) -> Result<JsValue, JsValue>;
}

/// "Поставщики" card: refresh, bulk selection, table and its dialogs
#[component]
pub fn SupplierSection() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let busy = move || store.busy().get();

    let suppliers = Memo::new(move |_| store.suppliers().get());
    let contacts = Memo::new(move |_| store.contacts_by_supplier().get());
    let all_rows_selected = Memo::new(move |_| store.with(|state| state.all_rows_selected()));
    let toggle_all = move || ctx.apply(Action::ToggleAllRows);

    view! {
        <div class="card">
            <div class="stack section-header">
                <h3>"Поставщики"</h3>
                <button
                    class="secondary"
                    disabled=busy
                    on:click=move |_| ctx.spawn(|ctl| async move { ctl.refresh_suppliers().await })
                >
                    "Обновить"
                </button>
            </div>
            <div class="supplier-table-wrapper">
                <div class="stack table-toolbar">
                    <button type="button" class="secondary" on:click=move |_| toggle_all()>
                        {move || if all_rows_selected.get() { "Снять отметки" } else { "Отметить всех" }}
                    </button>
                </div>
                <table class="table supplier-table">
                    <thead>
                        <tr>
                            <th class="col-check">
                                <input
                                    type="checkbox"
                                    prop:checked=move || all_rows_selected.get()
                                    on:change=move |_| toggle_all()
                                />
                            </th>
                            <th class="col-name">"Поставщик / email"</th>
                            <th class="col-source">"Источник"</th>
                            <th class="col-reason">"Комментарий"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let contacts = contacts.get();
                            suppliers
                                .get()
                                .into_iter()
                                .map(|supplier| {
                                    let rows = contacts.get(&supplier.id).cloned().unwrap_or_default();
                                    view! { <SupplierRows supplier=supplier contacts=rows /> }
                                })
                                .collect_view()
                        }}
                        <tr class="add-supplier-row">
                            <td></td>
                            <td colspan="3">
                                <button
                                    type="button"
                                    class="linkish"
                                    on:click=move |_| ctx.apply(Action::OpenModal(Modal::NewSupplier))
                                >
                                    "+ Добавить поставщика вручную"
                                </button>
                            </td>
                        </tr>
                    </tbody>
                </table>
            </div>
        </div>
        <SupplierModal />
        <ContactModal />
    }
}

/// One supplier row followed by a row per contact
#[component]
fn SupplierRows(supplier: Supplier, contacts: Vec<Contact>) -> impl IntoView {
    let ctx = use_app_context();
    let supplier_id = supplier.id;
    let website = supplier.website_url.clone().filter(|url| !url.trim().is_empty());

    view! {
        <tr class="supplier-row">
            <td></td>
            <td>
                <div class="supplier-name">{supplier.display_name().to_string()}</div>
                {website.map(|url| view! {
                    <a href=url.clone() target="_blank" rel="noreferrer" class="muted">{url.clone()}</a>
                })}
                <button
                    type="button"
                    class="linkish small"
                    on:click=move |_| ctx.apply(Action::OpenModal(Modal::NewContact(supplier_id)))
                >
                    "+ контакт"
                </button>
            </td>
            <td class="muted">"—"</td>
            <td class="muted">{supplier.reason_label().to_string()}</td>
        </tr>
        {contacts.into_iter().map(|contact| view! { <ContactRow contact=contact /> }).collect_view()}
    }
}

#[component]
fn ContactRow(contact: Contact) -> impl IntoView {
    let ctx = use_app_context();
    let key = RowKey::Contact(contact.id);
    let email = contact.email.clone();

    let copy_email = move |_: leptos::ev::MouseEvent| {
        let email = email.clone();
        spawn_local(async move {
            if let Err(err) = write_clipboard_text(&email).await {
                tracing::warn!(error = ?err, "clipboard write failed");
            }
        });
    };

    view! {
        <tr class="contact-row" id=key.to_string()>
            <td>
                <input
                    type="checkbox"
                    prop:checked=move || ctx.store.selected_rows().with(|selected| selected.contains(&key))
                    on:change=move |_| ctx.apply(Action::ToggleRow(key))
                />
            </td>
            <td>
                <div class="contact-email-row">
                    <div class="contact-email">{contact.email.clone()}</div>
                    <button type="button" class="copy-btn" aria-label="Скопировать email" on:click=copy_email>
                        "📋"
                    </button>
                </div>
                {contact.is_selected_for_request.then(|| view! { <span class="tag">"Для рассылки"</span> })}
            </td>
            <td class="muted">{contact.source_label()}</td>
            <td class="muted"></td>
        </tr>
    }
}
