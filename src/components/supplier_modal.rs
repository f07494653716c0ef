//! Supplier and Contact Modals

use leptos::prelude::*;

use crate::components::{ModalActions, ModalFrame};
use crate::context::use_app_context;
use crate::state::{AppStateStoreFields, FormEdit, Modal};

/// New supplier with any number of contact drafts
#[component]
pub fn SupplierModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let form = store.supplier_form();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = form.get_untracked();
        ctx.spawn(move |ctl| async move { ctl.create_supplier(&form).await });
    };

    let draft_count = Memo::new(move |_| form.with(|f| f.contacts.len()));

    let contact_block = move |idx: usize| {
        view! {
            <div class="contact-block">
                <div class="stack contact-block__header">
                    <div class="muted bold">{format!("Контакт {}", idx + 1)}</div>
                    <Show when=move || (draft_count.get() > 1)>
                        <button
                            type="button"
                            class="linkish"
                            on:click=move |_| ctx.edit(FormEdit::RemoveSupplierContact(idx))
                        >
                            "Удалить"
                        </button>
                    </Show>
                </div>
                <label>"Email"</label>
                <input
                    type="email"
                    placeholder="sales@example.com"
                    required=idx == 0
                    prop:value=move || form.with(|f| f.contacts.get(idx).map(|c| c.email.clone()).unwrap_or_default())
                    on:input=move |ev| ctx.edit(FormEdit::SupplierContactEmail(idx, event_target_value(&ev)))
                />
            </div>
        }
    };

    view! {
        <Show when=move || store.modal().get() == Some(Modal::NewSupplier)>
            <ModalFrame title="Новый поставщик" wide=true>
                <form class="stack column" on:submit=on_submit>
                    <label>"Название компании"</label>
                    <input
                        placeholder="Например, Feron"
                        prop:value=move || form.with(|f| f.company_name.clone())
                        on:input=move |ev| ctx.edit(FormEdit::SupplierCompany(event_target_value(&ev)))
                    />
                    <label>"Сайт"</label>
                    <input
                        placeholder="https://example.com"
                        prop:value=move || form.with(|f| f.website_url.clone())
                        on:input=move |ev| ctx.edit(FormEdit::SupplierWebsite(event_target_value(&ev)))
                    />
                    <label>"Комментарий (необязательно)"</label>
                    <textarea
                        rows=2
                        placeholder="Почему этот поставщик релевантен"
                        prop:value=move || form.with(|f| f.reason.clone())
                        on:input=move |ev| ctx.edit(FormEdit::SupplierReason(event_target_value(&ev)))
                    />

                    <div class="section-title">"Контакты"</div>
                    {move || (0..draft_count.get()).map(contact_block).collect_view()}
                    <button
                        type="button"
                        class="secondary"
                        on:click=move |_| ctx.edit(FormEdit::AddSupplierContact)
                    >
                        "Еще один контакт"
                    </button>

                    <ModalActions submit_label="Сохранить поставщика" />
                </form>
            </ModalFrame>
        </Show>
    }
}

/// Add a contact to an existing supplier
#[component]
pub fn ContactModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let form = store.contact_form();

    let supplier_id = move || match store.modal().get() {
        Some(Modal::NewContact(id)) => Some(id),
        _ => None,
    };
    let supplier_name = move || {
        let id = supplier_id()?;
        store
            .suppliers()
            .with(|list| list.iter().find(|s| s.id == id).map(|s| s.display_name().to_string()))
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = store.modal().with_untracked(|m| match m {
            Some(Modal::NewContact(id)) => Some(*id),
            _ => None,
        }) else {
            return;
        };
        let form = form.get_untracked();
        ctx.spawn(move |ctl| async move { ctl.create_contact(id, &form).await });
    };

    view! {
        <Show when=move || supplier_id().is_some()>
            <ModalFrame title="Новый контакт">
                <p class="muted">{supplier_name}</p>
                <form class="stack column" on:submit=on_submit>
                    <label>"Email"</label>
                    <input
                        type="email"
                        required
                        placeholder="sales@example.com"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| ctx.edit(FormEdit::ContactEmail(event_target_value(&ev)))
                    />
                    <label>"Источник (необязательно)"</label>
                    <input
                        type="url"
                        placeholder="https://example.com/contacts"
                        prop:value=move || form.with(|f| f.source_url.clone())
                        on:input=move |ev| ctx.edit(FormEdit::ContactSourceUrl(event_target_value(&ev)))
                    />
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.is_selected_for_request)
                            on:change=move |ev| ctx.edit(FormEdit::ContactSelected(event_target_checked(&ev)))
                        />
                        "Для рассылки"
                    </label>
                    <ModalActions submit_label="Добавить контакт" />
                </form>
            </ModalFrame>
        </Show>
    }
}
