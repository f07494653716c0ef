//! Purchase Modals
//!
//! Create and edit dialogs for purchases.

use leptos::prelude::*;

use crate::components::{ModalActions, ModalFrame};
use crate::context::use_app_context;
use crate::state::{AppStateStoreFields, FormEdit, Modal};

/// Statuses the backend moves purchases through
const PURCHASE_STATUSES: &[&str] = &["draft", "searching_suppliers", "suppliers_found"];

#[component]
pub fn PurchaseModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let form = store.purchase_form();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = form.get_untracked();
        ctx.spawn(move |ctl| async move { ctl.create_purchase(&form).await });
    };

    view! {
        <Show when=move || store.modal().get() == Some(Modal::NewPurchase)>
            <ModalFrame title="Новая закупка">
                <form class="stack column" on:submit=on_submit>
                    <label>"Название"</label>
                    <input
                        required
                        placeholder="Например, Поставка серверов"
                        prop:value=move || form.with(|f| f.custom_name.clone())
                        on:input=move |ev| ctx.edit(FormEdit::PurchaseName(event_target_value(&ev)))
                    />
                    <label>"Описание / ТЗ"</label>
                    <textarea
                        rows=4
                        required
                        placeholder="Кратко опишите предмет закупки"
                        prop:value=move || form.with(|f| f.terms_text.clone())
                        on:input=move |ev| ctx.edit(FormEdit::PurchaseTerms(event_target_value(&ev)))
                    />
                    <ModalActions submit_label="Создать закупку" />
                </form>
            </ModalFrame>
        </Show>
    }
}

/// Edit name, terms, status and the НМЦК estimate of the selected purchase
#[component]
pub fn PurchaseEditModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let form = store.edit_form();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = form.get_untracked();
        ctx.spawn(move |ctl| async move { ctl.update_purchase(&form).await });
    };

    view! {
        <Show when=move || store.modal().get() == Some(Modal::EditPurchase)>
            <ModalFrame title="Редактирование закупки">
                <form class="stack column" on:submit=on_submit>
                    <label>"Название"</label>
                    <input
                        required
                        prop:value=move || form.with(|f| f.custom_name.clone())
                        on:input=move |ev| ctx.edit(FormEdit::EditName(event_target_value(&ev)))
                    />
                    <label>"Описание / ТЗ"</label>
                    <textarea
                        rows=6
                        prop:value=move || form.with(|f| f.terms_text.clone())
                        on:input=move |ev| ctx.edit(FormEdit::EditTerms(event_target_value(&ev)))
                    />
                    <label>"Статус"</label>
                    <input
                        list="purchase-statuses"
                        prop:value=move || form.with(|f| f.status.clone())
                        on:input=move |ev| ctx.edit(FormEdit::EditStatus(event_target_value(&ev)))
                    />
                    <datalist id="purchase-statuses">
                        {PURCHASE_STATUSES.iter().map(|status| view! { <option value=*status /> }).collect_view()}
                    </datalist>
                    <div class="stack">
                        <div class="grow">
                            <label>"НМЦК"</label>
                            <input
                                inputmode="decimal"
                                placeholder="1 250 000,00"
                                prop:value=move || form.with(|f| f.nmck_value.clone())
                                on:input=move |ev| ctx.edit(FormEdit::EditNmckValue(event_target_value(&ev)))
                            />
                        </div>
                        <div>
                            <label>"Валюта"</label>
                            <input
                                placeholder="RUB"
                                prop:value=move || form.with(|f| f.nmck_currency.clone())
                                on:input=move |ev| ctx.edit(FormEdit::EditNmckCurrency(event_target_value(&ev)))
                            />
                        </div>
                    </div>
                    <ModalActions submit_label="Сохранить" />
                </form>
            </ModalFrame>
        </Show>
    }
}
