//! Preparation Panel Component
//!
//! Search hints form, the search task card and the generated email draft.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{EmailDraft, SearchTaskState};
use crate::state::{AppStateStoreFields, FormEdit};

#[component]
pub fn PreparationPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let busy = move || store.busy().get();
    let search_task = Memo::new(move |_| store.search_task().get());
    let email_draft = Memo::new(move |_| store.email_draft().get());

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let hints = store.search_hints().get_untracked();
        ctx.spawn(move |ctl| async move { ctl.run_search(&hints).await });
    };

    view! {
        <div class="card">
            <div class="stack section-header">
                <h3>"Подготовка"</h3>
                <button
                    class="secondary"
                    disabled=busy
                    on:click=move |_| ctx.spawn(|ctl| async move { ctl.generate_draft().await })
                >
                    "Сгенерировать письмо"
                </button>
            </div>

            <form class="search-form" on:submit=on_search>
                <label>"Подсказки для поиска поставщиков"</label>
                <textarea
                    rows=2
                    placeholder="Введите ключевые слова, бренды или города"
                    prop:value=move || store.search_hints().get()
                    on:input=move |ev| ctx.edit(FormEdit::SearchHints(event_target_value(&ev)))
                />
                <button type="submit" class="primary" disabled=busy>
                    "Построить план поиска"
                </button>
            </form>

            {move || search_task.get().map(|task| view! { <SearchTaskCard task=task /> })}
            {move || email_draft.get().map(|draft| view! { <DraftCard draft=draft /> })}
        </div>
    }
}

/// Task id + status, excerpt, planned queries and note
#[component]
fn SearchTaskCard(task: SearchTaskState) -> impl IntoView {
    let excerpt = task.tech_task_excerpt.clone().filter(|text| !text.is_empty());
    let queries = task.queries().to_vec();

    view! {
        <div class="card search-card">
            <h4>"Автопоиск поставщиков"</h4>
            <div class="tag">{format!("Задача #{}: {}", task.task_id, task.status)}</div>
            {excerpt.map(|text| view! { <p class="muted">{text}</p> })}
            {if queries.is_empty() {
                view! { <p class="muted">"Поисковая задача выполняется или ожидает в очереди."</p> }.into_any()
            } else {
                view! { <ul>{queries.into_iter().map(|query| view! { <li>{query}</li> }).collect_view()}</ul> }
                    .into_any()
            }}
            <p class="muted">{task.note.clone().unwrap_or_default()}</p>
        </div>
    }
}

/// Generated email with a button to store it in the email log
#[component]
fn DraftCard(draft: EmailDraft) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="card draft-card">
            <div class="stack section-header">
                <h4>"Черновик письма"</h4>
                <button
                    type="button"
                    class="secondary"
                    disabled=move || ctx.store.busy().get()
                    on:click=move |_| ctx.spawn(|ctl| async move { ctl.save_draft().await })
                >
                    "Сохранить в журнал"
                </button>
            </div>
            <div class="tag">{draft.subject}</div>
            <pre class="draft-body">{draft.body}</pre>
        </div>
    }
}
