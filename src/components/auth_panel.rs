//! Auth Panel Component
//!
//! Login / registration form shown while no session exists.

use leptos::prelude::*;

use crate::context::use_app_context;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthMode {
    Login,
    Register,
}

/// Login and register tabs; registering logs in right after
#[component]
pub fn AuthPanel() -> impl IntoView {
    let ctx = use_app_context();

    let (mode, set_mode) = signal(AuthMode::Login);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_pending.set(true);
        let email = email.get_untracked();
        let password = password.get_untracked();
        let register = mode.get_untracked() == AuthMode::Register;

        ctx.spawn(move |ctl| async move {
            let result = if register {
                ctl.register(&email, &password).await
            } else {
                ctl.login(&email, &password).await
            };
            // on success this panel is already gone
            if let Err(err) = result {
                set_error.set(Some(err.to_string()));
                set_pending.set(false);
            }
        });
    };

    let tab = move |target: AuthMode, label: &'static str| {
        view! {
            <button
                type="button"
                role="tab"
                aria-selected=move || (mode.get() == target).to_string()
                class=move || if mode.get() == target { "auth-tabs__btn active" } else { "auth-tabs__btn" }
                disabled=move || pending.get()
                on:click=move |_| {
                    set_mode.set(target);
                    set_error.set(None);
                }
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="card auth-card">
            <div class="auth-tabs" role="tablist" aria-label="Авторизация">
                {tab(AuthMode::Login, "Вход")}
                {tab(AuthMode::Register, "Регистрация")}
            </div>
            <div class="auth-mode-body">
                {move || error.get().map(|message| view! { <div class="alert">{message}</div> })}
                <form on:submit=on_submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />

                    <div class="stack password-row">
                        <label for="password">"Пароль"</label>
                        <button
                            type="button"
                            class="linkish"
                            disabled=move || pending.get()
                            on:click=move |_| set_show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Скрыть пароль" } else { "Показать пароль" }}
                        </button>
                    </div>
                    <input
                        id="password"
                        type=move || if show_password.get() { "text" } else { "password" }
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <Show when=move || mode.get() == AuthMode::Register>
                        <div id="password-help" class="password-hint">
                            "Пароль от 6 до 72 символов. Используйте буквы и цифры, чтобы обеспечить безопасность."
                        </div>
                    </Show>

                    <button type="submit" class="primary wide" disabled=move || pending.get()>
                        {move || match (pending.get(), mode.get()) {
                            (true, _) => "Пожалуйста, подождите…",
                            (false, AuthMode::Login) => "Войти",
                            (false, AuthMode::Register) => "Зарегистрироваться",
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
