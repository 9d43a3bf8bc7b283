//! 登录页面
//!
//! 表单校验走验证规则注册表；提交成功后不手动导航，
//! 路由服务监听认证信号翻转并自动重定向到主页。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{CollabApi, Credentials};
use crate::auth::{retrieve_token, use_auth};
use crate::validation::{RuleArgs, validate};
use crate::web::BrowserTokenStore;

/// 表单字段的首个校验错误
fn first_error(email: &str, password: &str) -> Option<String> {
    validate("required", email, &RuleArgs::default())
        .and_then(|_| validate("email", email, &RuleArgs::default()))
        .and_then(|_| validate("required", password, &RuleArgs::default()))
        .err()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        if let Some(message) = first_error(&email.get(), &password.get()) {
            set_error_msg.set(Some(message));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let credentials = Credentials {
            email: email.get(),
            password: password.get(),
        };

        spawn_local(async move {
            let api = CollabApi::default();
            let result = retrieve_token(&auth, &BrowserTokenStore, &api, &credentials).await;

            if let Err(err) = result {
                let message = if err.is_unauthorized() {
                    "Credenciales incorrectas"
                } else {
                    "No se pudo conectar con el servidor"
                };
                set_error_msg.set(Some(message.to_string()));
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Inicia sesión"</h1>
                    <p class="text-base-content/70">
                        "Accede para gestionar tus colaboraciones"
                    </p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Correo electrónico"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="tu@universidad.es"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Contraseña"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Entrando..." }.into_any()
                                } else {
                                    "Entrar".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
