//! 注册页面
//!
//! 使用验证规则注册表做字段校验（required / email / min），
//! 注册成功后导航到登录页。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{CollabApi, RegisterStudentRequest};
use crate::validation::{RuleArgs, validate};
use crate::web::router::use_navigate;

/// 密码最小长度
const PASSWORD_MIN_LENGTH: usize = 8;

/// 按字段顺序返回首个校验错误
fn first_error(form: &RegisterStudentRequest) -> Option<String> {
    validate("required", &form.email, &RuleArgs::default())
        .and_then(|_| validate("email", &form.email, &RuleArgs::default()))
        .and_then(|_| validate("required", &form.first_name, &RuleArgs::default()))
        .and_then(|_| validate("required", &form.last_name, &RuleArgs::default()))
        .and_then(|_| validate("required", &form.password, &RuleArgs::default()))
        .and_then(|_| {
            validate(
                "min",
                &form.password,
                &RuleArgs::length(PASSWORD_MIN_LENGTH),
            )
        })
        .err()
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let form = RegisterStudentRequest {
            email: email.get(),
            first_name: first_name.get(),
            last_name: last_name.get(),
            password: password.get(),
            description: description.get(),
        };

        if let Some(message) = first_error(&form) {
            set_error_msg.set(Some(message));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            let api = CollabApi::default();
            match api.register_student(&form).await {
                Ok(()) => navigate("/login"),
                Err(_) => {
                    set_error_msg.set(Some("No se pudo completar el registro".to_string()));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Regístrate"</h1>
                    <p class="text-base-content/70">
                        "Crea tu cuenta de estudiante"
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
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="first-name">
                                <span class="label-text">"Nombre"</span>
                            </label>
                            <input
                                id="first-name"
                                type="text"
                                on:input=move |ev| set_first_name.set(event_target_value(&ev))
                                prop:value=first_name
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="last-name">
                                <span class="label-text">"Apellidos"</span>
                            </label>
                            <input
                                id="last-name"
                                type="text"
                                on:input=move |ev| set_last_name.set(event_target_value(&ev))
                                prop:value=last_name
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
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="description">
                                <span class="label-text">"Descripción (opcional)"</span>
                            </label>
                            <textarea
                                id="description"
                                on:input=move |ev| set_description.set(event_target_value(&ev))
                                prop:value=description
                                class="textarea textarea-bordered"
                            ></textarea>
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Creando cuenta..." }.into_any()
                                } else {
                                    "Crear cuenta".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
