//! 落地页（仅访客）

use leptos::prelude::*;

use crate::web::router::use_navigate;

#[component]
pub fn LandingPage() -> impl IntoView {
    let navigate = use_navigate();
    let go_login = {
        let navigate = navigate.clone();
        move |_| navigate("/login")
    };
    let go_register = move |_| navigate("/register");

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md">
                    <h1 class="text-5xl font-bold">"UniColab"</h1>
                    <p class="py-6">
                        "Encuentra estudiantes con los que colaborar y comparte tu tiempo."
                    </p>
                    <div class="flex gap-4 justify-center">
                        <button class="btn btn-primary" on:click=go_login>
                            "Inicia sesión"
                        </button>
                        <button class="btn btn-outline" on:click=go_register>
                            "Regístrate"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
