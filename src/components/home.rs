//! 主页（需要认证）
//!
//! 注销按钮清除令牌后不手动导航：
//! 路由服务监听认证信号并自动重定向到登录页。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::CollabApi;
use crate::auth::{clear_token, use_auth};
use crate::web::BrowserTokenStore;
use crate::web::router::use_navigate;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let go_requests = {
        let navigate = navigate.clone();
        move |_| navigate("/collaboration-requests")
    };
    let go_collaborations = move |_| navigate("/collaborations");

    let on_logout = move |_| {
        spawn_local(async move {
            let api = CollabApi::default();
            clear_token(&auth, &BrowserTokenStore, &api).await;
        });
    };

    view! {
        <div class="min-h-screen bg-base-200 p-8">
            <div class="navbar bg-base-100 rounded-box shadow mb-8">
                <div class="flex-1">
                    <span class="text-xl font-bold px-4">"UniColab"</span>
                </div>
                <div class="flex-none">
                    <button class="btn btn-ghost" on:click=on_logout>
                        "Cerrar sesión"
                    </button>
                </div>
            </div>

            <h1 class="text-3xl font-bold mb-6">"Inicio"</h1>
            <div class="flex gap-4">
                <button class="btn btn-primary" on:click=go_requests>
                    "Peticiones de colaboración"
                </button>
                <button class="btn btn-secondary" on:click=go_collaborations>
                    "Colaboraciones"
                </button>
            </div>
        </div>
    }
}
