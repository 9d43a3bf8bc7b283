//! 协作请求页面：列表 / 新建 / 详情
//!
//! 三个视图都是受保护路由的出口；列表数据的加载
//! 属于后端接口的职责范围，这里只负责导航结构。

use leptos::prelude::*;

use crate::web::router::use_navigate;

#[component]
pub fn CollaborationRequestsPage() -> impl IntoView {
    let navigate = use_navigate();
    let go_new = {
        let navigate = navigate.clone();
        move |_| navigate("/collaboration-requests/new")
    };
    let go_home = move |_| navigate("/home");

    view! {
        <div class="min-h-screen bg-base-200 p-8">
            <div class="flex items-center justify-between mb-6">
                <h1 class="text-3xl font-bold">"Peticiones de colaboración"</h1>
                <button class="btn btn-primary" on:click=go_new>
                    "Nueva petición"
                </button>
            </div>
            <button class="btn btn-ghost" on:click=go_home>
                "← Inicio"
            </button>
        </div>
    }
}

#[component]
pub fn NewCollaborationRequestPage() -> impl IntoView {
    let navigate = use_navigate();
    let go_back = move |_| navigate("/collaboration-requests");

    view! {
        <div class="min-h-screen bg-base-200 p-8">
            <h1 class="text-3xl font-bold mb-6">"Nueva petición"</h1>
            <button class="btn btn-ghost" on:click=go_back>
                "← Peticiones"
            </button>
        </div>
    }
}

#[component]
pub fn CollaborationRequestDetailPage(
    /// 路由参数 `:id`
    id: u32,
) -> impl IntoView {
    let navigate = use_navigate();
    let go_back = move |_| navigate("/collaboration-requests");

    view! {
        <div class="min-h-screen bg-base-200 p-8">
            <h1 class="text-3xl font-bold mb-2">"Petición de colaboración"</h1>
            <p class="text-base-content/70 mb-6">{format!("Petición #{}", id)}</p>
            <button class="btn btn-ghost" on:click=go_back>
                "← Peticiones"
            </button>
        </div>
    }
}
