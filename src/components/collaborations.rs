//! 协作页面：列表 / 详情

use leptos::prelude::*;

use crate::web::router::use_navigate;

#[component]
pub fn CollaborationsPage() -> impl IntoView {
    let navigate = use_navigate();
    let go_home = move |_| navigate("/home");

    view! {
        <div class="min-h-screen bg-base-200 p-8">
            <h1 class="text-3xl font-bold mb-6">"Colaboraciones"</h1>
            <button class="btn btn-ghost" on:click=go_home>
                "← Inicio"
            </button>
        </div>
    }
}

#[component]
pub fn CollaborationDetailPage(
    /// 路由参数 `:id`
    id: u32,
) -> impl IntoView {
    let navigate = use_navigate();
    let go_back = move |_| navigate("/collaborations");

    view! {
        <div class="min-h-screen bg-base-200 p-8">
            <h1 class="text-3xl font-bold mb-2">"Colaboración"</h1>
            <p class="text-base-content/70 mb-6">{format!("Colaboración #{}", id)}</p>
            <button class="btn btn-ghost" on:click=go_back>
                "← Colaboraciones"
            </button>
        </div>
    }
}
