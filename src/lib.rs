//! UniColab 前端应用
//!
//! 管理学生之间协作请求的单页应用。采用 Context-Driven 的
//! 高内聚低耦合架构：
//! - `web::route`: 路由定义与守卫（领域模型，纯逻辑）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 认证状态管理
//! - `validation`: 表单验证规则注册表
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod collaboration_requests;
    pub mod collaborations;
    pub mod home;
    pub mod landing;
    pub mod login;
    pub mod register;
}
mod error;
mod validation;

use crate::auth::{AuthContext, init_auth};
use crate::components::collaboration_requests::{
    CollaborationRequestDetailPage, CollaborationRequestsPage, NewCollaborationRequestPage,
};
use crate::components::collaborations::{CollaborationDetailPage, CollaborationsPage};
use crate::components::home::HomePage;
use crate::components::landing::LandingPage;
use crate::components::login::LoginPage;
use crate::components::register::RegisterPage;

use leptos::prelude::*;

// 原生 Web API 封装模块
pub(crate) mod web {
    mod console;
    pub mod route;
    pub mod router;
    mod storage;

    pub use console::console_log;
    pub use storage::{BrowserTokenStore, TOKEN_KEY, TokenStore};
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Landing => view! { <LandingPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::CollaborationRequests => view! { <CollaborationRequestsPage /> }.into_any(),
        AppRoute::NewCollaborationRequest => view! { <NewCollaborationRequestPage /> }.into_any(),
        AppRoute::CollaborationRequest { id } => {
            view! { <CollaborationRequestDetailPage id=id /> }.into_any()
        }
        AppRoute::Collaborations => view! { <CollaborationsPage /> }.into_any(),
        AppRoute::Collaboration { id } => view! { <CollaborationDetailPage id=id /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Página no encontrada"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 启动时注册验证规则（幂等）
    validation::install_default_rules();

    // 2. 创建认证上下文并从持久化存储恢复令牌
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    init_auth(&auth_ctx, &web::BrowserTokenStore);

    // 3. 获取认证状态信号，注入路由服务实现守卫（解耦）
    let logged_in = auth_ctx.logged_in_signal();

    view! {
        <Router logged_in=logged_in>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
