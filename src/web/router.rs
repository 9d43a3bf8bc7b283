//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 每次导航（主动导航、popstate、认证状态翻转）都通过
//! `evaluate_guard` 对整条匹配链做一次守卫评估。

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::console::console_log;
use super::route::{AppRoute, GuardDecision, evaluate_guard, resolve_entry};

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 导航成功后写入页面标题
fn apply_title(route: &AppRoute) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(route.meta().title);
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 通过注入认证检查信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 认证状态检查（注入的信号，实现解耦）
    logged_in: Signal<bool>,
}

impl RouterService {
    /// 创建新的路由服务
    ///
    /// # Arguments
    /// * `logged_in` - 认证状态信号，由外部注入实现解耦
    fn new(logged_in: Signal<bool>) -> Self {
        // 初始加载也先过守卫再提交：被拦截的深链接在首次渲染前
        // 就被替换成重定向目标，目标组件一帧也不会挂载
        let path = current_path();
        let initial_route = resolve_entry(&path, logged_in.get_untracked());
        replace_history_state(&initial_route.to_path());
        apply_title(&initial_route);

        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            logged_in,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    ///
    /// 流程：请求 -> 守卫评估 -> 提交 History -> 更新界面
    pub fn navigate(&self, path: &str) {
        let target_route = AppRoute::from_path(path);
        self.navigate_to_route(target_route, true);
    }

    /// 导航到指定路由
    ///
    /// # Arguments
    /// * `target_route` - 目标路由
    /// * `use_push` - true 使用 pushState, false 使用 replaceState
    fn navigate_to_route(&self, target_route: AppRoute, use_push: bool) {
        let is_auth = self.logged_in.get_untracked();

        let committed = match evaluate_guard(target_route.matched(), is_auth) {
            GuardDecision::Allow => target_route,
            GuardDecision::RedirectTo(redirect) => {
                console_log(&format!(
                    "[Router] Guard redirect: {} -> {}",
                    target_route.meta().name,
                    redirect.meta().name
                ));
                redirect
            }
        };

        if use_push {
            push_history_state(&committed.to_path());
        } else {
            replace_history_state(&committed.to_path());
        }
        apply_title(&committed);
        self.set_route.set(committed);
    }

    /// 初始化浏览器后退/前进按钮监听
    ///
    /// popstate 时同样执行守卫评估，被拦截的历史记录用
    /// replaceState 修正，避免污染历史栈。
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let logged_in = self.logged_in;

        let closure = Closure::<dyn Fn()>::new(move || {
            let path = current_path();
            let target_route = AppRoute::from_path(&path);
            let is_auth = logged_in.get_untracked();

            let committed = match evaluate_guard(target_route.matched(), is_auth) {
                GuardDecision::Allow => target_route,
                GuardDecision::RedirectTo(redirect) => {
                    replace_history_state(&redirect.to_path());
                    redirect
                }
            };
            apply_title(&committed);
            set_route.set(committed);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 设置认证状态变化时的自动重定向
    ///
    /// 登录后停留在访客页 → 主页；登出后停留在受保护页 → 登录页。
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let logged_in = self.logged_in;

        Effect::new(move |_| {
            let is_auth = logged_in.get();
            let route = current_route.get_untracked();

            if let GuardDecision::RedirectTo(redirect) = evaluate_guard(route.matched(), is_auth) {
                console_log(&format!(
                    "[Router] Auth state changed, redirecting to {}.",
                    redirect.meta().name
                ));
                // 修正当前历史记录，被拦截的 URL 不留在历史栈里
                replace_history_state(&redirect.to_path());
                apply_title(&redirect);
                set_route.set(redirect);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(logged_in: Signal<bool>) -> RouterService {
    let router = RouterService::new(logged_in);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

/// 导航函数（返回一个可调用的闭包）
pub fn use_navigate() -> impl Fn(&str) + Clone {
    let router = use_router();
    move |to: &str| {
        router.navigate(to);
    }
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 认证状态信号
    logged_in: Signal<bool>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(logged_in);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
