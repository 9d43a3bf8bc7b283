//! 认证模块
//!
//! 管理会话令牌状态，与路由系统解耦：
//! 路由服务只通过注入的 `logged_in` 信号检查认证状态。
//! 持久化与网络端点都是可注入的接口，测试时使用内存实现。

use async_trait::async_trait;
use leptos::prelude::*;

use crate::api::{Credentials, TokenResponse};
use crate::error::ApiError;
use crate::web::{TokenStore, console_log};

// =========================================================
// 认证端点接口
// =========================================================

/// 认证端点适配器
///
/// 真实实现是 [`crate::api::CollabApi`]，测试中注入 mock。
#[async_trait(?Send)]
pub trait TokenEndpoint {
    /// 用凭据换取令牌（`POST token/`）
    async fn obtain_token(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError>;
    /// 服务端注销当前令牌（`GET logout/`）
    async fn logout(&self, token: &str) -> Result<(), ApiError>;
}

// =========================================================
// 认证状态
// =========================================================

/// 认证状态
///
/// 唯一的状态就是一个可选的不透明令牌字符串。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    /// 会话令牌（未登录时为 None）
    pub token: Option<String>,
}

impl AuthState {
    /// 是否存在活跃会话
    ///
    /// 任何非空值都算已登录，不校验令牌形状。
    pub fn logged_in(&self) -> bool {
        self.token.is_some()
    }
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（写入）
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    /// 创建新的认证上下文
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn logged_in_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().logged_in())
    }

    /// 同步替换内存中的令牌（mutation）
    pub fn set_token(&self, token: Option<String>) {
        self.set_state.update(|state| state.token = token);
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

// =========================================================
// 认证操作
// =========================================================

/// 初始化认证状态
///
/// 应用启动时从持久化存储加载令牌；不存在时保持匿名。
pub fn init_auth(ctx: &AuthContext, store: &dyn TokenStore) {
    if let Some(token) = store.load() {
        ctx.set_token(Some(token));
    }
}

/// 获取认证令牌（action）
///
/// 成功时先持久化再更新内存信号，请求失败时不做任何状态变更，
/// 保证内存与持久化副本始终一致（全有或全无）。
/// 持久化本身失败只记录日志，本次会话降级为仅内存。
/// 并发调用不去重：后完成的响应覆盖内存令牌（last-write-wins）。
pub async fn retrieve_token(
    ctx: &AuthContext,
    store: &dyn TokenStore,
    endpoint: &dyn TokenEndpoint,
    credentials: &Credentials,
) -> Result<TokenResponse, ApiError> {
    let response = endpoint.obtain_token(credentials).await?;

    if !store.store(&response.token) {
        console_log("[Auth] Token persistence failed; session is memory-only.");
    }
    ctx.set_token(Some(response.token.clone()));
    console_log("[Auth] Session established.");

    Ok(response)
}

/// 注销并清除令牌
///
/// 服务端注销是尽力而为；无论结果如何，内存与持久化
/// 两份副本都会被清除。导航由路由服务的认证监听自动处理。
pub async fn clear_token(ctx: &AuthContext, store: &dyn TokenStore, endpoint: &dyn TokenEndpoint) {
    let token = ctx.state.get_untracked().token;

    if let Some(token) = token {
        if let Err(err) = endpoint.logout(&token).await {
            console_log(&format!("[Auth] Server logout failed: {}", err));
        }
    }

    store.clear();
    ctx.set_token(None);
}

#[cfg(test)]
mod tests;
