//! LocalStorage 封装模块
//!
//! 基于 `web_sys::Storage` 的轻量封装，以及令牌持久化的抽象接口。
//! 认证模块只依赖 `TokenStore` trait，测试时可注入内存实现。

/// 令牌在 LocalStorage 中的固定键
pub const TOKEN_KEY: &str = "token";

/// 本地存储操作封装
///
/// 提供静态方法访问浏览器 LocalStorage API。
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 获取存储的字符串值；键不存在或发生错误时返回 `None`
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 设置存储值；返回操作是否成功
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    /// 删除存储的键值对；返回操作是否成功
    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}

// =========================================================
// 令牌存储接口
// =========================================================

/// 令牌持久化适配器
///
/// LocalStorage 是同步 API，因此接口保持同步。
pub trait TokenStore {
    /// 读取持久化的令牌；不存在时返回 `None`
    fn load(&self) -> Option<String>;
    /// 持久化令牌；返回操作是否成功
    fn store(&self, token: &str) -> bool;
    /// 删除持久化的令牌；返回操作是否成功
    fn clear(&self) -> bool;
}

/// 浏览器 LocalStorage 实现，使用固定键 [`TOKEN_KEY`]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        LocalStorage::get(TOKEN_KEY)
    }

    fn store(&self, token: &str) -> bool {
        LocalStorage::set(TOKEN_KEY, token)
    }

    fn clear(&self) -> bool {
        LocalStorage::delete(TOKEN_KEY)
    }
}
