//! 控制台日志封装
//!
//! 守卫决策与认证事件的日志出口。
//! 非 wasm 目标（本地单元测试）下为空操作，避免调用浏览器绑定。

/// 输出一行日志到浏览器控制台
pub fn console_log(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&msg.into());

    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}
