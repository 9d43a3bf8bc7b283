//! API 错误类型
//!
//! 认证与注册请求的错误语义。传输失败原样向上传播，
//! 不做重试、不做退避。

/// API 调用错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 网络/传输失败（请求未到达或无响应）
    Network(String),
    /// 服务端返回非 2xx 状态码
    Status(u16),
    /// 响应体解析失败（包括成功响应中缺失 token 字段）
    Decode(String),
}

impl ApiError {
    /// 是否鉴权失败 (401)
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status(401))
    }
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "网络错误: {}", msg),
            ApiError::Status(code) => write!(f, "请求失败: HTTP {}", code),
            ApiError::Decode(msg) => write!(f, "响应解析失败: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
