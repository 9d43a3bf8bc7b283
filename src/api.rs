//! 后端 REST API 客户端
//!
//! 封装认证相关的三个端点：
//! - `POST token/` 获取认证令牌
//! - `POST students/` 注册新学生
//! - `GET logout/` 注销（服务端删除令牌）

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::auth::TokenEndpoint;
use crate::error::ApiError;

/// 后端 API 根路径
pub const API_BASE: &str = "/api";

/// 登录凭据
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// `POST token/` 的成功响应体
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// `POST students/` 的请求体
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterStudentRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub description: String,
}

/// API 客户端
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollabApi {
    pub base_url: String,
}

impl CollabApi {
    pub fn new(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    // Django REST framework 的 TokenAuthentication 头
    fn auth_header(token: &str) -> String {
        format!("Token {}", token)
    }

    /// 注册新学生
    pub async fn register_student(&self, payload: &RegisterStudentRequest) -> Result<(), ApiError> {
        let res = Request::post(&self.url("students/"))
            .header("Content-Type", "application/json")
            .json(payload)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(ApiError::Status(res.status()));
        }

        Ok(())
    }
}

impl Default for CollabApi {
    fn default() -> Self {
        Self::new(API_BASE)
    }
}

#[async_trait::async_trait(?Send)]
impl TokenEndpoint for CollabApi {
    /// 获取认证令牌
    ///
    /// 非 2xx 状态码与传输失败都作为错误传播；
    /// 成功响应缺失 `token` 字段报 `Decode` 错误。
    async fn obtain_token(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        let res = Request::post(&self.url("token/"))
            .header("Content-Type", "application/json")
            .json(credentials)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(ApiError::Status(res.status()));
        }

        res.json::<TokenResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 注销：服务端删除当前令牌
    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        let res = Request::get(&self.url("logout/"))
            .header("Authorization", &Self::auth_header(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(ApiError::Status(res.status()));
        }

        Ok(())
    }
}
