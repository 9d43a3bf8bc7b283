//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由、路由元信息（访问标志与页面标题），
//! 以及核心守卫函数 `evaluate_guard`。

use std::fmt::Display;

// =========================================================
// 路由元信息
// =========================================================

/// 路由元信息
///
/// 每条路由一个静态描述符：符号名、页面标题、访问标志。
/// 按约定 `requires_auth` 与 `requires_visitor` 互斥，
/// 冲突时由守卫的优先级顺序裁决。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMeta {
    /// 符号名（用于日志与重定向描述）
    pub name: &'static str,
    /// 页面标题（导航成功后写入 document.title）
    pub title: &'static str,
    /// 仅认证用户可访问
    pub requires_auth: bool,
    /// 仅访客可访问（注册、登录、落地页）
    pub requires_visitor: bool,
}

const LANDING: RouteMeta = RouteMeta {
    name: "landing",
    title: "Bienvenido",
    requires_auth: false,
    requires_visitor: true,
};

const REGISTER: RouteMeta = RouteMeta {
    name: "register",
    title: "Regístrate",
    requires_auth: false,
    requires_visitor: true,
};

const LOGIN: RouteMeta = RouteMeta {
    name: "login",
    title: "Inicia sesión",
    requires_auth: false,
    requires_visitor: true,
};

const HOME: RouteMeta = RouteMeta {
    name: "home",
    title: "Inicio",
    requires_auth: true,
    requires_visitor: false,
};

const COLLABORATION_REQUESTS: RouteMeta = RouteMeta {
    name: "collaborationrequests",
    title: "Peticiones de colaboración",
    requires_auth: true,
    requires_visitor: false,
};

// 子路由自身不携带标志，通过祖先链继承访问控制
const NEW_COLLABORATION_REQUEST: RouteMeta = RouteMeta {
    name: "newcollaborationrequest",
    title: "Nueva petición",
    requires_auth: false,
    requires_visitor: false,
};

const COLLABORATION_REQUEST: RouteMeta = RouteMeta {
    name: "collaborationrequest",
    title: "Petición de colaboración",
    requires_auth: false,
    requires_visitor: false,
};

const COLLABORATIONS: RouteMeta = RouteMeta {
    name: "collaborations",
    title: "Colaboraciones",
    requires_auth: true,
    requires_visitor: false,
};

const COLLABORATION: RouteMeta = RouteMeta {
    name: "collaboration",
    title: "Colaboración",
    requires_auth: false,
    requires_visitor: false,
};

const NOT_FOUND: RouteMeta = RouteMeta {
    name: "notfound",
    title: "Página no encontrada",
    requires_auth: false,
    requires_visitor: false,
};

// =========================================================
// 应用路由枚举
// =========================================================

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 落地页 (默认路由，仅访客)
    #[default]
    Landing,
    /// 注册页面 (仅访客)
    Register,
    /// 登录页面 (仅访客)
    Login,
    /// 主页 (需要认证)
    Home,
    /// 协作请求列表 (需要认证)
    CollaborationRequests,
    /// 新建协作请求 (子路由，继承父级认证要求)
    NewCollaborationRequest,
    /// 协作请求详情 (子路由，继承父级认证要求)
    CollaborationRequest { id: u32 },
    /// 协作列表 (需要认证)
    Collaborations,
    /// 协作详情 (子路由，继承父级认证要求)
    Collaboration { id: u32 },
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Landing,
            ["register"] => Self::Register,
            ["login"] => Self::Login,
            ["home"] => Self::Home,
            ["collaboration-requests"] => Self::CollaborationRequests,
            ["collaboration-requests", "new"] => Self::NewCollaborationRequest,
            ["collaboration-requests", id] => match id.parse::<u32>() {
                Ok(id) => Self::CollaborationRequest { id },
                Err(_) => Self::NotFound,
            },
            ["collaborations"] => Self::Collaborations,
            ["collaborations", id] => match id.parse::<u32>() {
                Ok(id) => Self::Collaboration { id },
                Err(_) => Self::NotFound,
            },
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Landing => "/".to_string(),
            Self::Register => "/register".to_string(),
            Self::Login => "/login".to_string(),
            Self::Home => "/home".to_string(),
            Self::CollaborationRequests => "/collaboration-requests".to_string(),
            Self::NewCollaborationRequest => "/collaboration-requests/new".to_string(),
            Self::CollaborationRequest { id } => format!("/collaboration-requests/{}", id),
            Self::Collaborations => "/collaborations".to_string(),
            Self::Collaboration { id } => format!("/collaborations/{}", id),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// 获取路由自身的元信息（匹配链的最后一段）
    pub fn meta(&self) -> &'static RouteMeta {
        match self {
            Self::Landing => &LANDING,
            Self::Register => &REGISTER,
            Self::Login => &LOGIN,
            Self::Home => &HOME,
            Self::CollaborationRequests => &COLLABORATION_REQUESTS,
            Self::NewCollaborationRequest => &NEW_COLLABORATION_REQUEST,
            Self::CollaborationRequest { .. } => &COLLABORATION_REQUEST,
            Self::Collaborations => &COLLABORATIONS,
            Self::Collaboration { .. } => &COLLABORATION,
            Self::NotFound => &NOT_FOUND,
        }
    }

    /// **匹配链：从根到叶的全部路由元信息**
    ///
    /// 守卫必须检查整条链而不是单一路由段，
    /// 嵌套子路由（new / :id 详情页）才能继承祖先的访问标志。
    pub fn matched(&self) -> &'static [RouteMeta] {
        match self {
            Self::Landing => &[LANDING],
            Self::Register => &[REGISTER],
            Self::Login => &[LOGIN],
            Self::Home => &[HOME],
            Self::CollaborationRequests => &[COLLABORATION_REQUESTS],
            Self::NewCollaborationRequest => {
                &[COLLABORATION_REQUESTS, NEW_COLLABORATION_REQUEST]
            }
            Self::CollaborationRequest { .. } => &[COLLABORATION_REQUESTS, COLLABORATION_REQUEST],
            Self::Collaborations => &[COLLABORATIONS],
            Self::Collaboration { .. } => &[COLLABORATIONS, COLLABORATION],
            Self::NotFound => &[NOT_FOUND],
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

// =========================================================
// 导航守卫
// =========================================================

/// 守卫决策结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// 允许导航到目标路由
    Allow,
    /// 重定向到指定路由
    RedirectTo(AppRoute),
}

/// **核心守卫逻辑：纯函数，每次导航评估一次**
///
/// 优先级顺序：
/// 1. 链上任一段需要认证且当前未认证 → 重定向到登录页
/// 2. 链上任一段仅限访客且当前已认证 → 重定向到主页
/// 3. 其余情况放行（无标志的路由无条件允许）
///
/// 同步、确定性；给定匹配链与认证状态，结果唯一。
pub fn evaluate_guard(chain: &[RouteMeta], logged_in: bool) -> GuardDecision {
    if chain.iter().any(|meta| meta.requires_auth) && !logged_in {
        return GuardDecision::RedirectTo(AppRoute::Login);
    }

    if chain.iter().any(|meta| meta.requires_visitor) && logged_in {
        return GuardDecision::RedirectTo(AppRoute::Home);
    }

    GuardDecision::Allow
}

/// 解析入口路径并立即应用守卫，返回实际提交的路由
///
/// 初始加载与导航走同一套守卫语义：匿名用户深链接受保护页
/// 提交的是登录页，目标组件一帧也不渲染。
pub fn resolve_entry(path: &str, logged_in: bool) -> AppRoute {
    let requested = AppRoute::from_path(path);
    match evaluate_guard(requested.matched(), logged_in) {
        GuardDecision::Allow => requested,
        GuardDecision::RedirectTo(redirect) => redirect,
    }
}

#[cfg(test)]
mod tests;
