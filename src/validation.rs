//! 表单验证规则注册表
//!
//! 应用启动时注册具名验证规则（`required` / `email` / `min`），
//! 每条规则绑定一条本地化错误消息模板（支持 `{length}` 占位符）。
//! 注册表本身是普通结构体，可注入测试；进程级默认实例
//! 供表单组件通过自由函数使用（WASM 单线程，thread_local 即可）。

use std::cell::RefCell;
use std::collections::HashMap;

/// 规则谓词：输入值 + 规则参数 -> 是否通过
pub type RulePredicate = fn(&str, &RuleArgs) -> bool;

/// 规则参数
///
/// 目前只有 `min` 使用 `length`；无参规则传 `RuleArgs::default()`。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleArgs {
    pub length: Option<usize>,
}

impl RuleArgs {
    /// `min` 规则的参数
    pub fn length(length: usize) -> Self {
        Self {
            length: Some(length),
        }
    }
}

struct ValidationRule {
    predicate: RulePredicate,
    message: String,
}

/// 验证规则注册表
#[derive(Default)]
pub struct ValidationRegistry {
    rules: HashMap<String, ValidationRule>,
}

impl ValidationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册或覆盖一条规则
    ///
    /// 规则名是开发期常量，不存在失败路径；
    /// 用相同参数重复注册是幂等的。
    pub fn register(&mut self, name: &str, predicate: RulePredicate, message: &str) {
        self.rules.insert(
            name.to_string(),
            ValidationRule {
                predicate,
                message: message.to_string(),
            },
        );
    }

    /// 运行具名规则
    ///
    /// 失败时返回渲染后的本地化消息（`{length}` 占位符替换）。
    /// 未注册的规则名放行——注册表由开发者配置，与守卫的
    /// 无标志路由同样取放行默认值。
    pub fn validate(&self, name: &str, value: &str, args: &RuleArgs) -> Result<(), String> {
        let Some(rule) = self.rules.get(name) else {
            return Ok(());
        };

        if (rule.predicate)(value, args) {
            Ok(())
        } else {
            Err(render_message(&rule.message, args))
        }
    }
}

/// 渲染消息模板，替换 `{length}` 占位符
fn render_message(template: &str, args: &RuleArgs) -> String {
    match args.length {
        Some(length) => template.replace("{length}", &length.to_string()),
        None => template.to_string(),
    }
}

// =========================================================
// 内置规则
// =========================================================

fn rule_required(value: &str, _args: &RuleArgs) -> bool {
    !value.trim().is_empty()
}

fn rule_email(value: &str, _args: &RuleArgs) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

fn rule_min(value: &str, args: &RuleArgs) -> bool {
    // 缺失 length 参数是开发期配置错误，取放行默认值
    match args.length {
        Some(length) => value.chars().count() >= length,
        None => true,
    }
}

/// 注册内置规则及其西班牙语消息
///
/// 应用启动时调用一次；重复调用幂等。
pub fn install_builtin_rules(registry: &mut ValidationRegistry) {
    registry.register("required", rule_required, "Este campo es requerido");
    registry.register("email", rule_email, "No es un correo válido");
    registry.register(
        "min",
        rule_min,
        "Debe tener un mínimo de {length} caracteres",
    );
}

// =========================================================
// 进程级默认注册表
// =========================================================

thread_local! {
    static REGISTRY: RefCell<ValidationRegistry> = RefCell::new(ValidationRegistry::new());
}

/// 在默认注册表上安装内置规则
pub fn install_default_rules() {
    REGISTRY.with(|registry| install_builtin_rules(&mut registry.borrow_mut()));
}

/// 用默认注册表验证一个字段值
pub fn validate(name: &str, value: &str, args: &RuleArgs) -> Result<(), String> {
    REGISTRY.with(|registry| registry.borrow().validate(name, value, args))
}
