//! 通知主管机构抽象 - 权限、分类注册、调度提交、角标显示
//!
//! 主管机构是外部协作方（操作系统级的通知服务）。核心只依赖这个
//! trait，具体后端见 `authorities` 子模块，测试用 mock 实现。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::category::NotificationCategory;
use super::content::{NotificationContent, NotificationRequest};

/// 一次性授权请求的选项集合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationOptions {
    pub badge: bool,
    pub alert: bool,
    pub sound: bool,
}

impl AuthorizationOptions {
    /// 角标、弹窗、声音全开
    pub fn all() -> Self {
        Self {
            badge: true,
            alert: true,
            sound: true,
        }
    }
}

impl Default for AuthorizationOptions {
    fn default() -> Self {
        Self::all()
    }
}

/// 提交失败，携带主管机构的诊断信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulingError {
    message: String,
}

impl SchedulingError {
    /// 创建错误
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// 主管机构的诊断信息
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for SchedulingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SchedulingError {}

/// 用户对通知的响应（入站，由主管机构投递，核心侧只读）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationResponse {
    /// 被响应通知的分类标识符
    pub category_id: String,
    /// 用户选择的动作标识符（可能是系统默认动作）
    pub action_id: String,
    /// 被响应通知的展示内容
    pub content: NotificationContent,
}

/// 通知主管机构 trait
///
/// `request_authorization` 和 `add` 是异步边界，完成回调可能落在
/// 任意执行上下文；调用方不能假定回到原上下文。
#[async_trait]
pub trait NotificationAuthority: Send + Sync {
    /// 后端名称（用于日志和配置）
    fn name(&self) -> &str;

    /// 一次性授权请求
    ///
    /// 结果不会阻塞任何调度操作：无论允许还是拒绝，调度照常进行。
    async fn request_authorization(&self, options: AuthorizationOptions) -> anyhow::Result<bool>;

    /// 注册分类集合（整组替换），必须先于引用这些分类的请求提交
    fn set_categories(&self, categories: &[NotificationCategory]);

    /// 提交调度请求；同标识符的待决请求会被替换
    async fn add(&self, request: &NotificationRequest) -> Result<(), SchedulingError>;

    /// 设置外部角标显示属性
    fn set_badge(&self, value: u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_options_all() {
        let options = AuthorizationOptions::all();
        assert!(options.badge);
        assert!(options.alert);
        assert!(options.sound);
    }

    #[test]
    fn test_scheduling_error_carries_diagnostic() {
        let err = SchedulingError::new("disk full");
        assert_eq!(err.message(), "disk full");
        assert_eq!(format!("{}", err), "disk full");
    }

    #[test]
    fn test_scheduling_error_converts_to_anyhow() {
        fn surface() -> anyhow::Result<()> {
            Err(SchedulingError::new("disk full"))?;
            Ok(())
        }

        let err = surface().unwrap_err();
        assert_eq!(err.to_string(), "disk full");
    }
}
