//! respond / present 命令 - 模拟主管机构投递的回调
//!
//! 真实部署里这两条路径由操作系统的通知服务回调触发；
//! CLI 入口用于本地验证路由表和角标行为。

use anyhow::Result;
use clap::Args;

use crate::config::WakeConfig;
use crate::notification::authority::NotificationResponse;
use crate::notification::badge::BadgeTracker;
use crate::notification::category::TIMER_EXPIRED_CATEGORY;
use crate::notification::content::{NotificationContent, Sound};
use crate::notification::router::ResponseRouter;

/// respond 命令参数
#[derive(Debug, Args)]
pub struct RespondArgs {
    /// 被响应通知的分类标识符
    #[arg(long, default_value = TIMER_EXPIRED_CATEGORY)]
    pub category: String,

    /// 用户选择的动作标识符
    #[arg(long)]
    pub action: String,
}

/// 执行 respond 命令：构造入站响应并走一遍路由表
pub fn handle_respond(args: RespondArgs) -> Result<()> {
    let response = NotificationResponse {
        category_id: args.category,
        action_id: args.action,
        content: NotificationContent::wake_alarm(Sound::Default, 0),
    };

    let router = ResponseRouter::new();
    let outcome = router.dispatch(&response);

    println!("response routed: {}", outcome);
    Ok(())
}

/// present 命令参数
#[derive(Debug, Args)]
pub struct PresentArgs {
    /// 展示内容携带的角标值（缺省表示内容不带角标）
    #[arg(long)]
    pub badge: Option<u32>,
}

/// 执行 present 命令：模拟应用在前台时的展示回调
pub fn handle_present(args: PresentArgs, config: &WakeConfig) -> Result<()> {
    let authority = config.build_authority();
    let tracker = BadgeTracker::new();

    let pushed = tracker.set_from_presented(args.badge, authority.as_ref());
    println!("badge display set to {}", pushed);
    Ok(())
}
