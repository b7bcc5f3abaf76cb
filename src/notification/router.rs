//! 响应路由 - 将用户响应分发到分类/动作对应的处理器
//!
//! 路由是按响应逐条求值的纯分发，路由器自身不在调用之间保留状态。
//! 匹配表自上而下求值，首个命中生效；所有分支（含兜底）都正常完成，
//! 分发本身绝不报错。

use tracing::info;

use super::authority::NotificationResponse;
use super::category::{
    SNOOZE_ACTION, STOP_ACTION, SYSTEM_DEFAULT_ACTION, SYSTEM_DISMISS_ACTION,
    TIMER_EXPIRED_CATEGORY,
};

/// 一次分发的路由结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// 贪睡动作
    Snoozed,
    /// 停止动作
    Stopped,
    /// 用户未执行任何动作，直接关闭
    Dismissed,
    /// 用户点击通知本体打开应用
    Launched,
    /// 未知的分类/动作组合，走显式兜底
    Unhandled,
}

impl RouteOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteOutcome::Snoozed => "snoozed",
            RouteOutcome::Stopped => "stopped",
            RouteOutcome::Dismissed => "dismissed",
            RouteOutcome::Launched => "launched",
            RouteOutcome::Unhandled => "unhandled",
        }
    }
}

impl std::fmt::Display for RouteOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 响应处理回调
pub type ResponseHandler = Box<dyn Fn(&NotificationResponse) + Send + Sync>;

/// 响应路由器
pub struct ResponseRouter {
    on_snooze: ResponseHandler,
    on_stop: ResponseHandler,
    on_dismiss: ResponseHandler,
    on_launch: ResponseHandler,
    on_unhandled: ResponseHandler,
}

impl ResponseRouter {
    /// 创建带默认处理器的路由器
    ///
    /// 默认处理器只做可观察动作（记录日志）。贪睡目前不做取消/重排，
    /// 那需要待决请求的查询能力，是命名好的扩展点。
    pub fn new() -> Self {
        Self {
            on_snooze: Box::new(|_| info!("Snoozing the alarm")),
            on_stop: Box::new(|_| info!("Stopping the timer")),
            on_dismiss: Box::new(|_| {
                info!("User dismissed the notification without taking action")
            }),
            on_launch: Box::new(|_| info!("User launched the app from the notification")),
            on_unhandled: Box::new(|response| {
                info!(
                    category = %response.category_id,
                    action = %response.action_id,
                    "No handler registered for response"
                )
            }),
        }
    }

    /// 替换贪睡处理器
    pub fn on_snooze(mut self, handler: impl Fn(&NotificationResponse) + Send + Sync + 'static) -> Self {
        self.on_snooze = Box::new(handler);
        self
    }

    /// 替换停止处理器
    pub fn on_stop(mut self, handler: impl Fn(&NotificationResponse) + Send + Sync + 'static) -> Self {
        self.on_stop = Box::new(handler);
        self
    }

    /// 替换关闭处理器
    pub fn on_dismiss(mut self, handler: impl Fn(&NotificationResponse) + Send + Sync + 'static) -> Self {
        self.on_dismiss = Box::new(handler);
        self
    }

    /// 替换打开应用处理器
    pub fn on_launch(mut self, handler: impl Fn(&NotificationResponse) + Send + Sync + 'static) -> Self {
        self.on_launch = Box::new(handler);
        self
    }

    /// 替换兜底处理器
    pub fn on_unhandled(mut self, handler: impl Fn(&NotificationResponse) + Send + Sync + 'static) -> Self {
        self.on_unhandled = Box::new(handler);
        self
    }

    /// 分发一条入站响应，返回命中的分支
    pub fn dispatch(&self, response: &NotificationResponse) -> RouteOutcome {
        // 自上而下匹配，首个命中生效
        if response.category_id == TIMER_EXPIRED_CATEGORY && response.action_id == SNOOZE_ACTION {
            (self.on_snooze)(response);
            return RouteOutcome::Snoozed;
        }

        if response.category_id == TIMER_EXPIRED_CATEGORY && response.action_id == STOP_ACTION {
            (self.on_stop)(response);
            return RouteOutcome::Stopped;
        }

        // 系统默认动作与分类无关
        if response.action_id == SYSTEM_DISMISS_ACTION {
            (self.on_dismiss)(response);
            return RouteOutcome::Dismissed;
        }

        if response.action_id == SYSTEM_DEFAULT_ACTION {
            (self.on_launch)(response);
            return RouteOutcome::Launched;
        }

        (self.on_unhandled)(response);
        RouteOutcome::Unhandled
    }
}

impl Default for ResponseRouter {
    fn default() -> Self {
        Self::new()
    }
}
