//! schedule 命令 - 解析触发时间、构建并提交叫醒通知

use anyhow::Result;
use clap::Args;
use tracing::{debug, warn};

use crate::cli::output::{format_output, status_message};
use crate::config::WakeConfig;
use crate::notification::authority::AuthorizationOptions;
use crate::notification::badge::BadgeTracker;
use crate::notification::builder::RequestBuilder;
use crate::notification::category::{default_categories, CategoryRegistry};
use crate::notification::scheduler::Scheduler;
use crate::notification::time_resolver::TimeResolver;

/// schedule 命令参数
#[derive(Debug, Args)]
pub struct ScheduleArgs {
    /// 触发小时（自由文本；留空或无法解析时使用当前小时）
    #[arg(long)]
    pub hour: Option<String>,

    /// 触发分钟（自由文本；留空或无法解析时使用当前分钟加默认偏移）
    #[arg(long)]
    pub minute: Option<String>,

    /// Dry-run 模式（只打印不提交）
    #[arg(long)]
    pub dry_run: bool,

    /// 输出 JSON 格式
    #[arg(long)]
    pub json: bool,
}

/// 执行 schedule 命令
pub async fn handle_schedule(args: ScheduleArgs, config: &WakeConfig) -> Result<()> {
    let authority = config.build_authority();

    // 一次性授权请求：发出后不等待，调度从不因授权结果受阻
    let auth = authority.clone();
    tokio::spawn(async move {
        match auth.request_authorization(AuthorizationOptions::all()).await {
            Ok(granted) => debug!(granted, "Authorization request completed"),
            Err(e) => warn!(error = %e, "Authorization request failed"),
        }
    });

    // 分类必须先于引用它们的请求注册
    let mut registry = CategoryRegistry::new();
    registry.register(default_categories());
    authority.set_categories(registry.categories());

    let resolver = TimeResolver::new(config.default_minute_offset);
    let fire = resolver.resolve(args.hour.as_deref(), args.minute.as_deref());

    let badge = BadgeTracker::new();
    let request = RequestBuilder::new(&registry)
        .sound(config.sound.clone())
        .build(fire, &badge)?;

    // 构建后、提交前递增；提交失败不回滚
    badge.increment();

    let scheduler = Scheduler::new(authority).with_dry_run(args.dry_run);
    scheduler.submit(&request).await?;

    if args.json {
        println!("{}", format_output(&request));
    } else {
        println!("{}", status_message(&fire));
    }
    Ok(())
}
