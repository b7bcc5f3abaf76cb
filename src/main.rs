//! Wake Notify CLI
//!
//! 调度和路由本地交互式叫醒通知

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};
use wake_notify::cli::{
    handle_pending, handle_present, handle_respond, handle_schedule, PendingArgs, PresentArgs,
    RespondArgs, ScheduleArgs,
};
use wake_notify::config::WakeConfig;

#[derive(Parser)]
#[command(name = "wkn")]
#[command(about = "Wake Notify - 调度和路由本地叫醒通知")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 调度一条叫醒通知
    Schedule(ScheduleArgs),
    /// 模拟主管机构投递的用户响应（本地验证用）
    Respond(RespondArgs),
    /// 模拟前台展示回调（本地验证用）
    Present(PresentArgs),
    /// 列出待决的调度请求
    Pending(PendingArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化 tracing 日志系统
    // 通过 RUST_LOG 环境变量控制日志级别，默认为 info
    // 例如: RUST_LOG=debug wkn schedule
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("wake_notify=info,wkn=info"));

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    let cli = Cli::parse();
    let config = WakeConfig::load();

    match cli.command {
        Commands::Schedule(args) => {
            handle_schedule(args, &config).await?;
        }
        Commands::Respond(args) => {
            handle_respond(args)?;
        }
        Commands::Present(args) => {
            handle_present(args, &config)?;
        }
        Commands::Pending(args) => {
            handle_pending(args, &config)?;
        }
    }

    Ok(())
}
