//! pending 命令 - 列出文件后端的待决请求集合

use anyhow::Result;
use clap::Args;

use crate::cli::output::format_output;
use crate::config::WakeConfig;
use crate::notification::authorities::FileAuthority;

/// pending 命令参数
#[derive(Debug, Args)]
pub struct PendingArgs {
    /// 输出 JSON 格式
    #[arg(long)]
    pub json: bool,
}

/// 执行 pending 命令
pub fn handle_pending(args: PendingArgs, config: &WakeConfig) -> Result<()> {
    let authority = FileAuthority::new(
        config
            .pending_path
            .clone()
            .unwrap_or_else(FileAuthority::default_path),
    );
    let records = authority.pending();

    if args.json {
        println!("{}", format_output(&records));
        return Ok(());
    }

    println!("{} 条待决请求:\n", records.len());
    for record in records {
        println!(
            "  {} @ {} | 分类: {} | 角标: {}",
            record.request.identifier,
            record.request.trigger,
            record.request.content.category_id,
            record.request.content.badge
        );
    }
    Ok(())
}
