//! 配置 - ~/.config/wake-notify/config.json
//!
//! 配置永远不会让流程失败：文件缺失用默认值，解析失败记录告警
//! 后同样用默认值。

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::notification::authorities::{FileAuthority, LogAuthority};
use crate::notification::authority::NotificationAuthority;
use crate::notification::content::Sound;
use crate::notification::time_resolver::DEFAULT_MINUTE_OFFSET;

/// 调度后端选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AuthorityKind {
    /// 只写日志，不持久化
    Log,
    /// 待决请求写入本地 JSONL 文件
    #[default]
    File,
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WakeConfig {
    /// 分钟字段留空时加在当前分钟上的偏移
    pub default_minute_offset: u32,
    /// 通知声音
    pub sound: Sound,
    /// 调度后端
    pub authority: AuthorityKind,
    /// 待决请求文件路径（仅 file 后端；缺省用默认路径）
    pub pending_path: Option<PathBuf>,
}

impl Default for WakeConfig {
    fn default() -> Self {
        Self {
            default_minute_offset: DEFAULT_MINUTE_OFFSET,
            sound: Sound::Default,
            authority: AuthorityKind::File,
            pending_path: None,
        }
    }
}

impl WakeConfig {
    /// 配置文件路径
    pub fn path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("wake-notify")
            .join("config.json")
    }

    /// 读取配置
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    /// 从指定路径读取配置（用于测试）
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|content| serde_json::from_str(&content).map_err(anyhow::Error::from))
        {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to read config, using defaults"
                );
                Self::default()
            }
        }
    }

    /// 根据配置构建主管机构后端
    pub fn build_authority(&self) -> Arc<dyn NotificationAuthority> {
        match self.authority {
            AuthorityKind::Log => Arc::new(LogAuthority::new()),
            AuthorityKind::File => Arc::new(FileAuthority::new(
                self.pending_path
                    .clone()
                    .unwrap_or_else(FileAuthority::default_path),
            )),
        }
    }
}
