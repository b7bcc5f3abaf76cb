//! 文件后端 - 待决请求集合持久化为本地 JSONL 文件
//!
//! 每行一条待决请求。提交实现替换语义：先丢弃同标识符的已有行，
//! 再追加新请求，通过临时文件加原子改名重写整个文件。

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::notification::authority::{
    AuthorizationOptions, NotificationAuthority, SchedulingError,
};
use crate::notification::category::NotificationCategory;
use crate::notification::content::NotificationRequest;

/// 待决请求记录（JSONL 格式）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingRecord {
    /// 提交时间戳
    pub ts: DateTime<Utc>,
    /// 待决的调度请求
    pub request: NotificationRequest,
}

/// 文件后端
pub struct FileAuthority {
    path: PathBuf,
}

impl FileAuthority {
    /// 创建文件后端
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// 默认待决文件路径
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("wake-notify")
            .join("pending.jsonl")
    }

    /// 待决文件路径
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// 读取当前待决请求集合
    pub fn pending(&self) -> Vec<PendingRecord> {
        if !self.path.exists() {
            return Vec::new();
        }

        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(_) => return Vec::new(),
        };

        let reader = BufReader::new(file);
        reader
            .lines()
            .filter_map(|line| line.ok())
            .filter_map(|line| serde_json::from_str(&line).ok())
            .collect()
    }

    /// 重写整个待决文件（独占锁 + 临时文件 + 原子改名）
    fn rewrite(&self, records: &[PendingRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let lock_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        lock_file.lock_exclusive()?;

        let temp_path = self.path.with_extension("tmp");
        {
            let mut temp_file = File::create(&temp_path)?;
            for record in records {
                writeln!(temp_file, "{}", serde_json::to_string(record)?)?;
            }
        }
        fs::rename(&temp_path, &self.path)?;

        lock_file.unlock()?;
        Ok(())
    }
}

#[async_trait]
impl NotificationAuthority for FileAuthority {
    fn name(&self) -> &str {
        "file"
    }

    async fn request_authorization(&self, options: AuthorizationOptions) -> anyhow::Result<bool> {
        debug!(
            badge = options.badge,
            alert = options.alert,
            sound = options.sound,
            "Authorization granted"
        );
        Ok(true)
    }

    fn set_categories(&self, categories: &[NotificationCategory]) {
        debug!(count = categories.len(), "Notification categories set");
    }

    async fn add(&self, request: &NotificationRequest) -> Result<(), SchedulingError> {
        let mut records = self.pending();
        let before = records.len();

        // 同标识符的待决请求被替换而不是堆叠
        records.retain(|r| r.request.identifier != request.identifier);
        let replaced = records.len() < before;

        records.push(PendingRecord {
            ts: Utc::now(),
            request: request.clone(),
        });

        self.rewrite(&records)
            .map_err(|e| SchedulingError::new(e.to_string()))?;

        info!(
            identifier = %request.identifier,
            trigger = %request.trigger,
            replaced,
            path = %self.path.display(),
            "Pending request recorded"
        );
        Ok(())
    }

    fn set_badge(&self, value: u32) {
        debug!(badge = value, "Badge display updated");
    }
}
