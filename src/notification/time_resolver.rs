//! 触发时间解析 - 从可选的显式输入推导通知触发时间
//!
//! 两个输入字段（小时、分钟）都是自由文本：能解析成整数就原样使用，
//! 解析失败或留空则回退到当前墙上时钟。分钟回退时加上默认偏移，
//! 且不做 60 进位，保持源系统的既有行为。

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};

/// 分钟字段留空时加在当前分钟上的默认偏移
pub const DEFAULT_MINUTE_OFFSET: u32 = 2;

/// 日历触发时间（单次触发，不重复）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireTime {
    /// 触发小时
    pub hour: u32,
    /// 触发分钟（回退分支下可能 ≥ 60，原样传递）
    pub minute: u32,
    /// 触发秒，恒为 0
    pub second: u32,
    /// 是否重复，恒为 false
    pub repeats: bool,
}

impl FireTime {
    /// 创建单次触发时间
    pub fn once(hour: u32, minute: u32) -> Self {
        Self {
            hour,
            minute,
            second: 0,
            repeats: false,
        }
    }
}

impl std::fmt::Display for FireTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.hour, self.minute)
    }
}

/// 触发时间解析器
#[derive(Debug, Clone, Copy)]
pub struct TimeResolver {
    /// 分钟字段留空时的偏移
    default_minute_offset: u32,
}

impl TimeResolver {
    /// 创建解析器
    pub fn new(default_minute_offset: u32) -> Self {
        Self {
            default_minute_offset,
        }
    }

    /// 基于当前墙上时钟解析触发时间
    ///
    /// 解析结果同时就是回显值：字段留空时调用方可以直接展示解析出的小时/分钟。
    pub fn resolve(&self, hour_field: Option<&str>, minute_field: Option<&str>) -> FireTime {
        let now = Local::now();
        self.resolve_at(hour_field, minute_field, now.hour(), now.minute())
    }

    /// 基于给定当前时间解析（用于测试）
    ///
    /// 解析失败不报错，降级到留空分支。分钟偏移不做 60 进位。
    pub fn resolve_at(
        &self,
        hour_field: Option<&str>,
        minute_field: Option<&str>,
        current_hour: u32,
        current_minute: u32,
    ) -> FireTime {
        let hour = parse_field(hour_field).unwrap_or(current_hour);
        let minute =
            parse_field(minute_field).unwrap_or(current_minute + self.default_minute_offset);
        FireTime::once(hour, minute)
    }
}

impl Default for TimeResolver {
    fn default() -> Self {
        Self::new(DEFAULT_MINUTE_OFFSET)
    }
}

/// 解析自由文本字段；空串和非整数都视为缺省
fn parse_field(field: Option<&str>) -> Option<u32> {
    field.and_then(|s| s.trim().parse::<u32>().ok())
}
