//! 主管机构后端实现

pub mod file;
pub mod log;

pub use file::{FileAuthority, PendingRecord};
pub use log::LogAuthority;
