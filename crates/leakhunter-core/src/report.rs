//! 结果报告类型（JSON 输出用）
use serde::Serialize;
use std::path::PathBuf;

use crate::types::KeyCandidate;

/// 单份日志文件的检查结果；零命中的文件同样保留一条记录。
#[derive(Debug, Clone, Serialize)]
pub struct LogReport {
    pub file: PathBuf,
    pub count: usize,
    /// 命中候选的十六进制列表（按钱包内出现顺序）
    pub matches: Vec<KeyCandidate>,
}

/// 整次扫描的汇总报告
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub wallet: PathBuf,
    pub keys_found: usize,
    pub logs: Vec<LogReport>,
}
