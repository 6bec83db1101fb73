//! 扫描选项与统计信息（模块）
use std::path::PathBuf;

/// 结果输出格式
/// - Text：行文本，一把私钥一行进度、一份日志文件一行汇总。
/// - Json：单个 JSON 文档（钱包路径、私钥数、逐日志命中列表）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// 扫描选项
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Berkeley DB 环境目录：钱包文件与 `database/` 日志子目录所在处
    pub env_dir: PathBuf,
    /// 环境目录内钱包文件名；默认 `wallet.dat`
    pub wallet_name: String,
    /// 输出格式：Text（默认）或 Json
    pub format: OutputFormat,
}

impl ScanOptions {
    pub fn new(env_dir: PathBuf) -> Self {
        Self {
            env_dir,
            wallet_name: "wallet.dat".to_string(),
            format: OutputFormat::Text,
        }
    }
}

/// 扫描统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone)]
pub struct ScanStats {
    pub keys_found: usize,
    pub log_files_checked: usize,
    pub leaks_found: usize,
}
