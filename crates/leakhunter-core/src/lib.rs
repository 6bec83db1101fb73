//! 钱包私钥泄漏扫描核心库
//!
//! 设计要点：
//! - 两阶段扫描：先对钱包文件做字节级单遍扫描，按固定 9 字节 DER 头捕获
//!   其后 32 字节作为候选私钥；再对 `database/` 日志目录逐文件做子串检查。
//! - 全程单线程串行；每个文件整读入内存，作用域结束即关闭。
//! - 只读取输入，不产生任何落盘状态；结果以行文本（或 JSON）流式写入
//!   调用方提供的 writer。

mod leak;
mod marker;
mod options;
mod report;
mod scan;
mod scanner;
mod types;

pub use marker::{KEY_LEN, PRIVKEY_HEADER};
pub use options::{OutputFormat, ScanOptions, ScanStats};
pub use report::{LogReport, ScanReport};
pub use scan::scan_and_write;
pub use scanner::{scan_bytes, HeaderScanner};
pub use types::KeyCandidate;
