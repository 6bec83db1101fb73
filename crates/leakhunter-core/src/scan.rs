//! 扫描主流程：钱包单遍扫描 → 日志泄漏检查
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::leak::{build_key_automaton, check_log_file, list_log_files};
use crate::options::{OutputFormat, ScanOptions, ScanStats};
use crate::report::{LogReport, ScanReport};
use crate::scanner::HeaderScanner;
use crate::types::KeyCandidate;

/// 执行整次扫描并把结果流式写入 `out`
/// - 阶段一：整读钱包文件，逐字节过头匹配状态机，按文件顺序收集候选私钥；
///   Text 格式下每捕获一把即写一行进度。
/// - 阶段二：对 `<env>/database` 下每份日志写一行汇总（命中数 + 十六进制
///   列表）；Json 格式改为最后写出单个 ScanReport 文档。
/// 两阶段均为串行整读，不修改任何输入文件。
pub fn scan_and_write(opts: &ScanOptions, out: &mut dyn Write) -> Result<ScanStats> {
    let wallet_path = opts.env_dir.join(&opts.wallet_name);
    let logs_dir = opts.env_dir.join("database");
    let text = opts.format == OutputFormat::Text;

    let mut stats = ScanStats::default();

    // 阶段一：钱包文件
    let keys = scan_wallet(&wallet_path, out, text)?;
    stats.keys_found = keys.len();

    // 阶段二：日志目录
    if text {
        writeln!(out, "Checking log files now")?;
    }
    let ac = build_key_automaton(&keys)?;
    let mut logs: Vec<LogReport> = Vec::new();
    for path in list_log_files(&logs_dir)? {
        let report = check_log_file(&path, &keys, &ac)?;
        stats.log_files_checked += 1;
        stats.leaks_found += report.count;
        if text {
            write_log_line(out, &report)?;
        } else {
            logs.push(report);
        }
    }

    if !text {
        let report = ScanReport { wallet: wallet_path, keys_found: keys.len(), logs };
        serde_json::to_writer(&mut *out, &report)?;
        writeln!(out)?;
    }

    Ok(stats)
}

/// 整读钱包并过状态机；`text` 为真时每把私钥写一行进度。
fn scan_wallet(wallet_path: &Path, out: &mut dyn Write, text: bool) -> Result<Vec<KeyCandidate>> {
    let bytes = std::fs::read(wallet_path)
        .with_context(|| format!("read wallet file {}", wallet_path.display()))?;

    let mut scanner = HeaderScanner::new();
    let mut keys = Vec::new();
    for &b in &bytes {
        if let Some(key) = scanner.feed(b) {
            keys.push(key);
            if text {
                writeln!(out, "Found a private key {}", keys.len())?;
            }
        }
    }
    if let Some(key) = scanner.finish() {
        keys.push(key);
        if text {
            writeln!(out, "Found a private key {}", keys.len())?;
        }
    }
    Ok(keys)
}

/// 单份日志的汇总行：`Found N private keys in PATH`，有命中时附十六进制列表
fn write_log_line(out: &mut dyn Write, report: &LogReport) -> Result<()> {
    if report.matches.is_empty() {
        writeln!(out, "Found 0 private keys in {}", report.file.display())?;
    } else {
        let hexes: Vec<String> = report.matches.iter().map(|k| k.to_hex()).collect();
        writeln!(
            out,
            "Found {} private keys in {}: {}",
            report.count,
            report.file.display(),
            hexes.join(" ")
        )?;
    }
    Ok(())
}
