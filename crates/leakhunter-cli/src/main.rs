use anyhow::{Context, Result};
use clap::Parser;
use leakhunter_core::{scan_and_write, OutputFormat, ScanOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "leakhunter", version, about = "Berkeley DB 钱包私钥泄漏扫描")]
struct Cli {
    /// Berkeley DB 环境目录（含钱包文件与 database/ 日志子目录）
    #[arg(long = "berkeley_env_directory")]
    berkeley_env_directory: PathBuf,

    /// 环境目录内的钱包文件名
    #[arg(long = "unencrypted_wallet_name", default_value = "wallet.dat")]
    unencrypted_wallet_name: String,

    /// 输出格式：text（逐行）或 json（单文档）
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    format: String,
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    info!(env_dir = %cli.berkeley_env_directory.display(), wallet = %cli.unencrypted_wallet_name, "starting scan");

    let mut opts = ScanOptions::new(cli.berkeley_env_directory);
    opts.wallet_name = cli.unencrypted_wallet_name;
    opts.format = match cli.format.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Text,
    };

    // 结果写往标准输出（缓冲），I/O 错误带上下文向上传播为非零退出
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stats = scan_and_write(&opts, &mut out).context("scan failed")?;
    out.flush().ok();

    info!(
        keys_found = stats.keys_found,
        log_files_checked = stats.log_files_checked,
        leaks_found = stats.leaks_found,
        "scan finished"
    );

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 支持通过环境变量 RUST_LOG 控制日志等级，如：RUST_LOG=debug
    // 日志走 stderr，避免与标准输出上的扫描结果（尤其 JSON）混在一起
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
