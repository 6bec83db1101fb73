//! 日志泄漏检查（Aho-Corasick 多模式子串搜索）
//!
//! 对 `database/` 目录下的每份写前日志整读后检查：任一候选私钥的 32 字节
//! 若以连续子串出现，即视为泄漏。多候选用一座 AC 自动机一次建成；与逐一
//! 朴素搜索可观测等价。

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use aho_corasick::AhoCorasick;

use crate::report::LogReport;
use crate::types::KeyCandidate;

/// 列出日志目录（深度 1，仅常规文件），按文件名排序保证输出顺序可复现。
pub(crate) fn list_log_files(logs_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = vec![];
    for entry in WalkDir::new(logs_dir).min_depth(1).max_depth(1) {
        // 目录不存在/不可读属于致命 I/O 错误，直接向上传播
        let entry =
            entry.with_context(|| format!("list log directory {}", logs_dir.display()))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// 检查单份日志文件，返回其命中记录（零命中亦返回，count 为 0）。
/// 重复候选各自独立计数，与逐一包含性检查口径一致。
pub(crate) fn check_log_file(
    path: &Path,
    keys: &[KeyCandidate],
    ac: &AhoCorasick,
) -> Result<LogReport> {
    let contents = std::fs::read(path)
        .with_context(|| format!("read log file {}", path.display()))?;

    // 收集命中的模式下标；重叠迭代保证同位置的重复候选都被报告
    let mut hit_ids: HashSet<usize> = HashSet::new();
    for m in ac.find_overlapping_iter(&contents) {
        hit_ids.insert(m.pattern().as_usize());
        if hit_ids.len() == keys.len() {
            break;
        }
    }

    let matches: Vec<KeyCandidate> = keys
        .iter()
        .enumerate()
        .filter(|(i, _)| hit_ids.contains(i))
        .map(|(_, k)| k.clone())
        .collect();

    Ok(LogReport { file: path.to_path_buf(), count: matches.len(), matches })
}

/// 在候选集合上构建 AC 自动机（候选为空时得到匹配不到任何内容的空机）。
pub(crate) fn build_key_automaton(keys: &[KeyCandidate]) -> Result<AhoCorasick> {
    AhoCorasick::new(keys.iter().map(|k| k.as_bytes()))
        .context("build key search automaton")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan_bytes;
    use crate::marker::PRIVKEY_HEADER;
    use std::fs;

    fn keys_of(raw: &[[u8; 32]]) -> Vec<KeyCandidate> {
        let mut data = Vec::new();
        for k in raw {
            data.extend_from_slice(&PRIVKEY_HEADER);
            data.extend_from_slice(k);
        }
        scan_bytes(&data)
    }

    #[test]
    fn log_containing_key_reports_count_one() {
        let dir = tempfile::tempdir().unwrap();
        let keys = keys_of(&[[0x5au8; 32]]);
        let leaked = dir.path().join("log.0000000001");
        let mut contents = b"bdb log prelude ".to_vec();
        contents.extend_from_slice(keys[0].as_bytes());
        contents.extend_from_slice(b" trailer");
        fs::write(&leaked, &contents).unwrap();

        let ac = build_key_automaton(&keys).unwrap();
        let report = check_log_file(&leaked, &keys, &ac).unwrap();
        assert_eq!(report.count, 1);
        assert_eq!(report.matches, keys);
    }

    #[test]
    fn log_without_key_reports_count_zero() {
        let dir = tempfile::tempdir().unwrap();
        let keys = keys_of(&[[0x5au8; 32]]);
        let clean = dir.path().join("log.0000000002");
        fs::write(&clean, b"nothing interesting here").unwrap();

        let ac = build_key_automaton(&keys).unwrap();
        let report = check_log_file(&clean, &keys, &ac).unwrap();
        assert_eq!(report.count, 0);
        assert!(report.matches.is_empty());
    }

    #[test]
    fn no_candidates_still_reports_zero_for_every_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("log.0000000001"), b"abc").unwrap();
        let keys: Vec<KeyCandidate> = vec![];

        let ac = build_key_automaton(&keys).unwrap();
        for path in list_log_files(dir.path()).unwrap() {
            let report = check_log_file(&path, &keys, &ac).unwrap();
            assert_eq!(report.count, 0);
        }
    }

    #[test]
    fn duplicate_candidates_each_counted() {
        let dir = tempfile::tempdir().unwrap();
        let keys = keys_of(&[[0x42u8; 32], [0x42u8; 32]]);
        assert_eq!(keys.len(), 2);
        let leaked = dir.path().join("log.0000000003");
        fs::write(&leaked, keys[0].as_bytes()).unwrap();

        let ac = build_key_automaton(&keys).unwrap();
        let report = check_log_file(&leaked, &keys, &ac).unwrap();
        assert_eq!(report.count, 2);
    }

    #[test]
    fn log_files_listed_sorted_and_dirs_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("log.0000000002"), b"").unwrap();
        fs::write(dir.path().join("log.0000000001"), b"").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let files = list_log_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(|s| s.to_str()))
            .collect();
        assert_eq!(names, vec!["log.0000000001", "log.0000000002"]);
    }

    #[test]
    fn missing_log_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_log_files(&dir.path().join("database")).is_err());
    }
}
