//! 头匹配状态机（钱包文件单遍字节扫描）

use crate::marker::{KEY_LEN, PRIVKEY_HEADER};
use crate::types::KeyCandidate;

/// 头匹配扫描器：逐字节推进的瞬态游标。
/// - `match_idx`：当前已匹配到 `PRIVKEY_HEADER` 的第几个字节；
/// - `buf`：捕获中的部分私钥（0..=32 字节）；
/// - `capturing`：是否处于捕获状态。
/// 每次成功捕获或头失配后回到初始状态。
#[derive(Debug, Default)]
pub struct HeaderScanner {
    match_idx: usize,
    buf: Vec<u8>,
    capturing: bool,
}

impl HeaderScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// 送入一个字节；恰好在第 33 个字节到来时给出上一个捕获完成的候选。
    ///
    /// 捕获满 32 字节后并不立即产出，而是在下一个字节到来时先敲定候选，
    /// 再把同一个字节送回头匹配器（不丢字节，下一段头可以紧贴上一个
    /// 私钥开始）。此为对原工具行为的刻意保留，不是 off-by-one。
    pub fn feed(&mut self, b: u8) -> Option<KeyCandidate> {
        if self.capturing {
            if self.buf.len() < KEY_LEN {
                self.buf.push(b);
                return None;
            }
            let key = self.take_buf();
            self.step_header(b);
            return Some(key);
        }
        self.step_header(b);
        None
    }

    /// 流结束：若缓冲恰好满 32 字节则敲定为候选；不足 32 字节的截断
    /// 捕获静默丢弃。
    pub fn finish(&mut self) -> Option<KeyCandidate> {
        if self.capturing && self.buf.len() == KEY_LEN {
            return Some(self.take_buf());
        }
        self.match_idx = 0;
        self.buf.clear();
        self.capturing = false;
        None
    }

    /// 头匹配单步：命中则推进，推进到 9 即进入捕获态并清零索引；
    /// 失配直接回到索引 0，不回退重试当前字节（朴素重启，非 KMP）。
    fn step_header(&mut self, b: u8) {
        if b == PRIVKEY_HEADER[self.match_idx] {
            self.match_idx += 1;
            if self.match_idx == PRIVKEY_HEADER.len() {
                self.capturing = true;
                self.match_idx = 0;
            }
        } else {
            self.match_idx = 0;
        }
    }

    fn take_buf(&mut self) -> KeyCandidate {
        let mut bytes = [0u8; KEY_LEN];
        bytes.copy_from_slice(&self.buf);
        self.buf.clear();
        self.capturing = false;
        KeyCandidate::new(bytes)
    }
}

/// 对一段完整字节序列做单遍扫描，按文件顺序返回全部候选私钥。
pub fn scan_bytes(data: &[u8]) -> Vec<KeyCandidate> {
    let mut scanner = HeaderScanner::new();
    let mut keys = Vec::new();
    for &b in data {
        if let Some(key) = scanner.feed(b) {
            keys.push(key);
        }
    }
    if let Some(key) = scanner.finish() {
        keys.push(key);
    }
    keys
}
