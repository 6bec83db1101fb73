//! 公共类型（对外暴露）
use serde::{Serialize, Serializer};
use std::fmt;

use crate::marker::KEY_LEN;

/// 候选私钥：完整头匹配后捕获的 32 字节值，构造后不可变。
/// 序列化与 Debug 均输出小写十六进制，避免原始字节直接进入日志/JSON。
#[derive(Clone, PartialEq, Eq)]
pub struct KeyCandidate([u8; KEY_LEN]);

impl KeyCandidate {
    /// 由完整的 32 字节缓冲构造
    pub(crate) fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// 原始字节视图（子串检查用）
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// 小写十六进制表示
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for KeyCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyCandidate({})", self.to_hex())
    }
}

impl Serialize for KeyCandidate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}
