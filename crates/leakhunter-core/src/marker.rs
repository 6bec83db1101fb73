//! 私钥头标记常量

/// 固定 9 字节 DER 结构前缀：旧版 Berkeley DB 钱包中，未加密私钥记录的
/// 32 字节标量恰好紧跟在该序列之后（`04 20` 即 OCTET STRING，长度 0x20）。
pub const PRIVKEY_HEADER: [u8; 9] = [0xd6, 0x30, 0x81, 0xd3, 0x02, 0x01, 0x01, 0x04, 0x20];

/// 候选私钥长度（secp256k1 标量，固定 32 字节）
pub const KEY_LEN: usize = 32;
