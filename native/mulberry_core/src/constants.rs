//! Path: native/mulberry_core/src/constants.rs
//! Summary: 状態加算定数・リファレンスシード・ゴールデン列の定数定義

/// 1 回の `next_u32` で状態に加算する奇数定数（mod 2^32）
pub const INCREMENT: u32 = 0x6D2B79F5;

// Reference stream (demo harness defaults and regression vector)
pub const REFERENCE_SEED: u32 = 99;
pub const REFERENCE_COUNT: usize = 10;

/// seed = 99 で `next_u32` を 10 回呼んだ結果。1bit でもずれたら移植バグ。
pub const REFERENCE_SEQUENCE: [u32; REFERENCE_COUNT] = [
    1118692146, 3456687457, 2323025554, 2964572940, 4890715,
    3511320825, 48751514,   452846334,  1703291702, 2881671998,
];
