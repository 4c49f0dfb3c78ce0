//! Path: native/mulberry_core/src/rng.rs
//! Summary: 決定論的 Mulberry32 乱数ジェネレータ（32bit 状態 1 ワード・アロケーションなし）

use crate::constants::INCREMENT;

/// Mulberry32 generator.
/// State is a single `u32`; every seed (including 0 and `u32::MAX`) is valid.
/// Not thread-safe by itself: give each thread/task its own instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// シードをそのまま状態に設定する（変換なし）
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// 現在の状態ワード。k 回呼んだ後は `seed + k * INCREMENT (mod 2^32)`
    pub fn state(&self) -> u32 {
        self.state
    }

    /// 状態を進めて次の 32bit 値を返す。
    /// 乗算は下位 32bit への切り詰め、右シフトは u32 の論理シフト。
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// `dest.len()` 回 `next_u32` を呼んだのと同じ値でバッファを埋める
    pub fn fill_u32(&mut self, dest: &mut [u32]) {
        for slot in dest.iter_mut() {
            *slot = self.next_u32();
        }
    }
}

/// Infinite stream; `next` never returns `None`.
impl Iterator for Mulberry32 {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        Some(self.next_u32())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
