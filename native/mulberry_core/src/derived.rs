//! Path: native/mulberry_core/src/derived.rs
//! Summary: next_u32 の上に重ねた派生操作（浮動小数・範囲整数・bool）

use crate::rng::Mulberry32;

/// 2^-32
const U32_TO_F64: f64 = 1.0 / 4_294_967_296.0;
/// 2^-24 (f32 mantissa width)
const U24_TO_F32: f32 = 1.0 / 16_777_216.0;

impl Mulberry32 {
    /// [0, 1) の f64。`next_u32() / 2^32`
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) * U32_TO_F64
    }

    /// [0, 1) の f32。上位 24bit だけを使うので 1.0 には丸まらない
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 * U24_TO_F32
    }

    /// Unbiased integer in `[0, range)` (Lemire multiply-and-reject).
    /// `range == 0` returns 0 without advancing the state.
    pub fn next_bounded(&mut self, range: u32) -> u32 {
        if range == 0 {
            return 0;
        }
        let mut m = u64::from(self.next_u32()) * u64::from(range);
        let mut leftover = m as u32;
        if leftover < range {
            // 2^32 mod range
            let threshold = range.wrapping_neg() % range;
            while leftover < threshold {
                m = u64::from(self.next_u32()) * u64::from(range);
                leftover = m as u32;
            }
        }
        (m >> 32) as u32
    }

    /// Inclusive `[min, max]`; bounds are swapped when `min > max`.
    pub fn next_range(&mut self, min: u32, max: u32) -> u32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        match (hi - lo).checked_add(1) {
            Some(span) => lo + self.next_bounded(span),
            None => self.next_u32(),
        }
    }

    pub fn next_bool(&mut self) -> bool {
        self.next_u32() >> 31 == 1
    }
}
