//! Path: native/mulberry_core/src/lib.rs
//! Summary: Mulberry32 ジェネレータ本体・定数・派生操作のモジュール宣言と pub use

pub mod constants;
pub mod derived;
pub mod rng;

pub use constants::{INCREMENT, REFERENCE_COUNT, REFERENCE_SEED, REFERENCE_SEQUENCE};
pub use rng::Mulberry32;
