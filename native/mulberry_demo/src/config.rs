//! Path: native/mulberry_demo/src/config.rs
//! Summary: デモの bpaf オプション定義（既定値 → 環境変数 → 位置引数）と値パーサ

use bpaf::*;
use thiserror::Error;

use mulberry_core::{REFERENCE_COUNT, REFERENCE_SEED};

pub const SEED_ENV: &str = "MULBERRY_SEED";
pub const COUNT_ENV: &str = "MULBERRY_COUNT";
pub const MAX_COUNT: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub seed: u32,
    pub count: usize,
    /// `next_f64` を出力する（既定は `next_u32`）
    pub float: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid seed {0:?}: expected a u32 (decimal or 0x hex)")]
    InvalidSeed(String),
    #[error("invalid count {0:?}: expected a non-negative integer")]
    InvalidCount(String),
    #[error("count {0} exceeds the limit of {max}", max = MAX_COUNT)]
    CountTooLarge(usize),
}

/// Set up bpaf argument parsing.
pub fn options() -> OptionParser<DemoConfig> {
    options_with_env(SEED_ENV, COUNT_ENV)
}

/// 位置引数が環境変数より優先される（env 側はコマンドラインを消費しない）
pub(crate) fn options_with_env(
    seed_env: &'static str,
    count_env: &'static str,
) -> OptionParser<DemoConfig> {
    let float = short('f')
        .long("float")
        .help("Print next_f64() in [0, 1) instead of next_u32()")
        .switch();

    let seed_arg = positional::<String>("SEED").help("Seed, decimal or 0x hex");
    let seed_env = env(seed_env)
        .help("Seed when no SEED argument is given")
        .argument::<String>("SEED");
    let seed = construct!([seed_arg, seed_env])
        .parse(|raw| parse_seed(&raw))
        .fallback(REFERENCE_SEED)
        .display_fallback();

    let count_arg = positional::<String>("COUNT").help("Number of values to print");
    let count_env = env(count_env)
        .help("Count when no COUNT argument is given")
        .argument::<String>("COUNT");
    let count = construct!([count_arg, count_env])
        .parse(|raw| parse_count(&raw))
        .fallback(REFERENCE_COUNT)
        .display_fallback();

    construct!(DemoConfig { float, seed, count })
        .to_options()
        .descr("mulberry_demo: print a reproducible Mulberry32 sequence")
}

pub fn parse_seed(raw: &str) -> Result<u32, ConfigError> {
    let s = raw.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => s.replace('_', "").parse::<u32>(),
    };
    parsed.map_err(|_| ConfigError::InvalidSeed(raw.to_string()))
}

pub fn parse_count(raw: &str) -> Result<usize, ConfigError> {
    let n = raw
        .trim()
        .replace('_', "")
        .parse::<usize>()
        .map_err(|_| ConfigError::InvalidCount(raw.to_string()))?;
    if n > MAX_COUNT {
        return Err(ConfigError::CountTooLarge(n));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 各テストで別名の環境変数を使う（並列実行で干渉しない）
    fn run(args: &[&str], seed_env: &'static str, count_env: &'static str) -> Result<DemoConfig, String> {
        options_with_env(seed_env, count_env)
            .run_inner(args)
            .map_err(|e| e.unwrap_stderr())
    }

    #[test]
    fn defaults_are_reference_stream() {
        let cfg = run(&[], "MULBERRY_T1_SEED", "MULBERRY_T1_COUNT").unwrap();
        assert_eq!(cfg, DemoConfig { seed: 99, count: 10, float: false });
    }

    #[test]
    fn env_overrides_defaults() {
        std::env::set_var("MULBERRY_T2_SEED", "0xFFFFFFFF");
        std::env::set_var("MULBERRY_T2_COUNT", "3");
        let cfg = run(&[], "MULBERRY_T2_SEED", "MULBERRY_T2_COUNT").unwrap();
        assert_eq!(cfg.seed, u32::MAX);
        assert_eq!(cfg.count, 3);
    }

    #[test]
    fn args_override_env() {
        std::env::set_var("MULBERRY_T3_SEED", "5");
        let cfg = run(&["12345", "20", "--float"], "MULBERRY_T3_SEED", "MULBERRY_T3_COUNT").unwrap();
        assert_eq!(cfg, DemoConfig { seed: 12345, count: 20, float: true });
    }

    #[test]
    fn bad_env_value_is_an_error() {
        std::env::set_var("MULBERRY_T4_COUNT", "lots");
        let err = run(&[], "MULBERRY_T4_SEED", "MULBERRY_T4_COUNT").unwrap_err();
        assert!(err.contains("expected a non-negative integer"), "{err}");
    }

    #[test]
    fn negative_seed_reaches_seed_parser() {
        let err = run(&["--", "-1"], "MULBERRY_T5_SEED", "MULBERRY_T5_COUNT").unwrap_err();
        assert!(err.contains("expected a u32"), "{err}");
    }

    #[test]
    fn unknown_flag_and_extra_args_rejected() {
        assert!(run(&["--verbose"], "MULBERRY_T6_SEED", "MULBERRY_T6_COUNT").is_err());
        assert!(run(&["1", "2", "3"], "MULBERRY_T6_SEED", "MULBERRY_T6_COUNT").is_err());
    }

    #[test]
    fn parse_seed_accepts_decimal_and_hex() {
        assert_eq!(parse_seed("0"), Ok(0));
        assert_eq!(parse_seed(" 4294967295 "), Ok(u32::MAX));
        assert_eq!(parse_seed("0x6D2B79F5"), Ok(0x6D2B79F5));
        assert_eq!(parse_seed("1_000"), Ok(1000));
    }

    #[test]
    fn parse_seed_rejects_out_of_range() {
        assert!(matches!(parse_seed("4294967296"), Err(ConfigError::InvalidSeed(_))));
        assert!(matches!(parse_seed("-1"), Err(ConfigError::InvalidSeed(_))));
        assert!(matches!(parse_seed("0x"), Err(ConfigError::InvalidSeed(_))));
    }

    #[test]
    fn count_limit_enforced() {
        assert_eq!(parse_count("1000000"), Ok(MAX_COUNT));
        assert_eq!(parse_count("1000001"), Err(ConfigError::CountTooLarge(1_000_001)));
        assert!(matches!(parse_count("ten"), Err(ConfigError::InvalidCount(_))));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ConfigError::CountTooLarge(5_000_000).to_string(),
            "count 5000000 exceeds the limit of 1000000"
        );
        assert_eq!(
            ConfigError::InvalidSeed("x".to_string()).to_string(),
            "invalid seed \"x\": expected a u32 (decimal or 0x hex)"
        );
    }
}
