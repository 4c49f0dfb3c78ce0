//! Path: native/mulberry_demo/src/main.rs
//! Summary: シードから Mulberry32 列を生成して 1 行で出力するデモバイナリ

mod config;

use mulberry_core::Mulberry32;

use config::options;

/// `[v1, v2, ...]` 形式
fn render_u32(rng: &mut Mulberry32, count: usize) -> String {
    let values: Vec<u32> = rng.by_ref().take(count).collect();
    format!("{values:?}")
}

fn render_f64(rng: &mut Mulberry32, count: usize) -> String {
    let values: Vec<f64> = (0..count).map(|_| rng.next_f64()).collect();
    format!("{values:?}")
}

fn main() {
    let _ = env_logger::Builder::from_default_env().try_init();

    let cfg = options().run();
    log::info!(
        "mulberry32 seed={} (0x{:08x}) count={} float={}",
        cfg.seed,
        cfg.seed,
        cfg.count,
        cfg.float
    );

    let mut rng = Mulberry32::new(cfg.seed);
    let line = if cfg.float {
        render_f64(&mut rng, cfg.count)
    } else {
        render_u32(&mut rng, cfg.count)
    };
    println!("{line}");
    log::debug!("final state 0x{:08x}", rng.state());
}
