//! Path: native/xtask/src/main.rs
//! Summary: reference-data サブコマンドで他実装との照合用リファレンス列ファイルを生成する xtask バイナリ

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use mulberry_core::Mulberry32;

const ALG_NAME: &str = "mulberry32";

/// Values per sample file
const VALUES_PER_SAMPLE: usize = 4096;

/// (sample id, seed)
const SAMPLES: &[(&str, u32)] = &[
    ("a", 0),
    ("b", 1),
    ("c", 99),
    ("d", 12345),
    ("e", u32::MAX),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::Builder::from_default_env().try_init();

    let args: Vec<String> = env::args().collect();
    let sub = args.get(1).map(|s| s.as_str()).unwrap_or("");

    if sub == "reference-data" || sub == "refdata" {
        let out_dir = match args.get(2) {
            Some(dir) => PathBuf::from(dir),
            None => find_project_root()?.join("reference"),
        };
        let written = reference_data(&out_dir)?;
        println!("Created {} files in {}", written, out_dir.display());
        Ok(())
    } else {
        eprintln!("Usage: cargo run -p xtask -- reference-data [OUT_DIR]");
        eprintln!("  Write {ALG_NAME} reference sequences ({VALUES_PER_SAMPLE} values per seed) as text files.");
        eprintln!("  OUT_DIR defaults to <workspace>/reference.");
        std::process::exit(1);
    }
}

fn reference_data(out_dir: &Path) -> io::Result<usize> {
    fs::create_dir_all(out_dir)?;
    let mut written = 0;
    for &(id, seed) in SAMPLES {
        write_sample(out_dir, id, "int", &render_ints(seed, VALUES_PER_SAMPLE))?;
        write_sample(out_dir, id, "double", &render_doubles(seed, VALUES_PER_SAMPLE))?;
        written += 2;
    }
    Ok(written)
}

fn write_sample(out_dir: &Path, id: &str, kind: &str, body: &str) -> io::Result<()> {
    let path = out_dir.join(format!("{ALG_NAME}_{id}_{kind}.txt"));
    fs::write(&path, body)
        .map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", path.display())))?;
    log::info!("+ {}", path.display());
    Ok(())
}

fn header(seed: u32, kind: &str) -> String {
    format!("# reference data for {ALG_NAME}\n# algo {ALG_NAME}\n# seed {seed}\n# type {kind}\n\n")
}

/// 1 行 1 値、8 桁の小文字 16 進
fn render_ints(seed: u32, count: usize) -> String {
    let mut out = header(seed, "int");
    let mut rng = Mulberry32::new(seed);
    for v in rng.by_ref().take(count) {
        let _ = writeln!(out, "{v:08x}");
    }
    out
}

fn render_doubles(seed: u32, count: usize) -> String {
    let mut out = header(seed, "double");
    let mut rng = Mulberry32::new(seed);
    for _ in 0..count {
        let _ = writeln!(out, "{:?}", rng.next_f64());
    }
    out
}

/// `native/` を含むディレクトリまで親を辿る
fn find_project_root() -> io::Result<PathBuf> {
    let cwd = env::current_dir()?;
    let mut p = cwd.as_path();
    loop {
        if p.join("native").is_dir() && p.join("Cargo.toml").exists() {
            return Ok(p.to_path_buf());
        }
        match p.parent() {
            Some(parent) => p = parent,
            None => return Ok(cwd),
        }
    }
}
