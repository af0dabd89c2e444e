// tests/common/mod.rs
#![allow(dead_code)]
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use esports_norm::config::Options;
use serde_json::{Value, json};
use tempfile::TempDir;

pub fn workspace() -> (TempDir, Options) {
    let dir = tempfile::tempdir().unwrap();
    let opts = Options::with_data_dir(dir.path());
    (dir, opts)
}

/// Write raw JSON lines (strings are written verbatim) to `raw_data/{file}`.
pub fn write_raw(opts: &Options, file: &str, lines: &[Value]) -> PathBuf {
    let path = opts.raw_path(file);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let mut f = fs::File::create(&path).unwrap();
    for l in lines {
        match l {
            Value::String(s) => writeln!(f, "{s}").unwrap(),
            other => writeln!(f, "{other}").unwrap(),
        }
    }
    path
}

pub fn team(name: &str, score: i64) -> Value {
    json!({
        "name": name,
        "template": name.to_lowercase(),
        "teamtemplate": {"name": name, "page": name},
        "score": score,
        "status": "S",
        "type": "team"
    })
}

pub fn audit_lines(opts: &Options, game: esports_norm::config::Game, label: &str) -> Vec<Value> {
    let path = opts.audit_dir(game).join(format!("{label}.jsonl"));
    read_jsonl(&path)
}

pub fn read_jsonl(path: &Path) -> Vec<Value> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

/// Every file under `dir`, sorted, with contents.
pub fn tree_bytes(dir: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    let mut out = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(d) = stack.pop() {
        for e in fs::read_dir(&d).unwrap() {
            let p = e.unwrap().path();
            if p.is_dir() {
                stack.push(p);
            } else {
                out.push((p.clone(), fs::read(&p).unwrap()));
            }
        }
    }
    out.sort();
    out
}
