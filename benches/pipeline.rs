// benches/pipeline.rs
use std::io::Write;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use serde_json::json;

use esports_norm::config::{Game, Options};
use esports_norm::progress::NullProgress;
use esports_norm::raw;
use esports_norm::config::games::SourceFormat;
use esports_norm::{engine, store};

const TEAMS: [&str; 8] = ["Vitality", "G2", "FaZe", "NaVi", "Spirit", "MOUZ", "Heroic", "TBD"];

/// Synthetic Counter-Strike batch; roughly one row in eight hits a filter.
fn write_batch(opts: &Options, n: usize) {
    let path = opts.raw_path("counterstrike.jsonl");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    let mut f = std::io::BufWriter::new(std::fs::File::create(path).unwrap());
    for i in 0..n {
        let (a, b) = (TEAMS[i % 8], TEAMS[(i / 8 + i + 1) % 8]);
        let row = json!({
            "date": format!("2023-{:02}-{:02} 12:00:00", i % 12 + 1, i % 28 + 1),
            "match2id": format!("M{i:06}"),
            "pagename": "BLAST/Premier/2023",
            "winner": if i % 3 == 0 { "2" } else { "1" },
            "bestof": if i % 5 == 0 { 1 } else { 3 },
            "match2opponents": [
                {"name": a, "template": a.to_lowercase(), "teamtemplate": {"name": a}, "score": i % 3},
                {"name": b, "template": b.to_lowercase(), "teamtemplate": {"name": b}, "score": (i + 1) % 3}
            ]
        });
        writeln!(f, "{row}").unwrap();
    }
}

fn bench_pipeline(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let opts = Options::with_data_dir(dir.path());
    write_batch(&opts, 20_000);
    let raw_path = opts.raw_path("counterstrike.jsonl");

    c.bench_function("raw_load_match2", |b| {
        b.iter(|| {
            let batch = raw::load(black_box(&raw_path), SourceFormat::Match2, Some("https://liquipedia.net/counterstrike/")).unwrap();
            black_box(batch.rows.len())
        })
    });

    c.bench_function("process_counterstrike", |b| {
        b.iter(|| {
            let report = engine::process(Game::CounterStrike, black_box(&opts), &mut NullProgress).unwrap();
            black_box(report.rows_out)
        })
    });

    let table = store::load_canonical(&opts.output_path(Game::CounterStrike)).unwrap();
    c.bench_function("canonicalize", |b| {
        b.iter(|| black_box(store::canonicalize(black_box(table.clone())).len()))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
