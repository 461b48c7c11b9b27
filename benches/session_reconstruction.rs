use std::hint::black_box;
use std::io::Write;

use claude_share::{ParseOptions, reconstruct_session};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use tempfile::NamedTempFile;

/// Generate a session log with N turns: prompt, three assistant fragments, tool result, progress
fn generate_session_file(num_turns: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();

    for i in 0..num_turns {
        let ts = format!("2025-01-15T10:{:02}:{:02}.000Z", (i / 60) % 60, i % 60);
        writeln!(
            file,
            r#"{{"type":"user","timestamp":"{ts}","message":{{"role":"user","content":"Question {i}"}}}}"#
        )
        .unwrap();
        writeln!(
            file,
            r#"{{"type":"assistant","timestamp":"{ts}","message":{{"id":"msg_{i}","content":[{{"type":"thinking","thinking":"Considering question {i}"}}]}}}}"#
        )
        .unwrap();
        writeln!(
            file,
            r#"{{"type":"assistant","timestamp":"{ts}","message":{{"id":"msg_{i}","content":[{{"type":"text","text":"Answer {i}"}}]}}}}"#
        )
        .unwrap();
        writeln!(
            file,
            r#"{{"type":"assistant","timestamp":"{ts}","message":{{"id":"msg_{i}","content":[{{"type":"tool_use","id":"toolu_{i}","name":"Read","input":{{"file_path":"/tmp/file{i}.rs"}}}}]}}}}"#
        )
        .unwrap();
        writeln!(
            file,
            r#"{{"type":"progress","timestamp":"{ts}","data":{{"type":"hook_progress"}}}}"#
        )
        .unwrap();
        writeln!(
            file,
            r#"{{"type":"user","timestamp":"{ts}","message":{{"role":"user","content":[{{"type":"tool_result","tool_use_id":"toolu_{i}","content":[{{"type":"text","text":"fn main() {{}}"}}]}}]}}}}"#
        )
        .unwrap();
    }

    file.flush().unwrap();
    file
}

fn bench_reconstruct_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconstruct_session");
    let options = ParseOptions::new(true, true);

    for size in [100, 1_000, 10_000].iter() {
        let file = generate_session_file(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| reconstruct_session(black_box(file.path()), &options).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reconstruct_session);
criterion_main!(benches);
