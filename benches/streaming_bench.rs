use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use workflow_chat::streaming::{LineBuffer, StreamAssembler, data_payload};

fn event_stream_body(frames: usize) -> Vec<u8> {
    let mut body = Vec::new();
    for i in 0..frames {
        body.extend_from_slice(
            format!("data: {{\"text\":\"fragment {} of the reply \"}}\n", i).as_bytes(),
        );
    }
    body
}

fn benchmark_line_buffer(c: &mut Criterion) {
    let body = event_stream_body(256);

    let mut group = c.benchmark_group("line_buffer");
    group.throughput(Throughput::Bytes(body.len() as u64));
    group.bench_function("push_whole_body", |b| {
        b.iter(|| {
            let mut buf = LineBuffer::new();
            black_box(buf.push(black_box(&body)));
        });
    });
    group.finish();
}

fn benchmark_frame_parse(c: &mut Criterion) {
    let lines = vec![
        "data: {\"text\":\"hello\"}",
        "event: delta",
        ": keepalive",
        "data: {\"sessionId\":\"abc\"}",
    ];

    c.bench_function("data_payload", |b| {
        b.iter(|| {
            for line in &lines {
                black_box(data_payload(black_box(line)));
            }
        });
    });
}

fn benchmark_reassembly(c: &mut Criterion) {
    let body = event_stream_body(256);

    let mut group = c.benchmark_group("reassembly");
    group.throughput(Throughput::Bytes(body.len() as u64));

    for chunk_size in [16usize, 256, 4096] {
        group.bench_function(format!("chunks_{}", chunk_size), |b| {
            b.iter(|| {
                let mut asm = StreamAssembler::new();
                let mut total = 0usize;
                for chunk in body.chunks(chunk_size) {
                    for fragment in asm.feed(black_box(chunk)) {
                        total += fragment.len();
                    }
                }
                black_box(total)
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_line_buffer,
    benchmark_frame_parse,
    benchmark_reassembly
);
criterion_main!(benches);
