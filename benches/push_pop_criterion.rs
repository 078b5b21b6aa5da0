use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use draughts_core::game_state::draughts_types::{GameState, Move};

const LINE_FEN: &str = "[FEN \"W:W6,22:B18,K27\"]";

/// A short line covering a capture, a king move and a promotion.
fn build_line(board: &GameState) -> Vec<Move> {
    vec![
        board.build_move(vec![21, 14], &[17]),
        Move::new(vec![26, 22]),
        Move::new(vec![5, 0]),
        Move::new(vec![22, 26]),
    ]
}

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let start = GameState::from_fen(LINE_FEN, 32).expect("benchmark FEN should parse");
    let line = build_line(&start);

    // Correctness guard before benchmarking.
    let mut guard = start.clone();
    for mv in &line {
        guard.push_checked(mv.clone(), true).expect("benchmark line should be legal");
    }
    for _ in &line {
        guard.pop(true).expect("benchmark line should unwind");
    }
    assert_eq!(guard, start);

    group.throughput(Throughput::Elements(line.len() as u64));
    group.bench_with_input(BenchmarkId::from_parameter("line_4"), &line, |b, line| {
        let mut board = start.clone();
        b.iter(|| {
            for mv in line {
                board.push(black_box(mv.clone()), true);
            }
            for _ in line {
                black_box(board.pop(true).expect("pop should succeed"));
            }
        });
    });

    group.finish();
}

criterion_group!(push_pop_benches, bench_push_pop);
criterion_main!(push_pop_benches);
