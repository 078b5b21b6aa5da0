use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use draughts_core::game_state::draughts_rules::{
    AMERICAN_CHECKERS, AMERICAN_CHECKERS_STARTING_FEN, INTERNATIONAL_DRAUGHTS,
};
use draughts_core::game_state::game_state::GameState;
use draughts_core::utils::fen_generator::generate_fen;
use draughts_core::utils::fen_parser::parse_fen;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    square_count: usize,
}

const CASES_QUICK: &[BenchCase] = &[BenchCase {
    name: "checkers_start",
    fen: AMERICAN_CHECKERS_STARTING_FEN,
    square_count: 32,
}];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "checkers_start",
        fen: AMERICAN_CHECKERS_STARTING_FEN,
        square_count: 32,
    },
    BenchCase {
        name: "checkers_kings",
        fen: "[FEN \"B:B:W18,24,27,28,K10,K15:B12,16,20,K22,K25,K29\"]",
        square_count: 32,
    },
    BenchCase {
        name: "international_mid",
        fen: "W:W27,28,32,33,34,35,36,37,38,K40,41,45,G12:B6,7,8,12,13,14,15,17,18,19,K23,24.",
        square_count: 50,
    },
];

fn selected_cases() -> &'static [BenchCase] {
    match std::env::var("DRAUGHTS_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn bench_fen_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("fen_codec");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for case in selected_cases() {
        let game = parse_fen(case.fen, case.square_count).expect("benchmark FEN should parse");
        let encoded = generate_fen(&game);
        assert_eq!(
            parse_fen(&encoded, case.square_count).expect("encoded FEN should parse"),
            game,
            "round trip mismatch for {}",
            case.name
        );

        group.bench_with_input(BenchmarkId::new("parse", case.name), case, |b, case| {
            b.iter(|| parse_fen(black_box(case.fen), case.square_count).expect("parse should succeed"));
        });
        group.bench_with_input(BenchmarkId::new("generate", case.name), &game, |b, game| {
            b.iter(|| generate_fen(black_box(game)));
        });
    }

    let variants = [AMERICAN_CHECKERS, INTERNATIONAL_DRAUGHTS];
    for variant in variants {
        let game = GameState::from_variant(&variant).expect("built-in variant");
        group.bench_with_input(
            BenchmarkId::new("round_trip", variant.name),
            &game,
            |b, game| {
                b.iter(|| {
                    let encoded = generate_fen(black_box(game));
                    parse_fen(&encoded, variant.square_count()).expect("round trip should parse")
                });
            },
        );
    }

    group.finish();
}

criterion_group!(fen_codec_benches, bench_fen_codec);
criterion_main!(fen_codec_benches);
