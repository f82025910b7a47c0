use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use crush_ludo_chess::engine::turn_controller::TurnController;
use crush_ludo_chess::game_state::game_types::Team;
use crush_ludo_chess::move_generation::legal_move_generator::generate_moves_for_board;
use crush_ludo_chess::utils::match_harness::{play_random_match, MatchConfig};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    seed: u64,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "seed_1234",
        seed: 1234,
    },
    BenchCase {
        name: "seed_9000",
        seed: 9000,
    },
];

fn bench_move_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_generation");
    for case in CASES {
        let controller = TurnController::new(Some(case.seed));
        group.bench_with_input(
            BenchmarkId::new("all_teams", case.name),
            &controller,
            |b, controller| {
                b.iter(|| {
                    let mut total = 0usize;
                    for team in Team::ALL {
                        total +=
                            generate_moves_for_board(&controller.state().board, team).len();
                    }
                    black_box(total)
                })
            },
        );
    }
    group.finish();
}

fn bench_capture_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("capture_resolution");
    for case in CASES {
        group.bench_with_input(
            BenchmarkId::new("first_capture", case.name),
            &case.seed,
            |b, &seed| {
                b.iter(|| {
                    // Rebuild the session and play the first available
                    // capture, cascade included.
                    let mut controller = TurnController::new(Some(seed));
                    let team = controller.current_team();
                    let capture = controller
                        .list_legal_moves(team)
                        .expect("generation succeeds")
                        .into_iter()
                        .find(|m| m.is_capture());
                    if let Some(capture) = capture {
                        let mv = capture.move_description;
                        black_box(controller.submit_move(mv.from, mv.to));
                    }
                    black_box(controller.state().turn)
                })
            },
        );
    }
    group.finish();
}

fn bench_full_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("self_play");
    group.sample_size(10);
    for case in CASES {
        group.bench_with_input(
            BenchmarkId::new("random_match", case.name),
            &case.seed,
            |b, &seed| {
                b.iter(|| {
                    play_random_match(seed, &MatchConfig { max_turns: 100 })
                        .expect("match runs cleanly")
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_move_generation,
    bench_capture_resolution,
    bench_full_match
);
criterion_main!(benches);
