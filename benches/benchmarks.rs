criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        deciding_opening_move,
        deciding_late_move,
        computing_odds,
        replaying_full_match,
        scoring_full_match,
}

fn deciding_opening_move(c: &mut criterion::Criterion) {
    let ref state = GameState::default();
    c.bench_function("decide a move with empty history", |b| {
        b.iter(|| Selector::seeded(Tuning::default(), 0).choose(state))
    });
}

fn deciding_late_move(c: &mut criterion::Criterion) {
    let ref state = history(2000);
    let mut selector = Selector::resume(Tuning::default(), state, SmallRng::seed_from_u64(0));
    c.bench_function("decide a move after 2000 rounds", |b| {
        b.iter(|| selector.choose(state))
    });
}

fn computing_odds(c: &mut criterion::Criterion) {
    let ref tuning = Tuning::default();
    let memory = Memory::replay(tuning, &history(500));
    c.bench_function("compute special-move odds", |b| {
        b.iter(|| memory.odds(tuning, 500))
    });
}

fn replaying_full_match(c: &mut criterion::Criterion) {
    let ref tuning = Tuning::default();
    let ref state = history(2500);
    c.bench_function("replay memory over 2500 rounds", |b| {
        b.iter(|| Memory::replay(tuning, state))
    });
}

fn scoring_full_match(c: &mut criterion::Criterion) {
    let ref state = history(2500);
    c.bench_function("tally a Scoreboard over 2500 rounds", |b| {
        b.iter(|| Scoreboard::from(state))
    });
}

fn history(n: usize) -> GameState {
    (0..n)
        .map(|_| Round::new(Move::random(), Move::random()))
        .collect()
}

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rpsdw::*;
