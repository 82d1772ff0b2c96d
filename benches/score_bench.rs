use criterion::{criterion_group, criterion_main, Criterion, black_box};
use chessrules::score::calculate_score;
use chessrules::{ChessGame, Team};

fn bench_score(c: &mut Criterion) {
    let pieces = ChessGame::new().pieces();
    c.bench_function("score_startpos", |ben| {
        ben.iter(|| {
            let v = calculate_score(black_box(&pieces), &Team::players());
            black_box(v)
        })
    });
}

criterion_group!(benches, bench_score);
criterion_main!(benches);
