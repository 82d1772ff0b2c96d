use criterion::{criterion_group, criterion_main, Criterion, black_box};
use chessrules::perft::perft;
use chessrules::ChessGame;

fn bench_movegen(c: &mut Criterion) {
    let g = ChessGame::new();
    c.bench_function("available_moves_startpos", |ben| {
        ben.iter(|| {
            let v = black_box(&g).available_moves();
            black_box(v)
        })
    });
    c.bench_function("perft_2_startpos", |ben| {
        ben.iter(|| black_box(perft(black_box(&g), 2)))
    });
}

criterion_group!(benches, bench_movegen);
criterion_main!(benches);
