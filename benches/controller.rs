use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_stack::adapter::{create_observation, CommandMessage, Session};
use tetris_stack::core::{CircularQueue, Controller, ControllerConfig};
use tetris_stack::types::{Command, Piece, PieceKind};

fn bench_play(c: &mut Criterion) {
    let mut game = Controller::startup(ControllerConfig::intermediate(12345));

    c.bench_function("play", |b| {
        b.iter(|| {
            black_box(game.play());
        })
    });
}

fn bench_reserve_use_cycle(c: &mut Criterion) {
    let mut game = Controller::startup(ControllerConfig::intermediate(12345));

    c.bench_function("reserve_then_use", |b| {
        b.iter(|| {
            black_box(game.apply(Command::Reserve));
            black_box(game.apply(Command::UseReserved));
        })
    });
}

fn bench_queue_cycle(c: &mut Criterion) {
    let mut queue = CircularQueue::new(5);
    for id in 0..4 {
        let _ = queue.enqueue(Piece::new(PieceKind::I, id));
    }

    c.bench_function("queue_enqueue_dequeue", |b| {
        b.iter(|| {
            let _ = queue.enqueue(black_box(Piece::new(PieceKind::T, 9)));
            black_box(queue.dequeue().ok());
        })
    });
}

fn bench_observation(c: &mut Criterion) {
    let mut game = Controller::startup(ControllerConfig::intermediate(12345));
    game.reserve();
    game.reserve();
    let snap = game.snapshot();

    c.bench_function("observation_to_json", |b| {
        b.iter(|| {
            let obs = create_observation(1, black_box(&snap), None);
            black_box(serde_json::to_string(&obs).ok());
        })
    });
}

fn bench_session_line(c: &mut Criterion) {
    let mut session = Session::new(Controller::startup(ControllerConfig::intermediate(12345)));
    let mut seq = 0u64;

    c.bench_function("session_handle_line", |b| {
        b.iter(|| {
            seq += 1;
            let line = serde_json::to_string(&CommandMessage::new(seq, Command::Play))
                .unwrap_or_default();
            black_box(session.handle_line(&line).ok());
        })
    });
}

criterion_group!(
    benches,
    bench_play,
    bench_reserve_use_cycle,
    bench_queue_cycle,
    bench_observation,
    bench_session_line
);
criterion_main!(benches);
