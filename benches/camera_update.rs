use criterion::{black_box, criterion_group, criterion_main, Criterion};
use freelook::traits::{Button, Controller};
use freelook::{Camera, CameraRig, MovementState, Tuning};
use glam::Vec2;

struct AllKeysHeld;

impl Controller for AllKeysHeld {
    fn is_down(&self, button: Button) -> bool {
        matches!(button, Button::KeyW | Button::KeyD)
    }
}

/// Benchmark: one orientation update plus view-matrix derivation
fn bench_rotate_and_view(c: &mut Criterion) {
    let tuning = Tuning::default();
    let mut camera = Camera::default();

    c.bench_function("rotate_and_view", |b| {
        b.iter(|| {
            camera.rotate(black_box(Vec2::new(3.0, -2.0)), &tuning);
            black_box(camera.view_matrix())
        })
    });
}

/// Benchmark: a whole simulated frame through the rig
fn bench_rig_frame(c: &mut Criterion) {
    let mut rig = CameraRig::default();
    let mut x = 0.0f64;

    c.bench_function("rig_frame", |b| {
        b.iter(|| {
            x += 1.5;
            rig.process_cursor(black_box(x), black_box(300.0));
            rig.update(&AllKeysHeld, black_box(1.0 / 144.0));
            black_box(rig.camera().view_matrix())
        })
    });
}

/// Benchmark: movement integration alone
fn bench_advance(c: &mut Criterion) {
    let tuning = Tuning::default();
    let mut camera = Camera::default();
    let movement = MovementState {
        forward: true,
        right: true,
        ..Default::default()
    };

    c.bench_function("advance", |b| {
        b.iter(|| {
            camera.advance(black_box(&movement), black_box(0.016), &tuning);
            black_box(camera.position)
        })
    });
}

criterion_group!(
    benches,
    bench_rotate_and_view,
    bench_rig_frame,
    bench_advance
);
criterion_main!(benches);
