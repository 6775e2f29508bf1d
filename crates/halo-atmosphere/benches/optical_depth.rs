use criterion::{Criterion, black_box, criterion_group, criterion_main};
use glam::{Vec2, Vec3};
use halo_atmosphere::*;

/// Midpoint-rule integral of density from `origin` to the atmosphere exit.
fn brute_force_depth(origin: Vec3, dir: Vec3, steps: u32) -> f32 {
    let Some(shell) = ray_sphere(origin, dir, ATM_RADIUS) else {
        return 0.0;
    };
    let step = shell.exit() / steps as f32;
    (0..steps)
        .map(|i| density_at(origin + dir * ((i as f32 + 0.5) * step)) * step)
        .sum()
}

fn bench_closed_form_depth(c: &mut Criterion) {
    let origin = black_box(Vec3::new(0.0, 104.0, 0.0));
    let dir = black_box(Vec3::new(1.0, 0.2, 0.0).normalize());
    c.bench_function("optical_depth_closed_form", |bencher| {
        bencher.iter(|| black_box(optical_depth(origin, dir)))
    });
}

fn bench_brute_force_depth(c: &mut Criterion) {
    let origin = black_box(Vec3::new(0.0, 104.0, 0.0));
    let dir = black_box(Vec3::new(1.0, 0.2, 0.0).normalize());
    c.bench_function("optical_depth_brute_force_10", |bencher| {
        bencher.iter(|| black_box(brute_force_depth(origin, dir, 10)))
    });
}

fn bench_shade_sky_pixel(c: &mut Criterion) {
    let context = FrameContext::new(FrameParams::default());
    let coord = black_box(Vec2::new(256.0, 256.0));
    c.bench_function("shade_pixel_center", |bencher| {
        bencher.iter(|| black_box(context.shade(coord)))
    });
}

fn bench_shade_scanline(c: &mut Criterion) {
    let context = FrameContext::new(FrameParams::default());
    c.bench_function("shade_scanline_512", |bencher| {
        bencher.iter(|| {
            for x in 0..512 {
                black_box(context.shade(Vec2::new(x as f32 + 0.5, 300.5)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_closed_form_depth,
    bench_brute_force_depth,
    bench_shade_sky_pixel,
    bench_shade_scanline,
);
criterion_main!(benches);
