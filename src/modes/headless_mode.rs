use std::time::Instant;

use crate::{data::Program, scene::SceneStats};

pub fn headless_main(mut prog: Program, ticks: u64) -> SceneStats {
    prog.print_startup_info();

    let (width, height) = prog.buffer_size();
    let mut buffer = vec![0; width * height];

    let start = Instant::now();

    for _ in 0..ticks {
        prog.render();
        prog.composite(&mut buffer, width);
    }

    let elapsed = start.elapsed();
    let stats = prog.scene.stats();

    log::info!(
        "Ran {} ticks in {:.2?} ({:.2?} per tick)",
        stats.ticks,
        elapsed,
        elapsed.checked_div(ticks.max(1) as u32).unwrap_or_default()
    );

    log::info!(
        "Fireworks: {} ({} exploding), particles: {}, bursts: {}, bills: {}",
        stats.fireworks,
        stats.exploding,
        stats.particles,
        stats.bursts,
        stats.bills
    );

    stats
}
