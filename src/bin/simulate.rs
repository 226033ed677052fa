//! Headless run of the particle field.
//! Drives the field with a random pointer walk and a steady scroll, then
//! reports connection statistics and tick cost for both connection
//! strategies.
//!
//! Usage: `simulate [frames] [particles] [seed]`

use flux_core::{ConnectionStrategy, FieldConfig, FieldError, FrameInput};
use flux_sim::field::ParticleField;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

const FRAME_DT: f32 = 1.0 / 60.0;

#[derive(Default)]
struct RunStats {
    min_connections: usize,
    max_connections: usize,
    total_connections: usize,
    contained: usize,
    frames: usize,
    tick_time: Duration,
    /// Sum of all positions and alphas of the last frame, to compare runs
    checksum: f64,
}

impl RunStats {
    fn mean_connections(&self) -> f64 {
        if self.frames == 0 {
            0.0
        } else {
            self.total_connections as f64 / self.frames as f64
        }
    }
}

fn run(config: &FieldConfig, frames: usize) -> Result<RunStats, FieldError> {
    let mut field = ParticleField::create(config)?;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed ^ 0x5eed);
    let mut pointer = [0.0f32, 0.0f32];
    let mut stats = RunStats {
        min_connections: usize::MAX,
        ..Default::default()
    };

    for frame in 0..frames {
        pointer[0] = (pointer[0] + rng.gen_range(-0.05..0.05f32)).clamp(-1.0, 1.0);
        pointer[1] = (pointer[1] + rng.gen_range(-0.05..0.05f32)).clamp(-1.0, 1.0);
        let scroll = frame as f32 / frames.max(1) as f32;
        let input = FrameInput::new(pointer[0], pointer[1], scroll);

        let start = Instant::now();
        let count = field.tick(frame as f32 * FRAME_DT, input)?.connections.len();
        stats.tick_time += start.elapsed();

        stats.min_connections = stats.min_connections.min(count);
        stats.max_connections = stats.max_connections.max(count);
        stats.total_connections += count;
        stats.contained += field.contained_last_frame();
        stats.frames += 1;
    }

    let output = field.output();
    stats.checksum = output.positions.iter().map(|&v| v as f64).sum::<f64>()
        + output.connections.iter().map(|c| c.alpha as f64).sum::<f64>();
    if stats.frames == 0 {
        stats.min_connections = 0;
    }
    Ok(stats)
}

fn arg<T: std::str::FromStr>(args: &[String], index: usize, default: T) -> T {
    args.get(index)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn main() -> Result<(), FieldError> {
    let args: Vec<String> = std::env::args().collect();
    let frames: usize = arg(&args, 1, 3600);
    let base = FieldConfig::default();
    let config = FieldConfig {
        particle_count: arg(&args, 2, base.particle_count),
        seed: arg(&args, 3, base.seed),
        ..base
    };

    println!("═══════════════════════════════════════════════════════════════");
    println!(
        "  NEURAL FLUX — {} particles, {} frames, seed {}",
        config.particle_count, frames, config.seed
    );
    println!("═══════════════════════════════════════════════════════════════");

    let mut checksums = Vec::new();
    for strategy in [ConnectionStrategy::PairScan, ConnectionStrategy::Grid] {
        let config = FieldConfig {
            connection_strategy: strategy,
            ..config.clone()
        };
        let stats = run(&config, frames)?;
        let per_tick = stats.tick_time.as_secs_f64() * 1e6 / stats.frames.max(1) as f64;

        println!("\n  {:?}", strategy);
        println!(
            "    connections  min {:>5}  mean {:>8.1}  max {:>5}",
            stats.min_connections,
            stats.mean_connections(),
            stats.max_connections
        );
        println!("    contained    {} rescales over the run", stats.contained);
        println!("    tick         {:.1} µs/frame", per_tick);
        checksums.push(stats.checksum);
    }

    let identical = checksums.windows(2).all(|w| w[0] == w[1]);
    println!(
        "\n  Strategies agree: {}",
        if identical { "yes" } else { "NO" }
    );
    Ok(())
}
