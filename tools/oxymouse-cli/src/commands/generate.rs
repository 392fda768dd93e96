//! Generate a trajectory and print it.

use std::io::{self, Write};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use oxymouse_common::clock::{Clock, WallClock};
use oxymouse_synthesis::replay::{schedule, total_duration, ReplayStep};
use oxymouse_synthesis::{MouseMovement, OxyMouse, Pacing};
use oxymouse_trajectory_model::config::{AppConfig, SynthesisConfig};
use oxymouse_trajectory_model::coordinate::{Coordinate, Trajectory};
use oxymouse_trajectory_model::params::Algorithm;
use oxymouse_trajectory_model::viewport::Viewport;

use crate::{GenerateArgs, OutputFormat};

/// Which of the three generator operations to run.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    Coordinates { from: Coordinate, to: Coordinate },
    Random { viewport: Viewport },
    Scroll { start_y: i32, end_y: i32 },
}

impl Operation {
    fn name(&self) -> &'static str {
        match self {
            Operation::Coordinates { .. } => "coordinates",
            Operation::Random { .. } => "random",
            Operation::Scroll { .. } => "scroll",
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    algorithm: Algorithm,
    operation: &'static str,
    seed: u64,
    generated_at: &'a str,
    elapsed_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    points: Option<&'a [Coordinate]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<&'a [ReplayStep]>,
}

pub fn run(config: &AppConfig, operation: Operation, args: &GenerateArgs) -> anyhow::Result<()> {
    let algorithm = match &args.algorithm {
        Some(name) => name.parse::<Algorithm>()?,
        None => config.synthesis.algorithm,
    };
    let synthesis = SynthesisConfig {
        algorithm,
        ..config.synthesis.clone()
    };
    let pacing = if args.realtime {
        Pacing::RealTime
    } else {
        Pacing::Simulated
    };
    let mouse = OxyMouse::from_config(&synthesis)
        .map_err(|e| anyhow::anyhow!("Failed to configure {algorithm}: {e}"))?
        .with_pacing(pacing);

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let clock = WallClock::start();
    tracing::debug!(%algorithm, operation = operation.name(), seed, "generating trajectory");
    let path = generate(&mouse, operation, &mut rng)?;
    let elapsed_ms = clock.elapsed_secs() * 1000.0;
    tracing::info!(
        %algorithm,
        operation = operation.name(),
        points = path.len(),
        elapsed_ms,
        "trajectory generated"
    );

    let steps = if args.replay {
        let steps = schedule(&path, &synthesis.replay, &mut rng)?;
        tracing::debug!(
            total_ms = total_duration(&steps).as_secs_f64() * 1000.0,
            "replay schedule built"
        );
        Some(steps)
    } else {
        None
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Json => {
            let report = Report {
                algorithm,
                operation: operation.name(),
                seed,
                generated_at: clock.epoch_wall(),
                elapsed_ms,
                points: if steps.is_none() { Some(path.as_slice()) } else { None },
                steps: steps.as_deref(),
            };
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => match &steps {
            Some(steps) => write_steps_csv(&mut out, steps)?,
            None => write_points_csv(&mut out, &path)?,
        },
    }

    Ok(())
}

fn generate(mouse: &OxyMouse, operation: Operation, rng: &mut ChaCha8Rng) -> anyhow::Result<Trajectory> {
    let path = match operation {
        Operation::Coordinates { from, to } => mouse.generate_coordinates(from, to, rng),
        Operation::Random { viewport } => mouse.generate_random_coordinates(viewport, rng),
        Operation::Scroll { start_y, end_y } => {
            mouse.generate_scroll_coordinates(start_y, end_y, rng)
        }
    };
    path.map_err(|e| anyhow::anyhow!("Failed to generate {} trajectory: {e}", operation.name()))
}

fn write_points_csv<W: Write>(out: &mut W, points: &[Coordinate]) -> io::Result<()> {
    writeln!(out, "x,y")?;
    for p in points {
        writeln!(out, "{},{}", p.x, p.y)?;
    }
    Ok(())
}

fn write_steps_csv<W: Write>(out: &mut W, steps: &[ReplayStep]) -> io::Result<()> {
    writeln!(out, "x,y,delay_ms")?;
    for s in steps {
        writeln!(
            out,
            "{},{},{:.3}",
            s.point.x,
            s.point.y,
            s.delay.as_secs_f64() * 1000.0
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_points_csv() {
        let mut buf = Vec::new();
        write_points_csv(&mut buf, &[Coordinate::new(1, 2), Coordinate::new(-3, 4)]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "x,y\n1,2\n-3,4\n");
    }

    #[test]
    fn test_steps_csv() {
        let mut buf = Vec::new();
        let steps = [ReplayStep {
            point: Coordinate::new(5, 6),
            delay: Duration::from_micros(2500),
        }];
        write_steps_csv(&mut buf, &steps).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "x,y,delay_ms\n5,6,2.500\n");
    }

    #[test]
    fn test_seeded_generation_is_stable() {
        let mouse = OxyMouse::with_algorithm(Algorithm::Gaussian);
        let op = Operation::Scroll {
            start_y: 0,
            end_y: 400,
        };
        let a = generate(&mouse, op, &mut ChaCha8Rng::seed_from_u64(3)).unwrap();
        let b = generate(&mouse, op, &mut ChaCha8Rng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.last(), Some(&Coordinate::new(0, 400)));
    }
}
