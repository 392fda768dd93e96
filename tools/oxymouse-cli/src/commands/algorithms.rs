//! List the available algorithms.

use oxymouse_trajectory_model::config::AppConfig;
use oxymouse_trajectory_model::params::Algorithm;

pub fn run(config: &AppConfig) -> anyhow::Result<()> {
    println!("Available algorithms");
    println!("{}", "=".repeat(50));

    for algorithm in Algorithm::ALL {
        let marker = if algorithm == config.synthesis.algorithm {
            "(default)"
        } else {
            ""
        };
        println!("  {:<10} {} {}", algorithm.as_str(), describe(algorithm), marker);
    }

    let s = &config.synthesis;
    println!();
    println!(
        "bezier:   duration={}s complexity={} randomness={}",
        s.bezier.duration, s.bezier.complexity, s.bezier.randomness
    );
    println!(
        "gaussian: duration={}s smoothness={} randomness={}",
        s.gaussian.duration, s.gaussian.smoothness, s.gaussian.randomness
    );
    println!(
        "perlin:   duration={}s octaves={} persistence={} lacunarity={} seed={}",
        s.perlin.duration,
        s.perlin.octaves,
        s.perlin.persistence,
        s.perlin.lacunarity,
        s.perlin
            .seed
            .map(|seed| seed.to_string())
            .unwrap_or_else(|| "random".to_string())
    );

    Ok(())
}

fn describe(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::Bezier => "Bezier curve through jittered random control points",
        Algorithm::Gaussian => "smoothed Gaussian random walk around a quadratic arc",
        Algorithm::Perlin => "fractal Perlin noise sampled in real time",
    }
}
