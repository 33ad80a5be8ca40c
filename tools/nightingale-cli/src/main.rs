//! nightingale - procedural nightingale scene tool
//!
//! Lists presets, inspects composed scene trees, samples the idle animation
//! and exports posed scenes as OBJ/MTL.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use nightingale::config::{self, SceneSource};
use nightingale::export::export_stage;
use nightingale::params::{Preset, SceneParams};
use nightingale::prelude::*;

#[derive(Parser)]
#[command(name = "nightingale")]
#[command(about = "Procedural nightingale scene composer")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where to take the parameter table from
#[derive(Args)]
struct SourceArgs {
    /// Built-in preset (sculpture, v4, v5, v6, v7)
    #[arg(short, long, default_value = "v7", conflicts_with = "config")]
    preset: Preset,

    /// Scene parameter file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl SourceArgs {
    fn load(&self) -> Result<SceneParams> {
        let source = match &self.config {
            Some(path) => SceneSource::File(path),
            None => SceneSource::Preset(self.preset),
        };
        source.load().context("Failed to load scene parameters")
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in presets
    Presets,

    /// Summarize the composed scene tree and print its outline
    Describe {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Export the scene posed at a given time as OBJ + MTL
    Export {
        #[command(flatten)]
        source: SourceArgs,

        /// Animation time in seconds
        #[arg(short, long, default_value_t = 0.0)]
        time: f32,

        /// Output .obj file (default: <scene name>.obj)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print idle animation samples as JSON lines
    Pose {
        #[command(flatten)]
        source: SourceArgs,

        /// First sample time in seconds
        #[arg(long, default_value_t = 0.0)]
        start: f32,

        /// Last sample time in seconds
        #[arg(long, default_value_t = 2.0)]
        end: f32,

        /// Samples per second
        #[arg(long, default_value_t = 30.0)]
        fps: f32,
    },

    /// Write a preset's parameter table as TOML
    Dump {
        /// Built-in preset to dump
        #[arg(short, long, default_value = "v7")]
        preset: Preset,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn compose_scene(params: &SceneParams) -> Result<Stage> {
    compose(params).with_context(|| format!("Failed to compose scene {:?}", params.name))
}

/// Upper bound on samples printed by one `pose` run
const MAX_SAMPLES: usize = 1_000_000;

/// Sample times from `start` to `end` inclusive at `fps`
fn sample_times(start: f32, end: f32, fps: f32) -> Result<Vec<f32>> {
    if !start.is_finite() || !end.is_finite() {
        anyhow::bail!("--start and --end must be finite, got {start} and {end}");
    }
    if !fps.is_finite() || fps <= 0.0 {
        anyhow::bail!("--fps must be positive and finite, got {fps}");
    }
    if end < start {
        anyhow::bail!("--end ({end}) is before --start ({start})");
    }
    let steps = ((f64::from(end) - f64::from(start)) * f64::from(fps)).floor();
    if steps >= MAX_SAMPLES as f64 {
        anyhow::bail!("{start}..{end}s at {fps} fps exceeds {MAX_SAMPLES} samples");
    }
    let count = steps as usize + 1;
    Ok((0..count).map(|i| start + i as f32 / fps).collect())
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Presets => {
            for preset in Preset::ALL {
                println!("{:<10} {}", preset.name(), preset.description());
            }
        }

        Commands::Describe { source } => {
            let params = source.load()?;
            let stage = compose_scene(&params)?;
            let stats = stage.root.stats();
            tracing::info!(
                "{}: {} groups, {} shapes, {} vertices, {} triangles",
                params.name,
                stats.groups,
                stats.shapes,
                stats.vertices,
                stats.triangles
            );
            print!("{}", stage.root.outline());
        }

        Commands::Export {
            source,
            time,
            output,
        } => {
            let params = source.load()?;
            let mut stage = compose_scene(&params)?;
            let animator = Animator::new(params.bird.idle.clone(), &stage)?;
            animator.animate(time, &mut stage);

            let output = output.unwrap_or_else(|| PathBuf::from(format!("{}.obj", params.name)));
            tracing::info!("Exporting {} at t={}s -> {:?}", params.name, time, output);
            let (mtl, stats) = export_stage(&stage, &output)
                .with_context(|| format!("Failed to export {:?}", output))?;
            tracing::info!(
                "Done! {} objects, {} vertices, {} triangles (materials in {:?})",
                stats.objects,
                stats.vertices,
                stats.triangles,
                mtl
            );
        }

        Commands::Pose {
            source,
            start,
            end,
            fps,
        } => {
            let times = sample_times(start, end, fps)?;
            let params = source.load()?;
            let stage = compose_scene(&params)?;
            let animator = Animator::new(params.bird.idle.clone(), &stage)?;
            for t in times {
                println!("{}", serde_json::to_string(&animator.pose(t))?);
            }
        }

        Commands::Dump { preset, output } => {
            let params = preset.params();
            match output {
                Some(path) => {
                    config::save_scene(&path, &params)?;
                    tracing::info!("Wrote {} to {:?}", preset, path);
                }
                None => print!("{}", config::to_toml(&params)?),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_times_include_both_ends() {
        let times = sample_times(0.0, 1.0, 4.0).unwrap();
        assert_eq!(times, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_sample_times_reject_bad_ranges() {
        assert!(sample_times(0.0, 1.0, 0.0).is_err());
        assert!(sample_times(2.0, 1.0, 30.0).is_err());
        assert_eq!(sample_times(1.0, 1.0, 30.0).unwrap(), vec![1.0]);
    }

    #[test]
    fn test_sample_times_reject_non_finite_and_huge_ranges() {
        assert!(sample_times(0.0, f32::INFINITY, 30.0).is_err());
        assert!(sample_times(0.0, f32::NAN, 30.0).is_err());
        assert!(sample_times(f32::NEG_INFINITY, 1.0, 30.0).is_err());
        assert!(sample_times(0.0, 1.0, f32::INFINITY).is_err());
        assert!(sample_times(0.0, 1e30, 30.0).is_err());
        assert_eq!(sample_times(0.0, 100.0, 30.0).unwrap().len(), 3001);
    }

    #[test]
    fn test_cli_parses_preset_names() {
        let cli = Cli::try_parse_from(["nightingale", "describe", "--preset", "V5"]).unwrap();
        match cli.command {
            Commands::Describe { source } => assert_eq!(source.preset, Preset::V5),
            _ => panic!("expected describe"),
        }
        assert!(Cli::try_parse_from(["nightingale", "describe", "--preset", "v9"]).is_err());
    }
}
