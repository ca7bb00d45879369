/// Voxelamming CLI - build a sample scene and send it to a renderer room
///
/// Usage:
///   voxelamming --room 1000 stripes
///   voxelamming --dry-run map data/map_38_138_100km.csv
///   voxelamming ply model.ply
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use voxelamming_core::{heightmap, ply, send_snapshot, SceneStore};
use voxelamming_terminal::report::{status, SnapshotReport};
use voxelamming_terminal::samples::{self, TerrainOptions};
use voxelamming_terminal::{WebSocketTransport, DEFAULT_SERVER};

#[derive(Parser)]
#[command(name = "voxelamming", version, about = "Build voxel scenes for a remote renderer")]
struct Cli {
    /// Room the renderer app is listening on
    #[arg(long, env = "VOXELAMMING_ROOM", default_value = "1000")]
    room: String,

    /// WebSocket relay URL
    #[arg(long, env = "VOXELAMMING_SERVER", default_value = DEFAULT_SERVER)]
    server: String,

    /// Snapshot name
    #[arg(long, default_value = "")]
    name: String,

    /// Override the sample's box size
    #[arg(long)]
    box_size: Option<f64>,

    /// Override the sample's build interval in seconds
    #[arg(long)]
    interval: Option<f64>,

    /// Print the snapshot JSON instead of sending it
    #[arg(long)]
    dry_run: bool,

    /// How long to keep the connection open after sending, in milliseconds
    #[arg(long, default_value_t = 1000)]
    linger_ms: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Four colored columns with alternating gaps
    Stripes,
    /// Turtle loops fanned around the vertical axis
    TurtleCage,
    /// Arches placed through nested transforms
    Nested,
    /// Terrain from a comma separated height map
    Map {
        file: PathBuf,
        #[arg(long, default_value_t = 100.0)]
        height_scale: f64,
        #[arg(long, default_value_t = 257)]
        columns: usize,
        #[arg(long, default_value_t = 257)]
        rows: usize,
        /// Sample every n-th cell
        #[arg(long, default_value_t = 2)]
        skip: usize,
    },
    /// Boxes from an ASCII PLY voxel mesh
    Ply { file: PathBuf },
}

fn build(scene: &mut SceneStore, command: &Command) -> Result<()> {
    match command {
        Command::Stripes => samples::stripes(scene),
        Command::TurtleCage => samples::turtle_cage(scene),
        Command::Nested => samples::nested_arches(scene)?,
        Command::Map {
            file,
            height_scale,
            columns,
            rows,
            skip,
        } => {
            let map = heightmap::load_height_map(file, *height_scale, *columns, *rows)
                .with_context(|| format!("Failed to load height map {}", file.display()))?;
            let options = TerrainOptions {
                skip: *skip,
                ..TerrainOptions::default()
            };
            let placed = samples::terrain(scene, &map, options);
            log::info!("placed {placed} terrain columns, max height {}", map.max_height);
        }
        Command::Ply { file } => {
            let boxes = ply::load_ply(file)
                .with_context(|| format!("Failed to load mesh {}", file.display()))?;
            samples::mesh_model(scene, &boxes);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut scene = SceneStore::new();
    build(&mut scene, &cli.command)?;
    if let Some(size) = cli.box_size {
        scene.set_box_size(size);
    }
    if let Some(interval) = cli.interval {
        scene.set_build_interval(interval);
    }

    let snapshot = scene.snapshot(&cli.name);
    let mut stdout = io::stdout();

    if cli.dry_run {
        println!("{}", snapshot.to_json_pretty()?);
        return Ok(());
    }

    SnapshotReport::new(&snapshot).draw(&mut stdout)?;

    let mut transport = WebSocketTransport::new(&cli.server, Duration::from_millis(cli.linger_ms));
    match send_snapshot(&mut transport, &cli.room, &snapshot) {
        Ok(()) => {
            status(&mut stdout, true, &format!("sent to room {}", cli.room))?;
            Ok(())
        }
        Err(e) => {
            status(&mut stdout, false, &format!("send failed: {e}"))?;
            Err(e).with_context(|| format!("Failed to reach {}", cli.server))
        }
    }
}
