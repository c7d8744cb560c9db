use clap::Parser;
use geoigniter_core::{
    BoundingBox, FireSimulation, IgnitionPoint, SimulationError, TerrainModel, DEFAULT_STEPS,
};

/// Fire spread demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "geoigniter-demo")]
#[command(about = "Wildfire spread simulation demo", long_about = None)]
struct Args {
    /// Ignition latitude in degrees
    #[arg(long, default_value_t = 30.5)]
    lat: f64,

    /// Ignition longitude in degrees
    #[arg(long, default_value_t = 78.5)]
    lon: f64,

    /// Southern edge of the map extent
    #[arg(long, default_value_t = 29.5)]
    lat_min: f64,

    /// Western edge of the map extent
    #[arg(long, default_value_t = 77.5)]
    lon_min: f64,

    /// Northern edge of the map extent
    #[arg(long, default_value_t = 31.5)]
    lat_max: f64,

    /// Eastern edge of the map extent
    #[arg(long, default_value_t = 80.0)]
    lon_max: f64,

    /// Grid rows
    #[arg(long, default_value_t = 100)]
    height: usize,

    /// Grid columns
    #[arg(long, default_value_t = 100)]
    width: usize,

    /// Number of transition steps (one per hour)
    #[arg(short, long, default_value_t = DEFAULT_STEPS)]
    steps: usize,

    /// Seed for terrain and spread draws (omit for fresh entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Constant slope covariate instead of random terrain (0-1)
    #[arg(long)]
    slope: Option<f32>,

    /// Constant fuel covariate instead of random terrain (0-1)
    #[arg(long)]
    fuel: Option<f32>,

    /// Print an ASCII heatmap per hour (automatic for grids up to 40 wide)
    #[arg(short, long)]
    render: bool,
}

fn main() -> Result<(), SimulationError> {
    let args = Args::parse();

    println!("=== GeoIgniter Demo ===\n");

    let terrain = match (args.slope, args.fuel) {
        (Some(slope), Some(fuel)) => TerrainModel::uniform(args.height, args.width, slope, fuel)?,
        (Some(slope), None) => {
            println!("note: --slope without --fuel, fuel defaults to 0.5");
            TerrainModel::uniform(args.height, args.width, slope, 0.5)?
        }
        (None, Some(fuel)) => {
            println!("note: --fuel without --slope, slope defaults to 0.5");
            TerrainModel::uniform(args.height, args.width, 0.5, fuel)?
        }
        (None, None) => match args.seed {
            Some(seed) => TerrainModel::random_seeded(args.height, args.width, seed)?,
            None => TerrainModel::random(args.height, args.width)?,
        },
    };

    let bounds = BoundingBox::new(args.lat_min, args.lon_min, args.lat_max, args.lon_max);
    let sim = FireSimulation::new(terrain, bounds)?;

    let point = IgnitionPoint::new(args.lat, args.lon);
    let ignition = sim.ignition_index(point);
    println!(
        "Fire started at ({:.4}, {:.4}) -> grid cell ({}, {}) on a {}x{} grid",
        args.lat, args.lon, ignition.row, ignition.col, args.height, args.width
    );

    let result = match args.seed {
        Some(seed) => sim.run_seeded(point, args.steps, seed),
        None => sim.run(point, args.steps),
    };

    let total_cells = args.height * args.width;
    let show_map = args.render || args.width <= 40;
    for (hour, count) in result.burned_per_frame().iter().enumerate() {
        println!(
            "Hour {hour:>2}: {count:>6} cells burning ({:.2}% of map)",
            *count as f64 / total_cells as f64 * 100.0
        );
        if show_map {
            if let Some(frame) = result.frame(hour) {
                for i in 0..frame.height() {
                    let row: String = (0..frame.width())
                        .map(|j| if frame[(i, j)].is_burning() { '#' } else { '.' })
                        .collect();
                    println!("  {row}");
                }
            }
        }
    }

    Ok(())
}
