//! Driver-level composition: validation, reproducibility, batch runs.

use geoigniter_core::{
    BoundingBox, FireSimulation, Grid, IgnitionPoint, SimulationError, TerrainError, TerrainModel,
    DEFAULT_STEPS,
};
use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

fn himalaya_box() -> BoundingBox {
    BoundingBox::new(29.5, 77.5, 31.5, 80.0)
}

fn seeded_sim(height: usize, width: usize, seed: u64) -> FireSimulation {
    let terrain = TerrainModel::random_seeded(height, width, seed).unwrap();
    FireSimulation::new(terrain, himalaya_box()).unwrap()
}

#[test]
fn test_default_horizon_yields_thirteen_frames() {
    let sim = seeded_sim(50, 50, 21);
    let result = sim.run_seeded(IgnitionPoint::new(30.5, 78.75), DEFAULT_STEPS, 4);
    assert_eq!(result.len(), DEFAULT_STEPS + 1);
    assert_eq!(result.burned_per_frame().len(), DEFAULT_STEPS + 1);
}

#[test]
fn test_ignition_preserved_at_mapped_index() {
    let sim = seeded_sim(40, 40, 6);
    let point = IgnitionPoint::new(30.25, 79.5);
    let result = sim.run_seeded(point, 4, 17);

    let expected = sim.ignition_index(point);
    assert_eq!(result.ignition(), expected);

    let first = result.frame(0).unwrap();
    assert_eq!(result.burned_cells(0), Some(1));
    assert!(first[(expected.row, expected.col)].is_burning());
}

#[test]
fn test_seeded_runs_replay_identically() {
    let sim = seeded_sim(30, 30, 77);
    let point = IgnitionPoint::new(30.5, 78.75);
    let first = sim.run_seeded(point, 12, 1234);
    let second = sim.run_seeded(point, 12, 1234);
    assert_eq!(first, second);
}

#[test]
fn test_invalid_bounding_box_fails_fast() {
    let terrain = TerrainModel::random_seeded(10, 10, 1).unwrap();
    let bounds = BoundingBox::new(31.5, 77.5, 29.5, 80.0);
    match FireSimulation::new(terrain, bounds) {
        Err(SimulationError::InvalidBoundingBox(b)) => assert_eq!(b, bounds),
        other => panic!("expected InvalidBoundingBox, got {other:?}"),
    }
}

#[test]
fn test_dimension_mismatch_surfaces_through_the_driver_error() {
    let slope = Grid::filled(10, 10, 0.5_f32);
    let fuel = Grid::filled(8, 10, 0.5_f32);
    let err: SimulationError = TerrainModel::from_grids(slope, fuel).unwrap_err().into();
    match err {
        SimulationError::Terrain(TerrainError::DimensionMismatch { slope, fuel }) => {
            assert_eq!(slope, (10, 10));
            assert_eq!(fuel, (8, 10));
        }
        other => panic!("expected DimensionMismatch, got {other:?}"),
    }
}

#[test]
fn test_out_of_box_click_still_runs_from_a_border_cell() {
    let sim = seeded_sim(25, 25, 13);
    let result = sim.run_seeded(IgnitionPoint::new(90.0, -200.0), 3, 5);
    assert_eq!(result.ignition(), geoigniter_core::GridIndex::new(0, 0));
    assert_eq!(result.len(), 4);
    // A corner cell sits on the sink-only ring, so the fire never grows.
    assert_eq!(result.burned_cells(3), Some(1));
}

#[test]
fn test_batch_runs_are_independent() {
    let sim = seeded_sim(30, 30, 50);
    let points = [
        IgnitionPoint::new(30.5, 78.75),
        IgnitionPoint::new(31.0, 78.125),
        IgnitionPoint::new(29.75, 79.375),
    ];
    let results = sim.run_batch(&points, 5);
    assert_eq!(results.len(), points.len());
    for (point, result) in points.iter().zip(&results) {
        assert_eq!(result.len(), 6);
        assert_eq!(result.ignition(), sim.ignition_index(*point));
        assert_eq!(result.burned_cells(0), Some(1));
    }
}

#[test]
fn test_zero_step_run_returns_only_the_ignition_frame() {
    let sim = seeded_sim(20, 20, 2);
    let result = sim.run_seeded(IgnitionPoint::new(30.5, 78.75), 0, 9);
    assert_eq!(result.len(), 1);
    assert_eq!(result.final_frame(), result.frame(0).unwrap());
}
