//! Pattern files through catalogs and solves.

use approx::assert_relative_eq;
use tile_wfc::{
    create_mesh_pattern, patterns, Direction, GridSolver, MeshPattern, Seed, TileDescriptor,
    WfcSolver,
};

fn temp_dir(label: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("tile_wfc_{}_{}", label, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_pattern_file_round_trip_builds_same_catalog() {
    let dir = temp_dir("round_trip");
    let path = dir.join("overhanging.json");
    let pattern = patterns::overhanging();
    std::fs::write(&path, pattern.to_json().unwrap()).unwrap();

    let loaded = MeshPattern::from_file(&path).unwrap();
    let a = create_mesh_pattern(&pattern).unwrap();
    let b = create_mesh_pattern(&loaded).unwrap();

    assert_eq!(a.names().collect::<Vec<_>>(), b.names().collect::<Vec<_>>());
    assert_relative_eq!(a.dim().x, b.dim().x);
    assert_relative_eq!(a.dim().z, b.dim().z);
    for tile in a.iter() {
        assert_eq!(tile.mesh(), b.get(tile.name()).unwrap().mesh());
    }

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_missing_pattern_file_is_reported() {
    let path = std::env::temp_dir().join("tile_wfc_no_such_pattern.json");
    assert!(MeshPattern::from_file(&path).is_err());
}

#[test]
fn test_rectangular_grid_solves_with_catalog_descriptors() {
    let catalog = create_mesh_pattern(&patterns::overhanging_terrain()).unwrap();
    let descriptors: Vec<TileDescriptor> =
        catalog.iter().map(|t| t.descriptor().clone()).collect();

    let mut solver = WfcSolver::with_seed(2024);
    for d in &descriptors {
        solver.register_tile(d.clone()).unwrap();
    }
    let solved = solver
        .run((5, 9), &[Seed::new("floor", (2, 4))], 10_000)
        .unwrap();

    assert_eq!(solved.grid.dim(), (5, 9));
    assert_eq!(solver.names()[solved.grid[[2, 4]]], "floor");
    for ((row, col), &tile) in solved.grid.indexed_iter() {
        if let Some((r, c)) = Direction::East.step((row, col), (5, 9)) {
            assert!(descriptors[tile].connects(&descriptors[solved.grid[[r, c]]], Direction::East));
        }
        if let Some((r, c)) = Direction::South.step((row, col), (5, 9)) {
            assert!(descriptors[tile].connects(&descriptors[solved.grid[[r, c]]], Direction::South));
        }
    }
}
