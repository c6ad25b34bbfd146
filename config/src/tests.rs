//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_entropy_noise_below_weight_resolution() {
    // Noise only breaks ties, it must never outweigh a real entropy gap
    assert!(ENTROPY_NOISE > 0.0);
    assert!(ENTROPY_NOISE < 1e-3);
}

// =============================================================================
// GRID TESTS
// =============================================================================

#[test]
fn test_default_grid_shape_is_positive() {
    let (rows, cols) = DEFAULT_GRID_SHAPE;
    assert!(rows > 0 && cols > 0);
}

#[test]
fn test_grid_center_square() {
    assert_eq!(grid_center((20, 20)), (10, 10));
}

#[test]
fn test_grid_center_odd_and_single() {
    assert_eq!(grid_center((3, 5)), (1, 2));
    assert_eq!(grid_center((1, 1)), (0, 0));
    assert_eq!(grid_center((2, 2)), (1, 1));
}

#[test]
fn test_default_seed_tiles_differ() {
    assert_ne!(DEFAULT_INITIAL_TILE, DEFAULT_OVERHANG_INITIAL_TILE);
}

// =============================================================================
// SOLVER TESTS
// =============================================================================

#[test]
fn test_max_steps_covers_default_grid() {
    let (rows, cols) = DEFAULT_GRID_SHAPE;
    assert!(DEFAULT_MAX_STEPS >= rows * cols);
}

// =============================================================================
// TILE TESTS
// =============================================================================

#[test]
fn test_slab_thinner_than_wall_height() {
    assert!(FLOOR_THICKNESS < DEFAULT_WALL_HEIGHT);
    assert!(WALL_THICKNESS < DEFAULT_TILE_DIM / 2.0);
}

// =============================================================================
// ARTIFACT TESTS
// =============================================================================

#[test]
fn test_history_dirs_are_distinct() {
    assert_ne!(HISTORY_PARTS_DIR, HISTORY_TRANSLATED_PARTS_DIR);
}

#[test]
fn test_translated_marker_starts_with_separator() {
    assert!(TRANSLATED_MARKER.starts_with('_'));
    assert!(HISTORY_DIR_SUFFIX.starts_with('_'));
}

#[test]
fn test_mesh_extension_has_no_dot() {
    assert!(!MESH_EXTENSION.starts_with('.'));
}

// =============================================================================
// APPROX TESTS
// =============================================================================

#[test]
fn test_approx_equal_within_epsilon() {
    let small_diff = EPSILON / 2.0;
    assert!(approx_equal(1.0, 1.0 + small_diff));
    assert!(approx_equal(1.0, 1.0 - small_diff));
}

#[test]
fn test_approx_equal_outside_epsilon() {
    let large_diff = EPSILON * 2.0;
    assert!(!approx_equal(1.0, 1.0 + large_diff));
}
