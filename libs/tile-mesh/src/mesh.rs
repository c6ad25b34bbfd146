//! # Mesh Data Structure
//!
//! Core mesh representation: vertex positions and triangle indices.

use glam::DVec3;
use std::ops::AddAssign;

/// A triangle mesh with vertices and indices.
///
/// All geometry uses f64. Meshes only grow: fragments are appended with
/// [`Mesh::merge`], never removed.
///
/// # Example
///
/// ```rust
/// use tile_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Adds a quad as two triangles `(v0, v1, v2)` and `(v0, v2, v3)`.
    ///
    /// Vertices are expected counter-clockwise when seen from the side the
    /// face should point to.
    pub fn add_quad(&mut self, v0: u32, v1: u32, v2: u32, v3: u32) {
        self.triangles.push([v0, v1, v2]);
        self.triangles.push([v0, v2, v3]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box. An empty mesh yields
    /// `(ZERO, ZERO)`.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Returns the midpoint of the bounding box.
    pub fn bounding_box_center(&self) -> DVec3 {
        let (min, max) = self.bounding_box();
        (min + max) * 0.5
    }

    /// Translates the mesh by a vector.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tile_mesh::Mesh;
    /// use glam::DVec3;
    ///
    /// let mut mesh = Mesh::new();
    /// mesh.add_vertex(DVec3::ZERO);
    /// mesh.translate(DVec3::new(10.0, 0.0, 0.0));
    /// assert_eq!(mesh.vertex(0), DVec3::new(10.0, 0.0, 0.0));
    /// ```
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Rotates the mesh counter-clockwise about the +Z axis through the
    /// origin by `turns` quarter turns.
    ///
    /// Quarter turns map coordinates exactly (no trigonometry), so rotated
    /// tiles stay aligned to the footprint.
    pub fn rotate_quarter_turns(&mut self, turns: u8) {
        let turns = turns % 4;
        if turns == 0 {
            return;
        }

        for v in &mut self.vertices {
            let (x, y) = match turns {
                1 => (-v.y, v.x),
                2 => (-v.x, -v.y),
                _ => (v.y, -v.x),
            };
            v.x = x;
            v.y = y;
        }
    }

    /// Merges another mesh into this one.
    ///
    /// Geometry is concatenated; overlapping volumes are kept as-is.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks that all triangle indices are in range and no triangle
    /// repeats a vertex index.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        self.triangles.iter().all(|tri| {
            tri.iter().all(|&i| i < vertex_count)
                && tri[0] != tri[1]
                && tri[1] != tri[2]
                && tri[0] != tri[2]
        })
    }
}

impl AddAssign<&Mesh> for Mesh {
    fn add_assign(&mut self, other: &Mesh) {
        self.merge(other);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn triangle_at(z: f64) -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, z));
        mesh.add_vertex(DVec3::new(1.0, 0.0, z));
        mesh.add_vertex(DVec3::new(0.0, 1.0, z));
        mesh.add_triangle(0, 1, 2);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_mesh_add_quad() {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(DVec3::ZERO);
        let b = mesh.add_vertex(DVec3::X);
        let c = mesh.add_vertex(DVec3::new(1.0, 1.0, 0.0));
        let d = mesh.add_vertex(DVec3::Y);
        mesh.add_quad(a, b, c, d);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.triangle(1), [0, 2, 3]);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
        assert_eq!(mesh.bounding_box_center(), DVec3::new(1.5, 1.5, 1.5));
    }

    #[test]
    fn test_empty_bounding_box_is_origin() {
        assert_eq!(Mesh::new().bounding_box(), (DVec3::ZERO, DVec3::ZERO));
    }

    #[test]
    fn test_translate_moves_every_vertex() {
        let mut mesh = triangle_at(0.0);
        mesh.translate(DVec3::new(2.0, -3.0, 0.5));
        assert_eq!(mesh.vertex(0), DVec3::new(2.0, -3.0, 0.5));
        assert_eq!(mesh.vertex(2), DVec3::new(2.0, -2.0, 0.5));
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let mut mesh = triangle_at(1.0);
        mesh.rotate_quarter_turns(1);
        // +X maps to +Y, +Y maps to -X, Z untouched
        assert_eq!(mesh.vertex(1), DVec3::new(0.0, 1.0, 1.0));
        assert_eq!(mesh.vertex(2), DVec3::new(-1.0, 0.0, 1.0));
    }

    #[test]
    fn test_rotate_full_circle_is_identity() {
        let original = triangle_at(0.0);
        let mut mesh = original.clone();
        for _ in 0..4 {
            mesh.rotate_quarter_turns(1);
        }
        assert_eq!(mesh, original);

        let mut wrapped = original.clone();
        wrapped.rotate_quarter_turns(6);
        let mut half = original.clone();
        half.rotate_quarter_turns(2);
        assert_eq!(wrapped, half);
    }

    #[test]
    fn test_rotate_preserves_triangle_area() {
        let mut mesh = triangle_at(0.0);
        mesh.rotate_quarter_turns(3);
        let [a, b, c] = mesh.triangle(0).map(|i| mesh.vertex(i));
        let normal = (b - a).cross(c - a);
        // Proper rotation keeps winding (normal still +Z)
        assert_abs_diff_eq!(normal.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mesh_merge() {
        let mut mesh1 = triangle_at(0.0);
        let mesh2 = triangle_at(1.0);

        mesh1.merge(&mesh2);
        assert_eq!(mesh1.vertex_count(), 6);
        assert_eq!(mesh1.triangle_count(), 2);
        assert_eq!(mesh1.triangle(1), [3, 4, 5]); // Offset by 3
        assert!(mesh1.validate());
    }

    #[test]
    fn test_merge_empty_is_noop() {
        let mut mesh = triangle_at(0.0);
        let before = mesh.clone();
        mesh += &Mesh::new();
        assert_eq!(mesh, before);
    }

    #[test]
    fn test_add_assign_matches_merge() {
        let mut merged = triangle_at(0.0);
        merged.merge(&triangle_at(2.0));

        let mut added = triangle_at(0.0);
        added += &triangle_at(2.0);
        assert_eq!(merged, added);
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(0, 1, 2);
        assert!(!mesh.validate());
    }
}
