use super::{color_of, Mesh, Vertex};
use crate::config::{CELL_SIZE, HEIGHT_SCALE, WIREFRAME_SPACING};
use crate::simulation::WaveField;

/// Overlay lines are drawn in solid black
pub const WIREFRAME_COLOR: [f32; 3] = [0.0, 0.0, 0.0];

/// Geometry constants used to turn grid samples into world positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshLayout {
    pub cell_size: f32,
    pub height_scale: f32,
    pub wireframe_spacing: usize,
}

impl Default for MeshLayout {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            height_scale: HEIGHT_SCALE,
            wireframe_spacing: WIREFRAME_SPACING,
        }
    }
}

impl MeshLayout {
    /// World-space extent of a `width x height` grid along x and y
    pub fn extent(&self, width: usize, height: usize) -> (f32, f32) {
        (width as f32 * self.cell_size, height as f32 * self.cell_size)
    }

    fn position(&self, i: usize, j: usize, value: f32) -> [f32; 3] {
        [
            i as f32 * self.cell_size,
            j as f32 * self.cell_size,
            value * self.height_scale,
        ]
    }

    fn surface_vertex(&self, field: &WaveField, i: usize, j: usize) -> Vertex {
        let value = field.get(i, j);
        Vertex {
            position: self.position(i, j, value),
            color: color_of(value),
        }
    }

    /// Wireframe vertex; indices past the far edge sample the last row or
    /// column but keep their own position.
    fn wire_vertex(&self, field: &WaveField, i: usize, j: usize) -> Vertex {
        let value = field.get(i.min(field.width() - 1), j.min(field.height() - 1));
        Vertex {
            position: self.position(i, j, value),
            color: WIREFRAME_COLOR,
        }
    }

    /// Total vertices emitted for a `width x height` field
    pub fn vertex_count(&self, width: usize, height: usize) -> usize {
        let surface = (width - 1) * height * 2;
        let column_lines = width / self.wireframe_spacing + 1;
        let row_lines = height / self.wireframe_spacing + 1;
        surface + column_lines * height + row_lines * width
    }
}

/// Reusable mesh rebuilt from the current field every frame
pub struct SurfaceMesh {
    layout: MeshLayout,
    mesh: Mesh,
}

impl SurfaceMesh {
    pub fn new(layout: MeshLayout) -> Self {
        Self {
            layout,
            mesh: Mesh::default(),
        }
    }

    pub fn layout(&self) -> &MeshLayout {
        &self.layout
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Regenerate the surface strips and wireframe from `field`.
    ///
    /// One triangle strip per pair of adjacent rows `i, i + 1`, alternating
    /// vertices from each row along `j`, each colored by its own height.
    /// Wireframe line strips follow every `spacing`-th row and column up to
    /// and including the far edge.
    pub fn rebuild(&mut self, field: &WaveField) {
        let layout = self.layout;
        let (width, height) = (field.width(), field.height());
        let mesh = &mut self.mesh;
        mesh.clear();
        mesh.vertices.reserve(layout.vertex_count(width, height));

        for i in 0..width - 1 {
            Mesh::push_strip(
                &mut mesh.vertices,
                &mut mesh.surface,
                (0..height).flat_map(|j| {
                    [
                        layout.surface_vertex(field, i, j),
                        layout.surface_vertex(field, i + 1, j),
                    ]
                }),
            );
        }

        for i in (0..=width).step_by(layout.wireframe_spacing) {
            Mesh::push_strip(
                &mut mesh.vertices,
                &mut mesh.wireframe,
                (0..height).map(|j| layout.wire_vertex(field, i, j)),
            );
        }

        for j in (0..=height).step_by(layout.wireframe_spacing) {
            Mesh::push_strip(
                &mut mesh.vertices,
                &mut mesh.wireframe,
                (0..width).map(|i| layout.wire_vertex(field, i, j)),
            );
        }
    }
}
