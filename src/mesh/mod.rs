mod color;
mod surface;

pub use color::color_of;
pub use surface::{MeshLayout, SurfaceMesh};

use bytemuck::{Pod, Zeroable};
use std::ops::Range;

/// One mesh vertex in grid space: `x = i * cell`, `y = j * cell`,
/// `z = height * scale`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    pub const ATTRIBS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3, // color
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Colored geometry for one frame.
///
/// All strips index into the shared `vertices` array. `surface` ranges are
/// triangle strips; `wireframe` ranges are line strips.
#[derive(Debug, Default, Clone)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub surface: Vec<Range<u32>>,
    pub wireframe: Vec<Range<u32>>,
}

impl Mesh {
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.surface.clear();
        self.wireframe.clear();
    }

    /// Append the vertices yielded by `strip` as one strip in `ranges`
    fn push_strip(
        vertices: &mut Vec<Vertex>,
        ranges: &mut Vec<Range<u32>>,
        strip: impl IntoIterator<Item = Vertex>,
    ) {
        let start = vertices.len() as u32;
        vertices.extend(strip);
        ranges.push(start..vertices.len() as u32);
    }
}
