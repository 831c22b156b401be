use glam::Mat4;
use wgpu::{Buffer, BufferUsages, Device, Queue};

use crate::mesh::{Mesh, Vertex};

/// Camera uniform passed to the surface shader (64 bytes)
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new(view_proj: Mat4) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
        }
    }
}

/// Per-frame vertex buffer plus the camera uniform
pub struct MeshBuffers {
    /// Surface and wireframe vertices, rewritten every frame
    pub vertex_buffer: Buffer,
    /// Uniform buffer for the view-projection matrix
    pub camera_buffer: Buffer,
    /// Vertex slots available in `vertex_buffer`
    capacity: usize,
}

impl MeshBuffers {
    /// Create buffers sized for `vertex_capacity` vertices
    pub fn new(device: &Device, vertex_capacity: usize) -> Self {
        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("mesh-vertex-buffer"),
            size: (vertex_capacity * std::mem::size_of::<Vertex>()) as u64,
            usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("camera-uniform-buffer"),
            size: std::mem::size_of::<CameraUniform>() as u64,
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            vertex_buffer,
            camera_buffer,
            capacity: vertex_capacity,
        }
    }

    /// Upload this frame's vertices
    pub fn upload_mesh(&self, queue: &Queue, mesh: &Mesh) {
        let vertices = fit_to_capacity(&mesh.vertices, self.capacity);
        queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(vertices));
    }

    /// Update the view-projection matrix
    pub fn update_camera(&self, queue: &Queue, view_proj: Mat4) {
        let uniform = CameraUniform::new(view_proj);
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&uniform));
    }
}

/// Vertices that fit in a buffer of `capacity` slots; overflow is logged and dropped
fn fit_to_capacity(vertices: &[Vertex], capacity: usize) -> &[Vertex] {
    if vertices.len() > capacity {
        log::error!(
            "Mesh has {} vertices but buffer holds {}, truncating",
            vertices.len(),
            capacity
        );
        &vertices[..capacity]
    } else {
        vertices
    }
}
