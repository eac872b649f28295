use crate::camera::{Camera, CameraUniform};
use game_core::Rect;
use wgpu::util::DeviceExt;
use wgpu::*;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, width, height (pixels, top-left origin)
    pub tint: [f32; 4],      // rgba
}

impl InstanceData {
    // transform, tint
    const ATTRIBUTES: [VertexAttribute; 2] =
        wgpu::vertex_attr_array![1 => Float32x4, 2 => Float32x4];

    pub fn layout() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as BufferAddress,
            step_mode: VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }

    pub fn from_rect(rect: Rect, tint: [f32; 4]) -> Self {
        Self {
            transform: [
                rect.left() as f32,
                rect.top() as f32,
                rect.width() as f32,
                rect.height() as f32,
            ],
            tint,
        }
    }
}

/// Growable vertex buffer of per-instance data
pub struct InstanceBuffer {
    label: &'static str,
    pub buffer: Buffer,
    capacity: usize,
    pub len: u32,
}

impl InstanceBuffer {
    pub fn new(device: &Device, label: &'static str, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            label,
            buffer: create_instance_buffer(device, label, capacity),
            capacity,
            len: 0,
        }
    }

    /// Upload `instances`, reallocating when they no longer fit
    pub fn write(&mut self, device: &Device, queue: &Queue, instances: &[InstanceData]) {
        if instances.len() > self.capacity {
            self.capacity = instances.len().next_power_of_two();
            self.buffer = create_instance_buffer(device, self.label, self.capacity);
            log::debug!("{} grown to {} instances", self.label, self.capacity);
        }
        if !instances.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(instances));
        }
        self.len = instances.len() as u32;
    }
}

fn create_instance_buffer(device: &Device, label: &str, capacity: usize) -> Buffer {
    device.create_buffer(&BufferDescriptor {
        label: Some(label),
        size: (capacity * std::mem::size_of::<InstanceData>()) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

pub struct GameBuffers {
    pub camera: Buffer,
    pub rects: InstanceBuffer,
    pub ellipses: InstanceBuffer,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);

    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    // Paddles, 30 dashes and two short scores fit without growing
    let rects = InstanceBuffer::new(device, "Rect Instance Buffer", 128);
    let ellipses = InstanceBuffer::new(device, "Ellipse Instance Buffer", 1);

    GameBuffers {
        camera: camera_buffer,
        rects,
        ellipses,
    }
}
