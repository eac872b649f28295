//! Camera for Pong game
//!
//! 2D orthographic camera over the screen in pixels, y pointing down

use glam::{Mat4, Vec3};

/// Camera struct
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Create an orthographic camera for a `width` x `height` pixel screen
    /// with (0, 0) at the top-left corner
    pub fn orthographic(width: f32, height: f32) -> Self {
        let eye = Vec3::new(0.0, 0.0, 10.0);
        let target = Vec3::new(0.0, 0.0, 0.0);
        let view = Mat4::look_at_rh(eye, target, Vec3::Y);

        // Top and bottom swapped so screen y grows downward
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, 0.1, 100.0);

        Self { view, projection }
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection * self.view
    }
}

/// Camera uniform data (matches WGSL struct, padded to 256 bytes)
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn to_clip(camera: &Camera, x: f32, y: f32) -> Vec4 {
        camera.view_proj() * Vec4::new(x, y, 0.0, 1.0)
    }

    #[test]
    fn test_top_left_maps_to_clip_top_left() {
        let camera = Camera::orthographic(800.0, 600.0);
        let clip = to_clip(&camera, 0.0, 0.0);
        assert!((clip.x + 1.0).abs() < 1e-5);
        assert!((clip.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_bottom_right_maps_to_clip_bottom_right() {
        let camera = Camera::orthographic(800.0, 600.0);
        let clip = to_clip(&camera, 800.0, 600.0);
        assert!((clip.x - 1.0).abs() < 1e-5);
        assert!((clip.y + 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_uniform_is_256_bytes() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 256);
    }
}
