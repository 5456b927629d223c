//! GPU-compatible camera data.

use glam::Mat4;

use crate::camera::Camera;

/// Per-frame camera uniforms, laid out for direct upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniforms {
    /// Projection * view * model.
    pub pvm: [[f32; 4]; 4],
    /// View matrix including the trackball rotation.
    pub view: [[f32; 4]; 4],
}

impl Default for CameraUniforms {
    fn default() -> Self {
        Self {
            pvm: Mat4::IDENTITY.to_cols_array_2d(),
            view: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }
}

impl CameraUniforms {
    /// Captures the current matrices of `camera`.
    #[must_use]
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            pvm: camera.pvm_matrix().to_cols_array_2d(),
            view: camera.view_matrix().to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        assert_eq!(std::mem::size_of::<CameraUniforms>(), 128);
        let uniforms = CameraUniforms::default();
        assert_eq!(bytemuck::bytes_of(&uniforms).len(), 128);
    }

    #[test]
    fn test_from_camera() {
        let camera = Camera::new(800, 600);
        let uniforms = CameraUniforms::from_camera(&camera);
        assert_eq!(Mat4::from_cols_array_2d(&uniforms.pvm), camera.pvm_matrix());
        assert_eq!(Mat4::from_cols_array_2d(&uniforms.view), camera.view_matrix());
    }
}
