use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Where the camera sits and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    /// Pose at `position` looking at the world origin.
    pub fn looking_at_origin(position: Vec3) -> Self {
        Self {
            position,
            look_at: Vec3::ZERO,
        }
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::looking_at_origin(Vec3::new(0.0, 30.0, 40.0))
    }
}

/// Perspective camera: pose plus projection parameters.
/// Right-handed, Y up, matching the three.js host.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    pub pose: CameraPose,
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    /// Viewport width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

/// Camera block written for the host each frame.
/// 24 floats: position, look-at, aspect, fov, column-major view-projection.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct CameraUniform {
    pub position: [f32; 3],
    pub look_at: [f32; 3],
    pub aspect: f32,
    pub fov_y_deg: f32,
    pub view_projection: [[f32; 4]; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 24;
}

impl PerspectiveCamera {
    pub fn new(fov_y_deg: f32, near: f32, far: f32) -> Self {
        Self {
            pose: CameraPose::default(),
            fov_y_deg,
            aspect: 16.0 / 9.0,
            near,
            far,
        }
    }

    /// Update the aspect ratio after a viewport resize.
    /// Degenerate sizes (a collapsed container) are ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.pose.position, self.pose.look_at, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            position: self.pose.position.to_array(),
            look_at: self.pose.look_at.to_array(),
            aspect: self.aspect,
            fov_y_deg: self.fov_y_deg,
            view_projection: self.view_projection().to_cols_array_2d(),
        }
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(75.0, 0.1, 1000.0)
    }
}
