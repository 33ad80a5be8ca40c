//! Camera and drawable surface

use glam::{Mat4, Vec3};

use crate::params::CameraParams;

/// Perspective camera looking at an orbit target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,
    /// Orbit target (look-at point) in world space
    pub target: Vec3,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Width / height of the surface being drawn to
    pub aspect: f32,
}

impl Camera {
    pub fn from_params(params: &CameraParams, viewport: Viewport) -> Self {
        Self {
            position: params.position,
            target: params.target,
            fov: params.fov,
            near: params.near,
            far: params.far,
            aspect: viewport.aspect_ratio(),
        }
    }

    /// Match the aspect ratio of a resized surface
    pub fn resize(&mut self, viewport: Viewport) {
        self.aspect = viewport.aspect_ratio();
    }

    /// Compute the view matrix (world-to-camera transform)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Compute the projection matrix for the current aspect ratio
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Size of the host's drawable surface in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    /// Device pixels per CSS pixel
    pub pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixel_ratio: 1.0,
        }
    }

    pub fn with_pixel_ratio(mut self, pixel_ratio: f32) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    /// Calculate aspect ratio (width / height)
    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0 // Avoid division by zero
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Check if viewport is valid (non-zero dimensions)
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Backing-store size in device pixels with the pixel ratio capped
    pub fn drawable_size(&self, max_pixel_ratio: f32) -> (u32, u32) {
        let ratio = self.pixel_ratio.min(max_pixel_ratio).max(0.0);
        (
            (self.width as f32 * ratio).round() as u32,
            (self.height as f32 * ratio).round() as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> CameraParams {
        CameraParams {
            fov: 55.0,
            near: 0.1,
            far: 200.0,
            position: Vec3::new(4.5, 2.45, 5.7),
            target: Vec3::new(0.0, 0.85, 0.0),
        }
    }

    #[test]
    fn test_resize_sets_exact_aspect() {
        let mut camera = Camera::from_params(&params(), Viewport::new(800, 600));
        assert_eq!(camera.aspect, 800.0 / 600.0);

        camera.resize(Viewport::new(1600, 900));
        assert_eq!(camera.aspect, 1600.0 / 900.0);
    }

    #[test]
    fn test_zero_height_aspect() {
        let viewport = Viewport::new(640, 0);
        assert_eq!(viewport.aspect_ratio(), 1.0);
        assert!(!viewport.is_valid());
    }

    #[test]
    fn test_view_matrix_puts_target_in_front() {
        let camera = Camera::from_params(&params(), Viewport::new(800, 600));
        let target = camera.view_matrix().transform_point3(camera.target);
        assert!(target.z < 0.0);
        assert!(target.x.abs() < 1e-5);
    }

    #[test]
    fn test_projection_follows_aspect() {
        let mut camera = Camera::from_params(&params(), Viewport::new(800, 600));
        let before = camera.projection_matrix();
        camera.resize(Viewport::new(1600, 900));
        assert_ne!(before, camera.projection_matrix());
        assert_eq!(
            camera.view_projection_matrix(),
            camera.projection_matrix() * camera.view_matrix()
        );
    }

    #[test]
    fn test_drawable_size_caps_pixel_ratio() {
        let retina = Viewport::new(800, 600).with_pixel_ratio(3.0);
        assert_eq!(retina.drawable_size(2.0), (1600, 1200));

        let low = Viewport::new(800, 600).with_pixel_ratio(1.5);
        assert_eq!(low.drawable_size(2.0), (1200, 900));
    }
}
