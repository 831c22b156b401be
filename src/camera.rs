use glam::{Mat4, Vec3};

use crate::config::{
    FAR_PLANE, FIELD_OF_VIEW_Y, INITIAL_ROTATION_X, INITIAL_ROTATION_Y, INITIAL_ZOOM, NEAR_PLANE,
    ROTATION_STEP, ZOOM_STEP,
};

/// Discrete camera control events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraControl {
    RotateLeft,
    RotateRight,
    RotateUp,
    RotateDown,
    ZoomIn,
    ZoomOut,
    Reset,
}

/// Orbit camera around the grid. Angles are in degrees and accumulate
/// without wrapping; `zoom` is the signed distance along the view axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            rotation_x: INITIAL_ROTATION_X,
            rotation_y: INITIAL_ROTATION_Y,
            zoom: INITIAL_ZOOM,
        }
    }
}

impl Camera {
    pub fn apply(&mut self, control: CameraControl) {
        match control {
            CameraControl::RotateLeft => self.rotation_y -= ROTATION_STEP,
            CameraControl::RotateRight => self.rotation_y += ROTATION_STEP,
            CameraControl::RotateUp => self.rotation_x -= ROTATION_STEP,
            CameraControl::RotateDown => self.rotation_x += ROTATION_STEP,
            CameraControl::ZoomIn => self.zoom += ZOOM_STEP,
            CameraControl::ZoomOut => self.zoom -= ZOOM_STEP,
            CameraControl::Reset => *self = Self::default(),
        }
    }

    /// Model-view transform for a grid spanning `extent` in x and y:
    /// push back by `zoom`, tilt about x, spin about y, then center the grid
    /// on the origin.
    pub fn model_view(&self, extent: (f32, f32)) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, self.zoom))
            * Mat4::from_rotation_x(self.rotation_x.to_radians())
            * Mat4::from_rotation_y(self.rotation_y.to_radians())
            * Mat4::from_translation(Vec3::new(-extent.0 / 2.0, -extent.1 / 2.0, 0.0))
    }

    /// Perspective projection for the given viewport aspect ratio
    pub fn projection(aspect: f32) -> Mat4 {
        Mat4::perspective_rh(FIELD_OF_VIEW_Y, aspect, NEAR_PLANE, FAR_PLANE)
    }

    pub fn view_proj(&self, extent: (f32, f32), aspect: f32) -> Mat4 {
        Self::projection(aspect) * self.model_view(extent)
    }
}
