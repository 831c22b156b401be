/// Grid dimensions (200x200 height samples)
pub const GRID_WIDTH: usize = 200;
pub const GRID_HEIGHT: usize = 200;

/// Horizontal spacing between rendered grid samples, in world units
pub const CELL_SIZE: f32 = 3.0;

/// Vertical exaggeration applied to field heights when meshing
pub const HEIGHT_SCALE: f32 = 20.0;

/// A wireframe line is drawn every this many rows and columns
pub const WIREFRAME_SPACING: usize = 5;

// ============================================
// Wave Equation Parameters
// ============================================

/// Wave propagation speed (CFL: c * dt / dx = 0.175, well under 1/√2)
pub const WAVE_SPEED: f32 = 3.50;

/// Time step per integrator step
pub const TIME_STEP: f32 = 0.05;

/// Spatial step between neighbouring cells
pub const SPATIAL_STEP: f32 = 1.0;

/// Multiplicative damping applied once per step
pub const DAMPING: f32 = 0.995;

// ============================================
// Disturbances
// ============================================

/// Pulse seeded at the grid center on startup
pub const INITIAL_PULSE_AMPLITUDE: f32 = 3.0;
pub const INITIAL_PULSE_RADIUS: u32 = 40;

/// Pulse injected by a left click
pub const CLICK_PULSE_AMPLITUDE: f32 = 1.0;
pub const CLICK_PULSE_RADIUS: u32 = 65;

/// Window pixels per grid cell when mapping clicks onto the grid
pub const CLICK_PIXELS_PER_CELL: i32 = 4;

// ============================================
// Camera
// ============================================

pub const INITIAL_ROTATION_X: f32 = 30.0;
pub const INITIAL_ROTATION_Y: f32 = 45.0;
pub const INITIAL_ZOOM: f32 = -350.0;

/// Degrees per arrow key press
pub const ROTATION_STEP: f32 = 5.0;

/// Units along the view axis per zoom key press
pub const ZOOM_STEP: f32 = 10.0;

/// Perspective frustum: top/near = 1, i.e. a 90° vertical field of view
pub const FIELD_OF_VIEW_Y: f32 = std::f32::consts::FRAC_PI_2;
pub const NEAR_PLANE: f32 = 1.0;
pub const FAR_PLANE: f32 = 500.0;

// ============================================
// Window and frame pacing
// ============================================

pub const WINDOW_TITLE: &str = "3D Wave Simulation";
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;

/// Target wall-clock time per frame, in milliseconds
pub const FRAME_BUDGET_MS: u64 = 16;

/// Requested multisample count (falls back to 1 when unsupported)
pub const MSAA_SAMPLES: u32 = 4;

/// Steps between field diagnostics in the debug log
pub const DIAGNOSTIC_INTERVAL: u64 = 300;
