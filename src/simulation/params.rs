use crate::config::{DAMPING, SPATIAL_STEP, TIME_STEP, WAVE_SPEED};

/// Parameters of the damped 2D wave equation, fixed for the process lifetime.
///
/// The explicit leapfrog scheme is only stable while the Courant number
/// `c * dt / dx` stays at or below `1/√2`. Nothing enforces this; use
/// [`WaveParams::is_stable`] to check a parameter set before running it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    /// Wave propagation speed `c`
    pub wave_speed: f32,
    /// Time step `dt`
    pub time_step: f32,
    /// Spatial step `dx`
    pub spatial_step: f32,
    /// Multiplicative damping per step, in (0, 1]
    pub damping: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            wave_speed: WAVE_SPEED,
            time_step: TIME_STEP,
            spatial_step: SPATIAL_STEP,
            damping: DAMPING,
        }
    }
}

impl WaveParams {
    /// Laplacian weight `c²·dt²/dx²` used by the integrator
    pub fn laplacian_weight(&self) -> f32 {
        let c = self.wave_speed;
        let dt = self.time_step;
        let dx = self.spatial_step;
        c * c * dt * dt / (dx * dx)
    }

    /// Courant number `c·dt/dx`
    pub fn courant_number(&self) -> f32 {
        self.wave_speed * self.time_step / self.spatial_step
    }

    /// Whether the parameters satisfy the 2D CFL bound
    pub fn is_stable(&self) -> bool {
        self.courant_number() <= 1.0 / std::f32::consts::SQRT_2
    }
}
