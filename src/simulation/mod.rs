mod disturbance;
mod field;
mod integrator;
mod params;

pub use disturbance::{inject, Disturbance};
pub use field::WaveField;
pub use integrator::step;
pub use params::WaveParams;

/// Simulation state owned by the frame loop: the field plus its parameters.
pub struct Simulation {
    field: WaveField,
    params: WaveParams,
    steps: u64,
}

impl Simulation {
    /// Create a zeroed simulation. Logs a warning when the parameters
    /// violate the CFL bound, since such a field grows without limit.
    pub fn new(width: usize, height: usize, params: WaveParams) -> Self {
        if !params.is_stable() {
            log::warn!(
                "Courant number {:.3} exceeds 1/sqrt(2); the field will diverge",
                params.courant_number()
            );
        }
        Self {
            field: WaveField::new(width, height),
            params,
            steps: 0,
        }
    }

    pub fn field(&self) -> &WaveField {
        &self.field
    }

    pub fn params(&self) -> &WaveParams {
        &self.params
    }

    /// Number of steps taken since creation
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Stamp a pulse into the current generation
    pub fn inject(&mut self, disturbance: &Disturbance) {
        inject(&mut self.field, disturbance);
    }

    /// Advance one timestep
    pub fn step(&mut self) {
        step(&mut self.field, &self.params);
        self.steps += 1;
    }
}
