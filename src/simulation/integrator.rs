//! Leapfrog time-stepping of the damped 2D wave equation.
//!
//! Discretizes `∂²u/∂t² = c²∇²u` with central differences in time and a
//! five-point Laplacian in space:
//!
//! ```text
//! u[n+1] = (2·u[n] − u[n−1] + (c²dt²/dx²)·∇²u[n]) · damping
//! ```
//!
//! The damping multiplier is an engineering stabilizer, not a physical term.

use crate::simulation::field::WaveField;
use crate::simulation::params::WaveParams;

/// Advance `field` by one timestep and rotate its generations.
///
/// Only interior cells are written; the outer ring keeps whatever value it
/// already held in the recycled buffer, which is zero unless something other
/// than injection wrote it (injection never touches the ring).
pub fn step(field: &mut WaveField, params: &WaveParams) {
    let width = field.width();
    let height = field.height();
    let weight = params.laplacian_weight();
    let damping = params.damping;

    let (previous, current, next) = field.step_buffers();

    for i in 1..width - 1 {
        let row = i * height;
        for j in 1..height - 1 {
            let idx = row + j;

            let u = current[idx];
            let laplacian = current[idx + height]
                + current[idx - height]
                + current[idx + 1]
                + current[idx - 1]
                - 4.0 * u;

            next[idx] = (2.0 * u - previous[idx] + weight * laplacian) * damping;
        }
    }

    field.advance();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::disturbance::{inject, Disturbance};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_field(width: usize, height: usize, seed: u64) -> WaveField {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut field = WaveField::new(width, height);
        for v in field.previous_mut() {
            *v = rng.gen_range(-1.0..1.0);
        }
        for v in field.current_mut() {
            *v = rng.gen_range(-1.0..1.0);
        }
        field
    }

    fn boundary_values(field: &WaveField, buffer: &[f32]) -> Vec<f32> {
        let (w, h) = (field.width(), field.height());
        let mut out = Vec::new();
        for i in 0..w {
            for j in 0..h {
                if !field.is_interior(i, j) {
                    out.push(buffer[field.idx(i, j)]);
                }
            }
        }
        out
    }

    #[test]
    fn test_single_step_matches_stencil() {
        let params = WaveParams::default();
        let mut field = random_field(5, 6, 7);
        let before = field.clone();

        step(&mut field, &params);

        let weight = params.laplacian_weight();
        for i in 1..4 {
            for j in 1..5 {
                let u = before.get(i, j);
                let lap = before.get(i + 1, j) + before.get(i - 1, j) + before.get(i, j + 1)
                    + before.get(i, j - 1)
                    - 4.0 * u;
                let expected =
                    (2.0 * u - before.previous()[before.idx(i, j)] + weight * lap) * params.damping;
                assert!(
                    (field.get(i, j) - expected).abs() < 1e-6,
                    "Mismatch at ({}, {}): {} vs {}",
                    i,
                    j,
                    field.get(i, j),
                    expected
                );
            }
        }
    }

    #[test]
    fn test_step_rotates_current_into_previous() {
        let mut field = random_field(8, 8, 11);
        let old_current = field.current().to_vec();
        step(&mut field, &WaveParams::default());
        assert_eq!(field.previous(), old_current.as_slice());
    }

    #[test]
    fn test_boundary_invariance() {
        let params = WaveParams::default();
        let mut field = WaveField::new(24, 18);
        inject(&mut field, &Disturbance::new(12, 9, 2.0, 8));

        let expected = boundary_values(&field, field.current());
        for _ in 0..50 {
            step(&mut field, &params);
            assert_eq!(boundary_values(&field, field.current()), expected);
        }
    }

    #[test]
    fn test_step_never_writes_boundary() {
        let params = WaveParams::default();
        let mut field = random_field(12, 9, 3);
        for v in field.step_buffers().2.iter_mut() {
            *v = -3.0;
        }
        let write_target = field.step_buffers().2.to_vec();
        let ring = boundary_values(&field, &write_target);

        step(&mut field, &params);
        // The write target is now the current generation; its ring is unchanged
        assert_eq!(boundary_values(&field, field.current()), ring);
        assert!(field.current()[field.idx(4, 4)] != -3.0);
    }

    #[test]
    fn test_determinism() {
        let params = WaveParams::default();
        let mut a = random_field(30, 20, 42);
        let mut b = a.clone();

        for _ in 0..25 {
            step(&mut a, &params);
            step(&mut b, &params);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_field_stays_zero() {
        let mut field = WaveField::new(16, 16);
        for _ in 0..10 {
            step(&mut field, &WaveParams::default());
        }
        assert!(field.current().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_damping_reduces_energy_from_rest() {
        // A pulse released from rest loses squared height while its dominant
        // mode swings toward zero displacement (roughly 13 steps here).
        let params = WaveParams::default();
        let mut field = WaveField::new(41, 41);
        inject(&mut field, &Disturbance::new(20, 20, 1.0, 10));
        let at_rest = field.current().to_vec();
        field.previous_mut().copy_from_slice(&at_rest);

        let mut last = field.interior_energy();
        for n in 0..10 {
            step(&mut field, &params);
            let energy = field.interior_energy();
            assert!(
                energy <= last,
                "Energy grew at step {}: {} -> {}",
                n,
                last,
                energy
            );
            last = energy;
        }
    }

    #[test]
    fn test_damping_decays_long_run() {
        let params = WaveParams::default();
        let mut field = WaveField::new(41, 41);
        inject(&mut field, &Disturbance::new(20, 20, 1.0, 10));
        let at_rest = field.current().to_vec();
        field.previous_mut().copy_from_slice(&at_rest);
        let start = field.interior_energy();

        for _ in 0..600 {
            step(&mut field, &params);
        }
        // Squared heights fall by 0.995^2 per step on top of the oscillation
        assert!(field.interior_energy() < start * 0.1);
    }

    #[test]
    fn test_unstable_params_diverge() {
        let params = WaveParams {
            wave_speed: 20.0,
            damping: 1.0,
            ..WaveParams::default()
        };
        assert!(!params.is_stable());

        let mut field = WaveField::new(21, 21);
        inject(&mut field, &Disturbance::new(10, 10, 1.0, 3));
        for _ in 0..200 {
            step(&mut field, &params);
        }
        let peak = field.peak_amplitude();
        assert!(peak.is_nan() || peak > 1.0e6);
    }
}
