use crate::simulation::field::WaveField;

/// A radially decaying oscillatory pulse to stamp into the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disturbance {
    pub center_x: usize,
    pub center_y: usize,
    pub amplitude: f32,
    pub radius: u32,
}

impl Disturbance {
    pub fn new(center_x: usize, center_y: usize, amplitude: f32, radius: u32) -> Self {
        Self {
            center_x,
            center_y,
            amplitude,
            radius,
        }
    }

    /// Pulse height at `distance` cells from the center:
    /// `A * cos(d / 2) * exp(-d / R)`
    pub fn profile(&self, distance: f32) -> f32 {
        self.amplitude * (distance / 2.0).cos() * (-distance / self.radius as f32).exp()
    }
}

/// Overwrite the current generation with `disturbance` inside its disc.
///
/// Does nothing unless the center is an interior cell. Only interior cells
/// within `radius` of the center are written; `previous` is untouched so the
/// pulse starts with whatever velocity `previous` implies (zero on a field
/// at rest).
pub fn inject(field: &mut WaveField, disturbance: &Disturbance) {
    let (cx, cy) = (disturbance.center_x, disturbance.center_y);
    if !field.is_interior(cx, cy) {
        return;
    }

    let radius = disturbance.radius as i64;
    let (cx, cy) = (cx as i64, cy as i64);
    let (width, height) = (field.width() as i64, field.height() as i64);

    for i in -radius..=radius {
        let x = cx + i;
        if x < 1 || x >= width - 1 {
            continue;
        }
        for j in -radius..=radius {
            let y = cy + j;
            if y < 1 || y >= height - 1 {
                continue;
            }
            let distance = ((i * i + j * j) as f32).sqrt();
            if distance <= disturbance.radius as f32 {
                field.set_current(x as usize, y as usize, disturbance.profile(distance));
            }
        }
    }
}
