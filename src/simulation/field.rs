use std::mem;

/// Three generations of a `width x height` scalar height field.
///
/// Cells are stored row-major by `i` (the x index): cell `(i, j)` lives at
/// `i * height + j`. The integrator reads `previous` and `current`, writes
/// `next`, then calls [`WaveField::advance`] to rotate the roles without
/// copying or reallocating.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveField {
    width: usize,
    height: usize,
    previous: Vec<f32>,
    current: Vec<f32>,
    next: Vec<f32>,
}

impl WaveField {
    /// Create a zeroed field. Both dimensions must be at least 3 so that an
    /// interior exists.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width >= 3 && height >= 3,
            "Field must be at least 3x3, got {}x{}",
            width,
            height
        );
        let cell_count = width * height;
        Self {
            width,
            height,
            previous: vec![0.0; cell_count],
            current: vec![0.0; cell_count],
            next: vec![0.0; cell_count],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Linear index of cell `(i, j)`
    #[inline(always)]
    pub fn idx(&self, i: usize, j: usize) -> usize {
        i * self.height + j
    }

    /// Current height at `(i, j)`
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.current[self.idx(i, j)]
    }

    #[cfg(test)]
    pub(crate) fn current(&self) -> &[f32] {
        &self.current
    }

    #[cfg(test)]
    pub(crate) fn previous(&self) -> &[f32] {
        &self.previous
    }

    /// True when `(i, j)` is not on the outermost ring of cells
    pub fn is_interior(&self, i: usize, j: usize) -> bool {
        i >= 1 && i + 1 < self.width && j >= 1 && j + 1 < self.height
    }

    /// Overwrite one cell of the current generation
    pub(crate) fn set_current(&mut self, i: usize, j: usize, value: f32) {
        let idx = self.idx(i, j);
        self.current[idx] = value;
    }

    /// Split borrows for one integration step: `(previous, current, next)`
    pub(crate) fn step_buffers(&mut self) -> (&[f32], &[f32], &mut [f32]) {
        (&self.previous, &self.current, &mut self.next)
    }

    /// Rotate generations: current -> previous, next -> current.
    /// The old previous buffer is recycled as the next write target.
    pub fn advance(&mut self) {
        mem::swap(&mut self.previous, &mut self.current);
        mem::swap(&mut self.current, &mut self.next);
    }

    /// Sum of squared heights over interior cells
    pub fn interior_energy(&self) -> f64 {
        let mut sum = 0.0f64;
        for i in 1..self.width - 1 {
            let row = &self.current[i * self.height + 1..(i + 1) * self.height - 1];
            sum += row.iter().map(|&v| (v as f64) * (v as f64)).sum::<f64>();
        }
        sum
    }

    /// Largest absolute height in the current generation (NaN propagates)
    pub fn peak_amplitude(&self) -> f32 {
        self.current.iter().fold(0.0f32, |acc, &v| {
            if acc.is_nan() || v.is_nan() {
                f32::NAN
            } else {
                acc.max(v.abs())
            }
        })
    }

    #[cfg(test)]
    pub(crate) fn previous_mut(&mut self) -> &mut [f32] {
        &mut self.previous
    }

    #[cfg(test)]
    pub(crate) fn current_mut(&mut self) -> &mut [f32] {
        &mut self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_creation() {
        let field = WaveField::new(20, 10);
        assert_eq!(field.width(), 20);
        assert_eq!(field.height(), 10);
        assert_eq!(field.current().len(), 200);
        assert!(field.current().iter().all(|&v| v == 0.0));
        assert!(field.previous().iter().all(|&v| v == 0.0));
    }

    #[test]
    #[should_panic]
    fn test_field_too_small() {
        WaveField::new(2, 10);
    }

    #[test]
    fn test_index_layout() {
        let field = WaveField::new(4, 7);
        assert_eq!(field.idx(0, 0), 0);
        assert_eq!(field.idx(0, 6), 6);
        assert_eq!(field.idx(1, 0), 7);
        assert_eq!(field.idx(3, 6), 27);
    }

    #[test]
    fn test_interior() {
        let field = WaveField::new(5, 5);
        assert!(field.is_interior(1, 1));
        assert!(field.is_interior(3, 3));
        assert!(!field.is_interior(0, 2));
        assert!(!field.is_interior(4, 2));
        assert!(!field.is_interior(2, 0));
        assert!(!field.is_interior(2, 4));
    }

    #[test]
    fn test_advance_rotates_roles() {
        let mut field = WaveField::new(3, 3);
        field.previous_mut().fill(1.0);
        field.current_mut().fill(2.0);
        field.step_buffers().2.fill(3.0);

        field.advance();
        assert!(field.previous().iter().all(|&v| v == 2.0));
        assert!(field.current().iter().all(|&v| v == 3.0));
        // Old previous is now the write target
        assert!(field.step_buffers().2.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_advance_reuses_allocations() {
        let mut field = WaveField::new(8, 8);
        let ptrs = [
            field.previous().as_ptr(),
            field.current().as_ptr(),
            field.step_buffers().2.as_ptr(),
        ];
        for _ in 0..3 {
            field.advance();
        }
        // Three rotations return every buffer to its original role
        assert_eq!(field.previous().as_ptr(), ptrs[0]);
        assert_eq!(field.current().as_ptr(), ptrs[1]);
    }

    #[test]
    fn test_interior_energy_ignores_boundary() {
        let mut field = WaveField::new(4, 4);
        field.set_current(0, 0, 10.0);
        field.set_current(3, 2, 10.0);
        field.set_current(1, 2, 2.0);
        field.set_current(2, 1, -1.0);
        assert!((field.interior_energy() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_peak_amplitude() {
        let mut field = WaveField::new(4, 4);
        field.set_current(1, 1, 0.5);
        field.set_current(2, 2, -1.5);
        assert_eq!(field.peak_amplitude(), 1.5);

        field.set_current(0, 0, f32::NAN);
        assert!(field.peak_amplitude().is_nan());
    }
}
