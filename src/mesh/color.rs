//! Height to RGB palette.
//!
//! Flat water is green. Crests run green -> yellow -> orange -> red and
//! troughs run green -> light blue -> deep blue, with magnitudes saturating
//! at 1.0. Band edges use strict `<` so an exact edge value belongs to the
//! upper band.

/// Heights closer to zero than this draw as flat water
pub const FLAT_THRESHOLD: f32 = 0.05;

/// Baseline color for flat water
pub const FLAT_GREEN: [f32; 3] = [0.0, 0.8, 0.0];

/// Map a field height to an RGB color with components in [0, 1].
pub fn color_of(height: f32) -> [f32; 3] {
    if height.abs() < FLAT_THRESHOLD {
        FLAT_GREEN
    } else if height > 0.0 {
        crest_color(height.min(1.0))
    } else {
        trough_color((-height).min(1.0))
    }
}

fn crest_color(intensity: f32) -> [f32; 3] {
    if intensity < 0.33 {
        // green -> yellow
        let t = intensity / 0.33;
        [t, 0.8, 0.0]
    } else if intensity < 0.66 {
        // yellow -> orange
        let t = (intensity - 0.33) / 0.33;
        [1.0, 0.8 * (1.0 - t), 0.0]
    } else {
        // orange -> red. The green channel restarts from 0.8 * 0.34 rather
        // than continuing from the previous band, so it jumps at 0.66.
        let t = (intensity - 0.66) / 0.34;
        [1.0, 0.8 * (1.0 - 0.66) * (1.0 - t), 0.0]
    }
}

fn trough_color(intensity: f32) -> [f32; 3] {
    if intensity < 0.5 {
        // green -> light blue
        let t = intensity / 0.5;
        [0.0, 0.8 * (1.0 - t), 0.5 + 0.5 * t]
    } else {
        // light blue -> deep blue
        let t = (intensity - 0.5) / 0.5;
        [0.0, 0.8 * 0.5 * (1.0 - t), 0.5 + 0.5 * t]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn close(a: [f32; 3], b: [f32; 3], tol: f32) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= tol)
    }

    #[test]
    fn test_flat_band() {
        assert_eq!(color_of(0.0), FLAT_GREEN);
        assert_eq!(color_of(0.049), FLAT_GREEN);
        assert_eq!(color_of(-0.049), FLAT_GREEN);
        // Threshold itself leaves the flat band
        assert!(color_of(0.05)[0] > 0.0);
        assert!(color_of(-0.05)[2] > 0.5);
    }

    #[test]
    fn test_crest_bands() {
        let c = color_of(0.165);
        assert!(close(c, [0.5, 0.8, 0.0], 1e-5));

        let c = color_of(0.495);
        assert!(close(c, [1.0, 0.4, 0.0], 1e-5));

        let c = color_of(0.83);
        assert!(close(c, [1.0, 0.136, 0.0], 1e-5));

        assert!(close(color_of(1.0), [1.0, 0.0, 0.0], 1e-6));
    }

    #[test]
    fn test_trough_bands() {
        assert!(close(color_of(-0.25), [0.0, 0.4, 0.75], 1e-6));
        assert!(close(color_of(-0.75), [0.0, 0.2, 0.75], 1e-6));
        assert!(close(color_of(-1.0), [0.0, 0.0, 1.0], 1e-6));
    }

    #[test]
    fn test_saturates_beyond_unit_height() {
        assert_eq!(color_of(3.0), color_of(1.0));
        assert_eq!(color_of(-7.5), color_of(-1.0));
    }

    #[test]
    fn test_exact_edges_use_upper_band() {
        // 0.33 starts yellow -> orange at t = 0
        assert!(close(color_of(0.33), [1.0, 0.8, 0.0], 1e-6));
        // 0.66 starts orange -> red at t = 0
        assert!(close(color_of(0.66), [1.0, 0.8 * 0.34, 0.0], 1e-6));
        // -0.5 starts light blue -> deep blue at t = 0
        assert!(close(color_of(-0.5), [0.0, 0.4, 0.5], 1e-6));
    }

    #[test]
    fn test_continuous_at_yellow_edge() {
        let below = color_of(0.33 - EPS);
        let above = color_of(0.33 + EPS);
        assert!(close(below, above, 1e-2), "{:?} vs {:?}", below, above);
    }

    #[test]
    fn test_orange_red_green_jump() {
        let below = color_of(0.66 - EPS);
        let above = color_of(0.66 + EPS);
        assert!((below[1] - 0.0).abs() < 1e-2);
        assert!((above[1] - 0.8 * (1.0 - 0.66)).abs() < 1e-2);
        assert_eq!(below[0], above[0]);
        assert_eq!(below[2], above[2]);
    }

    #[test]
    fn test_deep_blue_edge_jump() {
        let below = color_of(-0.5 + EPS);
        let above = color_of(-0.5 - EPS);
        assert!(close(below, [0.0, 0.0, 1.0], 1e-2));
        assert!(close(above, [0.0, 0.4, 0.5], 1e-2));
    }

    #[test]
    fn test_components_in_unit_range() {
        for k in -1200..=1200 {
            let h = k as f32 / 1000.0;
            for channel in color_of(h) {
                assert!(
                    (0.0..=1.0).contains(&channel),
                    "Channel {} out of range for height {}",
                    channel,
                    h
                );
            }
        }
    }
}
