use crate::config::CLICK_PIXELS_PER_CELL;

/// Map a window pixel to a grid cell.
///
/// The window center lands on the grid center and every
/// `CLICK_PIXELS_PER_CELL` pixels move one cell. Offsets truncate toward
/// zero. Returns `None` when the result falls outside `[0, width) x [0, height)`.
pub fn click_to_grid(
    pixel: (i32, i32),
    window: (u32, u32),
    grid: (usize, usize),
) -> Option<(usize, usize)> {
    let gx = (grid.0 / 2) as i64 + ((pixel.0 - (window.0 / 2) as i32) / CLICK_PIXELS_PER_CELL) as i64;
    let gy = (grid.1 / 2) as i64 + ((pixel.1 - (window.1 / 2) as i32) / CLICK_PIXELS_PER_CELL) as i64;

    if gx >= 0 && gx < grid.0 as i64 && gy >= 0 && gy < grid.1 as i64 {
        Some((gx as usize, gy as usize))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: (u32, u32) = (800, 600);
    const GRID: (usize, usize) = (200, 200);

    #[test]
    fn test_window_center_maps_to_grid_center() {
        assert_eq!(click_to_grid((400, 300), WINDOW, GRID), Some((100, 100)));
    }

    #[test]
    fn test_quarter_scale() {
        assert_eq!(click_to_grid((404, 292), WINDOW, GRID), Some((101, 98)));
        assert_eq!(click_to_grid((0, 0), WINDOW, GRID), Some((0, 25)));
        assert_eq!(click_to_grid((799, 599), WINDOW, GRID), Some((199, 174)));
    }

    #[test]
    fn test_truncates_toward_zero() {
        // -3 / 4 truncates to 0, not -1
        assert_eq!(click_to_grid((397, 297), WINDOW, GRID), Some((100, 100)));
        assert_eq!(click_to_grid((403, 303), WINDOW, GRID), Some((100, 100)));
    }

    #[test]
    fn test_out_of_grid() {
        assert_eq!(click_to_grid((-10, 300), WINDOW, GRID), None);
        assert_eq!(click_to_grid((400, -500), WINDOW, GRID), None);
        assert_eq!(click_to_grid((800, 300), WINDOW, GRID), None);
        assert_eq!(click_to_grid((1200, 300), WINDOW, GRID), None);
    }
}
