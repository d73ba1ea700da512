use crate::image::BinaryMask;
use crate::types::Point;

/// Ink pixels in the `2r × 2r` window `[x − r, x + r) × [y − r, y + r)`.
pub fn local_density(mask: &BinaryMask, p: Point, radius: i32) -> usize {
    let (x, y, r) = (p[0] as i64, p[1] as i64, radius as i64);
    mask.count_in_window(x - r, y - r, x + r, y + r)
}

/// Pick the arrowhead among the external endpoints.
///
/// The densest endpoint wins. Equal densities go to the lowest point (larger
/// y), then the rightmost (larger x). Every endpoint not equal to the tip
/// becomes a start.
pub fn select_tip(mask: &BinaryMask, external: &[Point], radius: i32) -> (Option<Point>, Vec<Point>) {
    let mut best: Option<(usize, Point)> = None;
    for &p in external {
        let density = local_density(mask, p, radius);
        let better = match best {
            None => true,
            Some((best_density, best_p)) => {
                density > best_density
                    || (density == best_density && (p[1], p[0]) > (best_p[1], best_p[0]))
            }
        };
        if better {
            best = Some((density, p));
        }
    }
    let tip = best.map(|(_, p)| p);
    let starts = external
        .iter()
        .copied()
        .filter(|&p| Some(p) != tip)
        .collect();
    (tip, starts)
}
