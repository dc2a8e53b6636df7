//! Region enumerators: sheared rectangles and hex-distance disks.

use crate::hex::Hex;

/// Every hex in the brick-layout rectangle bounded by the given rows
/// and columns, in row-major order.
///
/// Each row `r` is sheared by `⌊r/2⌋` so that the axial coordinates
/// form the staggered rectangle conventional for hex-grid maps: row
/// `r` covers `q` in `[left - ⌊r/2⌋, right - ⌊r/2⌋]`.
pub fn rectangle(top: i32, bottom: i32, left: i32, right: i32) -> Vec<Hex> {
    let mut out = Vec::new();
    for r in top..=bottom {
        let r_offset = r.div_euclid(2);
        for q in (left - r_offset)..=(right - r_offset) {
            out.push(Hex::new(q, r));
        }
    }
    out
}

/// A `height`-row by `width`-column rectangle centred on the origin.
///
/// The window is `[⌈-h/2⌉ + 1, ⌊h/2⌋]` rows by the analogous column
/// span, so odd dimensions place `Hex::new(0, 0)` at the exact centre.
pub fn rectangle_of_size(height: i32, width: i32) -> Vec<Hex> {
    let top = (-height).div_euclid(2);
    let bottom = height.div_euclid(2);
    let left = (-width).div_euclid(2);
    let right = width.div_euclid(2);
    rectangle(top + 1, bottom, left + 1, right)
}

/// All hexes at hex distance at most `steps` from `center`.
///
/// Enumerated by the double loop over `(q, r)` with `r` bounded by `q`,
/// which walks the hex-shaped disk directly rather than clipping a
/// bounding rectangle. Yields `3n² + 3n + 1` hexes for `steps = n`;
/// empty for negative `steps`.
pub fn range(center: Hex, steps: i32) -> Vec<Hex> {
    let mut out = Vec::new();
    for q in -steps..=steps {
        let lo = (-steps).max(-q - steps);
        let hi = steps.min(-q + steps);
        for r in lo..=hi {
            out.push(center + Hex::new(q, r));
        }
    }
    out
}
