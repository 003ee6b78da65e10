//! Cardinal-direction snapping for the translational axes.

use libm::{atan2f, floorf};

/// The eight snap targets, one per 45° sector, starting at east (+strafe)
/// and walking counterclockwise. Components are in {-1, 0, 1}.
const SECTORS: [(f32, f32); 8] = [
    (1.0, 0.0),   // east
    (1.0, 1.0),   // northeast
    (0.0, 1.0),   // north
    (-1.0, 1.0),  // northwest
    (-1.0, 0.0),  // west
    (-1.0, -1.0), // southwest
    (0.0, -1.0),  // south
    (1.0, -1.0),  // southeast
];

/// Snap a (strafe, forward) vector to the nearest of eight directions.
///
/// The circle is partitioned into 45°-wide sectors centered on the cardinal
/// and diagonal directions, with boundaries at 22.5° + 45°·n; the input is
/// replaced by the matched sector's direction vector. An angle exactly on a
/// boundary snaps to the counterclockwise neighbor. This intentionally
/// discards magnitude: any nonzero deflection commands the full direction
/// vector. The zero vector is left unchanged.
pub fn snap_to_cardinal(strafe: f32, forward: f32) -> (f32, f32) {
    if strafe == 0.0 && forward == 0.0 {
        return (0.0, 0.0);
    }

    let degrees = atan2f(forward, strafe).to_degrees();
    let sector = floorf((degrees + 22.5) / 45.0) as i32;
    let index = sector.rem_euclid(8) as usize;

    SECTORS[index]
}
