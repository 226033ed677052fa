//! Per-frame connection list between nearby particles.
//!
//! [`pair_scan`] is the reference: every unordered pair (i, j), i < j, in
//! increasing i then j. [`SpatialGrid`] buckets particles into cubic cells of
//! edge = threshold and only tests neighbouring cells; it sorts its candidates
//! before applying the capacity cap, so both produce the same list.

use flux_core::Connection;

/// Connection between particles `i < j` if they are closer than `threshold`
#[inline]
fn link(positions: &[[f32; 3]], i: usize, j: usize, threshold: f32) -> Option<Connection> {
    let pi = positions[i];
    let pj = positions[j];
    let dx = pi[0] - pj[0];
    let dy = pi[1] - pj[1];
    let dz = pi[2] - pj[2];
    let dist = (dx * dx + dy * dy + dz * dz).sqrt();

    if dist < threshold {
        Some(Connection {
            a: i as u32,
            b: j as u32,
            alpha: 1.0 - dist / threshold,
        })
    } else {
        None
    }
}

/// O(N²) scan. Clears `out`, then fills it with at most `capacity` connections.
pub fn pair_scan(positions: &[[f32; 3]], threshold: f32, capacity: usize, out: &mut Vec<Connection>) {
    out.clear();
    let n = positions.len();

    for i in 0..n {
        for j in (i + 1)..n {
            if let Some(connection) = link(positions, i, j, threshold) {
                if out.len() >= capacity {
                    return;
                }
                out.push(connection);
            }
        }
    }
}

type CellKey = [i32; 3];

/// Uniform grid index reused across frames
#[derive(Debug, Default, Clone)]
pub struct SpatialGrid {
    /// (cell, particle index), sorted by cell then index
    entries: Vec<(CellKey, u32)>,
    candidates: Vec<Connection>,
}

impl SpatialGrid {
    pub fn new() -> Self {
        Self::default()
    }

    fn cell_of(pos: [f32; 3], cell_size: f32) -> CellKey {
        [
            (pos[0] / cell_size).floor() as i32,
            (pos[1] / cell_size).floor() as i32,
            (pos[2] / cell_size).floor() as i32,
        ]
    }

    /// Same contract as [`pair_scan`]
    pub fn connections(
        &mut self,
        positions: &[[f32; 3]],
        threshold: f32,
        capacity: usize,
        out: &mut Vec<Connection>,
    ) {
        self.entries.clear();
        self.entries.extend(
            positions
                .iter()
                .enumerate()
                .map(|(i, p)| (Self::cell_of(*p, threshold), i as u32)),
        );
        self.entries.sort_unstable();

        self.candidates.clear();
        for (i, p) in positions.iter().enumerate() {
            let cell = Self::cell_of(*p, threshold);
            for dx in -1..=1 {
                for dy in -1..=1 {
                    for dz in -1..=1 {
                        // Cells saturate at the i32 range; wrapping keeps the 27 keys distinct
                        let key = [
                            cell[0].wrapping_add(dx),
                            cell[1].wrapping_add(dy),
                            cell[2].wrapping_add(dz),
                        ];
                        let start = self.entries.partition_point(|(k, _)| *k < key);
                        for &(k, j) in &self.entries[start..] {
                            if k != key {
                                break;
                            }
                            let j = j as usize;
                            if j <= i {
                                continue;
                            }
                            if let Some(connection) = link(positions, i, j, threshold) {
                                self.candidates.push(connection);
                            }
                        }
                    }
                }
            }
        }

        self.candidates.sort_unstable_by_key(|c| (c.a, c.b));
        out.clear();
        out.extend(self.candidates.iter().take(capacity).copied());
    }
}
