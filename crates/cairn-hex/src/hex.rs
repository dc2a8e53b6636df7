//! The [`Hex`] coordinate value type and its arithmetic.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::direction::Direction;

/// A hex-grid address in cube coordinates.
///
/// Stored axially as `(q, r)`; the third cube coordinate is always
/// derivable as `s = -q - r`, so the invariant `q + r + s = 0` holds by
/// construction and cannot be violated. Equality and hashing are over
/// `(q, r)`.
///
/// Arithmetic produces new values; `Hex` is `Copy` and immutable.
///
/// # Examples
///
/// ```
/// use cairn_hex::{Direction, Hex};
///
/// let a = Hex::new(2, -1);
/// assert_eq!(a.q() + a.r() + a.s(), 0);
/// assert_eq!(a.neighbour(Direction::East), Hex::new(3, -1));
/// assert_eq!(a.distance(Hex::new(2, -1)), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hex {
    q: i32,
    r: i32,
}

impl Hex {
    /// Create a hex from axial coordinates.
    pub fn new(q: i32, r: i32) -> Hex {
        Hex { q, r }
    }

    /// The `q` cube coordinate.
    pub fn q(self) -> i32 {
        self.q
    }

    /// The `r` cube coordinate.
    pub fn r(self) -> i32 {
        self.r
    }

    /// The derived `s` cube coordinate (`-q - r`).
    pub fn s(self) -> i32 {
        -self.q - self.r
    }

    /// Rotate 60° counter-clockwise about the origin: `(q, r, s) → (-s, -q, -r)`.
    pub fn rotate_left(self) -> Hex {
        Hex::new(-self.s(), -self.q)
    }

    /// Rotate 60° clockwise about the origin: `(q, r, s) → (-r, -s, -q)`.
    pub fn rotate_right(self) -> Hex {
        Hex::new(-self.r, -self.s())
    }

    /// Cube length: the hex distance from the origin,
    /// `(|q| + |r| + |s|) / 2`.
    pub fn length(self) -> i32 {
        (self.q.abs() + self.r.abs() + self.s().abs()) / 2
    }

    /// Hex distance between two coordinates: the minimum number of
    /// single-hex steps from `self` to `other`.
    pub fn distance(self, other: Hex) -> i32 {
        (self - other).length()
    }

    /// The adjacent hex one step in `direction`.
    pub fn neighbour(self, direction: Direction) -> Hex {
        self + direction.offset()
    }

    /// All six adjacent hexes, in [`Direction::ALL`] order.
    pub fn neighbours(self) -> [Hex; 6] {
        Direction::ALL.map(|d| self + d.offset())
    }
}

impl Add for Hex {
    type Output = Hex;

    fn add(self, rhs: Hex) -> Hex {
        Hex::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl Sub for Hex {
    type Output = Hex;

    fn sub(self, rhs: Hex) -> Hex {
        Hex::new(self.q - rhs.q, self.r - rhs.r)
    }
}

impl Mul<i32> for Hex {
    type Output = Hex;

    fn mul(self, k: i32) -> Hex {
        Hex::new(self.q * k, self.r * k)
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s())
    }
}

/// A hex with fractional cube coordinates, used only as an intermediate
/// while interpolating along a line.
#[derive(Clone, Copy, Debug)]
struct FracHex {
    q: f64,
    r: f64,
    s: f64,
}

impl FracHex {
    fn lerp(a: FracHex, b: FracHex, t: f64) -> FracHex {
        FracHex {
            q: a.q * (1.0 - t) + b.q * t,
            r: a.r * (1.0 - t) + b.r * t,
            s: a.s * (1.0 - t) + b.s * t,
        }
    }

    /// Round to the nearest hex, preserving the zero-sum invariant by
    /// discarding whichever axis accumulated the largest rounding error
    /// and recomputing it from the other two.
    fn round(self) -> Hex {
        let mut qi = self.q.round();
        let mut ri = self.r.round();
        let si = self.s.round();
        let q_diff = (qi - self.q).abs();
        let r_diff = (ri - self.r).abs();
        let s_diff = (si - self.s).abs();
        if q_diff > r_diff && q_diff > s_diff {
            qi = -ri - si;
        } else if r_diff > s_diff {
            ri = -qi - si;
        }
        // When s has the largest error it is simply not stored; axial
        // construction recomputes it from q and r.
        Hex::new(qi as i32, ri as i32)
    }
}

/// The sequence of hexes on the straight line from `a` to `b`, inclusive
/// of both endpoints.
///
/// Interpolates in fractional cube space and rounds each sample to the
/// nearest hex. The endpoints are nudged by an epsilon so that samples
/// landing exactly on an edge resolve consistently to one side.
pub fn line(a: Hex, b: Hex) -> Vec<Hex> {
    let n = a.distance(b);
    let a_nudge = FracHex {
        q: a.q as f64 + 1e-6,
        r: a.r as f64 + 1e-6,
        s: a.s() as f64 - 2e-6,
    };
    let b_nudge = FracHex {
        q: b.q as f64 + 1e-6,
        r: b.r as f64 + 1e-6,
        s: b.s() as f64 - 2e-6,
    };
    let step = 1.0 / f64::from(n.max(1));
    (0..=n)
        .map(|i| FracHex::lerp(a_nudge, b_nudge, step * f64::from(i)).round())
        .collect()
}
