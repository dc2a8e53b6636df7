//! Terrain kinds, strongly-typed terrain IDs, and the [`TerrainSet`] bitset.

use std::fmt;

/// Identifies a terrain kind within a [`Catalog`](crate::Catalog).
///
/// Terrains are registered at catalog construction and assigned
/// sequential IDs; `TerrainId(n)` is the n-th terrain in catalog order.
/// IDs are only meaningful relative to the catalog that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TerrainId(pub u16);

impl TerrainId {
    /// The ID as a list index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TerrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named terrain kind with its declared compatible neighbours.
///
/// The compatibility list is *directed*: it names the kinds this terrain
/// tolerates next to itself, and nothing forces the reverse declaration
/// to exist. The default catalog deliberately contains such an
/// asymmetry (`town` declares only `plains`, while `plains` declares
/// `town` back); the propagation engine applies the check along every
/// ordered neighbour pair rather than symmetrizing the data.
///
/// Terrains are immutable and compared by value: two terrains are equal
/// iff both the name and the compatibility list match.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Terrain {
    name: String,
    compatible: Vec<String>,
}

impl Terrain {
    /// Create a terrain kind from its name and compatible-neighbour names.
    pub fn new<N, I, S>(name: N, compatible: I) -> Terrain
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Terrain {
            name: name.into(),
            compatible: compatible.into_iter().map(Into::into).collect(),
        }
    }

    /// The terrain's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared compatible-neighbour names, in declaration order.
    pub fn compatible(&self) -> &[String] {
        &self.compatible
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A set of [`TerrainId`]s implemented as a fixed-width bitset.
///
/// A catalog holds at most [`TerrainSet::CAPACITY`] kinds, so a single
/// `u32` word covers every possible member. Used both for cell candidate
/// domains and for resolved compatibility rows; `Copy` so domains can be
/// snapshotted cheaply while the grid is being mutated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TerrainSet {
    bits: u32,
}

impl TerrainSet {
    /// Maximum number of terrain kinds representable.
    pub const CAPACITY: usize = u32::BITS as usize;

    /// The empty set.
    pub fn empty() -> TerrainSet {
        TerrainSet { bits: 0 }
    }

    /// The set of the first `n` IDs: `{0, 1, …, n-1}`.
    ///
    /// This is the "every terrain still possible" domain for a catalog
    /// of `n` kinds. `n` must not exceed [`TerrainSet::CAPACITY`].
    pub fn full(n: usize) -> TerrainSet {
        debug_assert!(n <= Self::CAPACITY);
        if n == Self::CAPACITY {
            TerrainSet { bits: u32::MAX }
        } else {
            TerrainSet {
                bits: (1u32 << n) - 1,
            }
        }
    }

    /// Insert a terrain ID.
    pub fn insert(&mut self, id: TerrainId) {
        self.bits |= 1u32 << id.0;
    }

    /// Remove a terrain ID.
    pub fn remove(&mut self, id: TerrainId) {
        self.bits &= !(1u32 << id.0);
    }

    /// Whether the set contains `id`.
    pub fn contains(self, id: TerrainId) -> bool {
        self.bits & (1u32 << id.0) != 0
    }

    /// Number of members.
    pub fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Whether the set is empty.
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Whether the two sets share at least one member.
    pub fn intersects(self, other: TerrainSet) -> bool {
        self.bits & other.bits != 0
    }

    /// The intersection of two sets.
    pub fn intersection(self, other: TerrainSet) -> TerrainSet {
        TerrainSet {
            bits: self.bits & other.bits,
        }
    }

    /// Whether every member of `self` is also in `other`.
    pub fn is_subset(self, other: TerrainSet) -> bool {
        self.bits & !other.bits == 0
    }

    /// Iterate the members in ascending ID order.
    pub fn iter(self) -> impl Iterator<Item = TerrainId> {
        (0..u32::BITS as u16)
            .filter(move |i| self.bits & (1u32 << i) != 0)
            .map(TerrainId)
    }

    /// The single member, if the set is a singleton.
    pub fn single(self) -> Option<TerrainId> {
        if self.len() == 1 {
            Some(TerrainId(self.bits.trailing_zeros() as u16))
        } else {
            None
        }
    }
}

impl FromIterator<TerrainId> for TerrainSet {
    fn from_iter<I: IntoIterator<Item = TerrainId>>(iter: I) -> TerrainSet {
        let mut set = TerrainSet::empty();
        for id in iter {
            set.insert(id);
        }
        set
    }
}
