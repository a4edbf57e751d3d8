//! Scents left by lost robots.

use mars_core::{Command, GridPos, Heading};

#[cfg(feature = "fx-hash")]
type ScentIndex = rustc_hash::FxHashSet<Scent>;

#[cfg(not(feature = "fx-hash"))]
type ScentIndex = std::collections::HashSet<Scent>;

/// The last on-grid cell and heading of a robot that fell off.
///
/// A later robot standing on `pos` and facing `heading` ignores `F`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Scent {
    pub pos:     GridPos,
    pub heading: Heading,
}

impl Scent {
    #[inline]
    pub fn new(pos: GridPos, heading: Heading) -> Self {
        Self { pos, heading }
    }
}

/// Append-only scent collection.
///
/// Keeps insertion order for inspection and a hash index for the
/// per-instruction membership check.  Entries are never removed or changed.
#[derive(Debug, Default, Clone)]
pub struct ScentStore {
    trail: Vec<Scent>,
    index: ScentIndex,
}

impl ScentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scent.  Returns `false` if the same scent already existed.
    pub fn leave(&mut self, scent: Scent) -> bool {
        if !self.index.insert(scent) {
            return false;
        }
        self.trail.push(scent);
        true
    }

    /// `true` if a scent sits exactly at `pos` facing `heading`.
    #[inline]
    pub fn contains(&self, pos: GridPos, heading: Heading) -> bool {
        self.index.contains(&Scent::new(pos, heading))
    }

    /// `true` if `command` must be ignored for a robot at `pos` facing
    /// `heading`.  Only forward moves are ever blocked.
    #[inline]
    pub fn blocks(&self, pos: GridPos, heading: Heading, command: Command) -> bool {
        command == Command::Forward && self.contains(pos, heading)
    }

    /// Scents in the order they were left.
    pub fn as_slice(&self) -> &[Scent] {
        &self.trail
    }

    pub fn len(&self) -> usize {
        self.trail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }
}
