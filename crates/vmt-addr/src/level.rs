use config::TABLES_DEPTH;

/// A level in the page-table hierarchy, counting from `1` at the
/// root's children down to `TABLES_DEPTH` at the leaves.
///
/// `haoud-silicium`'s x86_64 paging code represents this as a fixed
/// four-variant enum (`Pml4`, `Pdpt`, `Pd`, `Pt`) because x86_64 always
/// has exactly four levels. The depth here is a deployment constant
/// instead of an architectural one, so the level is a bounded integer
/// rather than an enum, but it plays the same role: `next()` walks
/// toward the leaves and returns `None` past the last level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(usize);

impl Level {
    /// The first level below the root, `1`.
    #[must_use]
    pub const fn root() -> Self {
        Self(1)
    }

    /// This level's depth, in `1..=TABLES_DEPTH`.
    #[must_use]
    pub const fn depth(self) -> usize {
        self.0
    }

    /// Whether this is the leaf level, i.e. frames at this level hold
    /// page data rather than child frame indices.
    #[must_use]
    pub const fn is_leaf(self) -> bool {
        self.0 == TABLES_DEPTH
    }

    /// The next level toward the leaves, or `None` if this is already
    /// the leaf level.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        if self.0 < TABLES_DEPTH {
            Some(Self(self.0 + 1))
        } else {
            None
        }
    }
}
