use config::NUM_FRAMES;

/// A physical frame index in `0..NUM_FRAMES`.
///
/// A frame is a slot of `PAGE_SIZE` words in physical memory; whether
/// it currently holds a page table or a leaf data page is positional,
/// not recorded on the `Frame` itself.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Frame(usize);

impl Frame {
    /// The root page table frame. Never reclaimed, evicted, or
    /// returned by the allocator.
    pub const ROOT: Self = Self(0);

    /// Creates a new frame index.
    ///
    /// # Panics
    /// Panics if `index >= NUM_FRAMES`.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        match Self::try_new(index) {
            Some(frame) => frame,
            None => panic!("frame index is out of range"),
        }
    }

    /// Creates a new frame index if it fits within `NUM_FRAMES`.
    #[must_use]
    pub const fn try_new(index: usize) -> Option<Self> {
        if index < NUM_FRAMES {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Returns the raw frame index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Whether this is the root frame.
    #[must_use]
    pub const fn is_root(self) -> bool {
        self.0 == 0
    }
}

impl From<Frame> for usize {
    fn from(frame: Frame) -> usize {
        frame.0
    }
}
