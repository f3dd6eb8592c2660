use crate::{error::AddressError, level::Level, page::PageIndex};
use config::{OFFSET_WIDTH, PAGE_SIZE, VIRTUAL_MEMORY_SIZE};

/// A validated virtual address, `< VIRTUAL_MEMORY_SIZE`.
///
/// Construction is the only place bounds are checked: once a
/// `VirtualAddress` exists, every further decomposition — offset, page
/// index, per-level table index — is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct VirtualAddress(usize);

impl VirtualAddress {
    /// Validates `addr` against `VIRTUAL_MEMORY_SIZE`.
    ///
    /// # Errors
    /// Returns [`AddressError::OutOfRange`] if `addr >=
    /// VIRTUAL_MEMORY_SIZE`.
    pub const fn new(addr: usize) -> Result<Self, AddressError> {
        if addr < VIRTUAL_MEMORY_SIZE {
            Ok(Self(addr))
        } else {
            Err(AddressError::OutOfRange)
        }
    }

    /// The intra-page offset, `addr & (PAGE_SIZE - 1)`.
    #[must_use]
    pub const fn offset(self) -> usize {
        self.0 & (PAGE_SIZE - 1)
    }

    /// The virtual page index, `addr >> OFFSET_WIDTH`.
    #[must_use]
    pub const fn page_index(self) -> PageIndex {
        PageIndex::new(self.0 >> OFFSET_WIDTH)
    }

    /// The table index to use at `level` while walking the page-table
    /// tree from the root: `(page_index >> ((TABLES_DEPTH - level) *
    /// OFFSET_WIDTH)) & (PAGE_SIZE - 1)`.
    #[must_use]
    pub const fn table_index(self, level: Level) -> usize {
        let page = self.page_index().index();
        let levels_remaining = config::TABLES_DEPTH - level.depth();
        let shift = levels_remaining * OFFSET_WIDTH as usize;
        (page >> shift) & (PAGE_SIZE - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_addresses_at_or_past_the_limit() {
        assert!(VirtualAddress::new(VIRTUAL_MEMORY_SIZE).is_err());
        assert!(VirtualAddress::new(VIRTUAL_MEMORY_SIZE - 1).is_ok());
    }

    #[test]
    fn offset_and_page_index_reconstruct_the_address() {
        let addr = VirtualAddress::new(0x4B).unwrap();
        let reconstructed = (usize::from(addr.page_index()) << OFFSET_WIDTH) | addr.offset();
        assert_eq!(reconstructed, 0x4B);
    }

    #[test]
    fn table_indices_cover_the_full_page_index() {
        let addr = VirtualAddress::new(VIRTUAL_MEMORY_SIZE - 1).unwrap();
        let mut level = Level::root();
        let mut rebuilt = 0usize;
        loop {
            rebuilt = (rebuilt << OFFSET_WIDTH) | addr.table_index(level);
            match level.next() {
                Some(next) => level = next,
                None => break,
            }
        }
        assert_eq!(rebuilt, usize::from(addr.page_index()));
    }
}
