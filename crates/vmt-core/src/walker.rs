use crate::{memory::PhysicalMemory, table};
use crate::allocator;
use addr::{Frame, Level, VirtualAddress};
use tailcall::tailcall;

/// Walks the page-table tree from the root to the physical word
/// addressed by `addr`, demand-allocating and demand-restoring any
/// missing table or leaf frame along the way.
///
/// `addr` must already be validated against `VIRTUAL_MEMORY_SIZE`;
/// this function cannot fail.
pub fn translate<M: PhysicalMemory>(memory: &mut M, addr: VirtualAddress) -> usize {
    let leaf = walk(memory, Frame::ROOT, Level::root(), addr);
    table::physical_address(leaf, addr.offset())
}

/// One level of the table walk. `current` is the frame to read the
/// next edge from; it is also the frame passed to the allocator as the
/// protected ancestor, since it is the only frame that can appear
/// empty at the moment a missing edge below it is filled in.
///
/// Structured as a per-level tail call rather than a loop, matching
/// `Pml4::fetch_entry`'s shape for the same reason: each level's work
/// (read an entry, fault it in if missing, recurse one level deeper)
/// is identical regardless of depth.
#[tailcall]
fn walk<M: PhysicalMemory>(memory: &mut M, current: Frame, level: Level, addr: VirtualAddress) -> Frame {
    let index = addr.table_index(level);
    let resolved = match table::read_entry(memory, current, index) {
        0 => {
            let frame = allocator::allocate(memory, current, addr.page_index());
            if level.is_leaf() {
                memory.restore(frame, addr.page_index());
            } else {
                table::clear_table(memory, frame);
            }
            table::write_entry(memory, current, index, frame.index() as table::Word);
            frame
        }
        entry => Frame::new(entry as usize),
    };

    match level.next() {
        Some(next_level) => walk(memory, resolved, next_level, addr),
        None => resolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakePhysicalMemory;
    use config::{PAGE_SIZE, TABLES_DEPTH};

    #[test]
    fn first_translation_materializes_every_level() {
        let mut memory = FakePhysicalMemory::new();
        table::clear_table(&mut memory, Frame::ROOT);

        let addr = VirtualAddress::new(13).unwrap();
        let phys = translate(&mut memory, addr);

        // The leaf frame must differ from the root, and every table
        // level from the root down must now hold a non-zero entry.
        let leaf_frame = phys / PAGE_SIZE;
        assert_ne!(leaf_frame, Frame::ROOT.index());

        let mut current = Frame::ROOT;
        let mut level = Level::root();
        loop {
            let index = addr.table_index(level);
            let entry = table::read_entry(&mut memory, current, index);
            assert_ne!(entry, 0, "level {} edge was not materialized", level.depth());
            current = Frame::new(entry as usize);
            match level.next() {
                Some(next) => level = next,
                None => break,
            }
        }
        assert_eq!(current.index(), leaf_frame);
        let _ = TABLES_DEPTH;
    }

    #[test]
    fn revisiting_the_same_address_reuses_the_same_frame() {
        let mut memory = FakePhysicalMemory::new();
        table::clear_table(&mut memory, Frame::ROOT);

        let addr = VirtualAddress::new(13).unwrap();
        let first = translate(&mut memory, addr);
        let second = translate(&mut memory, addr);
        assert_eq!(first, second);
    }
}
