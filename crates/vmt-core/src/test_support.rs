//! A trivial stand-in for the external "physical memory" collaborator,
//! used only by this crate's own unit tests to exercise the translator
//! and allocator end to end.

use crate::memory::PhysicalMemory;
use crate::table::Word;
use addr::{Frame, PageIndex};
use config::{PAGE_SIZE, PHYSICAL_MEMORY_SIZE};
use std::collections::HashMap;

pub struct FakePhysicalMemory {
    ram: Vec<Word>,
    backing_store: HashMap<usize, Vec<Word>>,
}

impl FakePhysicalMemory {
    pub fn new() -> Self {
        Self {
            ram: vec![0; PHYSICAL_MEMORY_SIZE],
            backing_store: HashMap::new(),
        }
    }
}

impl PhysicalMemory for FakePhysicalMemory {
    fn read(&mut self, addr: usize) -> Word {
        self.ram[addr]
    }

    fn write(&mut self, addr: usize, word: Word) {
        self.ram[addr] = word;
    }

    fn restore(&mut self, frame: Frame, page: PageIndex) {
        let page_contents = self
            .backing_store
            .get(&page.index())
            .cloned()
            .unwrap_or_else(|| vec![0; PAGE_SIZE]);
        let base = frame.index() * PAGE_SIZE;
        self.ram[base..base + PAGE_SIZE].copy_from_slice(&page_contents);
    }

    fn evict(&mut self, frame: Frame, page: PageIndex) {
        let base = frame.index() * PAGE_SIZE;
        self.backing_store
            .insert(page.index(), self.ram[base..base + PAGE_SIZE].to_vec());
    }
}
