#![cfg_attr(not(test), no_std)]

//! Address types for the virtual memory translator: physical frame
//! indices, virtual addresses, and the virtual page index space they
//! decompose into, plus the address-codec arithmetic that splits a
//! virtual address into a page index and per-level table indices.

pub mod error;
pub mod frame;
pub mod level;
pub mod page;
pub mod virt;

pub use error::AddressError;
pub use frame::Frame;
pub use level::Level;
pub use page::PageIndex;
pub use virt::VirtualAddress;
