// file: src/filer/mod.rs
// description: file helper module exports
// reference: internal module structure

pub mod ops;
pub mod paths;

pub use ops::{Filer, STALE_AFTER};
pub use paths::{PathRegistry, named_paths};
