//! Payment proof storage

mod disk;

pub use disk::{DiskProofStore, ProofStore};
