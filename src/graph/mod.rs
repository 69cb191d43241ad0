pub mod collaborations;

pub use collaborations::{Collaboration, CollaborationGraph, PairKey};
