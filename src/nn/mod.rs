//! Composition wrappers over tensor-to-tensor callables
//!
//! Generic plumbing for wiring model graphs together: splitting a tensor
//! into chunks, fanning an input out across parallel branches, and summing
//! branch outputs back into one tensor. Branches are plain [`Module`]
//! callables held in an ordered collection, so anything from a closure to a
//! full model slots in.

mod compose;

#[cfg(test)]
mod tests;

pub use compose::{AddTensors, Module, Parallel, SplitSizes, SplitTensor};
