//! Split, parallel-branch, and elementwise-sum wrappers

use ndarray::{ArrayD, Axis, Slice};

/// A callable transforming one tensor into another
///
/// Implemented for closures, so ad-hoc branches compose without a wrapper
/// type.
pub trait Module {
    fn forward(&self, input: &ArrayD<f32>) -> ArrayD<f32>;
}

impl<F> Module for F
where
    F: Fn(&ArrayD<f32>) -> ArrayD<f32>,
{
    fn forward(&self, input: &ArrayD<f32>) -> ArrayD<f32> {
        self(input)
    }
}

/// Chunk sizes for [`SplitTensor`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitSizes {
    /// Chunks of this size; the last chunk may be shorter
    Equal(usize),
    /// Explicit chunk lengths, which must sum to the axis length
    Sizes(Vec<usize>),
}

/// Splits a tensor into sub-tensors along one axis
#[derive(Debug, Clone)]
pub struct SplitTensor {
    sizes: SplitSizes,
    axis: usize,
}

impl SplitTensor {
    pub fn new(sizes: SplitSizes, axis: usize) -> Self {
        Self { sizes, axis }
    }

    /// Split the input along the configured axis
    pub fn forward(&self, input: &ArrayD<f32>) -> Vec<ArrayD<f32>> {
        let axis = Axis(self.axis);
        let axis_len = input.len_of(axis);

        let chunk_lens: Vec<usize> = match &self.sizes {
            SplitSizes::Equal(size) => {
                assert!(*size > 0, "chunk size must be positive");
                let mut lens = Vec::new();
                let mut remaining = axis_len;
                while remaining > 0 {
                    let len = remaining.min(*size);
                    lens.push(len);
                    remaining -= len;
                }
                lens
            }
            SplitSizes::Sizes(sizes) => {
                assert_eq!(
                    sizes.iter().sum::<usize>(),
                    axis_len,
                    "split sizes must sum to the axis length"
                );
                sizes.clone()
            }
        };

        let mut chunks = Vec::with_capacity(chunk_lens.len());
        let mut start = 0;
        for len in chunk_lens {
            let end = start + len;
            chunks.push(
                input
                    .slice_axis(axis, Slice::from(start..end))
                    .to_owned(),
            );
            start = end;
        }
        chunks
    }
}

/// Passes inputs through multiple branches in parallel
///
/// An ordered collection of [`Module`] callables. A single input is
/// broadcast to every branch; a sequence of inputs is zipped with the
/// branches one-to-one.
pub struct Parallel {
    branches: Vec<Box<dyn Module>>,
}

impl Parallel {
    pub fn new(branches: Vec<Box<dyn Module>>) -> Self {
        Self { branches }
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// Broadcast one input to every branch
    pub fn forward(&self, input: &ArrayD<f32>) -> Vec<ArrayD<f32>> {
        self.branches.iter().map(|m| m.forward(input)).collect()
    }

    /// Pair each input with its branch
    ///
    /// # Panics
    /// Panics when the number of inputs does not match the number of
    /// branches.
    pub fn forward_many(&self, inputs: &[ArrayD<f32>]) -> Vec<ArrayD<f32>> {
        assert_eq!(
            inputs.len(),
            self.branches.len(),
            "input count must match branch count"
        );
        self.branches
            .iter()
            .zip(inputs.iter())
            .map(|(m, x)| m.forward(x))
            .collect()
    }
}

/// Adds all its inputs together elementwise
///
/// Shape mismatches propagate as `ndarray` broadcast panics.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddTensors;

impl AddTensors {
    /// Sum the inputs
    ///
    /// # Panics
    /// Panics on an empty input slice.
    pub fn forward(&self, inputs: &[ArrayD<f32>]) -> ArrayD<f32> {
        assert!(!inputs.is_empty(), "need at least one tensor to sum");
        let mut sum = inputs[0].clone();
        for x in &inputs[1..] {
            sum += x;
        }
        sum
    }
}
