//! Tests for composition wrappers

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::ArrayD;

    use crate::nn::{AddTensors, Module, Parallel, SplitSizes, SplitTensor};

    fn tensor(shape: Vec<usize>, values: Vec<f32>) -> ArrayD<f32> {
        ArrayD::from_shape_vec(shape, values).unwrap()
    }

    #[test]
    fn test_split_equal_chunks() {
        let input = tensor(vec![5], vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let split = SplitTensor::new(SplitSizes::Equal(2), 0);
        let chunks = split.forward(&input);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].shape(), &[2]);
        assert_eq!(chunks[1].shape(), &[2]);
        // Last chunk is shorter
        assert_eq!(chunks[2].shape(), &[1]);
        assert_relative_eq!(chunks[2][[0]], 5.0);
    }

    #[test]
    fn test_split_explicit_sizes() {
        let input = tensor(vec![6], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let split = SplitTensor::new(SplitSizes::Sizes(vec![1, 2, 3]), 0);
        let chunks = split.forward(&input);

        assert_eq!(chunks.len(), 3);
        assert_relative_eq!(chunks[0][[0]], 1.0);
        assert_relative_eq!(chunks[1][[1]], 3.0);
        assert_relative_eq!(chunks[2][[2]], 6.0);
    }

    #[test]
    fn test_split_along_second_axis() {
        let input = tensor(vec![2, 4], (1..=8).map(|v| v as f32).collect());
        let split = SplitTensor::new(SplitSizes::Equal(2), 1);
        let chunks = split.forward(&input);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].shape(), &[2, 2]);
        assert_relative_eq!(chunks[0][[1, 0]], 5.0);
        assert_relative_eq!(chunks[1][[0, 0]], 3.0);
    }

    #[test]
    #[should_panic(expected = "sum to the axis length")]
    fn test_split_sizes_must_cover_axis() {
        let input = tensor(vec![4], vec![0.0; 4]);
        SplitTensor::new(SplitSizes::Sizes(vec![1, 2]), 0).forward(&input);
    }

    #[test]
    fn test_parallel_broadcasts_single_input() {
        let double = |x: &ArrayD<f32>| x.mapv(|v| v * 2.0);
        let negate = |x: &ArrayD<f32>| x.mapv(|v| -v);
        let parallel = Parallel::new(vec![Box::new(double), Box::new(negate)]);

        let input = tensor(vec![2], vec![1.0, 2.0]);
        let outputs = parallel.forward(&input);

        assert_eq!(outputs.len(), 2);
        assert_relative_eq!(outputs[0][[1]], 4.0);
        assert_relative_eq!(outputs[1][[0]], -1.0);
    }

    #[test]
    fn test_parallel_zips_sequence_input() {
        let identity = |x: &ArrayD<f32>| x.clone();
        let double = |x: &ArrayD<f32>| x.mapv(|v| v * 2.0);
        let parallel = Parallel::new(vec![Box::new(identity), Box::new(double)]);

        let inputs = vec![tensor(vec![1], vec![1.0]), tensor(vec![1], vec![10.0])];
        let outputs = parallel.forward_many(&inputs);

        assert_relative_eq!(outputs[0][[0]], 1.0);
        assert_relative_eq!(outputs[1][[0]], 20.0);
    }

    #[test]
    #[should_panic(expected = "input count must match branch count")]
    fn test_parallel_rejects_mismatched_sequence() {
        let identity = |x: &ArrayD<f32>| x.clone();
        let parallel = Parallel::new(vec![Box::new(identity)]);
        parallel.forward_many(&[
            tensor(vec![1], vec![1.0]),
            tensor(vec![1], vec![2.0]),
        ]);
    }

    #[test]
    fn test_add_tensors() {
        let inputs = vec![
            tensor(vec![2], vec![1.0, 2.0]),
            tensor(vec![2], vec![10.0, 20.0]),
            tensor(vec![2], vec![100.0, 200.0]),
        ];
        let sum = AddTensors.forward(&inputs);

        assert_relative_eq!(sum[[0]], 111.0);
        assert_relative_eq!(sum[[1]], 222.0);
    }

    #[test]
    #[should_panic(expected = "at least one tensor")]
    fn test_add_tensors_rejects_empty_input() {
        AddTensors.forward(&[]);
    }

    #[test]
    fn test_split_then_sum_restores_total() {
        // split + sum across chunks preserves the elementwise running total
        let input = tensor(vec![4], vec![1.0, 2.0, 3.0, 4.0]);
        let chunks = SplitTensor::new(SplitSizes::Equal(2), 0).forward(&input);
        let sum = AddTensors.forward(&chunks);

        assert_relative_eq!(sum[[0]], 4.0);
        assert_relative_eq!(sum[[1]], 6.0);
    }

    #[test]
    fn test_module_impl_for_closures() {
        let shift = |x: &ArrayD<f32>| x.mapv(|v| v + 1.0);
        let out = shift.forward(&tensor(vec![1], vec![41.0]));
        assert_relative_eq!(out[[0]], 42.0);
    }
}
