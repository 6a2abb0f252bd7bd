use rayon::prelude::*;

/// Controls how row-wise operations are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread.
    #[default]
    Serial,

    /// Use the global Rayon thread pool to process rows in parallel.
    ParallelRows,
}

/// Apply `f(row_index, dst_row)` to every row of a destination buffer.
///
/// `row_stride` is the number of samples per row (width * channels).
pub fn for_each_row<T, F>(dst: &mut [T], row_stride: usize, strategy: ExecutionStrategy, f: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    if row_stride == 0 {
        return;
    }
    match strategy {
        ExecutionStrategy::Serial => dst
            .chunks_exact_mut(row_stride)
            .enumerate()
            .for_each(|(r, row)| f(r, row)),
        ExecutionStrategy::ParallelRows => dst
            .par_chunks_exact_mut(row_stride)
            .enumerate()
            .for_each(|(r, row)| f(r, row)),
    }
}
