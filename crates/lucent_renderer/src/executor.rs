//! Execution strategies for the per-pixel fork-join dispatch.
//!
//! All strategies drive the same pixel operation over disjoint output
//! slots and block until every pixel is done, so they are observably
//! identical; only scheduling differs.

use log::debug;
use rayon::prelude::*;

/// How a frame's pixel range is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecStrategy {
    /// All pixels on the calling thread. Correctness baseline.
    Sequential,
    /// One contiguous chunk per worker thread, remainder spread one
    /// pixel per chunk from the front; joined before returning.
    Chunked,
    /// Work-stealing parallel iteration over all pixels.
    #[default]
    ParallelFor,
}

impl ExecStrategy {
    /// Run `op(index, slot)` for every pixel slot, then return.
    ///
    /// `op` must be pure per pixel: it may read shared state but only
    /// writes through the slot it is handed.
    pub(crate) fn for_each_pixel<F>(self, pixels: &mut [u32], op: F)
    where
        F: Fn(usize, &mut u32) + Send + Sync,
    {
        match self {
            ExecStrategy::Sequential => {
                for (index, slot) in pixels.iter_mut().enumerate() {
                    op(index, slot);
                }
            }
            ExecStrategy::Chunked => {
                let workers = rayon::current_num_threads().max(1);
                debug!("chunked dispatch across {workers} workers");

                let total = pixels.len();
                let chunk_size = total / workers;
                let mut remainder = total % workers;

                rayon::scope(|scope| {
                    let op = &op;
                    let mut rest = pixels;
                    let mut start = 0;

                    for _ in 0..workers {
                        let mut size = chunk_size;
                        if remainder > 0 {
                            size += 1;
                            remainder -= 1;
                        }
                        if size == 0 {
                            break;
                        }

                        let (chunk, tail) = std::mem::take(&mut rest).split_at_mut(size);
                        rest = tail;
                        let base = start;
                        start += size;

                        scope.spawn(move |_| {
                            for (offset, slot) in chunk.iter_mut().enumerate() {
                                op(base + offset, slot);
                            }
                        });
                    }
                });
            }
            ExecStrategy::ParallelFor => {
                pixels
                    .par_iter_mut()
                    .enumerate()
                    .for_each(|(index, slot)| op(index, slot));
            }
        }
    }
}
