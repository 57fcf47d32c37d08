//! Пул рабочих потоков со статическим разбиением итераций
//!
//! Замена директивы `parallel for`: пространство итераций делится на
//! непрерывные куски, на каждый кусок запускается одна задача, после
//! чего все задачи дожидаются друг друга (барьер в конце `scope`).

use crate::error::{NumericsError, Result};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::ops::Range;

/// Делит `0..len` на не более чем `parts` непрерывных непустых диапазонов.
///
/// Размеры диапазонов отличаются не больше чем на единицу, остаток
/// достается первым диапазонам.
pub fn partition(len: usize, parts: usize) -> Vec<Range<usize>> {
    let parts = parts.max(1).min(len);
    if parts == 0 {
        return Vec::new();
    }

    let base = len / parts;
    let remainder = len % parts;
    let mut ranges = Vec::with_capacity(parts);
    let mut start = 0;
    for part in 0..parts {
        let size = base + usize::from(part < remainder);
        ranges.push(start..start + size);
        start += size;
    }
    ranges
}

/// Пул фиксированного размера
pub struct WorkerPool {
    pool: ThreadPool,
    workers: usize,
}

impl WorkerPool {
    /// Создает пул ровно из `workers` потоков
    pub fn new(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(NumericsError::invalid("workers", "at least one worker thread is required"));
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("worker-{index}"))
            .build()
            .map_err(|err| NumericsError::invalid("workers", err.to_string()))?;

        Ok(Self { pool, workers })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Разбиение `0..len` для этого пула
    pub fn ranges(&self, len: usize) -> Vec<Range<usize>> {
        partition(len, self.workers)
    }

    /// Параллельно обрабатывает непересекающиеся куски `data`.
    ///
    /// `f(offset, chunk)` получает глобальный индекс первого элемента куска.
    pub fn for_each_chunk_mut<T, F>(&self, data: &mut [T], f: F)
    where
        T: Send,
        F: Fn(usize, &mut [T]) + Sync,
    {
        let ranges = self.ranges(data.len());
        let f = &f;
        self.pool.scope(|scope| {
            let mut rest = data;
            for range in ranges {
                let (chunk, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
                rest = tail;
                scope.spawn(move |_| f(range.start, chunk));
            }
        });
    }

    /// Параллельная редукция по `0..len`.
    ///
    /// Каждый поток считает локальную частичную сумму своего диапазона,
    /// частичные результаты сливаются один раз после барьера, в порядке
    /// диапазонов. При фиксированном числе потоков результат воспроизводим
    /// побитово, в том числе для `f64`.
    pub fn map_reduce<R, M, Op>(&self, len: usize, identity: R, map: M, reduce: Op) -> R
    where
        R: Send + Clone,
        M: Fn(Range<usize>) -> R + Sync,
        Op: Fn(R, R) -> R,
    {
        let ranges = self.ranges(len);
        let mut partials = vec![identity.clone(); ranges.len()];
        let map = &map;
        self.pool.scope(|scope| {
            for (slot, range) in partials.iter_mut().zip(ranges) {
                scope.spawn(move |_| *slot = map(range));
            }
        });

        partials.into_iter().fold(identity, reduce)
    }
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool").field("workers", &self.workers).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_covers_range_in_order() {
        let ranges = partition(10, 3);
        assert_eq!(ranges, vec![0..4, 4..7, 7..10]);
    }

    #[test]
    fn partition_never_yields_empty_ranges() {
        assert_eq!(partition(2, 8), vec![0..1, 1..2]);
        assert!(partition(0, 4).is_empty());
    }

    #[test]
    fn pool_reports_its_size() {
        let pool = WorkerPool::new(3).unwrap();
        assert_eq!(pool.workers(), 3);
        assert_eq!(pool.ranges(7).len(), 3);
    }

    #[test]
    fn zero_workers_is_rejected() {
        assert!(matches!(
            WorkerPool::new(0),
            Err(NumericsError::InvalidArgument { name: "workers", .. })
        ));
    }

    #[test]
    fn chunks_are_written_disjointly() {
        let pool = WorkerPool::new(3).unwrap();
        let mut data = vec![0usize; 11];
        pool.for_each_chunk_mut(&mut data, |offset, chunk| {
            for (i, slot) in chunk.iter_mut().enumerate() {
                *slot = offset + i;
            }
        });
        assert_eq!(data, (0..11).collect::<Vec<_>>());
    }

    #[test]
    fn single_worker_reduction_matches_serial_fold() {
        let values: Vec<f64> = (1..=1000).map(|i| 1.0 / i as f64).collect();
        let pool = WorkerPool::new(1).unwrap();
        let parallel = pool.map_reduce(values.len(), 0.0, |r| values[r].iter().sum::<f64>(), |a, b| a + b);
        let serial: f64 = values.iter().sum();
        assert_eq!(parallel, serial);
    }

    #[test]
    fn reduction_over_empty_range_is_identity() {
        let pool = WorkerPool::new(4).unwrap();
        let total = pool.map_reduce(0, 7i64, |_| 100, |a, b| a + b);
        assert_eq!(total, 7);
    }
}
