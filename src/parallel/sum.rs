//! Параллельное суммирование массива

use super::pool::WorkerPool;
use crate::error::{NumericsError, Result};

/// Длина массива по умолчанию
pub const DEFAULT_ARRAY_LENGTH: usize = 10_000_000;
/// Значение каждого элемента по умолчанию
pub const DEFAULT_ELEMENT_VALUE: i64 = 5;

/// Параметры суммируемого массива
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SumConfig {
    pub length: usize,
    pub value: i64,
}

impl Default for SumConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_ARRAY_LENGTH,
            value: DEFAULT_ELEMENT_VALUE,
        }
    }
}

impl SumConfig {
    /// Массив из `length` одинаковых элементов
    pub fn build_array(&self) -> Vec<i64> {
        vec![self.value; self.length]
    }

    /// Точное значение суммы после `repetitions` повторов
    pub fn expected_total(&self, repetitions: usize) -> Option<i64> {
        let length = i64::try_from(self.length).ok()?;
        let repetitions = i64::try_from(repetitions).ok()?;
        repetitions.checked_mul(length)?.checked_mul(self.value)
    }
}

/// Одна параллельная редукция по массиву
pub fn parallel_sum(data: &[i64], pool: &WorkerPool) -> i64 {
    pool.map_reduce(data.len(), 0i64, |range| data[range].iter().sum::<i64>(), |a, b| a + b)
}

/// Суммирует массив `repetitions` раз, накапливая общий итог.
///
/// `on_repetition` вызывается после каждого повтора (индикатор прогресса).
pub fn repeated_sum<F>(config: &SumConfig, repetitions: usize, pool: &WorkerPool, mut on_repetition: F) -> Result<i64>
where
    F: FnMut(usize),
{
    if config.expected_total(repetitions).is_none() {
        return Err(NumericsError::invalid(
            "repetitions",
            format!(
                "{repetitions} repetitions of {} elements equal to {} overflow a 64-bit accumulator",
                config.length, config.value
            ),
        ));
    }

    let data = config.build_array();
    let mut total = 0i64;
    for repetition in 0..repetitions {
        total += parallel_sum(&data, pool);
        on_repetition(repetition + 1);
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_exact_for_identical_elements() {
        let config = SumConfig { length: 1_003, value: 5 };
        let pool = WorkerPool::new(4).unwrap();
        let total = repeated_sum(&config, 7, &pool, |_| {}).unwrap();
        assert_eq!(total, 7 * 1_003 * 5);
    }

    #[test]
    fn zero_repetitions_sum_to_zero() {
        let pool = WorkerPool::new(2).unwrap();
        let total = repeated_sum(&SumConfig { length: 10, value: 3 }, 0, &pool, |_| {}).unwrap();
        assert_eq!(total, 0);
    }

    #[test]
    fn callback_sees_every_repetition() {
        let pool = WorkerPool::new(2).unwrap();
        let mut seen = Vec::new();
        repeated_sum(&SumConfig { length: 16, value: 1 }, 3, &pool, |r| seen.push(r)).unwrap();
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn overflowing_total_is_rejected() {
        let pool = WorkerPool::new(1).unwrap();
        let config = SumConfig { length: 10, value: i64::MAX / 2 };
        assert!(repeated_sum(&config, 3, &pool, |_| {}).is_err());
    }

    #[test]
    fn default_config_matches_original_array() {
        let config = SumConfig::default();
        assert_eq!(config.expected_total(2), Some(100_000_000));
    }
}
