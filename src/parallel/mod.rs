//! Параллельные численные ядра
//!
//! Все ядра построены на [`WorkerPool`]: статическое разбиение итераций,
//! одна задача на поток, локальные частичные суммы и одна редукция в конце.

pub mod pool;
pub mod quadrature;
pub mod sum;

pub use pool::{partition, WorkerPool};
pub use quadrature::{analytic_sin_of_sum, rectangle_rule_multi, sin_of_sum, QuadratureConfig};
pub use sum::{parallel_sum, repeated_sum, SumConfig};
