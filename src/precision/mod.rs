//! Демонстрации ошибок округления в арифметике с плавающей точкой

pub mod cancellation;
pub mod derivative;
pub mod equality;
pub mod quadratic;

pub use cancellation::{two_numbers, TwoNumbers};
pub use derivative::{derivative_table, DerivativeRow};
pub use equality::{equality_test, EqualityTest};
pub use quadratic::{quadratic_roots, QuadraticRoots, RootPair};
