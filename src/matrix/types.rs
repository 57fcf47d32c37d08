//! Типы матриц и связанные структуры

/// Способ заполнения матриц-операндов
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatrixType {
    /// A[i][j] = i + j, B[i][j] = i - j
    #[default]
    Sample,
    /// Матрицы заполненные 1 и 2
    OnesAndTwos,
    /// Случайные целые из -10..=10, воспроизводимые по зерну
    Random { seed: u64 },
}

/// Результат поэлементного сравнения двух матриц
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixComparison {
    /// Количество различающихся элементов
    pub mismatches: usize,
    /// Максимальная разница по модулю
    pub max_abs_diff: u64,
}

impl MatrixComparison {
    pub fn matches(&self) -> bool {
        self.mismatches == 0
    }
}
