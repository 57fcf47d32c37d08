//! Общая обработка аргументов командной строки для программ

use crate::error::{NumericsError, Result};
use clap::error::ErrorKind;
use clap::Parser;

/// Во сколько раз число потоков может превышать число ядер
pub const OVERSUBSCRIPTION_LIMIT: usize = 4;

/// Разбирает аргументы; при ошибке печатает ее вместе с usage в stderr
/// и завершает процесс с кодом 1 (`--help` и `--version` с кодом 0).
pub fn parse_or_exit<T: Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    }
}

/// Парсер clap для строго положительных целых
pub fn positive_usize(value: &str) -> std::result::Result<usize, String> {
    let parsed: usize = value
        .trim()
        .parse()
        .map_err(|_| format!("`{value}` is not a non-negative integer"))?;
    if parsed == 0 {
        return Err("must be at least 1".to_string());
    }
    Ok(parsed)
}

/// Верхняя граница числа потоков на этой машине
pub fn max_threads() -> usize {
    let cores = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
    cores.saturating_mul(OVERSUBSCRIPTION_LIMIT)
}

/// Отклоняет число потоков, заметно превышающее число ядер
pub fn validate_threads(threads: usize) -> Result<usize> {
    let limit = max_threads();
    if threads == 0 || threads > limit {
        return Err(NumericsError::invalid(
            "num_threads",
            format!("{threads} threads requested, this machine supports 1..={limit}"),
        ));
    }
    Ok(threads)
}
