//! Машиночитаемые отчеты о запуске (`--json`)

use serde::Serialize;
use std::time::Duration;

/// Отчет параллельного ядра
#[derive(Debug, Clone, Serialize)]
pub struct KernelReport<T: Serialize> {
    pub program: &'static str,
    pub threads: usize,
    pub elapsed_ms: u128,
    pub result: T,
}

impl<T: Serialize> KernelReport<T> {
    pub fn new(program: &'static str, threads: usize, elapsed: Duration, result: T) -> Self {
        Self {
            program,
            threads,
            elapsed_ms: elapsed.as_millis(),
            result,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn report_serializes_elapsed_milliseconds() {
        let report = KernelReport::new("parallel_sum", 4, Duration::from_millis(1250), 50i64);
        let json: Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["program"], "parallel_sum");
        assert_eq!(json["threads"], 4);
        assert_eq!(json["elapsed_ms"], 1250);
        assert_eq!(json["result"], 50);
    }
}
