//! Framework de self-test executado no target.
//!
//! Os testes de host usam `#[test]`; este framework roda as mesmas
//! verificações na placa durante o init (feature `self_test`).

/// Resultado de teste
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestResult {
    Passed,
    Failed,
    Skipped,
}

impl TestResult {
    /// Converte uma condição em resultado.
    pub fn check(ok: bool) -> Self {
        if ok {
            TestResult::Passed
        } else {
            TestResult::Failed
        }
    }
}

/// Um caso de teste
pub struct TestCase {
    pub name: &'static str,
    pub func: fn() -> TestResult,
}

impl TestCase {
    pub const fn new(name: &'static str, func: fn() -> TestResult) -> Self {
        Self { name, func }
    }
}

/// Resumo de uma suite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuiteSummary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Executa suite de testes
pub fn run_test_suite(name: &str, tests: &[TestCase]) -> SuiteSummary {
    crate::kinfo!("=== Executando suite: ");
    crate::kinfo!(name);

    let mut summary = SuiteSummary::default();

    for test in tests {
        match (test.func)() {
            TestResult::Passed => {
                crate::kok!(test.name);
                summary.passed += 1;
            }
            TestResult::Failed => {
                crate::kfail!(test.name);
                summary.failed += 1;
            }
            TestResult::Skipped => {
                crate::kwarn!(test.name);
                summary.skipped += 1;
            }
        }
    }

    crate::kinfo!("Resultados: passed=", summary.passed);
    if summary.failed != 0 {
        crate::kerror!("Resultados: failed=", summary.failed);
    }
    summary
}
