//! Trait de tempo.

/// Relógio monotônico em microssegundos (derivado do SYSCTR).
///
/// O valor pode dar a volta; quem mede intervalos deve tratar isso.
pub trait Timer {
    fn usec64(&self) -> u64;
}
