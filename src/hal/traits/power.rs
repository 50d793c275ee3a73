//! Trait de power mixes, memórias e performance.

use crate::sys::SmResult;

/// Controle de energia do SoC.
pub trait PowerControl {
    /// Switch de energia do mix ligado.
    fn mix_is_on(&self, mix: usize) -> bool;

    /// Memória da fatia em modo low-power.
    fn mem_low_power(&self, mem: usize) -> bool;

    /// Liga/desliga um mix (sequência completa de isolamento/switch).
    fn set_mix_power(&mut self, mix: usize, on: bool) -> SmResult<()>;

    /// Coloca a DRAM em retenção (self-refresh).
    fn ddr_retention_enter(&mut self) -> SmResult<()>;

    /// Tira a DRAM de retenção.
    fn ddr_retention_exit(&mut self) -> SmResult<()>;

    fn perf_level(&self, domain: usize) -> SmResult<u32>;

    fn set_perf_level(&mut self, domain: usize, level: u32) -> SmResult<()>;

    /// Move o sistema para o nível de performance de sleep.
    fn perf_system_sleep(&mut self, level: u32) -> SmResult<()>;

    /// Volta do nível de performance de sleep.
    fn perf_system_wake(&mut self, level: u32) -> SmResult<()>;

    /// Liga/desliga o sensor de temperatura analógico.
    fn set_temp_sensor_enabled(&mut self, enabled: bool) -> SmResult<()>;
}
