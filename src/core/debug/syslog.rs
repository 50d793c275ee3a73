//! Arquivo: core/debug/syslog.rs
//!
//! Propósito: Registro de telemetria da última entrada em sleep.
//! Preenchido pelo orquestrador, lido pelo diagnóstico (monitor).
//!
//! Detalhes de Implementação:
//! - Campos de snapshot são resetados no início de cada invocação.
//! - `sleep_count` volta a zero em vez de dar a volta.
//! - Latências nunca são negativas: se o relógio deu a volta, viram zero.

use super::reason::reset_reason_name;
use crate::hal::traits::ShutdownRecord;

/// Registro de um ciclo de sleep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SleepRecord {
    /// Vetor pendente no wake, 0 se o sistema não dormiu.
    pub wake_source: u32,
    pub sleep_mode: u32,
    pub sleep_flags: u32,
    /// Bit N = mix N ligado.
    pub mix_power: u32,
    /// Bit N = fatia de memória N em low-power.
    pub mem_low_power: u32,
    /// Bit N = PLL N habilitado.
    pub pll_enabled: u32,
    pub sleep_count: u32,
    pub sleep_entry_usec: u32,
    pub sleep_exit_usec: u32,
}

impl SleepRecord {
    pub const fn new() -> Self {
        Self {
            wake_source: 0,
            sleep_mode: 0,
            sleep_flags: 0,
            mix_power: 0,
            mem_low_power: 0,
            pll_enabled: 0,
            sleep_count: 0,
            sleep_entry_usec: 0,
            sleep_exit_usec: 0,
        }
    }

    /// Incrementa o contador de sleeps; no limite volta a zero.
    pub fn bump_sleep_count(&mut self) {
        if self.sleep_count < u32::MAX {
            self.sleep_count += 1;
        } else {
            self.sleep_count = 0;
        }
    }

    /// Marca um mix como desligado pelo orquestrador.
    pub fn clear_mix(&mut self, mix: usize) {
        self.mix_power &= !(1u32 << mix);
    }

    pub fn clear_pll(&mut self, pll: usize) {
        self.pll_enabled &= !(1u32 << pll);
    }
}

/// Intervalo em microssegundos; zero se `now` é anterior a `start`.
pub fn elapsed_usec(start: u64, now: u64) -> u32 {
    match now.checked_sub(start) {
        Some(delta) => delta as u32,
        None => 0,
    }
}

/// Log do sistema mantido pelo System Manager.
#[derive(Debug, Default)]
pub struct SysLog {
    pub sleep_record: SleepRecord,
    /// Motivo do shutdown anterior, fixado no init.
    pub shutdown: Option<ShutdownRecord>,
}

impl SysLog {
    pub const fn new() -> Self {
        Self {
            sleep_record: SleepRecord::new(),
            shutdown: None,
        }
    }

    /// Imprime o registro de sleep e o motivo do último shutdown.
    pub fn dump(&self) {
        let r = &self.sleep_record;
        crate::kinfo!("--- Registro de Sleep ---");
        crate::kinfo!("Wake source:    ", r.wake_source);
        crate::kinfo!("Modo:           ", r.sleep_mode);
        crate::kinfo!("Flags:          ", r.sleep_flags);
        crate::kinfo!("Mix power:      ", r.mix_power);
        crate::kinfo!("Mem low-power:  ", r.mem_low_power);
        crate::kinfo!("PLL enable:     ", r.pll_enabled);
        crate::kinfo!("Contagem:       ", r.sleep_count);
        crate::kinfo!("Entrada (us):   ", r.sleep_entry_usec);
        crate::kinfo!("Saída (us):     ", r.sleep_exit_usec);
        match self.shutdown {
            Some(rec) => {
                crate::kinfo!("Shutdown:       ", rec.reason);
                if let Ok(name) = reset_reason_name(rec.reason) {
                    crate::kinfo!(name);
                }
                if let Some(id) = rec.err_id {
                    crate::kinfo!("Erro:           ", id);
                }
            }
            None => crate::kinfo!("Shutdown:       nenhum"),
        }
        crate::kinfo!("-------------------------");
    }
}
