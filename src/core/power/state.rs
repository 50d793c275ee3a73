//! Arquivo: core/power/state.rs
//!
//! Propósito: Configuração de sleep do sistema.
//! Guarda o último modo agregado e as flags pedidos pelo colaborador de
//! gerenciamento de carga (LMM). O orquestrador só lê.
//!
//! Detalhes de Implementação:
//! - Nibble baixo do modo: profundidade (`SleepMode`).
//! - Nibble [7:4] do modo: nível de performance durante o sleep.
//! - Escrita sem validação; o orquestrador limita os valores na leitura.

use bitflags::bitflags;
use spin::Mutex;

use crate::hal::soc::perf;
use crate::hal::traits::SleepMode;

bitflags! {
    /// Flags de sleep do sistema.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct SleepFlags: u32 {
        /// O SM não entra em sleep de sistema, apenas WFI.
        const KEEP_SM_ACTIVE        = 1 << 0;
        /// OSC24M permanece ligado durante o sleep.
        const KEEP_OSC_ACTIVE       = 1 << 1;
        /// Não usar o protocolo PMIC_STBY.
        const PMIC_STANDBY_INACTIVE = 1 << 2;
        /// SYSCTR continua contando (em baixa frequência).
        const KEEP_SYSCTR_ACTIVE    = 1 << 3;
        /// FRO permanece ligado.
        const KEEP_FRO_ACTIVE       = 1 << 4;
    }
}

/// Último pedido de sleep do sistema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SleepConfiguration {
    /// Código agregado bruto (profundidade + performance).
    pub mode: u32,
    /// Flags brutas; bits desconhecidos são preservados.
    pub flags: u32,
}

impl SleepConfiguration {
    pub fn sleep_flags(&self) -> SleepFlags {
        SleepFlags::from_bits_truncate(self.flags)
    }

    /// Profundidade pedida.
    pub fn depth(&self) -> SleepMode {
        SleepMode::from_code(self.mode & 0xF)
    }

    /// Nível de performance durante o sleep, limitado a ODV.
    pub fn sleep_perf_level(&self) -> u32 {
        let level = (self.mode & 0xF0) >> 4;
        level.min(perf::LVL_ODV)
    }
}

/// Store da configuração de sleep.
///
/// Escrito a partir de handlers de mensagem (contexto de IRQ), lido pelo
/// idle loop com IRQs desabilitadas.
pub struct SleepConfigStore {
    inner: Mutex<SleepConfiguration>,
}

impl SleepConfigStore {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(SleepConfiguration { mode: 0, flags: 0 }),
        }
    }

    /// Sobrescreve modo e flags. Sem validação.
    pub fn set_sleep_mode(&self, mode: u32, flags: u32) {
        *self.inner.lock() = SleepConfiguration { mode, flags };
    }

    pub fn get(&self) -> SleepConfiguration {
        *self.inner.lock()
    }
}

impl Default for SleepConfigStore {
    fn default() -> Self {
        Self::new()
    }
}
