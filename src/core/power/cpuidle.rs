//! Arquivo: core/power/cpuidle.rs
//!
//! Propósito: Idle do System Manager.
//! Chamado pelo loop principal quando não há mensagens a tratar. Decide
//! entre sleep de sistema e um simples WFI do próprio SM.
//!
//! Detalhes de Implementação:
//! - Interrupções ficam desabilitadas durante toda a decisão e o sleep;
//!   são reabilitadas na saída, o que dispara o handler da IRQ de wake.
//! - Com KEEP_SM_ACTIVE o SM nunca conduz sleep de sistema.

use crate::core::power::state::SleepFlags;
use crate::core::system::SystemManager;
use crate::hal::soc::cpu;
use crate::hal::traits::{Platform, SleepMode};
use crate::sys::SmResult;

impl<P: Platform> SystemManager<P> {
    /// Um passo do idle loop.
    pub fn system_idle(&mut self) -> SmResult<()> {
        self.platform.disable_interrupts();

        let cfg = self.config.get();
        let status = if cfg.sleep_flags().contains(SleepFlags::KEEP_SM_ACTIVE) {
            self.idle_halt();
            Ok(())
        } else {
            match self.platform.system_sleep_status() {
                Some(SleepMode::Suspend) => self.system_sleep(SleepMode::Suspend),
                Some(_) => {
                    self.idle_halt();
                    Ok(())
                }
                None => {
                    crate::kwarn!("(Idle) status de sleep indisponível");
                    Ok(())
                }
            }
        };

        self.platform.enable_interrupts();
        status
    }

    /// WFI do SM sem sleep de sistema.
    pub(crate) fn idle_halt(&mut self) {
        self.platform.set_sleep_mode(cpu::M33P, SleepMode::Run);
        self.platform.wait_for_interrupt();
    }
}
