//! Arquivo: core/power/suspend.rs
//!
//! Propósito: Sequência de sleep do sistema.
//! O SM é o último core acordado: ele desliga o que ninguém mais usa,
//! executa WFI e reconstrói o sistema no wake.
//!
//! Detalhes de Implementação:
//! - Roda com interrupções desabilitadas (o idle loop garante). WFI
//!   retorna com IRQ pendente mesmo com PRIMASK setado.
//! - Máscaras de wake dos cores secundários ficam em bracket durante toda
//!   a sequência e são restauradas exatamente uma vez no fim.
//! - Tudo que foi desligado é lembrado em variáveis locais e religado na
//!   ordem inversa. Falhas no resume não interrompem os passos seguintes;
//!   o primeiro erro é o retornado.

// Suspend do sistema

use crate::core::debug::{elapsed_usec, SleepRecord};
use crate::core::power::clock::{
    clock_source_bypass, park_sleep_roots, syspll_power_down, syspll_power_up,
};
use crate::core::power::depend::{open_mask_bracket, MaskBracket, PowerDependency};
use crate::core::power::state::{SleepConfiguration, SleepFlags};
use crate::core::system::SystemManager;
use crate::hal::soc::{cpu, mix, perf, pll, PLL_VCO, NUM_MEM_SLICES, WAKE_MASK_WORDS};
use crate::hal::traits::{HandshakeLine, Platform, SleepMode};
use crate::sys::{SmResult, StatusChain};

/// O que foi feito com o WAKEUPMIX na entrada.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WakeupAction {
    Untouched,
    PoweredOff,
    /// Performance parqueada; guarda o nível anterior.
    Parked(u32),
}

impl<P: Platform> SystemManager<P> {
    /// Executa um ciclo completo de sleep do sistema.
    ///
    /// Se o GPC não confirmar que o sistema pode atingir SUSPEND depois de
    /// mascarar os cores secundários, só o SM dorme (WFI em RUN).
    pub fn system_sleep(&mut self, mode: SleepMode) -> SmResult<()> {
        let cfg = self.config.get();
        let entry_start = self.platform.usec64();
        let mut exit_start = entry_start;

        self.snapshot_power_state(&cfg);

        let MaskBracket {
            snapshot,
            system_mask,
            dependency,
        } = open_mask_bracket(&mut self.platform);

        let mut status = Ok(());
        match self.platform.system_sleep_status() {
            Some(SleepMode::Suspend) => {
                crate::kdebug!("(Sleep) SUSPEND, modo=", mode.code());
                let (result, resumed_at) =
                    self.suspend_sequence(mode, &cfg, &system_mask, dependency, entry_start);
                status = result;
                exit_start = resumed_at;
            }
            Some(other) => {
                crate::ktrace!("(Sleep) sistema ocupado, apenas WFI: ", other.code());
                self.idle_halt();
            }
            None => crate::kwarn!("(Sleep) status de sleep indisponível"),
        }

        // Não dormiu de fato: toda a duração conta como entrada
        if self.syslog.sleep_record.wake_source == 0 {
            exit_start = self.platform.usec64();
            self.syslog.sleep_record.sleep_entry_usec = elapsed_usec(entry_start, exit_start);
        }

        snapshot.restore(&mut self.platform);

        let now = self.platform.usec64();
        self.syslog.sleep_record.sleep_exit_usec = elapsed_usec(exit_start, now);

        if let Err(e) = status {
            crate::kerror!("(Sleep) falha no resume: ", e.as_i32());
        }
        status
    }

    /// Captura o estado de energia pré-sleep no registro de telemetria.
    fn snapshot_power_state(&mut self, cfg: &SleepConfiguration) {
        let p = &self.platform;
        let record = &mut self.syslog.sleep_record;

        record.wake_source = 0;
        record.sleep_mode = cfg.mode;
        record.sleep_flags = cfg.flags;

        record.mix_power = (0..mix::NUM)
            .filter(|&m| p.mix_is_on(m))
            .fold(0, |acc, m| acc | (1u32 << m));
        record.mem_low_power = (0..NUM_MEM_SLICES)
            .filter(|&m| p.mem_low_power(m))
            .fold(0, |acc, m| acc | (1u32 << m));
        record.pll_enabled = (0..pll::NUM)
            .filter(|&i| p.source_enabled(PLL_VCO[i]))
            .fold(0, |acc, i| acc | (1u32 << i));
    }

    /// Entrada em SUSPEND, WFI e resume.
    ///
    /// Retorna o status do resume e o instante em que o SM acordou.
    fn suspend_sequence(
        &mut self,
        mode: SleepMode,
        cfg: &SleepConfiguration,
        system_mask: &[u32; WAKE_MASK_WORDS],
        dependency: PowerDependency,
        entry_start: u64,
    ) -> (SmResult<()>, u64) {
        let p = &mut self.platform;
        let record: &mut SleepRecord = &mut self.syslog.sleep_record;
        let flags = cfg.sleep_flags();
        crate::kdebug!("(Sleep) profundidade pedida: ", cfg.depth().code());

        // ---------------------------------------------------------------------
        // Entrada
        // ---------------------------------------------------------------------

        p.sleep_prepare(cfg.mode, cfg.flags);

        if p.set_temp_sensor_enabled(false).is_err() {
            crate::kwarn!("(Sleep) sensor de temperatura não desligou");
        }

        record.bump_sleep_count();

        // DRAM em retenção e DDRMIX desligado
        let ddr_retained = match p.ddr_retention_enter() {
            Ok(()) => {
                match p.set_mix_power(mix::DDR, false) {
                    Ok(()) => record.clear_mix(mix::DDR),
                    Err(e) => crate::kwarn!("(Sleep) DDRMIX não desligou: ", e.as_i32()),
                }
                true
            }
            Err(e) => {
                crate::kwarn!("(Sleep) DRAM recusou retenção: ", e.as_i32());
                false
            }
        };

        let noc_off = dependency.noc_may_power_off(mode)
            && match p.set_mix_power(mix::NOC, false) {
                Ok(()) => {
                    record.clear_mix(mix::NOC);
                    true
                }
                Err(e) => {
                    crate::kwarn!("(Sleep) NOC não desligou: ", e.as_i32());
                    false
                }
            };

        // Com LP compute ativo o WAKEUPMIX precisa ficar ligado; apenas
        // parqueia a performance
        let lp_compute = p.lp_compute_list() != 0;
        let mut wakeup = WakeupAction::Untouched;
        if dependency.wakeup_may_power_off(mode) && !p.debug_enabled() {
            if lp_compute {
                let parked = p.perf_level(perf::WAKEUP).and_then(|level| {
                    p.set_perf_level(perf::WAKEUP, perf::LVL_PRK)?;
                    Ok(level)
                });
                match parked {
                    Ok(level) => wakeup = WakeupAction::Parked(level),
                    Err(e) => crate::kwarn!("(Sleep) WAKEUP não parqueou: ", e.as_i32()),
                }
            } else {
                match p.set_mix_power(mix::WAKEUP, false) {
                    Ok(()) => {
                        record.clear_mix(mix::WAKEUP);
                        wakeup = WakeupAction::PoweredOff;
                    }
                    Err(e) => crate::kwarn!("(Sleep) WAKEUPMIX não desligou: ", e.as_i32()),
                }
            }
        }
        crate::ktrace!("(Sleep) NOC desligado: ", noc_off as u32);

        let mut handshakes = [0u32; HandshakeLine::ALL.len()];
        for (saved, &line) in handshakes.iter_mut().zip(HandshakeLine::ALL.iter()) {
            *saved = p.handshake(line);
            p.set_handshake(line, 0);
        }

        // NVIC do SM: só as IRQs de wake do sistema ficam habilitadas e
        // cada uma vira fonte de wake do GPC
        let mut nvic_saved = [0u32; WAKE_MASK_WORDS];
        for (word, saved) in nvic_saved.iter_mut().enumerate() {
            *saved = p.nvic_enabled(word);
            let mut mask = !*saved;
            p.nvic_clear_pending(word, mask);
            mask &= system_mask[word];
            p.set_irq_wake(cpu::M33P, word, mask);
            p.nvic_set_enabled(word, !mask);
        }
        p.set_wake_mux(cpu::M33P, false);

        p.set_sleep_mode(cpu::M33P, mode);

        let perf_sleep = cfg.sleep_perf_level();
        let active_sleep = perf_sleep != perf::LVL_PRK
            || flags.contains(SleepFlags::KEEP_OSC_ACTIVE)
            || lp_compute;
        crate::kdebug!("(Sleep) active sleep: ", active_sleep as u32);

        p.set_osc24m_gating(!active_sleep);
        p.set_pmic_standby(!flags.contains(SleepFlags::PMIC_STANDBY_INACTIVE));
        p.set_efuse_power_down(true);
        clock_source_bypass(p, false, true);

        let parked_roots = if active_sleep {
            if let Err(e) = p.perf_system_sleep(perf_sleep) {
                crate::kwarn!("(Sleep) perf de sleep recusada: ", e.as_i32());
            }
            None
        } else {
            Some(park_sleep_roots(p))
        };

        let syspll_off = !active_sleep;
        if syspll_off {
            syspll_power_down(p);
            record.clear_pll(pll::SYS1);
        }

        if !flags.contains(SleepFlags::KEEP_FRO_ACTIVE) && !active_sleep {
            p.set_fro_enabled(false);
        }

        p.sleep_enter(cfg.mode, cfg.flags);
        p.process_lpis(cpu::M33P, mode);

        record.sleep_entry_usec = elapsed_usec(entry_start, p.usec64());

        let sysctr_low = flags.contains(SleepFlags::KEEP_SYSCTR_ACTIVE);
        if sysctr_low {
            p.set_sysctr_low_freq(true);
        }

        p.wait_for_interrupt();

        // ---------------------------------------------------------------------
        // Resume
        // ---------------------------------------------------------------------

        p.set_fro_enabled(true);
        if sysctr_low {
            p.set_sysctr_low_freq(false);
        }

        let resumed_at = p.usec64();
        record.wake_source = p.pending_vector();

        p.process_lpis(cpu::M33P, SleepMode::Run);
        p.sleep_exit(cfg.mode, cfg.flags);

        if syspll_off {
            syspll_power_up(p);
        }

        let mut chain = StatusChain::new();

        match parked_roots {
            Some(roots) => roots.restore(p),
            None => {
                chain.record(p.perf_system_wake(perf_sleep));
            }
        }

        clock_source_bypass(p, true, true);
        p.set_efuse_power_down(false);

        for (&saved, &line) in handshakes.iter().zip(HandshakeLine::ALL.iter()) {
            p.set_handshake(line, saved);
        }

        match wakeup {
            WakeupAction::PoweredOff => {
                chain.record(p.set_mix_power(mix::WAKEUP, true));
            }
            WakeupAction::Parked(level) => {
                chain.record(p.set_perf_level(perf::WAKEUP, level));
            }
            WakeupAction::Untouched => {}
        }

        if noc_off {
            chain.record(p.set_mix_power(mix::NOC, true));
        }

        if ddr_retained {
            chain.record(p.set_mix_power(mix::DDR, true));
            chain.record(p.ddr_retention_exit());
        }

        for (word, &saved) in nvic_saved.iter().enumerate() {
            p.nvic_set_enabled(word, saved);
        }

        if p.set_temp_sensor_enabled(true).is_err() {
            crate::kwarn!("(Sleep) sensor de temperatura não religou");
        }

        p.sleep_unprepare(cfg.mode, cfg.flags);

        crate::ktrace!("(Sleep) wake source: ", record.wake_source);
        (chain.finish(), resumed_at)
    }
}
