//! Plataforma simulada para testes de host.
//!
//! Guarda o estado de cada bloco em memória, registra a ordem das
//! operações relevantes e tira uma foto do estado a cada WFI.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::vec::Vec;

use super::mmio::NUM_GPR;
use super::soc::{clk_root, clk_src, cpu, mix, pll, WAKE_MASK_WORDS};
use super::traits::*;
use crate::core::debug::reason::REASON_POR;
use crate::sys::{SmError, SmResult};

/// Operações registradas em ordem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Event {
    BoardPrepare,
    BoardEnter,
    BoardExit,
    BoardUnprepare,
    TempSensor(bool),
    MixPower(usize, bool),
    DdrRetention(bool),
    PerfLevel(usize, u32),
    PerfSystemSleep(u32),
    PerfSystemWake(u32),
    SleepMode(usize, SleepMode),
    Lpis(usize, SleepMode),
    Source(usize, bool),
    Fro(bool),
    SysctrLow(bool),
    Interrupts(bool),
    Wfi,
    WarmReset,
    ClearResetReason(u32),
    SaveShutdown(ShutdownRecord),
}

/// Estado do hardware simulado.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SimState {
    // Core supervisor
    pub irq_enabled: bool,
    pub pending_vector: u32,
    pub debugger: bool,
    pub nvic: [u32; WAKE_MASK_WORDS],
    pub nvic_cleared: [u32; WAKE_MASK_WORDS],

    // GPC
    pub forced: [Option<bool>; cpu::NUM],
    pub irq_wake: [[u32; WAKE_MASK_WORDS]; cpu::NUM],
    pub lpm_noc: [Option<LpmSetting>; cpu::NUM],
    pub lpm_wakeup: [Option<LpmSetting>; cpu::NUM],
    pub sleep_mode: [SleepMode; cpu::NUM],
    pub wake_mux_gic: bool,
    pub lp_compute: u32,

    // Energia
    pub mix_on: [bool; mix::NUM],
    pub mem_low_power: u32,
    pub ddr_retained: bool,
    pub perf: [u32; 4],
    pub temp_sensor: bool,

    // Clocks
    pub source_on: [bool; clk_src::NUM],
    pub root_ctrl: [u32; clk_root::NUM],
    pub pll_powered: [bool; pll::NUM],
    pub pll_bypass: [bool; pll::NUM],

    // AON
    pub handshakes: [u32; 4],
    pub osc24m_gated: bool,
    pub pmic_standby: bool,
    pub pmic_off_count: u32,
    pub efuse_power_down: bool,
    pub fro_on: bool,
    pub sysctr_low: bool,
    pub ele_handshake: bool,
    pub m7_clocks_forced: bool,

    // Reset
    pub reset_reason: u32,
    /// Registro guardado pela placa (sobrevive ao "reboot").
    pub shutdown_saved: Option<ShutdownRecord>,

    // Silício
    pub device_id: u32,
    pub rom_patch_version: u32,
    pub reset_vector: [Option<u64>; cpu::NUM],
    pub gprs: [u32; NUM_GPR],
}

impl SimState {
    /// Sistema acordado: todos os mixes ligados, PLLs ativos, cores
    /// secundários com todas as IRQs mascaradas.
    fn awake() -> Self {
        let mut root_ctrl = [0u32; clk_root::NUM];
        for (i, r) in root_ctrl.iter_mut().enumerate() {
            *r = 0x0000_0100 | (i as u32 & 0x3);
        }

        let mut forced = [Some(false); cpu::NUM];
        forced[cpu::M33P] = Some(false);

        Self {
            irq_enabled: true,
            pending_vector: 0,
            debugger: false,
            nvic: [0; WAKE_MASK_WORDS],
            nvic_cleared: [0; WAKE_MASK_WORDS],
            forced,
            irq_wake: [[0xFFFF_FFFF; WAKE_MASK_WORDS]; cpu::NUM],
            lpm_noc: [Some(LPM_ON_NEVER); cpu::NUM],
            lpm_wakeup: [Some(LPM_ON_NEVER); cpu::NUM],
            sleep_mode: [SleepMode::Run; cpu::NUM],
            wake_mux_gic: true,
            lp_compute: 0,
            mix_on: [true; mix::NUM],
            mem_low_power: 0,
            ddr_retained: false,
            perf: [2; 4],
            temp_sensor: true,
            source_on: [true; clk_src::NUM],
            root_ctrl,
            pll_powered: [true; pll::NUM],
            pll_bypass: [false; pll::NUM],
            handshakes: [0x1, 0x2, 0x3, 0x4],
            osc24m_gated: false,
            pmic_standby: false,
            pmic_off_count: 0,
            efuse_power_down: false,
            fro_on: true,
            sysctr_low: false,
            ele_handshake: false,
            m7_clocks_forced: false,
            reset_reason: REASON_POR,
            shutdown_saved: None,
            device_id: 0x20,
            rom_patch_version: 1,
            reset_vector: [None; cpu::NUM],
            gprs: [0; NUM_GPR],
        }
    }
}

/// Falhas injetadas.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Failures {
    /// Bit N: desligar o mix N falha.
    pub mix_off: u32,
    /// Bit N: ligar o mix N falha.
    pub mix_on: u32,
    pub ddr_enter: bool,
    pub ddr_exit: bool,
    pub perf_wake: bool,
    /// `set_perf_level` recusa.
    pub perf_set: bool,
    /// Fontes de clock que recusam mudança.
    pub sources: u64,
}

pub(crate) struct SimPlatform {
    pub state: SimState,
    pub fail: Failures,
    pub events: Vec<Event>,
    /// Estado no momento de cada WFI.
    pub at_wfi: Vec<SimState>,
    /// Respostas de `system_sleep_status` (depois, `status_default`).
    pub status_script: Script<Option<SleepMode>>,
    pub status_default: Option<SleepMode>,
    /// Vetor que fica pendente ao sair do WFI.
    pub wake_vector: u32,
    /// Leituras de tempo forçadas (depois, relógio normal).
    pub time_script: Script<u64>,
    now: Cell<u64>,
    /// Avanço por leitura do relógio.
    pub tick: u64,
    /// Avanço durante o WFI.
    pub wfi_usec: u64,
}

/// Fila de respostas consumida através de `&self`.
pub(crate) struct Script<T>(RefCell<VecDeque<T>>);

impl<T> Script<T> {
    fn new() -> Self {
        Self(RefCell::new(VecDeque::new()))
    }

    pub fn push(&self, v: T) {
        self.0.borrow_mut().push_back(v);
    }

    fn pop(&self) -> Option<T> {
        self.0.borrow_mut().pop_front()
    }
}

impl SimPlatform {
    pub fn new() -> Self {
        Self {
            state: SimState::awake(),
            fail: Failures::default(),
            events: Vec::new(),
            at_wfi: Vec::new(),
            status_script: Script::new(),
            status_default: Some(SleepMode::Suspend),
            wake_vector: 0x20,
            time_script: Script::new(),
            now: Cell::new(1_000),
            tick: 10,
            wfi_usec: 5_000,
        }
    }

    pub fn count(&self, event: Event) -> usize {
        self.events.iter().filter(|&&e| e == event).count()
    }

    pub fn position(&self, event: Event) -> Option<usize> {
        self.events.iter().position(|&e| e == event)
    }

    /// Passos de energia (mixes, DRAM, performance) na ordem.
    pub fn power_events(&self) -> Vec<Event> {
        self.events
            .iter()
            .copied()
            .filter(|e| {
                matches!(
                    e,
                    Event::MixPower(..)
                        | Event::DdrRetention(_)
                        | Event::PerfLevel(..)
                        | Event::PerfSystemWake(_)
                )
            })
            .collect()
    }
}

impl SupervisorCpu for SimPlatform {
    fn disable_interrupts(&mut self) {
        self.events.push(Event::Interrupts(false));
        self.state.irq_enabled = false;
    }

    fn enable_interrupts(&mut self) {
        self.events.push(Event::Interrupts(true));
        self.state.irq_enabled = true;
    }

    fn wait_for_interrupt(&mut self) {
        self.events.push(Event::Wfi);
        self.at_wfi.push(self.state.clone());
        self.now.set(self.now.get() + self.wfi_usec);
        self.state.pending_vector = self.wake_vector;
    }

    fn pending_vector(&self) -> u32 {
        self.state.pending_vector
    }

    fn debug_enabled(&self) -> bool {
        self.state.debugger
    }

    fn nvic_enabled(&self, word: usize) -> u32 {
        self.state.nvic[word]
    }

    fn nvic_set_enabled(&mut self, word: usize, mask: u32) {
        self.state.nvic[word] = mask;
    }

    fn nvic_clear_pending(&mut self, word: usize, mask: u32) {
        self.state.nvic_cleared[word] = mask;
    }
}

impl CoreControl for SimPlatform {
    fn sleep_forced(&self, cpu: usize) -> Option<bool> {
        self.state.forced.get(cpu).copied().flatten()
    }

    fn irq_wake(&self, cpu: usize, word: usize) -> Option<u32> {
        self.sleep_forced(cpu)?;
        Some(self.state.irq_wake[cpu][word])
    }

    fn set_irq_wake(&mut self, cpu: usize, word: usize, mask: u32) {
        self.state.irq_wake[cpu][word] = mask;
    }

    fn mix_cpu_lpm(&self, mix: usize, cpu: usize) -> Option<LpmSetting> {
        match mix {
            mix::NOC => self.state.lpm_noc[cpu],
            mix::WAKEUP => self.state.lpm_wakeup[cpu],
            _ => None,
        }
    }

    fn system_sleep_status(&self) -> Option<SleepMode> {
        self.status_script.pop().unwrap_or(self.status_default)
    }

    fn set_sleep_mode(&mut self, cpu: usize, mode: SleepMode) {
        self.events.push(Event::SleepMode(cpu, mode));
        self.state.sleep_mode[cpu] = mode;
    }

    fn set_wake_mux(&mut self, _cpu: usize, gic: bool) {
        self.state.wake_mux_gic = gic;
    }

    fn process_lpis(&mut self, cpu: usize, mode: SleepMode) {
        self.events.push(Event::Lpis(cpu, mode));
    }

    fn lp_compute_list(&self) -> u32 {
        self.state.lp_compute
    }
}

impl PowerControl for SimPlatform {
    fn mix_is_on(&self, mix: usize) -> bool {
        self.state.mix_on[mix]
    }

    fn mem_low_power(&self, mem: usize) -> bool {
        self.state.mem_low_power & (1 << mem) != 0
    }

    fn set_mix_power(&mut self, mix: usize, on: bool) -> SmResult<()> {
        let fail = if on { self.fail.mix_on } else { self.fail.mix_off };
        self.events.push(Event::MixPower(mix, on));
        if fail & (1 << mix) != 0 {
            return Err(SmError::HardwareError);
        }
        self.state.mix_on[mix] = on;
        Ok(())
    }

    fn ddr_retention_enter(&mut self) -> SmResult<()> {
        self.events.push(Event::DdrRetention(true));
        if self.fail.ddr_enter {
            return Err(SmError::Busy);
        }
        self.state.ddr_retained = true;
        Ok(())
    }

    fn ddr_retention_exit(&mut self) -> SmResult<()> {
        self.events.push(Event::DdrRetention(false));
        if self.fail.ddr_exit {
            return Err(SmError::GenericError);
        }
        self.state.ddr_retained = false;
        Ok(())
    }

    fn perf_level(&self, domain: usize) -> SmResult<u32> {
        self.state
            .perf
            .get(domain)
            .copied()
            .ok_or(SmError::NotFound)
    }

    fn set_perf_level(&mut self, domain: usize, level: u32) -> SmResult<()> {
        self.events.push(Event::PerfLevel(domain, level));
        if self.fail.perf_set {
            return Err(SmError::Denied);
        }
        let slot = self.state.perf.get_mut(domain).ok_or(SmError::NotFound)?;
        *slot = level;
        Ok(())
    }

    fn perf_system_sleep(&mut self, level: u32) -> SmResult<()> {
        self.events.push(Event::PerfSystemSleep(level));
        Ok(())
    }

    fn perf_system_wake(&mut self, level: u32) -> SmResult<()> {
        self.events.push(Event::PerfSystemWake(level));
        if self.fail.perf_wake {
            return Err(SmError::Denied);
        }
        Ok(())
    }

    fn set_temp_sensor_enabled(&mut self, enabled: bool) -> SmResult<()> {
        self.events.push(Event::TempSensor(enabled));
        self.state.temp_sensor = enabled;
        Ok(())
    }
}

impl ClockControl for SimPlatform {
    fn source_enabled(&self, src: usize) -> bool {
        self.state.source_on[src]
    }

    fn set_source_enabled(&mut self, src: usize, enabled: bool) -> bool {
        self.events.push(Event::Source(src, enabled));
        if self.fail.sources & (1 << src) != 0 {
            return false;
        }
        self.state.source_on[src] = enabled;
        true
    }

    fn root_control(&self, root: usize) -> u32 {
        self.state.root_ctrl[root]
    }

    fn root_control_clear(&mut self, root: usize, mask: u32) {
        self.state.root_ctrl[root] &= !mask;
    }

    fn root_control_set(&mut self, root: usize, mask: u32) {
        self.state.root_ctrl[root] |= mask;
    }

    fn pll_powered(&self, pll: usize) -> bool {
        self.state.pll_powered[pll]
    }

    fn set_pll_bypass(&mut self, pll: usize, bypass: bool) {
        self.state.pll_bypass[pll] = bypass;
    }
}

fn handshake_slot(line: HandshakeLine) -> usize {
    match line {
        HandshakeLine::Sm => 0,
        HandshakeLine::Sm2 => 1,
        HandshakeLine::Ele => 2,
        HandshakeLine::Ele2 => 3,
    }
}

impl AonControl for SimPlatform {
    fn handshake(&self, line: HandshakeLine) -> u32 {
        self.state.handshakes[handshake_slot(line)]
    }

    fn set_handshake(&mut self, line: HandshakeLine, value: u32) {
        self.state.handshakes[handshake_slot(line)] = value;
    }

    fn set_osc24m_gating(&mut self, gate: bool) {
        self.state.osc24m_gated = gate;
    }

    fn set_pmic_standby(&mut self, enabled: bool) {
        self.state.pmic_standby = enabled;
    }

    fn set_pmic_standby_off_count(&mut self, ticks: u32) {
        self.state.pmic_off_count = ticks;
    }

    fn set_efuse_power_down(&mut self, power_down: bool) {
        self.state.efuse_power_down = power_down;
    }

    fn set_fro_enabled(&mut self, enabled: bool) {
        self.events.push(Event::Fro(enabled));
        self.state.fro_on = enabled;
    }

    fn set_sysctr_low_freq(&mut self, low: bool) {
        self.events.push(Event::SysctrLow(low));
        self.state.sysctr_low = low;
    }

    fn set_ele_handshake(&mut self, enabled: bool) {
        self.state.ele_handshake = enabled;
    }

    fn force_m7_clocks_on(&mut self) {
        self.state.m7_clocks_forced = true;
    }
}

impl BoardHooks for SimPlatform {
    fn sleep_prepare(&mut self, _mode: u32, _flags: u32) {
        self.events.push(Event::BoardPrepare);
    }

    fn sleep_enter(&mut self, _mode: u32, _flags: u32) {
        self.events.push(Event::BoardEnter);
    }

    fn sleep_exit(&mut self, _mode: u32, _flags: u32) {
        self.events.push(Event::BoardExit);
    }

    fn sleep_unprepare(&mut self, _mode: u32, _flags: u32) {
        self.events.push(Event::BoardUnprepare);
    }
}

impl Timer for SimPlatform {
    fn usec64(&self) -> u64 {
        if let Some(t) = self.time_script.pop() {
            return t;
        }
        let t = self.now.get();
        self.now.set(t + self.tick);
        t
    }
}

impl SiliconInfo for SimPlatform {
    fn device_id(&self) -> u32 {
        self.state.device_id
    }

    fn rom_patch_version(&self) -> u32 {
        self.state.rom_patch_version
    }

    fn cpu_reset_vector(&self, cpu: usize) -> Option<u64> {
        self.state.reset_vector.get(cpu).copied().flatten()
    }
}

impl RetainedRegs for SimPlatform {
    fn gpr(&self, index: usize) -> u32 {
        self.state.gprs[index - 1]
    }

    fn set_gpr(&mut self, index: usize, value: u32) {
        self.state.gprs[index - 1] = value;
    }
}

impl ResetControl for SimPlatform {
    fn request_warm_reset(&mut self) {
        self.events.push(Event::WarmReset);
    }

    fn reset_reason(&self) -> u32 {
        self.state.reset_reason
    }

    fn clear_reset_reason(&mut self, reason: u32) {
        self.events.push(Event::ClearResetReason(reason));
    }

    fn load_shutdown_record(&mut self) -> Option<ShutdownRecord> {
        self.state.shutdown_saved
    }

    fn save_shutdown_record(&mut self, record: ShutdownRecord) {
        self.events.push(Event::SaveShutdown(record));
        self.state.shutdown_saved = Some(record);
    }
}
