//! Arquivo: core/power/clock.rs
//!
//! Propósito: Manipulações de clock feitas pela sequência de sleep.
//!
//! Detalhes de Implementação:
//! - Bypass dos PLLs fracionários usados como fonte de clock.
//! - Roots de baixa atividade (ELE, BUSAON, M33) movidos para o OSC24M
//!   com DIV=/1, permitindo desligar o SYSPLL1. MUX e DIV originais são
//!   guardados para restauração exata.
//! - Nós do SYSPLL1 desligados do último para o VCO e religados na ordem
//!   inversa.

use crate::hal::soc::{clk_root, clk_src, BYPASS_PLLS, SLEEP_ROOTS};
use crate::hal::traits::ClockControl;

/// Configura o bypass dos PLLs de áudio/vídeo.
///
/// Com `preserve`, só altera PLLs que não estão em uso (POWERUP inativo).
pub fn clock_source_bypass<P: ClockControl>(platform: &mut P, bypass: bool, preserve: bool) {
    for &pll in BYPASS_PLLS.iter() {
        if preserve && platform.pll_powered(pll) {
            continue;
        }
        platform.set_pll_bypass(pll, bypass);
    }
}

/// Contexto dos roots movidos para o OSC24M.
#[must_use]
pub struct SleepRootContext {
    saved: [u32; SLEEP_ROOTS.len()],
}

/// Move os roots de sleep para OSC24M (MUX=0, DIV=0).
pub fn park_sleep_roots<P: ClockControl>(platform: &mut P) -> SleepRootContext {
    let mut saved = [0u32; SLEEP_ROOTS.len()];

    for (slot, &root) in saved.iter_mut().zip(SLEEP_ROOTS.iter()) {
        *slot = platform.root_control(root);
        platform.root_control_clear(root, clk_root::MUX_MASK);
        platform.root_control_clear(root, clk_root::DIV_MASK);
    }

    SleepRootContext { saved }
}

impl SleepRootContext {
    /// Restaura DIV e depois MUX de cada root.
    pub fn restore<P: ClockControl>(self, platform: &mut P) {
        for (&ctrl, &root) in self.saved.iter().zip(SLEEP_ROOTS.iter()) {
            platform.root_control_set(root, ctrl & clk_root::DIV_MASK);
            platform.root_control_set(root, ctrl & clk_root::MUX_MASK);
        }
    }
}

/// Desliga os nós do SYSPLL1, do PFD2_DIV2 até o VCO.
pub fn syspll_power_down<P: ClockControl>(platform: &mut P) {
    for src in (clk_src::SYSPLL1_VCO..=clk_src::SYSPLL1_PFD2_DIV2).rev() {
        if !platform.set_source_enabled(src, false) {
            crate::kwarn!("(Sleep) nó SYSPLL recusou desligar: ", src);
        }
    }
}

/// Religa os nós do SYSPLL1, do VCO até o PFD2_DIV2.
pub fn syspll_power_up<P: ClockControl>(platform: &mut P) {
    for src in clk_src::SYSPLL1_VCO..=clk_src::SYSPLL1_PFD2_DIV2 {
        if !platform.set_source_enabled(src, true) {
            crate::kwarn!("(Sleep) nó SYSPLL recusou ligar: ", src);
        }
    }
}
