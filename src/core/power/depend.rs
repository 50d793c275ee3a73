//! Arquivo: core/power/depend.rs
//!
//! Propósito: Dependências de wake entre cores e power mixes.
//!
//! Antes de dormir, o SM precisa saber:
//! 1. Quais IRQs podem acordar o sistema (união das fontes de wake dos
//!    cores secundários que não estão em sleep forçado).
//! 2. Até que profundidade o NOC e o WAKEUPMIX ainda são exigidos por
//!    algum core.
//!
//! Detalhes de Implementação:
//! - A máscara de wake de cada core secundário é capturada e trocada por
//!   "tudo mascarado" enquanto o SM conduz a sequência. O snapshot só
//!   pode ser consumido uma vez (`restore` toma `self`).
//! - Cores em sleep forçado têm a máscara capturada, mas não contribuem
//!   com fontes de wake nem com dependências.

use crate::hal::soc::{cpu, mix, WAKE_ALL_MASKED, WAKE_MASK_WORDS};
use crate::hal::traits::{CoreControl, LpmSetting, SleepMode, LPM_ON_NEVER};

/// Profundidade mínima que ainda exige cada mix sensível ligado.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerDependency {
    pub noc: LpmSetting,
    pub wakeup: LpmSetting,
}

impl PowerDependency {
    pub const fn none() -> Self {
        Self {
            noc: LPM_ON_NEVER,
            wakeup: LPM_ON_NEVER,
        }
    }

    /// O NOC pode ser desligado no modo pedido.
    pub fn noc_may_power_off(&self, mode: SleepMode) -> bool {
        self.noc <= mode.code()
    }

    /// O WAKEUPMIX pode ser desligado no modo pedido.
    pub fn wakeup_may_power_off(&self, mode: SleepMode) -> bool {
        self.wakeup <= mode.code()
    }
}

/// Cores secundários (todos exceto o próprio SM).
fn secondary_cores() -> impl Iterator<Item = usize> {
    (0..cpu::NUM).filter(|&c| c != cpu::M33P)
}

/// Calcula as dependências de NOC/WAKEUPMIX.
///
/// Máximo, sobre os cores secundários não forçados a dormir, da
/// preferência de LPM de cada core para o mix.
pub fn scan_dependencies<P: CoreControl>(platform: &P) -> PowerDependency {
    let mut dep = PowerDependency::none();

    for core in secondary_cores() {
        if platform.sleep_forced(core) != Some(false) {
            continue;
        }

        if let Some(lpm) = platform.mix_cpu_lpm(mix::NOC, core) {
            dep.noc = dep.noc.max(lpm);
        }
        if let Some(lpm) = platform.mix_cpu_lpm(mix::WAKEUP, core) {
            dep.wakeup = dep.wakeup.max(lpm);
        }
    }

    dep
}

/// Máscaras de wake capturadas dos cores secundários.
#[must_use = "as máscaras capturadas precisam ser restauradas"]
pub struct WakeMaskSnapshot {
    saved: [[Option<u32>; WAKE_MASK_WORDS]; cpu::NUM],
}

impl WakeMaskSnapshot {
    fn empty() -> Self {
        Self {
            saved: [[None; WAKE_MASK_WORDS]; cpu::NUM],
        }
    }

    /// Regrava cada máscara capturada exatamente uma vez.
    pub fn restore<P: CoreControl>(self, platform: &mut P) {
        for core in secondary_cores() {
            for word in 0..WAKE_MASK_WORDS {
                if let Some(mask) = self.saved[core][word] {
                    platform.set_irq_wake(core, word, mask);
                }
            }
        }
    }
}

/// Resultado da abertura do bracket de máscaras.
pub struct MaskBracket {
    pub snapshot: WakeMaskSnapshot,
    /// Máscara de wake do sistema (1 = IRQ não acorda o sistema).
    pub system_mask: [u32; WAKE_MASK_WORDS],
    pub dependency: PowerDependency,
}

/// Captura e mascara as fontes de wake de todos os cores secundários.
///
/// A máscara do sistema é a interseção das máscaras dos cores que não
/// estão em sleep forçado, ou seja, qualquer IRQ que acorde algum core
/// ativo acorda o sistema.
pub fn open_mask_bracket<P: CoreControl>(platform: &mut P) -> MaskBracket {
    let mut snapshot = WakeMaskSnapshot::empty();
    let mut system_mask = [WAKE_ALL_MASKED; WAKE_MASK_WORDS];

    for core in secondary_cores() {
        let forced = match platform.sleep_forced(core) {
            Some(forced) => forced,
            None => continue,
        };

        for word in 0..WAKE_MASK_WORDS {
            if let Some(mask) = platform.irq_wake(core, word) {
                snapshot.saved[core][word] = Some(mask);
                if !forced {
                    system_mask[word] &= mask;
                }
                platform.set_irq_wake(core, word, WAKE_ALL_MASKED);
            }
        }
    }

    let dependency = scan_dependencies(platform);
    crate::ktrace!("(Sleep) dep NOC=", dependency.noc);
    crate::ktrace!("(Sleep) dep WAKEUP=", dependency.wakeup);

    MaskBracket {
        snapshot,
        system_mask,
        dependency,
    }
}
