//! Trait do controlador de energia por CPU (GPC).
//!
//! O GPC guarda, para cada core, a máscara de wake, o modo de sleep alvo,
//! o estado de "sleep forçado" e as preferências de LPM por power mix.

/// Modos de sleep de CPU (profundidade crescente).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SleepMode {
    Run = 0,
    Wait = 1,
    Stop = 2,
    Suspend = 3,
}

impl SleepMode {
    /// Decodifica um código de profundidade. Códigos acima de SUSPEND
    /// são limitados a SUSPEND.
    pub fn from_code(code: u32) -> Self {
        match code {
            0 => SleepMode::Run,
            1 => SleepMode::Wait,
            2 => SleepMode::Stop,
            _ => SleepMode::Suspend,
        }
    }

    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            SleepMode::Run => "run",
            SleepMode::Wait => "wait",
            SleepMode::Stop => "stop",
            SleepMode::Suspend => "suspend",
        }
    }
}

/// Preferência de LPM de um core para um power mix.
///
/// O valor é o modo de sleep mais profundo em que o core ainda exige o mix
/// ligado: ON_NEVER (0) < ON_RUN (1) < ... < ON_ALWAYS (4).
pub type LpmSetting = u32;

pub const LPM_ON_NEVER: LpmSetting = 0;
pub const LPM_ON_RUN: LpmSetting = 1;
pub const LPM_ON_RUN_WAIT: LpmSetting = 2;
pub const LPM_ON_RUN_WAIT_STOP: LpmSetting = 3;
pub const LPM_ON_ALWAYS: LpmSetting = 4;

/// Controle de energia por CPU.
///
/// Getters retornam `None` quando o índice não é gerenciado pelo GPC.
pub trait CoreControl {
    /// Sleep forçado pelo SM para o core.
    fn sleep_forced(&self, cpu: usize) -> Option<bool>;

    /// Máscara de wake (1 = IRQ mascarada) de uma palavra.
    fn irq_wake(&self, cpu: usize, word: usize) -> Option<u32>;

    /// Grava a máscara de wake de uma palavra.
    fn set_irq_wake(&mut self, cpu: usize, word: usize, mask: u32);

    /// Preferência de LPM do core para o mix.
    fn mix_cpu_lpm(&self, mix: usize, cpu: usize) -> Option<LpmSetting>;

    /// Modo de sleep que o sistema inteiro pode atingir agora.
    fn system_sleep_status(&self) -> Option<SleepMode>;

    /// Modo de sleep alvo do core.
    fn set_sleep_mode(&mut self, cpu: usize, mode: SleepMode);

    /// Seleciona a origem de wake do core (`false` = GPC).
    fn set_wake_mux(&mut self, cpu: usize, gic: bool);

    /// Processa as LPIs por periférico do core para o modo informado.
    fn process_lpis(&mut self, cpu: usize, mode: SleepMode);

    /// Bitmap de cores em modo "LP compute".
    fn lp_compute_list(&self) -> u32;
}
