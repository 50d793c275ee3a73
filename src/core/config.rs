//! Configuração da placa usada pelo núcleo de energia.

/// Ticks de 32 kHz esperados pelo PMIC ao sair de standby (~1 ms).
pub const DEFAULT_PMIC_RESUME_TICKS: u32 = 33;

/// Parâmetros fixos da placa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    /// Contagem STBY_OFF_CNT do PMIC.
    pub pmic_resume_ticks: u32,
}

impl BoardConfig {
    pub const fn new() -> Self {
        Self {
            pmic_resume_ticks: DEFAULT_PMIC_RESUME_TICKS,
        }
    }

    pub const fn with_pmic_resume_ticks(mut self, ticks: u32) -> Self {
        self.pmic_resume_ticks = ticks;
        self
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new()
    }
}
