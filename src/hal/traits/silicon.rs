//! Informações de silício, registradores retidos e reset.

/// Identificação do silício e fusíveis relevantes ao boot.
pub trait SiliconInfo {
    /// DIGPROG_DEVICE_ID do OSC24M.
    fn device_id(&self) -> u32;

    /// Versão do patch de ROM do M33 (fusível).
    fn rom_patch_version(&self) -> u32;

    /// Vetor de reset programado para o core, se legível.
    fn cpu_reset_vector(&self, cpu: usize) -> Option<u64>;
}

/// Registradores gerais do SRC que sobrevivem a warm reset.
pub trait RetainedRegs {
    fn gpr(&self, index: usize) -> u32;

    fn set_gpr(&mut self, index: usize, value: u32);
}

/// Registro do último shutdown, guardado pela placa entre boots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShutdownRecord {
    /// Motivo, na numeração de `core::debug::reason`.
    pub reason: u32,
    /// Erro associado, quando quem registrou informou um.
    pub err_id: Option<u32>,
}

impl ShutdownRecord {
    pub const fn from_reason(reason: u32) -> Self {
        Self {
            reason,
            err_id: None,
        }
    }
}

/// Controle de reset do SRC e armazenamento do registro de shutdown.
pub trait ResetControl {
    /// Solicita warm reset do sistema. Em hardware real não retorna.
    fn request_warm_reset(&mut self);

    /// Motivo do último reset segundo o SRC.
    fn reset_reason(&self) -> u32;

    fn clear_reset_reason(&mut self, reason: u32);

    /// Registro salvo no boot anterior; `None` se não há registro válido.
    fn load_shutdown_record(&mut self) -> Option<ShutdownRecord>;

    /// Persiste o registro para o próximo boot.
    fn save_shutdown_record(&mut self, record: ShutdownRecord);
}
