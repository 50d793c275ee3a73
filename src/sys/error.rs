//! # Códigos de Status do System Manager
//!
//! Define os códigos de erro retornados pelo núcleo de energia e pelo
//! modelo de metadados do ROM. Segue a numeração de status do SCMI, que é
//! o que os colaboradores externos (LMM, monitor) repassam aos agentes.
//!
//! `Success` não é uma variante: sucesso é `Ok(())`.
//!
//! ## Política
//! - Metadados de boot ausentes são `NotSupported`, nunca fatais.
//! - Fim da lista de imagens (ou código desconhecido) é `NotFound`.
//! - Entrada malformada do chamador é `InvalidParameters`.
//! - Falhas de hardware vêm da camada `hal` e são repassadas como estão.

/// Status de erro (espaço SCMI).
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmError {
    NotSupported = -1,      // Recurso ausente neste boot/silício
    InvalidParameters = -2, // Parâmetro fora da faixa
    Denied = -3,            // Acesso negado
    NotFound = -4,          // Nenhum item correspondente
    OutOfRange = -5,        // Índice fora da faixa
    Busy = -6,              // Recurso ocupado
    GenericError = -8,      // Erro sem classificação
    HardwareError = -9,     // Hardware não respondeu
}

/// Resultado padrão das operações do System Manager.
pub type SmResult<T> = Result<T, SmError>;

/// Código de sucesso no ABI dos colaboradores.
pub const SM_SUCCESS: i32 = 0;

impl SmError {
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Nome curto para logs e dumps.
    pub fn name(self) -> &'static str {
        match self {
            SmError::NotSupported => "not_supported",
            SmError::InvalidParameters => "invalid_parameters",
            SmError::Denied => "denied",
            SmError::NotFound => "not_found",
            SmError::OutOfRange => "out_of_range",
            SmError::Busy => "busy",
            SmError::GenericError => "generic_error",
            SmError::HardwareError => "hardware_error",
        }
    }
}

impl core::fmt::Display for SmError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Converte um resultado para o código inteiro do ABI.
pub fn status_code<T>(result: &SmResult<T>) -> i32 {
    match result {
        Ok(_) => SM_SUCCESS,
        Err(e) => e.as_i32(),
    }
}

/// Acumulador "primeiro erro vence".
///
/// Usado no caminho de resume: todos os passos de restauração são
/// executados, mas apenas o primeiro status de falha é devolvido.
#[derive(Debug, Default)]
pub struct StatusChain {
    first: Option<SmError>,
}

impl StatusChain {
    pub const fn new() -> Self {
        Self { first: None }
    }

    /// Registra o resultado de um passo e devolve o valor em caso de sucesso.
    pub fn record<T>(&mut self, result: SmResult<T>) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(e) => {
                if self.first.is_none() {
                    self.first = Some(e);
                }
                None
            }
        }
    }

    pub fn finish(self) -> SmResult<()> {
        match self.first {
            None => Ok(()),
            Some(e) => Err(e),
        }
    }
}
