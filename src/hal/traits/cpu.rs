//! Trait do núcleo supervisor (Cortex-M33).
//!
//! Operações sobre o próprio core do System Manager: máscara global de
//! interrupções, a instrução de halt e o NVIC local.

/// Abstração do core supervisor.
pub trait SupervisorCpu {
    /// Desabilita interrupções globalmente (PRIMASK).
    fn disable_interrupts(&mut self);

    /// Habilita interrupções globalmente.
    fn enable_interrupts(&mut self);

    /// Sequência de halt: barreira de dados, WFI, barreira de instrução.
    ///
    /// Retorna quando uma interrupção qualificada fica pendente, mesmo
    /// com PRIMASK setado.
    fn wait_for_interrupt(&mut self);

    /// Vetor pendente ativo (ICSR.VECTPENDING), 0 se nenhum.
    fn pending_vector(&self) -> u32;

    /// Debugger habilitado no core (DHCSR.C_DEBUGEN).
    fn debug_enabled(&self) -> bool;

    /// Lê uma palavra de habilitação do NVIC (ISER).
    fn nvic_enabled(&self, word: usize) -> u32;

    /// Substitui o conjunto habilitado de uma palavra (ICER total + ISER).
    fn nvic_set_enabled(&mut self, word: usize, mask: u32);

    /// Limpa IRQs pendentes de uma palavra (ICPR).
    fn nvic_clear_pending(&mut self, word: usize, mask: u32);
}
