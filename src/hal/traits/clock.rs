//! Trait do CCM (fontes, roots e PLLs).

/// Controle de clocks.
pub trait ClockControl {
    fn source_enabled(&self, src: usize) -> bool;

    /// Liga/desliga um nó de clock. Retorna `false` se o nó recusou.
    fn set_source_enabled(&mut self, src: usize, enabled: bool) -> bool;

    /// Palavra CLOCK_ROOT_CONTROL do root.
    fn root_control(&self, root: usize) -> u32;

    /// Limpa bits do CLOCK_ROOT_CONTROL (registrador CLR).
    fn root_control_clear(&mut self, root: usize, mask: u32);

    /// Seta bits do CLOCK_ROOT_CONTROL (registrador SET).
    fn root_control_set(&mut self, root: usize, mask: u32);

    /// PLL fracionário com POWERUP ativo.
    fn pll_powered(&self, pll: usize) -> bool;

    fn set_pll_bypass(&mut self, pll: usize, bypass: bool);
}
