//! Arquivo: hal/soc.rs
//!
//! Propósito: Descrição estática do SoC supervisionado (i.MX95).
//! Índices de CPU, fatias de power mix, PLLs, nós de clock e endereços
//! fixos usados pelo núcleo de energia e pelo modelo de ROM.
//!
//! Detalhes de Implementação:
//! - Índices são `usize` para indexar bitmaps e tabelas diretamente.
//! - A numeração deve coincidir com a usada pela implementação de
//!   `Platform` da placa.

// =============================================================================
// CPUs
// =============================================================================

/// Índices de CPU conhecidos pelo GPC.
pub mod cpu {
    /// Cortex-M33 (o próprio System Manager)
    pub const M33P: usize = 0;
    pub const M7P: usize = 1;
    pub const A55C0: usize = 2;
    pub const A55C1: usize = 3;
    pub const A55C2: usize = 4;
    pub const A55C3: usize = 5;
    pub const A55C4: usize = 6;
    pub const A55C5: usize = 7;
    /// Plataforma A55 (cluster)
    pub const A55P: usize = 8;

    pub const NUM: usize = 9;
}

/// Palavras de máscara de wake por CPU (32 IRQs cada).
pub const WAKE_MASK_WORDS: usize = 12;

/// Máscara "todas as IRQs mascaradas".
pub const WAKE_ALL_MASKED: u32 = 0xFFFF_FFFF;

// =============================================================================
// POWER MIXES E MEMÓRIAS
// =============================================================================

/// Fatias de power mix (SRC).
pub mod mix {
    pub const ANA: usize = 0;
    pub const AON: usize = 1;
    pub const BBSM: usize = 2;
    pub const CAMERA: usize = 3;
    pub const CCMSRCGPC: usize = 4;
    pub const A55C0: usize = 5;
    pub const A55C1: usize = 6;
    pub const A55C2: usize = 7;
    pub const A55C3: usize = 8;
    pub const A55C4: usize = 9;
    pub const A55C5: usize = 10;
    pub const A55P: usize = 11;
    pub const DDR: usize = 12;
    pub const DISPLAY: usize = 13;
    pub const GPU: usize = 14;
    pub const HSIO_TOP: usize = 15;
    pub const HSIO_WAON: usize = 16;
    pub const M7: usize = 17;
    pub const NETC: usize = 18;
    /// Interconexão entre cores
    pub const NOC: usize = 19;
    pub const NPU: usize = 20;
    pub const VPU: usize = 21;
    /// Periféricos capazes de wake
    pub const WAKEUP: usize = 22;

    pub const NUM: usize = 23;
}

/// Fatias de memória com controle de low-power.
pub const NUM_MEM_SLICES: usize = 18;

// =============================================================================
// CLOCKS
// =============================================================================

/// PLLs (índices do bitmap de telemetria).
pub mod pll {
    pub const SYS1: usize = 0;
    pub const AUDIO1: usize = 1;
    pub const AUDIO2: usize = 2;
    pub const VIDEO1: usize = 3;
    pub const ARM: usize = 4;
    pub const DRAM: usize = 5;
    pub const HSIO: usize = 6;
    pub const LDB: usize = 7;

    pub const NUM: usize = 8;
}

/// Fontes de clock.
///
/// Os nós do SYSPLL1 são contíguos: VCO primeiro, PFD2_DIV2 por último.
pub mod clk_src {
    pub const EXT: usize = 0;
    pub const OSC32K: usize = 1;
    pub const OSC24M: usize = 2;
    pub const FRO: usize = 3;
    pub const SYSPLL1_VCO: usize = 4;
    pub const SYSPLL1_PFD0_UNGATED: usize = 5;
    pub const SYSPLL1_PFD0: usize = 6;
    pub const SYSPLL1_PFD0_DIV2: usize = 7;
    pub const SYSPLL1_PFD1_UNGATED: usize = 8;
    pub const SYSPLL1_PFD1: usize = 9;
    pub const SYSPLL1_PFD1_DIV2: usize = 10;
    pub const SYSPLL1_PFD2_UNGATED: usize = 11;
    pub const SYSPLL1_PFD2: usize = 12;
    pub const SYSPLL1_PFD2_DIV2: usize = 13;
    pub const AUDIOPLL1_VCO: usize = 14;
    pub const AUDIOPLL1: usize = 15;
    pub const AUDIOPLL2_VCO: usize = 16;
    pub const AUDIOPLL2: usize = 17;
    pub const VIDEOPLL1_VCO: usize = 18;
    pub const VIDEOPLL1: usize = 19;
    pub const ARMPLL_VCO: usize = 20;
    pub const DRAMPLL_VCO: usize = 29;
    pub const DRAMPLL: usize = 30;
    pub const HSIOPLL_VCO: usize = 31;
    pub const HSIOPLL: usize = 32;
    pub const LDBPLL_VCO: usize = 33;
    pub const LDBPLL: usize = 34;

    pub const NUM: usize = 35;
}

/// VCO de cada PLL, indexado por `pll::*`.
pub const PLL_VCO: [usize; pll::NUM] = [
    clk_src::SYSPLL1_VCO,
    clk_src::AUDIOPLL1_VCO,
    clk_src::AUDIOPLL2_VCO,
    clk_src::VIDEOPLL1_VCO,
    clk_src::ARMPLL_VCO,
    clk_src::DRAMPLL_VCO,
    clk_src::HSIOPLL_VCO,
    clk_src::LDBPLL_VCO,
];

/// PLLs fracionários cujo bypass é gerenciado na entrada/saída de sleep.
pub const BYPASS_PLLS: [usize; 3] = [pll::AUDIO1, pll::AUDIO2, pll::VIDEO1];

/// Clock roots.
pub mod clk_root {
    pub const BUSAON: usize = 1;
    pub const M33: usize = 13;
    pub const ELE: usize = 44;

    pub const NUM: usize = 95;

    /// Campo DIV do CLOCK_ROOT_CONTROL
    pub const DIV_MASK: u32 = 0x0000_00FF;
    /// Campo MUX do CLOCK_ROOT_CONTROL (0 = OSC24M)
    pub const MUX_MASK: u32 = 0x0000_0300;
}

/// Roots movidos para o OSC24M quando o SYSPLL é desligado.
pub const SLEEP_ROOTS: [usize; 3] = [clk_root::ELE, clk_root::BUSAON, clk_root::M33];

// =============================================================================
// PERFORMANCE
// =============================================================================

/// Domínios de performance.
pub mod perf {
    pub const WAKEUP: usize = 1;

    /// Níveis
    pub const LVL_PRK: u32 = 0;
    pub const LVL_LOW: u32 = 1;
    pub const LVL_NOM: u32 = 2;
    pub const LVL_ODV: u32 = 3;
}

// =============================================================================
// SILÍCIO
// =============================================================================

/// Máscara de revisão no DIGPROG_DEVICE_ID.
pub const SI_REV_MASK: u32 = 0xF0;
/// Revisão Ax.
pub const SI_REV_A: u32 = 0x10;

// =============================================================================
// REGIÕES FIXAS DO ROM
// =============================================================================

pub const HANDOVER_BASE: usize = 0x2003_DC00;
pub const PASSOVER_BASE: usize = 0x2003_DE00;

/// Base do bloco SRC_GEN (registradores gerais retidos).
pub const SRC_GEN_BASE: usize = 0x5446_0000;
/// Offset do GPR1 dentro do SRC_GEN.
pub const SRC_GEN_GPR_OFFSET: usize = 0x100;
