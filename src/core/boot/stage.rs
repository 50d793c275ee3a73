//! Estágio de boot e container retidos para o próximo boot.
//!
//! O ROM lê estes GPRs após um warm reset para escolher o caminho de boot
//! e o container a carregar.

use crate::hal::traits::RetainedRegs;
use crate::sys::{SmError, SmResult};

pub const GPR_CONTAINER: usize = 15;
pub const GPR_STAGE: usize = 16;

const STAGE_MASK: u32 = 0x0F00_0000;
const STAGE_SHIFT: u32 = 24;

/// Tags de seleção de container reconhecidas pelo ROM.
pub const CONTAINER_TAGS: [u32; 2] = [0x55CC, 0xAA33];

/// Grava o estágio no campo [27:24] do GPR de estágio.
///
/// Os demais bits do registrador são preservados.
pub fn set_stage<R: RetainedRegs>(regs: &mut R, stage: u32) {
    let value = regs.gpr(GPR_STAGE) & !STAGE_MASK;
    regs.set_gpr(GPR_STAGE, value | ((stage << STAGE_SHIFT) & STAGE_MASK));
}

pub fn stage<R: RetainedRegs>(regs: &R) -> u32 {
    (regs.gpr(GPR_STAGE) & STAGE_MASK) >> STAGE_SHIFT
}

/// Seleciona o container (0 ou 1) do próximo boot.
pub fn set_container<R: RetainedRegs>(regs: &mut R, container: u32) -> SmResult<()> {
    let tag = CONTAINER_TAGS
        .get(container as usize)
        .copied()
        .ok_or(SmError::InvalidParameters)?;

    regs.set_gpr(GPR_CONTAINER, tag);
    Ok(())
}

/// Valor bruto do GPR de container.
pub fn container<R: RetainedRegs>(regs: &R) -> u32 {
    regs.gpr(GPR_CONTAINER)
}

/// Índice do container selecionado, se a tag for reconhecida.
pub fn container_index<R: RetainedRegs>(regs: &R) -> Option<u32> {
    let raw = container(regs);
    CONTAINER_TAGS
        .iter()
        .position(|&tag| tag == raw)
        .map(|i| i as u32)
}
