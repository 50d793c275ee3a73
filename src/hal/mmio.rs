//! Acesso MMIO aos registradores gerais retidos do SRC.
//!
//! O SRC_GEN expõe GPR1..GPR20 como palavras consecutivas a partir de
//! `SRC_GEN_GPR_OFFSET`. Os valores sobrevivem a warm reset e são lidos
//! pelo ROM no boot seguinte.

use core::ptr::NonNull;

use volatile::VolatilePtr;

use super::soc;
use super::traits::RetainedRegs;

/// Número de GPRs no bloco.
pub const NUM_GPR: usize = 20;

/// `RetainedRegs` sobre MMIO real.
pub struct MmioRetained {
    /// Endereço do GPR1.
    gpr1: NonNull<u32>,
}

// SAFETY: o bloco é único no SoC e o SM é single-core.
unsafe impl Send for MmioRetained {}

impl MmioRetained {
    /// Bloco SRC_GEN do SoC.
    ///
    /// # Safety
    /// Só pode ser usado no M33 com o SRC_GEN mapeado.
    pub unsafe fn src_gen() -> Self {
        let addr = soc::SRC_GEN_BASE + soc::SRC_GEN_GPR_OFFSET;
        Self::from_gpr1(addr as *mut u32)
    }

    /// Bloco a partir de um ponteiro para GPR1.
    ///
    /// # Safety
    /// `gpr1` deve apontar para `NUM_GPR` palavras válidas, alinhadas e
    /// exclusivas enquanto este valor existir.
    pub unsafe fn from_gpr1(gpr1: *mut u32) -> Self {
        Self {
            gpr1: NonNull::new_unchecked(gpr1),
        }
    }

    /// Ponteiro para o GPR `index`.
    ///
    /// `index` deve estar em `1..=NUM_GPR`; o núcleo só usa constantes.
    /// Fora da faixa, builds de debug param aqui e release ignora o acesso.
    fn reg(&self, index: usize) -> Option<VolatilePtr<'_, u32>> {
        debug_assert!((1..=NUM_GPR).contains(&index), "GPR fora da faixa");
        if !(1..=NUM_GPR).contains(&index) {
            return None;
        }
        // SAFETY: índice validado; invariantes do construtor
        Some(unsafe { VolatilePtr::new(NonNull::new_unchecked(self.gpr1.as_ptr().add(index - 1))) })
    }
}

impl RetainedRegs for MmioRetained {
    fn gpr(&self, index: usize) -> u32 {
        self.reg(index).map_or(0, |r| r.read())
    }

    fn set_gpr(&mut self, index: usize, value: u32) {
        if let Some(r) = self.reg(index) {
            r.write(value);
        }
    }
}
