//! Arquivo: core/boot/rom.rs
//!
//! Propósito: Consulta da lista de imagens do handover.
//!
//! Detalhes de Implementação:
//! - O cursor de varredura pertence ao chamador (`ImageCursor`), não é
//!   estado global. Duas varreduras independentes não interferem.
//! - Em silício Ax sem patch de ROM, o vetor de reset do M7 informado
//!   pelo ROM não é confiável. O valor programado no M7 é capturado no
//!   init (`RomPatch`) e substitui o endereço das imagens do M7.

use super::handoff::{BootImage, HandoverView, ImageType};
use crate::hal::soc::{cpu, mix, SI_REV_A, SI_REV_MASK};
use crate::hal::traits::{PowerControl, SiliconInfo};
use crate::sys::{SmError, SmResult};

/// Correção do vetor de reset do M7.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RomPatch {
    m7_reset_vector: Option<u64>,
}

impl RomPatch {
    pub const fn none() -> Self {
        Self {
            m7_reset_vector: None,
        }
    }

    pub const fn with_m7_vector(addr: u64) -> Self {
        Self {
            m7_reset_vector: Some(addr),
        }
    }

    /// Captura o vetor do M7 quando o silício exige a correção.
    pub fn capture<P: SiliconInfo + PowerControl>(platform: &P) -> Self {
        if platform.device_id() & SI_REV_MASK != SI_REV_A {
            return Self::none();
        }
        if platform.rom_patch_version() != 0 || !platform.mix_is_on(mix::M7) {
            return Self::none();
        }

        match platform.cpu_reset_vector(cpu::M7P) {
            Some(addr) => {
                crate::kdebug!("(Boot) vetor do M7 corrigido: ", addr);
                Self::with_m7_vector(addr)
            }
            None => Self::none(),
        }
    }

    pub fn m7_reset_vector(&self) -> Option<u64> {
        self.m7_reset_vector
    }

    /// Endereço efetivo de uma imagem destinada a `cpu_id`.
    pub fn apply(&self, cpu_id: u8, addr: u64) -> u64 {
        match self.m7_reset_vector {
            Some(vector) if cpu_id as usize == cpu::M7P => vector,
            _ => addr,
        }
    }
}

/// Cursor de varredura sobre as imagens do handover.
pub struct ImageCursor<'a> {
    view: HandoverView<'a>,
    patch: RomPatch,
    index: usize,
}

impl<'a> ImageCursor<'a> {
    pub fn new(view: HandoverView<'a>, patch: RomPatch) -> Self {
        Self {
            view,
            patch,
            index: 0,
        }
    }

    /// Posição da próxima entrada a examinar.
    pub fn position(&self) -> usize {
        self.index
    }

    /// Reinicia a varredura e retorna a primeira imagem do tipo.
    pub fn first_image(&mut self, kind: ImageType) -> SmResult<BootImage> {
        self.index = 0;
        self.next_image(kind)
    }

    /// Próxima imagem do tipo a partir do cursor.
    ///
    /// `NotFound` quando a lista acaba. O cursor fica no fim.
    pub fn next_image(&mut self, kind: ImageType) -> SmResult<BootImage> {
        let count = self.view.image_count();

        while self.index < count {
            let idx = self.index;
            self.index += 1;

            if let Some(mut image) = self.view.image(idx) {
                if image.kind == kind {
                    image.addr = self.patch.apply(image.cpu, image.addr);
                    return Ok(image);
                }
            }
        }

        Err(SmError::NotFound)
    }

    /// Iterador sobre as imagens restantes do tipo.
    pub fn scan(&mut self, kind: ImageType) -> ImageScan<'_, 'a> {
        ImageScan { cursor: self, kind }
    }
}

/// Varredura emprestada de um `ImageCursor` (ver `ImageCursor::scan`).
pub struct ImageScan<'c, 'a> {
    cursor: &'c mut ImageCursor<'a>,
    kind: ImageType,
}

impl Iterator for ImageScan<'_, '_> {
    type Item = BootImage;

    fn next(&mut self) -> Option<BootImage> {
        self.cursor.next_image(self.kind).ok()
    }
}

/// Entrada de boot de uma CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootEntry {
    pub reset_vector: u64,
    pub msel: u8,
    pub flags: u8,
}

/// Primeira imagem executável destinada a `cpu_id`.
pub fn resolve_cpu_boot_entry(cursor: &mut ImageCursor<'_>, cpu_id: u8) -> SmResult<BootEntry> {
    let mut image = cursor.first_image(ImageType::EXEC)?;

    loop {
        if image.cpu == cpu_id {
            return Ok(BootEntry {
                reset_vector: image.addr,
                msel: image.msel,
                flags: image.flags,
            });
        }
        image = cursor.next_image(ImageType::EXEC)?;
    }
}
