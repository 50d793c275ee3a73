//! Arquivo: core/boot/handoff.rs
//!
//! Propósito: Estruturas escritas pelo ROM de boot antes do SM iniciar.
//! - Handover: lista de imagens carregadas (CPU, tipo, endereço).
//! - Passover: caminho de boot (modo, dispositivo, estágio, image set).
//!
//! Detalhes de Implementação:
//! - Layout little-endian fixo, decodificado campo a campo com
//!   shift/mask. NÃO usamos `repr(C)` sobre a memória do ROM: a fonte da
//!   verdade é o layout em bytes, não o layout da linguagem.
//! - Uma estrutura só é válida se assinatura, versão e tamanho baterem.
//!   Caso contrário é tratada como ausente (`NotSupported`).
//! - Imutáveis durante toda a vida do sistema.

// Handoff Data (ROM -> System Manager)

use crate::hal::soc;
use crate::sys::{SmError, SmResult};

// =============================================================================
// HANDOVER
// =============================================================================

pub const HANDOVER_BARKER: u32 = 0xC0FF_EE16;
pub const HANDOVER_VERSION: u32 = 0x2;
/// Tamanho da região reservada pelo ROM.
pub const HANDOVER_REGION_SIZE: usize = 0x100;
pub const HANDOVER_MAX_IMAGES: usize = 8;

const HANDOVER_HEADER_SIZE: usize = 24;
const IMAGE_ENTRY_SIZE: usize = 16;

/// Tamanho da estrutura de handover (cabeçalho + tabela de imagens).
pub const HANDOVER_STRUCT_SIZE: usize =
    HANDOVER_HEADER_SIZE + HANDOVER_MAX_IMAGES * IMAGE_ENTRY_SIZE;

// Offsets do cabeçalho
const HO_BARKER: usize = 0;
const HO_VERSION: usize = 4;
const HO_SIZE: usize = 8;
const HO_NUM: usize = 12;
const HO_FLAGS: usize = 16;

// Campos da palavra de flags de cada imagem
const IMG_CPU_SHIFT: u32 = 0;
const IMG_TYPE_SHIFT: u32 = 8;
const IMG_MSEL_SHIFT: u32 = 16;
const IMG_FLAGS_SHIFT: u32 = 24;

/// Tipo de imagem de um container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageType(pub u8);

impl ImageType {
    pub const EXEC: ImageType = ImageType(0x03);
    pub const DATA: ImageType = ImageType(0x04);
    pub const DDR_INIT: ImageType = ImageType(0x05);
    pub const ELE: ImageType = ImageType(0x06);
    pub const PROVISIONING: ImageType = ImageType(0x07);
    pub const DEK: ImageType = ImageType(0x08);
}

/// Uma entrada da lista de imagens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootImage {
    pub cpu: u8,
    pub kind: ImageType,
    /// Module select (configuração de LM).
    pub msel: u8,
    pub flags: u8,
    pub addr: u64,
}

impl BootImage {
    /// Decodifica a palavra empacotada `[flags|msel|type|cpu]`.
    pub fn decode(word: u32, addr: u64) -> Self {
        Self {
            cpu: ((word >> IMG_CPU_SHIFT) & 0xFF) as u8,
            kind: ImageType(((word >> IMG_TYPE_SHIFT) & 0xFF) as u8),
            msel: ((word >> IMG_MSEL_SHIFT) & 0xFF) as u8,
            flags: ((word >> IMG_FLAGS_SHIFT) & 0xFF) as u8,
            addr,
        }
    }

    /// Palavra empacotada equivalente.
    pub fn packed(&self) -> u32 {
        ((self.cpu as u32) << IMG_CPU_SHIFT)
            | ((self.kind.0 as u32) << IMG_TYPE_SHIFT)
            | ((self.msel as u32) << IMG_MSEL_SHIFT)
            | ((self.flags as u32) << IMG_FLAGS_SHIFT)
    }
}

#[inline]
fn le_u16(raw: &[u8], off: usize) -> u16 {
    u16::from_le_bytes([raw[off], raw[off + 1]])
}

#[inline]
fn le_u32(raw: &[u8], off: usize) -> u32 {
    u32::from_le_bytes([raw[off], raw[off + 1], raw[off + 2], raw[off + 3]])
}

#[inline]
fn le_u64(raw: &[u8], off: usize) -> u64 {
    (le_u32(raw, off) as u64) | ((le_u32(raw, off + 4) as u64) << 32)
}

/// Visão validada do handover.
#[derive(Debug, Clone, Copy)]
pub struct HandoverView<'a> {
    raw: &'a [u8],
}

impl<'a> HandoverView<'a> {
    /// Valida assinatura, versão e tamanho.
    pub fn parse(raw: &'a [u8]) -> SmResult<Self> {
        if raw.len() < HANDOVER_HEADER_SIZE {
            return Err(SmError::NotSupported);
        }
        if le_u32(raw, HO_BARKER) != HANDOVER_BARKER {
            return Err(SmError::NotSupported);
        }
        if le_u32(raw, HO_VERSION) != HANDOVER_VERSION {
            return Err(SmError::NotSupported);
        }
        if (le_u32(raw, HO_SIZE) as usize) < HANDOVER_STRUCT_SIZE
            || raw.len() < HANDOVER_STRUCT_SIZE
        {
            return Err(SmError::NotSupported);
        }

        Ok(Self { raw })
    }

    pub fn barker(&self) -> u32 {
        le_u32(self.raw, HO_BARKER)
    }

    pub fn version(&self) -> u32 {
        le_u32(self.raw, HO_VERSION)
    }

    pub fn size(&self) -> u32 {
        le_u32(self.raw, HO_SIZE)
    }

    /// Contagem declarada pelo ROM (pode exceder a tabela).
    pub fn declared_count(&self) -> u32 {
        le_u32(self.raw, HO_NUM)
    }

    /// Número de entradas utilizáveis (limitado à tabela).
    pub fn image_count(&self) -> usize {
        (self.declared_count() as usize).min(HANDOVER_MAX_IMAGES)
    }

    pub fn flags(&self) -> u32 {
        le_u32(self.raw, HO_FLAGS)
    }

    pub fn image(&self, index: usize) -> Option<BootImage> {
        if index >= self.image_count() {
            return None;
        }
        let off = HANDOVER_HEADER_SIZE + index * IMAGE_ENTRY_SIZE;
        Some(BootImage::decode(le_u32(self.raw, off), le_u64(self.raw, off + 8)))
    }

    pub fn images(&self) -> impl Iterator<Item = BootImage> + 'a {
        let view = *self;
        (0..view.image_count()).filter_map(move |i| view.image(i))
    }
}

/// Handover do ROM no endereço fixo.
///
/// # Safety
/// Só pode ser chamado no M33, com a OCRAM do ROM mapeada em
/// `HANDOVER_BASE`.
pub unsafe fn rom_handover() -> SmResult<HandoverView<'static>> {
    let raw = core::slice::from_raw_parts(soc::HANDOVER_BASE as *const u8, HANDOVER_REGION_SIZE);
    HandoverView::parse(raw)
}

// =============================================================================
// PASSOVER
// =============================================================================

pub const PASSOVER_TAG: u16 = 0x504F;
pub const PASSOVER_VERSION: u8 = 0x2;
pub const PASSOVER_REGION_SIZE: usize = 0x80;
pub const PASSOVER_STRUCT_SIZE: usize = 52;

// Offsets do passover
const PO_TAG: usize = 0;
const PO_SIZE: usize = 2;
const PO_VERSION: usize = 3;
const PO_BOOT_MODE: usize = 4;
const PO_CARD_ADDR_MODE: usize = 8;
const PO_BAD_BLKS_SET0: usize = 12;
const PO_AP_MU_ID: usize = 16;
const PO_BAD_BLKS_SET1: usize = 20;
const PO_BOOT_STAGE: usize = 24;
const PO_IMG_SET_SEL: usize = 25;
const PO_IMG_SET_END: usize = 28;
const PO_ROM_VERSION: usize = 32;
const PO_BOOT_DEV_STATE: usize = 36;
const PO_BOOT_DEV_INST: usize = 37;
const PO_BOOT_DEV_TYPE: usize = 38;
const PO_DEV_PAGE_SIZE: usize = 40;
const PO_CNT_HEADER_OFS: usize = 44;
const PO_IMG_OFS: usize = 48;

/// Estágio de boot (também usado no registrador retido de estágio).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BootStage {
    Serial = 0x5,
    Primary = 0x6,
    Secondary = 0x9,
    Recovery = 0xA,
}

impl BootStage {
    pub const ALL: [BootStage; 4] = [
        BootStage::Serial,
        BootStage::Primary,
        BootStage::Secondary,
        BootStage::Recovery,
    ];

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0x5 => Some(BootStage::Serial),
            0x6 => Some(BootStage::Primary),
            0x9 => Some(BootStage::Secondary),
            0xA => Some(BootStage::Recovery),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            BootStage::Serial => "serial",
            BootStage::Primary => "primary",
            BootStage::Secondary => "secondary",
            BootStage::Recovery => "recovery",
        }
    }
}

/// Modo de boot (pinos/fusíveis).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootMode {
    Fuse,
    UsbSerialDownload,
    Normal,
    InfiniteLoop,
    Test,
}

impl BootMode {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(BootMode::Fuse),
            1 => Some(BootMode::UsbSerialDownload),
            2 => Some(BootMode::Normal),
            3 => Some(BootMode::InfiniteLoop),
            4 => Some(BootMode::Test),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BootMode::Fuse => "fuse",
            BootMode::UsbSerialDownload => "USB serial download",
            BootMode::Normal => "normal",
            BootMode::InfiniteLoop => "infinite loop",
            BootMode::Test => "test",
        }
    }
}

/// Tipo de dispositivo de boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootDevice {
    Sd,
    Mmc,
    FlexspiNor,
    LpspiEeprom,
    FlexspiNand,
    Usb,
    Preload,
}

impl BootDevice {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x1 => Some(BootDevice::Sd),
            0x2 => Some(BootDevice::Mmc),
            0x4 => Some(BootDevice::FlexspiNor),
            0x6 => Some(BootDevice::LpspiEeprom),
            0x8 => Some(BootDevice::FlexspiNand),
            0xE => Some(BootDevice::Usb),
            0xF => Some(BootDevice::Preload),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BootDevice::Sd => "SD",
            BootDevice::Mmc => "MMC",
            BootDevice::FlexspiNor => "NOR FLEXSPI",
            BootDevice::LpspiEeprom => "EEPROM LPSPI",
            BootDevice::FlexspiNand => "NAND FLEXSPI",
            BootDevice::Usb => "USB",
            BootDevice::Preload => "preload",
        }
    }
}

/// Visão validada do passover.
#[derive(Debug, Clone, Copy)]
pub struct PassoverView<'a> {
    raw: &'a [u8],
}

impl<'a> PassoverView<'a> {
    pub fn parse(raw: &'a [u8]) -> SmResult<Self> {
        if raw.len() < 4 {
            return Err(SmError::NotSupported);
        }
        if le_u16(raw, PO_TAG) != PASSOVER_TAG {
            return Err(SmError::NotSupported);
        }
        if raw[PO_VERSION] != PASSOVER_VERSION {
            return Err(SmError::NotSupported);
        }
        if (raw[PO_SIZE] as usize) < PASSOVER_STRUCT_SIZE || raw.len() < PASSOVER_STRUCT_SIZE {
            return Err(SmError::NotSupported);
        }

        Ok(Self { raw })
    }

    pub fn tag(&self) -> u16 {
        le_u16(self.raw, PO_TAG)
    }

    pub fn size(&self) -> u8 {
        self.raw[PO_SIZE]
    }

    pub fn version(&self) -> u8 {
        self.raw[PO_VERSION]
    }

    pub fn boot_mode(&self) -> u32 {
        le_u32(self.raw, PO_BOOT_MODE)
    }

    pub fn card_addr_mode(&self) -> u32 {
        le_u32(self.raw, PO_CARD_ADDR_MODE)
    }

    /// Blocos ruins de NAND pulados nos image sets 0 e 1.
    pub fn bad_blocks(&self) -> (u32, u32) {
        (
            le_u32(self.raw, PO_BAD_BLKS_SET0),
            le_u32(self.raw, PO_BAD_BLKS_SET1),
        )
    }

    pub fn ap_mu_id(&self) -> u32 {
        le_u32(self.raw, PO_AP_MU_ID)
    }

    pub fn boot_stage(&self) -> u8 {
        self.raw[PO_BOOT_STAGE]
    }

    pub fn img_set_sel(&self) -> u8 {
        self.raw[PO_IMG_SET_SEL]
    }

    pub fn img_set_end(&self) -> u32 {
        le_u32(self.raw, PO_IMG_SET_END)
    }

    pub fn rom_version(&self) -> u32 {
        le_u32(self.raw, PO_ROM_VERSION)
    }

    pub fn boot_dev_state(&self) -> u8 {
        self.raw[PO_BOOT_DEV_STATE]
    }

    pub fn boot_dev_inst(&self) -> u8 {
        self.raw[PO_BOOT_DEV_INST]
    }

    pub fn boot_dev_type(&self) -> u8 {
        self.raw[PO_BOOT_DEV_TYPE]
    }

    pub fn dev_page_size(&self) -> u32 {
        le_u32(self.raw, PO_DEV_PAGE_SIZE)
    }

    pub fn cnt_header_ofs(&self) -> u32 {
        le_u32(self.raw, PO_CNT_HEADER_OFS)
    }

    pub fn img_ofs(&self) -> u32 {
        le_u32(self.raw, PO_IMG_OFS)
    }

    pub fn stage(&self) -> Option<BootStage> {
        BootStage::from_code(self.boot_stage() as u32)
    }

    pub fn mode(&self) -> Option<BootMode> {
        BootMode::from_code(self.boot_mode())
    }

    pub fn device(&self) -> Option<BootDevice> {
        BootDevice::from_code(self.boot_dev_type())
    }

    /// Instância do dispositivo numerada a partir de 1.
    ///
    /// O ROM reporta a instância 3 para o USB1.
    pub fn device_instance(&self) -> u32 {
        let inst = self.boot_dev_inst() as u32;
        if self.device() == Some(BootDevice::Usb) && inst == 3 {
            1
        } else {
            inst + 1
        }
    }
}

/// Passover do ROM no endereço fixo.
///
/// # Safety
/// Mesmas condições de `rom_handover`.
pub unsafe fn rom_passover() -> SmResult<PassoverView<'static>> {
    let raw = core::slice::from_raw_parts(soc::PASSOVER_BASE as *const u8, PASSOVER_REGION_SIZE);
    PassoverView::parse(raw)
}
