//! # Boot - Metadados do ROM
//!
//! Handover/passover escritos pelo ROM e o estado retido que o SM grava
//! para o próximo boot.

pub mod handoff;
pub mod rom;
pub mod stage;


pub use handoff::{
    BootDevice, BootImage, BootMode, BootStage, HandoverView, ImageType, PassoverView,
};
pub use rom::{resolve_cpu_boot_entry, BootEntry, ImageCursor, ImageScan, RomPatch};
