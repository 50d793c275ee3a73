//! Warden - núcleo de energia do System Manager (i.MX95).
//!
//! Ponto central de exportação dos módulos.
//!
//! - `core`: sequência de sleep, idle, metadados de boot do ROM
//! - `hal`: traits do SoC que a placa implementa
//! - `drivers`: console serial
//! - `sys`: códigos de status
//! - `klib`: self-test no target

#![cfg_attr(not(test), no_std)]

// --- Baixo nível ---
pub mod drivers;
pub mod hal;

// --- Núcleo ---
pub mod core;
pub mod klib;
pub mod sys;

pub use crate::core::system::SystemManager;
pub use crate::core::power::{SleepConfiguration, SleepFlags, SleepMode};
pub use crate::hal::traits::ShutdownRecord;
pub use crate::sys::{SmError, SmResult};
