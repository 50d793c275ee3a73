//! Core Module
//!
//! Lógica central do System Manager, independente da placa: sequência de
//! sleep, metadados de boot do ROM e diagnóstico.

pub mod boot;
pub mod config;
pub mod debug;
pub mod logging;
pub mod power;
pub mod system;


pub use system::SystemManager;
