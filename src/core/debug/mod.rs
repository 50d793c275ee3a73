//! Arquivo: core/debug/mod.rs
//!
//! Propósito: Diagnóstico do System Manager.
//!
//! Módulos contidos:
//! - `syslog`: Registro de telemetria de sleep.
//! - `reason`: Nomes dos motivos de reset.

pub mod reason;
pub mod syslog;


pub use reason::reset_reason_name;
pub use syslog::{elapsed_usec, SleepRecord, SysLog};
