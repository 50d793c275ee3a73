//! Traits do HAL
//!
//! Define as interfaces abstratas para o hardware que o núcleo de energia
//! manipula. A placa fornece um único tipo que implementa todas elas.

pub mod aon;
pub mod board;
pub mod clock;
pub mod cpu;
pub mod gpc;
pub mod power;
pub mod silicon;
pub mod timer;

pub use aon::*;
pub use board::*;
pub use clock::*;
pub use cpu::*;
pub use gpc::*;
pub use power::*;
pub use silicon::*;
pub use timer::*;

/// Plataforma completa do System Manager.
pub trait Platform:
    SupervisorCpu
    + CoreControl
    + PowerControl
    + ClockControl
    + AonControl
    + BoardHooks
    + Timer
    + SiliconInfo
    + RetainedRegs
    + ResetControl
{
}

impl<T> Platform for T where
    T: SupervisorCpu
        + CoreControl
        + PowerControl
        + ClockControl
        + AonControl
        + BoardHooks
        + Timer
        + SiliconInfo
        + RetainedRegs
        + ResetControl
{
}
