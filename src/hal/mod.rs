//! Hardware Abstraction Layer (HAL)
//!
//! O núcleo de energia só enxerga o SoC através das traits de `traits`.
//! A placa fornece um tipo que implementa todas (`Platform`).
//!
//! - `soc`: índices e endereços do i.MX95
//! - `mmio`: registradores retidos do SRC via MMIO
//! - `sim`: plataforma simulada para testes de host

pub mod mmio;
pub mod soc;
pub mod traits;

#[cfg(test)]
pub(crate) mod sim;


pub use traits::*;
