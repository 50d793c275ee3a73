//! Drivers
//!
//! O System Manager só precisa do console serial neste núcleo; os demais
//! periféricos ficam atrás dos traits de `hal`.

pub mod serial;
