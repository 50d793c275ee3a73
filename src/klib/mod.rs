//! Biblioteca de suporte do System Manager.

pub mod test_framework;
