//! System Definitions.
//!
//! Contém os tipos de status compartilhados entre o núcleo e os colaboradores.

pub mod error;


pub use error::{status_code, SmError, SmResult, StatusChain, SM_SUCCESS};
