//! # Power - Gerenciamento de Energia do Sistema
//!
//! - `state`: configuração de sleep pedida pelo LMM
//! - `depend`: bracket de máscaras de wake e dependências de mixes
//! - `clock`: bypass de PLLs, roots de sleep e SYSPLL
//! - `suspend`: sequência de sleep do sistema
//! - `cpuidle`: passo do idle loop

pub mod clock;
pub mod cpuidle;
pub mod depend;
pub mod state;
pub mod suspend;


pub use crate::hal::traits::SleepMode;
pub use depend::{MaskBracket, PowerDependency, WakeMaskSnapshot};
pub use state::{SleepConfigStore, SleepConfiguration, SleepFlags};
