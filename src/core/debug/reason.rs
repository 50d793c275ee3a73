//! Nomes dos motivos de reset/shutdown.

use crate::sys::{SmError, SmResult};

pub const REASON_CM33_LOCKUP: u32 = 0;
pub const REASON_SW: u32 = 16;
pub const REASON_SM_ERR: u32 = 17;
pub const REASON_POR: u32 = 31;

static REASON_NAMES: [&str; 32] = [
    "cm33_lockup",
    "cm33_swreq",
    "cm7_lockup",
    "cm7_swreq",
    "fccu",
    "jtag_sw",
    "ele",
    "tempsense",
    "wdog1",
    "wdog2",
    "wdog3",
    "wdog4",
    "wdog5",
    "jtag",
    "cm33_exc",
    "bbm",
    "sw",
    "sm_err",
    "fusa_sreco",
    "pmic",
    "unused5",
    "unused6",
    "unused7",
    "unused8",
    "unused9",
    "unused10",
    "unused11",
    "unused12",
    "unused13",
    "unused14",
    "unused15",
    "por",
];

/// Nome do motivo de reset; `NotFound` para códigos fora da tabela.
pub fn reset_reason_name(reason: u32) -> SmResult<&'static str> {
    REASON_NAMES
        .get(reason as usize)
        .copied()
        .ok_or(SmError::NotFound)
}
