//! Trait dos controles globais always-on (GPC_GLOBAL, BLK_CTRL_S_AONMIX,
//! FRO e SYSCTR).

/// Linhas de handshake low-power entre SM/ELE e o GPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeLine {
    Sm,
    Sm2,
    Ele,
    Ele2,
}

impl HandshakeLine {
    pub const ALL: [HandshakeLine; 4] = [
        HandshakeLine::Sm,
        HandshakeLine::Sm2,
        HandshakeLine::Ele,
        HandshakeLine::Ele2,
    ];
}

pub trait AonControl {
    fn handshake(&self, line: HandshakeLine) -> u32;

    fn set_handshake(&mut self, line: HandshakeLine, value: u32);

    /// `true` permite que o hardware desligue o OSC24M no sleep.
    fn set_osc24m_gating(&mut self, gate: bool);

    /// Protocolo PMIC_STBY controlado pelo GPC.
    fn set_pmic_standby(&mut self, enabled: bool);

    /// Contagem de ticks de resume do PMIC (STBY_OFF_CNT).
    fn set_pmic_standby_off_count(&mut self, ticks: u32);

    fn set_efuse_power_down(&mut self, power_down: bool);

    /// Oscilador FRO.
    fn set_fro_enabled(&mut self, enabled: bool);

    /// Modo de frequência do system counter (bloqueante).
    fn set_sysctr_low_freq(&mut self, low: bool);

    /// Handshake GPC-ELE.
    fn set_ele_handshake(&mut self, enabled: bool);

    /// Mantém CORECLK e HCLK do M7 ligados nos modos de sleep (M7_CFG).
    fn force_m7_clocks_on(&mut self);
}
