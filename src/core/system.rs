//! Arquivo: core/system.rs
//!
//! Propósito: Contexto do System Manager.
//! Reúne a plataforma, a configuração de sleep, a telemetria e a
//! correção de ROM capturada no init. Toda operação de sistema passa por
//! aqui; não há estado global mutável fora do console.
//!
//! Detalhes de Implementação:
//! - A sequência de sleep fica em `power::suspend`; o idle em
//!   `power::cpuidle`. Ambos estendem `SystemManager` com `impl` próprios.

use crate::core::boot::{stage, RomPatch};
use crate::core::config::BoardConfig;
use crate::core::debug::reason::REASON_POR;
use crate::core::debug::SysLog;
use crate::core::power::clock::clock_source_bypass;
use crate::core::power::state::{SleepConfigStore, SleepConfiguration};
use crate::hal::soc::{clk_src, mix};
use crate::hal::traits::{Platform, ShutdownRecord};
use crate::sys::SmResult;

pub struct SystemManager<P: Platform> {
    pub(crate) platform: P,
    pub(crate) config: SleepConfigStore,
    pub(crate) syslog: SysLog,
    pub(crate) rom_patch: RomPatch,
    pub(crate) board: BoardConfig,
}

impl<P: Platform> SystemManager<P> {
    pub fn new(platform: P, board: BoardConfig) -> Self {
        Self {
            platform,
            config: SleepConfigStore::new(),
            syslog: SysLog::new(),
            rom_patch: RomPatch::none(),
            board,
        }
    }

    /// Inicialização do núcleo de energia.
    pub fn init(&mut self) -> SmResult<()> {
        crate::kinfo!("(Init) Inicializando núcleo de energia...");

        self.capture_shutdown_record();

        self.platform.set_ele_handshake(true);

        // M7 mantém os clocks nos modos de sleep por padrão
        self.platform.force_m7_clocks_on();
        self.platform
            .set_pmic_standby_off_count(self.board.pmic_resume_ticks);

        // PLLs fracionários em bypass até serem usados
        clock_source_bypass(&mut self.platform, true, false);

        if !self.platform.source_enabled(clk_src::DRAMPLL_VCO) {
            crate::kdebug!("(Init) DRAM PLL desligado, desligando DDRMIX");
            self.platform.set_mix_power(mix::DDR, false)?;
        }

        self.rom_patch = RomPatch::capture(&self.platform);

        #[cfg(feature = "self_test")]
        {
            let summary = crate::core::test::run_core_tests();
            if summary.failed != 0 {
                crate::kwarn!("(Init) self-test com falhas: ", summary.failed);
            }
        }

        crate::kok!("(Init) Núcleo de energia pronto");
        Ok(())
    }

    /// Lê e limpa o motivo do SRC e carrega o registro da placa.
    ///
    /// O registro salvo pela placa tem prioridade; o motivo do SRC só
    /// entra quando não há registro válido e o reset não foi POR.
    fn capture_shutdown_record(&mut self) {
        let reason = self.platform.reset_reason();
        self.platform.clear_reset_reason(reason);

        let mut record = self.platform.load_shutdown_record();
        if reason != REASON_POR && record.is_none() {
            record = Some(ShutdownRecord::from_reason(reason));
        }

        if let Some(rec) = record {
            crate::kdebug!("(Init) motivo do shutdown anterior: ", rec.reason);
        }
        self.syslog.shutdown = record;
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn sleep_config(&self) -> SleepConfiguration {
        self.config.get()
    }

    /// Grava modo agregado e flags (sem validação).
    pub fn set_sleep_mode(&self, mode: u32, flags: u32) {
        self.config.set_sleep_mode(mode, flags);
    }

    pub fn syslog(&self) -> &SysLog {
        &self.syslog
    }

    pub fn rom_patch(&self) -> &RomPatch {
        &self.rom_patch
    }

    pub fn board(&self) -> &BoardConfig {
        &self.board
    }

    /// Registro do shutdown anterior capturado no init.
    pub fn shutdown_record(&self) -> Option<ShutdownRecord> {
        self.syslog.shutdown
    }

    /// Guarda o motivo deste shutdown para o próximo boot.
    ///
    /// O registro do boot corrente não muda.
    pub fn set_shutdown_record(&mut self, record: ShutdownRecord) {
        self.platform.save_shutdown_record(record);
    }

    /// Warm reset do sistema.
    pub fn system_reset(&mut self) {
        crate::kinfo!("(Boot) warm reset");
        self.platform.request_warm_reset();
    }

    /// Grava estágio e container e pede warm reset.
    ///
    /// Container inválido aborta sem resetar; o estágio já gravado
    /// permanece.
    pub fn stage_reset(&mut self, boot_stage: u32, container: u32) -> SmResult<()> {
        stage::set_stage(&mut self.platform, boot_stage);
        stage::set_container(&mut self.platform, container)?;

        crate::kinfo!("(Boot) warm reset para o estágio ", boot_stage);
        self.platform.request_warm_reset();
        Ok(())
    }
}
