// =============================================================================
// SYSTEM MANAGER LOGGING - ZERO OVERHEAD
// =============================================================================
//
// Logging do núcleo de energia com custo ZERO em release.
//
// ARQUITETURA:
// - Usa features do Cargo para filtragem em tempo de compilação
// - Com feature "no_logs", TODOS os macros viram expressões vazias
// - SEM core::fmt - a sequência de suspend roda com IRQs desabilitadas e
//   não pode pagar o custo de formatação
// - Escreve APENAS no console serial (`drivers::serial`)
//
// NÍVEIS DE LOG (do mais crítico ao menos):
// - ERROR: Falhas que deixam hardware em estado inconsistente
// - WARN:  Passos recusados pelo hardware mas toleráveis
// - INFO:  Eventos de fluxo (init, entrada/saída de sleep)
// - DEBUG: Decisões da sequência (depth, active sleep, domínios)
// - TRACE: Cada passo individual
//
// USO:
//   kinfo!("(Sleep) Entrando em SUSPEND");     // Apenas string
//   kdebug!("(Rom) imageIdx=", idx);           // String + hex
//
// Convenção de tag: (Sleep), (Rom), (Init), (Boot), (Test).
//
// =============================================================================

pub const P_ERROR: &str = "[ERRO] ";
pub const P_WARN: &str = "[WARN] ";
pub const P_INFO: &str = "[INFO] ";
pub const P_DEBUG: &str = "[DEBG] ";
pub const P_TRACE: &str = "[TRAC] ";

/// Emite uma linha com prefixo (usado pelos macros).
#[doc(hidden)]
#[inline(never)]
pub fn line(prefix: &str, msg: &str) {
    crate::drivers::serial::emit_str(prefix);
    crate::drivers::serial::emit_str(msg);
    crate::drivers::serial::emit_nl();
}

/// Emite uma linha com prefixo e valor hex.
#[doc(hidden)]
#[inline(never)]
pub fn line_hex(prefix: &str, msg: &str, value: u64) {
    crate::drivers::serial::emit_str(prefix);
    crate::drivers::serial::emit_str(msg);
    crate::drivers::serial::emit_hex(value);
    crate::drivers::serial::emit_nl();
}

// =============================================================================
// NÍVEL ERROR
// =============================================================================

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kerror {
    ($msg:expr) => {{
        $crate::core::logging::line($crate::core::logging::P_ERROR, $msg);
    }};
    ($msg:expr, $val:expr) => {{
        $crate::core::logging::line_hex($crate::core::logging::P_ERROR, $msg, $val as u64);
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kerror {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// NÍVEL WARN
// =============================================================================

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kwarn {
    ($msg:expr) => {{
        $crate::core::logging::line($crate::core::logging::P_WARN, $msg);
    }};
    ($msg:expr, $val:expr) => {{
        $crate::core::logging::line_hex($crate::core::logging::P_WARN, $msg, $val as u64);
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kwarn {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// NÍVEL INFO
// =============================================================================

#[cfg(not(any(feature = "no_logs", feature = "log_error")))]
#[macro_export]
macro_rules! kinfo {
    ($msg:expr) => {{
        $crate::core::logging::line($crate::core::logging::P_INFO, $msg);
    }};
    ($msg:expr, $val:expr) => {{
        $crate::core::logging::line_hex($crate::core::logging::P_INFO, $msg, $val as u64);
    }};
}

#[cfg(any(feature = "no_logs", feature = "log_error"))]
#[macro_export]
macro_rules! kinfo {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// NÍVEL DEBUG
// =============================================================================

#[cfg(any(feature = "log_trace", feature = "log_debug"))]
#[macro_export]
macro_rules! kdebug {
    ($msg:expr) => {{
        $crate::core::logging::line($crate::core::logging::P_DEBUG, $msg);
    }};
    ($msg:expr, $val:expr) => {{
        $crate::core::logging::line_hex($crate::core::logging::P_DEBUG, $msg, $val as u64);
    }};
}

#[cfg(not(any(feature = "log_trace", feature = "log_debug")))]
#[macro_export]
macro_rules! kdebug {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// NÍVEL TRACE
// =============================================================================

#[cfg(feature = "log_trace")]
#[macro_export]
macro_rules! ktrace {
    ($msg:expr) => {{
        $crate::core::logging::line($crate::core::logging::P_TRACE, $msg);
    }};
    ($msg:expr, $val:expr) => {{
        $crate::core::logging::line_hex($crate::core::logging::P_TRACE, $msg, $val as u64);
    }};
}

#[cfg(not(feature = "log_trace"))]
#[macro_export]
macro_rules! ktrace {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE STATUS (OK/FAIL)
// =============================================================================

/// kok! - Log de sucesso.
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kok {
    ($msg:expr) => {{
        $crate::core::logging::line("[OK] ", $msg);
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kok {
    ($($t:tt)*) => {{}};
}

/// kfail! - Log de falha (self tests).
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kfail {
    ($msg:expr) => {{
        $crate::core::logging::line("[FAIL] ", $msg);
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kfail {
    ($($t:tt)*) => {{}};
}
