// =============================================================================
// SERIAL CONSOLE - ZERO OVERHEAD
// =============================================================================
//
// Console serial de debug do System Manager (LPUART da placa).
//
// ARQUITETURA:
// O núcleo não conhece o UART concreto. A placa registra um `UartTx`
// estático no boot via `attach()`; até lá (ou em builds de host) toda a
// saída é descartada.
// - SEM core::fmt - Apenas strings literais e valores imediatos
// - SEM alocação
// - spin::Mutex protege o sink, mas só com try_lock: o console também é
//   usado por handlers de interrupção do SM. Um handler que loga enquanto
//   o contexto principal está no meio de uma escrita perde a própria saída
//   em vez de girar para sempre no único core.
//
// FUNÇÕES DISPONÍVEIS:
// - emit(byte)       : Envia um byte
// - emit_str(s)      : Envia string
// - emit_hex(v)      : Envia u64 em hexadecimal (sem zeros à esquerda)
// - emit_nl()        : Envia newline (\r\n)
//
// =============================================================================

use spin::Mutex;

/// Transmissor de bytes fornecido pela placa.
pub trait UartTx: Send {
    /// Envia um byte, bloqueando até o FIFO aceitar.
    fn write_byte(&mut self, byte: u8);
}

static CONSOLE: Mutex<Option<&'static mut dyn UartTx>> = Mutex::new(None);

/// Registra o transmissor do console. Substitui o anterior.
pub fn attach(tx: &'static mut dyn UartTx) {
    *CONSOLE.lock() = Some(tx);
}

/// Remove o transmissor (saída volta a ser descartada).
pub fn detach() -> Option<&'static mut dyn UartTx> {
    CONSOLE.lock().take()
}

// =============================================================================
// FUNÇÕES DE ESCRITA - CORE
// =============================================================================

/// Escreve `bytes` de uma vez. Console ocupado: descarta.
#[inline(always)]
fn write_bytes(bytes: &[u8]) {
    if let Some(mut console) = CONSOLE.try_lock() {
        if let Some(tx) = console.as_mut() {
            for &b in bytes {
                tx.write_byte(b);
            }
        }
    }
}

/// Envia um único byte.
#[inline]
pub fn emit(byte: u8) {
    write_bytes(&[byte]);
}

/// Envia uma string (lock adquirido uma única vez).
#[inline(never)]
pub fn emit_str(s: &str) {
    write_bytes(s.as_bytes());
}

/// Envia uma nova linha (CRLF).
#[inline(never)]
pub fn emit_nl() {
    write_bytes(b"\r\n");
}

// =============================================================================
// FUNÇÕES DE ESCRITA - FORMATAÇÃO NUMÉRICA
// =============================================================================

/// Envia um valor u64 em hexadecimal.
///
/// Formato de saída: `0x` seguido dos dígitos significativos (`0x0` para zero).
#[inline(never)]
pub fn emit_hex(value: u64) {
    let mut buf = [0u8; 18];
    let len = format_hex(value, &mut buf);
    write_bytes(&buf[..len]);
}

#[inline(always)]
fn nibble_to_ascii(nibble: u8) -> u8 {
    if nibble < 10 {
        b'0' + nibble
    } else {
        b'A' + nibble - 10
    }
}

/// Escreve `value` como `0x...` em `buf`, retorna o número de bytes.
pub(crate) fn format_hex(value: u64, buf: &mut [u8; 18]) -> usize {
    buf[0] = b'0';
    buf[1] = b'x';

    let digits = if value == 0 {
        1
    } else {
        ((64 - value.leading_zeros() + 3) / 4) as usize
    };

    for i in 0..digits {
        let shift = (digits - 1 - i) * 4;
        buf[2 + i] = nibble_to_ascii(((value >> shift) & 0xF) as u8);
    }
    2 + digits
}
