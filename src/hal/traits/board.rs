//! Hooks da placa na sequência de sleep.
//!
//! Todos recebem o modo agregado e as flags brutos gravados no store.
//! Implementações padrão não fazem nada.

pub trait BoardHooks {
    fn sleep_prepare(&mut self, _mode: u32, _flags: u32) {}

    fn sleep_enter(&mut self, _mode: u32, _flags: u32) {}

    fn sleep_exit(&mut self, _mode: u32, _flags: u32) {}

    fn sleep_unprepare(&mut self, _mode: u32, _flags: u32) {}
}
