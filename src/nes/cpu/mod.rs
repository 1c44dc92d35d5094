use crate::nes::bus::nes_bus::NesBus;
use crate::nes::diagnostics::Diagnostics;
use bitflags::bitflags;

mod instruction_handlers;
pub mod interrupts;
pub mod opcodes;
mod processor;
mod trace;

#[cfg(test)]
mod processor_tests;

pub const CPU_STACK_BASE: u16 = 0x0100;
pub const CPU_STACK_RESET: u8 = 0xFD;
pub const CPU_STATUS_RESET: u8 = 0b0010_0100;
pub const RESET_VECTOR: u16 = 0xFFFC;

bitflags! {
    /* https://www.nesdev.org/wiki/Status_flags
        7  bit  0
        ---- ----
        NV1B DIZC
        |||| ||||
        |||| |||+- Carry
        |||| ||+-- Zero
        |||| |+--- Interrupt Disable
        |||| +---- Decimal
        |||+------ (No CPU effect; see: the B flag)
        ||+------- (No CPU effect; always pushed as 1)
        |+-------- Overflow
        +--------- Negative
     */
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Flags: u8 {
        const CARRY             = 1<<0;
        const ZERO              = 1<<1;
        const INTERRUPT_DISABLE = 1<<2;
        const DECIMAL_MODE      = 1<<3;
        const BREAK             = 1<<4;
        const BREAK2            = 1<<5;
        const OVERFLOW          = 1<<6;
        const NEGATIVE          = 1<<7;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Accumulator,
    Immediate,
    Implied,
    IndexedIndirect, // (zp,X)
    Indirect,        // Only JMP supports this mode
    IndirectIndexed, // (zp),Y
    Relative,        // The branch instructions exclusively use this mode
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
}

/// Decoded operand handed from the fetch stage to an instruction handler
#[derive(Debug, Clone, Copy)]
pub struct StepInfo {
    pub address: u16,
    pub next_pc: u16,
    pub mode: AddressingMode,
}

/// The CPU's view of the system bus
pub trait CpuBusInterface {
    fn cpu_bus_read(&mut self, addr: u16) -> u8;
    fn cpu_bus_write(&mut self, addr: u16, value: u8);

    /// Called after every step with the number of CPU cycles it consumed
    fn tick(&mut self, _cycles: u64) {}

    /// Returns `true` once per NMI raised on the bus since the last poll
    fn poll_nmi(&mut self) -> bool {
        false
    }
}

pub struct CPU<B: CpuBusInterface = NesBus> {
    pub bus: B,

    pub register_a: u8,
    pub register_x: u8,
    pub register_y: u8,
    pub stack_pointer: u8,
    pub status: Flags,
    pub program_counter: u16,

    /// Total cycles elapsed since power-on
    pub cycles: u64,

    /// Idle cycles to burn before the next instruction
    pub stall: u64,

    nmi_pending: bool,
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    diagnostics: Diagnostics,
}
