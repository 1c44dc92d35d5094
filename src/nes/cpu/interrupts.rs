// See: https://www.nesdev.org/wiki/CPU_interrupts

use super::{CPU, CpuBusInterface, Flags};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InterruptType {
    Nmi, // Non-maskable interrupt (raised by the PPU entering vblank)
    Brk, // Software-defined interrupt
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Interrupt {
    pub interrupt_type: InterruptType,
    pub vector_addr: u16,
    pub b_flag_mask: u8,
    pub cpu_cycles: u8,
}

pub const NMI: Interrupt = Interrupt {
    interrupt_type: InterruptType::Nmi,
    vector_addr: 0xFFFA, // NMI address vector lives at $FFFA
    b_flag_mask: 0b0010_0000,
    cpu_cycles: 7,
};

// BRK's 7 cycles are charged through the opcode table
pub const BRK: Interrupt = Interrupt {
    interrupt_type: InterruptType::Brk,
    vector_addr: 0xFFFE, // brk address vector lives at $FFFE
    b_flag_mask: 0b0011_0000,
    cpu_cycles: 7,
};

impl<B: CpuBusInterface> CPU<B> {
    /// Pushes PC and the status byte, masks IRQs and jumps through the vector
    pub(super) fn push_interrupt_frame(&mut self, interrupt: Interrupt) {
        self.push16(self.program_counter);

        let mut status_flags = self.status;
        status_flags.set(Flags::BREAK, interrupt.b_flag_mask & 0b0001_0000 != 0);
        status_flags.set(Flags::BREAK2, interrupt.b_flag_mask & 0b0010_0000 != 0);
        self.push(status_flags.bits());

        self.status.insert(Flags::INTERRUPT_DISABLE);
        self.program_counter = self.read16(interrupt.vector_addr);
    }
}
