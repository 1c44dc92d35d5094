use super::opcodes::{self, Opcode};
use super::{
    AddressingMode, CPU, CPU_STACK_BASE, CPU_STACK_RESET, CPU_STATUS_RESET, CpuBusInterface,
    Flags, RESET_VECTOR, StepInfo, interrupts,
};
use crate::nes::diagnostics::Diagnostics;
use crate::trace_cpu_event;

impl<B: CpuBusInterface> CPU<B> {
    pub fn new(bus: B, diagnostics: Diagnostics) -> Self {
        Self {
            bus,
            register_a: 0,
            register_x: 0,
            register_y: 0,
            stack_pointer: CPU_STACK_RESET,
            status: Flags::from_bits_truncate(CPU_STATUS_RESET),
            program_counter: 0,
            cycles: 0,
            stall: 0,
            nmi_pending: false,
            diagnostics,
        }
    }

    /// Loads PC from the reset vector. Cycle count is left alone.
    pub fn reset(&mut self) {
        self.program_counter = self.read16(RESET_VECTOR);
        self.stack_pointer = CPU_STACK_RESET;
        self.set_flags(CPU_STATUS_RESET);
        self.nmi_pending = false;
    }

    pub fn read(&mut self, addr: u16) -> u8 {
        self.bus.cpu_bus_read(addr)
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        self.bus.cpu_bus_write(addr, value);
    }

    pub fn read16(&mut self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// 16-bit read where the high byte never leaves the page of `addr`.
    ///
    /// An original 6502 fetching a vector at $xxFF takes the MSB from $xx00.
    pub fn read16bug(&mut self, addr: u16) -> u16 {
        let wrapped = (addr & 0xFF00) | ((addr as u8).wrapping_add(1) as u16);
        let lo = self.read(addr) as u16;
        let hi = self.read(wrapped) as u16;
        (hi << 8) | lo
    }

    pub fn flags(&self) -> u8 {
        self.status.bits()
    }

    pub fn set_flags(&mut self, value: u8) {
        self.status = Flags::from_bits_truncate(value);
    }

    /// Latch an NMI to be taken before the next opcode fetch
    pub fn trigger_nmi(&mut self) {
        self.nmi_pending = true;
    }

    pub fn nmi_pending(&self) -> bool {
        self.nmi_pending
    }

    /// Executes a single instruction (or one stall cycle)
    ///
    /// # Returns
    ///
    /// The number of CPU cycles consumed. The bus has already been ticked by
    /// that many cycles when this returns.
    pub fn step(&mut self) -> u64 {
        if self.stall > 0 {
            self.stall -= 1;
            self.cycles += 1;
            self.finish_step(1);
            return 1;
        }

        let start_cycles = self.cycles;

        if self.nmi_pending {
            self.nmi_pending = false;
            trace_cpu_event!(
                self.diagnostics,
                "NMI at ${:04X} cyc={}",
                self.program_counter,
                self.cycles
            );
            self.nmi();
        }

        let code = self.read(self.program_counter);
        let opcode: &'static Opcode = opcodes::lookup(code);

        #[cfg(feature = "tracing")]
        self.trace_instruction(opcode);

        let (address, page_crossed) = self.operand_address(opcode.mode);

        self.program_counter = self.program_counter.wrapping_add(opcode.size as u16);
        self.cycles += opcode.cycles as u64;
        if page_crossed {
            self.cycles += opcode.page_cycles as u64;
        }

        let info = StepInfo {
            address,
            next_pc: self.program_counter,
            mode: opcode.mode,
        };
        self.execute(opcode.operation, &info);

        let elapsed = self.cycles - start_cycles;
        self.finish_step(elapsed);
        elapsed
    }

    fn finish_step(&mut self, elapsed: u64) {
        self.bus.tick(elapsed);
        if self.bus.poll_nmi() {
            self.trigger_nmi();
        }
    }

    /// Non-maskable interrupt, taken immediately
    pub fn nmi(&mut self) {
        self.push_interrupt_frame(interrupts::NMI);
        self.cycles += interrupts::NMI.cpu_cycles as u64;
    }

    /// Resolves the operand address for `mode`, reading operand bytes after PC.
    ///
    /// Returns `(address, page_crossed)`.
    pub(super) fn operand_address(&mut self, mode: AddressingMode) -> (u16, bool) {
        let operand = self.program_counter.wrapping_add(1);
        match mode {
            AddressingMode::Absolute => (self.read16(operand), false),
            AddressingMode::AbsoluteX => {
                let base = self.read16(operand);
                let addr = base.wrapping_add(self.register_x as u16);
                (addr, pages_differ(base, addr))
            }
            AddressingMode::AbsoluteY => {
                let base = self.read16(operand);
                let addr = base.wrapping_add(self.register_y as u16);
                (addr, pages_differ(base, addr))
            }
            AddressingMode::Accumulator | AddressingMode::Implied => (0, false),
            AddressingMode::Immediate => (operand, false),
            AddressingMode::IndexedIndirect => {
                let ptr = self.read(operand).wrapping_add(self.register_x); // Zero-page wrapping
                (self.read16bug(ptr as u16), false)
            }
            AddressingMode::Indirect => {
                let ptr = self.read16(operand);
                (self.read16bug(ptr), false)
            }
            AddressingMode::IndirectIndexed => {
                let ptr = self.read(operand) as u16;
                let base = self.read16bug(ptr);
                let addr = base.wrapping_add(self.register_y as u16);
                (addr, pages_differ(base, addr))
            }
            AddressingMode::Relative => {
                // Offset is relative to the PC after this instruction
                let offset = self.read(operand) as i8;
                let next_pc = self.program_counter.wrapping_add(2);
                (next_pc.wrapping_add_signed(offset as i16), false)
            }
            AddressingMode::ZeroPage => (self.read(operand) as u16, false),
            AddressingMode::ZeroPageX => {
                let base = self.read(operand);
                (base.wrapping_add(self.register_x) as u16, false)
            }
            AddressingMode::ZeroPageY => {
                let base = self.read(operand);
                (base.wrapping_add(self.register_y) as u16, false)
            }
        }
    }

    pub(super) fn push(&mut self, value: u8) {
        let addr = CPU_STACK_BASE | self.stack_pointer as u16;
        self.write(addr, value);
        self.stack_pointer = self.stack_pointer.wrapping_sub(1);
    }

    pub(super) fn pull(&mut self) -> u8 {
        self.stack_pointer = self.stack_pointer.wrapping_add(1);
        let addr = CPU_STACK_BASE | self.stack_pointer as u16;
        self.read(addr)
    }

    pub(super) fn push16(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    pub(super) fn pull16(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        (hi << 8) | lo
    }

    /// Taken branches cost 1 cycle, plus 1 more when landing on another page
    pub(super) fn add_branch_cycles(&mut self, info: &StepInfo) {
        self.cycles += 1;
        if pages_differ(info.next_pc, info.address) {
            self.cycles += 1;
        }
    }

    pub(super) fn update_zero_and_negative_flags(&mut self, result: u8) {
        self.status.set(Flags::ZERO, result == 0);
        self.status.set(Flags::NEGATIVE, result & 0b1000_0000 != 0);
    }
}

#[inline]
pub(super) fn pages_differ(a: u16, b: u16) -> bool {
    a & 0xFF00 != b & 0xFF00
}
