use super::opcodes;
use super::{CPU, CpuBusInterface};

impl<B: CpuBusInterface> CPU<B> {
    /// One line of disassembly for the instruction at `pc`, e.g. `C000  4C F5 C5  JMP`
    ///
    /// Reads the operand bytes through the bus, so only point this at ROM or RAM.
    pub fn disassemble(&mut self, pc: u16) -> String {
        let opcode = opcodes::lookup(self.read(pc));
        let bytes = (0..opcode.size.max(1) as u16)
            .map(|i| format!("{:02X}", self.read(pc.wrapping_add(i))))
            .collect::<Vec<_>>()
            .join(" ");
        format!("{:04X}  {:<8}  {}", pc, bytes, opcode.name)
    }

    #[cfg(feature = "tracing")]
    pub(super) fn trace_instruction(&mut self, opcode: &opcodes::Opcode) {
        if !self.diagnostics.enabled(log::Level::Trace) {
            return;
        }
        let line = self.disassemble(self.program_counter);
        self.diagnostics.trace(format_args!(
            "{}  A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}{}",
            line,
            self.register_a,
            self.register_x,
            self.register_y,
            self.flags(),
            self.stack_pointer,
            self.cycles,
            if opcode.operation.is_undocumented() { " (undocumented)" } else { "" },
        ));
    }
}
