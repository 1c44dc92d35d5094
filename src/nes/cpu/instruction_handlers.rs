use super::opcodes::Operation;
use super::{AddressingMode, CPU, CpuBusInterface, Flags, StepInfo, interrupts};

impl<B: CpuBusInterface> CPU<B> {
    /// Runs the handler for `operation`. PC and base cycles are already updated.
    pub(super) fn execute(&mut self, operation: Operation, info: &StepInfo) {
        match operation {
            // Loads, stores, transfers
            Operation::Lda => self.lda(info),
            Operation::Ldx => self.ldx(info),
            Operation::Ldy => self.ldy(info),
            Operation::Sta => self.write(info.address, self.register_a),
            Operation::Stx => self.write(info.address, self.register_x),
            Operation::Sty => self.write(info.address, self.register_y),
            Operation::Tax => self.set_register_x(self.register_a),
            Operation::Tay => self.set_register_y(self.register_a),
            Operation::Tsx => self.set_register_x(self.stack_pointer),
            Operation::Txa => self.set_register_a(self.register_x),
            Operation::Txs => self.stack_pointer = self.register_x,
            Operation::Tya => self.set_register_a(self.register_y),

            // Flags
            Operation::Clc => self.status.remove(Flags::CARRY),
            Operation::Cld => self.status.remove(Flags::DECIMAL_MODE),
            Operation::Cli => self.status.remove(Flags::INTERRUPT_DISABLE),
            Operation::Clv => self.status.remove(Flags::OVERFLOW),
            Operation::Sec => self.status.insert(Flags::CARRY),
            Operation::Sed => self.status.insert(Flags::DECIMAL_MODE),
            Operation::Sei => self.status.insert(Flags::INTERRUPT_DISABLE),

            // Increments and decrements
            Operation::Inc => self.inc(info),
            Operation::Inx => self.set_register_x(self.register_x.wrapping_add(1)),
            Operation::Iny => self.set_register_y(self.register_y.wrapping_add(1)),
            Operation::Dec => self.dec(info),
            Operation::Dex => self.set_register_x(self.register_x.wrapping_sub(1)),
            Operation::Dey => self.set_register_y(self.register_y.wrapping_sub(1)),

            // Stack
            Operation::Pha => self.push(self.register_a),
            Operation::Pla => {
                let value = self.pull();
                self.set_register_a(value);
            }
            Operation::Php => self.php(),
            Operation::Plp => self.plp(),

            // Arithmetic and logic
            Operation::Adc => self.adc(info),
            Operation::Sbc => self.sbc(info),
            Operation::And => {
                let value = self.read(info.address);
                self.set_register_a(self.register_a & value);
            }
            Operation::Eor => {
                let value = self.read(info.address);
                self.set_register_a(self.register_a ^ value);
            }
            Operation::Ora => {
                let value = self.read(info.address);
                self.set_register_a(self.register_a | value);
            }
            Operation::Bit => self.bit(info),
            Operation::Cmp => self.compare(info, self.register_a),
            Operation::Cpx => self.compare(info, self.register_x),
            Operation::Cpy => self.compare(info, self.register_y),

            // Shifts and rotates
            Operation::Asl => self.asl(info),
            Operation::Lsr => self.lsr(info),
            Operation::Rol => self.rol(info),
            Operation::Ror => self.ror(info),

            // Jumps and subroutines
            Operation::Jmp => self.program_counter = info.address,
            Operation::Jsr => self.jsr(info),
            Operation::Rts => self.rts(),
            Operation::Rti => self.rti(),
            Operation::Brk => self.brk(),

            // Branches
            Operation::Bcc => self.branch(info, !self.status.contains(Flags::CARRY)),
            Operation::Bcs => self.branch(info, self.status.contains(Flags::CARRY)),
            Operation::Bne => self.branch(info, !self.status.contains(Flags::ZERO)),
            Operation::Beq => self.branch(info, self.status.contains(Flags::ZERO)),
            Operation::Bpl => self.branch(info, !self.status.contains(Flags::NEGATIVE)),
            Operation::Bmi => self.branch(info, self.status.contains(Flags::NEGATIVE)),
            Operation::Bvc => self.branch(info, !self.status.contains(Flags::OVERFLOW)),
            Operation::Bvs => self.branch(info, self.status.contains(Flags::OVERFLOW)),

            Operation::Nop => {}

            // Undocumented opcodes only consume their size and cycles
            Operation::Ahx
            | Operation::Alr
            | Operation::Anc
            | Operation::Arr
            | Operation::Axs
            | Operation::Dcp
            | Operation::Isc
            | Operation::Kil
            | Operation::Las
            | Operation::Lax
            | Operation::Rla
            | Operation::Rra
            | Operation::Sax
            | Operation::Shx
            | Operation::Shy
            | Operation::Slo
            | Operation::Sre
            | Operation::Tas
            | Operation::Xaa => {}
        }
    }

    fn lda(&mut self, info: &StepInfo) {
        let param = self.read(info.address);
        self.set_register_a(param);
    }

    fn ldx(&mut self, info: &StepInfo) {
        let param = self.read(info.address);
        self.set_register_x(param);
    }

    fn ldy(&mut self, info: &StepInfo) {
        let param = self.read(info.address);
        self.set_register_y(param);
    }

    fn php(&mut self) {
        // PHP always pushes with the B flag set
        self.push(self.flags() | Flags::BREAK.bits());
    }

    fn plp(&mut self) {
        let value = self.pull();
        self.restore_flags(value);
    }

    /// B is not a real register bit, and bit 5 always reads back as 1
    fn restore_flags(&mut self, value: u8) {
        self.set_flags((value & !Flags::BREAK.bits()) | Flags::BREAK2.bits());
    }

    fn inc(&mut self, info: &StepInfo) {
        let value = self.read(info.address).wrapping_add(1);
        self.write(info.address, value);
        self.update_zero_and_negative_flags(value);
    }

    fn dec(&mut self, info: &StepInfo) {
        let value = self.read(info.address).wrapping_sub(1);
        self.write(info.address, value);
        self.update_zero_and_negative_flags(value);
    }

    fn adc(&mut self, info: &StepInfo) {
        // Add with Carry
        let value = self.read(info.address);
        self.add_to_register_a(value);
    }

    fn sbc(&mut self, info: &StepInfo) {
        // Subtract with Carry
        let value = self.read(info.address);
        let a = self.register_a;
        let borrow = !self.status.contains(Flags::CARRY) as u8;
        let result = a.wrapping_sub(value).wrapping_sub(borrow);

        let full = a as i16 - value as i16 - borrow as i16;
        self.status.set(Flags::CARRY, full >= 0);
        self.status.set(
            Flags::OVERFLOW,
            (a ^ value) & 0x80 != 0 && (a ^ result) & 0x80 != 0,
        );
        self.set_register_a(result);
    }

    fn add_to_register_a(&mut self, value: u8) {
        let a = self.register_a;
        let carry = self.status.contains(Flags::CARRY) as u16;
        let sum = a as u16 + value as u16 + carry;
        let result = sum as u8;

        self.status.set(Flags::CARRY, sum > 0xFF);
        // Overflow when both inputs share a sign the result doesn't have
        self.status.set(
            Flags::OVERFLOW,
            (a ^ value) & 0x80 == 0 && (a ^ result) & 0x80 != 0,
        );
        self.set_register_a(result);
    }

    fn bit(&mut self, info: &StepInfo) {
        let value = self.read(info.address);
        self.status.set(Flags::ZERO, self.register_a & value == 0);
        self.status.set(Flags::OVERFLOW, value & 0b0100_0000 != 0);
        self.status.set(Flags::NEGATIVE, value & 0b1000_0000 != 0);
    }

    fn compare(&mut self, info: &StepInfo, compare_value: u8) {
        let value = self.read(info.address);
        self.status.set(Flags::CARRY, compare_value >= value);
        self.update_zero_and_negative_flags(compare_value.wrapping_sub(value));
    }

    fn asl(&mut self, info: &StepInfo) {
        self.read_modify_write(info, |value, _| (value << 1, value & 0x80 != 0));
    }

    fn lsr(&mut self, info: &StepInfo) {
        self.read_modify_write(info, |value, _| (value >> 1, value & 0x01 != 0));
    }

    fn rol(&mut self, info: &StepInfo) {
        self.read_modify_write(info, rotate_value_left);
    }

    fn ror(&mut self, info: &StepInfo) {
        self.read_modify_write(info, rotate_value_right);
    }

    /// Applies a shift to A in Accumulator mode, or to memory otherwise.
    ///
    /// `shift` gets `(value, carry_in)` and returns `(result, carry_out)`.
    fn read_modify_write(&mut self, info: &StepInfo, shift: impl Fn(u8, bool) -> (u8, bool)) {
        let carry_in = self.status.contains(Flags::CARRY);
        if info.mode == AddressingMode::Accumulator {
            let (result, carry_out) = shift(self.register_a, carry_in);
            self.status.set(Flags::CARRY, carry_out);
            self.set_register_a(result);
        } else {
            let value = self.read(info.address);
            let (result, carry_out) = shift(value, carry_in);
            self.status.set(Flags::CARRY, carry_out);
            self.write(info.address, result);
            self.update_zero_and_negative_flags(result);
        }
    }

    fn jsr(&mut self, info: &StepInfo) {
        // Return address is the last byte of the JSR instruction
        self.push16(self.program_counter.wrapping_sub(1));
        self.program_counter = info.address;
    }

    fn rts(&mut self) {
        self.program_counter = self.pull16().wrapping_add(1);
    }

    fn rti(&mut self) {
        let value = self.pull();
        self.restore_flags(value);
        self.program_counter = self.pull16();
    }

    fn brk(&mut self) {
        self.push_interrupt_frame(interrupts::BRK);
    }

    fn branch(&mut self, info: &StepInfo, condition: bool) {
        if condition {
            self.program_counter = info.address;
            self.add_branch_cycles(info);
        }
    }

    fn set_register_a(&mut self, value: u8) {
        self.register_a = value;
        self.update_zero_and_negative_flags(value);
    }

    fn set_register_x(&mut self, value: u8) {
        self.register_x = value;
        self.update_zero_and_negative_flags(value);
    }

    fn set_register_y(&mut self, value: u8) {
        self.register_y = value;
        self.update_zero_and_negative_flags(value);
    }
}

fn rotate_value_left(value: u8, current_carry: bool) -> (u8, bool) {
    let new_carry = value & 0x80 != 0;
    let result = (value << 1) | current_carry as u8;
    (result, new_carry)
}

fn rotate_value_right(value: u8, current_carry: bool) -> (u8, bool) {
    let new_carry = value & 0x01 != 0;
    let result = (value >> 1) | ((current_carry as u8) << 7);
    (result, new_carry)
}
