use super::AddressingMode;
use once_cell::sync::Lazy;

/// What an opcode does once its operand has been resolved.
///
/// The undocumented mnemonics are kept distinct so disassembly stays accurate,
/// but they all execute as no-ops.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs, Clc,
    Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny, Jmp,
    Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol, Ror, Rti,
    Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay, Tsx, Txa, Txs, Tya,

    // Undocumented
    Ahx, Alr, Anc, Arr, Axs, Dcp, Isc, Kil, Las, Lax, Rla, Rra, Sax, Shx,
    Shy, Slo, Sre, Tas, Xaa,
}

impl Operation {
    pub fn is_undocumented(&self) -> bool {
        matches!(
            self,
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
                | Operation::Xaa
        )
    }
}

#[derive(Debug)]
pub struct Opcode {
    pub code: u8,
    pub name: &'static str,
    pub size: u8,
    pub cycles: u8,
    /// Extra cycles charged when the operand address crosses a page
    pub page_cycles: u8,
    pub mode: AddressingMode,
    pub operation: Operation,
}

impl Opcode {
    pub const fn new(
        code: u8,
        name: &'static str,
        size: u8,
        cycles: u8,
        page_cycles: u8,
        mode: AddressingMode,
        operation: Operation,
    ) -> Self {
        Self {
            code,
            name,
            size,
            cycles,
            page_cycles,
            mode,
            operation,
        }
    }
}

// See: https://www.nesdev.org/obelisk-6502-guide/reference.html
//      https://www.nesdev.org/wiki/CPU_unofficial_opcodes
#[rustfmt::skip]
pub static OPCODES: &[Opcode] = &[
    // Software-defined interrupt
    Opcode::new(0x00, "BRK", 2, 7, 0, AddressingMode::Implied,         Operation::Brk),

    // Transfers
    Opcode::new(0xAA, "TAX", 1, 2, 0, AddressingMode::Implied,         Operation::Tax),
    Opcode::new(0xA8, "TAY", 1, 2, 0, AddressingMode::Implied,         Operation::Tay),
    Opcode::new(0x8A, "TXA", 1, 2, 0, AddressingMode::Implied,         Operation::Txa),
    Opcode::new(0x98, "TYA", 1, 2, 0, AddressingMode::Implied,         Operation::Tya),
    Opcode::new(0xBA, "TSX", 1, 2, 0, AddressingMode::Implied,         Operation::Tsx),
    Opcode::new(0x9A, "TXS", 1, 2, 0, AddressingMode::Implied,         Operation::Txs),

    // Flags
    Opcode::new(0x38, "SEC", 1, 2, 0, AddressingMode::Implied,         Operation::Sec),
    Opcode::new(0xF8, "SED", 1, 2, 0, AddressingMode::Implied,         Operation::Sed),
    Opcode::new(0x78, "SEI", 1, 2, 0, AddressingMode::Implied,         Operation::Sei),
    Opcode::new(0x18, "CLC", 1, 2, 0, AddressingMode::Implied,         Operation::Clc),
    Opcode::new(0xD8, "CLD", 1, 2, 0, AddressingMode::Implied,         Operation::Cld),
    Opcode::new(0x58, "CLI", 1, 2, 0, AddressingMode::Implied,         Operation::Cli),
    Opcode::new(0xB8, "CLV", 1, 2, 0, AddressingMode::Implied,         Operation::Clv),

    // Loads
    Opcode::new(0xA1, "LDA", 2, 6, 0, AddressingMode::IndexedIndirect, Operation::Lda),
    Opcode::new(0xA5, "LDA", 2, 3, 0, AddressingMode::ZeroPage,        Operation::Lda),
    Opcode::new(0xA9, "LDA", 2, 2, 0, AddressingMode::Immediate,       Operation::Lda),
    Opcode::new(0xAD, "LDA", 3, 4, 0, AddressingMode::Absolute,        Operation::Lda),
    Opcode::new(0xB1, "LDA", 2, 5, 1, AddressingMode::IndirectIndexed, Operation::Lda),
    Opcode::new(0xB5, "LDA", 2, 4, 0, AddressingMode::ZeroPageX,       Operation::Lda),
    Opcode::new(0xB9, "LDA", 3, 4, 1, AddressingMode::AbsoluteY,       Operation::Lda),
    Opcode::new(0xBD, "LDA", 3, 4, 1, AddressingMode::AbsoluteX,       Operation::Lda),

    Opcode::new(0xA2, "LDX", 2, 2, 0, AddressingMode::Immediate,       Operation::Ldx),
    Opcode::new(0xA6, "LDX", 2, 3, 0, AddressingMode::ZeroPage,        Operation::Ldx),
    Opcode::new(0xAE, "LDX", 3, 4, 0, AddressingMode::Absolute,        Operation::Ldx),
    Opcode::new(0xB6, "LDX", 2, 4, 0, AddressingMode::ZeroPageY,       Operation::Ldx),
    Opcode::new(0xBE, "LDX", 3, 4, 1, AddressingMode::AbsoluteY,       Operation::Ldx),

    Opcode::new(0xA0, "LDY", 2, 2, 0, AddressingMode::Immediate,       Operation::Ldy),
    Opcode::new(0xA4, "LDY", 2, 3, 0, AddressingMode::ZeroPage,        Operation::Ldy),
    Opcode::new(0xAC, "LDY", 3, 4, 0, AddressingMode::Absolute,        Operation::Ldy),
    Opcode::new(0xB4, "LDY", 2, 4, 0, AddressingMode::ZeroPageX,       Operation::Ldy),
    Opcode::new(0xBC, "LDY", 3, 4, 1, AddressingMode::AbsoluteX,       Operation::Ldy),

    // Stores
    Opcode::new(0x81, "STA", 2, 6, 0, AddressingMode::IndexedIndirect, Operation::Sta),
    Opcode::new(0x85, "STA", 2, 3, 0, AddressingMode::ZeroPage,        Operation::Sta),
    Opcode::new(0x8D, "STA", 3, 4, 0, AddressingMode::Absolute,        Operation::Sta),
    Opcode::new(0x91, "STA", 2, 6, 0, AddressingMode::IndirectIndexed, Operation::Sta),
    Opcode::new(0x95, "STA", 2, 4, 0, AddressingMode::ZeroPageX,       Operation::Sta),
    Opcode::new(0x99, "STA", 3, 5, 0, AddressingMode::AbsoluteY,       Operation::Sta),
    Opcode::new(0x9D, "STA", 3, 5, 0, AddressingMode::AbsoluteX,       Operation::Sta),

    Opcode::new(0x86, "STX", 2, 3, 0, AddressingMode::ZeroPage,        Operation::Stx),
    Opcode::new(0x8E, "STX", 3, 4, 0, AddressingMode::Absolute,        Operation::Stx),
    Opcode::new(0x96, "STX", 2, 4, 0, AddressingMode::ZeroPageY,       Operation::Stx),

    Opcode::new(0x84, "STY", 2, 3, 0, AddressingMode::ZeroPage,        Operation::Sty),
    Opcode::new(0x8C, "STY", 3, 4, 0, AddressingMode::Absolute,        Operation::Sty),
    Opcode::new(0x94, "STY", 2, 4, 0, AddressingMode::ZeroPageX,       Operation::Sty),

    // Stack
    Opcode::new(0x48, "PHA", 1, 3, 0, AddressingMode::Implied,         Operation::Pha),
    Opcode::new(0x08, "PHP", 1, 3, 0, AddressingMode::Implied,         Operation::Php),
    Opcode::new(0x68, "PLA", 1, 4, 0, AddressingMode::Implied,         Operation::Pla),
    Opcode::new(0x28, "PLP", 1, 4, 0, AddressingMode::Implied,         Operation::Plp),

    // Shifts
    Opcode::new(0x06, "ASL", 2, 5, 0, AddressingMode::ZeroPage,        Operation::Asl),
    Opcode::new(0x0A, "ASL", 1, 2, 0, AddressingMode::Accumulator,     Operation::Asl),
    Opcode::new(0x0E, "ASL", 3, 6, 0, AddressingMode::Absolute,        Operation::Asl),
    Opcode::new(0x16, "ASL", 2, 6, 0, AddressingMode::ZeroPageX,       Operation::Asl),
    Opcode::new(0x1E, "ASL", 3, 7, 0, AddressingMode::AbsoluteX,       Operation::Asl),

    Opcode::new(0x46, "LSR", 2, 5, 0, AddressingMode::ZeroPage,        Operation::Lsr),
    Opcode::new(0x4A, "LSR", 1, 2, 0, AddressingMode::Accumulator,     Operation::Lsr),
    Opcode::new(0x4E, "LSR", 3, 6, 0, AddressingMode::Absolute,        Operation::Lsr),
    Opcode::new(0x56, "LSR", 2, 6, 0, AddressingMode::ZeroPageX,       Operation::Lsr),
    Opcode::new(0x5E, "LSR", 3, 7, 0, AddressingMode::AbsoluteX,       Operation::Lsr),

    Opcode::new(0x26, "ROL", 2, 5, 0, AddressingMode::ZeroPage,        Operation::Rol),
    Opcode::new(0x2A, "ROL", 1, 2, 0, AddressingMode::Accumulator,     Operation::Rol),
    Opcode::new(0x2E, "ROL", 3, 6, 0, AddressingMode::Absolute,        Operation::Rol),
    Opcode::new(0x36, "ROL", 2, 6, 0, AddressingMode::ZeroPageX,       Operation::Rol),
    Opcode::new(0x3E, "ROL", 3, 7, 0, AddressingMode::AbsoluteX,       Operation::Rol),

    Opcode::new(0x66, "ROR", 2, 5, 0, AddressingMode::ZeroPage,        Operation::Ror),
    Opcode::new(0x6A, "ROR", 1, 2, 0, AddressingMode::Accumulator,     Operation::Ror),
    Opcode::new(0x6E, "ROR", 3, 6, 0, AddressingMode::Absolute,        Operation::Ror),
    Opcode::new(0x76, "ROR", 2, 6, 0, AddressingMode::ZeroPageX,       Operation::Ror),
    Opcode::new(0x7E, "ROR", 3, 7, 0, AddressingMode::AbsoluteX,       Operation::Ror),

    // Logic
    Opcode::new(0x21, "AND", 2, 6, 0, AddressingMode::IndexedIndirect, Operation::And),
    Opcode::new(0x25, "AND", 2, 3, 0, AddressingMode::ZeroPage,        Operation::And),
    Opcode::new(0x29, "AND", 2, 2, 0, AddressingMode::Immediate,       Operation::And),
    Opcode::new(0x2D, "AND", 3, 4, 0, AddressingMode::Absolute,        Operation::And),
    Opcode::new(0x31, "AND", 2, 5, 1, AddressingMode::IndirectIndexed, Operation::And),
    Opcode::new(0x35, "AND", 2, 4, 0, AddressingMode::ZeroPageX,       Operation::And),
    Opcode::new(0x39, "AND", 3, 4, 1, AddressingMode::AbsoluteY,       Operation::And),
    Opcode::new(0x3D, "AND", 3, 4, 1, AddressingMode::AbsoluteX,       Operation::And),

    Opcode::new(0x41, "EOR", 2, 6, 0, AddressingMode::IndexedIndirect, Operation::Eor),
    Opcode::new(0x45, "EOR", 2, 3, 0, AddressingMode::ZeroPage,        Operation::Eor),
    Opcode::new(0x49, "EOR", 2, 2, 0, AddressingMode::Immediate,       Operation::Eor),
    Opcode::new(0x4D, "EOR", 3, 4, 0, AddressingMode::Absolute,        Operation::Eor),
    Opcode::new(0x51, "EOR", 2, 5, 1, AddressingMode::IndirectIndexed, Operation::Eor),
    Opcode::new(0x55, "EOR", 2, 4, 0, AddressingMode::ZeroPageX,       Operation::Eor),
    Opcode::new(0x59, "EOR", 3, 4, 1, AddressingMode::AbsoluteY,       Operation::Eor),
    Opcode::new(0x5D, "EOR", 3, 4, 1, AddressingMode::AbsoluteX,       Operation::Eor),

    Opcode::new(0x01, "ORA", 2, 6, 0, AddressingMode::IndexedIndirect, Operation::Ora),
    Opcode::new(0x05, "ORA", 2, 3, 0, AddressingMode::ZeroPage,        Operation::Ora),
    Opcode::new(0x09, "ORA", 2, 2, 0, AddressingMode::Immediate,       Operation::Ora),
    Opcode::new(0x0D, "ORA", 3, 4, 0, AddressingMode::Absolute,        Operation::Ora),
    Opcode::new(0x11, "ORA", 2, 5, 1, AddressingMode::IndirectIndexed, Operation::Ora),
    Opcode::new(0x15, "ORA", 2, 4, 0, AddressingMode::ZeroPageX,       Operation::Ora),
    Opcode::new(0x19, "ORA", 3, 4, 1, AddressingMode::AbsoluteY,       Operation::Ora),
    Opcode::new(0x1D, "ORA", 3, 4, 1, AddressingMode::AbsoluteX,       Operation::Ora),

    Opcode::new(0x24, "BIT", 2, 3, 0, AddressingMode::ZeroPage,        Operation::Bit),
    Opcode::new(0x2C, "BIT", 3, 4, 0, AddressingMode::Absolute,        Operation::Bit),

    // Arithmetic
    Opcode::new(0x61, "ADC", 2, 6, 0, AddressingMode::IndexedIndirect, Operation::Adc),
    Opcode::new(0x65, "ADC", 2, 3, 0, AddressingMode::ZeroPage,        Operation::Adc),
    Opcode::new(0x69, "ADC", 2, 2, 0, AddressingMode::Immediate,       Operation::Adc),
    Opcode::new(0x6D, "ADC", 3, 4, 0, AddressingMode::Absolute,        Operation::Adc),
    Opcode::new(0x71, "ADC", 2, 5, 1, AddressingMode::IndirectIndexed, Operation::Adc),
    Opcode::new(0x75, "ADC", 2, 4, 0, AddressingMode::ZeroPageX,       Operation::Adc),
    Opcode::new(0x79, "ADC", 3, 4, 1, AddressingMode::AbsoluteY,       Operation::Adc),
    Opcode::new(0x7D, "ADC", 3, 4, 1, AddressingMode::AbsoluteX,       Operation::Adc),

    Opcode::new(0xE1, "SBC", 2, 6, 0, AddressingMode::IndexedIndirect, Operation::Sbc),
    Opcode::new(0xE5, "SBC", 2, 3, 0, AddressingMode::ZeroPage,        Operation::Sbc),
    Opcode::new(0xE9, "SBC", 2, 2, 0, AddressingMode::Immediate,       Operation::Sbc),
    Opcode::new(0xED, "SBC", 3, 4, 0, AddressingMode::Absolute,        Operation::Sbc),
    Opcode::new(0xF1, "SBC", 2, 5, 1, AddressingMode::IndirectIndexed, Operation::Sbc),
    Opcode::new(0xF5, "SBC", 2, 4, 0, AddressingMode::ZeroPageX,       Operation::Sbc),
    Opcode::new(0xF9, "SBC", 3, 4, 1, AddressingMode::AbsoluteY,       Operation::Sbc),
    Opcode::new(0xFD, "SBC", 3, 4, 1, AddressingMode::AbsoluteX,       Operation::Sbc),
    Opcode::new(0xEB, "SBC", 2, 2, 0, AddressingMode::Immediate,       Operation::Sbc), // alias of $E9

    // Compares
    Opcode::new(0xC1, "CMP", 2, 6, 0, AddressingMode::IndexedIndirect, Operation::Cmp),
    Opcode::new(0xC5, "CMP", 2, 3, 0, AddressingMode::ZeroPage,        Operation::Cmp),
    Opcode::new(0xC9, "CMP", 2, 2, 0, AddressingMode::Immediate,       Operation::Cmp),
    Opcode::new(0xCD, "CMP", 3, 4, 0, AddressingMode::Absolute,        Operation::Cmp),
    Opcode::new(0xD1, "CMP", 2, 5, 1, AddressingMode::IndirectIndexed, Operation::Cmp),
    Opcode::new(0xD5, "CMP", 2, 4, 0, AddressingMode::ZeroPageX,       Operation::Cmp),
    Opcode::new(0xD9, "CMP", 3, 4, 1, AddressingMode::AbsoluteY,       Operation::Cmp),
    Opcode::new(0xDD, "CMP", 3, 4, 1, AddressingMode::AbsoluteX,       Operation::Cmp),

    Opcode::new(0xE0, "CPX", 2, 2, 0, AddressingMode::Immediate,       Operation::Cpx),
    Opcode::new(0xE4, "CPX", 2, 3, 0, AddressingMode::ZeroPage,        Operation::Cpx),
    Opcode::new(0xEC, "CPX", 3, 4, 0, AddressingMode::Absolute,        Operation::Cpx),

    Opcode::new(0xC0, "CPY", 2, 2, 0, AddressingMode::Immediate,       Operation::Cpy),
    Opcode::new(0xC4, "CPY", 2, 3, 0, AddressingMode::ZeroPage,        Operation::Cpy),
    Opcode::new(0xCC, "CPY", 3, 4, 0, AddressingMode::Absolute,        Operation::Cpy),

    // Increments & decrements
    Opcode::new(0xE6, "INC", 2, 5, 0, AddressingMode::ZeroPage,        Operation::Inc),
    Opcode::new(0xEE, "INC", 3, 6, 0, AddressingMode::Absolute,        Operation::Inc),
    Opcode::new(0xF6, "INC", 2, 6, 0, AddressingMode::ZeroPageX,       Operation::Inc),
    Opcode::new(0xFE, "INC", 3, 7, 0, AddressingMode::AbsoluteX,       Operation::Inc),

    Opcode::new(0xE8, "INX", 1, 2, 0, AddressingMode::Implied,         Operation::Inx),
    Opcode::new(0xC8, "INY", 1, 2, 0, AddressingMode::Implied,         Operation::Iny),

    Opcode::new(0xC6, "DEC", 2, 5, 0, AddressingMode::ZeroPage,        Operation::Dec),
    Opcode::new(0xCE, "DEC", 3, 6, 0, AddressingMode::Absolute,        Operation::Dec),
    Opcode::new(0xD6, "DEC", 2, 6, 0, AddressingMode::ZeroPageX,       Operation::Dec),
    Opcode::new(0xDE, "DEC", 3, 7, 0, AddressingMode::AbsoluteX,       Operation::Dec),

    Opcode::new(0xCA, "DEX", 1, 2, 0, AddressingMode::Implied,         Operation::Dex),
    Opcode::new(0x88, "DEY", 1, 2, 0, AddressingMode::Implied,         Operation::Dey),

    // Branches
    Opcode::new(0x90, "BCC", 2, 2, 1, AddressingMode::Relative,        Operation::Bcc),
    Opcode::new(0xB0, "BCS", 2, 2, 1, AddressingMode::Relative,        Operation::Bcs),
    Opcode::new(0xF0, "BEQ", 2, 2, 1, AddressingMode::Relative,        Operation::Beq),
    Opcode::new(0x30, "BMI", 2, 2, 1, AddressingMode::Relative,        Operation::Bmi),
    Opcode::new(0xD0, "BNE", 2, 2, 1, AddressingMode::Relative,        Operation::Bne),
    Opcode::new(0x10, "BPL", 2, 2, 1, AddressingMode::Relative,        Operation::Bpl),
    Opcode::new(0x50, "BVC", 2, 2, 1, AddressingMode::Relative,        Operation::Bvc),
    Opcode::new(0x70, "BVS", 2, 2, 1, AddressingMode::Relative,        Operation::Bvs),

    // Jumps & returns
    Opcode::new(0x4C, "JMP", 3, 3, 0, AddressingMode::Absolute,        Operation::Jmp),
    Opcode::new(0x6C, "JMP", 3, 5, 0, AddressingMode::Indirect,        Operation::Jmp),

    Opcode::new(0x20, "JSR", 3, 6, 0, AddressingMode::Absolute,        Operation::Jsr),
    Opcode::new(0x60, "RTS", 1, 6, 0, AddressingMode::Implied,         Operation::Rts),
    Opcode::new(0x40, "RTI", 1, 6, 0, AddressingMode::Implied,         Operation::Rti),

    // NOPs (one official, the rest undocumented)
    Opcode::new(0x04, "NOP", 2, 3, 0, AddressingMode::ZeroPage,        Operation::Nop),
    Opcode::new(0x0C, "NOP", 3, 4, 0, AddressingMode::Absolute,        Operation::Nop),
    Opcode::new(0x14, "NOP", 2, 4, 0, AddressingMode::ZeroPageX,       Operation::Nop),
    Opcode::new(0x1A, "NOP", 1, 2, 0, AddressingMode::Implied,         Operation::Nop),
    Opcode::new(0x1C, "NOP", 3, 4, 1, AddressingMode::AbsoluteX,       Operation::Nop),
    Opcode::new(0x34, "NOP", 2, 4, 0, AddressingMode::ZeroPageX,       Operation::Nop),
    Opcode::new(0x3A, "NOP", 1, 2, 0, AddressingMode::Implied,         Operation::Nop),
    Opcode::new(0x3C, "NOP", 3, 4, 1, AddressingMode::AbsoluteX,       Operation::Nop),
    Opcode::new(0x44, "NOP", 2, 3, 0, AddressingMode::ZeroPage,        Operation::Nop),
    Opcode::new(0x54, "NOP", 2, 4, 0, AddressingMode::ZeroPageX,       Operation::Nop),
    Opcode::new(0x5A, "NOP", 1, 2, 0, AddressingMode::Implied,         Operation::Nop),
    Opcode::new(0x5C, "NOP", 3, 4, 1, AddressingMode::AbsoluteX,       Operation::Nop),
    Opcode::new(0x64, "NOP", 2, 3, 0, AddressingMode::ZeroPage,        Operation::Nop),
    Opcode::new(0x74, "NOP", 2, 4, 0, AddressingMode::ZeroPageX,       Operation::Nop),
    Opcode::new(0x7A, "NOP", 1, 2, 0, AddressingMode::Implied,         Operation::Nop),
    Opcode::new(0x7C, "NOP", 3, 4, 1, AddressingMode::AbsoluteX,       Operation::Nop),
    Opcode::new(0x80, "NOP", 2, 2, 0, AddressingMode::Immediate,       Operation::Nop),
    Opcode::new(0x82, "NOP", 2, 2, 0, AddressingMode::Immediate,       Operation::Nop),
    Opcode::new(0x89, "NOP", 2, 2, 0, AddressingMode::Immediate,       Operation::Nop),
    Opcode::new(0xC2, "NOP", 2, 2, 0, AddressingMode::Immediate,       Operation::Nop),
    Opcode::new(0xD4, "NOP", 2, 4, 0, AddressingMode::ZeroPageX,       Operation::Nop),
    Opcode::new(0xDA, "NOP", 1, 2, 0, AddressingMode::Implied,         Operation::Nop),
    Opcode::new(0xDC, "NOP", 3, 4, 1, AddressingMode::AbsoluteX,       Operation::Nop),
    Opcode::new(0xE2, "NOP", 2, 2, 0, AddressingMode::Immediate,       Operation::Nop),
    Opcode::new(0xEA, "NOP", 1, 2, 0, AddressingMode::Implied,         Operation::Nop),
    Opcode::new(0xF4, "NOP", 2, 4, 0, AddressingMode::ZeroPageX,       Operation::Nop),
    Opcode::new(0xFA, "NOP", 1, 2, 0, AddressingMode::Implied,         Operation::Nop),
    Opcode::new(0xFC, "NOP", 3, 4, 1, AddressingMode::AbsoluteX,       Operation::Nop),

    // Undocumented opcodes (decoded for timing, executed as no-ops)
    Opcode::new(0x02, "KIL", 1, 2, 0, AddressingMode::Implied,         Operation::Kil),
    Opcode::new(0x12, "KIL", 1, 2, 0, AddressingMode::Implied,         Operation::Kil),
    Opcode::new(0x22, "KIL", 1, 2, 0, AddressingMode::Implied,         Operation::Kil),
    Opcode::new(0x32, "KIL", 1, 2, 0, AddressingMode::Implied,         Operation::Kil),
    Opcode::new(0x42, "KIL", 1, 2, 0, AddressingMode::Implied,         Operation::Kil),
    Opcode::new(0x52, "KIL", 1, 2, 0, AddressingMode::Implied,         Operation::Kil),
    Opcode::new(0x62, "KIL", 1, 2, 0, AddressingMode::Implied,         Operation::Kil),
    Opcode::new(0x72, "KIL", 1, 2, 0, AddressingMode::Implied,         Operation::Kil),
    Opcode::new(0x92, "KIL", 1, 2, 0, AddressingMode::Implied,         Operation::Kil),
    Opcode::new(0xB2, "KIL", 1, 2, 0, AddressingMode::Implied,         Operation::Kil),
    Opcode::new(0xD2, "KIL", 1, 2, 0, AddressingMode::Implied,         Operation::Kil),
    Opcode::new(0xF2, "KIL", 1, 2, 0, AddressingMode::Implied,         Operation::Kil),

    Opcode::new(0x03, "SLO", 2, 8, 0, AddressingMode::IndexedIndirect, Operation::Slo),
    Opcode::new(0x07, "SLO", 2, 5, 0, AddressingMode::ZeroPage,        Operation::Slo),
    Opcode::new(0x0F, "SLO", 3, 6, 0, AddressingMode::Absolute,        Operation::Slo),
    Opcode::new(0x13, "SLO", 2, 8, 0, AddressingMode::IndirectIndexed, Operation::Slo),
    Opcode::new(0x17, "SLO", 2, 6, 0, AddressingMode::ZeroPageX,       Operation::Slo),
    Opcode::new(0x1B, "SLO", 3, 7, 0, AddressingMode::AbsoluteY,       Operation::Slo),
    Opcode::new(0x1F, "SLO", 3, 7, 0, AddressingMode::AbsoluteX,       Operation::Slo),

    Opcode::new(0x23, "RLA", 2, 8, 0, AddressingMode::IndexedIndirect, Operation::Rla),
    Opcode::new(0x27, "RLA", 2, 5, 0, AddressingMode::ZeroPage,        Operation::Rla),
    Opcode::new(0x2F, "RLA", 3, 6, 0, AddressingMode::Absolute,        Operation::Rla),
    Opcode::new(0x33, "RLA", 2, 8, 0, AddressingMode::IndirectIndexed, Operation::Rla),
    Opcode::new(0x37, "RLA", 2, 6, 0, AddressingMode::ZeroPageX,       Operation::Rla),
    Opcode::new(0x3B, "RLA", 3, 7, 0, AddressingMode::AbsoluteY,       Operation::Rla),
    Opcode::new(0x3F, "RLA", 3, 7, 0, AddressingMode::AbsoluteX,       Operation::Rla),

    Opcode::new(0x43, "SRE", 2, 8, 0, AddressingMode::IndexedIndirect, Operation::Sre),
    Opcode::new(0x47, "SRE", 2, 5, 0, AddressingMode::ZeroPage,        Operation::Sre),
    Opcode::new(0x4F, "SRE", 3, 6, 0, AddressingMode::Absolute,        Operation::Sre),
    Opcode::new(0x53, "SRE", 2, 8, 0, AddressingMode::IndirectIndexed, Operation::Sre),
    Opcode::new(0x57, "SRE", 2, 6, 0, AddressingMode::ZeroPageX,       Operation::Sre),
    Opcode::new(0x5B, "SRE", 3, 7, 0, AddressingMode::AbsoluteY,       Operation::Sre),
    Opcode::new(0x5F, "SRE", 3, 7, 0, AddressingMode::AbsoluteX,       Operation::Sre),

    Opcode::new(0x63, "RRA", 2, 8, 0, AddressingMode::IndexedIndirect, Operation::Rra),
    Opcode::new(0x67, "RRA", 2, 5, 0, AddressingMode::ZeroPage,        Operation::Rra),
    Opcode::new(0x6F, "RRA", 3, 6, 0, AddressingMode::Absolute,        Operation::Rra),
    Opcode::new(0x73, "RRA", 2, 8, 0, AddressingMode::IndirectIndexed, Operation::Rra),
    Opcode::new(0x77, "RRA", 2, 6, 0, AddressingMode::ZeroPageX,       Operation::Rra),
    Opcode::new(0x7B, "RRA", 3, 7, 0, AddressingMode::AbsoluteY,       Operation::Rra),
    Opcode::new(0x7F, "RRA", 3, 7, 0, AddressingMode::AbsoluteX,       Operation::Rra),

    Opcode::new(0x83, "SAX", 2, 6, 0, AddressingMode::IndexedIndirect, Operation::Sax),
    Opcode::new(0x87, "SAX", 2, 3, 0, AddressingMode::ZeroPage,        Operation::Sax),
    Opcode::new(0x8F, "SAX", 3, 4, 0, AddressingMode::Absolute,        Operation::Sax),
    Opcode::new(0x97, "SAX", 2, 4, 0, AddressingMode::ZeroPageY,       Operation::Sax),

    Opcode::new(0xA3, "LAX", 2, 6, 0, AddressingMode::IndexedIndirect, Operation::Lax),
    Opcode::new(0xA7, "LAX", 2, 3, 0, AddressingMode::ZeroPage,        Operation::Lax),
    Opcode::new(0xAB, "LAX", 2, 2, 0, AddressingMode::Immediate,       Operation::Lax),
    Opcode::new(0xAF, "LAX", 3, 4, 0, AddressingMode::Absolute,        Operation::Lax),
    Opcode::new(0xB3, "LAX", 2, 5, 1, AddressingMode::IndirectIndexed, Operation::Lax),
    Opcode::new(0xB7, "LAX", 2, 4, 0, AddressingMode::ZeroPageY,       Operation::Lax),
    Opcode::new(0xBF, "LAX", 3, 4, 1, AddressingMode::AbsoluteY,       Operation::Lax),

    Opcode::new(0xC3, "DCP", 2, 8, 0, AddressingMode::IndexedIndirect, Operation::Dcp),
    Opcode::new(0xC7, "DCP", 2, 5, 0, AddressingMode::ZeroPage,        Operation::Dcp),
    Opcode::new(0xCF, "DCP", 3, 6, 0, AddressingMode::Absolute,        Operation::Dcp),
    Opcode::new(0xD3, "DCP", 2, 8, 0, AddressingMode::IndirectIndexed, Operation::Dcp),
    Opcode::new(0xD7, "DCP", 2, 6, 0, AddressingMode::ZeroPageX,       Operation::Dcp),
    Opcode::new(0xDB, "DCP", 3, 7, 0, AddressingMode::AbsoluteY,       Operation::Dcp),
    Opcode::new(0xDF, "DCP", 3, 7, 0, AddressingMode::AbsoluteX,       Operation::Dcp),

    Opcode::new(0xE3, "ISC", 2, 8, 0, AddressingMode::IndexedIndirect, Operation::Isc),
    Opcode::new(0xE7, "ISC", 2, 5, 0, AddressingMode::ZeroPage,        Operation::Isc),
    Opcode::new(0xEF, "ISC", 3, 6, 0, AddressingMode::Absolute,        Operation::Isc),
    Opcode::new(0xF3, "ISC", 2, 8, 0, AddressingMode::IndirectIndexed, Operation::Isc),
    Opcode::new(0xF7, "ISC", 2, 6, 0, AddressingMode::ZeroPageX,       Operation::Isc),
    Opcode::new(0xFB, "ISC", 3, 7, 0, AddressingMode::AbsoluteY,       Operation::Isc),
    Opcode::new(0xFF, "ISC", 3, 7, 0, AddressingMode::AbsoluteX,       Operation::Isc),

    Opcode::new(0x0B, "ANC", 2, 2, 0, AddressingMode::Immediate,       Operation::Anc),
    Opcode::new(0x2B, "ANC", 2, 2, 0, AddressingMode::Immediate,       Operation::Anc),

    Opcode::new(0x4B, "ALR", 2, 2, 0, AddressingMode::Immediate,       Operation::Alr),
    Opcode::new(0x6B, "ARR", 2, 2, 0, AddressingMode::Immediate,       Operation::Arr),
    Opcode::new(0x8B, "XAA", 2, 2, 0, AddressingMode::Immediate,       Operation::Xaa),
    Opcode::new(0xCB, "AXS", 2, 2, 0, AddressingMode::Immediate,       Operation::Axs),

    Opcode::new(0x93, "AHX", 2, 6, 0, AddressingMode::IndirectIndexed, Operation::Ahx),
    Opcode::new(0x9F, "AHX", 3, 5, 0, AddressingMode::AbsoluteY,       Operation::Ahx),

    Opcode::new(0x9B, "TAS", 3, 5, 0, AddressingMode::AbsoluteY,       Operation::Tas),
    Opcode::new(0x9C, "SHY", 3, 5, 0, AddressingMode::AbsoluteX,       Operation::Shy),
    Opcode::new(0x9E, "SHX", 3, 5, 0, AddressingMode::AbsoluteY,       Operation::Shx),
    Opcode::new(0xBB, "LAS", 3, 4, 1, AddressingMode::AbsoluteY,       Operation::Las),
];

/// Opcode byte -> table entry, covering all 256 values
pub static OPCODE_TABLE: Lazy<[&'static Opcode; 256]> = Lazy::new(|| {
    let mut table = [&OPCODES[0]; 256];
    for opcode in OPCODES {
        table[opcode.code as usize] = opcode;
    }
    table
});

#[inline]
pub fn lookup(code: u8) -> &'static Opcode {
    OPCODE_TABLE[code as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_opcode_table_covers_every_byte_once() {
        assert_eq!(OPCODES.len(), 256);
        let codes: HashSet<u8> = OPCODES.iter().map(|op| op.code).collect();
        assert_eq!(codes.len(), 256, "duplicate opcode entries in table");

        for code in 0..=255u8 {
            assert_eq!(lookup(code).code, code);
        }
    }

    #[test]
    fn test_official_sizes_and_cycles() {
        // (code, name, size, cycles, page_cycles)
        let expected = [
            (0x00, "BRK", 2, 7, 0),
            (0x20, "JSR", 3, 6, 0),
            (0x4C, "JMP", 3, 3, 0),
            (0x6C, "JMP", 3, 5, 0),
            (0x60, "RTS", 1, 6, 0),
            (0x40, "RTI", 1, 6, 0),
            (0xA9, "LDA", 2, 2, 0),
            (0xBD, "LDA", 3, 4, 1),
            (0xB1, "LDA", 2, 5, 1),
            (0x9D, "STA", 3, 5, 0),
            (0x91, "STA", 2, 6, 0),
            (0x1E, "ASL", 3, 7, 0),
            (0x0A, "ASL", 1, 2, 0),
            (0x69, "ADC", 2, 2, 0),
            (0xF1, "SBC", 2, 5, 1),
            (0xD0, "BNE", 2, 2, 1),
            (0xEA, "NOP", 1, 2, 0),
            (0x08, "PHP", 1, 3, 0),
            (0x28, "PLP", 1, 4, 0),
        ];

        for (code, name, size, cycles, page_cycles) in expected {
            let op = lookup(code);
            assert_eq!(op.name, name, "name of ${:02X}", code);
            assert_eq!(op.size, size, "size of ${:02X}", code);
            assert_eq!(op.cycles, cycles, "cycles of ${:02X}", code);
            assert_eq!(op.page_cycles, page_cycles, "page cycles of ${:02X}", code);
        }
    }

    #[test]
    fn test_size_agrees_with_addressing_mode() {
        for op in OPCODES.iter() {
            let expected = match op.mode {
                AddressingMode::Implied | AddressingMode::Accumulator => 1,
                AddressingMode::Absolute
                | AddressingMode::AbsoluteX
                | AddressingMode::AbsoluteY
                | AddressingMode::Indirect => 3,
                _ => 2,
            };
            if op.operation == Operation::Brk {
                // BRK skips a padding byte
                assert_eq!(op.size, 2);
            } else {
                assert_eq!(op.size, expected, "${:02X} {}", op.code, op.name);
            }
        }
    }

    #[test]
    fn test_0xeb_is_sbc_immediate() {
        let op = lookup(0xEB);
        assert_eq!(op.operation, Operation::Sbc);
        assert_eq!(op.mode, AddressingMode::Immediate);
        assert_eq!(op.size, 2);
        assert!(!op.operation.is_undocumented());
    }

    #[test]
    fn test_undocumented_opcodes_are_flagged() {
        let undocumented = OPCODES
            .iter()
            .filter(|op| op.operation.is_undocumented())
            .count();
        // 256 slots minus 151 official opcodes, 0xEB and 27 unofficial NOPs
        assert_eq!(undocumented, 256 - 151 - 1 - 27);
    }
}
