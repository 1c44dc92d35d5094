use super::{CPU, Flags};
use crate::nes::bus::simple_bus::SimpleBus;
use crate::nes::diagnostics::Diagnostics;

fn init_cpu(program: &[u8]) -> CPU<SimpleBus> {
    let bus = SimpleBus::with_program(0x8000, program);
    let mut cpu = CPU::new(bus, Diagnostics::default());
    cpu.reset();
    cpu
}

fn run(cpu: &mut CPU<SimpleBus>, instructions: usize) -> u64 {
    (0..instructions).map(|_| cpu.step()).sum()
}

#[test]
fn test_reset_loads_vector_and_keeps_cycles() {
    let mut cpu = init_cpu(&[0xEA]);
    cpu.cycles = 1234;
    cpu.stack_pointer = 0x10;
    cpu.set_flags(0xFF);

    cpu.reset();

    assert_eq!(cpu.program_counter, 0x8000);
    assert_eq!(cpu.stack_pointer, 0xFD);
    assert_eq!(cpu.flags(), 0x24);
    assert_eq!(cpu.cycles, 1234);
}

#[test]
fn test_flags_round_trip_every_value() {
    let mut cpu = init_cpu(&[]);
    for value in 0..=0xFFu8 {
        cpu.set_flags(value);
        assert_eq!(cpu.flags(), value);
    }
}

#[test]
fn test_0xaa_tax_0xa8_tay() {
    let program = &[
        0xA9, // LDA immediate
        0x42, //    with $42
        0xAA, // TAX
        0xA8, // TAY
    ];
    let mut cpu = init_cpu(program);
    run(&mut cpu, 3);
    assert_eq!(cpu.register_x, 0x42);
    assert_eq!(cpu.register_y, 0x42);
    assert!(!cpu.status.contains(Flags::ZERO));
    assert!(!cpu.status.contains(Flags::NEGATIVE));
}

#[test]
fn test_0xa9_lda_zero_and_negative_flags() {
    let mut cpu = init_cpu(&[0xA9, 0x00, 0xA9, 0x80]);
    cpu.step();
    assert!(cpu.status.contains(Flags::ZERO));
    assert!(!cpu.status.contains(Flags::NEGATIVE));

    cpu.step();
    assert!(!cpu.status.contains(Flags::ZERO));
    assert!(cpu.status.contains(Flags::NEGATIVE));
}

#[test]
fn test_0x8d_sta_touches_no_flags() {
    let mut cpu = init_cpu(&[0x8D, 0x00, 0x02]); // STA $0200
    cpu.register_a = 0x00;
    cpu.set_flags(0xA5);
    cpu.step();
    assert_eq!(cpu.bus.memory[0x0200], 0x00);
    assert_eq!(cpu.flags(), 0xA5);
}

#[test]
fn test_0xb5_lda_zero_page_x_wraps() {
    let program = &[
        0xA2, 0x10, // LDX #$10
        0xB5, 0xF8, // LDA $F8,X -> $08, not $0108
    ];
    let mut cpu = init_cpu(program);
    cpu.bus.memory[0x0008] = 0x42;
    cpu.bus.memory[0x0108] = 0x99;
    run(&mut cpu, 2);
    assert_eq!(cpu.register_a, 0x42);
}

#[test]
fn test_0xad_lda_absolute_cycles() {
    let program = &[
        0xAD, 0xEF, 0xBE, // LDA $BEEF (4 cycles)
        0xAA, // TAX (2 cycles)
    ];
    let mut cpu = init_cpu(program);
    cpu.bus.memory[0xBEEF] = 0x42;
    run(&mut cpu, 2);
    assert_eq!(cpu.register_a, 0x42);
    assert_eq!(cpu.register_x, 0x42);
    assert_eq!(cpu.bus.cycles, 4 + 2);
    assert_eq!(cpu.cycles, 4 + 2);
}

#[test]
fn test_0xbd_lda_absolute_x_page_cross_costs_a_cycle() {
    let program = &[
        0xA2, 0x01, // LDX #$01
        0xBD, 0xFF, 0x12, // LDA $12FF,X
        0xBD, 0x00, 0x12, // LDA $1200,X
    ];
    let mut cpu = init_cpu(program);
    cpu.bus.memory[0x1300] = 0x42;
    cpu.step();
    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.register_a, 0x42);
    assert_eq!(cpu.step(), 4);
}

#[test]
fn test_0xb1_lda_indirect_indexed_page_cross() {
    let program = &[
        0xA0, 0x10, // LDY #$10
        0xB1, 0x20, // LDA ($20),Y
    ];
    let mut cpu = init_cpu(program);
    cpu.bus.memory[0x0020] = 0xF8;
    cpu.bus.memory[0x0021] = 0x12;
    cpu.bus.memory[0x1308] = 0x42;
    cpu.step();
    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.register_a, 0x42);
}

#[test]
fn test_0xa1_lda_indexed_indirect_wraps_pointer() {
    let program = &[
        0xA2, 0x01, // LDX #$01
        0xA1, 0xFF, // LDA ($FF,X) -> pointer at $00
    ];
    let mut cpu = init_cpu(program);
    cpu.bus.memory[0x0000] = 0x34;
    cpu.bus.memory[0x0001] = 0x12;
    cpu.bus.memory[0x1234] = 0x77;
    run(&mut cpu, 2);
    assert_eq!(cpu.register_a, 0x77);
}

#[test]
fn test_read16bug_wraps_within_page() {
    let mut cpu = init_cpu(&[]);
    cpu.bus.memory[0x02FF] = 0x00;
    cpu.bus.memory[0x0200] = 0x90;
    cpu.bus.memory[0x0300] = 0x80;
    assert_eq!(cpu.read16bug(0x02FF), 0x9000);
    assert_eq!(cpu.read16(0x02FF), 0x8000);
}

#[test]
fn test_0x6c_jmp_indirect_page_bug() {
    let mut cpu = init_cpu(&[0x6C, 0xFF, 0x02]); // JMP ($02FF)
    cpu.bus.memory[0x02FF] = 0x00;
    cpu.bus.memory[0x0200] = 0x90;
    cpu.bus.memory[0x0300] = 0x80;
    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.program_counter, 0x9000);
}

#[test]
fn test_adc_truth_table() {
    let mut cpu = init_cpu(&[]);
    for a in 0..=0xFFu8 {
        for b in 0..=0xFFu8 {
            for carry in [false, true] {
                cpu.program_counter = 0x0300;
                cpu.bus.memory[0x0300] = 0x69; // ADC #imm
                cpu.bus.memory[0x0301] = b;
                cpu.register_a = a;
                cpu.status.set(Flags::CARRY, carry);

                cpu.step();

                let unsigned = a as u16 + b as u16 + carry as u16;
                let signed = a as i8 as i16 + b as i8 as i16 + carry as i16;
                assert_eq!(cpu.register_a, unsigned as u8, "{a:02X}+{b:02X}+{carry}");
                assert_eq!(cpu.status.contains(Flags::CARRY), unsigned > 0xFF);
                assert_eq!(
                    cpu.status.contains(Flags::OVERFLOW),
                    !(-128..=127).contains(&signed),
                    "{a:02X}+{b:02X}+{carry}"
                );
                assert_eq!(cpu.status.contains(Flags::ZERO), unsigned as u8 == 0);
                assert_eq!(cpu.status.contains(Flags::NEGATIVE), unsigned & 0x80 != 0);
            }
        }
    }
}

#[test]
fn test_sbc_truth_table() {
    let mut cpu = init_cpu(&[]);
    for a in 0..=0xFFu8 {
        for b in 0..=0xFFu8 {
            for carry in [false, true] {
                cpu.program_counter = 0x0300;
                cpu.bus.memory[0x0300] = 0xE9; // SBC #imm
                cpu.bus.memory[0x0301] = b;
                cpu.register_a = a;
                cpu.status.set(Flags::CARRY, carry);

                cpu.step();

                let borrow = !carry as i16;
                let unsigned = a as i16 - b as i16 - borrow;
                let signed = a as i8 as i16 - b as i8 as i16 - borrow;
                assert_eq!(cpu.register_a, unsigned as u8, "{a:02X}-{b:02X}-{borrow}");
                assert_eq!(cpu.status.contains(Flags::CARRY), unsigned >= 0);
                assert_eq!(
                    cpu.status.contains(Flags::OVERFLOW),
                    !(-128..=127).contains(&signed),
                    "{a:02X}-{b:02X}-{borrow}"
                );
            }
        }
    }
}

#[test]
fn test_0xeb_behaves_as_sbc() {
    let program = &[
        0xA9, 0x10, // LDA #$10
        0x38, // SEC
        0xEB, 0x01, // SBC #$01 (alias)
    ];
    let mut cpu = init_cpu(program);
    run(&mut cpu, 3);
    assert_eq!(cpu.register_a, 0x0F);
    assert!(cpu.status.contains(Flags::CARRY));
    assert_eq!(cpu.program_counter, 0x8005);
}

#[test]
fn test_compare_sets_carry_when_register_is_greater_or_equal() {
    let program = &[
        0xA9, 0x40, // LDA #$40
        0xC9, 0x40, // CMP #$40
        0xC9, 0x41, // CMP #$41
    ];
    let mut cpu = init_cpu(program);
    run(&mut cpu, 2);
    assert!(cpu.status.contains(Flags::CARRY));
    assert!(cpu.status.contains(Flags::ZERO));

    cpu.step();
    assert!(!cpu.status.contains(Flags::CARRY));
    assert!(!cpu.status.contains(Flags::ZERO));
    assert!(cpu.status.contains(Flags::NEGATIVE));
}

#[test]
fn test_0x24_bit_copies_high_bits() {
    let program = &[
        0xA9, 0x01, // LDA #$01
        0x24, 0x10, // BIT $10
    ];
    let mut cpu = init_cpu(program);
    cpu.bus.memory[0x10] = 0xC0;
    run(&mut cpu, 2);
    assert!(cpu.status.contains(Flags::ZERO));
    assert!(cpu.status.contains(Flags::OVERFLOW));
    assert!(cpu.status.contains(Flags::NEGATIVE));
    assert_eq!(cpu.register_a, 0x01);
}

#[test]
fn test_shifts_on_accumulator_and_memory() {
    let program = &[
        0xA9, 0x81, // LDA #$81
        0x0A, // ASL A -> $02, C=1
        0x6A, // ROR A -> $81, C=0
        0x26, 0x10, // ROL $10 -> $80, C=0
        0x46, 0x11, // LSR $11 -> $00, C=1
    ];
    let mut cpu = init_cpu(program);
    cpu.bus.memory[0x10] = 0x40;
    cpu.bus.memory[0x11] = 0x01;

    run(&mut cpu, 2);
    assert_eq!(cpu.register_a, 0x02);
    assert!(cpu.status.contains(Flags::CARRY));

    cpu.step();
    assert_eq!(cpu.register_a, 0x81);
    assert!(!cpu.status.contains(Flags::CARRY));
    assert!(cpu.status.contains(Flags::NEGATIVE));

    cpu.step();
    assert_eq!(cpu.bus.memory[0x10], 0x80);
    assert!(!cpu.status.contains(Flags::CARRY));
    assert!(cpu.status.contains(Flags::NEGATIVE));

    cpu.step();
    assert_eq!(cpu.bus.memory[0x11], 0x00);
    assert!(cpu.status.contains(Flags::CARRY));
    assert!(cpu.status.contains(Flags::ZERO));
    assert_eq!(cpu.register_a, 0x81);
}

#[test]
fn test_inc_dec_memory_wrap() {
    let program = &[
        0xE6, 0x10, // INC $10
        0xC6, 0x11, // DEC $11
    ];
    let mut cpu = init_cpu(program);
    cpu.bus.memory[0x10] = 0xFF;
    cpu.bus.memory[0x11] = 0x00;
    cpu.step();
    assert_eq!(cpu.bus.memory[0x10], 0x00);
    assert!(cpu.status.contains(Flags::ZERO));
    cpu.step();
    assert_eq!(cpu.bus.memory[0x11], 0xFF);
    assert!(cpu.status.contains(Flags::NEGATIVE));
}

#[test]
fn test_stack_round_trip_all_u16() {
    let mut cpu = init_cpu(&[]);
    for value in 0..=0xFFFFu16 {
        let sp = cpu.stack_pointer;
        cpu.push16(value);
        assert_eq!(cpu.stack_pointer, sp.wrapping_sub(2));
        assert_eq!(cpu.pull16(), value);
        assert_eq!(cpu.stack_pointer, sp);
    }
}

#[test]
fn test_stack_pointer_wraps() {
    let mut cpu = init_cpu(&[]);
    cpu.stack_pointer = 0x00;
    cpu.push(0xAB);
    assert_eq!(cpu.stack_pointer, 0xFF);
    assert_eq!(cpu.bus.memory[0x0100], 0xAB);
    assert_eq!(cpu.pull(), 0xAB);
    assert_eq!(cpu.stack_pointer, 0x00);
}

#[test]
fn test_branch_cycles() {
    // BEQ not taken (Z is clear after reset)
    let mut cpu = init_cpu(&[0xF0, 0x05]);
    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.program_counter, 0x8002);

    // BNE taken, same page
    let mut cpu = init_cpu(&[0xD0, 0x05]);
    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.program_counter, 0x8007);

    // BNE taken, backwards onto the previous page
    let mut cpu = init_cpu(&[0xD0, 0xFC]);
    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.program_counter, 0x7FFE);

    // BNE taken forwards across a page
    let mut cpu = init_cpu(&[]);
    cpu.program_counter = 0x80F0;
    cpu.bus.load(0x80F0, &[0xD0, 0x20]);
    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.program_counter, 0x8112);
}

#[test]
fn test_0x08_php_0x28_plp() {
    let program = &[
        0x38, // SEC
        0x08, // PHP
        0x28, // PLP
    ];
    let mut cpu = init_cpu(program);
    run(&mut cpu, 2);
    assert_eq!(cpu.bus.memory[0x01FD], 0x24 | 0x01 | 0x10);

    cpu.set_flags(0x00);
    cpu.step();
    assert_eq!(cpu.flags(), 0x25);
    assert_eq!(cpu.stack_pointer, 0xFD);
}

#[test]
fn test_0x20_jsr_0x60_rts() {
    let mut cpu = init_cpu(&[0x20, 0x10, 0x80]); // JSR $8010
    cpu.bus.memory[0x8010] = 0x60; // RTS

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.program_counter, 0x8010);
    assert_eq!(cpu.stack_pointer, 0xFB);
    assert_eq!(cpu.bus.memory[0x01FD], 0x80);
    assert_eq!(cpu.bus.memory[0x01FC], 0x02);

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.program_counter, 0x8003);
    assert_eq!(cpu.stack_pointer, 0xFD);
}

#[test]
fn test_0x00_brk_0x40_rti() {
    let mut cpu = init_cpu(&[0x00, 0xFF]); // BRK + padding byte
    cpu.bus.memory[0xFFFE] = 0x00;
    cpu.bus.memory[0xFFFF] = 0x90;
    cpu.bus.memory[0x9000] = 0x40; // RTI

    assert_eq!(cpu.step(), 7);
    assert_eq!(cpu.program_counter, 0x9000);
    assert_eq!(cpu.stack_pointer, 0xFA);
    assert_eq!(cpu.bus.memory[0x01FD], 0x80);
    assert_eq!(cpu.bus.memory[0x01FC], 0x02);
    assert_eq!(cpu.bus.memory[0x01FB], 0x34);
    assert!(cpu.status.contains(Flags::INTERRUPT_DISABLE));

    cpu.step();
    assert_eq!(cpu.program_counter, 0x8002);
    assert_eq!(cpu.flags(), 0x24);
    assert_eq!(cpu.stack_pointer, 0xFD);
}

#[test]
fn test_nmi_pushes_state_and_jumps() {
    let mut cpu = init_cpu(&[0xEA]);
    cpu.bus.memory[0xFFFA] = 0x00;
    cpu.bus.memory[0xFFFB] = 0x90;
    cpu.set_flags(0x34 & !0x04); // B set in the register, I clear
    let cycles = cpu.cycles;

    cpu.nmi();

    assert_eq!(cpu.program_counter, 0x9000);
    assert_eq!(cpu.cycles, cycles + 7);
    assert_eq!(cpu.bus.memory[0x01FD], 0x80);
    assert_eq!(cpu.bus.memory[0x01FC], 0x00);
    assert_eq!(cpu.bus.memory[0x01FB], 0x20); // B clear, U set
    assert!(cpu.status.contains(Flags::INTERRUPT_DISABLE));
}

#[test]
fn test_triggered_nmi_is_taken_before_next_fetch() {
    let mut cpu = init_cpu(&[0xEA, 0xEA]);
    cpu.bus.memory[0xFFFA] = 0x00;
    cpu.bus.memory[0xFFFB] = 0x90;
    cpu.bus.memory[0x9000] = 0xEA;

    cpu.bus.nmi_requested = true;
    assert_eq!(cpu.step(), 2); // NOP at $8000, NMI latched afterwards
    assert!(cpu.nmi_pending());
    assert_eq!(cpu.program_counter, 0x8001);

    assert_eq!(cpu.step(), 7 + 2); // NMI entry plus NOP at $9000
    assert!(!cpu.nmi_pending());
    assert_eq!(cpu.program_counter, 0x9001);
    assert_eq!(cpu.bus.cycles, 2 + 9);
}

#[test]
fn test_stall_burns_single_cycles() {
    let mut cpu = init_cpu(&[0xEA]);
    cpu.stall = 2;
    assert_eq!(cpu.step(), 1);
    assert_eq!(cpu.step(), 1);
    assert_eq!(cpu.program_counter, 0x8000);
    assert_eq!(cpu.bus.cycles, 2);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.program_counter, 0x8001);
    assert_eq!(cpu.cycles, 4);
}

#[test]
fn test_undocumented_opcodes_are_noops() {
    let program = &[
        0x07, 0x10, // SLO $10
        0x02, // KIL
        0x1C, 0xFF, 0x12, // NOP $12FF,X
    ];
    let mut cpu = init_cpu(program);
    cpu.register_x = 0x01;
    cpu.bus.memory[0x10] = 0x81;
    let flags = cpu.flags();

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.bus.memory[0x10], 0x81);
    assert_eq!(cpu.register_a, 0x00);
    assert_eq!(cpu.program_counter, 0x8002);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.program_counter, 0x8003);

    assert_eq!(cpu.step(), 5); // page cross still charged
    assert_eq!(cpu.program_counter, 0x8006);
    assert_eq!(cpu.flags(), flags);
}

#[test]
fn test_disassemble() {
    let mut cpu = init_cpu(&[]);
    cpu.bus.load(0xC000, &[0x4C, 0xF5, 0xC5, 0xEA]);
    assert_eq!(cpu.disassemble(0xC000), "C000  4C F5 C5  JMP");
    assert_eq!(cpu.disassemble(0xC003), "C003  EA        NOP");
}
