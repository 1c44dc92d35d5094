pub const CPU_RAM_SIZE: usize = 2048;
pub const CPU_RAM_START: u16 = 0x0000;
pub const CPU_RAM_END: u16 = 0x1FFF;
pub const CPU_RAM_MIRROR_MASK: u16 = 0x07FF;

pub const PPU_REGISTERS_START: u16 = 0x2000;
pub const PPU_REGISTERS_END: u16 = 0x3FFF;
pub const PPU_REGISTER_MIRROR_MASK: u16 = 0x0007;

pub const IO_START: u16 = 0x4000;
pub const IO_END: u16 = 0x5FFF;
pub const JOYPAD_1: u16 = 0x4016;
pub const JOYPAD_2: u16 = 0x4017;

pub const CART_START: u16 = 0x6000;
pub const CART_END: u16 = 0xFFFF;

/// PPU ticks per CPU cycle (NTSC)
pub const PPU_TICKS_PER_CPU_CYCLE: u64 = 3;
