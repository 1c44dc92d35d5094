use crate::diag_debug;
use crate::nes::bus::consts::*;
use crate::nes::cartridge::SharedMapper;
use crate::nes::controller::NesController;
use crate::nes::controller::joypad::Joypad;
use crate::nes::cpu::CpuBusInterface;
use crate::nes::diagnostics::Diagnostics;
use crate::nes::ppu::PPU;

/// CPU-side address decoder. Owns the PPU and joypads and shares the mapper
/// with the PPU.
pub struct NesBus {
    pub cpu_ram: [u8; CPU_RAM_SIZE],
    pub ppu: PPU,
    mapper: SharedMapper,
    pub joypads: [Joypad; 2],

    frame_ready: bool,
    nmi_pending: bool,
    diagnostics: Diagnostics,
}

impl NesBus {
    pub fn new(mapper: SharedMapper, ppu: PPU, diagnostics: Diagnostics) -> Self {
        NesBus {
            cpu_ram: [0; CPU_RAM_SIZE],
            ppu,
            mapper,
            joypads: [Joypad::new(), Joypad::new()],
            frame_ready: false,
            nmi_pending: false,
            diagnostics,
        }
    }

    /// Returns `true` once after the PPU entered vblank
    pub fn take_frame_ready(&mut self) -> bool {
        std::mem::take(&mut self.frame_ready)
    }

    pub fn mapper(&self) -> &SharedMapper {
        &self.mapper
    }

    fn read_io(&mut self, addr: u16) -> u8 {
        match addr {
            JOYPAD_1 => self.joypads[0].read(),
            JOYPAD_2 => self.joypads[1].read(),
            _ => {
                diag_debug!(self.diagnostics, "Unimplemented I/O read ${:04X}", addr);
                0
            }
        }
    }

    fn write_io(&mut self, addr: u16, value: u8) {
        match addr {
            // One strobe line feeds both ports
            JOYPAD_1 => {
                for joypad in self.joypads.iter_mut() {
                    joypad.write(value);
                }
            }
            _ => {
                diag_debug!(
                    self.diagnostics,
                    "Unimplemented I/O write ${:04X} = ${:02X}",
                    addr,
                    value
                );
            }
        }
    }
}

impl CpuBusInterface for NesBus {
    fn cpu_bus_read(&mut self, addr: u16) -> u8 {
        match addr {
            CPU_RAM_START..=CPU_RAM_END => self.cpu_ram[(addr & CPU_RAM_MIRROR_MASK) as usize],
            PPU_REGISTERS_START..=PPU_REGISTERS_END => self
                .ppu
                .read_register(PPU_REGISTERS_START + (addr & PPU_REGISTER_MIRROR_MASK)),
            IO_START..=IO_END => self.read_io(addr),
            CART_START..=CART_END => self.mapper.borrow().read(addr),
        }
    }

    fn cpu_bus_write(&mut self, addr: u16, value: u8) {
        match addr {
            CPU_RAM_START..=CPU_RAM_END => {
                self.cpu_ram[(addr & CPU_RAM_MIRROR_MASK) as usize] = value;
            }
            PPU_REGISTERS_START..=PPU_REGISTERS_END => self
                .ppu
                .write_register(PPU_REGISTERS_START + (addr & PPU_REGISTER_MIRROR_MASK), value),
            IO_START..=IO_END => self.write_io(addr, value),
            CART_START..=CART_END => self.mapper.borrow_mut().write(addr, value),
        }
    }

    /// Runs the PPU three dots per CPU cycle
    fn tick(&mut self, cycles: u64) {
        for _ in 0..cycles * PPU_TICKS_PER_CPU_CYCLE {
            if self.ppu.step() {
                self.frame_ready = true;
            }
            if self.ppu.take_nmi_request() {
                self.nmi_pending = true;
            }
        }
    }

    fn poll_nmi(&mut self) -> bool {
        std::mem::take(&mut self.nmi_pending)
    }
}
