use crate::diag_warn;
use crate::nes::bus::nes_bus::NesBus;
use crate::nes::cartridge::{Cartridge, CartridgeError, new_mapper};
use crate::nes::cpu::CPU;
use crate::nes::diagnostics::Diagnostics;
use crate::nes::ppu::PPU;
use crate::nes::ppu::consts::FRAME_SIZE;

pub mod bus;
pub mod cartridge;
pub mod controller;
pub mod cpu;
pub mod diagnostics;
pub mod ppu;


/// A console: CPU, bus, PPU, joypads and the inserted cartridge, clocked in
/// lock-step from `step`.
pub struct NES {
    cpu: CPU<NesBus>,
    frame_buffer: Box<[u8; FRAME_SIZE]>,
    diagnostics: Diagnostics,
}

impl NES {
    /// Builds a console around `cartridge`, logging through the `log` facade
    pub fn new(cartridge: Cartridge, mapper_id: u8) -> Result<NES, CartridgeError> {
        Self::with_diagnostics(cartridge, mapper_id, Diagnostics::default())
    }

    pub fn with_diagnostics(
        cartridge: Cartridge,
        mapper_id: u8,
        diagnostics: Diagnostics,
    ) -> Result<NES, CartridgeError> {
        let mapper = new_mapper(mapper_id, cartridge, &diagnostics)?;
        let ppu = PPU::new(mapper.clone(), diagnostics.for_component("PPU"));
        let bus = NesBus::new(mapper, ppu, diagnostics.for_component("BUS"));

        let mut cpu = CPU::new(bus, diagnostics.for_component("CPU"));
        cpu.reset();

        Ok(NES {
            cpu,
            frame_buffer: Box::new([0; FRAME_SIZE]),
            diagnostics: diagnostics.for_component("NES"),
        })
    }

    /// One CPU instruction, with the PPU caught up behind it
    pub fn step(&mut self) -> u64 {
        self.cpu.step()
    }

    /// Runs until the PPU enters vblank, then redraws the frame buffer.
    ///
    /// # Returns
    ///
    /// CPU cycles spent
    pub fn step_frame(&mut self) -> u64 {
        // A vblank crossed by earlier `step` calls must not end this frame
        self.cpu.bus.take_frame_ready();

        let mut cycles = 0;
        loop {
            cycles += self.cpu.step();
            if self.cpu.bus.take_frame_ready() {
                break;
            }
        }
        self.cpu.bus.ppu.render_background(&mut self.frame_buffer);
        cycles
    }

    /// Palette indices (0..=63), row-major, 256x240
    pub fn frame_buffer(&self) -> &[u8; FRAME_SIZE] {
        &self.frame_buffer
    }

    /// Replaces the button snapshot of joypad `player` (0 or 1)
    pub fn set_buttons(&mut self, player: usize, buttons: [bool; 8]) {
        match self.cpu.bus.joypads.get_mut(player) {
            Some(joypad) => joypad.set_buttons(buttons),
            None => diag_warn!(self.diagnostics, "No joypad port for player {}", player),
        }
    }

    pub fn cpu(&self) -> &CPU<NesBus> {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut CPU<NesBus> {
        &mut self.cpu
    }

    pub fn ppu(&self) -> &PPU {
        &self.cpu.bus.ppu
    }
}
