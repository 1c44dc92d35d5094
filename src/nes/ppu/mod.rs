use crate::nes::cartridge::{Mirroring, SharedMapper};
use crate::nes::diagnostics::Diagnostics;
use crate::nes::ppu::consts::*;
use crate::nes::ppu::nmi::{Nmi, NmiEvent};
use crate::nes::ppu::registers::control_register::ControlRegister;
use crate::nes::ppu::registers::mask_register::MaskRegister;
use crate::nes::ppu::registers::scroll_register::ScrollRegister;
use crate::nes::ppu::registers::status_register::StatusRegister;
use crate::{diag_debug, diag_warn, trace_ppu_event};
use std::fmt;

mod background;
pub mod consts;
pub mod nmi;
pub mod registers;


pub struct PPU {
    pub scanline: usize,
    pub cycles: usize,
    pub frame: u64,

    mapper: SharedMapper,
    pub ram: [u8; PPU_RAM_SIZE], // nametables + palette, indexed by mapped address

    pub ctrl_register: ControlRegister,  // $2000 (W)
    pub mask_register: MaskRegister,     // $2001 (W)
    pub status_register: StatusRegister, // $2002 (R)
    pub scroll_register: ScrollRegister, // $2005 / $2006 (W, latched)

    pub oam_addr: u8,                // $2003 (W)
    pub oam_data: [u8; OAM_SIZE],    // $2004 (R/W) Object Attribute Memory
    read_buffer: u8,                 // $2007 one-behind read buffer

    pub(crate) nmi: Nmi,
    diagnostics: Diagnostics,
}

impl PPU {
    pub fn new(mapper: SharedMapper, diagnostics: Diagnostics) -> Self {
        PPU {
            scanline: 0,
            cycles: 0,
            frame: 0,
            mapper,
            ram: [0; PPU_RAM_SIZE],
            ctrl_register: ControlRegister::new(),
            mask_register: MaskRegister::new(),
            status_register: StatusRegister::new(),
            scroll_register: ScrollRegister::new(),
            oam_addr: 0,
            oam_data: [0; OAM_SIZE],
            read_buffer: 0,
            nmi: Nmi::default(),
            diagnostics,
        }
    }

    /// Advances the dot counter by one, wrapping scanlines and frames.
    ///
    /// The pre-render line is one dot shorter on odd frames.
    pub fn tick(&mut self) {
        self.cycles += 1;

        let odd_frame = self.frame & 1 == 1;
        if self.scanline == PRERENDER_SCANLINE
            && (self.cycles == DOTS_PER_SCANLINE
                || (self.cycles == DOTS_PER_SCANLINE - 1 && odd_frame))
        {
            self.scanline = 0;
            self.cycles = 0;
            self.frame += 1;
        } else if self.cycles == DOTS_PER_SCANLINE {
            self.scanline += 1;
            self.cycles = 0;
        }
    }

    /// One PPU dot.
    ///
    /// # Returns
    ///
    /// `true` on the dot that enters vblank, i.e. a frame is complete
    pub fn step(&mut self) -> bool {
        self.tick();

        let visible = self.scanline <= LAST_VISIBLE_SCANLINE;
        let prerender = self.scanline == PRERENDER_SCANLINE;
        let fetch_window = matches!(self.cycles, 1..=256 | 321..=336);

        if self.mask_register.rendering_enabled() && (visible || prerender) {
            self.advance_scroll(prerender, fetch_window);
        }

        if self.scanline == VBLANK_SCANLINE && self.cycles == 1 {
            self.status_register.set_vblank_status();
            self.nmi_event(NmiEvent::VBlankSet);
            return true;
        }

        if prerender && self.cycles == 1 {
            self.status_register.reset_vblank_status();
            self.status_register.set_sprite_zero_hit(false);
            self.status_register.set_sprite_overflow(false);
            self.nmi_event(NmiEvent::VBlankCleared);
        }

        false
    }

    /// Consumes a pending NMI edge
    pub fn take_nmi_request(&mut self) -> bool {
        self.nmi.take_request()
    }

    fn nmi_event(&mut self, event: NmiEvent) {
        let was_high = self.nmi.line();
        self.nmi.on_event(event);
        if self.nmi.line() != was_high {
            trace_ppu_event!(
                self.diagnostics,
                "[NMI LINE {}] {:?} sl={} dot={}",
                if was_high { "LOW" } else { "HIGH" },
                event,
                self.scanline,
                self.cycles
            );
        }
    }

    /// CPU read of $2000-$2007. The bus has already folded the mirrors.
    pub fn read_register(&mut self, addr: u16) -> u8 {
        match addr {
            0x2002 => self.read_status(),
            0x2004 => self.oam_data[self.oam_addr as usize],
            0x2007 => self.read_data(),
            0x2000 | 0x2001 | 0x2003 | 0x2005 | 0x2006 => {
                diag_debug!(self.diagnostics, "Read of write-only PPU register ${:04X}", addr);
                0
            }
            _ => {
                diag_warn!(self.diagnostics, "Unknown PPU register read ${:04X}", addr);
                0
            }
        }
    }

    /// CPU write of $2000-$2007. The bus has already folded the mirrors.
    pub fn write_register(&mut self, addr: u16, value: u8) {
        match addr {
            0x2000 => self.write_control(value),
            0x2001 => self.mask_register.update(value),
            0x2003 => self.oam_addr = value,
            0x2004 => {
                self.oam_data[self.oam_addr as usize] = value;
                self.oam_addr = self.oam_addr.wrapping_add(1);
            }
            0x2005 => self.scroll_register.write_scroll(value),
            0x2006 => self.scroll_register.write_to_addr(value),
            0x2007 => self.write_data(value),
            0x2002 => {
                diag_warn!(self.diagnostics, "Write to read-only PPUSTATUS = ${:02X}", value);
            }
            _ => {
                diag_warn!(
                    self.diagnostics,
                    "Unknown PPU register write ${:04X} = ${:02X}",
                    addr,
                    value
                );
            }
        }
    }

    fn read_status(&mut self) -> u8 {
        let result = self.status_register.value() & 0xE0;
        self.status_register.reset_vblank_status();
        self.scroll_register.reset_latch();
        self.nmi_event(NmiEvent::StatusReadClearsVBlank);
        result
    }

    fn read_data(&mut self) -> u8 {
        let addr = self.scroll_register.get_addr();
        let previous = self.read_buffer;
        self.read_buffer = self.read_memory(addr);

        // Palette reads skip the buffer
        let result = if addr <= 0x3EFF {
            previous
        } else {
            self.read_buffer
        };

        self.scroll_register
            .increment_addr(self.ctrl_register.addr_increment());
        result
    }

    fn write_data(&mut self, value: u8) {
        let addr = self.scroll_register.get_addr();
        self.write_memory(addr, value);
        self.scroll_register
            .increment_addr(self.ctrl_register.addr_increment());
    }

    fn write_control(&mut self, value: u8) {
        let was_enabled = self.ctrl_register.generate_vblank_nmi();
        self.ctrl_register.update(value);
        self.scroll_register.write_nametable_select(value);

        match (was_enabled, self.ctrl_register.generate_vblank_nmi()) {
            (false, true) => self.nmi_event(NmiEvent::NmiEnableSet),
            (true, false) => self.nmi_event(NmiEvent::NmiEnableCleared),
            _ => {}
        }
    }

    /// PPU-side bus read: pattern tables go to the mapper, the rest to PPU RAM
    pub fn read_memory(&self, addr: u16) -> u8 {
        let addr = self.map_address(addr);
        if addr < 0x2000 {
            self.mapper.borrow().read(addr)
        } else {
            self.ram[addr as usize]
        }
    }

    pub fn write_memory(&mut self, addr: u16, value: u8) {
        let addr = self.map_address(addr);
        if addr < 0x2000 {
            self.mapper.borrow_mut().write(addr, value);
        } else {
            self.ram[addr as usize] = value;
        }
    }

    /// Folds a 14-bit PPU address onto the storage that backs it
    pub fn map_address(&self, addr: u16) -> u16 {
        let mut addr = addr & 0x3FFF;

        // $3000-$3EFF mirrors the nametables, $3F20-$3FFF the palette
        if (0x3000..=0x3EFF).contains(&addr) {
            addr -= 0x1000;
        } else if addr >= 0x3F20 {
            addr = PALETTE_START | (addr & 0x1F);
        }

        match addr {
            // Sprite backdrop entries alias the background ones
            0x3F10 | 0x3F14 | 0x3F18 | 0x3F1C => addr - 0x10,
            0x2000..=0x2FFF => {
                let mirroring = self.mapper.borrow().mirroring();
                match mirroring {
                    Mirroring::Horizontal => match addr {
                        0x2400..=0x27FF | 0x2C00..=0x2FFF => addr - 0x400,
                        _ => addr,
                    },
                    Mirroring::Vertical => match addr {
                        0x2800..=0x2FFF => addr - 0x800,
                        _ => addr,
                    },
                    Mirroring::SingleLow => 0x2000 | (addr & 0x3FF),
                    Mirroring::SingleHigh => 0x2400 | (addr & 0x3FF),
                    Mirroring::FourScreen => addr,
                }
            }
            _ => addr,
        }
    }
}

impl fmt::Display for PPU {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PPU[scanline={}, cycle={}, coarse_x={}, fine_x={}, coarse_y={}, fine_y={}, nametable={}, rendering={}]",
            self.scanline,
            self.cycles,
            self.scroll_register.coarse_x(),
            self.scroll_register.x,
            self.scroll_register.coarse_y(),
            self.scroll_register.fine_y(),
            self.scroll_register.nametable(),
            self.mask_register.rendering_enabled()
        )
    }
}
