use super::{Cartridge, Mapper, Mirroring};
use crate::diag_warn;
use crate::nes::diagnostics::Diagnostics;

/// NROM: fixed PRG and CHR, no bank switching.
///
/// `$8000-$BFFF` shows the first PRG bank and `$C000-$FFFF` the last, so a
/// 16 KB board appears mirrored.
#[derive(Debug)]
pub struct Mapper000Nrom {
    cartridge: Cartridge,
    prg_bank1: usize,
    prg_bank2: usize,
    diagnostics: Diagnostics,
}

impl Mapper000Nrom {
    pub fn new(cartridge: Cartridge, diagnostics: Diagnostics) -> Mapper000Nrom {
        let prg_bank2 = cartridge.prg.len().saturating_sub(1);
        Mapper000Nrom {
            cartridge,
            prg_bank1: 0,
            prg_bank2,
            diagnostics,
        }
    }

    pub fn cartridge(&self) -> &Cartridge {
        &self.cartridge
    }
}

impl Mapper for Mapper000Nrom {
    fn read(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x1FFF => self.cartridge.chr.read(0, addr as usize),
            0xC000..=0xFFFF => self
                .cartridge
                .prg
                .read(self.prg_bank2, (addr - 0xC000) as usize),
            0x8000..=0xBFFF => self
                .cartridge
                .prg
                .read(self.prg_bank1, (addr - 0x8000) as usize),
            0x6000..=0x7FFF => self.cartridge.sram.read(0, (addr - 0x6000) as usize),
            _ => panic!("Unhandled NROM read at ${:04X}", addr),
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => {
                if self.cartridge.chr_is_ram() {
                    self.cartridge.chr.write(0, addr as usize, value);
                } else {
                    diag_warn!(
                        self.diagnostics,
                        "Dropped write to CHR ROM ${:04X} = ${:02X}",
                        addr,
                        value
                    );
                }
            }
            0x8000..=0xFFFF => {
                diag_warn!(
                    self.diagnostics,
                    "Dropped write to PRG ROM ${:04X} = ${:02X}",
                    addr,
                    value
                );
            }
            0x6000..=0x7FFF => self.cartridge.sram.write(0, (addr - 0x6000) as usize, value),
            _ => panic!("Unhandled NROM write at ${:04X}", addr),
        }
    }

    fn mirroring(&self) -> Mirroring {
        self.cartridge.mirroring
    }
}
