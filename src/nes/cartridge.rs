use crate::nes::diagnostics::Diagnostics;
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

pub mod mapper000_nrom;

pub use mapper000_nrom::Mapper000Nrom;

pub const PRG_BANK_SIZE: usize = 0x4000;
pub const CHR_BANK_SIZE: usize = 0x2000;
pub const SRAM_BANK_SIZE: usize = 0x2000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartridgeError {
    #[error("Unsupported Mapper: {0}")]
    UnsupportedMapper(u8),

    #[error("Cartridge has no PRG ROM")]
    MissingPrgRom,

    #[error("PRG ROM is {0} bytes, expected a multiple of 16 KB")]
    MalformedPrgRom(usize),

    #[error("CHR ROM is {0} bytes, expected a multiple of 8 KB")]
    MalformedChrRom(usize),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mirroring {
    Horizontal,
    Vertical,
    SingleLow,
    SingleHigh,
    FourScreen,
}

/// Arena of fixed-size banks addressed by plain index
#[derive(Clone)]
pub struct Banks<const N: usize> {
    banks: Vec<[u8; N]>,
}

impl<const N: usize> Banks<N> {
    pub fn zeroed(count: usize) -> Self {
        Self {
            banks: vec![[0; N]; count],
        }
    }

    /// Splits `data` into banks. Returns `None` unless `data` is a whole number of banks.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        if data.len() % N != 0 {
            return None;
        }
        let banks = data
            .chunks_exact(N)
            .map(|chunk| {
                let mut bank = [0; N];
                bank.copy_from_slice(chunk);
                bank
            })
            .collect();
        Some(Self { banks })
    }

    pub fn len(&self) -> usize {
        self.banks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }

    #[inline]
    pub fn read(&self, bank: usize, offset: usize) -> u8 {
        self.banks[bank][offset]
    }

    #[inline]
    pub fn write(&mut self, bank: usize, offset: usize, value: u8) {
        self.banks[bank][offset] = value;
    }
}

impl<const N: usize> std::fmt::Debug for Banks<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Banks<{:#X}>[{}]", N, self.banks.len())
    }
}

/// PRG/CHR/SRAM banks plus the board's nametable wiring.
///
/// Produced by an external loader; the core never parses ROM images.
#[derive(Debug, Clone)]
pub struct Cartridge {
    pub prg: Banks<PRG_BANK_SIZE>,
    pub chr: Banks<CHR_BANK_SIZE>,
    pub sram: Banks<SRAM_BANK_SIZE>,
    pub mirroring: Mirroring,
    chr_is_ram: bool,
}

impl Cartridge {
    /// Builds a cartridge from raw PRG and CHR data.
    ///
    /// Empty CHR data gets one bank of CHR-RAM, and at least one SRAM bank always exists.
    pub fn new(
        prg_rom: &[u8],
        chr_rom: &[u8],
        sram_banks: usize,
        mirroring: Mirroring,
    ) -> Result<Cartridge, CartridgeError> {
        if prg_rom.is_empty() {
            return Err(CartridgeError::MissingPrgRom);
        }
        let prg = Banks::from_bytes(prg_rom).ok_or(CartridgeError::MalformedPrgRom(prg_rom.len()))?;

        let chr_is_ram = chr_rom.is_empty();
        let chr = if chr_is_ram {
            Banks::zeroed(1)
        } else {
            Banks::from_bytes(chr_rom).ok_or(CartridgeError::MalformedChrRom(chr_rom.len()))?
        };

        Ok(Cartridge {
            prg,
            chr,
            sram: Banks::zeroed(sram_banks.max(1)),
            mirroring,
            chr_is_ram,
        })
    }

    pub fn chr_is_ram(&self) -> bool {
        self.chr_is_ram
    }
}

pub trait Mapper {
    /// CPU ($6000-$FFFF) or PPU pattern table ($0000-$1FFF) read
    fn read(&self, addr: u16) -> u8;

    /// CPU ($6000-$FFFF) or PPU pattern table ($0000-$1FFF) write
    fn write(&mut self, addr: u16, value: u8);

    /// Nametable mirroring mode
    fn mirroring(&self) -> Mirroring;
}

/// Shared between the CPU bus and the PPU
pub type SharedMapper = Rc<RefCell<dyn Mapper>>;

pub fn new_mapper(
    mapper_id: u8,
    cartridge: Cartridge,
    diagnostics: &Diagnostics,
) -> Result<SharedMapper, CartridgeError> {
    match mapper_id {
        0 => Ok(Rc::new(RefCell::new(Mapper000Nrom::new(
            cartridge,
            diagnostics.for_component("MAPPER"),
        )))),
        id => Err(CartridgeError::UnsupportedMapper(id)),
    }
}
