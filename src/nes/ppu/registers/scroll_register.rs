/* See: https://www.nesdev.org/wiki/PPU_scrolling#PPU_internal_registers

   v and t share one layout:

   yyy NN YYYYY XXXXX
   ||| || ||||| +++++-- coarse X scroll (5 bits)
   ||| || +++++-------- coarse Y scroll (5 bits)
   ||| ++-------------- nametable select (2 bits)
   +++----------------- fine Y scroll (3 bits)
*/

const ADDR_MASK: u16 = 0x7FFF;

/// Loopy registers.
///
/// - `v`: current VRAM address (15 bits), used for PPUDATA and rendering
/// - `t`: temporary VRAM address (15 bits), staged by $2000/$2005/$2006 writes
/// - `x`: fine X scroll (3 bits)
/// - `w`: first/second write toggle shared by $2005 and $2006
#[derive(Debug, Default, Clone, Copy)]
pub struct ScrollRegister {
    pub v: u16,
    pub t: u16,
    pub x: u8,
    pub w: bool,
}

impl ScrollRegister {
    pub fn new() -> Self {
        Self::default()
    }

    /// $2000 write: nametable select goes into t bits 10-11
    pub fn write_nametable_select(&mut self, data: u8) {
        self.t = (self.t & 0x73FF) | (((data as u16) & 0b11) << 10);
    }

    pub fn write_scroll(&mut self, data: u8) {
        if !self.w {
            // t: ....... ...HGFED = d: HGFED...
            // x:              CBA = d: .....CBA
            self.t = (self.t & 0xFFE0) | ((data as u16) >> 3);
            self.x = data & 0b0000_0111;
        } else {
            // t: CBA..HG FED..... = d: HGFEDCBA
            self.t = (self.t & 0x0C1F)
                | (((data as u16) & 0x07) << 12)
                | (((data as u16) & 0xF8) << 2);
        }
        self.t &= ADDR_MASK;
        self.w = !self.w;
    }

    pub fn write_to_addr(&mut self, data: u8) {
        if !self.w {
            // t: .FEDCBA ........ = d: ..FEDCBA
            // t: X...... ........ = 0
            self.t = (self.t & 0x00FF) | (((data as u16) & 0x3F) << 8);
        } else {
            // t: ....... HGFEDCBA = d: HGFEDCBA
            // v                   = t
            self.t = (self.t & 0xFF00) | (data as u16);
            self.v = self.t;
        }
        self.t &= ADDR_MASK;
        self.w = !self.w;
    }

    pub fn get_addr(&self) -> u16 {
        self.v & 0x3FFF // mirror down to 0x0000–0x3FFF
    }

    pub fn increment_addr(&mut self, inc: u16) {
        self.v = self.v.wrapping_add(inc) & ADDR_MASK;
    }

    pub fn reset_latch(&mut self) {
        self.w = false;
    }

    pub fn increment_x(&mut self) {
        if (self.v & 0x001F) == 31 {
            self.v &= !0x001F;
            self.v ^= 0x0400;
        } else {
            self.v += 1;
        }
    }

    pub fn increment_y(&mut self) {
        if (self.v & 0x7000) != 0x7000 {
            self.v += 0x1000; // fine Y
        } else {
            self.v &= !0x7000;
            let mut y = (self.v >> 5) & 0x1F;

            if y == 29 {
                y = 0;
                self.v ^= 0x0800; // switch vertical nametable
            } else if y == 31 {
                y = 0; // attribute rows: wrap without switching
            } else {
                y += 1;
            }

            self.v = (self.v & !0x03E0) | (y << 5);
        }
    }

    pub fn copy_horizontal_bits(&mut self) {
        // NT X + coarse X
        let mask = 0b0000_0100_0001_1111;
        self.v = (self.v & !mask) | (self.t & mask);
    }

    pub fn copy_vertical_bits(&mut self) {
        // fine Y + NT Y + coarse Y
        let mask = 0b0111_1011_1110_0000;
        self.v = (self.v & !mask) | (self.t & mask);
    }

    pub fn coarse_x(&self) -> u16 {
        self.v & 0x001F
    }

    pub fn coarse_y(&self) -> u16 {
        (self.v & 0x03E0) >> 5
    }

    pub fn fine_y(&self) -> u16 {
        (self.v & 0x7000) >> 12
    }

    pub fn nametable(&self) -> u16 {
        (self.v & 0x0C00) >> 10
    }
}
