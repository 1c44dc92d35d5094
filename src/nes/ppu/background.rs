use super::PPU;
use crate::nes::ppu::consts::{
    ATTRIBUTE_TABLE_START, FRAME_SIZE, NAMETABLE_START, NES_HEIGHT, NES_SYSTEM_PALETTE, NES_WIDTH,
    PALETTE_START,
};

impl PPU {
    /// Background palette index (0..=63) at screen position `(x, y)`,
    /// read from the first nametable.
    pub fn get_pixel(&self, x: usize, y: usize) -> u8 {
        // Tile in the 32x30 grid
        let cell = (x >> 3) + (y >> 3) * 32;
        let name = self.read_memory(NAMETABLE_START + cell as u16) as u16;

        let row = (y & 0x7) as u16;
        let tile_addr = self.ctrl_register.background_pattern_addr() + (name << 4) + row;
        let plane0 = self.read_memory(tile_addr);
        let plane1 = self.read_memory(tile_addr + 8);

        let shift = 7 - (x & 0x7);
        let low = ((plane0 >> shift) & 1) | (((plane1 >> shift) & 1) << 1);

        // One attribute byte per 32x32 block, 2 bits per 16x16 quadrant
        let block = (x >> 5) + (y >> 5) * 8;
        let attr = self.read_memory(ATTRIBUTE_TABLE_START + block as u16);
        let quadrant = ((x & 0x10) >> 3) | ((y & 0x10) >> 2);
        let high = ((attr >> quadrant) & 0b11) << 2;

        self.read_memory(PALETTE_START + (low | high) as u16) & 0x3F
    }

    pub fn get_pixel_rgb(&self, x: usize, y: usize) -> (u8, u8, u8) {
        NES_SYSTEM_PALETTE[self.get_pixel(x, y) as usize]
    }

    /// Fills `buffer` row by row with `get_pixel`
    pub fn render_background(&self, buffer: &mut [u8; FRAME_SIZE]) {
        for y in 0..NES_HEIGHT {
            for x in 0..NES_WIDTH {
                buffer[y * NES_WIDTH + x] = self.get_pixel(x, y);
            }
        }
    }

    /// Loopy v updates for one rendering dot on a visible or pre-render line
    pub(super) fn advance_scroll(&mut self, prerender: bool, fetch_window: bool) {
        if fetch_window && self.cycles % 8 == 0 {
            self.scroll_register.increment_x();
        }
        match self.cycles {
            256 => self.scroll_register.increment_y(),
            257 => self.scroll_register.copy_horizontal_bits(),
            280..=304 if prerender => self.scroll_register.copy_vertical_bits(),
            _ => {}
        }
    }
}
