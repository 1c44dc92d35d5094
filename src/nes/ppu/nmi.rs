#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NmiEvent {
    /// PPU enters vblank
    VBlankSet,
    /// PPU exits vblank
    VBlankCleared,
    /// $2000 bit 7 went 0->1
    NmiEnableSet,
    /// $2000 bit 7 went 1->0
    NmiEnableCleared,
    /// $2002 read cleared the vblank flag
    StatusReadClearsVBlank,
}

/// PPU-side NMI line model.
///
/// The line is `vblank && enabled`. The CPU reacts to rising edges only, so
/// each low->high transition latches one request until it is taken.
#[derive(Debug, Default)]
pub struct Nmi {
    enabled: bool,
    vblank: bool,

    /// NMI output line level driven by the PPU
    line: bool,

    /// Rising edge seen but not yet handed to the CPU
    requested: bool,
}

impl Nmi {
    /// Current NMI output line level
    #[inline]
    pub fn line(&self) -> bool {
        self.line
    }

    /// Consumes a latched edge, if any
    pub fn take_request(&mut self) -> bool {
        std::mem::take(&mut self.requested)
    }

    pub fn on_event(&mut self, event: NmiEvent) {
        match event {
            NmiEvent::VBlankSet => self.vblank = true,
            NmiEvent::VBlankCleared | NmiEvent::StatusReadClearsVBlank => self.vblank = false,
            NmiEvent::NmiEnableSet => self.enabled = true,
            NmiEvent::NmiEnableCleared => self.enabled = false,
        }

        let high = self.enabled && self.vblank;
        if high && !self.line {
            self.requested = true;
        }
        self.line = high;
    }
}
