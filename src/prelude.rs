//! Convenient imports for consumers of the core
//!
//! Pull in everything commonly needed in one line:
//! ```rust
//! use lockstep_nes::prelude::*;
//! ```

// Main emulator API
pub use crate::nes::NES;
pub use crate::nes::cartridge::{Cartridge, CartridgeError, Mapper, Mirroring, new_mapper};
pub use crate::nes::controller::joypad::{Joypad, JoypadButtons};
pub use crate::nes::cpu::CPU;
pub use crate::nes::ppu::PPU;

// Logging collaborators
pub use crate::nes::diagnostics::{Diagnostics, DiagnosticsSink, LogSink, MemorySink};

// Constants
pub use crate::nes::ppu::consts::NES_SYSTEM_PALETTE;
