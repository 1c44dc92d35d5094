// NES core modules
pub mod nes;
pub mod prelude;

// Re-exports
pub use nes::NES;

pub use nes::cartridge::{Cartridge, CartridgeError, Mirroring};
pub use nes::diagnostics::Diagnostics;
