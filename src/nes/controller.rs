pub mod joypad;

/// A device on one of the $4016/$4017 serial ports
pub trait NesController {
    fn read(&mut self) -> u8;
    fn write(&mut self, data: u8);
}
