// See: https://www.nesdev.org/wiki/Standard_controller

use super::NesController;
use bitflags::bitflags;

bitflags! {
    /// Buttons in the order the shift register reports them
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct JoypadButtons: u8 {
        const BUTTON_A = 0b0000_0001;
        const BUTTON_B = 0b0000_0010;
        const SELECT   = 0b0000_0100;
        const START    = 0b0000_1000;
        const UP       = 0b0001_0000;
        const DOWN     = 0b0010_0000;
        const LEFT     = 0b0100_0000;
        const RIGHT    = 0b1000_0000;
    }
}

#[derive(Debug, Default)]
pub struct Joypad {
    buttons: JoypadButtons,
    button_index: u8,
    strobe: bool,
}

impl NesController for Joypad {
    fn read(&mut self) -> u8 {
        // Official pads report 1 once all 8 buttons are shifted out
        if self.button_index > 7 {
            return 1;
        }
        let status = (self.buttons.bits() >> self.button_index) & 0b1;
        if !self.strobe {
            self.button_index += 1;
        }
        status
    }

    fn write(&mut self, data: u8) {
        let was_strobing = self.strobe;
        self.strobe = data & 0b1 == 1;
        if self.strobe || was_strobing {
            self.button_index = 0;
        }
    }
}

impl Joypad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_button_status(&mut self, button: JoypadButtons, state: bool) {
        self.buttons.set(button, state);
    }

    /// Replaces every button at once, A first and Right last
    pub fn set_buttons(&mut self, buttons: [bool; 8]) {
        let bits = buttons
            .iter()
            .enumerate()
            .fold(0u8, |bits, (i, &pressed)| bits | ((pressed as u8) << i));
        self.buttons = JoypadButtons::from_bits_truncate(bits);
    }

    pub fn buttons(&self) -> JoypadButtons {
        self.buttons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joypad_default_state() {
        let joypad = Joypad::new();
        assert_eq!(joypad.buttons.bits(), 0);
        assert!(!joypad.strobe);
        assert_eq!(joypad.button_index, 0);
    }

    #[test]
    fn test_button_press_and_release() {
        let mut joypad = Joypad::new();

        joypad.set_button_status(JoypadButtons::BUTTON_A, true);
        joypad.set_button_status(JoypadButtons::START, true);
        assert!(joypad.buttons().contains(JoypadButtons::BUTTON_A));
        assert!(joypad.buttons().contains(JoypadButtons::START));
        assert!(!joypad.buttons().contains(JoypadButtons::BUTTON_B));

        joypad.set_button_status(JoypadButtons::BUTTON_A, false);
        assert!(!joypad.buttons().contains(JoypadButtons::BUTTON_A));
    }

    #[test]
    fn test_set_buttons_snapshot() {
        let mut joypad = Joypad::new();
        joypad.set_buttons([true, false, false, true, false, false, false, true]);
        assert_eq!(
            joypad.buttons(),
            JoypadButtons::BUTTON_A | JoypadButtons::START | JoypadButtons::RIGHT
        );
    }

    #[test]
    fn test_strobe_behavior() {
        let mut joypad = Joypad::new();
        joypad.set_buttons([true, false, false, false, false, false, false, true]);

        // Strobe held: always button A, index stays put
        joypad.write(1);
        for _ in 0..10 {
            assert_eq!(joypad.read(), 1);
        }
        assert_eq!(joypad.button_index, 0);

        joypad.write(0);
        assert!(!joypad.strobe);
        assert_eq!(joypad.button_index, 0);

        let bits: Vec<u8> = (0..8).map(|_| joypad.read()).collect();
        assert_eq!(bits, vec![1, 0, 0, 0, 0, 0, 0, 1]);

        // Past the 8th read
        assert_eq!(joypad.read(), 1);
        assert_eq!(joypad.read(), 1);
    }

    #[test]
    fn test_clearing_strobe_rewinds_index() {
        let mut joypad = Joypad::new();
        joypad.set_buttons([false, true, false, false, false, false, false, false]);

        joypad.read();
        joypad.read();
        assert_eq!(joypad.button_index, 2);

        // Writing 0 with strobe already low leaves the index alone
        joypad.write(0);
        assert_eq!(joypad.button_index, 2);

        joypad.write(1);
        joypad.write(0);
        assert_eq!(joypad.read(), 0);
        assert_eq!(joypad.read(), 1);
    }
}
