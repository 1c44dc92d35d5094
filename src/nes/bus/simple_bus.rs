use crate::nes::cpu::CpuBusInterface;

/// Flat 64 KB address space with no mirroring or devices.
///
/// Lets instruction tests poke vectors and programs anywhere.
pub struct SimpleBus {
    pub memory: [u8; 0x10000],
    pub cycles: u64,
    pub nmi_requested: bool,
}

impl SimpleBus {
    pub fn new() -> Self {
        Self {
            memory: [0; 0x10000],
            cycles: 0,
            nmi_requested: false,
        }
    }

    /// Copies `program` to `addr` and points the reset vector at it
    pub fn with_program(addr: u16, program: &[u8]) -> Self {
        let mut bus = Self::new();
        bus.load(addr, program);
        bus.memory[0xFFFC] = addr as u8;
        bus.memory[0xFFFD] = (addr >> 8) as u8;
        bus
    }

    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        let start = addr as usize;
        self.memory[start..start + bytes.len()].copy_from_slice(bytes);
    }
}

impl CpuBusInterface for SimpleBus {
    fn cpu_bus_read(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn cpu_bus_write(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }

    fn tick(&mut self, cycles: u64) {
        self.cycles += cycles;
    }

    fn poll_nmi(&mut self) -> bool {
        std::mem::take(&mut self.nmi_requested)
    }
}
