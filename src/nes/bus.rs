pub mod consts;
pub mod nes_bus;

#[cfg(test)]
pub mod simple_bus;
