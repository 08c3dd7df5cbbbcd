//! Driver against a register-file model of the device instead of a scripted mock.

use std::cell::Cell;
use std::rc::Rc;

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};
use max77801_rs::data_types::{DvsState, EnableConfig, EnableState};
use max77801_rs::{Max77801, Register, DEFAULT_I2C_ADDRESS};

/// Stores every written byte; reads return what was stored.
struct RegisterFile {
    regs: [u8; 8],
    pointer: usize,
    transactions: usize,
    drops: Rc<Cell<u32>>,
}

impl RegisterFile {
    fn new(drops: Rc<Cell<u32>>) -> Self {
        Self {
            regs: [0; 8],
            pointer: 0,
            transactions: 0,
            drops,
        }
    }
}

impl Drop for RegisterFile {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

impl ErrorType for RegisterFile {
    type Error = ErrorKind;
}

impl I2c for RegisterFile {
    fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
        if address != DEFAULT_I2C_ADDRESS {
            return Err(ErrorKind::NoAcknowledge(embedded_hal::i2c::NoAcknowledgeSource::Address));
        }
        self.transactions += 1;
        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    if let Some((reg, data)) = bytes.split_first() {
                        self.pointer = *reg as usize;
                        for byte in data {
                            self.regs[self.pointer] = *byte;
                            self.pointer += 1;
                        }
                    }
                }
                Operation::Read(buf) => {
                    for byte in buf.iter_mut() {
                        *byte = self.regs[self.pointer];
                        self.pointer += 1;
                    }
                }
            }
        }
        Ok(())
    }
}

#[test]
fn write_then_read_returns_value_for_every_register() {
    let drops = Rc::new(Cell::new(0));
    let mut bus = RegisterFile::new(drops.clone());
    {
        let mut driver = Max77801::borrowed(&mut bus);
        for (i, reg) in Register::ALL.into_iter().enumerate() {
            let value = 0xA0 | i as u8;
            driver.write_register(reg, value).unwrap();
            assert_eq!(driver.read_register(reg), Ok(value));
        }
    }
    assert_eq!(bus.transactions, 12);
}

#[test]
fn config_sequence_accumulates_bits() {
    let drops = Rc::new(Cell::new(0));
    let mut driver = Max77801::new(RegisterFile::new(drops.clone()));
    driver.init().unwrap();
    driver.config_enable(EnableConfig::ForcedPwm, EnableState::Enabled).unwrap();
    driver.config_enable(EnableConfig::ActiveDischarge, EnableState::Disabled).unwrap();
    driver.config_enable(EnableConfig::BuckBoostOutput, EnableState::Disabled).unwrap();
    assert_eq!(driver.read_register(Register::Config1), Ok(0x0D));
    assert_eq!(driver.read_register(Register::Config2), Ok(0x30));

    driver.set_vout(3.3, DvsState::Low).unwrap();
    driver.set_vout(4.1875, DvsState::High).unwrap();
    assert_eq!(driver.vout_code(DvsState::Low), Ok(56));
    assert_eq!(driver.vout_code(DvsState::High), Ok(127));
}

#[test]
fn owned_bus_released_once_on_drop() {
    let drops = Rc::new(Cell::new(0));
    let driver = Max77801::new(RegisterFile::new(drops.clone()));
    assert!(driver.is_owner());
    drop(driver);
    assert_eq!(drops.get(), 1);
}

#[test]
fn freed_bus_outlives_driver() {
    let drops = Rc::new(Cell::new(0));
    let driver = Max77801::new(RegisterFile::new(drops.clone()));
    let bus = driver.free().unwrap();
    assert_eq!(drops.get(), 0);
    drop(bus);
    assert_eq!(drops.get(), 1);
}

#[test]
fn borrowed_bus_never_released_by_driver() {
    let drops = Rc::new(Cell::new(0));
    let mut bus = RegisterFile::new(drops.clone());
    {
        let mut driver = Max77801::borrowed(&mut bus);
        assert!(!driver.is_owner());
        driver.init().unwrap();
    }
    assert_eq!(drops.get(), 0);
    assert_eq!(bus.regs[Register::Config2.addr() as usize], 0x70);
    drop(bus);
    assert_eq!(drops.get(), 1);
}
