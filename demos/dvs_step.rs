//! Host walk-through of a bring-up sequence against a scripted I2C bus.
//!
//! Run with `cargo run --example dvs_step`. Swap the mock for a board HAL's I2C to drive real
//! hardware; the driver calls stay the same.

use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};
use max77801_rs::data_types::{DvsState, EnableConfig, EnableState, RampUpRate};
use max77801_rs::{DEFAULT_I2C_ADDRESS as ADDR, Max77801};

fn main() {
    let expectations = [
        // device ID 0x0D: version -1Z; the low nibble doubles as the status flags
        I2cTrans::write_read(ADDR, vec![0x00], vec![0b0000_1101]),
        I2cTrans::write(ADDR, vec![0x02, 0x0E]),
        I2cTrans::write(ADDR, vec![0x03, 0x70]),
        I2cTrans::write(ADDR, vec![0x04, 56]),
        I2cTrans::write(ADDR, vec![0x05, 112]),
        I2cTrans::write_read(ADDR, vec![0x02], vec![0x0E]),
        I2cTrans::write(ADDR, vec![0x02, 0x2E]),
        I2cTrans::write_read(ADDR, vec![0x02], vec![0x2E]),
        I2cTrans::write(ADDR, vec![0x02, 0x2F]),
        I2cTrans::write_read(ADDR, vec![0x00], vec![0b0000_1101]),
    ];
    let mut dev = Max77801::new(I2cMock::new(&expectations));

    match dev.device_id() {
        Ok(id) => println!("MAX77801 {} {}", id.version.name(), id.revision.name()),
        Err(e) => println!("device ID read failed: {}", e),
    }

    dev.init().expect("init");
    // 3.3 V while DVS is low, 4.0 V while DVS is high.
    dev.set_vout(3.3, DvsState::Low).expect("vout low");
    dev.set_vout_mv(4_000, DvsState::High).expect("vout high");
    dev.config_ramp_up(RampUpRate::Mv25PerUs).expect("ramp up");
    dev.config_enable(EnableConfig::ForcedPwm, EnableState::Enabled).expect("fpwm");

    let status = dev.status().expect("status");
    println!("power ok: {}, ovp: {}, ocp: {}", status.power_ok, status.over_voltage, status.over_current);

    if let Some(mut bus) = dev.free() {
        bus.done();
    }
}
