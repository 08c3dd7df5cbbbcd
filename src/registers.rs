//! Register map and constants for MAX77801.
//! Addresses, bit positions and the VOUT trim formula follow the datasheet register table.

/// Fixed 7-bit I2C address of the MAX77801.
pub const DEFAULT_I2C_ADDRESS: u8 = 0x18;

/// Register addresses.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Register {
    /// Version and revision (read-only). The low nibble also carries the status flags.
    DeviceId = 0x00,
    /// Status register. Reserved; the driver reads status from `DeviceId`.
    Status = 0x01,
    /// Slew rates, OVP threshold, active discharge, forced PWM.
    Config1 = 0x02,
    /// Output enable, pull-down, POK polarity.
    Config2 = 0x03,
    /// VOUT trim used while DVS is low.
    VoutDvsLow = 0x04,
    /// VOUT trim used while DVS is high.
    VoutDvsHigh = 0x05,
}

impl Register {
    pub const ALL: [Register; 6] = [
        Register::DeviceId,
        Register::Status,
        Register::Config1,
        Register::Config2,
        Register::VoutDvsLow,
        Register::VoutDvsHigh,
    ];

    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// Power-on value written to CONFIG1 by `init` (OVP 120 %, active discharge on).
pub const CONFIG1_INIT: u8 = 0x0E;
/// Power-on value written to CONFIG2 by `init` (output on, pull-down on, POK active-high).
pub const CONFIG2_INIT: u8 = 0x70;

/// VOUT trim characteristics.
pub const VOUT_MIN_V: f64 = 2.6;
pub const VOUT_MAX_V: f64 = 4.1875;
/// 12.5 mV per code.
pub const VOUT_STEPS_PER_V: f64 = 80.0;
/// Added before truncation so decimal step levels (e.g. 4.0125 V) land on their own code.
const VOUT_STEP_EPSILON: f64 = 1e-9;
pub const VOUT_MIN_MV: u16 = 2_600;
// 4187.5 mV is the true ceiling; integer callers get the last whole millivolt.
pub const VOUT_MAX_MV: u16 = 4_187;

/// Device-ID register fields.
pub const VERSION_MASK: u8 = 0b0111_1000;
pub const VERSION_SHIFT: u8 = 3;
pub const REVISION_MASK: u8 = 0b0000_0111;
pub const STATUS_MASK: u8 = 0b0000_1111;

bitflags::bitflags! {
    /// CONFIG1 register bits (0x02).
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct Config1Bits: u8 {
        /// Bit 5: Ramp-up slew rate (0 = 12.5 mV/us, 1 = 25 mV/us).
        const BB_RU_SR = 1 << 5;
        /// Bit 4: Ramp-down slew rate (0 = 3.125 mV/us, 1 = 6.25 mV/us).
        const BB_RD_SR = 1 << 4;
        /// Bits 3-2: Output OVP threshold.
        const BB_OVP_TH1 = 1 << 3;
        const BB_OVP_TH0 = 1 << 2;
        /// Bit 1: Active output discharge.
        const BB_AD = 1 << 1;
        /// Bit 0: Forced PWM.
        const BB_FPWM = 1 << 0;
    }

    /// CONFIG2 register bits (0x03).
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct Config2Bits: u8 {
        /// Bit 6: Buck-boost output enable.
        const BB_EN = 1 << 6;
        /// Bit 5: EN pin pull-down enable.
        const PD_EN = 1 << 5;
        /// Bit 4: POK pin polarity (0 = active-low, 1 = active-high).
        const POK_POL = 1 << 4;
        // Bits 3-0 reserved.
    }

    /// Status flags, low nibble of the device-ID register.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct StatusBits: u8 {
        /// Junction temperature warning.
        const TJ  = 1 << 3;
        /// Power OK.
        const POK = 1 << 2;
        const OVP = 1 << 1;
        const OCP = 1 << 0;
    }
}

/// Location of a bitfield: register, mask and shift of its LSB.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Field {
    pub reg: Register,
    pub mask: u8,
    pub shift: u8,
}

impl Field {
    const fn new(reg: Register, mask: u8, shift: u8) -> Self {
        Self { reg, mask, shift }
    }

    /// Shift `value` into position; bits outside the field are dropped.
    pub const fn encode(self, value: u8) -> u8 {
        (value << self.shift) & self.mask
    }

    /// Extract the field from a full register value.
    pub const fn decode(self, reg_value: u8) -> u8 {
        (reg_value & self.mask) >> self.shift
    }
}

pub mod field {
    use super::{Config1Bits, Config2Bits, Field, Register};

    pub const FORCED_PWM: Field = Field::new(Register::Config1, Config1Bits::BB_FPWM.bits(), 0);
    pub const ACTIVE_DISCHARGE: Field = Field::new(Register::Config1, Config1Bits::BB_AD.bits(), 1);
    pub const OVP_THRESHOLD: Field = Field::new(
        Register::Config1,
        Config1Bits::BB_OVP_TH1.bits() | Config1Bits::BB_OVP_TH0.bits(),
        2,
    );
    pub const RAMP_DOWN: Field = Field::new(Register::Config1, Config1Bits::BB_RD_SR.bits(), 4);
    pub const RAMP_UP: Field = Field::new(Register::Config1, Config1Bits::BB_RU_SR.bits(), 5);

    pub const POK_POLARITY: Field = Field::new(Register::Config2, Config2Bits::POK_POL.bits(), 4);
    pub const PULL_DOWN: Field = Field::new(Register::Config2, Config2Bits::PD_EN.bits(), 5);
    pub const BUCK_BOOST_OUTPUT: Field = Field::new(Register::Config2, Config2Bits::BB_EN.bits(), 6);
}

/// Convert a VOUT level (volts) to a trim code.
///
/// Returns `None` outside 2.6000..=4.1875 V (NaN included). The code is truncated, not rounded:
/// a level that lands at 12.999 steps encodes as 12.
pub fn level_to_code(level: f64) -> Option<u8> {
    if !(VOUT_MIN_V..=VOUT_MAX_V).contains(&level) {
        return None;
    }
    Some(((level - VOUT_MIN_V) * VOUT_STEPS_PER_V + VOUT_STEP_EPSILON) as u8)
}

/// Convert a VOUT level (mV) to a trim code, truncating to the 12.5 mV step below.
pub fn mv_to_code(mv: u16) -> Option<u8> {
    if !(VOUT_MIN_MV..=VOUT_MAX_MV).contains(&mv) {
        return None;
    }
    Some(((mv - VOUT_MIN_MV) * 2 / 25) as u8)
}

/// Convert a trim code to volts.
pub fn code_to_level(code: u8) -> f64 {
    VOUT_MIN_V + code as f64 / VOUT_STEPS_PER_V
}

/// Convert a trim code to millivolts (half-millivolt steps truncated).
pub fn code_to_mv(code: u8) -> u16 {
    VOUT_MIN_MV + code as u16 * 25 / 2
}

/// Split the device-ID register into (version code, revision code).
pub fn decode_device_id(raw: u8) -> (u8, u8) {
    ((raw & VERSION_MASK) >> VERSION_SHIFT, raw & REVISION_MASK)
}
