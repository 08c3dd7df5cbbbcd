//! Data types for MAX77801 driver.
//! Selector enums carry their register encoding; raw bytes convert through `TryFrom<u8>`.

use crate::error::InvalidSelector;
use crate::registers::{decode_device_id, field, Field, Register, StatusBits, CONFIG1_INIT, CONFIG2_INIT};

/// Enable/disable state for single-bit options.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EnableState {
    Disabled = 0,
    Enabled = 1,
}

impl From<bool> for EnableState {
    fn from(on: bool) -> Self {
        if on { EnableState::Enabled } else { EnableState::Disabled }
    }
}

impl TryFrom<u8> for EnableState {
    type Error = InvalidSelector;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(EnableState::Disabled),
            1 => Ok(EnableState::Enabled),
            _ => Err(InvalidSelector),
        }
    }
}

/// Options switched with [`EnableState`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EnableConfig {
    /// CONFIG1.BB_AD
    ActiveDischarge = 0,
    /// CONFIG1.BB_FPWM
    ForcedPwm = 1,
    /// CONFIG2.BB_EN
    BuckBoostOutput = 2,
    /// CONFIG2.PD_EN
    PullDown = 3,
}

impl EnableConfig {
    pub const fn field(self) -> Field {
        match self {
            EnableConfig::ActiveDischarge => field::ACTIVE_DISCHARGE,
            EnableConfig::ForcedPwm => field::FORCED_PWM,
            EnableConfig::BuckBoostOutput => field::BUCK_BOOST_OUTPUT,
            EnableConfig::PullDown => field::PULL_DOWN,
        }
    }
}

impl TryFrom<u8> for EnableConfig {
    type Error = InvalidSelector;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(EnableConfig::ActiveDischarge),
            1 => Ok(EnableConfig::ForcedPwm),
            2 => Ok(EnableConfig::BuckBoostOutput),
            3 => Ok(EnableConfig::PullDown),
            _ => Err(InvalidSelector),
        }
    }
}

/// Buck-boost ramp-up slew rate (BB_RU_SR).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RampUpRate {
    #[default]
    Mv12p5PerUs = 0,
    Mv25PerUs = 1,
}

impl RampUpRate {
    /// Decode field bits as returned by [`Field::decode`]; higher bits are ignored.
    pub const fn from_field(bits: u8) -> Self {
        match bits & 0x1 {
            0 => RampUpRate::Mv12p5PerUs,
            _ => RampUpRate::Mv25PerUs,
        }
    }
}

impl TryFrom<u8> for RampUpRate {
    type Error = InvalidSelector;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        if raw > 1 {
            return Err(InvalidSelector);
        }
        Ok(RampUpRate::from_field(raw))
    }
}

/// Buck-boost ramp-down slew rate (BB_RD_SR).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RampDownRate {
    #[default]
    Mv3p125PerUs = 0,
    Mv6p25PerUs = 1,
}

impl RampDownRate {
    /// Decode field bits as returned by [`Field::decode`]; higher bits are ignored.
    pub const fn from_field(bits: u8) -> Self {
        match bits & 0x1 {
            0 => RampDownRate::Mv3p125PerUs,
            _ => RampDownRate::Mv6p25PerUs,
        }
    }
}

impl TryFrom<u8> for RampDownRate {
    type Error = InvalidSelector;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        if raw > 1 {
            return Err(InvalidSelector);
        }
        Ok(RampDownRate::from_field(raw))
    }
}

/// Output overvoltage protection threshold (BB_OVP_TH), relative to the VOUT target.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OvpThreshold {
    Disabled = 0,
    Percent110 = 1,
    Percent115 = 2,
    Percent120 = 3,
}

impl OvpThreshold {
    /// Decode field bits as returned by [`Field::decode`]; higher bits are ignored.
    pub const fn from_field(bits: u8) -> Self {
        match bits & 0x3 {
            0 => OvpThreshold::Disabled,
            1 => OvpThreshold::Percent110,
            2 => OvpThreshold::Percent115,
            _ => OvpThreshold::Percent120,
        }
    }
}

impl TryFrom<u8> for OvpThreshold {
    type Error = InvalidSelector;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        if raw > 3 {
            return Err(InvalidSelector);
        }
        Ok(OvpThreshold::from_field(raw))
    }
}

/// Active level of the POK indicator pin.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PokPolarity {
    ActiveLow = 0,
    ActiveHigh = 1,
}

impl PokPolarity {
    /// Decode field bits as returned by [`Field::decode`]; higher bits are ignored.
    pub const fn from_field(bits: u8) -> Self {
        match bits & 0x1 {
            0 => PokPolarity::ActiveLow,
            _ => PokPolarity::ActiveHigh,
        }
    }
}

impl TryFrom<u8> for PokPolarity {
    type Error = InvalidSelector;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        if raw > 1 {
            return Err(InvalidSelector);
        }
        Ok(PokPolarity::from_field(raw))
    }
}

/// DVS pin state selecting one of the two VOUT trim slots.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DvsState {
    Low = 0,
    High = 1,
}

impl DvsState {
    pub const fn register(self) -> Register {
        match self {
            DvsState::Low => Register::VoutDvsLow,
            DvsState::High => Register::VoutDvsHigh,
        }
    }
}

impl TryFrom<u8> for DvsState {
    type Error = InvalidSelector;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(DvsState::Low),
            1 => Ok(DvsState::High),
            _ => Err(InvalidSelector),
        }
    }
}

/// Part variant, bits [6:3] of the device-ID register.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Version {
    Plain,
    Z1,
    Z2,
    Unknown(u8),
}

impl Version {
    pub const fn from_code(code: u8) -> Self {
        match code {
            0 => Version::Plain,
            1 => Version::Z1,
            2 => Version::Z2,
            other => Version::Unknown(other),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Version::Plain => "PLAIN",
            Version::Z1 => "-1Z",
            Version::Z2 => "-2Z",
            Version::Unknown(_) => "UNKNOWN",
        }
    }
}

/// Silicon revision, bits [2:0] of the device-ID register.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Revision {
    Pass1,
    Pass2,
    Pass3,
    Unknown(u8),
}

impl Revision {
    pub const fn from_code(code: u8) -> Self {
        match code {
            0 => Revision::Pass1,
            1 => Revision::Pass2,
            2 => Revision::Pass3,
            other => Revision::Unknown(other),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Revision::Pass1 => "PASS1",
            Revision::Pass2 => "PASS2",
            Revision::Pass3 => "PASS3",
            Revision::Unknown(_) => "UNKNOWN",
        }
    }
}

/// Decoded device-ID register.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DeviceId {
    pub raw: u8,
    pub version: Version,
    pub revision: Revision,
}

impl DeviceId {
    pub fn from_raw(raw: u8) -> Self {
        let (version, revision) = decode_device_id(raw);
        Self {
            raw,
            version: Version::from_code(version),
            revision: Revision::from_code(revision),
        }
    }
}

/// Status flags decoded from the device-ID low nibble.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PowerStatus {
    pub thermal_warning: bool,
    pub power_ok: bool,
    pub over_voltage: bool,
    pub over_current: bool,
}

impl From<StatusBits> for PowerStatus {
    fn from(bits: StatusBits) -> Self {
        Self {
            thermal_warning: bits.contains(StatusBits::TJ),
            power_ok: bits.contains(StatusBits::POK),
            over_voltage: bits.contains(StatusBits::OVP),
            over_current: bits.contains(StatusBits::OCP),
        }
    }
}

/// Full CONFIG1/CONFIG2 contents. `Default` matches the words written by `init`.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DeviceConfig {
    pub ramp_up: RampUpRate,
    pub ramp_down: RampDownRate,
    pub ovp_threshold: OvpThreshold,
    pub active_discharge: bool,
    pub forced_pwm: bool,
    pub output_enabled: bool,
    pub pull_down: bool,
    pub pok_polarity: PokPolarity,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self::from_regs(CONFIG1_INIT, CONFIG2_INIT)
    }
}

impl DeviceConfig {
    /// Decode from raw CONFIG1 and CONFIG2 values. Reserved bits are ignored.
    pub fn from_regs(config1: u8, config2: u8) -> Self {
        Self {
            ramp_up: RampUpRate::from_field(field::RAMP_UP.decode(config1)),
            ramp_down: RampDownRate::from_field(field::RAMP_DOWN.decode(config1)),
            ovp_threshold: OvpThreshold::from_field(field::OVP_THRESHOLD.decode(config1)),
            active_discharge: field::ACTIVE_DISCHARGE.decode(config1) != 0,
            forced_pwm: field::FORCED_PWM.decode(config1) != 0,
            output_enabled: field::BUCK_BOOST_OUTPUT.decode(config2) != 0,
            pull_down: field::PULL_DOWN.decode(config2) != 0,
            pok_polarity: PokPolarity::from_field(field::POK_POLARITY.decode(config2)),
        }
    }

    /// Encode into (CONFIG1, CONFIG2).
    pub fn to_regs(&self) -> (u8, u8) {
        let config1 = field::RAMP_UP.encode(self.ramp_up as u8)
            | field::RAMP_DOWN.encode(self.ramp_down as u8)
            | field::OVP_THRESHOLD.encode(self.ovp_threshold as u8)
            | field::ACTIVE_DISCHARGE.encode(self.active_discharge as u8)
            | field::FORCED_PWM.encode(self.forced_pwm as u8);
        let config2 = field::BUCK_BOOST_OUTPUT.encode(self.output_enabled as u8)
            | field::PULL_DOWN.encode(self.pull_down as u8)
            | field::POK_POLARITY.encode(self.pok_polarity as u8);
        (config1, config2)
    }
}
