//! Blocking MAX77801 driver over `embedded_hal::i2c::I2c`.
//!
//! Every accessor goes to the device; nothing is cached between calls.

use crate::bus::Bus;
use crate::data_types::{
    DeviceConfig, DeviceId, DvsState, EnableConfig, EnableState, OvpThreshold, PokPolarity, PowerStatus,
    RampDownRate, RampUpRate, Revision, Version,
};
use crate::error::Error;
use crate::registers::{
    code_to_level, code_to_mv, decode_device_id, field, level_to_code, mv_to_code, Field, Register, StatusBits,
    CONFIG1_INIT, CONFIG2_INIT, DEFAULT_I2C_ADDRESS, STATUS_MASK,
};

/// MAX77801 buck-boost regulator.
pub struct Max77801<'a, I2C> {
    bus: Bus<'a, I2C>,
    address: u8,
}

impl<'a, I2C> Max77801<'a, I2C> {
    /// Create a driver that owns the bus, at the default address (0x18).
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_I2C_ADDRESS)
    }

    /// Create a driver that owns the bus, at a custom address.
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            bus: Bus::Owned(i2c),
            address,
        }
    }

    /// Create a driver on a bus that stays owned by the caller.
    pub fn borrowed(i2c: &'a mut I2C) -> Self {
        Self::borrowed_with_address(i2c, DEFAULT_I2C_ADDRESS)
    }

    pub fn borrowed_with_address(i2c: &'a mut I2C, address: u8) -> Self {
        Self {
            bus: Bus::Borrowed(i2c),
            address,
        }
    }

    /// Return the 7-bit I2C address configured for this instance.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Whether dropping the driver also drops the bus.
    pub fn is_owner(&self) -> bool {
        self.bus.is_owned()
    }

    /// Consume the driver and hand back an owned bus (`None` if it was borrowed).
    pub fn free(self) -> Option<I2C> {
        self.bus.into_owned()
    }
}

impl<'a, I2C> Max77801<'a, I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Write the power-on configuration: CONFIG1 = 0x0E, then CONFIG2 = 0x70.
    ///
    /// Stops at the first failed write. CONFIG1 is not restored if CONFIG2 fails.
    pub fn init(&mut self) -> Result<(), Error<I2C::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("max77801: init");
        self.write_register(Register::Config1, CONFIG1_INIT)?;
        self.write_register(Register::Config2, CONFIG2_INIT)
    }

    /// Write a single register.
    pub fn write_register(&mut self, reg: Register, value: u8) -> Result<(), Error<I2C::Error>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("max77801: write {} <- {=u8:#x}", reg, value);
        self.bus
            .get_mut()
            .write(self.address, &[reg.addr(), value])
            .map_err(Error::BusWrite)
    }

    /// Read a single register (address write, repeated start, one-byte read).
    pub fn read_register(&mut self, reg: Register) -> Result<u8, Error<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.bus
            .get_mut()
            .write_read(self.address, &[reg.addr()], &mut buf)
            .map_err(Error::BusRead)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("max77801: read {} -> {=u8:#x}", reg, buf[0]);
        Ok(buf[0])
    }

    /// Read-modify-write: clear `mask`, then OR in `value`.
    ///
    /// `value` must already sit in the field's bit position; it is not shifted or masked here.
    /// A failed write leaves the register content unknown.
    pub fn update_register(&mut self, reg: Register, mask: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        let cur = self.read_register(reg)?;
        let new = (cur & !mask) | value;
        self.write_register(reg, new)
    }

    fn update_field(&mut self, field: Field, value: u8) -> Result<(), Error<I2C::Error>> {
        self.update_register(field.reg, field.mask, field.encode(value))
    }

    /// Switch one of the single-bit options on or off.
    pub fn config_enable(&mut self, config: EnableConfig, state: EnableState) -> Result<(), Error<I2C::Error>> {
        self.update_field(config.field(), state as u8)
    }

    /// [`config_enable`](Self::config_enable) from raw selector bytes.
    ///
    /// Undefined selectors fail with [`Error::InvalidSelector`] before any bus traffic.
    pub fn config_enable_raw(&mut self, config: u8, state: u8) -> Result<(), Error<I2C::Error>> {
        let config = EnableConfig::try_from(config)?;
        let state = EnableState::try_from(state)?;
        self.config_enable(config, state)
    }

    pub fn config_ramp_up(&mut self, rate: RampUpRate) -> Result<(), Error<I2C::Error>> {
        self.update_field(field::RAMP_UP, rate as u8)
    }

    pub fn config_ramp_down(&mut self, rate: RampDownRate) -> Result<(), Error<I2C::Error>> {
        self.update_field(field::RAMP_DOWN, rate as u8)
    }

    pub fn config_ovp_threshold(&mut self, threshold: OvpThreshold) -> Result<(), Error<I2C::Error>> {
        self.update_field(field::OVP_THRESHOLD, threshold as u8)
    }

    /// Select the active level of the POK pin.
    pub fn config_pokpol_active(&mut self, polarity: PokPolarity) -> Result<(), Error<I2C::Error>> {
        self.update_field(field::POK_POLARITY, polarity as u8)
    }

    /// Read CONFIG1 and CONFIG2 and decode them.
    pub fn read_config(&mut self) -> Result<DeviceConfig, Error<I2C::Error>> {
        let config1 = self.read_register(Register::Config1)?;
        let config2 = self.read_register(Register::Config2)?;
        Ok(DeviceConfig::from_regs(config1, config2))
    }

    /// Overwrite CONFIG1 then CONFIG2 with `config`. Same partial-write behavior as [`init`](Self::init).
    pub fn apply_config(&mut self, config: &DeviceConfig) -> Result<(), Error<I2C::Error>> {
        let (config1, config2) = config.to_regs();
        self.write_register(Register::Config1, config1)?;
        self.write_register(Register::Config2, config2)
    }

    /// Program the VOUT trim slot for `dvs` to `level` volts (2.6000..=4.1875 V, 12.5 mV steps).
    ///
    /// Out-of-range levels fail with [`Error::OutOfRange`] without touching the bus.
    /// The code is truncated toward zero.
    pub fn set_vout(&mut self, level: f64, dvs: DvsState) -> Result<(), Error<I2C::Error>> {
        let code = level_to_code(level).ok_or(Error::OutOfRange)?;
        #[cfg(feature = "defmt")]
        defmt::debug!("max77801: vout {} = {} V (code {=u8})", dvs, level, code);
        self.write_register(dvs.register(), code)
    }

    /// Millivolt variant of [`set_vout`](Self::set_vout), 2600..=4187 mV.
    pub fn set_vout_mv(&mut self, mv: u16, dvs: DvsState) -> Result<(), Error<I2C::Error>> {
        let code = mv_to_code(mv).ok_or(Error::OutOfRange)?;
        #[cfg(feature = "defmt")]
        defmt::debug!("max77801: vout {} = {=u16} mV (code {=u8})", dvs, mv, code);
        self.write_register(dvs.register(), code)
    }

    /// Raw trim code of the `dvs` slot.
    pub fn vout_code(&mut self, dvs: DvsState) -> Result<u8, Error<I2C::Error>> {
        self.read_register(dvs.register())
    }

    /// Programmed VOUT of the `dvs` slot in volts.
    pub fn vout(&mut self, dvs: DvsState) -> Result<f64, Error<I2C::Error>> {
        self.vout_code(dvs).map(code_to_level)
    }

    pub fn vout_mv(&mut self, dvs: DvsState) -> Result<u16, Error<I2C::Error>> {
        self.vout_code(dvs).map(code_to_mv)
    }

    /// Read and decode the device-ID register.
    pub fn device_id(&mut self) -> Result<DeviceId, Error<I2C::Error>> {
        self.read_register(Register::DeviceId).map(DeviceId::from_raw)
    }

    /// Part variant from device-ID bits [6:3].
    pub fn get_version(&mut self) -> Result<Version, Error<I2C::Error>> {
        let raw = self.read_register(Register::DeviceId)?;
        Ok(Version::from_code(decode_device_id(raw).0))
    }

    /// Silicon revision from device-ID bits [2:0].
    pub fn get_revision(&mut self) -> Result<Revision, Error<I2C::Error>> {
        let raw = self.read_register(Register::DeviceId)?;
        Ok(Revision::from_code(decode_device_id(raw).1))
    }

    /// Version label; a failed read reports "UNKNOWN" like an unrecognized code.
    pub fn version_name(&mut self) -> &'static str {
        self.get_version().map_or("UNKNOWN", Version::name)
    }

    /// Revision label; a failed read reports "UNKNOWN" like an unrecognized code.
    pub fn revision_name(&mut self) -> &'static str {
        self.get_revision().map_or("UNKNOWN", Revision::name)
    }

    /// Status nibble (bit3 TJ, bit2 POK, bit1 OVP, bit0 OCP).
    ///
    /// Read from the device-ID register, not from `Register::Status`.
    pub fn get_status(&mut self) -> Result<u8, Error<I2C::Error>> {
        Ok(self.read_register(Register::DeviceId)? & STATUS_MASK)
    }

    /// Decoded [`get_status`](Self::get_status).
    pub fn status(&mut self) -> Result<PowerStatus, Error<I2C::Error>> {
        let bits = StatusBits::from_bits_truncate(self.get_status()?);
        Ok(PowerStatus::from(bits))
    }
}
