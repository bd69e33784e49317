use embedded_hal::{
    delay::DelayNs,
    i2c::{I2c, SevenBitAddress},
};

use crate::error::Error;

/// Factory-programmed bus address of HIH8000 series sensors.
pub const DEFAULT_ADDRESS: SevenBitAddress = 0x27;

/// Time (in microseconds) the sensor needs to complete a measurement cycle.
///
/// After [`Hih8000::trigger_measurement`] the caller must wait at least this
/// long before calling [`Hih8000::fetch_measurement`], or the sensor will
/// report stale data.
pub const MEASUREMENT_DELAY_US: u32 = 36_650;

/// Highest address representable in the 7-bit addressing space.
const ADDRESS_MAX: SevenBitAddress = 0x7F;

/// Full-scale count of the 14-bit humidity and temperature fields (2^14 - 2).
const FULL_SCALE: f32 = 16382.0;

/// Measurement validity reported by the sensor in the top two bits of the
/// humidity word.
///
/// The driver only extracts these bits; interpreting them is up to the caller
/// (see the HIH8000 datasheet).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    /// Fresh data from the most recent measurement cycle.
    #[default]
    Normal,
    /// Data that has already been fetched since the last measurement cycle.
    Stale,
    /// The sensor is in command mode.
    CommandMode,
    /// Diagnostic condition; the data is not valid.
    Diagnostic,
}

impl Status {
    /// Builds a status from its two-bit encoding. Bits above the bottom two
    /// are ignored.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Status::Normal,
            0b01 => Status::Stale,
            0b10 => Status::CommandMode,
            _ => Status::Diagnostic,
        }
    }

    /// Returns the two-bit encoding of this status.
    pub fn bits(self) -> u8 {
        match self {
            Status::Normal => 0b00,
            Status::Stale => 0b01,
            Status::CommandMode => 0b10,
            Status::Diagnostic => 0b11,
        }
    }
}

/// Reading decoded from the sensor's 4-byte response.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Reading {
    /// Validity of this reading as reported by the sensor.
    pub status: Status,
    /// Relative humidity in percent.
    pub relative_humidity: f32,
    /// Temperature in degrees Celsius.
    pub temperature: f32,
}

/// Driver for the Honeywell HIH8000 series humidity and temperature sensors.
///
/// A measurement is a two-phase protocol: [`trigger_measurement`] starts a
/// conversion inside the sensor, and [`fetch_measurement`] retrieves and
/// decodes the result once the conversion is done. The driver does not
/// sequence the two phases for you; either wait [`MEASUREMENT_DELAY_US`]
/// between them yourself or use [`measure`], which does.
///
/// The bus is a shared resource: the driver borrows it for each transaction
/// and never shuts it down, so other devices on the same bus are unaffected.
///
/// [`trigger_measurement`]: Hih8000::trigger_measurement
/// [`fetch_measurement`]: Hih8000::fetch_measurement
/// [`measure`]: Hih8000::measure
#[derive(Debug)]
pub struct Hih8000<I2C> {
    i2c: I2C,
    address: Option<SevenBitAddress>,
    reading: Reading,
}

impl<I2C: I2c> Hih8000<I2C> {
    /// Creates a driver without a configured address.
    ///
    /// Every bus operation fails with [`Error::AddressNotSet`] until
    /// [`set_address`](Self::set_address) is called.
    pub fn new(i2c: I2C) -> Self {
        Hih8000 {
            i2c,
            address: None,
            reading: Reading::default(),
        }
    }

    /// Creates a driver for the sensor at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAddress`] if `address` does not fit in 7 bits.
    pub fn with_address(i2c: I2C, address: SevenBitAddress) -> Result<Self, Error<I2C::Error>> {
        let mut sensor = Self::new(i2c);
        sensor.set_address(address)?;
        Ok(sensor)
    }

    /// Sets or changes the sensor's bus address.
    ///
    /// Only 7-bit addresses (up to `0x7F`) are accepted. On rejection the
    /// previously configured address, if any, is kept.
    pub fn set_address(&mut self, address: SevenBitAddress) -> Result<(), Error<I2C::Error>> {
        if address > ADDRESS_MAX {
            return Err(Error::InvalidAddress(address));
        }
        self.address = Some(address);
        Ok(())
    }

    /// Starts a measurement cycle inside the sensor.
    ///
    /// This is a zero-payload write transaction; the sensor interprets being
    /// addressed for write as the trigger. A conversion takes about 36.65 ms,
    /// and the driver does not block for it: wait [`MEASUREMENT_DELAY_US`]
    /// before fetching, or use [`measure`](Self::measure) instead.
    pub fn trigger_measurement(&mut self) -> Result<(), Error<I2C::Error>> {
        let address = self.address.ok_or(Error::AddressNotSet)?;
        self.i2c.write(address, &[])?;
        Ok(())
    }

    /// Fetches and decodes the result of the most recent measurement cycle.
    ///
    /// Reads the sensor's 4-byte response and decodes it into a [`Reading`],
    /// which is stored and returned. On any failure the previously stored
    /// reading is left untouched; no partial decode is ever kept.
    pub fn fetch_measurement(&mut self) -> Result<Reading, Error<I2C::Error>> {
        let address = self.address.ok_or(Error::AddressNotSet)?;

        let mut data = [0u8; 4];
        self.i2c.read(address, &mut data)?;

        let reading = decode(data);
        self.reading = reading;
        Ok(reading)
    }

    /// Performs a complete measurement: trigger, conversion wait, fetch.
    ///
    /// Convenience wrapper around the two-phase protocol for callers that can
    /// afford to block for the conversion time.
    pub fn measure<D: DelayNs>(&mut self, delay: &mut D) -> Result<Reading, Error<I2C::Error>> {
        self.trigger_measurement()?;
        delay.delay_us(MEASUREMENT_DELAY_US);
        self.fetch_measurement()
    }

    /// Returns the configured bus address, if one has been set.
    pub fn address(&self) -> Option<SevenBitAddress> {
        self.address
    }

    /// Returns the status bits of the last successful fetch.
    pub fn status(&self) -> Status {
        self.reading.status
    }

    /// Returns the relative humidity (percent) of the last successful fetch.
    pub fn humidity(&self) -> f32 {
        self.reading.relative_humidity
    }

    /// Returns the temperature (degrees Celsius) of the last successful fetch.
    pub fn temperature(&self) -> f32 {
        self.reading.temperature
    }

    /// Returns the complete last reading.
    ///
    /// Before the first successful fetch this is all zeros with
    /// [`Status::Normal`].
    pub fn last_reading(&self) -> Reading {
        self.reading
    }

    /// Consumes the driver and hands the bus back.
    ///
    /// The bus is never shut down by this driver since other devices may
    /// share it.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

/// Decodes the sensor's 4-byte response.
///
/// The response is two big-endian 16-bit words. The humidity word carries the
/// status bits (bits 15-14) and the 14-bit raw humidity count; the temperature
/// word carries the 14-bit raw temperature count in its top bits, with two
/// "do not care" bits at the bottom.
fn decode(data: [u8; 4]) -> Reading {
    let [hum_hi, hum_lo, temp_hi, temp_lo] = data;

    let humidity_word = u16::from_be_bytes([hum_hi, hum_lo]);
    let status = Status::from_bits((humidity_word >> 14) as u8);
    let humidity_raw = humidity_word & 0x3FFF;

    let temperature_raw = u16::from_be_bytes([temp_hi, temp_lo]) >> 2;

    // Raw counts scale against the full-scale count, not 2^14, so a count of
    // 16383 decodes to slightly more than 100%. The driver does not clamp.
    Reading {
        status,
        relative_humidity: humidity_raw as f32 / FULL_SCALE * 100.0,
        temperature: temperature_raw as f32 / FULL_SCALE * 165.0 - 40.0,
    }
}
