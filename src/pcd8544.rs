//! Driver for the PCD8544 controller found on Nokia 5110/3310 84x48 LCD modules.
//!
//! The controller is write-only over SPI with a separate data/command (D/C) line and an
//! active-low reset line. Chip select belongs to the [`SpiDevice`].

use derive_more::derive::{Display, Error};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

use crate::transport::DisplayTransport;

/// PCD8544 commands
mod cmd {
    /// Function set. Combine with the flags below.
    pub const FUNCTION_SET: u8 = 0x20;
    pub const POWER_DOWN: u8 = 0x04;
    pub const EXTENDED: u8 = 0x01;

    // Basic instruction set
    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const DISPLAY_NORMAL: u8 = 0x04;
    pub const DISPLAY_INVERSE: u8 = 0x05;
    pub const SET_Y: u8 = 0x40;
    pub const SET_X: u8 = 0x80;

    // Extended instruction set
    pub const TEMPERATURE_COEFFICIENT: u8 = 0x04;
    pub const BIAS: u8 = 0x10;
    pub const SET_VOP: u8 = 0x80;
}

/// Errors from the PCD8544 driver.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pcd8544Error<S, P> {
    #[display("SPI write failed: {_0:?}")]
    Spi(#[error(not(source))] S),

    #[display("D/C or reset pin failed: {_0:?}")]
    Pin(#[error(not(source))] P),
}

/// Panel tuning applied at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pcd8544Config {
    /// Operating voltage (Vop), 0-127. Higher is darker.
    pub contrast: u8,
    /// Bias system, 0-7.
    pub bias: u8,
    /// Temperature coefficient, 0-3.
    pub temperature_coefficient: u8,
}

impl Default for Pcd8544Config {
    fn default() -> Self {
        Self {
            contrast: 0x3F,
            bias: 0x04,
            temperature_coefficient: 0x02,
        }
    }
}

/// A PCD8544 LCD on an SPI bus.
pub struct Pcd8544<SPI, DC, RST> {
    spi: SPI,
    dc: DC,
    rst: RST,
    config: Pcd8544Config,
}

impl<SPI, DC, RST> Pcd8544<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin<Error = DC::Error>,
{
    /// Reset and initialize the controller with the default [`Pcd8544Config`].
    ///
    /// # Errors
    ///
    /// Returns the first bus or pin failure.
    pub fn new(
        spi: SPI,
        dc: DC,
        rst: RST,
        delay: &mut impl DelayNs,
    ) -> Result<Self, Pcd8544Error<SPI::Error, DC::Error>> {
        Self::with_config(spi, dc, rst, delay, Pcd8544Config::default())
    }

    /// Reset and initialize the controller with custom panel tuning.
    ///
    /// # Errors
    ///
    /// Returns the first bus or pin failure.
    pub fn with_config(
        spi: SPI,
        dc: DC,
        rst: RST,
        delay: &mut impl DelayNs,
        config: Pcd8544Config,
    ) -> Result<Self, Pcd8544Error<SPI::Error, DC::Error>> {
        let mut lcd = Self {
            spi,
            dc,
            rst,
            config,
        };
        lcd.reset(delay)?;
        lcd.init()?;
        Ok(lcd)
    }

    /// Pulse the reset line.
    ///
    /// # Errors
    ///
    /// Returns the pin failure.
    pub fn reset(
        &mut self,
        delay: &mut impl DelayNs,
    ) -> Result<(), Pcd8544Error<SPI::Error, DC::Error>> {
        self.rst.set_low().map_err(Pcd8544Error::Pin)?;
        delay.delay_ms(1);
        self.rst.set_high().map_err(Pcd8544Error::Pin)?;
        delay.delay_ms(1);
        Ok(())
    }

    fn init(&mut self) -> Result<(), Pcd8544Error<SPI::Error, DC::Error>> {
        let Pcd8544Config {
            contrast,
            bias,
            temperature_coefficient,
        } = self.config;
        debug!(
            "PCD8544 init: contrast={=u8} bias={=u8} tc={=u8}",
            contrast,
            bias,
            temperature_coefficient
        );
        self.commands(&[
            cmd::FUNCTION_SET | cmd::EXTENDED,
            cmd::SET_VOP | (contrast & 0x7F),
            cmd::TEMPERATURE_COEFFICIENT | (temperature_coefficient & 0x03),
            cmd::BIAS | (bias & 0x07),
            cmd::FUNCTION_SET,
            cmd::DISPLAY_CONTROL | cmd::DISPLAY_NORMAL,
        ])
    }

    /// Change the operating voltage (contrast), 0-127.
    ///
    /// # Errors
    ///
    /// Returns the first bus or pin failure.
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Pcd8544Error<SPI::Error, DC::Error>> {
        self.config.contrast = contrast & 0x7F;
        self.commands(&[
            cmd::FUNCTION_SET | cmd::EXTENDED,
            cmd::SET_VOP | self.config.contrast,
            cmd::FUNCTION_SET,
        ])
    }

    /// Show the RAM contents inverted (lit pixels dark) or normally.
    ///
    /// # Errors
    ///
    /// Returns the first bus or pin failure.
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), Pcd8544Error<SPI::Error, DC::Error>> {
        let mode = if inverted {
            cmd::DISPLAY_INVERSE
        } else {
            cmd::DISPLAY_NORMAL
        };
        self.commands(&[cmd::DISPLAY_CONTROL | mode])
    }

    /// Enter or leave power-down mode. RAM contents survive power-down.
    ///
    /// # Errors
    ///
    /// Returns the first bus or pin failure.
    pub fn set_power(&mut self, on: bool) -> Result<(), Pcd8544Error<SPI::Error, DC::Error>> {
        let flags = if on { 0 } else { cmd::POWER_DOWN };
        self.commands(&[cmd::FUNCTION_SET | flags])
    }

    /// The tuning currently applied.
    #[must_use]
    pub const fn config(&self) -> Pcd8544Config {
        self.config
    }

    /// Give back the bus and pins.
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }

    fn commands(&mut self, commands: &[u8]) -> Result<(), Pcd8544Error<SPI::Error, DC::Error>> {
        self.dc.set_low().map_err(Pcd8544Error::Pin)?;
        self.spi.write(commands).map_err(Pcd8544Error::Spi)
    }
}

impl<SPI, DC, RST> DisplayTransport for Pcd8544<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin<Error = DC::Error>,
{
    type Error = Pcd8544Error<SPI::Error, DC::Error>;

    /// Home the RAM address and stream the whole frame.
    fn data(&mut self, buffer: &[u8]) -> Result<(), Self::Error> {
        trace!("PCD8544 data: {=usize} bytes", buffer.len());
        self.commands(&[cmd::SET_X, cmd::SET_Y])?;
        self.dc.set_high().map_err(Pcd8544Error::Pin)?;
        self.spi.write(buffer).map_err(Pcd8544Error::Spi)
    }
}
