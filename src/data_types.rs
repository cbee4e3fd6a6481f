//! Data types for SW35xx driver.

use crate::registers::{CURRENT_MAX_MA, CURRENT_STEP_MA, CurrentLimit, DEFAULT_I2C_ADDRESS, QuickChargeConfig, addr};

/// Fast-charge protocol negotiated on the active port.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[repr(u8)]
pub enum FastChargeProtocol {
    #[default]
    None = 0,
    Qc2 = 1,
    Qc3 = 2,
    Fcp = 3,
    Scp = 4,
    /// USB PD fixed-voltage contract.
    PdFixed = 5,
    /// USB PD programmable power supply contract.
    PdPps = 6,
    MtkPe1 = 7,
    MtkPe2 = 8,
    Lvdc = 9,
    Sfcp = 10,
    Afc = 11,
}

impl FastChargeProtocol {
    pub const ALL: [FastChargeProtocol; 12] = [
        Self::None,
        Self::Qc2,
        Self::Qc3,
        Self::Fcp,
        Self::Scp,
        Self::PdFixed,
        Self::PdPps,
        Self::MtkPe1,
        Self::MtkPe2,
        Self::Lvdc,
        Self::Sfcp,
        Self::Afc,
    ];

    /// True for both PD contract kinds.
    pub fn is_pd(&self) -> bool {
        matches!(self, Self::PdFixed | Self::PdPps)
    }
}

/// Negotiated USB PD specification revision.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PdVersion {
    Pd2,
    Pd3,
}

impl PdVersion {
    /// Major revision number (2 or 3).
    pub fn major(&self) -> u8 {
        match self {
            PdVersion::Pd2 => 2,
            PdVersion::Pd3 => 3,
        }
    }
}

/// Power class written together with the quick-charge enable mask (PWR_CONF[1:0]).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum PowerClass {
    Pwr9V = 0b00,
    Pwr12V = 0b01,
    /// 20 V, first power tier.
    Pwr20V1 = 0b10,
    /// 20 V, second power tier.
    Pwr20V2 = 0b11,
}

/// ADC buffer channels (ADC_DATA_TYPE codes).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum AdcChannel {
    Vin = 1,
    Vout = 2,
    IoutUsbC = 3,
    IoutUsbA = 4,
    Temperature = 6,
}

impl AdcChannel {
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

/// PD protocol-layer commands the chip interprets.
///
/// Only hard reset is documented; codes 2-15 exist on the chip but their meaning is unknown,
/// so they are refused instead of being forwarded.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum PdCommand {
    HardReset = 1,
}

impl PdCommand {
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for PdCommand {
    /// The rejected code.
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(PdCommand::HardReset),
            other => Err(other),
        }
    }
}

/// Current-limit groups, one register each.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CurrentGroup {
    Fixed5V,
    Fixed9V,
    Fixed12V,
    Fixed15V,
    Fixed20V,
    Pps1,
    Pps2,
}

impl CurrentGroup {
    pub const FIXED: [CurrentGroup; 5] = [
        Self::Fixed5V,
        Self::Fixed9V,
        Self::Fixed12V,
        Self::Fixed15V,
        Self::Fixed20V,
    ];
    pub const PPS: [CurrentGroup; 2] = [Self::Pps1, Self::Pps2];
    pub const ALL: [CurrentGroup; 7] = [
        Self::Fixed5V,
        Self::Fixed9V,
        Self::Fixed12V,
        Self::Fixed15V,
        Self::Fixed20V,
        Self::Pps1,
        Self::Pps2,
    ];

    pub fn register(&self) -> u8 {
        match self {
            Self::Fixed5V => addr::PD_CONF1,
            Self::Fixed9V => addr::PD_CONF2,
            Self::Fixed12V => addr::PD_CONF3,
            Self::Fixed15V => addr::PD_CONF4,
            Self::Fixed20V => addr::PD_CONF5,
            Self::Pps1 => addr::PD_CONF6,
            Self::Pps2 => addr::PD_CONF7,
        }
    }

    /// Quantization of this group. 5 V is always advertised, so it cannot encode "disabled".
    pub fn limit(&self) -> CurrentLimit {
        CurrentLimit {
            step_ma: CURRENT_STEP_MA,
            max_ma: CURRENT_MAX_MA,
            forbid_zero: matches!(self, Self::Fixed5V),
        }
    }
}

/// Current ceilings as programmed on the chip (mA, 0 = disabled).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MaxCurrents {
    pub fixed_5v_ma: u16,
    pub fixed_9v_ma: u16,
    pub fixed_12v_ma: u16,
    pub fixed_15v_ma: u16,
    pub fixed_20v_ma: u16,
    pub pps1_ma: u16,
    pub pps2_ma: u16,
}

/// Last decoded status snapshot.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Reading {
    pub vin_mv: u16,
    pub vout_mv: u16,
    pub iout_usbc_ma: u16,
    pub iout_usba_ma: u16,
    pub fast_charge: FastChargeProtocol,
    /// Only meaningful while a PD contract is active.
    pub pd_version: Option<PdVersion>,
}

/// Quick-charge configuration read back from QC_CONF1/QC_CONF2/PWR_CONF.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct QuickChargeSettings {
    /// Named enable flags.
    pub flags: QuickChargeConfig,
    /// Bits set on the chip that have no named flag (firmware-revision specific).
    pub reserved_bits: u16,
    pub power_class: PowerClass,
}

/// Assumed settling time between ADC channel select and buffer read. Not datasheet-guaranteed.
pub const DEFAULT_ADC_SETTLE_US: u32 = 50;

/// Driver configuration.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// 7-bit bus address.
    pub address: u8,
    /// Read ADC_DATA_TYPE back after selecting a channel and fail on mismatch.
    pub verify_adc_select: bool,
    /// Delay used by the `*_settled` ADC reads.
    pub adc_settle_us: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_I2C_ADDRESS,
            verify_adc_select: false,
            adc_settle_us: DEFAULT_ADC_SETTLE_US,
        }
    }
}
