//! Register map and constants for SW35xx.
//! Addresses and scales follow the SW3516/SW3518 register documentation.

use crate::data_types::{FastChargeProtocol, PdVersion, PowerClass};

/// Fixed 7-bit I2C address of the SW35xx family.
pub const DEFAULT_I2C_ADDRESS: u8 = 0x3C;

/// Register addresses.
pub mod addr {
    /// Chip revision, bits 2:0.
    pub const IC_VERSION: u8 = 0x01;
    /// Fast-charge indication: protocol in bits 3:0, PD version in bits 5:4.
    pub const FCX_STATUS: u8 = 0x06;
    /// Write-protection control. Unlocked by the three-step key, locked by writing 0.
    pub const I2C_ENABLE: u8 = 0x12;
    /// PDO refresh / broadcast triggers.
    pub const I2C_CTRL: u8 = 0x13;

    /// VIN ADC bits 11:4 (start of the status block).
    pub const ADC_VIN_H: u8 = 0x30;
    /// VOUT ADC bits 11:4.
    pub const ADC_VOUT_H: u8 = 0x31;
    /// VIN bits 3:0 in [7:4], VOUT bits 3:0 in [3:0].
    pub const ADC_VIN_VOUT_L: u8 = 0x32;
    /// Type-C output current bits 11:4.
    pub const ADC_IOUT_C_H: u8 = 0x33;
    /// Type-A output current bits 11:4.
    pub const ADC_IOUT_A_H: u8 = 0x34;
    /// Type-C bits 3:0 in [7:4], Type-A bits 3:0 in [3:0].
    pub const ADC_IOUT_L: u8 = 0x35;
    /// NTC voltage bits 11:4.
    pub const ADC_TS_H: u8 = 0x37;
    /// NTC voltage bits 3:0.
    pub const ADC_TS_L: u8 = 0x38;

    /// ADC buffer channel select.
    pub const ADC_DATA_TYPE: u8 = 0x3A;
    /// Buffered sample bits 11:4.
    pub const ADC_DATA_BUF_H: u8 = 0x3B;
    /// Buffered sample bits 3:0.
    pub const ADC_DATA_BUF_L: u8 = 0x3C;

    /// PD source request (command code + trigger).
    pub const PD_SRC_REQ: u8 = 0x70;
    /// Power class selector, bits 1:0.
    pub const PWR_CONF: u8 = 0xA6;

    /// 5 V group current limit.
    pub const PD_CONF1: u8 = 0xB0;
    /// 9 V group current limit.
    pub const PD_CONF2: u8 = 0xB1;
    /// 12 V group current limit.
    pub const PD_CONF3: u8 = 0xB2;
    /// 15 V group current limit.
    pub const PD_CONF4: u8 = 0xB3;
    /// 20 V group current limit.
    pub const PD_CONF5: u8 = 0xB4;
    /// PPS1 group current limit.
    pub const PD_CONF6: u8 = 0xB5;
    /// PPS2 group current limit.
    pub const PD_CONF7: u8 = 0xB6;

    /// Quick-charge enable mask, low byte.
    pub const QC_CONF1: u8 = 0xB9;
    /// Quick-charge enable mask, high byte.
    pub const QC_CONF2: u8 = 0xBA;
}

/// Unlock key, written to I2C_ENABLE in this order.
pub const UNLOCK_SEQUENCE: [u8; 3] = [0x20, 0x40, 0x80];
/// Value restoring write protection.
pub const LOCK_VALUE: u8 = 0x00;

/// ADC scales.
pub const VIN_LSB_MV: u16 = 10;
pub const VOUT_LSB_MV: u16 = 6;
/// Output current is 2.5 mA/LSB; expressed as a fraction to stay in integers.
pub const IOUT_LSB_NUM: u16 = 5;
pub const IOUT_LSB_DEN: u16 = 2;
/// Raw current readings at or below this are offset noise and read as 0 mA.
pub const IOUT_NOISE_FLOOR: u16 = 15;
pub const TS_LSB_MV: f32 = 0.5;

/// Current-limit field: 7 bits, 50 mA/LSB, 0 = group disabled.
pub const CURRENT_CODE_MASK: u8 = 0x7F;
pub const CURRENT_STEP_MA: u16 = 50;
pub const CURRENT_MAX_MA: u16 = 5_000;

/// FCX_STATUS field masks.
pub const FCX_PROTOCOL_MASK: u8 = 0x0F;
pub const FCX_PD_VERSION_MASK: u8 = 0x30;
pub const FCX_PD_VERSION_SHIFT: u8 = 4;

/// PD_SRC_REQ command code field.
pub const PD_CMD_MASK: u8 = 0x0F;

/// PWR_CONF power class field.
pub const PWR_CLASS_MASK: u8 = 0b11;
/// IC_VERSION revision field.
pub const IC_VERSION_MASK: u8 = 0b111;
/// ADC_DATA_TYPE channel field.
pub const ADC_CHANNEL_MASK: u8 = 0b111;
/// QC_CONF2 bits owned by the chip (not part of the enable mask).
pub const QC_CONF2_RESERVED_MASK: u8 = 0x3F;

bitflags::bitflags! {
    /// Quick-charge enable mask spread over QC_CONF1 (low byte) and QC_CONF2 (high byte).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct QuickChargeConfig: u16 {
        /// MTK PE.
        const PE    = 1 << 0;
        // Bit 1 reserved.
        const SCP   = 1 << 2;
        const FCP   = 1 << 3;
        const QC    = 1 << 4;
        const PD    = 1 << 5;
        const PORT2 = 1 << 6;
        const PORT1 = 1 << 7;
        // Bits 13-8 reserved.
        const AFC   = 1 << 14;
        const SFCP  = 1 << 15;
    }

    /// PD_SRC_REQ register bits (0x70).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PdSrcReqBits: u8 {
        /// Bit 7: execute the command held in bits 3:0.
        const TRIGGER = 1 << 7;
    }

    /// I2C_CTRL register bits (0x13).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct I2cCtrlBits: u8 {
        /// Bit 0: reload PDOs from the current-limit registers.
        const PDO_REFRESH   = 1 << 0;
        /// Bit 1: re-send Source_Capabilities on an established contract.
        const PDO_BROADCAST = 1 << 1;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for QuickChargeConfig {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "QuickChargeConfig(0x{:04X})", self.bits())
    }
}

impl QuickChargeConfig {
    /// Bits outside the named flags.
    pub fn reserved_bits(&self) -> u16 {
        self.bits() & !Self::all().bits()
    }
}

/// Quantization parameters of one current-limit group.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CurrentLimit {
    pub step_ma: u16,
    pub max_ma: u16,
    /// Group cannot be switched off; a zero code becomes the smallest enabled step.
    pub forbid_zero: bool,
}

/// Convert a current ceiling (mA) to a limit code: clamp, round down to the step, then apply `forbid_zero`.
pub fn current_ma_to_code(ma: u32, limit: CurrentLimit) -> u8 {
    let ma = ma.min(limit.max_ma as u32);
    let code = (ma / limit.step_ma as u32).min(CURRENT_CODE_MASK as u32) as u8;
    if code == 0 && limit.forbid_zero { 1 } else { code }
}

/// Convert a limit code back to milliamps.
pub fn code_to_current_ma(code: u8, limit: CurrentLimit) -> u16 {
    (code & CURRENT_CODE_MASK) as u16 * limit.step_ma
}

/// Assemble a 12-bit ADC value from its high byte and low nibble.
pub fn join_12bit(high: u8, low_nibble: u8) -> u16 {
    ((high as u16) << 4) | (low_nibble & 0x0F) as u16
}

/// Raw 12-bit ADC values from the status block.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AdcBlock {
    pub vin: u16,
    pub vout: u16,
    pub iout_usbc: u16,
    pub iout_usba: u16,
}

/// Split the 0x30..=0x35 burst into raw channel values.
pub fn decode_adc_block(block: &[u8; 6]) -> AdcBlock {
    let [vin_h, vout_h, vin_vout_l, iout_c_h, iout_a_h, iout_l] = *block;
    AdcBlock {
        vin: join_12bit(vin_h, vin_vout_l >> 4),
        vout: join_12bit(vout_h, vin_vout_l),
        iout_usbc: join_12bit(iout_c_h, iout_l >> 4),
        iout_usba: join_12bit(iout_a_h, iout_l),
    }
}

pub fn vin_raw_to_mv(raw: u16) -> u16 {
    (raw & 0x0FFF) * VIN_LSB_MV
}

pub fn vout_raw_to_mv(raw: u16) -> u16 {
    (raw & 0x0FFF) * VOUT_LSB_MV
}

/// Current in mA; readings inside the noise floor report 0.
pub fn iout_raw_to_ma(raw: u16) -> u16 {
    let raw = raw & 0x0FFF;
    if raw > IOUT_NOISE_FLOOR { raw * IOUT_LSB_NUM / IOUT_LSB_DEN } else { 0 }
}

/// NTC sensor voltage in mV.
pub fn ts_raw_to_mv(raw: u16) -> f32 {
    (raw & 0x0FFF) as f32 * TS_LSB_MV
}

/// FCX_STATUS protocol field to enum. Index = field value; codes 12-15 are undefined.
const FAST_CHARGE_TABLE: [FastChargeProtocol; 16] = [
    FastChargeProtocol::None,
    FastChargeProtocol::Qc2,
    FastChargeProtocol::Qc3,
    FastChargeProtocol::Fcp,
    FastChargeProtocol::Scp,
    FastChargeProtocol::PdFixed,
    FastChargeProtocol::PdPps,
    FastChargeProtocol::MtkPe1,
    FastChargeProtocol::MtkPe2,
    FastChargeProtocol::Lvdc,
    FastChargeProtocol::Sfcp,
    FastChargeProtocol::Afc,
    FastChargeProtocol::None,
    FastChargeProtocol::None,
    FastChargeProtocol::None,
    FastChargeProtocol::None,
];

/// Decode the protocol field of FCX_STATUS. Unknown patterns decode to `None`.
pub fn decode_fast_charge(status: u8) -> FastChargeProtocol {
    FAST_CHARGE_TABLE
        .get((status & FCX_PROTOCOL_MASK) as usize)
        .copied()
        .unwrap_or(FastChargeProtocol::None)
}

/// Protocol field value reported for `protocol`.
pub fn encode_fast_charge(protocol: FastChargeProtocol) -> u8 {
    protocol as u8
}

/// Decode the PD version field of FCX_STATUS (0b01 = PD 2.0, 0b10 = PD 3.0).
pub fn decode_pd_version(status: u8) -> Option<PdVersion> {
    match (status & FCX_PD_VERSION_MASK) >> FCX_PD_VERSION_SHIFT {
        0b01 => Some(PdVersion::Pd2),
        0b10 => Some(PdVersion::Pd3),
        _ => None,
    }
}

/// Power class field value.
pub fn encode_power_class(class: PowerClass) -> u8 {
    class as u8 & PWR_CLASS_MASK
}

pub fn decode_power_class(pwr_conf: u8) -> PowerClass {
    match pwr_conf & PWR_CLASS_MASK {
        0b00 => PowerClass::Pwr9V,
        0b01 => PowerClass::Pwr12V,
        0b10 => PowerClass::Pwr20V1,
        _ => PowerClass::Pwr20V2,
    }
}

/// Split an enable mask into (QC_CONF1, QC_CONF2) keeping the chip-owned bits of `conf2_current`.
pub fn encode_quick_charge(config: QuickChargeConfig, conf2_current: u8) -> (u8, u8) {
    let [lo, hi] = (config & QuickChargeConfig::all()).bits().to_le_bytes();
    (lo, (conf2_current & QC_CONF2_RESERVED_MASK) | (hi & !QC_CONF2_RESERVED_MASK))
}

/// Rebuild the enable mask from QC_CONF1/QC_CONF2 with unknown bits retained.
pub fn decode_quick_charge(conf1: u8, conf2: u8) -> QuickChargeConfig {
    QuickChargeConfig::from_bits_retain(u16::from_le_bytes([conf1, conf2]))
}
