//! Driver for SW35xx.
//! Blocking I2C API; the `async` feature adds `*_async` mirrors of every bus operation.

use crate::data_types::{AdcChannel, Config, CurrentGroup, MaxCurrents, PdCommand, PowerClass, QuickChargeSettings, Reading};
use crate::error::Error;
use crate::registers::{
    ADC_CHANNEL_MASK, AdcBlock, CURRENT_MAX_MA, I2cCtrlBits, IC_VERSION_MASK, LOCK_VALUE, PD_CMD_MASK, PWR_CLASS_MASK, PdSrcReqBits,
    QuickChargeConfig, UNLOCK_SEQUENCE, addr, code_to_current_ma, current_ma_to_code, decode_adc_block,
    decode_fast_charge, decode_pd_version, decode_power_class, decode_quick_charge, encode_power_class,
    encode_quick_charge, iout_raw_to_ma, join_12bit, ts_raw_to_mv, vin_raw_to_mv, vout_raw_to_mv,
};

/// SW35xx device handle. One per physical chip.
///
/// Holds the last decoded [`Reading`]. Configuration writes are bracketed by the chip's
/// unlock/lock sequence; if a write inside a bracket fails the bracket is abandoned and the
/// chip's write-protection state is undefined until [`Sw35xx::lock`] succeeds again.
pub struct Sw35xx<I2C> {
    i2c: I2C,
    config: Config,
    reading: Reading,
    last_read_ok: bool,
}

impl<I2C> Sw35xx<I2C> {
    /// Create a new driver instance with default configuration (address 0x3C).
    pub fn new(i2c: I2C) -> Self {
        Self::with_config(i2c, Config::default())
    }

    /// Create a new driver instance with a custom configuration.
    pub fn with_config(i2c: I2C, config: Config) -> Self {
        Self {
            i2c,
            config,
            reading: Reading::default(),
            last_read_ok: false,
        }
    }

    /// Return the 7-bit I2C address configured for this instance.
    pub fn address(&self) -> u8 {
        self.config.address
    }

    /// Configuration this instance was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Snapshot from the last successful [`Sw35xx::read_status`].
    pub fn reading(&self) -> &Reading {
        &self.reading
    }

    /// Whether the most recent status read completed. False before the first read.
    pub fn last_read_ok(&self) -> bool {
        self.last_read_ok
    }

    /// Release the bus.
    pub fn free(self) -> I2C {
        self.i2c
    }

    fn commit_reading<E>(&mut self, result: Result<Reading, Error<E>>) -> Result<Reading, Error<E>> {
        match result {
            Ok(reading) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("SW35xx status {}", reading);
                self.reading = reading;
                self.last_read_ok = true;
                Ok(reading)
            }
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("SW35xx status read failed, keeping previous snapshot");
                self.last_read_ok = false;
                Err(e)
            }
        }
    }
}

fn build_reading(raw: AdcBlock, fcx_status: u8) -> Reading {
    Reading {
        vin_mv: vin_raw_to_mv(raw.vin),
        vout_mv: vout_raw_to_mv(raw.vout),
        iout_usbc_ma: iout_raw_to_ma(raw.iout_usbc),
        iout_usba_ma: iout_raw_to_ma(raw.iout_usba),
        fast_charge: decode_fast_charge(fcx_status),
        pd_version: decode_pd_version(fcx_status),
    }
}

fn current_write(group: CurrentGroup, ma: u32) -> (u8, u8) {
    (group.register(), current_ma_to_code(ma, group.limit()))
}

fn max_current_writes() -> [(u8, u8); 7] {
    CurrentGroup::ALL.map(|group| current_write(group, CURRENT_MAX_MA as u32))
}

fn pd_command_value(cmd: PdCommand) -> u8 {
    PdSrcReqBits::TRIGGER.bits() | (cmd.code() & PD_CMD_MASK)
}

fn rebroadcast_value() -> u8 {
    (I2cCtrlBits::PDO_REFRESH | I2cCtrlBits::PDO_BROADCAST).bits()
}

fn quick_charge_writes(config: QuickChargeConfig, power: PowerClass, qc_conf2: u8, pwr_conf: u8) -> [(u8, u8); 3] {
    let (lo, hi) = encode_quick_charge(config, qc_conf2);
    let pwr = (pwr_conf & !PWR_CLASS_MASK) | encode_power_class(power);
    [(addr::QC_CONF1, lo), (addr::QC_CONF2, hi), (addr::PWR_CONF, pwr)]
}

fn quick_charge_settings(qc_conf: [u8; 2], pwr_conf: u8) -> QuickChargeSettings {
    let [conf1, conf2] = qc_conf;
    let raw = decode_quick_charge(conf1, conf2);
    QuickChargeSettings {
        flags: raw & QuickChargeConfig::all(),
        reserved_bits: raw.reserved_bits(),
        power_class: decode_power_class(pwr_conf),
    }
}

fn max_currents(codes: [u8; 7]) -> MaxCurrents {
    let [c5, c9, c12, c15, c20, p1, p2] = codes;
    MaxCurrents {
        fixed_5v_ma: code_to_current_ma(c5, CurrentGroup::Fixed5V.limit()),
        fixed_9v_ma: code_to_current_ma(c9, CurrentGroup::Fixed9V.limit()),
        fixed_12v_ma: code_to_current_ma(c12, CurrentGroup::Fixed12V.limit()),
        fixed_15v_ma: code_to_current_ma(c15, CurrentGroup::Fixed15V.limit()),
        fixed_20v_ma: code_to_current_ma(c20, CurrentGroup::Fixed20V.limit()),
        pps1_ma: code_to_current_ma(p1, CurrentGroup::Pps1.limit()),
        pps2_ma: code_to_current_ma(p2, CurrentGroup::Pps2.limit()),
    }
}

impl<I2C> Sw35xx<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Write a single register.
    pub fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        let res = self.i2c.write(self.config.address, &[reg, value]);
        #[cfg(feature = "defmt")]
        match &res {
            Ok(()) => defmt::trace!("SW35xx WR @0x{:02X} <- 0x{:02X}", reg, value),
            Err(_) => defmt::warn!("SW35xx WR ERR @0x{:02X}", reg),
        }
        res.map_err(Error::I2c)
    }

    /// Read a single register.
    pub fn read_reg(&mut self, reg: u8) -> Result<u8, Error<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.read_regs(reg, &mut buf)?;
        Ok(buf[0])
    }

    /// Read a burst starting at a register (auto-increment).
    pub fn read_regs(&mut self, start_reg: u8, data: &mut [u8]) -> Result<(), Error<I2C::Error>> {
        let res = self.i2c.write_read(self.config.address, &[start_reg], data);
        #[cfg(feature = "defmt")]
        match &res {
            Ok(()) => defmt::trace!("SW35xx RD @0x{:02X}: {:x}", start_reg, &*data),
            Err(_) => defmt::warn!("SW35xx RD ERR @0x{:02X}", start_reg),
        }
        res.map_err(Error::I2c)
    }

    /// Disable write protection of the configuration registers.
    pub fn unlock(&mut self) -> Result<(), Error<I2C::Error>> {
        for key in UNLOCK_SEQUENCE {
            self.write_reg(addr::I2C_ENABLE, key)?;
        }
        Ok(())
    }

    /// Restore write protection.
    pub fn lock(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_reg(addr::I2C_ENABLE, LOCK_VALUE)
    }

    /// unlock -> writes in order -> lock. Stops at the first failed transaction.
    fn write_unlocked(&mut self, writes: &[(u8, u8)]) -> Result<(), Error<I2C::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("SW35xx config write: {} registers", writes.len());
        let res = self.write_bracket(writes);
        #[cfg(feature = "defmt")]
        if res.is_err() {
            defmt::warn!("SW35xx config write aborted, write protection state undefined");
        }
        res
    }

    fn write_bracket(&mut self, writes: &[(u8, u8)]) -> Result<(), Error<I2C::Error>> {
        self.unlock()?;
        for &(reg, value) in writes {
            self.write_reg(reg, value)?;
        }
        self.lock()
    }

    /// Chip revision (IC_VERSION[2:0]).
    pub fn read_chip_version(&mut self) -> Result<u8, Error<I2C::Error>> {
        Ok(self.read_reg(addr::IC_VERSION)? & IC_VERSION_MASK)
    }

    fn select_adc_channel(&mut self, channel: AdcChannel) -> Result<(), Error<I2C::Error>> {
        self.write_reg(addr::ADC_DATA_TYPE, channel.code())?;
        if self.config.verify_adc_select {
            let actual = self.read_reg(addr::ADC_DATA_TYPE)? & ADC_CHANNEL_MASK;
            if actual != channel.code() {
                #[cfg(feature = "defmt")]
                defmt::warn!("SW35xx ADC select {} read back {}", channel.code(), actual);
                return Err(Error::AdcChannelMismatch {
                    expected: channel.code(),
                    actual,
                });
            }
        }
        Ok(())
    }

    fn read_adc_buffer(&mut self) -> Result<u16, Error<I2C::Error>> {
        let mut buf = [0u8; 2];
        self.read_regs(addr::ADC_DATA_BUF_H, &mut buf)?;
        let [high, low] = buf;
        Ok(join_12bit(high, low))
    }

    /// Select an ADC channel and read the 12-bit buffered sample.
    pub fn read_adc_channel(&mut self, channel: AdcChannel) -> Result<u16, Error<I2C::Error>> {
        self.select_adc_channel(channel)?;
        self.read_adc_buffer()
    }

    /// Like [`Sw35xx::read_adc_channel`], waiting `Config::adc_settle_us` between select and read.
    pub fn read_adc_channel_settled<D>(&mut self, channel: AdcChannel, delay: &mut D) -> Result<u16, Error<I2C::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.select_adc_channel(channel)?;
        delay.delay_us(self.config.adc_settle_us);
        self.read_adc_buffer()
    }

    fn sample_status(&mut self, use_adc_buffer: bool) -> Result<Reading, Error<I2C::Error>> {
        let raw = if use_adc_buffer {
            AdcBlock {
                vin: self.read_adc_channel(AdcChannel::Vin)?,
                vout: self.read_adc_channel(AdcChannel::Vout)?,
                iout_usbc: self.read_adc_channel(AdcChannel::IoutUsbC)?,
                iout_usba: self.read_adc_channel(AdcChannel::IoutUsbA)?,
            }
        } else {
            let mut block = [0u8; 6];
            self.read_regs(addr::ADC_VIN_H, &mut block)?;
            decode_adc_block(&block)
        };
        let fcx_status = self.read_reg(addr::FCX_STATUS)?;
        Ok(build_reading(raw, fcx_status))
    }

    /// Read voltages, currents and the negotiated protocol, updating the cached snapshot.
    ///
    /// With `use_adc_buffer` each quantity goes through the ADC buffer instead of the status block.
    /// On failure the previous snapshot is kept and [`Sw35xx::last_read_ok`] turns false.
    pub fn read_status(&mut self, use_adc_buffer: bool) -> Result<Reading, Error<I2C::Error>> {
        let res = self.sample_status(use_adc_buffer);
        self.commit_reading(res)
    }

    /// NTC sensor voltage in mV. Converting to degrees depends on the board's thermistor.
    pub fn read_temperature(&mut self, use_adc_buffer: bool) -> Result<f32, Error<I2C::Error>> {
        let raw = if use_adc_buffer {
            self.read_adc_channel(AdcChannel::Temperature)?
        } else {
            let mut buf = [0u8; 2];
            self.read_regs(addr::ADC_TS_H, &mut buf)?;
            let [high, low] = buf;
            join_12bit(high, low)
        };
        Ok(ts_raw_to_mv(raw))
    }

    /// Send a PD protocol-layer command.
    pub fn send_pd_command(&mut self, cmd: PdCommand) -> Result<(), Error<I2C::Error>> {
        self.write_unlocked(&[(addr::PD_SRC_REQ, pd_command_value(cmd))])
    }

    /// Send a PD command by raw code. Undocumented codes fail without touching the bus.
    pub fn send_pd_command_code(&mut self, code: u8) -> Result<(), Error<I2C::Error>> {
        let cmd = PdCommand::try_from(code).map_err(Error::UnsupportedCommand)?;
        self.send_pd_command(cmd)
    }

    /// Re-announce the source capabilities without a replug. Needed after changing current limits.
    pub fn rebroadcast_pdo(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_unlocked(&[(addr::I2C_CTRL, rebroadcast_value())])
    }

    /// Program the quick-charge enable mask and power class in one bracket.
    pub fn set_quick_charge_configuration(
        &mut self,
        config: QuickChargeConfig,
        power: PowerClass,
    ) -> Result<(), Error<I2C::Error>> {
        if config.reserved_bits() != 0 {
            return Err(Error::UnsupportedValue);
        }
        let qc_conf2 = self.read_reg(addr::QC_CONF2)?;
        let pwr_conf = self.read_reg(addr::PWR_CONF)?;
        self.write_unlocked(&quick_charge_writes(config, power, qc_conf2, pwr_conf))
    }

    /// Read back the quick-charge enable mask and power class.
    pub fn read_quick_charge_configuration(&mut self) -> Result<QuickChargeSettings, Error<I2C::Error>> {
        let mut qc_conf = [0u8; 2];
        self.read_regs(addr::QC_CONF1, &mut qc_conf)?;
        let pwr_conf = self.read_reg(addr::PWR_CONF)?;
        Ok(quick_charge_settings(qc_conf, pwr_conf))
    }

    /// Set every PD group (fixed and PPS) to 5 A.
    ///
    /// Only the SW3518S is rated for 5 A on all groups; on other parts this can exceed the port rating.
    pub fn set_max_current_5a(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_unlocked(&max_current_writes())
    }

    /// Set fixed-voltage group ceilings in mA. Values round down to 50 mA and clamp to 5 A;
    /// 0 disables a group, except 5 V which falls back to the smallest step.
    pub fn set_max_currents_fixed(
        &mut self,
        ma_5v: u32,
        ma_9v: u32,
        ma_12v: u32,
        ma_15v: u32,
        ma_20v: u32,
    ) -> Result<(), Error<I2C::Error>> {
        self.write_unlocked(&[
            current_write(CurrentGroup::Fixed5V, ma_5v),
            current_write(CurrentGroup::Fixed9V, ma_9v),
            current_write(CurrentGroup::Fixed12V, ma_12v),
            current_write(CurrentGroup::Fixed15V, ma_15v),
            current_write(CurrentGroup::Fixed20V, ma_20v),
        ])
    }

    /// Set PPS group ceilings in mA (0 disables).
    ///
    /// PPS2 is only advertised when PPS1's maximum voltage is below PPS2's; not checked here.
    pub fn set_max_currents_pps(&mut self, ma_pps1: u32, ma_pps2: u32) -> Result<(), Error<I2C::Error>> {
        self.write_unlocked(&[
            current_write(CurrentGroup::Pps1, ma_pps1),
            current_write(CurrentGroup::Pps2, ma_pps2),
        ])
    }

    /// Read the programmed ceilings of all groups.
    pub fn read_max_currents(&mut self) -> Result<MaxCurrents, Error<I2C::Error>> {
        let mut codes = [0u8; 7];
        self.read_regs(addr::PD_CONF1, &mut codes)?;
        Ok(max_currents(codes))
    }
}

#[cfg(feature = "async")]
impl<I2C> Sw35xx<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    pub async fn write_reg_async(&mut self, reg: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        let res = self.i2c.write(self.config.address, &[reg, value]).await;
        #[cfg(feature = "defmt")]
        match &res {
            Ok(()) => defmt::trace!("SW35xx WR @0x{:02X} <- 0x{:02X}", reg, value),
            Err(_) => defmt::warn!("SW35xx WR ERR @0x{:02X}", reg),
        }
        res.map_err(Error::I2c)
    }

    pub async fn read_reg_async(&mut self, reg: u8) -> Result<u8, Error<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.read_regs_async(reg, &mut buf).await?;
        Ok(buf[0])
    }

    pub async fn read_regs_async(&mut self, start_reg: u8, data: &mut [u8]) -> Result<(), Error<I2C::Error>> {
        let res = self.i2c.write_read(self.config.address, &[start_reg], data).await;
        #[cfg(feature = "defmt")]
        match &res {
            Ok(()) => defmt::trace!("SW35xx RD @0x{:02X}: {:x}", start_reg, &*data),
            Err(_) => defmt::warn!("SW35xx RD ERR @0x{:02X}", start_reg),
        }
        res.map_err(Error::I2c)
    }

    pub async fn unlock_async(&mut self) -> Result<(), Error<I2C::Error>> {
        for key in UNLOCK_SEQUENCE {
            self.write_reg_async(addr::I2C_ENABLE, key).await?;
        }
        Ok(())
    }

    pub async fn lock_async(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_reg_async(addr::I2C_ENABLE, LOCK_VALUE).await
    }

    async fn write_unlocked_async(&mut self, writes: &[(u8, u8)]) -> Result<(), Error<I2C::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("SW35xx config write: {} registers", writes.len());
        let res = self.write_bracket_async(writes).await;
        #[cfg(feature = "defmt")]
        if res.is_err() {
            defmt::warn!("SW35xx config write aborted, write protection state undefined");
        }
        res
    }

    async fn write_bracket_async(&mut self, writes: &[(u8, u8)]) -> Result<(), Error<I2C::Error>> {
        self.unlock_async().await?;
        for &(reg, value) in writes {
            self.write_reg_async(reg, value).await?;
        }
        self.lock_async().await
    }

    pub async fn read_chip_version_async(&mut self) -> Result<u8, Error<I2C::Error>> {
        Ok(self.read_reg_async(addr::IC_VERSION).await? & IC_VERSION_MASK)
    }

    async fn select_adc_channel_async(&mut self, channel: AdcChannel) -> Result<(), Error<I2C::Error>> {
        self.write_reg_async(addr::ADC_DATA_TYPE, channel.code()).await?;
        if self.config.verify_adc_select {
            let actual = self.read_reg_async(addr::ADC_DATA_TYPE).await? & ADC_CHANNEL_MASK;
            if actual != channel.code() {
                #[cfg(feature = "defmt")]
                defmt::warn!("SW35xx ADC select {} read back {}", channel.code(), actual);
                return Err(Error::AdcChannelMismatch {
                    expected: channel.code(),
                    actual,
                });
            }
        }
        Ok(())
    }

    async fn read_adc_buffer_async(&mut self) -> Result<u16, Error<I2C::Error>> {
        let mut buf = [0u8; 2];
        self.read_regs_async(addr::ADC_DATA_BUF_H, &mut buf).await?;
        let [high, low] = buf;
        Ok(join_12bit(high, low))
    }

    pub async fn read_adc_channel_async(&mut self, channel: AdcChannel) -> Result<u16, Error<I2C::Error>> {
        self.select_adc_channel_async(channel).await?;
        self.read_adc_buffer_async().await
    }

    pub async fn read_adc_channel_settled_async<D>(
        &mut self,
        channel: AdcChannel,
        delay: &mut D,
    ) -> Result<u16, Error<I2C::Error>>
    where
        D: embedded_hal_async::delay::DelayNs,
    {
        self.select_adc_channel_async(channel).await?;
        delay.delay_us(self.config.adc_settle_us).await;
        self.read_adc_buffer_async().await
    }

    async fn sample_status_async(&mut self, use_adc_buffer: bool) -> Result<Reading, Error<I2C::Error>> {
        let raw = if use_adc_buffer {
            AdcBlock {
                vin: self.read_adc_channel_async(AdcChannel::Vin).await?,
                vout: self.read_adc_channel_async(AdcChannel::Vout).await?,
                iout_usbc: self.read_adc_channel_async(AdcChannel::IoutUsbC).await?,
                iout_usba: self.read_adc_channel_async(AdcChannel::IoutUsbA).await?,
            }
        } else {
            let mut block = [0u8; 6];
            self.read_regs_async(addr::ADC_VIN_H, &mut block).await?;
            decode_adc_block(&block)
        };
        let fcx_status = self.read_reg_async(addr::FCX_STATUS).await?;
        Ok(build_reading(raw, fcx_status))
    }

    /// Async version of [`Sw35xx::read_status`].
    pub async fn read_status_async(&mut self, use_adc_buffer: bool) -> Result<Reading, Error<I2C::Error>> {
        let res = self.sample_status_async(use_adc_buffer).await;
        self.commit_reading(res)
    }

    pub async fn read_temperature_async(&mut self, use_adc_buffer: bool) -> Result<f32, Error<I2C::Error>> {
        let raw = if use_adc_buffer {
            self.read_adc_channel_async(AdcChannel::Temperature).await?
        } else {
            let mut buf = [0u8; 2];
            self.read_regs_async(addr::ADC_TS_H, &mut buf).await?;
            let [high, low] = buf;
            join_12bit(high, low)
        };
        Ok(ts_raw_to_mv(raw))
    }

    pub async fn send_pd_command_async(&mut self, cmd: PdCommand) -> Result<(), Error<I2C::Error>> {
        self.write_unlocked_async(&[(addr::PD_SRC_REQ, pd_command_value(cmd))]).await
    }

    pub async fn send_pd_command_code_async(&mut self, code: u8) -> Result<(), Error<I2C::Error>> {
        let cmd = PdCommand::try_from(code).map_err(Error::UnsupportedCommand)?;
        self.send_pd_command_async(cmd).await
    }

    pub async fn rebroadcast_pdo_async(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_unlocked_async(&[(addr::I2C_CTRL, rebroadcast_value())]).await
    }

    pub async fn set_quick_charge_configuration_async(
        &mut self,
        config: QuickChargeConfig,
        power: PowerClass,
    ) -> Result<(), Error<I2C::Error>> {
        if config.reserved_bits() != 0 {
            return Err(Error::UnsupportedValue);
        }
        let qc_conf2 = self.read_reg_async(addr::QC_CONF2).await?;
        let pwr_conf = self.read_reg_async(addr::PWR_CONF).await?;
        self.write_unlocked_async(&quick_charge_writes(config, power, qc_conf2, pwr_conf))
            .await
    }

    pub async fn read_quick_charge_configuration_async(&mut self) -> Result<QuickChargeSettings, Error<I2C::Error>> {
        let mut qc_conf = [0u8; 2];
        self.read_regs_async(addr::QC_CONF1, &mut qc_conf).await?;
        let pwr_conf = self.read_reg_async(addr::PWR_CONF).await?;
        Ok(quick_charge_settings(qc_conf, pwr_conf))
    }

    pub async fn set_max_current_5a_async(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_unlocked_async(&max_current_writes()).await
    }

    pub async fn set_max_currents_fixed_async(
        &mut self,
        ma_5v: u32,
        ma_9v: u32,
        ma_12v: u32,
        ma_15v: u32,
        ma_20v: u32,
    ) -> Result<(), Error<I2C::Error>> {
        self.write_unlocked_async(&[
            current_write(CurrentGroup::Fixed5V, ma_5v),
            current_write(CurrentGroup::Fixed9V, ma_9v),
            current_write(CurrentGroup::Fixed12V, ma_12v),
            current_write(CurrentGroup::Fixed15V, ma_15v),
            current_write(CurrentGroup::Fixed20V, ma_20v),
        ])
        .await
    }

    pub async fn set_max_currents_pps_async(&mut self, ma_pps1: u32, ma_pps2: u32) -> Result<(), Error<I2C::Error>> {
        self.write_unlocked_async(&[
            current_write(CurrentGroup::Pps1, ma_pps1),
            current_write(CurrentGroup::Pps2, ma_pps2),
        ])
        .await
    }

    pub async fn read_max_currents_async(&mut self) -> Result<MaxCurrents, Error<I2C::Error>> {
        let mut codes = [0u8; 7];
        self.read_regs_async(addr::PD_CONF1, &mut codes).await?;
        Ok(max_currents(codes))
    }
}
