use sw35xx_rs::data_types::{
    AdcChannel, Config, CurrentGroup, DEFAULT_ADC_SETTLE_US, FastChargeProtocol, PdCommand, PdVersion, PowerClass,
};
use sw35xx_rs::registers::{
    PD_CMD_MASK, PdSrcReqBits, QuickChargeConfig, addr, decode_fast_charge, decode_pd_version, decode_power_class, decode_quick_charge,
    encode_fast_charge, encode_power_class, encode_quick_charge,
};

#[test]
fn fast_charge_table_roundtrip() {
    for protocol in FastChargeProtocol::ALL {
        assert_eq!(decode_fast_charge(encode_fast_charge(protocol)), protocol);
    }
}

#[test]
fn unknown_fast_charge_codes_decode_to_none() {
    for code in 12..=15u8 {
        assert_eq!(decode_fast_charge(code), FastChargeProtocol::None);
    }
}

#[test]
fn fast_charge_ignores_version_bits() {
    assert_eq!(decode_fast_charge(0x25), FastChargeProtocol::PdFixed);
    assert_eq!(decode_fast_charge(0xF6), FastChargeProtocol::PdPps);
    assert!(FastChargeProtocol::PdPps.is_pd());
    assert!(!FastChargeProtocol::Qc3.is_pd());
}

#[test]
fn pd_version_field() {
    assert_eq!(decode_pd_version(0b0001_0101), Some(PdVersion::Pd2));
    assert_eq!(decode_pd_version(0b0010_0101), Some(PdVersion::Pd3));
    assert_eq!(decode_pd_version(0b0000_0101), None);
    assert_eq!(decode_pd_version(0b0011_0101), None);
    assert_eq!(PdVersion::Pd2.major(), 2);
    assert_eq!(PdVersion::Pd3.major(), 3);
}

#[test]
fn quick_charge_bit_positions() {
    let expected = [
        (QuickChargeConfig::PE, 0x0001),
        (QuickChargeConfig::SCP, 0x0004),
        (QuickChargeConfig::FCP, 0x0008),
        (QuickChargeConfig::QC, 0x0010),
        (QuickChargeConfig::PD, 0x0020),
        (QuickChargeConfig::PORT2, 0x0040),
        (QuickChargeConfig::PORT1, 0x0080),
        (QuickChargeConfig::AFC, 0x4000),
        (QuickChargeConfig::SFCP, 0x8000),
    ];
    for (flag, bits) in expected {
        assert_eq!(flag.bits(), bits);
    }
    assert_eq!(QuickChargeConfig::all().bits(), 0xC0FD);
}

#[test]
fn quick_charge_reserved_bits_detected() {
    assert_eq!(QuickChargeConfig::all().reserved_bits(), 0);
    let raw = QuickChargeConfig::from_bits_retain(0x0302) | QuickChargeConfig::PD;
    assert_eq!(raw.reserved_bits(), 0x0302);
}

#[test]
fn quick_charge_split_preserves_chip_bits() {
    let config = QuickChargeConfig::PD | QuickChargeConfig::PORT1 | QuickChargeConfig::AFC;
    assert_eq!(encode_quick_charge(config, 0x00), (0xA0, 0x40));
    assert_eq!(encode_quick_charge(config, 0xFF), (0xA0, 0x7F));
    assert_eq!(encode_quick_charge(QuickChargeConfig::empty(), 0xC5), (0x00, 0x05));
}

#[test]
fn quick_charge_decode_retains_unknown_bits() {
    let raw = decode_quick_charge(0xA1, 0x42);
    assert!(raw.contains(QuickChargeConfig::PORT1 | QuickChargeConfig::PD | QuickChargeConfig::PE));
    assert!(raw.contains(QuickChargeConfig::AFC));
    assert_eq!(raw.reserved_bits(), 0x0200);
}

#[test]
fn power_class_field() {
    let classes = [
        (PowerClass::Pwr9V, 0b00),
        (PowerClass::Pwr12V, 0b01),
        (PowerClass::Pwr20V1, 0b10),
        (PowerClass::Pwr20V2, 0b11),
    ];
    for (class, bits) in classes {
        assert_eq!(encode_power_class(class), bits);
        assert_eq!(decode_power_class(0xFC | bits), class);
    }
}

#[test]
fn pd_command_codes() {
    assert_eq!(PdCommand::try_from(1), Ok(PdCommand::HardReset));
    assert_eq!(PdCommand::HardReset.code(), 1);
    assert_eq!(PdCommand::try_from(0), Err(0));
    for code in 2..=15u8 {
        assert_eq!(PdCommand::try_from(code), Err(code));
    }
    assert_eq!(PdCommand::try_from(0x81), Err(0x81));
}

#[test]
fn pd_src_req_layout() {
    assert_eq!(PdSrcReqBits::TRIGGER.bits(), 0x80);
    assert_eq!(PdSrcReqBits::all().bits() & PD_CMD_MASK, 0);
    assert_eq!(PdSrcReqBits::TRIGGER.bits() | (PdCommand::HardReset.code() & PD_CMD_MASK), 0x81);
}

#[test]
fn current_group_registers() {
    let regs = CurrentGroup::ALL.map(|g| g.register());
    assert_eq!(
        regs,
        [
            addr::PD_CONF1,
            addr::PD_CONF2,
            addr::PD_CONF3,
            addr::PD_CONF4,
            addr::PD_CONF5,
            addr::PD_CONF6,
            addr::PD_CONF7
        ]
    );
    assert_eq!(regs, [0xB0, 0xB1, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6]);
}

#[test]
fn only_five_volt_group_forbids_zero() {
    for group in CurrentGroup::ALL {
        assert_eq!(group.limit().forbid_zero, group == CurrentGroup::Fixed5V, "{:?}", group);
    }
}

#[test]
fn adc_channel_codes() {
    assert_eq!(AdcChannel::Vin.code(), 1);
    assert_eq!(AdcChannel::Vout.code(), 2);
    assert_eq!(AdcChannel::IoutUsbC.code(), 3);
    assert_eq!(AdcChannel::IoutUsbA.code(), 4);
    assert_eq!(AdcChannel::Temperature.code(), 6);
}

#[test]
fn default_config() {
    let config = Config::default();
    assert_eq!(config.address, 0x3C);
    assert!(!config.verify_adc_select);
    assert_eq!(config.adc_settle_us, DEFAULT_ADC_SETTLE_US);
}
