use sw35xx_rs::data_types::CurrentGroup;
use sw35xx_rs::registers::{
    CURRENT_MAX_MA, CURRENT_STEP_MA, code_to_current_ma, current_ma_to_code, decode_adc_block, iout_raw_to_ma,
    join_12bit, ts_raw_to_mv, vin_raw_to_mv, vout_raw_to_mv,
};

#[test]
fn five_volt_group_never_encodes_disabled() {
    let limit = CurrentGroup::Fixed5V.limit();
    for ma in 0..CURRENT_STEP_MA as u32 {
        assert_eq!(current_ma_to_code(ma, limit), 1, "5V request {} mA", ma);
    }
    assert_eq!(code_to_current_ma(current_ma_to_code(0, limit), limit), CURRENT_STEP_MA);
}

#[test]
fn other_groups_disable_below_one_step() {
    for group in CurrentGroup::ALL.into_iter().filter(|g| *g != CurrentGroup::Fixed5V) {
        let limit = group.limit();
        assert_eq!(current_ma_to_code(0, limit), 0, "{:?}", group);
        assert_eq!(current_ma_to_code(CURRENT_STEP_MA as u32 - 1, limit), 0, "{:?}", group);
        assert_eq!(current_ma_to_code(CURRENT_STEP_MA as u32, limit), 1, "{:?}", group);
    }
}

#[test]
fn ceilings_round_down_never_exceed_request() {
    for group in CurrentGroup::ALL {
        let limit = group.limit();
        for ma in (CURRENT_STEP_MA as u32..=CURRENT_MAX_MA as u32).step_by(7) {
            let back = code_to_current_ma(current_ma_to_code(ma, limit), limit) as u32;
            assert!(back <= ma, "{:?}: {} mA encoded as {} mA", group, ma, back);
            assert!(ma - back < CURRENT_STEP_MA as u32);
        }
    }
}

#[test]
fn ceilings_clamp_to_max() {
    let limit = CurrentGroup::Fixed20V.limit();
    assert_eq!(current_ma_to_code(CURRENT_MAX_MA as u32, limit), 100);
    assert_eq!(current_ma_to_code(10_000, limit), 100);
    assert_eq!(current_ma_to_code(u32::MAX, limit), 100);
    assert_eq!(code_to_current_ma(current_ma_to_code(7_000, limit), limit), CURRENT_MAX_MA);
}

#[test]
fn current_code_readback_masks_field() {
    let limit = CurrentGroup::Pps1.limit();
    // Bit 7 is not part of the limit field.
    assert_eq!(code_to_current_ma(0x80 | 40, limit), 2_000);
}

#[test]
fn join_12bit_uses_low_nibble_only() {
    assert_eq!(join_12bit(0xAB, 0xFC), 0xABC);
    assert_eq!(join_12bit(0x00, 0x0F), 0x00F);
    assert_eq!(join_12bit(0xFF, 0xFF), 0xFFF);
}

#[test]
fn status_block_nibbles_are_split_per_channel() {
    // VIN 0x4B1, VOUT 0x5DC, IOUT_C 0x327, IOUT_A 0x00A
    let raw = decode_adc_block(&[0x4B, 0x5D, 0x1C, 0x32, 0x00, 0x7A]);
    assert_eq!(raw.vin, 0x4B1);
    assert_eq!(raw.vout, 0x5DC);
    assert_eq!(raw.iout_usbc, 0x327);
    assert_eq!(raw.iout_usba, 0x00A);
}

#[test]
fn adc_scales() {
    assert_eq!(vin_raw_to_mv(1_200), 12_000);
    assert_eq!(vin_raw_to_mv(0xFFF), 40_950);
    assert_eq!(vout_raw_to_mv(1_500), 9_000);
    assert_eq!(vout_raw_to_mv(0xFFF), 24_570);
    assert_eq!(iout_raw_to_ma(800), 2_000);
    assert_eq!(iout_raw_to_ma(0xFFF), 10_237);
    assert_eq!(ts_raw_to_mv(0x123), 145.5);
}

#[test]
fn output_current_noise_floor_reads_zero() {
    assert_eq!(iout_raw_to_ma(0), 0);
    assert_eq!(iout_raw_to_ma(15), 0);
    assert_eq!(iout_raw_to_ma(16), 40);
}
