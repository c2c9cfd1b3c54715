//! Host-side tests driving the full bus transaction sequences against a
//! mocked I2C peripheral.

use std::io::ErrorKind;

use embedded_hal_mock::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use embedded_hal_mock::MockError;

use drv2605_haptic::{
    CalibrationParams, Drv2605, Effect, Error, Mode, MotorType, PollPolicy, TimeOffsets,
    WaveformReg, ADDRESS,
};

const MODE: u8 = 0x01;
const RTP_INPUT: u8 = 0x02;
const LIBRARY: u8 = 0x03;
const SEQ0: u8 = 0x04;
const GO: u8 = 0x0c;
const RATED_VOLTAGE: u8 = 0x16;
const OD_CLAMP: u8 = 0x17;
const FEEDBACK: u8 = 0x1a;
const CONTROL1: u8 = 0x1b;
const CONTROL2: u8 = 0x1c;
const CONTROL4: u8 = 0x1e;
const CONTROL5: u8 = 0x1f;

fn read(register: u8, value: u8) -> I2cTransaction {
    I2cTransaction::write_read(ADDRESS, vec![register], vec![value])
}

fn read_error(register: u8) -> I2cTransaction {
    I2cTransaction::write_read(ADDRESS, vec![register], vec![0])
        .with_error(MockError::Io(ErrorKind::Other))
}

fn write(register: u8, value: u8) -> I2cTransaction {
    I2cTransaction::write(ADDRESS, vec![register, value])
}

/// read, write, read-back triple for a mask-scoped modify.
fn modify(register: u8, before: u8, after: u8) -> Vec<I2cTransaction> {
    vec![read(register, before), write(register, after), read(register, after)]
}

/// The transaction tail shared by every submission of the recommended
/// defaults: the five mask-scoped registers plus the two direct writes.
/// `before` holds the pre-existing contents of the shared registers.
fn submission(feedback_before: u8, control4_before: u8) -> Vec<I2cTransaction> {
    let mut t = Vec::new();
    // brake factor 2 lands in bits 6:4; loop gain 2 is wiped by the 0x70
    // write mask, leaving whatever gain the register already held
    t.extend(modify(FEEDBACK, feedback_before, (feedback_before & !0x70) | 0x20));
    t.push(write(RATED_VOLTAGE, 0x3e));
    t.push(write(OD_CLAMP, 0x8c));
    // auto-cal time 3, zero-crossing detect 0
    t.extend(modify(CONTROL4, control4_before, (control4_before & !0xf0) | 0x30));
    // drive time 0x13 over a register already holding it plus high bits
    t.extend(modify(CONTROL1, 0x93, 0x93));
    // sample 3, blanking 1, idiss 1 = 0x35 under mask 0x3f
    t.extend(modify(CONTROL2, 0xf5, 0xf5));
    // blanking/idiss high bits are zero for the recommended codes
    t.extend(modify(CONTROL5, 0x80, 0x80));
    t
}

#[test]
fn set_mode_only_touches_the_mode_field() {
    // standby bit stays set while the mode field changes underneath it
    let mut i2c = I2cMock::new(&modify(MODE, 0x40, 0x47));
    let mut haptics = Drv2605::new(i2c.clone(), PollPolicy::Unbounded);
    haptics.set_mode(Mode::AutoCalibration).unwrap();
    i2c.done();
}

#[test]
fn set_standby_preserves_the_mode_field() {
    let mut i2c = I2cMock::new(&modify(MODE, 0x45, 0x05));
    let mut haptics = Drv2605::new(i2c.clone(), PollPolicy::Unbounded);
    haptics.set_standby(false).unwrap();
    i2c.done();
}

#[test]
fn reset_waits_for_the_bit_to_clear_and_retries_failed_reads() {
    let mut transactions = vec![write(MODE, 0x80)];
    transactions.push(read(MODE, 0x80));
    transactions.push(read_error(MODE));
    transactions.push(read(MODE, 0x00));

    let mut i2c = I2cMock::new(&transactions);
    let mut haptics = Drv2605::new(i2c.clone(), PollPolicy::Unbounded);
    haptics.reset().unwrap();
    i2c.done();
}

#[test]
fn bounded_policy_times_out_when_the_bit_never_clears() {
    let transactions = vec![
        write(MODE, 0x80),
        read(MODE, 0x80),
        read(MODE, 0x80),
        read(MODE, 0x80),
    ];

    let mut i2c = I2cMock::new(&transactions);
    let mut haptics = Drv2605::new(i2c.clone(), PollPolicy::Bounded(3));
    assert!(matches!(haptics.reset(), Err(Error::Timeout)));
    i2c.done();
}

#[test]
fn write_failures_surface_as_bus_errors() {
    let transactions =
        vec![write(GO, 0x01).with_error(MockError::Io(ErrorKind::Other))];
    let mut i2c = I2cMock::new(&transactions);
    let mut haptics = Drv2605::new(i2c.clone(), PollPolicy::Unbounded);
    assert!(matches!(haptics.go(), Err(Error::Bus(_))));
    i2c.done();
}

#[test]
fn slots_and_delays_write_their_encodings() {
    let transactions = vec![
        write(SEQ0 + 1, Effect::SharpClick100 as u8),
        write(SEQ0 + 2, 0x80 | 50),
        write(SEQ0 + 7, Effect::Stop as u8),
    ];
    let mut i2c = I2cMock::new(&transactions);
    let mut haptics = Drv2605::new(i2c.clone(), PollPolicy::Unbounded);
    haptics.set_slot(1, Effect::SharpClick100).unwrap();
    haptics.set_delay(2, 500).unwrap();
    haptics.set_slot(7, Effect::Stop).unwrap();
    i2c.done();
}

#[test]
fn set_sequence_programs_all_slots_in_one_write() {
    let sequence = [
        WaveformReg::new_effect(Effect::StrongClick100),
        WaveformReg::new_wait_time(25),
        WaveformReg::new_effect(Effect::SoftBump60),
        WaveformReg::new_stop(),
        WaveformReg::new_stop(),
        WaveformReg::new_stop(),
        WaveformReg::new_stop(),
        WaveformReg::new_stop(),
    ];
    let transactions = vec![I2cTransaction::write(
        ADDRESS,
        vec![SEQ0, 0x01, 0x80 | 25, 0x08, 0, 0, 0, 0, 0],
    )];
    let mut i2c = I2cMock::new(&transactions);
    let mut haptics = Drv2605::new(i2c.clone(), PollPolicy::Unbounded);
    haptics.set_sequence(&sequence).unwrap();
    i2c.done();
}

#[test]
fn click_bursts_effect_and_stop_then_fires_go() {
    let transactions = vec![
        I2cTransaction::write(ADDRESS, vec![SEQ0, 0x01, 0x00]),
        write(GO, 0x01),
    ];
    let mut i2c = I2cMock::new(&transactions);
    let mut haptics = Drv2605::new(i2c.clone(), PollPolicy::Unbounded);
    haptics.click().unwrap();
    i2c.done();
}

#[test]
fn realtime_input_is_written_as_raw_twos_complement() {
    let transactions = vec![write(RTP_INPUT, 0xff)];
    let mut i2c = I2cMock::new(&transactions);
    let mut haptics = Drv2605::new(i2c.clone(), PollPolicy::Unbounded);
    haptics.set_realtime_input(-1).unwrap();
    i2c.done();
}

#[test]
fn time_offsets_hit_the_four_trim_registers() {
    let transactions = vec![
        write(0x0d, 0x10),
        write(0x0e, 0xfe),
        write(0x0f, 0x02),
        write(0x10, 0x00),
    ];
    let mut i2c = I2cMock::new(&transactions);
    let mut haptics = Drv2605::new(i2c.clone(), PollPolicy::Unbounded);
    haptics
        .set_time_offsets(TimeOffsets {
            overdrive: 16,
            sustain_positive: -2,
            sustain_negative: 2,
            brake: 0,
        })
        .unwrap();
    i2c.done();
}

#[test]
fn getters_decode_the_register_fields() {
    let transactions = vec![read(MODE, 0x47), read(FEEDBACK, 0xb6), read(GO, 0x01)];
    let mut i2c = I2cMock::new(&transactions);
    let mut haptics = Drv2605::new(i2c.clone(), PollPolicy::Unbounded);

    let mode = haptics.get_mode().unwrap();
    assert!(!mode.dev_reset());
    assert!(mode.standby());
    assert_eq!(mode.mode(), Mode::AutoCalibration);

    let feedback = haptics.get_feedback_control().unwrap();
    assert!(feedback.n_erm_lra());
    assert_eq!(feedback.fb_brake_factor(), 3);
    assert_eq!(feedback.loop_gain(), 1);
    assert_eq!(feedback.bemf_gain(), 2);

    assert!(haptics.is_busy().unwrap());
    i2c.done();
}

fn calibrate_transactions(status: u8) -> Vec<I2cTransaction> {
    let mut t = Vec::new();
    // force auto-calibration mode, standby bit untouched
    t.extend(modify(MODE, 0x40, 0x47));
    t.extend(submission(0xb6, 0x20));
    t.push(write(GO, 0x01));
    t.push(read(GO, 0x01));
    t.push(read(GO, 0x01));
    t.push(read(GO, 0x00));
    t.push(read(0x00, status));
    t
}

#[test]
fn calibrate_reports_the_diagnostic_bit() {
    let params = CalibrationParams::recommended(MotorType::Erm);

    let mut i2c = I2cMock::new(&calibrate_transactions(0x08));
    let mut haptics = Drv2605::new(i2c.clone(), PollPolicy::Unbounded);
    assert!(haptics.calibrate(&params).unwrap());
    i2c.done();

    let mut i2c = I2cMock::new(&calibrate_transactions(0x00));
    let mut haptics = Drv2605::new(i2c.clone(), PollPolicy::Unbounded);
    assert!(!haptics.calibrate(&params).unwrap());
    i2c.done();
}

#[test]
fn calibrate_aborts_the_sequence_on_a_bus_error() {
    // the rated-voltage write fails; nothing after it goes out
    let mut transactions = Vec::new();
    transactions.extend(modify(MODE, 0x40, 0x47));
    transactions.extend(modify(FEEDBACK, 0xb6, 0xa6));
    transactions
        .push(write(RATED_VOLTAGE, 0x3e).with_error(MockError::Io(ErrorKind::Other)));

    let params = CalibrationParams::recommended(MotorType::Erm);
    let mut i2c = I2cMock::new(&transactions);
    let mut haptics = Drv2605::new(i2c.clone(), PollPolicy::Unbounded);
    assert!(matches!(haptics.calibrate(&params), Err(Error::Bus(_))));
    i2c.done();
}

#[test]
fn init_brings_the_device_to_idle_with_recommended_defaults() {
    let mut transactions = Vec::new();
    // reset and wait for the bit to clear
    transactions.push(write(MODE, 0x80));
    transactions.push(read(MODE, 0x00));
    // the device NAKs once while rebooting, then answers
    transactions.push(read_error(0x00));
    transactions.push(read(0x00, 0x60));
    // leave standby
    transactions.extend(modify(MODE, 0x40, 0x00));
    // LRA drive
    transactions.extend(modify(FEEDBACK, 0x36, 0xb6));
    // LRA library; nothing follows — the defaults are only returned,
    // not submitted
    transactions.extend(modify(LIBRARY, 0x00, 0x06));

    let mut i2c = I2cMock::new(&transactions);
    let mut haptics = Drv2605::new(i2c.clone(), PollPolicy::Unbounded);
    let params = haptics.init(MotorType::Lra).unwrap();
    assert_eq!(params, CalibrationParams::recommended(MotorType::Lra));
    i2c.done();
}

#[test]
fn dump_renders_registers_and_nonzero_fields() {
    let transactions: Vec<I2cTransaction> = (0x00..=0x22)
        .map(|addr| {
            let value = match addr {
                0x01 => 0x40,
                0x16 => 0x3e,
                0x1a => 0xb6,
                _ => 0x00,
            };
            read(addr, value)
        })
        .collect();

    let mut i2c = I2cMock::new(&transactions);
    let mut haptics = Drv2605::new(i2c.clone(), PollPolicy::Unbounded);
    let mut out = String::new();
    haptics.dump_registers(&mut out).unwrap();
    i2c.done();

    assert!(out.contains("0x01 Mode = 0x40\n  STANDBY[6:6] = 0x1\n"));
    assert!(out.contains("0x16 RatedVoltage = 0x3e\n  RATED_VOLTAGE[7:0] = 0x3e\n"));
    assert!(out.contains("0x1a FeedbackControl = 0xb6\n  N_ERM_LRA[7:7] = 0x1\n"));
    assert!(out.contains("  FB_BRAKE_FACTOR[6:4] = 0x3\n"));
    // all-zero registers print only the header line
    assert!(out.contains("0x0c Go = 0x00\n0x0d OverdriveTimeOffset = 0x00\n"));
    // every documented address shows up
    assert!(out.contains("0x22 LraResonancePeriod = 0x00"));
}
