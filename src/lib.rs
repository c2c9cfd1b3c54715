/*!
A platform agnostic Rust driver for the drv2605 haptic motor controller,
based on the [`embedded-hal`] traits.

The driver covers waveform sequencer playback, device state control
(reset, standby, mode and library selection) and the auto-calibration
engine, including the closed-form derivation of the calibration inputs
from the motor datasheet values.

```no_run
# fn run<I2C, E>(i2c: I2C) -> Result<(), drv2605_haptic::Error<E>>
# where I2C: embedded_hal::blocking::i2c::Write<Error = E>
#     + embedded_hal::blocking::i2c::WriteRead<Error = E> {
use drv2605_haptic::{Drv2605, MotorType, PollPolicy};

let mut haptics = Drv2605::new(i2c, PollPolicy::Bounded(10_000));
let params = haptics
    .init(MotorType::Lra)?
    .with_lra_derivation(2.0, 2.3, 235.0);
if haptics.calibrate(&params)? {
    haptics.click()?;
}
# Ok(()) }
```
*/
#![no_std]

pub mod calibration;
mod dump;
pub mod registers;

pub use crate::calibration::{CalibrationParams, MotorType};
pub use crate::registers::{
    Effect, FeedbackControlReg, GoReg, Library, Mode, ModeReg, Register, StatusReg, WaveformReg,
};

use embedded_hal::blocking::i2c::{Write, WriteRead};

use crate::registers::mask;

/// The hardcoded address of the driver. All drivers share the same
/// address so that it is possible to broadcast on the bus and have
/// multiple units emit the same waveform.
pub const ADDRESS: u8 = 0x5a;

/// How many status reads the post-reset wait in [`Drv2605::init`] is
/// allowed before giving up and carrying on.
const STATUS_POLL_ATTEMPTS: u32 = 1000;

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Transport failure. A failure mid-way through a multi-register
    /// sequence aborts it; the registers already written stay written.
    Bus(E),
    /// A bounded completion wait exhausted its attempts before the
    /// hardware cleared the bit.
    Timeout,
    /// The register-dump sink rejected output.
    Fmt,
}

/// How long the driver waits for a self-clearing bit (DEV_RESET, GO).
///
/// Individual read failures inside a wait are retried, not propagated:
/// the device NAKs while it is busy resetting, and a transient bus error
/// should not abort an otherwise healthy completion wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollPolicy {
    /// Spin until the bit clears, however long that takes.
    Unbounded,
    /// Give up with [`Error::Timeout`] after this many read attempts.
    Bounded(u32),
}

/// Playback timing trims applied on top of the library waveforms,
/// registers 0x0D through 0x10. Each is a signed offset in units of
/// the playback interval; open-loop mode only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOffsets {
    pub overdrive: i8,
    pub sustain_positive: i8,
    pub sustain_negative: i8,
    pub brake: i8,
}

pub struct Drv2605<I2C> {
    i2c: I2C,
    poll: PollPolicy,
}

impl<I2C, E> Drv2605<I2C>
where
    I2C: WriteRead<Error = E> + Write<Error = E>,
{
    /// Construct a driver instance, but don't touch the bus yet.
    pub fn new(i2c: I2C, poll: PollPolicy) -> Self {
        Self { i2c, poll }
    }

    /// Release the underlying bus handle.
    pub fn free(self) -> I2C {
        self.i2c
    }

    fn write_address(&mut self, address: u8, value: u8) -> Result<(), Error<E>> {
        self.i2c
            .write(ADDRESS, &[address, value])
            .map_err(Error::Bus)
    }

    fn write_register(&mut self, register: Register, value: u8) -> Result<(), Error<E>> {
        self.write_address(register as u8, value)
    }

    fn read_register(&mut self, register: Register) -> Result<u8, Error<E>> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(ADDRESS, &[register as u8], &mut buf)
            .map_err(Error::Bus)?;
        Ok(buf[0])
    }

    /// Replace the bits selected by `mask` with the corresponding bits of
    /// `value`, leaving the rest of the register untouched. Returns the
    /// register contents read back after the write.
    fn modify_register(
        &mut self,
        register: Register,
        value: u8,
        mask: u8,
    ) -> Result<u8, Error<E>> {
        let current = self.read_register(register)?;
        self.write_register(register, (current & !mask) | (value & mask))?;
        let updated = self.read_register(register)?;
        #[cfg(feature = "defmt")]
        defmt::trace!(
            "reg {=u8:#x}: {=u8:#x} -> {=u8:#x} (mask {=u8:#x})",
            register as u8,
            current,
            updated,
            mask
        );
        Ok(updated)
    }

    /// Spin until the masked bits of `register` read back as zero,
    /// bounded by the poll policy. Read failures count as an attempt and
    /// are otherwise ignored.
    fn wait_for_clear(&mut self, register: Register, mask: u8) -> Result<(), Error<E>> {
        let mut attempts: u32 = 0;
        loop {
            if let Ok(value) = self.read_register(register) {
                if value & mask == 0 {
                    return Ok(());
                }
            }
            if let PollPolicy::Bounded(limit) = self.poll {
                attempts += 1;
                if attempts >= limit {
                    return Err(Error::Timeout);
                }
            }
        }
    }

    /// Read the status register.
    pub fn get_status(&mut self) -> Result<StatusReg, Error<E>> {
        self.read_register(Register::Status).map(StatusReg)
    }

    /// Read the mode register: reset and standby bits plus the current
    /// operating mode.
    pub fn get_mode(&mut self) -> Result<ModeReg, Error<E>> {
        self.read_register(Register::Mode).map(ModeReg)
    }

    /// Read back the feedback control register, e.g. to inspect the
    /// back-EMF gain that auto calibration settled on.
    pub fn get_feedback_control(&mut self) -> Result<FeedbackControlReg, Error<E>> {
        self.read_register(Register::FeedbackControl)
            .map(FeedbackControlReg)
    }

    /// Whether a GO-triggered operation (playback, diagnostics or
    /// calibration) is still running.
    pub fn is_busy(&mut self) -> Result<bool, Error<E>> {
        Ok(GoReg(self.read_register(Register::Go)?).go())
    }

    /// Performs the equivalent operation of power cycling the device.
    /// Any playback operations are immediately interrupted and all
    /// registers reset to their default values. Waits for the DEV_RESET
    /// bit to self-clear before returning.
    pub fn reset(&mut self) -> Result<(), Error<E>> {
        self.write_register(Register::Mode, mask::MODE_DEV_RESET)?;
        self.wait_for_clear(Register::Mode, mask::MODE_DEV_RESET)
    }

    /// Put the device into software standby, or wake it up.
    pub fn set_standby(&mut self, standby: bool) -> Result<(), Error<E>> {
        let value = if standby { mask::MODE_STANDBY } else { 0 };
        self.modify_register(Register::Mode, value, mask::MODE_STANDBY)?;
        Ok(())
    }

    /// Select the operating mode without disturbing the standby and
    /// reset bits.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), Error<E>> {
        self.modify_register(Register::Mode, mode as u8, mask::MODE_MODE)?;
        Ok(())
    }

    /// Select which ROM library the playback engine uses when the GO bit
    /// is set.
    pub fn set_library(&mut self, library: Library) -> Result<(), Error<E>> {
        self.modify_register(Register::LibrarySelection, library as u8, mask::LIBRARY_SEL)?;
        Ok(())
    }

    /// Select ERM or LRA drive in the feedback control register. Must be
    /// set before running auto calibration.
    pub fn set_motor_type(&mut self, motor_type: MotorType) -> Result<(), Error<E>> {
        let value = (motor_type as u8) << 7;
        self.modify_register(Register::FeedbackControl, value, mask::FEEDBACK_N_ERM_LRA)?;
        Ok(())
    }

    /// Program one sequencer slot with a library effect. `slot` must be
    /// 0 through 7; larger values address the registers following the
    /// sequencer.
    pub fn set_slot(&mut self, slot: u8, effect: Effect) -> Result<(), Error<E>> {
        self.write_address(
            Register::WaveformSequence0 as u8 + slot,
            effect_slot_value(effect as u8),
        )
    }

    /// Program one sequencer slot (0 through 7, unchecked like
    /// [`set_slot`](Self::set_slot)) with a delay instead of an effect.
    /// The delay has 10 ms granularity and 1.27 s range; milliseconds
    /// beyond that wrap.
    pub fn set_delay(&mut self, slot: u8, delay_ms: u16) -> Result<(), Error<E>> {
        self.write_address(
            Register::WaveformSequence0 as u8 + slot,
            delay_slot_value(delay_ms),
        )
    }

    /// Program all eight sequencer slots in a single bus write.
    pub fn set_sequence(&mut self, waveform: &[WaveformReg; 8]) -> Result<(), Error<E>> {
        let buf: [u8; 9] = [
            Register::WaveformSequence0 as u8,
            waveform[0].0,
            waveform[1].0,
            waveform[2].0,
            waveform[3].0,
            waveform[4].0,
            waveform[5].0,
            waveform[6].0,
            waveform[7].0,
        ];
        self.i2c.write(ADDRESS, &buf).map_err(Error::Bus)
    }

    /// Feed the real-time playback entry point, register 0x02. The value
    /// is driven to the load while MODE[2:0] = 5.
    pub fn set_realtime_input(&mut self, value: i8) -> Result<(), Error<E>> {
        self.write_register(Register::RealTimePlaybackInput, value as u8)
    }

    /// Apply the playback timing trims, registers 0x0D through 0x10.
    pub fn set_time_offsets(&mut self, offsets: TimeOffsets) -> Result<(), Error<E>> {
        self.write_register(Register::OverdriveTimeOffset, offsets.overdrive as u8)?;
        self.write_register(
            Register::SustainTimeOffsetPositive,
            offsets.sustain_positive as u8,
        )?;
        self.write_register(
            Register::SustainTimeOffsetNegative,
            offsets.sustain_negative as u8,
        )?;
        self.write_register(Register::BrakeTimeOffset, offsets.brake as u8)
    }

    /// Fire the process selected by MODE[2:0]: sequencer playback,
    /// diagnostics or auto calibration. The bit stays high until the
    /// operation completes.
    pub fn go(&mut self) -> Result<(), Error<E>> {
        self.write_register(Register::Go, mask::GO_GO)
    }

    /// Bring the device from power-up to a usable idle state: reset,
    /// wait for it to come back, leave standby, and select the motor
    /// type and its library.
    ///
    /// Returns the recommended calibration defaults for the motor type;
    /// nothing is submitted yet. Refine them with a derivation and run
    /// [`calibrate`](Self::calibrate).
    pub fn init(&mut self, motor_type: MotorType) -> Result<CalibrationParams, Error<E>> {
        self.reset()?;

        // The device NAKs until it finishes rebooting. Proceed after the
        // first successful read, or after the attempts run out; the next
        // real transaction surfaces any genuine fault.
        for _ in 0..STATUS_POLL_ATTEMPTS {
            if self.read_register(Register::Status).is_ok() {
                break;
            }
        }

        self.set_standby(false)?;
        self.set_motor_type(motor_type)?;
        self.set_library(motor_type.default_library())?;

        Ok(CalibrationParams::recommended(motor_type))
    }

    /// Play a single strong click, fire and forget: slot 0 gets the
    /// effect, slot 1 the stop marker, then GO.
    pub fn click(&mut self) -> Result<(), Error<E>> {
        let buf: [u8; 3] = [
            Register::WaveformSequence0 as u8,
            WaveformReg::new_effect(Effect::StrongClick100).0,
            WaveformReg::new_stop().0,
        ];
        self.i2c.write(ADDRESS, &buf).map_err(Error::Bus)?;
        self.go()
    }

    /// Submit the calibration inputs to the device.
    ///
    /// The rated-voltage and clamp registers are owned wholesale and
    /// written directly; the fields sharing a byte with unrelated
    /// configuration go through mask-scoped modifies so the sibling
    /// fields survive.
    pub fn set_calibration_input(&mut self, params: &CalibrationParams) -> Result<(), Error<E>> {
        self.modify_register(
            Register::FeedbackControl,
            ((params.brake_factor << 4) & mask::FEEDBACK_BRAKE_FACTOR)
                | ((params.loop_gain << 2) & mask::FEEDBACK_LOOP_GAIN),
            mask::FEEDBACK_BRAKE_FACTOR | mask::FEEDBACK_LOOP_GAIN,
        )?;
        self.write_register(Register::RatedVoltage, params.rated_voltage)?;
        self.write_register(Register::OverdriveClampVoltage, params.od_clamp)?;
        self.modify_register(
            Register::Control4,
            ((params.auto_cal_time << 4) & mask::CONTROL4_AUTO_CAL_TIME)
                | ((params.zc_det_time << 6) & mask::CONTROL4_ZC_DET_TIME),
            mask::CONTROL4_AUTO_CAL_TIME | mask::CONTROL4_ZC_DET_TIME,
        )?;
        self.modify_register(
            Register::Control1,
            params.drive_time & mask::CONTROL1_DRIVE_TIME,
            mask::CONTROL1_DRIVE_TIME,
        )?;
        self.modify_register(
            Register::Control2,
            ((params.sample_time << 4) & mask::CONTROL2_SAMPLE_TIME)
                | ((params.blanking_time << 2) & mask::CONTROL2_BLANKING_TIME)
                | (params.idiss_time & mask::CONTROL2_IDISS_TIME),
            mask::CONTROL2_SAMPLE_TIME | mask::CONTROL2_BLANKING_TIME | mask::CONTROL2_IDISS_TIME,
        )?;
        self.modify_register(
            Register::Control5,
            (((params.blanking_time >> 2) << 2) & mask::CONTROL5_BLANKING_TIME)
                | ((params.idiss_time >> 2) & mask::CONTROL5_IDISS_TIME),
            mask::CONTROL5_BLANKING_TIME | mask::CONTROL5_IDISS_TIME,
        )?;
        Ok(())
    }

    /// Run the auto-calibration routine with the given inputs.
    ///
    /// Forces auto-calibration mode, submits the inputs, fires GO and
    /// waits for it to self-clear per the poll policy. Returns whether
    /// the DIAG_RESULT status bit was set afterwards; `false` means the
    /// routine did not report a result.
    pub fn calibrate(&mut self, params: &CalibrationParams) -> Result<bool, Error<E>> {
        self.set_mode(Mode::AutoCalibration)?;
        self.set_calibration_input(params)?;
        self.go()?;
        self.wait_for_clear(Register::Go, mask::GO_GO)?;

        let status = self.read_register(Register::Status)?;
        Ok(status & mask::STATUS_DIAG_RESULT != 0)
    }
}

/// Sequencer slot encoding of an effect identifier: wait bit clear,
/// identifier truncated to the 7-bit field.
fn effect_slot_value(effect_id: u8) -> u8 {
    effect_id & 0x7f
}

/// Sequencer slot encoding of a delay: wait bit set, 10 ms units in the
/// 7-bit field. The unit count wraps above 1270 ms.
fn delay_slot_value(delay_ms: u16) -> u8 {
    0x80 | (delay_ms / 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effect_identifiers_truncate_to_seven_bits() {
        assert_eq!(effect_slot_value(0), 0);
        assert_eq!(effect_slot_value(123), 123);
        assert_eq!(effect_slot_value(200), 72);
    }

    #[test]
    fn delays_encode_in_ten_ms_units_with_the_wait_bit() {
        assert_eq!(delay_slot_value(0), 0x80);
        assert_eq!(delay_slot_value(9), 0x80);
        assert_eq!(delay_slot_value(10), 0x81);
        assert_eq!(delay_slot_value(1270), 0xff);
    }

    #[test]
    fn delay_unit_count_wraps_past_the_field_width() {
        // 2550 ms is 255 units; the low byte of the division still fits
        assert_eq!(delay_slot_value(2550), 0xff);
        // 2560 ms is 256 units; the count wraps back to zero
        assert_eq!(delay_slot_value(2560), 0x80);
    }

    #[test]
    fn waveform_slot_constructors_match_the_raw_encodings() {
        assert_eq!(WaveformReg::new_stop().0, 0x00);
        assert_eq!(
            WaveformReg::new_effect(Effect::StrongClick100).0,
            effect_slot_value(Effect::StrongClick100 as u8)
        );
        assert_eq!(WaveformReg::new_wait_time(50).0, delay_slot_value(500));
    }
}
