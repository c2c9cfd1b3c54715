//! Register map for the drv2605.
//!
//! Addresses come from the `Register` enum, write masks for the
//! multiplexed registers live in [`mask`], and the registers whose
//! contents are worth decoding get a `bitfield` wrapper.

use bitfield::bitfield;

/// Byte addresses of every documented register, 0x00 through 0x22.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    Status = 0x00,
    Mode = 0x01,
    /// Entry point for real-time playback (RTP) data. The playback engine
    /// drives the RTP_INPUT[7:0] value to the load when MODE[2:0] = 5.
    /// The value can be updated in real time by the host controller to
    /// create haptic waveforms.
    RealTimePlaybackInput = 0x02,
    LibrarySelection = 0x03,
    WaveformSequence0 = 0x04,
    WaveformSequence1 = 0x05,
    WaveformSequence2 = 0x06,
    WaveformSequence3 = 0x07,
    WaveformSequence4 = 0x08,
    WaveformSequence5 = 0x09,
    WaveformSequence6 = 0x0a,
    WaveformSequence7 = 0x0b,
    Go = 0x0c,
    OverdriveTimeOffset = 0x0d,
    SustainTimeOffsetPositive = 0x0e,
    SustainTimeOffsetNegative = 0x0f,
    BrakeTimeOffset = 0x10,
    AudioToVibeControl = 0x11,
    AudioToVibeMinimumInputLevel = 0x12,
    AudioToVibeMaximumInputLevel = 0x13,
    AudioToVibeMinimumOutputDrive = 0x14,
    AudioToVibeMaximumOutputDrive = 0x15,
    /// Reference voltage for full-scale output during closed-loop
    /// operation. The auto-calibration routine uses this register as an
    /// input, so it must hold the rated voltage value of the motor before
    /// calibration is performed.
    RatedVoltage = 0x16,
    /// Clamp bounding the automatic overdrive voltage during closed-loop
    /// operation; doubles as the full-scale reference for open loop.
    OverdriveClampVoltage = 0x17,
    /// Voltage-compensation result after auto calibration.
    /// Compensation coefficient = 1 + A_CAL_COMP[7:0] / 255
    AutoCalibrationCompensationResult = 0x18,
    /// Rated back-EMF result after auto calibration.
    /// Back-EMF (V) = (A_CAL_BEMF[7:0] / 255) x 1.22 V / BEMF_GAIN[1:0]
    AutoCalibrationBackEmfResult = 0x19,
    FeedbackControl = 0x1a,
    Control1 = 0x1b,
    Control2 = 0x1c,
    Control3 = 0x1d,
    Control4 = 0x1e,
    Control5 = 0x1f,
    LraOpenLoopPeriod = 0x20,
    VbatVoltageMonitor = 0x21,
    LraResonancePeriod = 0x22,
}

/// Write masks for the bit-fields that share a register byte. Every
/// mutation of one of these fields must go through a mask-scoped modify
/// so the sibling fields survive.
pub mod mask {
    /// DIAG_RESULT flag in the status register; holds the outcome of the
    /// last diagnostic or auto-calibration run.
    pub const STATUS_DIAG_RESULT: u8 = 0x08;

    /// DEV_RESET bit. Self-clears once the reset completes.
    pub const MODE_DEV_RESET: u8 = 0x80;
    /// STANDBY bit.
    pub const MODE_STANDBY: u8 = 0x40;
    /// MODE[2:0] field.
    pub const MODE_MODE: u8 = 0x07;

    /// LIBRARY_SEL[2:0] field.
    pub const LIBRARY_SEL: u8 = 0x07;

    /// GO bit.
    pub const GO_GO: u8 = 0x01;

    /// N_ERM_LRA motor-type select.
    pub const FEEDBACK_N_ERM_LRA: u8 = 0x80;
    /// FB_BRAKE_FACTOR[2:0] field.
    pub const FEEDBACK_BRAKE_FACTOR: u8 = 0x70;
    /// Write mask applied to LOOP_GAIN values before submission.
    pub const FEEDBACK_LOOP_GAIN: u8 = 0x70;

    /// DRIVE_TIME[4:0] field.
    pub const CONTROL1_DRIVE_TIME: u8 = 0x1f;

    /// SAMPLE_TIME[1:0] field.
    pub const CONTROL2_SAMPLE_TIME: u8 = 0x30;
    /// BLANKING_TIME[1:0] field (low half; the upper bits sit in control5).
    pub const CONTROL2_BLANKING_TIME: u8 = 0x0c;
    /// IDISS_TIME[1:0] field (low half; the upper bits sit in control5).
    pub const CONTROL2_IDISS_TIME: u8 = 0x03;

    /// ZC_DET_TIME[1:0] field.
    pub const CONTROL4_ZC_DET_TIME: u8 = 0xc0;
    /// AUTO_CAL_TIME[1:0] field.
    pub const CONTROL4_AUTO_CAL_TIME: u8 = 0x30;

    /// BLANKING_TIME[3:2] field.
    pub const CONTROL5_BLANKING_TIME: u8 = 0x0c;
    /// IDISS_TIME[3:2] field.
    pub const CONTROL5_IDISS_TIME: u8 = 0x03;
}

/// Operating mode, the MODE[2:0] field of register 0x01.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Waveforms are fired by setting the GO bit in register 0x0C.
    InternalTrigger = 0,
    /// A rising edge on the IN/TRIG pin sets the GO bit. A second rising
    /// edge cancels the waveform if it arrives before GO has cleared.
    ExternalTriggerRisingEdge = 1,
    /// The GO bit follows the state of the external trigger pin.
    ExternalTriggerLevel = 2,
    /// A PWM or analog signal at IN/TRIG is used as the driving source.
    PwmInputAndAnalogInput = 3,
    /// An AC-coupled audio signal at IN/TRIG is converted into vibration.
    AudioToVibe = 4,
    /// The device drives the actuator with the RTP input register.
    RealTimePlayback = 5,
    /// Diagnostic test on the actuator; fired by GO, complete when GO
    /// self-clears, result in the DIAG_RESULT status bit.
    Diagnostics = 6,
    /// Auto calibration for the attached actuator. All required input
    /// parameters must be set before firing GO; calibration is complete
    /// when GO self-clears.
    AutoCalibration = 7,
}

impl From<u8> for Mode {
    fn from(val: u8) -> Mode {
        match val & 0x07 {
            0 => Mode::InternalTrigger,
            1 => Mode::ExternalTriggerRisingEdge,
            2 => Mode::ExternalTriggerLevel,
            3 => Mode::PwmInputAndAnalogInput,
            4 => Mode::AudioToVibe,
            5 => Mode::RealTimePlayback,
            6 => Mode::Diagnostics,
            _ => Mode::AutoCalibration,
        }
    }
}

/// Selection of the library of built-in waveforms. Each library offers
/// the same waveforms tuned for different motor characteristics, so it is
/// important to pick the one matching the attached motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Library {
    /// No library selected
    Empty = 0,
    /// Rated 1.3V, overdrive 3V, rise 40-60ms, brake 20-40ms (ERM)
    A = 1,
    /// Rated 3V, overdrive 3V, rise 40-60ms, brake 5-15ms (ERM)
    B = 2,
    /// Rated 3V, overdrive 3V, rise 60-80ms, brake 10-20ms (ERM)
    C = 3,
    /// Rated 3V, overdrive 3V, rise 100-140ms, brake 15-25ms (ERM)
    D = 4,
    /// Rated 3V, overdrive 3V, rise >140ms, brake >30ms (ERM)
    E = 5,
    /// Closed-loop library for linear resonant actuators
    Lra = 6,
    /// Rated 4.5V, overdrive 5V, rise 35-45ms, brake 10-20ms (ERM)
    F = 7,
}

impl From<u8> for Library {
    fn from(val: u8) -> Library {
        match val & 0x07 {
            0 => Library::Empty,
            1 => Library::A,
            2 => Library::B,
            3 => Library::C,
            4 => Library::D,
            5 => Library::E,
            6 => Library::Lra,
            _ => Library::F,
        }
    }
}

bitfield! {
    pub struct StatusReg(u8);
    impl Debug;
    /// Latching overcurrent detection flag. If the load impedance is below
    /// the threshold the device shuts down and periodically attempts to
    /// restart.
    pub oc_detected, _: 0;
    /// Latching overtemperature detection flag. Clears upon read.
    pub over_temp, _: 1;
    /// Feedback controller status; debug only. Clears upon read.
    pub feedback_controller_timed_out, _: 2;
    /// Result of the last auto-calibration or diagnostic routine. Not
    /// valid until the GO bit self-clears at the end of the routine.
    pub diagnostic_result, _: 3;
    /// Device identifier: 3 = DRV2605, 4 = DRV2604, 6 = DRV2604L,
    /// 7 = DRV2605L.
    pub device_id, _: 7, 5;
}

bitfield! {
    pub struct ModeReg(u8);
    impl Debug;
    /// Device reset; equivalent to power cycling. Self-clears after the
    /// reset operation is complete.
    pub dev_reset, set_dev_reset: 7;
    /// Software standby: 0 device ready, 1 standby.
    pub standby, set_standby: 6;
    /// The operating `Mode`.
    pub into Mode, mode, set_mode: 2, 0;
}

bitfield! {
    pub struct GoReg(u8);
    impl Debug;
    /// Fires the process selected by MODE[2:0]: sequencer playback,
    /// diagnostics, or auto calibration. Remains high until the operation
    /// completes; clearing it during playback cancels the sequence.
    pub go, set_go: 0;
}

bitfield! {
    pub struct WaveformReg(u8);
    impl Debug;
    /// When set, WAV_FRM_SEQ[6:0] is a wait time of 10 ms units during
    /// which the playback engine idles instead of a waveform identifier.
    wait, set_wait: 7;
    /// Waveform identifier (an index into the selected ROM library), or
    /// the delay count when the wait bit is set. Playback starts at slot 0
    /// when GO is asserted and stops at an identifier of zero or after all
    /// eight slots.
    waveform_seq, set_waveform_seq: 6, 0;
}

impl WaveformReg {
    /// Stops playing the sequence of effects.
    pub fn new_stop() -> Self {
        let mut w = WaveformReg(0);
        w.set_wait(false);
        w.set_waveform_seq(Effect::Stop as u8);
        w
    }

    /// Play the given library effect.
    pub fn new_effect(effect: Effect) -> Self {
        let mut w = WaveformReg(0);
        w.set_wait(false);
        w.set_waveform_seq(effect as u8);
        w
    }

    /// Idle for the given number of 10 ms intervals before moving on to
    /// the next slot.
    pub fn new_wait_time(tens_of_ms: u8) -> Self {
        let mut w = WaveformReg(0);
        w.set_wait(true);
        w.set_waveform_seq(tens_of_ms);
        w
    }
}

bitfield! {
    pub struct FeedbackControlReg(u8);
    impl Debug;
    /// Motor technology select: 0 ERM, 1 LRA. Must be set prior to
    /// running auto calibration.
    pub n_erm_lra, set_n_erm_lra: 7;
    /// Feedback gain ratio between braking gain and driving gain.
    /// 0: 1x .. 6: 16x, 7: braking disabled.
    pub fb_brake_factor, set_fb_brake_factor: 6, 4;
    /// Loop gain for the feedback control: 0 low .. 3 very high.
    pub loop_gain, set_loop_gain: 3, 2;
    /// Analog gain of the back-EMF amplifier; auto calibration populates
    /// this with the most appropriate value for the actuator.
    pub bemf_gain, set_bemf_gain: 1, 0;
}

/// The waveforms of the ROM library, selectable by a sequencer slot.
///
/// Identifiers are vendor library indices 1..=123; `Stop` is the sentinel
/// that terminates a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Effect {
    /// No effect; stops sequence playback
    Stop = 0,
    /// Strong Click - 100%
    StrongClick100 = 1,
    /// Strong Click - 60%
    StrongClick60 = 2,
    /// Strong Click - 30%
    StrongClick30 = 3,
    /// Sharp Click - 100%
    SharpClick100 = 4,
    /// Sharp Click - 60%
    SharpClick60 = 5,
    /// Sharp Click - 30%
    SharpClick30 = 6,
    /// Soft Bump - 100%
    SoftBump100 = 7,
    /// Soft Bump - 60%
    SoftBump60 = 8,
    /// Soft Bump - 30%
    SoftBump30 = 9,
    /// Double Click - 100%
    DoubleClick100 = 10,
    /// Double Click - 60%
    DoubleClick60 = 11,
    /// Triple Click - 100%
    TripleClick100 = 12,
    /// Soft Fuzz - 60%
    SoftFuzz60 = 13,
    /// Strong Buzz - 100%
    StrongBuzz100 = 14,
    /// 750 ms Alert 100%
    Alert750ms = 15,
    /// 1000 ms Alert 100%
    Alert1000ms = 16,
    /// Strong Click 1 - 100%
    StrongClickOne100 = 17,
    /// Strong Click 2 - 80%
    StrongClickTwo80 = 18,
    /// Strong Click 3 - 60%
    StrongClickThree60 = 19,
    /// Strong Click 4 - 30%
    StrongClickFour30 = 20,
    /// Medium Click 1 - 100%
    MediumClickOne100 = 21,
    /// Medium Click 2 - 80%
    MediumClickTwo80 = 22,
    /// Medium Click 3 - 60%
    MediumClickThree60 = 23,
    /// Sharp Tick 1 - 100%
    SharpTickOne100 = 24,
    /// Sharp Tick 2 - 80%
    SharpTickTwo80 = 25,
    /// Sharp Tick 3 - 60%
    SharpTickThree60 = 26,
    /// Short Double Click Strong 1 - 100%
    ShortDoubleClickStrongOne100 = 27,
    /// Short Double Click Strong 2 - 80%
    ShortDoubleClickStrongTwo80 = 28,
    /// Short Double Click Strong 3 - 60%
    ShortDoubleClickStrongThree60 = 29,
    /// Short Double Click Strong 4 - 30%
    ShortDoubleClickStrongFour30 = 30,
    /// Short Double Click Medium 1 - 100%
    ShortDoubleClickMediumOne100 = 31,
    /// Short Double Click Medium 2 - 80%
    ShortDoubleClickMediumTwo80 = 32,
    /// Short Double Click Medium 3 - 60%
    ShortDoubleClickMediumThree60 = 33,
    /// Short Double Sharp Tick 1 - 100%
    ShortDoubleSharpTickOne100 = 34,
    /// Short Double Sharp Tick 2 - 80%
    ShortDoubleSharpTickTwo80 = 35,
    /// Short Double Sharp Tick 3 - 60%
    ShortDoubleSharpTickThree60 = 36,
    /// Long Double Sharp Click Strong 1 - 100%
    LongDoubleSharpClickStrongOne100 = 37,
    /// Long Double Sharp Click Strong 2 - 80%
    LongDoubleSharpClickStrongTwo80 = 38,
    /// Long Double Sharp Click Strong 3 - 60%
    LongDoubleSharpClickStrongThree60 = 39,
    /// Long Double Sharp Click Strong 4 - 30%
    LongDoubleSharpClickStrongFour30 = 40,
    /// Long Double Sharp Click Medium 1 - 100%
    LongDoubleSharpClickMediumOne100 = 41,
    /// Long Double Sharp Click Medium 2 - 80%
    LongDoubleSharpClickMediumTwo80 = 42,
    /// Long Double Sharp Click Medium 3 - 60%
    LongDoubleSharpClickMediumThree60 = 43,
    /// Long Double Sharp Tick 1 - 100%
    LongDoubleSharpTickOne100 = 44,
    /// Long Double Sharp Tick 2 - 80%
    LongDoubleSharpTickTwo80 = 45,
    /// Long Double Sharp Tick 3 - 60%
    LongDoubleSharpTickThree60 = 46,
    /// Buzz 1 - 100%
    BuzzOne100 = 47,
    /// Buzz 2 - 80%
    BuzzTwo80 = 48,
    /// Buzz 3 - 60%
    BuzzThree60 = 49,
    /// Buzz 4 - 40%
    BuzzFour40 = 50,
    /// Buzz 5 - 20%
    BuzzFive20 = 51,
    /// Pulsing Strong 1 - 100%
    PulsingStrongOne100 = 52,
    /// Pulsing Strong 2 - 60%
    PulsingStrongTwo60 = 53,
    /// Pulsing Medium 1 - 100%
    PulsingMediumOne100 = 54,
    /// Pulsing Medium 2 - 60%
    PulsingMediumTwo60 = 55,
    /// Pulsing Sharp 1 - 100%
    PulsingSharpOne100 = 56,
    /// Pulsing Sharp 2 - 60%
    PulsingSharpTwo60 = 57,
    /// Transition Click 1 - 100%
    TransitionClickOne100 = 58,
    /// Transition Click 2 - 80%
    TransitionClickTwo80 = 59,
    /// Transition Click 3 - 60%
    TransitionClickThree60 = 60,
    /// Transition Click 4 - 40%
    TransitionClickFour40 = 61,
    /// Transition Click 5 - 20%
    TransitionClickFive20 = 62,
    /// Transition Click 6 - 10%
    TransitionClickSix10 = 63,
    /// Transition Hum 1 - 100%
    TransitionHumOne100 = 64,
    /// Transition Hum 2 - 80%
    TransitionHumTwo80 = 65,
    /// Transition Hum 3 - 60%
    TransitionHumThree60 = 66,
    /// Transition Hum 4 - 40%
    TransitionHumFour40 = 67,
    /// Transition Hum 5 - 20%
    TransitionHumFive20 = 68,
    /// Transition Hum 6 - 10%
    TransitionHumSix10 = 69,
    /// Transition Ramp Down Long Smooth 1 - 100 to 0%
    TransitionRampDownLongSmoothOne100to0 = 70,
    /// Transition Ramp Down Long Smooth 2 - 100 to 0%
    TransitionRampDownLongSmoothTwo100to0 = 71,
    /// Transition Ramp Down Medium Smooth 1 - 100 to 0%
    TransitionRampDownMediumSmoothOne100to0 = 72,
    /// Transition Ramp Down Medium Smooth 2 - 100 to 0%
    TransitionRampDownMediumSmoothTwo100to0 = 73,
    /// Transition Ramp Down Short Smooth 1 - 100 to 0%
    TransitionRampDownShortSmoothOne100to0 = 74,
    /// Transition Ramp Down Short Smooth 2 - 100 to 0%
    TransitionRampDownShortSmoothTwo100to0 = 75,
    /// Transition Ramp Down Long Sharp 1 - 100 to 0%
    TransitionRampDownLongSharpOne100to0 = 76,
    /// Transition Ramp Down Long Sharp 2 - 100 to 0%
    TransitionRampDownLongSharpTwo100to0 = 77,
    /// Transition Ramp Down Medium Sharp 1 - 100 to 0%
    TransitionRampDownMediumSharpOne100to0 = 78,
    /// Transition Ramp Down Medium Sharp 2 - 100 to 0%
    TransitionRampDownMediumSharpTwo100to0 = 79,
    /// Transition Ramp Down Short Sharp 1 - 100 to 0%
    TransitionRampDownShortSharpOne100to0 = 80,
    /// Transition Ramp Down Short Sharp 2 - 100 to 0%
    TransitionRampDownShortSharpTwo100to0 = 81,
    /// Transition Ramp Up Long Smooth 1 - 0 to 100%
    TransitionRampUpLongSmoothOne0to100 = 82,
    /// Transition Ramp Up Long Smooth 2 - 0 to 100%
    TransitionRampUpLongSmoothTwo0to100 = 83,
    /// Transition Ramp Up Medium Smooth 1 - 0 to 100%
    TransitionRampUpMediumSmoothOne0to100 = 84,
    /// Transition Ramp Up Medium Smooth 2 - 0 to 100%
    TransitionRampUpMediumSmoothTwo0to100 = 85,
    /// Transition Ramp Up Short Smooth 1 - 0 to 100%
    TransitionRampUpShortSmoothOne0to100 = 86,
    /// Transition Ramp Up Short Smooth 2 - 0 to 100%
    TransitionRampUpShortSmoothTwo0to100 = 87,
    /// Transition Ramp Up Long Sharp 1 - 0 to 100%
    TransitionRampUpLongSharpOne0to100 = 88,
    /// Transition Ramp Up Long Sharp 2 - 0 to 100%
    TransitionRampUpLongSharpTwo0to100 = 89,
    /// Transition Ramp Up Medium Sharp 1 - 0 to 100%
    TransitionRampUpMediumSharpOne0to100 = 90,
    /// Transition Ramp Up Medium Sharp 2 - 0 to 100%
    TransitionRampUpMediumSharpTwo0to100 = 91,
    /// Transition Ramp Up Short Sharp 1 - 0 to 100%
    TransitionRampUpShortSharpOne0to100 = 92,
    /// Transition Ramp Up Short Sharp 2 - 0 to 100%
    TransitionRampUpShortSharpTwo0to100 = 93,
    /// Transition Ramp Down Long Smooth 1 - 50 to 0%
    TransitionRampDownLongSmoothOne50to0 = 94,
    /// Transition Ramp Down Long Smooth 2 - 50 to 0%
    TransitionRampDownLongSmoothTwo50to0 = 95,
    /// Transition Ramp Down Medium Smooth 1 - 50 to 0%
    TransitionRampDownMediumSmoothOne50to0 = 96,
    /// Transition Ramp Down Medium Smooth 2 - 50 to 0%
    TransitionRampDownMediumSmoothTwo50to0 = 97,
    /// Transition Ramp Down Short Smooth 1 - 50 to 0%
    TransitionRampDownShortSmoothOne50to0 = 98,
    /// Transition Ramp Down Short Smooth 2 - 50 to 0%
    TransitionRampDownShortSmoothTwo50to0 = 99,
    /// Transition Ramp Down Long Sharp 1 - 50 to 0%
    TransitionRampDownLongSharpOne50to0 = 100,
    /// Transition Ramp Down Long Sharp 2 - 50 to 0%
    TransitionRampDownLongSharpTwo50to0 = 101,
    /// Transition Ramp Down Medium Sharp 1 - 50 to 0%
    TransitionRampDownMediumSharpOne50to0 = 102,
    /// Transition Ramp Down Medium Sharp 2 - 50 to 0%
    TransitionRampDownMediumSharpTwo50to0 = 103,
    /// Transition Ramp Down Short Sharp 1 - 50 to 0%
    TransitionRampDownShortSharpOne50to0 = 104,
    /// Transition Ramp Down Short Sharp 2 - 50 to 0%
    TransitionRampDownShortSharpTwo50to0 = 105,
    /// Transition Ramp Up Long Smooth 1 - 0 to 50%
    TransitionRampUpLongSmoothOne0to50 = 106,
    /// Transition Ramp Up Long Smooth 2 - 0 to 50%
    TransitionRampUpLongSmoothTwo0to50 = 107,
    /// Transition Ramp Up Medium Smooth 1 - 0 to 50%
    TransitionRampUpMediumSmoothOne0to50 = 108,
    /// Transition Ramp Up Medium Smooth 2 - 0 to 50%
    TransitionRampUpMediumSmoothTwo0to50 = 109,
    /// Transition Ramp Up Short Smooth 1 - 0 to 50%
    TransitionRampUpShortSmoothOne0to50 = 110,
    /// Transition Ramp Up Short Smooth 2 - 0 to 50%
    TransitionRampUpShortSmoothTwo0to50 = 111,
    /// Transition Ramp Up Long Sharp 1 - 0 to 50%
    TransitionRampUpLongSharpOne0to50 = 112,
    /// Transition Ramp Up Long Sharp 2 - 0 to 50%
    TransitionRampUpLongSharpTwo0to50 = 113,
    /// Transition Ramp Up Medium Sharp 1 - 0 to 50%
    TransitionRampUpMediumSharpOne0to50 = 114,
    /// Transition Ramp Up Medium Sharp 2 - 0 to 50%
    TransitionRampUpMediumSharpTwo0to50 = 115,
    /// Transition Ramp Up Short Sharp 1 - 0 to 50%
    TransitionRampUpShortSharpOne0to50 = 116,
    /// Transition Ramp Up Short Sharp 2 - 0 to 50%
    TransitionRampUpShortSharpTwo0to50 = 117,
    /// Long Buzz For Programmatic Stopping - 100%
    LongBuzzForProgrammaticStopping100 = 118,
    /// Smooth Hum 1 (No kick or brake pulse) - 50%
    SmoothHumOne50 = 119,
    /// Smooth Hum 2 (No kick or brake pulse) - 40%
    SmoothHumTwo40 = 120,
    /// Smooth Hum 3 (No kick or brake pulse) - 30%
    SmoothHumThree30 = 121,
    /// Smooth Hum 4 (No kick or brake pulse) - 20%
    SmoothHumFour20 = 122,
    /// Smooth Hum 5 (No kick or brake pulse) - 10%
    SmoothHumFive10 = 123,
}
