//! Annotated dump of the whole register file for bring-up debugging.

use core::fmt::Write as FmtWrite;

use embedded_hal::blocking::i2c::{Write, WriteRead};

use crate::registers::Register;
use crate::{Drv2605, Error};

struct Field {
    name: &'static str,
    msb: u8,
    lsb: u8,
}

struct RegisterInfo {
    register: Register,
    name: &'static str,
    fields: &'static [Field],
}

const fn field(name: &'static str, msb: u8, lsb: u8) -> Field {
    Field { name, msb, lsb }
}

const fn whole(name: &'static str) -> [Field; 1] {
    [field(name, 7, 0)]
}

static STATUS_FIELDS: [Field; 6] = [
    field("DEVICE_ID", 7, 5),
    field("Reserved", 4, 4),
    field("DIAG_RESULT", 3, 3),
    field("FB_STS", 2, 2),
    field("OVER_TEMP", 1, 1),
    field("OC_DETECT", 0, 0),
];
static MODE_FIELDS: [Field; 4] = [
    field("DEV_RESET", 7, 7),
    field("STANDBY", 6, 6),
    field("Reserved", 5, 3),
    field("MODE", 2, 0),
];
static RTP_FIELDS: [Field; 1] = whole("RTP_INPUT");
static LIBRARY_FIELDS: [Field; 4] = [
    field("Reserved", 7, 5),
    field("HI_Z", 4, 4),
    field("Reserved", 3, 3),
    field("LIBRARY_SEL", 2, 0),
];
static WAVEFORM_FIELDS: [Field; 2] = [field("WAIT", 7, 7), field("WAV_FRM_SEQ", 6, 0)];
static GO_FIELDS: [Field; 2] = [field("Reserved", 7, 1), field("GO", 0, 0)];
static ODT_FIELDS: [Field; 1] = whole("ODT");
static SPT_FIELDS: [Field; 1] = whole("SPT");
static SNT_FIELDS: [Field; 1] = whole("SNT");
static BRT_FIELDS: [Field; 1] = whole("BRT");
static ATH_CONTROL_FIELDS: [Field; 3] = [
    field("Reserved", 7, 4),
    field("ATH_PEAK_TIME", 3, 2),
    field("ATH_FILTER", 1, 0),
];
static ATH_MIN_INPUT_FIELDS: [Field; 1] = whole("ATH_MIN_INPUT");
static ATH_MAX_INPUT_FIELDS: [Field; 1] = whole("ATH_MAX_INPUT");
static ATH_MIN_DRIVE_FIELDS: [Field; 1] = whole("ATH_MIN_DRIVE");
static ATH_MAX_DRIVE_FIELDS: [Field; 1] = whole("ATH_MAX_DRIVE");
static RATED_VOLTAGE_FIELDS: [Field; 1] = whole("RATED_VOLTAGE");
static OD_CLAMP_FIELDS: [Field; 1] = whole("OD_CLAMP");
static A_CAL_COMP_FIELDS: [Field; 1] = whole("A_CAL_COMP");
static A_CAL_BEMF_FIELDS: [Field; 1] = whole("A_CAL_BEMF");
static FEEDBACK_FIELDS: [Field; 4] = [
    field("N_ERM_LRA", 7, 7),
    field("FB_BRAKE_FACTOR", 6, 4),
    field("LOOP_GAIN", 3, 2),
    field("BEMF_GAIN", 1, 0),
];
static CONTROL1_FIELDS: [Field; 4] = [
    field("STARTUP_BOOST", 7, 7),
    field("Reserved", 6, 6),
    field("AC_COUPLE", 5, 5),
    field("DRIVE_TIME", 4, 0),
];
static CONTROL2_FIELDS: [Field; 5] = [
    field("BIDIR_INPUT", 7, 7),
    field("BRAKE_STABILIZER", 6, 6),
    field("SAMPLE_TIME", 5, 4),
    field("BLANKING_TIME", 3, 2),
    field("IDISS_TIME", 1, 0),
];
static CONTROL3_FIELDS: [Field; 7] = [
    field("NG_THRESH", 7, 6),
    field("ERM_OPEN_LOOP", 5, 5),
    field("SUPPLY_COMP_DIS", 4, 4),
    field("DATA_FORMAT_RTP", 3, 3),
    field("LRA_DRIVE_MODE", 2, 2),
    field("N_PWM_ANALOG", 1, 1),
    field("LRA_OPEN_LOOP", 0, 0),
];
static CONTROL4_FIELDS: [Field; 5] = [
    field("ZC_DET_TIME", 7, 6),
    field("AUTO_CAL_TIME", 5, 4),
    field("Reserved", 3, 3),
    field("OTP_STATUS", 2, 2),
    field("OTP_PROGRAM", 1, 1),
];
static CONTROL5_FIELDS: [Field; 5] = [
    field("AUTO_OL_CNT", 7, 6),
    field("LRA_AUTO_OPEN_LOOP", 5, 5),
    field("PLAYBACK_INTERVAL", 4, 4),
    field("BLANKING_TIME", 3, 2),
    field("IDISS_TIME", 1, 0),
];
static OL_LRA_PERIOD_FIELDS: [Field; 2] = [field("Reserved", 7, 7), field("OL_LRA_PERIOD", 6, 0)];
static VBAT_FIELDS: [Field; 1] = whole("VBAT");
static LRA_PERIOD_FIELDS: [Field; 1] = whole("LRA_PERIOD");

static REGISTER_TABLE: [RegisterInfo; 35] = [
    RegisterInfo { register: Register::Status, name: "Status", fields: &STATUS_FIELDS },
    RegisterInfo { register: Register::Mode, name: "Mode", fields: &MODE_FIELDS },
    RegisterInfo {
        register: Register::RealTimePlaybackInput,
        name: "RealTimePlaybackInput",
        fields: &RTP_FIELDS,
    },
    RegisterInfo {
        register: Register::LibrarySelection,
        name: "LibrarySelection",
        fields: &LIBRARY_FIELDS,
    },
    RegisterInfo {
        register: Register::WaveformSequence0,
        name: "WaveformSequence0",
        fields: &WAVEFORM_FIELDS,
    },
    RegisterInfo {
        register: Register::WaveformSequence1,
        name: "WaveformSequence1",
        fields: &WAVEFORM_FIELDS,
    },
    RegisterInfo {
        register: Register::WaveformSequence2,
        name: "WaveformSequence2",
        fields: &WAVEFORM_FIELDS,
    },
    RegisterInfo {
        register: Register::WaveformSequence3,
        name: "WaveformSequence3",
        fields: &WAVEFORM_FIELDS,
    },
    RegisterInfo {
        register: Register::WaveformSequence4,
        name: "WaveformSequence4",
        fields: &WAVEFORM_FIELDS,
    },
    RegisterInfo {
        register: Register::WaveformSequence5,
        name: "WaveformSequence5",
        fields: &WAVEFORM_FIELDS,
    },
    RegisterInfo {
        register: Register::WaveformSequence6,
        name: "WaveformSequence6",
        fields: &WAVEFORM_FIELDS,
    },
    RegisterInfo {
        register: Register::WaveformSequence7,
        name: "WaveformSequence7",
        fields: &WAVEFORM_FIELDS,
    },
    RegisterInfo { register: Register::Go, name: "Go", fields: &GO_FIELDS },
    RegisterInfo {
        register: Register::OverdriveTimeOffset,
        name: "OverdriveTimeOffset",
        fields: &ODT_FIELDS,
    },
    RegisterInfo {
        register: Register::SustainTimeOffsetPositive,
        name: "SustainTimeOffsetPositive",
        fields: &SPT_FIELDS,
    },
    RegisterInfo {
        register: Register::SustainTimeOffsetNegative,
        name: "SustainTimeOffsetNegative",
        fields: &SNT_FIELDS,
    },
    RegisterInfo {
        register: Register::BrakeTimeOffset,
        name: "BrakeTimeOffset",
        fields: &BRT_FIELDS,
    },
    RegisterInfo {
        register: Register::AudioToVibeControl,
        name: "AudioToVibeControl",
        fields: &ATH_CONTROL_FIELDS,
    },
    RegisterInfo {
        register: Register::AudioToVibeMinimumInputLevel,
        name: "AudioToVibeMinimumInputLevel",
        fields: &ATH_MIN_INPUT_FIELDS,
    },
    RegisterInfo {
        register: Register::AudioToVibeMaximumInputLevel,
        name: "AudioToVibeMaximumInputLevel",
        fields: &ATH_MAX_INPUT_FIELDS,
    },
    RegisterInfo {
        register: Register::AudioToVibeMinimumOutputDrive,
        name: "AudioToVibeMinimumOutputDrive",
        fields: &ATH_MIN_DRIVE_FIELDS,
    },
    RegisterInfo {
        register: Register::AudioToVibeMaximumOutputDrive,
        name: "AudioToVibeMaximumOutputDrive",
        fields: &ATH_MAX_DRIVE_FIELDS,
    },
    RegisterInfo {
        register: Register::RatedVoltage,
        name: "RatedVoltage",
        fields: &RATED_VOLTAGE_FIELDS,
    },
    RegisterInfo {
        register: Register::OverdriveClampVoltage,
        name: "OverdriveClampVoltage",
        fields: &OD_CLAMP_FIELDS,
    },
    RegisterInfo {
        register: Register::AutoCalibrationCompensationResult,
        name: "AutoCalibrationCompensationResult",
        fields: &A_CAL_COMP_FIELDS,
    },
    RegisterInfo {
        register: Register::AutoCalibrationBackEmfResult,
        name: "AutoCalibrationBackEmfResult",
        fields: &A_CAL_BEMF_FIELDS,
    },
    RegisterInfo {
        register: Register::FeedbackControl,
        name: "FeedbackControl",
        fields: &FEEDBACK_FIELDS,
    },
    RegisterInfo { register: Register::Control1, name: "Control1", fields: &CONTROL1_FIELDS },
    RegisterInfo { register: Register::Control2, name: "Control2", fields: &CONTROL2_FIELDS },
    RegisterInfo { register: Register::Control3, name: "Control3", fields: &CONTROL3_FIELDS },
    RegisterInfo { register: Register::Control4, name: "Control4", fields: &CONTROL4_FIELDS },
    RegisterInfo { register: Register::Control5, name: "Control5", fields: &CONTROL5_FIELDS },
    RegisterInfo {
        register: Register::LraOpenLoopPeriod,
        name: "LraOpenLoopPeriod",
        fields: &OL_LRA_PERIOD_FIELDS,
    },
    RegisterInfo {
        register: Register::VbatVoltageMonitor,
        name: "VbatVoltageMonitor",
        fields: &VBAT_FIELDS,
    },
    RegisterInfo {
        register: Register::LraResonancePeriod,
        name: "LraResonancePeriod",
        fields: &LRA_PERIOD_FIELDS,
    },
];

impl<I2C, E> Drv2605<I2C>
where
    I2C: WriteRead<Error = E> + Write<Error = E>,
{
    /// Read every documented register and render an annotated listing
    /// into `out`: one header line per register, then one line per
    /// bit-field, most significant first.
    ///
    /// ```text
    /// 0x01 Mode = 0x40
    ///   STANDBY[6:6] = 0x1
    /// ```
    ///
    /// Zero-valued fields and reserved spans are elided from the field
    /// lines so a fresh device dumps compactly.
    pub fn dump_registers<W: FmtWrite>(&mut self, out: &mut W) -> Result<(), Error<E>> {
        for info in &REGISTER_TABLE {
            let value = self.read_register(info.register)?;
            writeln!(out, "{:#04x} {} = {:#04x}", info.register as u8, info.name, value)
                .map_err(|_| Error::Fmt)?;
            for f in info.fields {
                let width = f.msb - f.lsb + 1;
                let field_mask = if width == 8 { 0xff } else { (1u8 << width) - 1 };
                let field_value = (value >> f.lsb) & field_mask;
                if field_value == 0 || f.name == "Reserved" {
                    continue;
                }
                writeln!(out, "  {}[{}:{}] = {:#x}", f.name, f.msb, f.lsb, field_value)
                    .map_err(|_| Error::Fmt)?;
            }
        }
        Ok(())
    }
}
