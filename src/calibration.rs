//! Closed-form derivation of the auto-calibration inputs.
//!
//! The chip tunes itself to the attached actuator, but it needs the
//! rated-voltage, overdrive-clamp and drive-time registers seeded from
//! the motor datasheet first. The formulas here convert the physical
//! characteristics into register units; submitting them and running the
//! calibration cycle is handled by the driver.

use crate::registers::Library;

/// The two motor technologies the chip can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorType {
    /// Eccentric rotating mass, open-loop drive.
    Erm = 0,
    /// Linear resonant actuator, closed-loop drive.
    Lra = 1,
}

impl MotorType {
    /// The ROM library tuned for this motor technology.
    pub fn default_library(self) -> Library {
        match self {
            MotorType::Erm => Library::A,
            MotorType::Lra => Library::Lra,
        }
    }
}

/// Everything the auto-calibration cycle consumes, in register units.
///
/// Obtained from [`Drv2605::init`](crate::Drv2605::init) with the
/// vendor-recommended defaults, then refined with one of the two
/// derivations before being submitted. The placeholder `drive_time`,
/// `rated_voltage` and `od_clamp` defaults are meant to be overwritten
/// by a derivation; submitting them as-is drives a generic 2V/220Hz
/// class actuator at best.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationParams {
    pub motor_type: MotorType,
    /// FB_BRAKE_FACTOR[2:0]: braking-to-driving feedback gain ratio.
    pub brake_factor: u8,
    /// LOOP_GAIN[1:0]: feedback loop gain, 0 low to 3 very high.
    pub loop_gain: u8,
    /// RATED_VOLTAGE[7:0]: closed-loop full-scale reference.
    pub rated_voltage: u8,
    /// OD_CLAMP[7:0]: bound on the automatic overdrive voltage.
    pub od_clamp: u8,
    /// AUTO_CAL_TIME[1:0]: settling time allowed for the routine.
    pub auto_cal_time: u8,
    /// DRIVE_TIME[4:0]: LRA half-period guess, or ERM back-EMF sample
    /// rate.
    pub drive_time: u8,
    /// SAMPLE_TIME[1:0]: LRA auto-resonance sampling time.
    pub sample_time: u8,
    /// BLANKING_TIME[3:0]: settling window before back-EMF conversion.
    pub blanking_time: u8,
    /// IDISS_TIME[3:0]: current dissipation window between PWM cycles.
    pub idiss_time: u8,
    /// ZC_DET_TIME[1:0]: minimum zero-crossing detection window.
    pub zc_det_time: u8,
}

impl CalibrationParams {
    /// The datasheet-recommended starting point for the given motor
    /// technology.
    pub fn recommended(motor_type: MotorType) -> Self {
        Self {
            motor_type,
            brake_factor: 2,
            loop_gain: 2,
            auto_cal_time: 3,
            sample_time: 3,
            blanking_time: 1,
            idiss_time: 1,
            zc_det_time: 0,
            drive_time: 0x13,
            rated_voltage: 0x3e,
            od_clamp: 0x8c,
        }
    }

    /// Derive the LRA register values from the actuator's rated voltage
    /// (V), maximum/overdrive voltage (V) and resonant frequency (Hz).
    ///
    /// Pure; returns an updated copy with `rated_voltage`, `od_clamp` and
    /// `drive_time` replaced. A resonant frequency high enough to push
    /// the rated-voltage radicand negative is clamped to zero, so the
    /// result fails closed to a rated voltage of 0 instead of going NaN.
    pub fn with_lra_derivation(self, v_rated: f64, v_max: f64, f_res: f64) -> Self {
        let t = 0.000_15 + 0.000_05 * f64::from(self.sample_time);
        let radicand = (1.0 - (4.0 * t + 300e-6) * f_res).max(0.0);
        Self {
            od_clamp: round_to_register(v_max / 21.22e-3),
            rated_voltage: round_to_register(libm::sqrt(radicand) * v_rated / 20.58e-3),
            drive_time: round_to_register((0.5 / f_res - 0.001) / 0.0002),
            ..self
        }
    }

    /// Derive the ERM register values from the actuator's rated voltage
    /// (V), maximum voltage (V) and desired drive time (seconds).
    ///
    /// Pure; returns an updated copy with `rated_voltage`, `od_clamp` and
    /// `drive_time` replaced. Drive times at or below 1.3 ms leave the
    /// overdrive-clamp denominator non-positive; the saturating register
    /// conversion then pins the clamp at 0 or 255 rather than wrapping.
    pub fn with_erm_derivation(self, v_rated: f64, v_max: f64, drive_time: f64) -> Self {
        let t_drive = (drive_time - 1e-3) / 0.2e-3;
        let t_blank = bemf_window(self.blanking_time);
        let t_idiss = bemf_window(self.idiss_time);
        Self {
            drive_time: round_to_register(t_drive),
            od_clamp: round_to_register(
                v_max * (t_drive + t_idiss + t_blank) / (21.64e-3 * (t_drive - 300e-6)),
            ),
            rated_voltage: round_to_register(v_rated / 21.18e-3),
            ..self
        }
    }
}

/// ERM blanking/IDISS codes 0..=3 in seconds; anything larger takes the
/// 75 us default.
const BEMF_WINDOWS: [f64; 4] = [45e-6, 75e-6, 150e-6, 225e-6];

fn bemf_window(code: u8) -> f64 {
    BEMF_WINDOWS.get(usize::from(code)).copied().unwrap_or(75e-6)
}

/// Round to the nearest register value. The float-to-int cast saturates,
/// so out-of-range and NaN results land on 255 and 0 instead of invoking
/// wrap-around.
fn round_to_register(value: f64) -> u8 {
    libm::round(value) as u8
}
