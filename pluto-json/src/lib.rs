//! pluto-json contains the JSON schemas used by pluto-ctl to report the state
//! of the Pluto DDS tones and FIR filters.

#![warn(missing_docs)]

use serde::{Deserialize, Serialize};

/// DDS tone JSON schema.
///
/// This is the composite readback of a single DDS tone, as returned by
/// `DdsTone::status`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct ToneStatus {
    /// Linear amplitude, between 0 and 1.
    pub amplitude: f64,
    /// Signed frequency in MHz.
    pub frequency: f64,
    /// Phase of the I channel in degrees.
    pub phase: f64,
}

/// DDS tone report JSON schema.
///
/// This is the display form of a tone, with the level given in dBFS.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ToneReport {
    /// Signed frequency.
    pub frequency: f64,
    /// Unit of `frequency`.
    pub frequency_unit: String,
    /// Phase of the I channel in degrees.
    pub phase: f64,
    /// Tone level. A muted tone reports [`MUTED_LEVEL`].
    pub level: f64,
    /// Unit of `level`.
    pub level_unit: String,
}

/// Level reported for a tone whose amplitude is exactly zero.
pub const MUTED_LEVEL: f64 = 99.9;

/// Dual-tone DDS JSON schema.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DdsStatus {
    /// DDS sampling frequency in MHz.
    pub sampling_frequency: f64,
    /// Whether both tones are muted.
    pub off: bool,
    /// First tone.
    pub tone1: ToneReport,
    /// Second tone.
    pub tone2: ToneReport,
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
/// FIR filter signal path.
///
/// The AD9361 has one programmable FIR on the transmit path and one on the
/// receive path.
pub enum FirPath {
    /// Transmit interpolation FIR.
    Tx,
    /// Receive decimation FIR.
    Rx,
}

impl std::fmt::Display for FirPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.write_str(match self {
            FirPath::Tx => "TX",
            FirPath::Rx => "RX",
        })
    }
}

/// FIR readback JSON schema.
///
/// Contains the taps read back from the coefficient bank of one path, with
/// the leading and trailing zeros removed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FirReadback {
    /// Signal path of the filter.
    pub path: FirPath,
    /// Whether the FIR filters are enabled.
    pub enabled: bool,
    /// Filter taps.
    pub taps: Vec<i16>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fir_path_display() {
        assert_eq!(FirPath::Tx.to_string(), "TX");
        assert_eq!(FirPath::Rx.to_string(), "RX");
    }

    #[test]
    fn readback_json() {
        let readback = FirReadback {
            path: FirPath::Tx,
            enabled: true,
            taps: vec![1, -2, 3],
        };
        let json = serde_json::to_string(&readback).unwrap();
        assert_eq!(json, r#"{"path":"Tx","enabled":true,"taps":[1,-2,3]}"#);
    }
}
