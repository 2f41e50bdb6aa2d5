//! Signal classification for the four supported bioelectric potentials

use core::fmt;
use serde::{Deserialize, Serialize};

/// The bioelectric potentials this playground can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalKind {
    /// Electrocardiography - heart electrical activity
    Ecg,
    /// Electroencephalography - brain electrical activity
    Eeg,
    /// Electromyography - muscle electrical activity
    Emg,
    /// Electrooculography - eye movement potential
    Eog,
}

impl SignalKind {
    /// All supported kinds, in front-screen tile order
    pub const ALL: [SignalKind; 4] = [
        SignalKind::Ecg,
        SignalKind::Eeg,
        SignalKind::Emg,
        SignalKind::Eog,
    ];

    /// Short code used to key content records and catalogs
    pub fn code(&self) -> &'static str {
        match self {
            SignalKind::Ecg => "ECG",
            SignalKind::Eeg => "EEG",
            SignalKind::Emg => "EMG",
            SignalKind::Eog => "EOG",
        }
    }

    /// Spelled-out name for headings
    pub fn full_name(&self) -> &'static str {
        match self {
            SignalKind::Ecg => "Electrocardiography",
            SignalKind::Eeg => "Electroencephalography",
            SignalKind::Emg => "Electromyography",
            SignalKind::Eog => "Electrooculography",
        }
    }

    /// Resolve a short code, case-sensitively
    pub fn from_code(code: &str) -> Option<SignalKind> {
        match code {
            "ECG" => Some(SignalKind::Ecg),
            "EEG" => Some(SignalKind::Eeg),
            "EMG" => Some(SignalKind::Emg),
            "EOG" => Some(SignalKind::Eog),
            _ => None,
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for kind in SignalKind::ALL {
            assert_eq!(SignalKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(SignalKind::from_code("EKG"), None);
        assert_eq!(SignalKind::from_code("ecg"), None);
        assert_eq!(SignalKind::from_code(""), None);
    }

    #[test]
    fn test_display_matches_code() {
        assert_eq!(format!("{}", SignalKind::Emg), "EMG");
    }
}
