//! The threat taxonomy — a fixed, closed enumeration.
//!
//! RULE: Variants are declared in display-name order so sorted collections
//! match the exported JSON ordering. Never reorder.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ThreatKind {
    #[serde(rename = "Channel Overlap")]
    ChannelOverlap,
    Congestion,
    #[serde(rename = "Evil Twin")]
    EvilTwin,
    Leakage,
}

impl ThreatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatKind::ChannelOverlap => "Channel Overlap",
            ThreatKind::Congestion => "Congestion",
            ThreatKind::EvilTwin => "Evil Twin",
            ThreatKind::Leakage => "Leakage",
        }
    }

    /// Remediation guidance for audit reports.
    pub fn mitigations(&self) -> &'static [&'static str] {
        match self {
            ThreatKind::Congestion => &[
                "Reduce number of active SSIDs",
                "Enable band steering to 5 GHz",
                "Optimize access point placement",
            ],
            ThreatKind::Leakage => &[
                "Reduce transmit power",
                "Reposition access point away from boundaries",
                "Use directional antennas",
            ],
            ThreatKind::ChannelOverlap => &[
                "Reassign Wi-Fi channels",
                "Use non-overlapping channels (1, 6, 11)",
                "Enable automatic channel selection",
            ],
            ThreatKind::EvilTwin => &[
                "Enable WPA3 security",
                "Monitor BSSID changes",
                "Deploy wireless intrusion detection",
            ],
        }
    }
}
