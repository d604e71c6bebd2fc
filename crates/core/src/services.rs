//! Static directory of public emergency services.

use serde::Serialize;

/// A public emergency line shown on the emergency page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmergencyService {
    pub name: &'static str,
    pub description: &'static str,
    pub phone: &'static str,
}

/// Services listed in display order.
pub const EMERGENCY_SERVICES: [EmergencyService; 2] = [
    EmergencyService {
        name: "Emergency Number",
        description: "General Emergency",
        phone: "911",
    },
    EmergencyService {
        name: "Poison Control",
        description: "Toxicology Emergency",
        phone: "1-800-222-1222",
    },
];

pub fn directory() -> &'static [EmergencyService] {
    &EMERGENCY_SERVICES
}
