pub const CATEGORIES: &[&str] = &[
    "Software Dev & Testing",
    "Hardware Integration",
    "Autonomous Logistics Hub",
];

pub const LOW_ESTIMATE_LABEL: &str = "Low Est. (in Millions USD)";
pub const LOW_ESTIMATE: &[f32] = &[2.0, 0.5, 16.3];

pub const HIGH_ESTIMATE_LABEL: &str = "High Est. (in Millions USD)";
pub const HIGH_ESTIMATE: &[f32] = &[8.0, 2.0, 16.3];
