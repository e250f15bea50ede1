pub const AV_MARKET_LABEL: &str = "AV Market Value (in Trillions USD)";
pub const AV_MARKET: &[(&str, f32)] = &[("2024", 1.7), ("2034", 3.9)];

pub const ROBOTAXI_MARKET_LABEL: &str = "Robotaxi Market Value (in Billions USD)";
pub const ROBOTAXI_MARKET: &[(&str, f32)] = &[("2022", 1.71), ("2031", 118.61)];
