pub const DATASET_LABEL: &str = "Annual Cost Breakdown";

pub const CATEGORIES: &[(&str, f32)] = &[
    ("Vehicle Amortization", 22_000.0),
    ("Operational Support", 10_000.0),
    ("Maintenance", 9_000.0),
    ("Insurance", 7_000.0),
    ("Charging/Depot", 5_500.0),
    ("Cleaning", 5_000.0),
    ("Other", 3_000.0),
];

pub fn total() -> f32 {
    CATEGORIES.iter().map(|(_, value)| value).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annual_burden_sums_to_headline_figure() {
        assert_eq!(total(), 61_500.0);
    }
}
