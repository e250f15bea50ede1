pub const MAX_LABEL_WIDTH: usize = 16;

// Greedy word wrap for axis labels. Lines never exceed `max_width` unless a
// single word does; words are never split.
pub fn wrap_label(label: &str, max_width: usize) -> Vec<String> {
    if label.len() <= max_width {
        return vec![label.to_owned()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in label.split_whitespace() {
        if current.is_empty() {
            current = word.to_owned();
        } else if current.len() + 1 + word.len() > max_width {
            lines.push(std::mem::take(&mut current));
            current = word.to_owned();
        } else {
            current.push(' ');
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

pub fn join_label(lines: &[String]) -> String {
    lines.join(" ")
}

// USD with grouped thousands; fractional cents are kept, integral values
// print without a decimal part.
pub fn format_usd(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let value = value.abs();

    let mut whole = value.trunc() as i64;
    let mut cents = (value.fract() * 100.0).round() as i64;
    if cents >= 100 {
        whole += 1;
        cents = 0;
    }

    if cents > 0 {
        format!("{sign}${}.{cents:02}", group_thousands(whole))
    } else {
        format!("{sign}${}", group_thousands(whole))
    }
}

// Axis tick format for values quoted in millions.
pub fn format_millions(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("${}M", value as i64)
    } else {
        format!("${value}M")
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_labels_pass_through() {
        assert_eq!(wrap_label("2024", 16), vec!["2024"]);
        assert_eq!(wrap_label("Sixteen chars ok", 16), vec!["Sixteen chars ok"]);
    }

    #[test]
    fn long_labels_wrap_on_word_boundaries() {
        assert_eq!(
            wrap_label("Autonomous Logistics Hub", 16),
            vec!["Autonomous", "Logistics Hub"]
        );
        assert_eq!(
            wrap_label("Hardware Integration", 16),
            vec!["Hardware", "Integration"]
        );
    }

    #[test]
    fn wrapped_lines_fit_and_rejoin() {
        let label = "Secure data storage and high volume charging depots";
        let lines = wrap_label(label, 16);

        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.len() <= 16, "line too long: {line:?}");
        }
        assert_eq!(join_label(&lines), label);
    }

    #[test]
    fn oversized_word_is_not_split() {
        let lines = wrap_label("Hyperconnectivity everywhere", 10);
        assert_eq!(lines[0], "Hyperconnectivity");
    }

    #[test]
    fn currency_groups_thousands_without_trailing_cents() {
        assert_eq!(format_usd(22_000.0), "$22,000");
        assert_eq!(format_usd(61_500.0), "$61,500");
        assert_eq!(format_usd(3_000_000.0), "$3,000,000");
        assert_eq!(format_usd(0.0), "$0");
    }

    #[test]
    fn currency_keeps_fractional_cents() {
        assert_eq!(format_usd(1.7), "$1.70");
        assert_eq!(format_usd(118.61), "$118.61");
        assert_eq!(format_usd(-9.5), "-$9.50");
    }

    #[test]
    fn millions_ticks_match_axis_format() {
        assert_eq!(format_millions(2.0), "$2M");
        assert_eq!(format_millions(0.5), "$0.5M");
        assert_eq!(format_millions(16.3), "$16.3M");
    }
}
