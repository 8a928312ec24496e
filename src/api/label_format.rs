use std::sync::Arc;

/// Caller-supplied pure function turning an axis value into label text.
pub type TickFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

#[must_use]
pub fn default_tick_formatter() -> TickFormatterFn {
    Arc::new(plain_label)
}

/// Integers print without decimals; other values keep up to two.
#[must_use]
pub fn plain_label(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{value:.0}");
    }
    trim_decimals(format!("{value:.2}"))
}

/// Decimal magnitudes for parameter counts: `350M`, `7B`, `1.5T`.
#[must_use]
pub fn magnitude_label(value: f64) -> String {
    scaled_label(value, 1_000.0, &["", "K", "M", "B", "T"])
}

/// Binary magnitudes for context windows: `4K`, `128K`, `1M`.
#[must_use]
pub fn token_count_label(value: f64) -> String {
    scaled_label(value, 1_024.0, &["", "K", "M", "G"])
}

#[must_use]
pub fn percent_label(value: f64) -> String {
    format!("{}%", plain_label(value))
}

fn scaled_label(value: f64, base: f64, suffixes: &[&str]) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let mut scaled = value;
    let mut index = 0;
    while scaled.abs() >= base && index + 1 < suffixes.len() {
        scaled /= base;
        index += 1;
    }
    // 999.96K rounds to 1000K; promote it to the next unit.
    if round_tenths(scaled).abs() >= base && index + 1 < suffixes.len() {
        scaled /= base;
        index += 1;
    }
    let scaled = round_tenths(scaled);
    let number = if scaled.fract() == 0.0 {
        format!("{scaled:.0}")
    } else {
        trim_decimals(format!("{scaled:.1}"))
    };
    format!("{number}{}", suffixes[index])
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn trim_decimals(text: String) -> String {
    if !text.contains('.') {
        return text;
    }
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::{magnitude_label, percent_label, plain_label, token_count_label};

    #[test]
    fn plain_labels_drop_redundant_decimals() {
        assert_eq!(plain_label(20.0), "20");
        assert_eq!(plain_label(12.5), "12.5");
        assert_eq!(plain_label(0.126), "0.13");
    }

    #[test]
    fn magnitude_labels_cover_parameter_counts() {
        assert_eq!(magnitude_label(350e6), "350M");
        assert_eq!(magnitude_label(7e9), "7B");
        assert_eq!(magnitude_label(1.5e12), "1.5T");
        assert_eq!(magnitude_label(999.0), "999");
    }

    #[test]
    fn rounding_up_promotes_to_next_unit() {
        assert_eq!(magnitude_label(999_950.0), "1M");
        assert_eq!(magnitude_label(999.96e9), "1T");
        assert_eq!(magnitude_label(999_940.0), "999.9K");
        assert_eq!(token_count_label(1_048_575.0), "1M");
    }

    #[test]
    fn token_labels_use_binary_steps() {
        assert_eq!(token_count_label(4_096.0), "4K");
        assert_eq!(token_count_label(131_072.0), "128K");
        assert_eq!(token_count_label(1_048_576.0), "1M");
    }

    #[test]
    fn percent_label_appends_sign() {
        assert_eq!(percent_label(87.5), "87.5%");
    }
}
