/// egui rendering of the dashboard view-model.
pub mod panels;
pub mod plot;
pub mod table;

use chrono::NaiveDate;

/// Date format used in labels, tooltips and the history table.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Format with `,` thousands separators and a fixed number of decimals.
pub fn format_amount(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }

    let is_zero = text.trim_matches(|c| c == '0' || c == '.').is_empty();
    if value < 0.0 && !is_zero {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_amount(15000.0, 0), "15,000");
        assert_eq!(format_amount(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_amount(999.4, 0), "999");
        assert_eq!(format_amount(0.0, 0), "0");
    }

    #[test]
    fn keeps_sign_of_negative_prices() {
        assert_eq!(format_amount(-15000.0, 0), "-15,000");
        assert_eq!(format_amount(-0.001, 2), "0.00");
    }

    #[test]
    fn dates_use_day_first_format() {
        let d = NaiveDate::from_ymd_opt(2023, 1, 8).unwrap();
        assert_eq!(format_date(d), "08.01.2023");
    }
}
