//! Phone number input mask.

/// Re-render a phone input value into the `+7 (XXX) XXX-XX-XX` shape.
///
/// Non-digits are stripped first. The first digit stands for the country
/// code, so at most eleven digits are kept.
pub fn format_phone(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let part = |from: usize, to: usize| -> String {
        digits[from.min(digits.len())..to.min(digits.len())]
            .iter()
            .collect()
    };

    match digits.len() {
        0 => String::new(),
        1 => format!("+7 ({}", part(0, 1)),
        2..=4 => format!("+7 ({}", part(1, 4)),
        5..=7 => format!("+7 ({}) {}", part(1, 4), part(4, 7)),
        8..=9 => format!("+7 ({}) {}-{}", part(1, 4), part(4, 7), part(7, 9)),
        _ => format!(
            "+7 ({}) {}-{}-{}",
            part(1, 4),
            part(4, 7),
            part(7, 9),
            part(9, 11)
        ),
    }
}
