use super::tables::{digit_names, scale_label};

/// Appends `word` to `name`, separated by a single space, skipping empty words.
pub(super) fn push_word(name: &mut String, word: &str) {
    if word.is_empty() {
        return;
    }
    if !name.is_empty() {
        name.push(' ');
    }
    name.push_str(word);
}

/// Renders one 0-999 digit group followed by the scale label for `group_index`.
///
/// A zero group renders as an empty string, label included, so empty interior
/// groups vanish from the assembled name.
pub fn render_group(group: u16, group_index: usize) -> String {
    debug_assert!(group < 1000, "digit group {group} must be less than 1000");

    if group == 0 {
        return String::new();
    }

    let mut name = String::new();

    if group >= 100 {
        push_word(&mut name, cardinal(usize::from(group / 100)));
        push_word(&mut name, "hundred");
    }
    push_word(&mut name, &render_two_digits(group % 100));

    if group_index > 1 {
        let label = scale_label(group_index);
        debug_assert!(label.is_some(), "no scale label for group {group_index}");
        push_word(&mut name, label.unwrap_or_default());
    }

    name
}

pub fn render_two_digits(value: u16) -> String {
    debug_assert!(value < 100, "two digit value {value} must be less than 100");

    let tens = usize::from(value / 10);
    let ones = usize::from(value % 10);

    match value {
        0 => String::new(),
        11..=19 => digit_names(ones).map_or("", |names| names.teen).to_string(),
        1..=9 => cardinal(ones).to_string(),
        _ => {
            let mut name = digit_names(tens).map_or("", |names| names.tens).to_string();
            push_word(&mut name, cardinal(ones));
            name
        }
    }
}

fn cardinal(digit: usize) -> &'static str {
    debug_assert!(digit < 10, "digit {digit} must be less than 10");
    digit_names(digit).map_or("", |names| names.cardinal)
}
