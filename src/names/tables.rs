/// Names a single digit takes depending on where it sits in a group.
#[derive(Debug)]
pub struct DigitNames {
    pub cardinal: &'static str,
    pub tens: &'static str,
    pub teen: &'static str,
}

const fn names(cardinal: &'static str, tens: &'static str, teen: &'static str) -> DigitNames {
    DigitNames {
        cardinal,
        tens,
        teen,
    }
}

/// Indexed by digit value. Zero is never named inside a number, so slot 0 is empty.
static DIGIT_NAMES: [Option<DigitNames>; 10] = [
    None,
    Some(names("one", "ten", "eleven")),
    Some(names("two", "twenty", "twelve")),
    Some(names("three", "thirty", "thirteen")),
    Some(names("four", "forty", "fourteen")),
    Some(names("five", "fifty", "fifteen")),
    Some(names("six", "sixty", "sixteen")),
    Some(names("seven", "seventy", "seventeen")),
    Some(names("eight", "eighty", "eighteen")),
    Some(names("nine", "ninety", "nineteen")),
];

/// Highest group index with a scale label.
pub const MAX_GROUPS: usize = 7;

/// Indexed by group index; the ones group (1) carries no label.
static SCALE_LABELS: [Option<&str>; MAX_GROUPS + 1] = [
    None,
    None,
    Some("thousand"),
    Some("million"),
    Some("billion"),
    Some("trillion"),
    Some("quadrillion"),
    Some("quintillion"),
];

pub fn digit_names(digit: usize) -> Option<&'static DigitNames> {
    DIGIT_NAMES.get(digit).and_then(Option::as_ref)
}

pub fn scale_label(group_index: usize) -> Option<&'static str> {
    SCALE_LABELS.get(group_index).copied().flatten()
}
