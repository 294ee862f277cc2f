mod group;
mod tables;

pub use tables::MAX_GROUPS;

use crate::error::{NameError, Result};
use group::{push_word, render_group};
use tracing::trace;

/// Largest value with a name: every group up to and including quintillion filled with 999.
pub const MAX_SUPPORTED: u128 = 1_000_000_000_000_000_000_000 - 1;

/// Returns the English name of `number`, e.g. `125` becomes `"one hundred twenty five"`.
///
/// Every `u64` fits below [`MAX_SUPPORTED`], so this never fails.
pub fn get_name(number: u64) -> String {
    if number == 0 {
        return "zero".to_string();
    }

    let number = u128::from(number);
    render_remainder(number, digit_group_count(number))
}

/// Like [`get_name`], but accepts the full quintillion range and rejects anything above it.
pub fn try_get_name(number: u128) -> Result<String> {
    if number > MAX_SUPPORTED {
        return Err(NameError::OutOfRange {
            number: number.to_string(),
            max: MAX_SUPPORTED,
        });
    }

    if number == 0 {
        return Ok("zero".to_string());
    }

    let groups = digit_group_count(number);
    trace!("Naming {} across {} digit groups", number, groups);

    Ok(render_remainder(number, groups))
}

/// Number of 3-digit groups spanned by `number`. Zero occupies a single group.
pub fn digit_group_count(number: u128) -> usize {
    number
        .checked_ilog10()
        .map_or(1, |exponent| exponent as usize / 3 + 1)
}

/// Names `remainder`, which must fit within `groups` digit groups, most significant group first.
fn render_remainder(remainder: u128, groups: usize) -> String {
    debug_assert!(
        (1..=MAX_GROUPS).contains(&groups),
        "group count {groups} out of range"
    );

    if remainder == 0 {
        return String::new();
    }

    let base = 1000u128.pow((groups - 1) as u32);
    let top = remainder / base;
    debug_assert!(top < 1000, "top group {top} must be less than 1000");

    let mut name = render_group(top as u16, groups);
    if groups > 1 {
        push_word(&mut name, &render_remainder(remainder % base, groups - 1));
    }

    name
}
