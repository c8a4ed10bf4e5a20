//! Phone number mask applied while the user types

/// Maximum number of digits kept in a phone number (area code + subscriber)
pub const MAX_PHONE_DIGITS: usize = 11;

/// Extract the ASCII digits of a raw input value
pub fn phone_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Render a raw phone input as `(DD) NNNNN-NNNN` / `(DD) NNNN-NNNN`.
///
/// Non-digits are stripped and the number is capped at eleven digits, so the
/// function is idempotent on its own output. Shorter inputs render
/// progressively: up to two digits are shown bare, the area code gets its
/// parentheses from the third digit on, and the dash appears once ten digits
/// are present.
pub fn format_phone(raw: &str) -> String {
    let mut digits = phone_digits(raw);
    digits.truncate(MAX_PHONE_DIGITS);

    if digits.len() <= 2 {
        return digits;
    }

    let (area, subscriber) = digits.split_at(2);
    let split = match digits.len() {
        10 => Some(4),
        11 => Some(5),
        _ => None,
    };

    match split {
        Some(at) => {
            let (prefix, line) = subscriber.split_at(at);
            format!("({area}) {prefix}-{line}")
        }
        None => format!("({area}) {subscriber}"),
    }
}

/// Drop the last digit of a masked value and re-apply the mask
pub fn backspace_phone(masked: &str) -> String {
    let mut digits = phone_digits(masked);
    digits.truncate(MAX_PHONE_DIGITS);
    digits.pop();
    format_phone(&digits)
}
