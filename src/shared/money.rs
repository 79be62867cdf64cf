/// Formats a dollar amount the way en-US currency formatting does:
/// `14.25` becomes `$14.25`, `1234.5` becomes `$1,234.50` and `-5` becomes
/// `-$5.00`. Half cents round away from zero on the shortest decimal form of
/// `value`, so `1.005` becomes `$1.01`.
pub fn format_usd(value: f64) -> String {
    if value.is_nan() {
        return "$NaN".to_string();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}$∞");
    }

    let cents = round_to_cents(&value.abs().to_string());
    let (dollars, cents) = cents.split_at(cents.len() - 2);
    format!("{sign}${}.{cents}", group_thousands(dollars))
}

/// Rounds plain decimal text (no exponent) to whole cents, returning the
/// cent count as digits with at least three of them.
fn round_to_cents(decimal: &str) -> String {
    let (whole, fraction) = decimal.split_once('.').unwrap_or((decimal, ""));
    let mut fraction = fraction.chars();
    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.by_ref().take(2).map(|c| c as u8))
        .collect();
    while digits.len() < whole.len() + 2 {
        digits.push(b'0');
    }

    if fraction.next().is_some_and(|c| c >= '5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    while digits.len() < 3 {
        digits.insert(0, b'0');
    }
    // Leading zeros from the whole part beyond the last dollar digit.
    let leading = digits
        .iter()
        .take(digits.len() - 3)
        .take_while(|digit| **digit == b'0')
        .count();
    String::from_utf8_lossy(&digits[leading..]).into_owned()
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[test]
fn group_thousands_test() {
    assert_eq!(group_thousands("0"), "0");
    assert_eq!(group_thousands("999"), "999");
    assert_eq!(group_thousands("1000"), "1,000");
    assert_eq!(group_thousands("1234567"), "1,234,567");
}

#[test]
fn round_to_cents_test() {
    assert_eq!(round_to_cents("0"), "000");
    assert_eq!(round_to_cents("14.25"), "1425");
    assert_eq!(round_to_cents("1.005"), "101");
    assert_eq!(round_to_cents("0.004"), "000");
    assert_eq!(round_to_cents("9.995"), "1000");
    assert_eq!(round_to_cents("99.999"), "10000");
    assert_eq!(round_to_cents("0.5"), "050");
}

#[test]
fn small_amounts_keep_leading_zero() {
    assert_eq!(format_usd(0.05), "$0.05");
    assert_eq!(format_usd(0.5), "$0.50");
}
