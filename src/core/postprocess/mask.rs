//! Phone masking
//!
//! Result rows carry raw WhatsApp numbers in a handful of columns. Before
//! anything leaves the gateway those values are reduced to country and area
//! prefixes plus the last four digits. Masked output has fewer than ten
//! digits, so running the mask twice changes nothing.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Columns whose string values are always masked.
const PHONE_COLUMNS: [&str; 4] = [
    "phone",
    "referrer_phone",
    "referred_phone",
    "telefone_usuario",
];

/// `session_id` holds the user's phone in the message tables but can also
/// carry opaque ids, so it is only masked when the whole value is
/// phone-shaped.
static PHONE_SHAPED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{10,13}$").unwrap());

/// Mask sensitive columns of every row in place. Non-object rows and
/// non-string values are left alone.
pub fn mask_rows(rows: &mut [Value]) {
    for row in rows {
        let Some(object) = row.as_object_mut() else {
            continue;
        };
        for (column, value) in object.iter_mut() {
            let Some(text) = value.as_str() else {
                continue;
            };
            if !should_mask(column, text) {
                continue;
            }
            let masked = mask_phone(text);
            *value = Value::String(masked);
        }
    }
}

fn should_mask(column: &str, value: &str) -> bool {
    if column.eq_ignore_ascii_case("session_id") {
        return PHONE_SHAPED_RE.is_match(value);
    }
    PHONE_COLUMNS
        .iter()
        .any(|name| column.eq_ignore_ascii_case(name))
}

/// Mask a single phone value. Anything with fewer than ten digits is not
/// phone-shaped and passes through unchanged.
pub fn mask_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < 10 {
        return raw.to_string();
    }

    let last4 = &digits[digits.len() - 4..];
    if digits.len() >= 12 {
        // +55 11 9****-4321
        format!("+{} {} 9****-{}", &digits[..2], &digits[2..4], last4)
    } else if digits.len() == 11 {
        // BR mobile without a country code
        format!("({}) 9****-{}", &digits[..2], last4)
    } else {
        // BR landline
        format!("({}) ****-{}", &digits[..2], last4)
    }
}
