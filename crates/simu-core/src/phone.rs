use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PhoneError;

/// Kenyan mobile number in canonical storage form: `254` followed by
/// 9 digits (e.g., "254712345678"). Construction normalizes the three
/// accepted input shapes (`0712345678`, `+254712345678`, `254712345678`),
/// so every live value is exactly 12 digits and fits a 12-char column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Msisdn(String);

impl Msisdn {
    pub fn new(raw: &str) -> Result<Self, PhoneError> {
        let cleaned = scrub(raw);

        let canonical = if let Some(rest) = cleaned.strip_prefix("+254") {
            format!("254{rest}")
        } else if cleaned.starts_with("254") && cleaned.len() == 12 {
            cleaned
        } else if let Some(rest) = cleaned.strip_prefix('0') {
            format!("254{rest}")
        } else {
            return Err(PhoneError::InvalidFormat);
        };

        if !Self::is_canonical(&canonical) {
            return Err(PhoneError::InvalidFormat);
        }
        Ok(Self(canonical))
    }

    fn is_canonical(number: &str) -> bool {
        let bytes = number.as_bytes();
        if bytes.len() != 12 || !bytes.iter().all(u8::is_ascii_digit) {
            return false;
        }
        // Mobile indicator: 2547XXXXXXXX or 2541XXXXXXXX. Landlines
        // (2542X, 2545X, ...) are rejected here, before any policy runs.
        bytes[3] == b'7' || bytes[3] == b'1'
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Local dialing form: `0` followed by the 9 digits after `254`.
    pub fn to_local(&self) -> String {
        format!("0{}", &self.0[3..])
    }
}

impl fmt::Display for Msisdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Drops formatting noise: trims whitespace, keeps a leading `+`, keeps
/// digits, discards everything else ("0712-345-678" -> "0712345678").
fn scrub(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .char_indices()
        .filter(|&(i, c)| c.is_ascii_digit() || (c == '+' && i == 0))
        .map(|(_, c)| c)
        .collect()
}
