use serde::{Deserialize, Serialize};

use crate::error::PhoneError;
use crate::phone::Msisdn;
use crate::prefixes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Carrier {
    Safaricom,
    Airtel,
}

/// Looks up the number's prefix in each carrier table. `Ok(None)` means the
/// number is valid but allocated to no known carrier; that is informational,
/// not a validation failure. A prefix claimed by both tables is a defect in
/// the prefix data and surfaces as `AmbiguousPrefix` rather than a silent
/// pick.
pub fn classify(number: &Msisdn) -> Result<Option<Carrier>, PhoneError> {
    let local = number.to_local();
    let safaricom = longest_match(&local, &prefixes::SAFARICOM);
    let airtel = longest_match(&local, &prefixes::AIRTEL);

    match (safaricom, airtel) {
        (Some(prefix), Some(_)) => Err(PhoneError::AmbiguousPrefix(prefix.to_string())),
        (Some(_), None) => Ok(Some(Carrier::Safaricom)),
        (None, Some(_)) => Ok(Some(Carrier::Airtel)),
        (None, None) => Ok(None),
    }
}

fn longest_match<'a>(local: &str, table: &[&'a str]) -> Option<&'a str> {
    table
        .iter()
        .copied()
        .filter(|prefix| local.starts_with(prefix))
        .max_by_key(|prefix| prefix.len())
}
