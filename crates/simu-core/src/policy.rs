use serde::{Deserialize, Serialize};

use crate::carrier::{classify, Carrier};
use crate::error::PhoneError;
use crate::phone::Msisdn;

/// A named acceptance rule layered over shared normalization. Carrier
/// policies additionally require a matching prefix-table classification;
/// the generic policy accepts anything that normalizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    SafaricomOnly,
    AirtelOnly,
    AnyKenyanMobile,
}

impl Policy {
    pub fn validate(&self, raw: &str) -> Result<Msisdn, PhoneError> {
        let number = Msisdn::new(raw)?;
        match self {
            Policy::SafaricomOnly => match classify(&number)? {
                Some(Carrier::Safaricom) => Ok(number),
                _ => Err(PhoneError::NotSafaricom),
            },
            Policy::AirtelOnly => match classify(&number)? {
                Some(Carrier::Airtel) => Ok(number),
                _ => Err(PhoneError::NotAirtel),
            },
            Policy::AnyKenyanMobile => Ok(number),
        }
    }
}

pub fn validate_safaricom(raw: &str) -> Result<Msisdn, PhoneError> {
    Policy::SafaricomOnly.validate(raw)
}

pub fn validate_airtel(raw: &str) -> Result<Msisdn, PhoneError> {
    Policy::AirtelOnly.validate(raw)
}

pub fn validate_kenyan_mobile(raw: &str) -> Result<Msisdn, PhoneError> {
    Policy::AnyKenyanMobile.validate(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefixes;

    #[test]
    fn safaricom_accepts_listed_prefix() {
        let number = validate_safaricom("0712345678").unwrap();
        assert_eq!(number.as_str(), "254712345678");
    }

    #[test]
    fn safaricom_rejects_airtel_number() {
        assert_eq!(
            validate_safaricom("0733456789"),
            Err(PhoneError::NotSafaricom)
        );
    }

    #[test]
    fn safaricom_rejects_unallocated_prefix() {
        assert_eq!(
            validate_safaricom("0744123456"),
            Err(PhoneError::NotSafaricom)
        );
    }

    #[test]
    fn airtel_accepts_plus_prefixed_international_form() {
        let number = validate_airtel("+254733456789").unwrap();
        assert_eq!(number.as_str(), "254733456789");
    }

    #[test]
    fn airtel_rejects_safaricom_number() {
        assert_eq!(validate_airtel("0712345678"), Err(PhoneError::NotAirtel));
    }

    #[test]
    fn generic_rejects_malformed_input() {
        assert_eq!(
            validate_kenyan_mobile("12345"),
            Err(PhoneError::InvalidFormat)
        );
    }

    #[test]
    fn generic_rejects_landline() {
        assert_eq!(
            validate_kenyan_mobile("0203456789"),
            Err(PhoneError::InvalidFormat)
        );
    }

    #[test]
    fn carrier_policies_propagate_normalization_failure() {
        assert_eq!(validate_safaricom("12345"), Err(PhoneError::InvalidFormat));
        assert_eq!(validate_airtel(""), Err(PhoneError::InvalidFormat));
    }

    #[test]
    fn generic_accepts_everything_a_carrier_policy_accepts() {
        // One sample number per listed prefix, both tables.
        for prefix in prefixes::SAFARICOM.iter().chain(prefixes::AIRTEL.iter()) {
            let raw = format!("{prefix}123456");
            let carrier = Policy::SafaricomOnly
                .validate(&raw)
                .or_else(|_| Policy::AirtelOnly.validate(&raw))
                .unwrap();
            let generic = validate_kenyan_mobile(&raw).unwrap();
            assert_eq!(carrier, generic);
        }
    }

    #[test]
    fn rejection_messages_are_user_facing() {
        assert_eq!(
            validate_safaricom("0733456789").unwrap_err().to_string(),
            "not a recognized Safaricom number"
        );
        assert_eq!(
            validate_airtel("0712345678").unwrap_err().to_string(),
            "not a recognized Airtel number"
        );
        assert_eq!(
            validate_kenyan_mobile("12345").unwrap_err().to_string(),
            "not a valid Kenyan mobile number"
        );
    }
}
