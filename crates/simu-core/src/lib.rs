//! Validation and normalization of Kenyan mobile phone numbers.
//!
//! Raw input in any of the accepted shapes (`0712345678`, `+254712345678`,
//! `254712345678`) normalizes to one canonical [`Msisdn`]; the three
//! [`Policy`] validators layer carrier acceptance rules on top of that
//! shared normalization.

pub mod carrier;
pub mod error;
pub mod phone;
pub mod policy;

mod prefixes;

pub use carrier::{classify, Carrier};
pub use error::PhoneError;
pub use phone::Msisdn;
pub use policy::{validate_airtel, validate_kenyan_mobile, validate_safaricom, Policy};
