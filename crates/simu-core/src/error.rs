use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhoneError {
    /// Input could not be normalized into the 254XXXXXXXXX mobile shape.
    #[error("not a valid Kenyan mobile number")]
    InvalidFormat,
    #[error("not a recognized Safaricom number")]
    NotSafaricom,
    #[error("not a recognized Airtel number")]
    NotAirtel,
    /// A prefix is listed for more than one carrier. This is a defect in the
    /// maintained prefix data, not a problem with the caller's input.
    #[error("prefix {0} is listed for more than one carrier")]
    AmbiguousPrefix(String),
}
