use once_cell::sync::Lazy;

const SAFARICOM_RAW: &str = include_str!("../data/safaricom_prefixes.txt");
const AIRTEL_RAW: &str = include_str!("../data/airtel_prefixes.txt");

pub static SAFARICOM: Lazy<Vec<&'static str>> = Lazy::new(|| parse(SAFARICOM_RAW));
pub static AIRTEL: Lazy<Vec<&'static str>> = Lazy::new(|| parse(AIRTEL_RAW));

/// One prefix per line, `#` starts a comment line.
fn parse(raw: &'static str) -> Vec<&'static str> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}
