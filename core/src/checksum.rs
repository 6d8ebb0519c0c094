//! ISO 7064 MOD 97-10 as used by IBAN.
//!
//! Letters expand to two decimal digits (A=10 .. Z=35) and the resulting
//! digit string is reduced one digit at a time with
//! `remainder = (remainder * 10 + digit) % 97`. No big integers.

/// Reduce an already rearranged string modulo 97.
///
/// Returns `None` if the string holds anything other than `0-9` or `A-Z`.
pub fn mod97(rearranged: &str) -> Option<u32> {
    let mut remainder: u32 = 0;
    for byte in rearranged.bytes() {
        match byte {
            b'0'..=b'9' => {
                remainder = (remainder * 10 + u32::from(byte - b'0')) % 97;
            }
            b'A'..=b'Z' => {
                let value = u32::from(byte - b'A') + 10;
                remainder = (remainder * 10 + value / 10) % 97;
                remainder = (remainder * 10 + value % 10) % 97;
            }
            _ => return None,
        }
    }
    Some(remainder)
}

/// Compute the two check digits for `country` + `bban`.
///
/// The candidate `bban + country + "00"` is reduced and the check value is
/// `98 - remainder`, always in `2..=98`.
pub fn check_digits(country: &str, bban: &str) -> Option<u8> {
    let candidate = format!("{bban}{country}00");
    mod97(&candidate).map(|r| (98 - r) as u8)
}

/// True if a normalized IBAN (`CCKK` + BBAN) reduces to 1 once its first
/// four characters are moved to the end.
pub fn has_valid_checksum(iban: &str) -> bool {
    if iban.len() < 4 || !iban.is_char_boundary(4) {
        return false;
    }
    let (head, bban) = iban.split_at(4);
    mod97(&format!("{bban}{head}")) == Some(1)
}
