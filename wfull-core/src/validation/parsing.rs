//! Parsing utilities for WFULL file names
//!
//! The k-point a file belongs to is only recorded in its name
//! (`WFULL0001.tmp` holds k-point 1). These helpers work on plain file
//! names with no path component and no I/O.

use crate::format::constants::file_name::{INDEX_DIGITS, PREFIX, SUFFIX};
use crate::WfullError;

/// Parse the k-point index from a name of the form `WFULLnnnn...`
///
/// Only the prefix and the four index digits are checked, so names with a
/// different extension still resolve.
pub fn parse_kpoint_index(file_name: &str) -> Result<u32, WfullError> {
    let digits = file_name
        .strip_prefix(PREFIX)
        .and_then(|rest| rest.get(..INDEX_DIGITS))
        .ok_or(WfullError::InvalidFileName)?;

    parse_digits(digits)
}

/// Check whether a file name matches `WFULL????.tmp` with four digits
pub fn matches_file_pattern(file_name: &str) -> bool {
    file_name.len() == PREFIX.len() + INDEX_DIGITS + SUFFIX.len()
        && file_name.ends_with(SUFFIX)
        && parse_kpoint_index(file_name).is_ok()
}

/// Parse a run of ASCII digits
fn parse_digits(s: &str) -> Result<u32, WfullError> {
    if s.is_empty() {
        return Err(WfullError::InvalidFileName);
    }

    let mut result: u32 = 0;

    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return Err(WfullError::InvalidFileName);
        }

        let digit = (byte - b'0') as u32;
        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_add(digit))
            .ok_or(WfullError::ArraySizeOverflow)?;
    }

    Ok(result)
}
