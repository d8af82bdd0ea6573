//! # Formatting Utilities
//!
//! Wallet address formatting for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `format_address` with the navbar's default lengths

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is too short to truncate meaningfully, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use wallet_shell::utils::format::format_address;
///
/// let addr = "0xABCDEF1234567890abcdef1234567890ABCDEF12";
/// assert_eq!(format_address(addr, 6, 4), "0xABCD...EF12");
/// assert_eq!(format_address("short", 6, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    // Guard against lengths exceeding the address length to prevent panics.
    // Addresses are hex/base58 so byte indexing is safe (ASCII-only).
    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
    {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address with the 6-character prefix and 4-character
/// suffix the navbar displays.
///
/// # Examples
///
/// ```rust
/// use wallet_shell::utils::format::truncate_address;
///
/// let addr = "0xABCDEF1234567890abcdef1234567890ABCDEF12";
/// assert_eq!(truncate_address(addr), "0xABCD...EF12");
/// assert_eq!(truncate_address(""), "");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "0xABCDEF1234567890abcdef1234567890ABCDEF12";
        assert_eq!(format_address(addr, 6, 4), "0xABCD...EF12");
        assert_eq!(format_address(addr, 4, 4), "0xAB...EF12");
        assert_eq!(format_address(addr, 2, 2), "0x...12");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("short", 6, 4), "short");
        assert_eq!(format_address("abc", 6, 4), "abc");
    }

    #[test]
    fn test_truncate_address() {
        let addr = "0xABCDEF1234567890abcdef1234567890ABCDEF12";
        assert_eq!(truncate_address(addr), "0xABCD...EF12");
    }

    #[test]
    fn test_truncate_address_empty() {
        assert_eq!(truncate_address(""), "");
    }
}
