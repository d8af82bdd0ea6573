//! Application constants
//!
//! Static SDK configuration plus the handful of UI tuning values. The
//! navigation targets are integrator-supplied: edit [`NAV_ITEMS`] to
//! point the navbar at real routes.

/// Application metadata handed to the wallet-connect SDK.
/// The URL must match the deployed origin (domain and subdomain).
pub const APP_NAME: &str = "Blocknogotchi";
pub const APP_DESCRIPTION: &str = "Blocknogotchi";
pub const APP_URL: &str = "https://blocknogotchi.fun/";
pub const APP_ICON: &str = "https://blocknogotchi.fun/favicon.ico";

/// Wallet-connect cloud project id, supplied at build time.
pub const PROJECT_ID: &str = match option_env!("WALLETCONNECT_PROJECT_ID") {
    Some(id) => id,
    None => "YOUR_PROJECT_ID",
};

/// Supported networks (a single test network).
pub const NETWORKS: &[&str] = &["scroll-sepolia"];

/// SDK feature flags
pub const ANALYTICS_ENABLED: bool = true;
pub const EMAIL_LOGIN_ENABLED: bool = true;
pub const SOCIAL_PROVIDERS: &[&str] =
    &["google", "x", "github", "apple", "facebook", "farcaster"];

/// Primary navigation targets as `(label, href)` pairs. The profile
/// link is handled separately since it only renders when connected.
pub const NAV_ITEMS: &[(&str, &str)] = &[("Home", "/")];

/// Route of the connected-only profile link.
pub const PROFILE_ROUTE: &str = "/profile";

// UI constants
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;
pub const TOAST_DURATION_MS: u32 = 4000;
