/// REST resource path for kiosks, relative to `{base}/{version}/`
pub const KIOSK_RESOURCE: &str = "kiosk";

/// LocalStorage key holding the bearer token (JSON-encoded string)
pub const ACCESS_TOKEN_KEY: &str = "kioskAdmin_accessToken";

/// LocalStorage key holding the signed-in user
pub const AUTH_USER_KEY: &str = "kioskAdmin_user";
