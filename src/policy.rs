// fixed security header policy

use http::{HeaderMap, HeaderName, HeaderValue};

/// the managed headers and the exact values every response leaves with.
/// names are canonical lowercase, values are reproduced verbatim for
/// deployments that expect this policy
pub const SECURITY_HEADERS: [(&str, &str); 7] = [
    (
        "strict-transport-security",
        "max-age=63072000; includeSubdomains; preload",
    ),
    (
        "content-security-policy",
        "default-src 'self'; script-src 'self' 'unsafe-inline'; style-src 'self' 'unsafe-inline'; img-src 'self' data: https:; font-src 'self'; connect-src 'self'",
    ),
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
    ("x-xss-protection", "1; mode=block"),
    ("referrer-policy", "strict-origin-when-cross-origin"),
    (
        "permissions-policy",
        "geolocation=(), microphone=(), camera=()",
    ),
];

/// a writable header mapping the policy can be applied to
pub trait HeaderTarget {
    /// replace whatever is stored under `name` with the single `value`
    fn overwrite(&mut self, name: &'static str, value: &'static str);
}

impl HeaderTarget for HeaderMap {
    fn overwrite(&mut self, name: &'static str, value: &'static str) {
        // insert drops every previous value for the name
        self.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
}

/// set all managed headers on `target`, unconditionally
pub fn apply<T: HeaderTarget + ?Sized>(target: &mut T) {
    for (name, value) in SECURITY_HEADERS {
        target.overwrite(name, value);
    }
}

/// whether `name` is exactly one of the managed (lowercase) header names.
/// event header maps are keyed by lowercase name, so other spellings are
/// separate entries the policy never writes
pub fn is_managed(name: &str) -> bool {
    SECURITY_HEADERS.iter().any(|(managed, _)| *managed == name)
}
