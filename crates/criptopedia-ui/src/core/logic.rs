//! Pure helpers for identifier handling.

/// Derive a catalog identifier from a display name.
///
/// Lower-cases the input, collapses every run of characters outside `[a-z0-9]`
/// into a single `-`, and trims leading/trailing dashes.
#[must_use]
pub fn derive_identifier(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch);
        } else {
            pending_dash = true;
        }
    }
    out
}

/// Normalize an identifier typed by the admin: lower-case, spaces become `-`.
#[must_use]
pub fn normalize_identifier(id: &str) -> String {
    id.trim().to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_slug_from_name() {
        assert_eq!(derive_identifier("AES Encryption!!"), "aes-encryption");
        assert_eq!(derive_identifier("  --Base64--  "), "base64");
        assert_eq!(derive_identifier("RSA 2048 / OAEP"), "rsa-2048-oaep");
        assert_eq!(derive_identifier("César"), "c-sar");
        assert_eq!(derive_identifier("!!!"), "");
    }

    #[test]
    fn normalizes_typed_identifiers() {
        assert_eq!(normalize_identifier("Triple DES"), "triple-des");
        assert_eq!(normalize_identifier(" rot13 "), "rot13");
    }
}
