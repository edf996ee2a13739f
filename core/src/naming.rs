#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Helper functions for deriving filesystem-safe fixture names from free text
//! (response descriptions, document titles) and request names from HTTP method and path.

/// Characters that are not allowed in file or folder names on common platforms.
const FORBIDDEN_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Maps arbitrary text to a token usable as a file or folder name.
///
/// Line breaks are dropped, surrounding whitespace is trimmed, every internal
/// whitespace run becomes a single `_`, and the characters `< > : " / \ | ? *`
/// are removed. The result may be empty.
///
/// e.g. `"Pet Store"` -> `Pet_Store`, `"OK\n"` -> `OK`
pub fn sanitize(text: &str) -> String {
    let joined: String = text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();

    joined
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| !FORBIDDEN_CHARS.contains(c))
        .collect()
}

/// Derives a request name from the HTTP Method and URL path when `operationId` is missing.
///
/// e.g. `GET /pets/{id}` -> `get_pets_id`
pub fn derive_operation_name(method: &str, path: &str) -> String {
    let clean_path = path.replace(['{', '}'], "").replace('/', "_");
    format!(
        "{}_{}",
        method.to_lowercase(),
        clean_path.trim_start_matches('_')
    )
}
