//! Cosmetic share links.
//!
//! Links are derived from the item id alone. Nothing serves them; they exist so the share
//! action has something to copy.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::model::ItemId;

/// Fixed prefix of every generated link.
pub const SHARE_LINK_PREFIX: &str = "https://drive.example/share/";
/// Length of the token appended to [`SHARE_LINK_PREFIX`].
pub const SHARE_TOKEN_LEN: usize = 16;

/// Derives the share token: base64 of the id, alphanumerics only, truncated.
pub fn share_token(id: &ItemId) -> String {
    STANDARD
        .encode(id.as_str())
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(SHARE_TOKEN_LEN)
        .collect()
}

/// Builds the share link for an item.
pub fn share_link(id: &ItemId) -> String {
    format!("{SHARE_LINK_PREFIX}{}", share_token(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_is_a_pure_function_of_the_id() {
        let id = ItemId::new("3f2c8a1e-7b9d-4c55-a2e1-0d6f4b8c9e10");
        assert_eq!(share_link(&id), share_link(&id.clone()));
        assert!(share_link(&id).starts_with(SHARE_LINK_PREFIX));
    }

    #[test]
    fn token_strips_padding_and_symbols_then_truncates() {
        // base64("ab?") == "YWI/"
        assert_eq!(share_token(&ItemId::new("ab?")), "YWI");
        let long = share_token(&ItemId::generate());
        assert_eq!(long.len(), SHARE_TOKEN_LEN);
        assert!(long.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn distinct_ids_get_distinct_links() {
        let a = ItemId::new("3f2c8a1e-7b9d-4c55-a2e1-0d6f4b8c9e10");
        let b = ItemId::new("9b1d0c2e-1111-4c55-a2e1-0d6f4b8c9e10");
        assert_ne!(share_link(&a), share_link(&b));
    }
}
