//! Slice name normalization.
//!
//! A [`SliceName`] is the single user-supplied input the generator works
//! from. All derived identifier forms (PascalCase type name, kebab-case
//! route slug, snake_case plural table name) are pure functions of the
//! original input: no other state affects them, and repeated calls always
//! return the same output.
//!
//! ## Validation
//!
//! The name is validated at construction. Anything that would leak into a
//! file path or generated source as something other than an identifier is
//! rejected up front:
//!
//! - empty (or whitespace-only) input
//! - path separators (`/`, `\`) — a `../evil` name must never become a
//!   directory traversal
//! - input with no alphanumeric characters at all

use std::fmt;

use crate::domain::error::DomainError;

/// A validated slice identifier and its derived casing forms.
///
/// ## Derived forms
///
/// | Method     | Example (`"create-order"`) | Used for             |
/// |------------|----------------------------|----------------------|
/// | `pascal()` | `CreateOrder`              | class/namespace name |
/// | `kebab()`  | `create-order`             | route slug           |
/// | `snake()`  | `create_order`             | general identifiers  |
/// | `table()`  | `create_orders`            | storage table name   |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceName {
    raw: String,
    words: Vec<String>,
}

impl SliceName {
    /// Parse and validate a user-supplied name.
    ///
    /// # Errors
    ///
    /// - [`DomainError::EmptyName`] for empty or whitespace-only input
    /// - [`DomainError::PathSeparatorInName`] if the input contains `/` or `\`
    /// - [`DomainError::InvalidName`] if no alphanumeric characters survive
    ///   word splitting
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyName);
        }
        if trimmed.contains('/') || trimmed.contains('\\') {
            return Err(DomainError::PathSeparatorInName {
                name: input.to_string(),
            });
        }

        let words = split_words(trimmed);
        if words.is_empty() || words.iter().all(|w| w.chars().all(|c| !c.is_alphanumeric())) {
            return Err(DomainError::InvalidName {
                name: input.to_string(),
                reason: "no alphanumeric characters".into(),
            });
        }

        Ok(Self {
            raw: trimmed.to_string(),
            words,
        })
    }

    /// The original input, trimmed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// PascalCase form, e.g. `CreateOrder`.
    pub fn pascal(&self) -> String {
        self.words.iter().map(|w| capitalize(w)).collect()
    }

    /// kebab-case form, e.g. `create-order`.
    pub fn kebab(&self) -> String {
        self.words.join("-")
    }

    /// snake_case form, e.g. `create_order`.
    pub fn snake(&self) -> String {
        self.words.join("_")
    }

    /// snake_case plural form, e.g. `create_orders`.
    ///
    /// Only the last word is pluralized, mirroring how the table name for a
    /// `CreateOrder` model is `create_orders`, not `creates_orders`.
    pub fn table(&self) -> String {
        let mut words = self.words.clone();
        if let Some(last) = words.last_mut() {
            *last = pluralize(last);
        }
        words.join("_")
    }
}

impl fmt::Display for SliceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pascal())
    }
}

/// Capitalize the first character of a word (rest unchanged).
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::new();
            // to_uppercase handles Unicode correctly (e.g., "ß" -> "SS")
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Pluralize a single lowercase English word.
///
/// Standard suffix rules, sufficient for the nouns that show up in slice
/// names:
///
/// | Rule                          | Example                  |
/// |-------------------------------|--------------------------|
/// | consonant + `y` → `ies`       | `category` → `categories`|
/// | `s`/`x`/`z`/`ch`/`sh` → `es`  | `box` → `boxes`          |
/// | otherwise append `s`          | `order` → `orders`       |
fn pluralize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix('y') {
        let preceded_by_vowel = stem
            .chars()
            .last()
            .is_some_and(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'));
        if !preceded_by_vowel && !stem.is_empty() {
            return format!("{stem}ies");
        }
    }

    if word.ends_with('s')
        || word.ends_with('x')
        || word.ends_with('z')
        || word.ends_with("ch")
        || word.ends_with("sh")
    {
        return format!("{word}es");
    }

    format!("{word}s")
}

/// Split a string into lowercase words based on casing and separators.
///
/// Word boundaries:
///
/// 1. Explicit separators: `_`, `-`, whitespace
/// 2. camelCase transition: `aB` splits between `a` and `B`
/// 3. Acronym boundary: `HTTPServer` splits between `P` and `S`
///    (detected by the Upper-Upper-Lower pattern)
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    // Peekable allows looking ahead for boundary detection without consuming
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(next) = chars.peek() {
            // camelCase transition: "myApp" -> "my" + "App"
            if c.is_lowercase() && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            // Acronym boundary: "HTTPServer" -> "HTTP" + "Server"
            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── parsing / validation ──────────────────────────────────────────────

    #[test]
    fn empty_name_rejected() {
        assert!(matches!(SliceName::parse(""), Err(DomainError::EmptyName)));
        assert!(matches!(
            SliceName::parse("   "),
            Err(DomainError::EmptyName)
        ));
    }

    #[test]
    fn path_separators_rejected() {
        assert!(matches!(
            SliceName::parse("a/b"),
            Err(DomainError::PathSeparatorInName { .. })
        ));
        assert!(matches!(
            SliceName::parse("..\\up"),
            Err(DomainError::PathSeparatorInName { .. })
        ));
    }

    #[test]
    fn non_identifier_input_rejected() {
        assert!(matches!(
            SliceName::parse("---"),
            Err(DomainError::InvalidName { .. })
        ));
        assert!(matches!(
            SliceName::parse("_ _"),
            Err(DomainError::InvalidName { .. })
        ));
    }

    #[test]
    fn valid_names_pass() {
        for name in &["Order", "create-order", "my_slice", "XMLFeed", "user2"] {
            assert!(SliceName::parse(name).is_ok(), "failed for: {name}");
        }
    }

    // ── derived forms ─────────────────────────────────────────────────────

    #[test]
    fn kebab_input_derivations() {
        let name = SliceName::parse("create-order").unwrap();
        assert_eq!(name.pascal(), "CreateOrder");
        assert_eq!(name.kebab(), "create-order");
        assert_eq!(name.snake(), "create_order");
        assert_eq!(name.table(), "create_orders");
    }

    #[test]
    fn pascal_input_derivations() {
        let name = SliceName::parse("Order").unwrap();
        assert_eq!(name.pascal(), "Order");
        assert_eq!(name.kebab(), "order");
        assert_eq!(name.table(), "orders");
    }

    #[test]
    fn camel_input_derivations() {
        let name = SliceName::parse("shipOrder").unwrap();
        assert_eq!(name.pascal(), "ShipOrder");
        assert_eq!(name.kebab(), "ship-order");
    }

    #[test]
    fn acronym_boundaries() {
        let name = SliceName::parse("HTTPRequest").unwrap();
        assert_eq!(name.pascal(), "HttpRequest");
        assert_eq!(name.kebab(), "http-request");
        assert_eq!(name.table(), "http_requests");
    }

    #[test]
    fn derivations_are_deterministic() {
        let a = SliceName::parse("create-order").unwrap();
        let b = SliceName::parse("create-order").unwrap();
        assert_eq!(a.pascal(), b.pascal());
        assert_eq!(a.kebab(), b.kebab());
        assert_eq!(a.table(), b.table());
        // repeated calls on the same instance are pure
        assert_eq!(a.table(), a.table());
    }

    // ── pluralization ─────────────────────────────────────────────────────

    #[test]
    fn pluralize_regular() {
        assert_eq!(pluralize("order"), "orders");
        assert_eq!(pluralize("user"), "users");
    }

    #[test]
    fn pluralize_consonant_y() {
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("entry"), "entries");
    }

    #[test]
    fn pluralize_vowel_y() {
        assert_eq!(pluralize("day"), "days");
        assert_eq!(pluralize("key"), "keys");
    }

    #[test]
    fn pluralize_sibilants() {
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("status"), "statuses");
        assert_eq!(pluralize("batch"), "batches");
        assert_eq!(pluralize("dish"), "dishes");
    }

    #[test]
    fn table_pluralizes_last_word_only() {
        let name = SliceName::parse("order-item").unwrap();
        assert_eq!(name.table(), "order_items");
    }
}
