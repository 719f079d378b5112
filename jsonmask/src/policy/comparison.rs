//! Property-name comparison policies.
//!
//! A [`NameComparison`] decides whether a property name in the document equals
//! one of the names the caller asked to mask. Matching is always whole-name
//! equality; policies only differ in how they treat letter case.

// =============================================================================
// NameComparison trait
// =============================================================================

/// Decides whether two property names are equal.
///
/// Implemented by [`CaseSensitivity`] and by any `Fn(&str, &str) -> bool`, so
/// callers can plug in their own rule:
///
/// ```rust
/// use jsonmask::{MaskOptions, Masker, Token};
///
/// // Treat `-` and `_` as interchangeable.
/// let loose = |name: &str, candidate: &str| {
///     name.replace('-', "_").eq_ignore_ascii_case(&candidate.replace('-', "_"))
/// };
/// let masker = Masker::with_options(["api_key"], MaskOptions::new().with_comparison(loose));
/// assert!(masker.should_mask("API-KEY"));
/// ```
pub trait NameComparison {
    /// Returns `true` when `name` and `candidate` are considered equal.
    fn names_equal(&self, name: &str, candidate: &str) -> bool;
}

impl<F> NameComparison for F
where
    F: Fn(&str, &str) -> bool,
{
    fn names_equal(&self, name: &str, candidate: &str) -> bool {
        self(name, candidate)
    }
}

// =============================================================================
// CaseSensitivity - Built-in policies
// =============================================================================

/// Built-in comparison policies.
///
/// The default is [`CaseSensitivity::Insensitive`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CaseSensitivity {
    /// Exact, byte-for-byte equality.
    Sensitive,
    /// Unicode-aware ignore-case equality.
    ///
    /// Both names are lowercased character by character (full Unicode lowercase
    /// mapping) before comparing, so `"PASSWORD"` equals `"password"` and
    /// `"ÄPFEL"` equals `"äpfel"`.
    #[default]
    Insensitive,
    /// ASCII-only ignore-case equality. Non-ASCII characters must match exactly.
    AsciiInsensitive,
}

impl NameComparison for CaseSensitivity {
    fn names_equal(&self, name: &str, candidate: &str) -> bool {
        match self {
            Self::Sensitive => name == candidate,
            Self::Insensitive => unicode_eq_ignore_case(name, candidate),
            Self::AsciiInsensitive => name.eq_ignore_ascii_case(candidate),
        }
    }
}

fn unicode_eq_ignore_case(left: &str, right: &str) -> bool {
    if left == right {
        return true;
    }
    left.chars().flat_map(fold_case).eq(right.chars().flat_map(fold_case))
}

// Upper then lower, so that letters with several lowercase forms (the Greek
// final sigma) fold together.
fn fold_case(ch: char) -> impl Iterator<Item = char> {
    ch.to_uppercase().flat_map(char::to_lowercase)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensitive_requires_exact_case() {
        assert!(CaseSensitivity::Sensitive.names_equal("password", "password"));
        assert!(!CaseSensitivity::Sensitive.names_equal("PASSWORD", "password"));
    }

    #[test]
    fn insensitive_folds_unicode() {
        let policy = CaseSensitivity::Insensitive;
        assert!(policy.names_equal("PASSWORD", "password"));
        assert!(policy.names_equal("ÄPFEL", "äpfel"));
        assert!(policy.names_equal("ΣΟΦΙΑ", "σοφια"));
        assert!(!policy.names_equal("password", "passwords"));
    }

    #[test]
    fn insensitive_folds_final_sigma() {
        let policy = CaseSensitivity::Insensitive;
        assert!(policy.names_equal("ΚΩΔΙΚΟΣ", "κωδικος"));
        assert!(policy.names_equal("κωδικος", "κωδικοσ"));
        assert!(!policy.names_equal("κωδικος", "κωδικα"));
    }

    #[test]
    fn ascii_insensitive_leaves_non_ascii_alone() {
        let policy = CaseSensitivity::AsciiInsensitive;
        assert!(policy.names_equal("Token", "TOKEN"));
        assert!(!policy.names_equal("ÄPFEL", "äpfel"));
    }

    #[test]
    fn default_is_insensitive() {
        assert_eq!(CaseSensitivity::default(), CaseSensitivity::Insensitive);
    }

    #[test]
    fn closures_are_policies() {
        let prefix = |name: &str, candidate: &str| name.starts_with(candidate);
        assert!(prefix.names_equal("password_hash", "password"));
    }
}
