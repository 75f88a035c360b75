use std::fmt;

/// Resolved form of the polymorphic lookup token.
///
/// A path token is tried as an integer identifier first; only when that
/// parse fails is it treated as a name to match exactly. A record whose
/// name happens to look like a number is therefore unreachable by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonSelector {
    Id(i64),
    Name(String),
}

impl PersonSelector {
    /// Resolves a raw path token into a selector.
    pub fn parse(token: &str) -> Self {
        match token.parse::<i64>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Name(token.to_string()),
        }
    }
}

impl fmt::Display for PersonSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id {id}"),
            Self::Name(name) => write!(f, "name \"{name}\""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_token_parses_as_id() {
        assert_eq!(PersonSelector::parse("42"), PersonSelector::Id(42));
        assert_eq!(PersonSelector::parse("-7"), PersonSelector::Id(-7));
    }

    #[test]
    fn test_non_numeric_token_falls_back_to_name() {
        assert_eq!(
            PersonSelector::parse("Ada"),
            PersonSelector::Name("Ada".to_string())
        );
        // Not a valid i64, so it is a name even though it starts with digits.
        assert_eq!(
            PersonSelector::parse("42abc"),
            PersonSelector::Name("42abc".to_string())
        );
    }

    #[test]
    fn test_overflowing_token_falls_back_to_name() {
        let token = "99999999999999999999999999";
        assert_eq!(
            PersonSelector::parse(token),
            PersonSelector::Name(token.to_string())
        );
    }

    #[test]
    fn test_display_describes_the_key() {
        assert_eq!(PersonSelector::Id(42).to_string(), "id 42");
        assert_eq!(
            PersonSelector::Name("Ada".to_string()).to_string(),
            "name \"Ada\""
        );
    }
}
