//! Status enumeration for batch operation results

/// Status enum representing the result of one batch item
#[derive(Clone, Debug, PartialEq)]
pub enum Status {
    /// Repository pulled from origin successfully
    Updated,
    /// A remote received all branches successfully
    Pushed,
    /// Repository was skipped (no non-origin remotes configured)
    NoRemotes,
    /// The git invocation for this item failed
    Error,
}

impl Status {
    /// Returns the emoji symbol for this status
    pub fn symbol(&self) -> &str {
        match self {
            Status::Updated | Status::Pushed => "🟢",
            Status::NoRemotes => "🟠",
            Status::Error => "🔴",
        }
    }

    /// Returns the text representation of this status
    pub fn text(&self) -> &str {
        match self {
            Status::Updated => "updated",
            Status::Pushed => "pushed",
            Status::NoRemotes => "skip",
            Status::Error => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_states_are_green() {
        assert_eq!(Status::Updated.symbol(), "🟢");
        assert_eq!(Status::Pushed.symbol(), "🟢");
    }

    #[test]
    fn test_skip_state_is_orange() {
        assert_eq!(Status::NoRemotes.symbol(), "🟠");
        assert_eq!(Status::NoRemotes.text(), "skip");
    }

    #[test]
    fn test_error_state_is_red() {
        assert_eq!(Status::Error.symbol(), "🔴");
        assert_eq!(Status::Error.text(), "failed");
    }
}
