//! Error types for validation failures
//!
//! Failures come in exactly two flavors. An [`Invalid`] failure means the
//! input did not have the expected shape; it carries a description of what
//! was *expected* (never the offending value) and is rewritten by every
//! wrapping layer to build a full sentence path to the bad value. A
//! [`ValidationError::Defect`] is any other error escaping a custom
//! validator; it is a programming error, and no layer ever rewrites or
//! absorbs it.

use std::borrow::Cow;
use std::fmt;

use thiserror::Error;

// ============================================================================
// INVALID
// ============================================================================

/// The payload of an expected validation failure.
///
/// Carries an `assertion` describing what was expected of the input, e.g.
/// `"a number"` or `"an object with attribute 'id', that is a string"`,
/// and optionally the name of the model that raised it.
///
/// Rendering follows the sentence convention:
///
/// ```
/// use remold::foundation::Invalid;
///
/// assert_eq!(Invalid::new("a number").to_string(), "Expected a number.");
/// assert_eq!(
///     Invalid::named("User", "a number").to_string(),
///     "User expected a number.",
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Invalid {
    /// What was expected of the input.
    pub assertion: Cow<'static, str>,
    /// Name of the model that raised the failure, when it has one.
    pub owner: Option<String>,
}

impl Invalid {
    /// Creates an unowned failure from an assertion.
    pub fn new(assertion: impl Into<Cow<'static, str>>) -> Self {
        Self {
            assertion: assertion.into(),
            owner: None,
        }
    }

    /// Creates a failure owned by a named model.
    pub fn named(owner: impl Into<String>, assertion: impl Into<Cow<'static, str>>) -> Self {
        Self {
            assertion: assertion.into(),
            owner: Some(owner.into()),
        }
    }

    /// The assertion as seen from an enclosing wrapper.
    ///
    /// Owned failures fold their owner into the description, so a failing
    /// named model embedded in a larger message reads
    /// `"<owner>, that is <assertion>"`.
    #[must_use]
    pub fn contextual_assertion(&self) -> Cow<'_, str> {
        match &self.owner {
            Some(owner) => Cow::Owned(format!("{owner}, that is {}", self.assertion)),
            None => Cow::Borrowed(self.assertion.as_ref()),
        }
    }
}

impl fmt::Display for Invalid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.owner {
            Some(owner) => write!(f, "{owner} expected {}.", self.assertion),
            None => write!(f, "Expected {}.", self.assertion),
        }
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Error raised by a [`Validate`](crate::foundation::Validate) capability.
///
/// Callers use the two variants to decide between reporting gracefully
/// (`Invalid` is an expected data problem) and crashing (`Defect` is a bug
/// in a custom validator).
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The input did not have the expected shape. Recoverable: reject the
    /// input and report the message.
    #[error("{0}")]
    Invalid(Invalid),

    /// A failure unrelated to input shape escaped a custom validator.
    /// Propagates through every combinator untouched.
    #[error(transparent)]
    Defect(#[from] anyhow::Error),
}

impl ValidationError {
    /// Creates an expected-shape failure.
    pub fn expected(assertion: impl Into<Cow<'static, str>>) -> Self {
        Self::Invalid(Invalid::new(assertion))
    }

    /// Creates a defect from any error value.
    pub fn defect(error: impl Into<anyhow::Error>) -> Self {
        Self::Defect(error.into())
    }

    /// Returns true for an expected-shape failure.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Returns true for a defect.
    #[must_use]
    pub fn is_defect(&self) -> bool {
        matches!(self, Self::Defect(_))
    }

    /// The assertion of an expected failure, if that is what this is.
    #[must_use]
    pub fn assertion(&self) -> Option<&str> {
        match self {
            Self::Invalid(invalid) => Some(invalid.assertion.as_ref()),
            Self::Defect(_) => None,
        }
    }

    /// The message-composition primitive shared by every wrapping layer.
    ///
    /// Rewrites an [`Invalid`] assertion to `"<prefix> <assertion>"`,
    /// folding an owner into the description first (see
    /// [`Invalid::contextual_assertion`]) and clearing it. A `Defect`
    /// passes through untouched.
    #[must_use = "the rewritten error must be propagated"]
    pub fn prefix_assertion(self, prefix: &str) -> Self {
        match self {
            Self::Invalid(invalid) => Self::Invalid(Invalid::new(format!(
                "{prefix} {}",
                invalid.contextual_assertion()
            ))),
            defect @ Self::Defect(_) => defect,
        }
    }

    /// Re-scopes an [`Invalid`] failure to a named owner, replacing any
    /// previous owner and keeping the assertion. A `Defect` passes through
    /// untouched.
    #[must_use = "the rewritten error must be propagated"]
    pub fn with_owner(self, owner: &str) -> Self {
        match self {
            Self::Invalid(invalid) => Self::Invalid(Invalid::named(owner, invalid.assertion)),
            defect @ Self::Defect(_) => defect,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
