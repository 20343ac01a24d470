use serde::{Serialize, Serializer};

use crate::domain::AppError;

/// Identifier assigned to a template by the remote service.
///
/// Opaque apart from two guarantees: it is non-empty, and it is not `.` or
/// `..` (those would collapse when used as a URL path segment). Any other
/// character is allowed; the gateway percent-encodes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateId(String);

impl TemplateId {
    /// Validate and create a new instance.
    pub fn new(id: &str) -> Result<Self, AppError> {
        if id.is_empty() || id == "." || id == ".." {
            return Err(AppError::InvalidTemplateId(id.to_string()));
        }
        Ok(Self(id.to_string()))
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for TemplateId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for TemplateId {
    fn as_ref(&self) -> &str {
        self
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<TemplateId> for String {
    fn from(val: TemplateId) -> Self {
        val.0
    }
}

impl Serialize for TemplateId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
