// ABOUTME: Container image reference parsing and validation.
// ABOUTME: Handles the name and name:tag formats the daemon slice addresses.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseImageRefError {
    #[error("image reference cannot be empty")]
    Empty,

    #[error("invalid character in image reference: {0}")]
    InvalidChar(char),

    #[error("image reference has an empty tag: {0}")]
    EmptyTag(String),
}

/// A parsed `name[:tag]` image reference.
///
/// The daemon endpoints this client exercises address images by name and tag
/// only, so there is no registry or digest component. A missing tag defaults
/// to `latest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    name: String,
    tag: String,
}

impl ImageRef {
    pub fn parse(input: &str) -> Result<Self, ParseImageRefError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseImageRefError::Empty);
        }

        for c in input.chars() {
            if !c.is_ascii_alphanumeric()
                && c != '/'
                && c != ':'
                && c != '.'
                && c != '-'
                && c != '_'
            {
                return Err(ParseImageRefError::InvalidChar(c));
            }
        }

        let (name, tag) = match input.rsplit_once(':') {
            Some((_, tag)) if tag.is_empty() => {
                return Err(ParseImageRefError::EmptyTag(input.to_string()));
            }
            // A colon inside a path component is a registry port, not a tag.
            Some((name, tag)) if !tag.contains('/') => (name.to_string(), tag.to_string()),
            _ => (input.to_string(), "latest".to_string()),
        };

        if name.is_empty() {
            return Err(ParseImageRefError::Empty);
        }

        Ok(Self { name, tag })
    }

    /// Build a reference from separately supplied name and tag.
    pub fn with_tag(name: &str, tag: &str) -> Result<Self, ParseImageRefError> {
        Self::parse(&format!("{name}:{tag}"))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.tag)
    }
}

impl std::str::FromStr for ImageRef {
    type Err = ParseImageRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
