//! HTTP method tokens and method sets.
//!
//! Any token made of RFC 9110 `tchar` bytes is a valid method, so
//! `FUNKYTOWN` is as routable as `GET`. Matching is exact: `funkytown`
//! and `FUNKYTOWN` are different methods.

use std::fmt;
use std::str::FromStr;

use crate::routing::RouteError;

/// A validated HTTP method token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MethodName(String);

impl MethodName {
    /// Parse a method token. Case is preserved.
    pub fn parse(token: &str) -> Result<Self, RouteError> {
        if !token.is_empty() && token.bytes().all(is_tchar) {
            Ok(Self(token.to_string()))
        } else {
            Err(RouteError::InvalidMethod(token.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for MethodName {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MethodName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for MethodName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

fn is_tchar(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.' | b'^' | b'_'
                | b'`' | b'|' | b'~'
        )
}

/// The methods a route accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodSet {
    /// Every method, including tokens nobody registered.
    Any,
    /// Only the listed methods, in registration order.
    Only(Vec<MethodName>),
}

impl MethodSet {
    /// Build a set from method tokens. Repeated tokens collapse into one.
    pub fn only<I, S>(methods: I) -> Result<Self, RouteError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<MethodName> = Vec::new();
        for method in methods {
            let name = MethodName::parse(method.as_ref())?;
            if !names.contains(&name) {
                names.push(name);
            }
        }
        Ok(Self::Only(names))
    }

    pub fn contains(&self, method: &str) -> bool {
        match self {
            MethodSet::Any => true,
            MethodSet::Only(names) => names.iter().any(|name| name == method),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, MethodSet::Any)
    }

    /// Explicitly listed methods. Empty for `Any`.
    pub fn methods(&self) -> &[MethodName] {
        match self {
            MethodSet::Any => &[],
            MethodSet::Only(names) => names,
        }
    }

    /// Value for an `Allow` header, or `None` when the set is unbounded.
    pub fn allow_header(&self) -> Option<String> {
        match self {
            MethodSet::Any => None,
            MethodSet::Only(names) => Some(
                names
                    .iter()
                    .map(MethodName::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        }
    }
}
