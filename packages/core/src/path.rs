//! Normalized, rooted asset paths.

use std::fmt;

/// Errors related to path parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A path component contains a character that can never name an asset.
    InvalidComponent {
        component: String,
        position: usize,
        message: String,
    },
    /// The path string is invalid.
    InvalidPath { message: String },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::InvalidComponent {
                component,
                position,
                message,
            } => {
                write!(
                    f,
                    "invalid path component '{}' at position {}: {}",
                    component, position, message
                )
            }
            PathError::InvalidPath { message } => {
                write!(f, "invalid path: {}", message)
            }
        }
    }
}

impl std::error::Error for PathError {}

/// A logical asset path.
///
/// Paths are always rooted and lexically clean: repeated slashes collapse,
/// `.` components vanish, and `..` removes the preceding component (but never
/// climbs above the root). Table keys and lookups both go through
/// [`AssetPath::parse`], so `static//js/./x.js` and `/static/js/x.js` name
/// the same asset.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct AssetPath {
    pub components: Vec<String>,
}

impl AssetPath {
    /// The root path, `/`.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse and normalize a path string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use assetfs_core::AssetPath;
    ///
    /// let path = AssetPath::parse("static/js/../css//site.css").unwrap();
    /// assert_eq!(path.to_string(), "/static/css/site.css");
    ///
    /// // `..` never escapes the root
    /// assert_eq!(AssetPath::parse("/../../etc").unwrap().to_string(), "/etc");
    /// ```
    pub fn parse(s: &str) -> Result<Self, PathError> {
        if s.contains('\0') {
            return Err(PathError::InvalidPath {
                message: format!("path {:?} contains a NUL byte", s),
            });
        }

        let mut components: Vec<String> = Vec::new();
        for component in s.split('/') {
            match component {
                "" | "." => {}
                ".." => {
                    components.pop();
                }
                other => components.push(other.to_string()),
            }
        }

        Ok(AssetPath { components })
    }

    /// Try to create a path from already-split components.
    ///
    /// Unlike [`AssetPath::parse`] this does not resolve anything: each
    /// component must already be a plain name.
    pub fn try_from_components(components: Vec<String>) -> Result<Self, PathError> {
        for (i, component) in components.iter().enumerate() {
            Self::validate_component(component, i)?;
        }
        Ok(AssetPath { components })
    }

    fn validate_component(component: &str, position: usize) -> Result<(), PathError> {
        let message = match component {
            "" => "empty component",
            "." | ".." => "relative component",
            c if c.contains('/') => "component contains a separator",
            c if c.contains('\0') => "component contains a NUL byte",
            _ => return Ok(()),
        };
        Err(PathError::InvalidComponent {
            component: component.to_string(),
            position,
            message: message.to_string(),
        })
    }

    /// Check if this is the root path.
    pub fn is_root(&self) -> bool {
        self.components.is_empty()
    }

    /// Get the number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Iterate over components.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.components.iter()
    }

    /// The last component, or `/` for the root.
    pub fn name(&self) -> &str {
        self.components.last().map(String::as_str).unwrap_or("/")
    }

    /// The parent directory. The root is its own parent.
    #[must_use]
    pub fn parent(&self) -> AssetPath {
        let mut components = self.components.clone();
        components.pop();
        AssetPath { components }
    }

    /// Join this path with another.
    #[must_use]
    pub fn join(&self, other: &AssetPath) -> AssetPath {
        let mut components = self.components.clone();
        components.extend(other.components.iter().cloned());
        AssetPath { components }
    }

    /// Check if this path has the given prefix.
    pub fn has_prefix(&self, prefix: &AssetPath) -> bool {
        prefix.components.len() <= self.components.len()
            && prefix.components == self.components[..prefix.components.len()]
    }

    /// Strip a prefix from this path.
    ///
    /// Returns `None` if the prefix doesn't match.
    #[must_use]
    pub fn strip_prefix(&self, prefix: &AssetPath) -> Option<AssetPath> {
        if self.has_prefix(prefix) {
            Some(AssetPath {
                components: self.components[prefix.components.len()..].to_vec(),
            })
        } else {
            None
        }
    }

    /// Relative form without the leading slash, for joining onto a disk root.
    pub fn to_relative(&self) -> String {
        self.components.join("/")
    }
}

impl fmt::Display for AssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.components.join("/"))
    }
}

impl std::ops::Index<usize> for AssetPath {
    type Output = String;

    fn index(&self, i: usize) -> &Self::Output {
        &self.components[i]
    }
}

impl std::str::FromStr for AssetPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetPath::parse(s)
    }
}

/// Macro for creating paths from literals.
///
/// # Example
///
/// ```rust
/// use assetfs_core::asset_path;
///
/// let p = asset_path!("/static/js/table.js");
/// assert_eq!(p.len(), 3);
/// ```
#[macro_export]
macro_rules! asset_path {
    ($s:expr) => {
        $crate::AssetPath::parse($s).expect("invalid path literal")
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_paths() {
        assert_eq!(AssetPath::parse("").unwrap().len(), 0);
        assert_eq!(AssetPath::parse("/").unwrap().len(), 0);
        assert_eq!(AssetPath::parse("foo").unwrap().len(), 1);
        assert_eq!(AssetPath::parse("/foo/bar").unwrap().len(), 2);
        assert_eq!(AssetPath::parse("/foo/bar/baz.js").unwrap().len(), 3);
    }

    #[test]
    fn normalize_slashes() {
        assert_eq!(asset_path!("/foo/bar/"), asset_path!("/foo/bar"));
        assert_eq!(asset_path!("/foo//bar"), asset_path!("/foo/bar"));
        assert_eq!(asset_path!("foo/bar"), asset_path!("/foo/bar"));
    }

    #[test]
    fn resolves_dot_components() {
        assert_eq!(asset_path!("/foo/./bar"), asset_path!("/foo/bar"));
        assert_eq!(asset_path!("/foo/baz/../bar"), asset_path!("/foo/bar"));
        assert_eq!(asset_path!("/foo/bar/.."), asset_path!("/foo"));
        assert_eq!(asset_path!("./foo"), asset_path!("/foo"));
    }

    #[test]
    fn dot_dot_stops_at_root() {
        assert_eq!(asset_path!("/.."), AssetPath::root());
        assert_eq!(asset_path!("/../../static/a.css"), asset_path!("/static/a.css"));
        assert_eq!(asset_path!("a/../../b"), asset_path!("/b"));
    }

    #[test]
    fn nul_byte_rejected() {
        let err = AssetPath::parse("/foo\0bar").unwrap_err();
        assert!(err.to_string().contains("NUL"));
    }

    #[test]
    fn name_and_parent() {
        let p = asset_path!("/static/js/table.js");
        assert_eq!(p.name(), "table.js");
        assert_eq!(p.parent(), asset_path!("/static/js"));
        assert_eq!(AssetPath::root().name(), "/");
        assert_eq!(AssetPath::root().parent(), AssetPath::root());
    }

    #[test]
    fn has_prefix_works() {
        let p = asset_path!("/foo/bar/baz");
        assert!(p.has_prefix(&AssetPath::root()));
        assert!(p.has_prefix(&asset_path!("/foo")));
        assert!(p.has_prefix(&asset_path!("/foo/bar/baz")));
        assert!(!p.has_prefix(&asset_path!("/bar")));
        assert!(!p.has_prefix(&asset_path!("/foo/bar/baz/qux")));
    }

    #[test]
    fn strip_prefix_works() {
        let p = asset_path!("/foo/bar/baz");
        assert_eq!(p.strip_prefix(&asset_path!("/foo")), Some(asset_path!("/bar/baz")));
        assert_eq!(p.strip_prefix(&asset_path!("/other")), None);
    }

    #[test]
    fn join_method() {
        let joined = asset_path!("/static").join(&asset_path!("/js/table.js"));
        assert_eq!(joined.to_string(), "/static/js/table.js");
        assert_eq!(AssetPath::root().join(&asset_path!("/a")), asset_path!("/a"));
    }

    #[test]
    fn display_is_rooted() {
        assert_eq!(asset_path!("foo/bar").to_string(), "/foo/bar");
        assert_eq!(AssetPath::root().to_string(), "/");
        assert_eq!(asset_path!("foo/bar").to_relative(), "foo/bar");
    }

    #[test]
    fn try_from_components_valid() {
        let p = AssetPath::try_from_components(vec!["static".into(), "a.css".into()]).unwrap();
        assert_eq!(p, asset_path!("/static/a.css"));
    }

    #[test]
    fn try_from_components_rejects_relative() {
        let err = AssetPath::try_from_components(vec!["static".into(), "..".into()]).unwrap_err();
        assert!(matches!(err, PathError::InvalidComponent { position: 1, .. }));

        let err = AssetPath::try_from_components(vec!["".into()]).unwrap_err();
        assert!(err.to_string().contains("empty component"));
    }

    #[test]
    fn from_str_parses() {
        let p: AssetPath = "/a/b".parse().unwrap();
        assert_eq!(p.len(), 2);
        assert_eq!(&p[1], "b");
    }
}
