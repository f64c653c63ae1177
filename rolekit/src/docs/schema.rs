//! Argument spec schema.
//!
//! Only the parts of `meta/argument_specs.yml` used for documentation are
//! modelled; unknown keys are ignored.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Top level of a role's `meta/argument_specs.yml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArgumentSpecFile {
    /// Entry points by name; documentation uses `main`.
    #[serde(default)]
    pub argument_specs: IndexMap<String, RoleSpec>,
}

/// The `argument_specs.main` section of a role.
///
/// # Examples
///
/// ```
/// use rolekit::RoleSpec;
///
/// let spec: RoleSpec = serde_yaml::from_str(
///     "short_description: Install nginx\noptions:\n  nginx_port:\n    type: int\n    default: 80\n",
/// )
/// .unwrap();
/// assert_eq!(spec.short_description.as_deref(), Some("Install nginx"));
/// assert_eq!(spec.options["nginx_port"].kind.as_deref(), Some("int"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleSpec {
    /// One-line summary.
    #[serde(default)]
    pub short_description: Option<String>,
    /// Longer description, a string or a list of paragraphs.
    #[serde(default)]
    pub description: Option<Description>,
    /// Author or authors.
    #[serde(default)]
    pub author: Option<Description>,
    /// Accepted variables, in file order.
    #[serde(default)]
    pub options: IndexMap<String, OptionSpec>,
}

/// A single role variable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Declared type (`str`, `int`, `list`, ...).
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Whether the variable must be set.
    #[serde(default)]
    pub required: bool,
    /// Default value.
    #[serde(default)]
    pub default: Option<serde_yaml::Value>,
    /// Allowed values.
    #[serde(default)]
    pub choices: Option<Vec<serde_yaml::Value>>,
    /// Element type for lists.
    #[serde(default)]
    pub elements: Option<String>,
    /// Human description, a string or a list of lines.
    #[serde(default)]
    pub description: Option<Description>,
    /// Sub-options for `dict` variables.
    #[serde(default)]
    pub options: IndexMap<String, OptionSpec>,
}

/// Free text that may be written as one string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    /// A single string.
    Text(String),
    /// One entry per line or paragraph.
    Lines(Vec<String>),
}

impl Description {
    /// Join the text with `separator` between list entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use rolekit::docs::Description;
    ///
    /// let text = Description::Lines(vec!["Port to bind.".into(), "Must be free.".into()]);
    /// assert_eq!(text.joined(" "), "Port to bind. Must be free.");
    /// ```
    #[must_use]
    pub fn joined(&self, separator: &str) -> String {
        match self {
            Self::Text(text) => text.trim().to_string(),
            Self::Lines(lines) => lines
                .iter()
                .map(|line| line.trim())
                .collect::<Vec<_>>()
                .join(separator),
        }
    }
}
