//! Template rendering for role documentation pages.

use std::path::Path;

use indexmap::IndexMap;
use minijinja::Environment;
use serde::Serialize;
use serde_yaml::Value;

use super::schema::{OptionSpec, RoleSpec};
use crate::Result;

const TEMPLATE_NAME: &str = "role_doc.md";
const BUILTIN_TEMPLATE: &str = include_str!("../../templates/role_doc.md.j2");

/// Values exposed to the documentation template.
///
/// Templates see `role_name`, `short_description`, `description`,
/// `author`, `options` (the raw option specs, in file order),
/// `descriptions` (option path to rendered text), `rows` (one escaped
/// table row per option and sub-option) and `playbook`.
#[derive(Debug, Serialize)]
pub struct DocContext<'a> {
    /// Role directory name.
    pub role_name: &'a str,
    /// One-line summary, empty when absent.
    pub short_description: String,
    /// Paragraphs of the long description, blank-line separated.
    pub description: String,
    /// Authors, comma separated.
    pub author: String,
    /// Option specs as parsed.
    pub options: &'a IndexMap<String, OptionSpec>,
    /// Rendered option descriptions.
    pub descriptions: IndexMap<String, String>,
    /// Variables table, sub-options following their parent.
    pub rows: Vec<OptionRow>,
    /// Example playbook source.
    pub playbook: &'a str,
}

impl<'a> DocContext<'a> {
    /// Build the template context for one role.
    #[must_use]
    pub fn new(role_name: &'a str, spec: &'a RoleSpec, playbook: &'a str) -> Self {
        Self {
            role_name,
            short_description: spec.short_description.clone().unwrap_or_default(),
            description: spec
                .description
                .as_ref()
                .map(|d| d.joined("\n\n"))
                .unwrap_or_default(),
            author: spec
                .author
                .as_ref()
                .map(|a| a.joined(", "))
                .unwrap_or_default(),
            options: &spec.options,
            descriptions: render_option_descriptions(spec),
            rows: option_rows(spec),
            playbook,
        }
    }
}

/// One line of the variables table. Every text field is already escaped
/// for use inside a Markdown table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionRow {
    /// Dotted path, `users.name` for sub-option `name` of `users`.
    pub name: String,
    /// Nesting level, 0 for top-level options.
    pub depth: usize,
    /// Declared type, `str` when absent, with `of <elements>` for lists.
    pub kind: String,
    /// Whether the variable must be set.
    pub required: bool,
    /// Inline default value, empty when there is none.
    pub default: String,
    /// Description followed by the allowed choices, if any.
    pub description: String,
}

/// Escape `text` for a Markdown table cell.
///
/// # Examples
///
/// ```
/// assert_eq!(rolekit::docs::escape_cell("a|b\nc"), r"a\|b c");
/// ```
#[must_use]
pub fn escape_cell(text: &str) -> String {
    text.replace('\n', " ").replace('|', r"\|")
}

/// Render each option description as a single Markdown table cell.
///
/// List descriptions are joined with spaces and pipe characters escaped.
/// Sub-options are keyed by their dotted path. Options without a
/// description map to an empty string.
///
/// # Examples
///
/// ```
/// use rolekit::docs::render_option_descriptions;
/// use rolekit::RoleSpec;
///
/// let spec: RoleSpec = serde_yaml::from_str(
///     "options:\n  mode:\n    description:\n      - Either a|b.\n      - Defaults to a.\n",
/// )
/// .unwrap();
/// let rendered = render_option_descriptions(&spec);
/// assert_eq!(rendered["mode"], r"Either a\|b. Defaults to a.");
/// ```
#[must_use]
pub fn render_option_descriptions(spec: &RoleSpec) -> IndexMap<String, String> {
    walk_options(&spec.options)
        .into_iter()
        .map(|(path, option)| (path.join("."), describe(option)))
        .collect()
}

/// Flatten the options of `spec` into table rows, parents first.
#[must_use]
pub fn option_rows(spec: &RoleSpec) -> Vec<OptionRow> {
    walk_options(&spec.options)
        .into_iter()
        .map(|(path, option)| {
            let mut description = describe(option);
            if let Some(choices) = option.choices.as_ref().filter(|c| !c.is_empty()) {
                let listed = choices.iter().map(inline_value).collect::<Vec<_>>();
                if !description.is_empty() {
                    description.push(' ');
                }
                description.push_str(&format!("Choices: {}.", escape_cell(&listed.join(", "))));
            }

            let mut kind = option.kind.clone().unwrap_or_else(|| "str".to_string());
            if let Some(elements) = &option.elements {
                kind = format!("{kind} of {elements}");
            }

            OptionRow {
                depth: path.len() - 1,
                name: escape_cell(&path.join(".")),
                kind: escape_cell(&kind),
                required: option.required,
                default: option
                    .default
                    .as_ref()
                    .filter(|v| !v.is_null())
                    .map(|v| escape_cell(&inline_value(v)))
                    .unwrap_or_default(),
                description,
            }
        })
        .collect()
}

fn describe(option: &OptionSpec) -> String {
    option
        .description
        .as_ref()
        .map(|d| escape_cell(&d.joined(" ")))
        .unwrap_or_default()
}

fn walk_options(options: &IndexMap<String, OptionSpec>) -> Vec<(Vec<&str>, &OptionSpec)> {
    let mut out = Vec::new();
    for (name, option) in options {
        out.push((vec![name.as_str()], option));
        for (mut path, child) in walk_options(&option.options) {
            path.insert(0, name.as_str());
            out.push((path, child));
        }
    }
    out
}

/// Single-line rendering of a YAML value, flow style for collections.
fn inline_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => {
            let items: Vec<_> = items.iter().map(inline_value).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(map) => {
            let entries: Vec<_> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", inline_value(k), inline_value(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        Value::Tagged(tagged) => inline_value(&tagged.value),
    }
}

/// Renders role pages from a Jinja template.
pub struct DocRenderer {
    env: Environment<'static>,
}

impl DocRenderer {
    /// Renderer using the built-in Markdown template.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in template fails to compile.
    pub fn builtin() -> Result<Self> {
        Self::from_source(BUILTIN_TEMPLATE.to_string())
    }

    /// Renderer using the template stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the template has
    /// syntax errors.
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = super::read_file(path)?;
        Self::from_source(source)
    }

    /// Renderer using `source` as the template text.
    ///
    /// # Errors
    ///
    /// Returns an error if the template has syntax errors.
    pub fn from_source(source: String) -> Result<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.add_filter("cell", |text: String| escape_cell(&text));
        env.add_template_owned(TEMPLATE_NAME, source)?;
        Ok(Self { env })
    }

    /// Render the page for one role.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails (for example an undefined filter).
    pub fn render(&self, context: &DocContext<'_>) -> Result<String> {
        let template = self.env.get_template(TEMPLATE_NAME)?;
        Ok(template.render(context)?)
    }
}
