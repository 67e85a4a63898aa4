/// How a profile name search interprets its search text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// The name equals the search text.
    Exact,
    /// The name starts with the search text.
    Prefix,
    /// The name ends with the search text.
    Suffix,
    /// The name contains the search text.
    #[default]
    Substring,
}

impl SearchMode {
    /// Builds the `LIKE` pattern for this mode. The search text itself is
    /// escaped, wildcards only come from the mode, so `Exact` degenerates to
    /// string equality.
    pub fn pattern(&self, content: &str) -> String {
        let escaped = escape_like(content);

        match self {
            SearchMode::Exact => escaped,
            SearchMode::Prefix => format!("{escaped}%"),
            SearchMode::Suffix => format!("%{escaped}"),
            SearchMode::Substring => format!("%{escaped}%"),
        }
    }
}

fn escape_like(content: &str) -> String {
    let mut escaped = String::with_capacity(content.len());

    for c in content.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}
