//! Data model for extracted userscript metadata — format-agnostic.

/// Placeholder values for metadata markers missing from a script.
///
/// Grouped here so the extraction defaults and the report format stay
/// independently adjustable.
pub mod defaults {
    /// Missing `@name` marker.
    pub const NAME: &str = "N/A";
    /// Missing `@description` marker.
    pub const DESCRIPTION: &str = "N/A";
    /// Missing `@author` marker.
    pub const AUTHOR: &str = "N/A";
    /// Label rendered when no download URL could be resolved.
    pub const DOWNLOAD: &str = "N/A";
}

/// Compound suffix identifying a userscript source file.
pub const SCRIPT_SUFFIX: &str = ".user.js";

/// Suffix of the sidecar consulted when a script has no `@downloadURL`.
pub const SIDECAR_SUFFIX: &str = ".options.json";

/// Metadata extracted from a single userscript.
///
/// Text fields are stored MDX-escaped. `download_url` is `None` while
/// unresolved — distinct from the literal "N/A" placeholder, which only
/// exists at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptInfo {
    pub name: String,
    pub description: String,
    pub author: String,
    pub download_url: Option<String>,
}

impl Default for ScriptInfo {
    fn default() -> Self {
        Self {
            name: defaults::NAME.to_string(),
            description: defaults::DESCRIPTION.to_string(),
            author: defaults::AUTHOR.to_string(),
            download_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fields_use_placeholders() {
        let info = ScriptInfo::default();
        assert_eq!(info.name, "N/A");
        assert_eq!(info.description, "N/A");
        assert_eq!(info.author, "N/A");
        assert_eq!(info.download_url, None);
    }
}
