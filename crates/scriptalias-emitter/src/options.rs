//! Formatting options shared by the writer and the renderers.

use scriptalias_common::NewLineKind;
use serde::{Deserialize, Serialize};

/// Options controlling the text layout of generated aliases.
///
/// The defaults produce four-space indentation, `\n` line endings and fully
/// qualified type names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorOptions {
    /// Spaces per indentation level.
    pub indent_width: u32,
    pub new_line: NewLineKind,
    /// Render well-known `System` types as C# keywords (`System.Int32` → `int`).
    pub use_type_keywords: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            new_line: NewLineKind::LineFeed,
            use_type_keywords: false,
        }
    }
}
