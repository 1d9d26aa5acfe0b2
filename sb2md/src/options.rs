use crate::error::ConvertError;

/// Knobs for the unordered list rule
///
/// The defaults reproduce the classic sb2md output: up to three levels of nesting, two spaces
/// of indentation per level.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Deepest leading indentation (in spaces or tabs) still turned into a list item.
    /// Deeper lines are left untouched.
    pub max_list_depth: usize,

    /// String repeated once per nesting level before the `- ` marker
    pub list_indent: String,
}

impl ConvertOptions {
    /// Checks that the options produce well formed list items.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.list_indent.is_empty() {
            return Err(ConvertError::InvalidOption(
                "list_indent must not be empty".to_string(),
            ));
        }
        if !self.list_indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(ConvertError::InvalidOption(format!(
                "list_indent must only contain spaces or tabs, got {:?}",
                self.list_indent
            )));
        }
        Ok(())
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            max_list_depth: 3,
            list_indent: "  ".to_string(),
        }
    }
}
