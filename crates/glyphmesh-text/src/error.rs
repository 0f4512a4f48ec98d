/// Errors that can occur in the text layout system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextError {
    /// The new text needs more glyph slots than the block allocated.
    ///
    /// Fatal to the call; the block keeps its previous text, layout, and
    /// vertex contents.
    CapacityExceeded { required: usize, capacity: usize },

    /// The font provider has no glyph for a character and no fallback
    /// glyph was configured.
    MissingGlyph { character: char },
}

impl std::fmt::Display for TextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextError::CapacityExceeded { required, capacity } => write!(
                f,
                "Text requires {} glyph slots but only {} were allocated",
                required, capacity
            ),
            TextError::MissingGlyph { character } => {
                write!(f, "Font has no glyph for character {:?}", character)
            }
        }
    }
}

impl std::error::Error for TextError {}

/// Result type for text operations.
pub type TextResult<T> = Result<T, TextError>;
