/// Display formatting options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    pub enable_color: bool,
    /// Wrap width for chip rows; `None` means unbounded
    pub width: Option<usize>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            width: None,
        }
    }
}

impl DisplayOptions {
    pub fn plain() -> Self {
        Self {
            enable_color: false,
            width: None,
        }
    }
}
