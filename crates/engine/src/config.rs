use derive_builder::Builder;

/// How a records file is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct LoadOptions {
    #[builder(default = "b','")]
    pub delimiter: u8,
    #[builder(default = "true")]
    pub has_headers: bool,
    /// Trim surrounding whitespace from every field.
    #[builder(default)]
    pub trim: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
            trim: false,
        }
    }
}
