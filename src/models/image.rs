/// Logical image flavor requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageCategory {
    Nature,
    Random,
}

impl ImageCategory {
    /// Parse the `type` query parameter. Missing or unrecognized values
    /// fall back to `Random`.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("nature") => ImageCategory::Nature,
            _ => ImageCategory::Random,
        }
    }
}
