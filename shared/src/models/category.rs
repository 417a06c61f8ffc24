//! Category Model

/// Static category table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: &'static str,
    /// Display icon path, served from the asset base
    pub icon: &'static str,
}

/// Icon path and display name resolved for a category id
///
/// Both members are absent when the id is unknown; callers render that as
/// an "unknown category" rather than treating it as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryInfo {
    pub icon: Option<&'static str>,
    pub name: Option<&'static str>,
}
