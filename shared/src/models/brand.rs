//! Brand Model

/// Static brand table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brand {
    pub id: i64,
    pub name: &'static str,
}
