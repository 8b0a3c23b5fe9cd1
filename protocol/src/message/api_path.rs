use std::fmt;

/// Endpoint path relative to the API base address.
///
/// Stored as raw segments so caller supplied values (ids, e-mail addresses)
/// are percent-encoded by the transport instead of being spliced into the
/// URL text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiPath {
    segments: Vec<String>,
}

impl ApiPath {
    /// Start a path from a literal such as `"sections"` or `"/universityCourses"`.
    pub fn new(root: &str) -> Self {
        Self {
            segments: root
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Append one segment, kept verbatim even if it contains `/`.
    pub fn segment(mut self, segment: impl ToString) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}
