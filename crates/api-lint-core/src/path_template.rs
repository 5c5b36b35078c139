//! Structural analysis of path template strings.
//!
//! A path template like `/shops/{shopId}/branches` is an ordered sequence of
//! `/`-delimited segments, each either a literal resource name or a
//! `{braced}` parameter placeholder. Parsing is deliberately permissive:
//! malformed brace syntax degrades to a literal segment instead of failing,
//! so best-effort documents still lint.

/// One `/`-delimited unit of a path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A fixed segment, e.g. `users`. May be empty for consecutive or
    /// trailing slashes.
    Literal(String),
    /// A `{name}` placeholder, carrying the inner name.
    Parameter(String),
}

impl Segment {
    /// The segment text without delimiters.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Literal(s) | Self::Parameter(s) => s,
        }
    }

    /// Returns `true` for parameter placeholders.
    #[must_use]
    pub fn is_parameter(&self) -> bool {
        matches!(self, Self::Parameter(_))
    }

    /// Returns `true` for literal segments.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

/// A parsed path template: the ordered segment sequence of one path string.
///
/// Constructed on demand with [`PathTemplate::parse`] and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    segments: Vec<Segment>,
}

impl PathTemplate {
    /// Parses a path string into its segment sequence. Never fails.
    ///
    /// Exactly one leading `/` is stripped; the remainder splits on `/`.
    /// Empty segments (consecutive slashes, a trailing slash) are kept as
    /// explicit `Literal("")` entries so position arithmetic over segments
    /// stays faithful to the original string. A segment counts as a
    /// parameter only when fully wrapped in `{`…`}` with a non-empty name;
    /// anything else, including unterminated or empty braces, is a literal.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let rest = path.strip_prefix('/').unwrap_or(path);
        if rest.is_empty() {
            return Self { segments: Vec::new() };
        }
        let segments = rest.split('/').map(classify).collect();
        Self { segments }
    }

    /// The ordered segments, left to right.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` for the root path (`/` or the empty string).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

fn classify(raw: &str) -> Segment {
    if raw.len() > 2 && raw.starts_with('{') && raw.ends_with('}') {
        Segment::Parameter(raw[1..raw.len() - 1].to_string())
    } else {
        Segment::Literal(raw.to_string())
    }
}
