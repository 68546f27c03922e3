use serde::{Deserialize, Deserializer, Serialize};

/// Title shown when the response carries none.
pub const DEFAULT_TITLE: &str = "Podcast Episode";
/// Heading shown for a segment that carries none.
pub const DEFAULT_SEGMENT_HEADING: &str = "Segment";

/// A generation response as returned by the service.
///
/// Every field except a show note's text is optional on the wire. Readers go
/// through [`ResultModel::resolved`] so the same fallbacks apply everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResultModel {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub segments: Vec<Segment>,
    #[serde(default)]
    pub outro: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub show_notes: Vec<ShowNote>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Segment {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowNote {
    #[serde(default)]
    pub time: Option<String>,
    pub note: String,
}

/// Borrowed view of a [`ResultModel`] with every default already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedScript<'a> {
    pub title: &'a str,
    pub intro: &'a str,
    pub segments: Vec<ResolvedSegment<'a>>,
    pub outro: &'a str,
    pub show_notes: Vec<ResolvedNote<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSegment<'a> {
    pub heading: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedNote<'a> {
    /// `None` when the note has no time or an empty one.
    pub time: Option<&'a str>,
    pub note: &'a str,
}

impl ResultModel {
    /// Applies the per-field defaults. Empty strings count as absent.
    pub fn resolved(&self) -> ResolvedScript<'_> {
        ResolvedScript {
            title: non_empty(self.title.as_deref()).unwrap_or(DEFAULT_TITLE),
            intro: self.intro.as_deref().unwrap_or_default(),
            segments: self
                .segments
                .iter()
                .map(|segment| ResolvedSegment {
                    heading: non_empty(segment.heading.as_deref())
                        .unwrap_or(DEFAULT_SEGMENT_HEADING),
                    content: segment.content.as_deref().unwrap_or_default(),
                })
                .collect(),
            outro: self.outro.as_deref().unwrap_or_default(),
            show_notes: self
                .show_notes
                .iter()
                .map(|note| ResolvedNote {
                    time: non_empty(note.time.as_deref()),
                    note: &note.note,
                })
                .collect(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
