//! Plain-text and Markdown exports of a [`ResultModel`].
//!
//! All three serializers read through [`ResultModel::resolved`], are pure and
//! produce byte-identical output for the same input.

use crate::result::{ResolvedNote, ResultModel};

const SCRIPT_RULE_WIDTH: usize = 40;
const FILENAME_FALLBACK: &str = "podcast-episode";

/// Which text an export action puts on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Script,
    Notes,
}

pub fn build_markdown(result: &ResultModel) -> String {
    let script = result.resolved();
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# {}", script.title));
    lines.push(String::new());
    lines.push("## Intro".to_string());
    lines.push(script.intro.to_string());
    lines.push(String::new());

    lines.push("## Segments".to_string());
    for (index, segment) in script.segments.iter().enumerate() {
        lines.push(format!("### {}. {}", index + 1, segment.heading));
        lines.push(segment.content.to_string());
        lines.push(String::new());
    }

    lines.push("## Outro".to_string());
    lines.push(script.outro.to_string());
    lines.push(String::new());

    lines.push("## Show Notes".to_string());
    for note in &script.show_notes {
        match note.time {
            Some(time) => lines.push(format!("- **[{time}]** {}", note.note)),
            None => lines.push(format!("- {}", note.note)),
        }
    }
    lines.push(String::new());

    lines.join("\n")
}

pub fn build_plain_script(result: &ResultModel) -> String {
    let script = result.resolved();
    let mut lines: Vec<String> = Vec::new();

    lines.push(script.title.to_string());
    lines.push("=".repeat(SCRIPT_RULE_WIDTH));
    lines.push(String::new());
    lines.push("INTRO:".to_string());
    lines.push(script.intro.to_string());
    lines.push(String::new());

    for (index, segment) in script.segments.iter().enumerate() {
        lines.push(format!("SEGMENT {}: {}", index + 1, segment.heading));
        lines.push(segment.content.to_string());
        lines.push(String::new());
    }

    lines.push("OUTRO:".to_string());
    lines.push(script.outro.to_string());
    lines.push(String::new());

    lines.join("\n")
}

pub fn build_plain_notes(result: &ResultModel) -> String {
    result
        .resolved()
        .show_notes
        .iter()
        .map(plain_note_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn plain_note_line(note: &ResolvedNote<'_>) -> String {
    match note.time {
        Some(time) => format!("[{time}] {}", note.note),
        None => note.note.to_string(),
    }
}

/// `{slug(title)}.md`, where every run of characters outside `[a-z0-9-]`
/// in the lower-cased title collapses to one hyphen.
pub fn markdown_filename(result: &ResultModel) -> String {
    let title = result
        .title
        .as_deref()
        .filter(|title| !title.is_empty())
        .unwrap_or(FILENAME_FALLBACK);
    format!("{}.md", slugify(title))
}

fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_run = false;
    for c in lowered.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            slug.push(c);
            in_run = false;
        } else if !in_run {
            slug.push('-');
            in_run = true;
        }
    }
    slug
}
