//! TTML and transcript XML cue extraction.
//!
//! Two structural dialects are recognized, probed in this order:
//! - transcript: a `<transcript>` element holding `<text start=".." dur="..">`
//!   entries, as produced by auto-generated video transcripts;
//! - TTML: `<p begin=".." end=".."|dur="..">` paragraphs, taken from the
//!   document `<body>` when one exists and from anywhere otherwise.
//!
//! Element and attribute lookup goes by local name, so namespaced TTML
//! (`xmlns="http://www.w3.org/ns/ttml"`) and bare XML read the same.

use log::trace;
use roxmltree::{Document, Node, NodeType};
use thiserror::Error;

use crate::{
    cue::{Cue, Extraction, SkipReason},
    text,
    time::{parse_generic, TimeSpan},
};

/// Error from TTML/transcript XML cue extraction.
#[derive(Debug, Error)]
pub enum XmlError {
    /// The document is not well-formed XML.
    #[error("invalid or unparseable XML: {0}")]
    Malformed(String),

    /// Well-formed XML, but none of the recognized subtitle structures
    /// are present.
    #[error("no recognizable subtitle content (<p> paragraphs or <transcript>/<text> entries) found in the XML document")]
    NoSubtitleContent,

    /// Document and structure were fine, but not a single cue survived.
    #[error("parsed the XML file successfully, but found no convertible subtitle entries")]
    NoConvertibleCues,
}

/// Which structural dialect the document turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dialect {
    Transcript,
    Ttml,
}

/// Extract the cues of a TTML or transcript XML document.
///
/// Candidates with missing or unparseable timing, non-positive duration or
/// empty text are dropped and recorded in the returned
/// [`Extraction::skipped`] list; they do not abort the extraction.
///
/// # Errors
/// - [`XmlError::Malformed`] if the document does not parse; the payload is
///   the first line of the parser diagnostic.
/// - [`XmlError::NoSubtitleContent`] if no candidate element exists.
/// - [`XmlError::NoConvertibleCues`] if every candidate was dropped.
#[profiling::function]
pub fn extract(content: &str) -> Result<Extraction, XmlError> {
    let doc = Document::parse(content).map_err(|err| {
        let diag = err.to_string();
        XmlError::Malformed(diag.lines().next().unwrap_or_default().to_owned())
    })?;
    let root = doc.root();

    let transcript_texts: Vec<Node> = root
        .descendants()
        .find(|node| is_named(*node, "transcript"))
        .map(|transcript| {
            transcript
                .descendants()
                .filter(|node| is_named(*node, "text"))
                .collect()
        })
        .unwrap_or_default();

    let (dialect, candidates) = if transcript_texts.is_empty() {
        let paragraphs: Vec<Node> = match root.descendants().find(|node| is_named(*node, "body")) {
            Some(body) => body
                .descendants()
                .filter(|node| is_named(*node, "p"))
                .collect(),
            None => root
                .descendants()
                .filter(|node| is_named(*node, "p"))
                .collect(),
        };
        (Dialect::Ttml, paragraphs)
    } else {
        (Dialect::Transcript, transcript_texts)
    };

    if candidates.is_empty() {
        return Err(XmlError::NoSubtitleContent);
    }
    trace!("dialect {dialect:?}, {} candidate elements", candidates.len());

    let mut out = Extraction::default();
    for candidate in candidates {
        extract_candidate(candidate, dialect, &mut out);
    }

    if out.cues.is_empty() {
        return Err(XmlError::NoConvertibleCues);
    }
    Ok(out)
}

fn extract_candidate(node: Node<'_, '_>, dialect: Dialect, out: &mut Extraction) {
    let (start_attr, end_attr, dur_attr, raw_text) = match dialect {
        Dialect::Transcript => (
            attr(node, "start"),
            None,
            attr(node, "dur"),
            text_content(node),
        ),
        Dialect::Ttml => (
            attr(node, "begin"),
            attr(node, "end"),
            attr(node, "dur"),
            child_text(node),
        ),
    };
    let context = format!(
        "<{}> starting at '{}'",
        node.tag_name().name(),
        start_attr.unwrap_or("?")
    );

    let Some(start_attr) = start_attr else {
        out.skip(SkipReason::MissingTiming, &context);
        return;
    };

    let start = parse_generic(start_attr);
    // An explicit end attribute always wins; dur only fills its absence.
    let end = if let Some(end_attr) = end_attr {
        parse_generic(end_attr)
    } else if let Some(dur_attr) = dur_attr {
        match (start, parse_generic(dur_attr)) {
            (Some(start), Some(dur)) => Some(start + dur),
            _ => None,
        }
    } else {
        out.skip(SkipReason::MissingTiming, &context);
        return;
    };

    let span = match (start, end) {
        (Some(start), Some(end)) if end > start => TimeSpan::new(start, end),
        (Some(_), Some(_)) => {
            out.skip(SkipReason::NonPositiveDuration, &context);
            return;
        }
        _ => {
            out.skip(SkipReason::InvalidTiming, &context);
            return;
        }
    };

    let cleaned = text::collapse_whitespace(&raw_text);
    if cleaned.is_empty() {
        out.skip(SkipReason::EmptyText, &context);
        return;
    }
    out.cues.push(Cue {
        span,
        text: cleaned,
    });
}

/// Match an element by local name, ignoring any namespace.
fn is_named(node: Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

/// An attribute value, with present-but-empty treated as absent.
fn attr<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<&'a str> {
    node.attribute(name).filter(|value| !value.is_empty())
}

/// All descendant text of `node`, concatenated in document order.
fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|descendant| descendant.is_text())
        .filter_map(|descendant| descendant.text())
        .collect()
}

/// TTML cue text, built from the immediate children of `node`: text nodes
/// come through verbatim, a `<br>` becomes a newline, and any other element
/// contributes its whole text content inline. Remaining node kinds
/// (comments, processing instructions) contribute nothing.
fn child_text(node: Node<'_, '_>) -> String {
    let mut out = String::new();
    for child in node.children() {
        match child.node_type() {
            NodeType::Text => out.push_str(child.text().unwrap_or("")),
            NodeType::Element if child.tag_name().name().eq_ignore_ascii_case("br") => {
                out.push('\n');
            }
            NodeType::Element => out.push_str(&text_content(child)),
            NodeType::Root | NodeType::Comment | NodeType::PI => {}
        }
    }
    out
}
