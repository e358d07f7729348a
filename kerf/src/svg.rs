//! SVG document host.
//!
//! Outside a live editor there is no selection, so the caller names
//! selected elements by id. Bounds come from the usvg-resolved tree; the
//! path element is inserted by streaming the raw XML through quick-xml,
//! which leaves everything else in the document byte-for-byte alone.

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesStart, Event};

use crate::host::{HostError, HostSink, PathStyle};

/// Errors from parsing or rewriting the hosting SVG document.
#[derive(Debug)]
pub enum SvgError {
    Parse(String),
    ElementNotFound(String),
    Xml(String),
}

impl std::fmt::Display for SvgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SvgError::Parse(msg) => write!(f, "SVG parse error: {}", msg),
            SvgError::ElementNotFound(id) => write!(f, "no element with id '{}'", id),
            SvgError::Xml(msg) => write!(f, "XML rewrite error: {}", msg),
        }
    }
}

impl std::error::Error for SvgError {}

impl From<SvgError> for HostError {
    fn from(e: SvgError) -> Self {
        HostError::Backend(e.to_string())
    }
}

/// An SVG document acting as the lattice host.
pub struct SvgDocument {
    content: String,
    tree: usvg::Tree,
    selected: Vec<String>,
}

impl SvgDocument {
    /// Parse a document. Fails up front on malformed SVG so a later
    /// insert cannot half-mutate a broken file.
    pub fn parse(content: &str) -> Result<Self, SvgError> {
        let options = usvg::Options::default();
        let tree = usvg::Tree::from_str(content, &options)
            .map_err(|e| SvgError::Parse(e.to_string()))?;
        Ok(Self {
            content: content.to_string(),
            tree,
            selected: Vec::new(),
        })
    }

    /// Mark an element id as selected. May be called repeatedly; selecting
    /// more than one element makes `selection_size` abort, matching the
    /// editor behavior this models.
    pub fn select(&mut self, id: &str) {
        self.selected.push(id.to_string());
    }

    /// The (possibly rewritten) document text.
    pub fn into_string(self) -> String {
        self.content
    }

    fn element_size(&self, id: &str) -> Result<(f64, f64), SvgError> {
        node_size(self.tree.root(), id).ok_or_else(|| SvgError::ElementNotFound(id.to_string()))
    }
}

/// Recursively look up an element's size by id.
///
/// Sizes come from the absolute bounding boxes of the resolved tree, so an
/// element's own `transform` (and any inherited from ancestor groups) is
/// already applied.
fn node_size(group: &usvg::Group, id: &str) -> Option<(f64, f64)> {
    for child in group.children() {
        match child {
            usvg::Node::Group(g) => {
                if g.id() == id {
                    let bounds = g.abs_bounding_box();
                    return Some((bounds.width() as f64, bounds.height() as f64));
                }
                if let Some(size) = node_size(g, id) {
                    return Some(size);
                }
            }
            usvg::Node::Path(path) => {
                if path.id() == id {
                    let bounds = path.abs_bounding_box();
                    return Some((bounds.width() as f64, bounds.height() as f64));
                }
            }
            _ => {}
        }
    }
    None
}

impl HostSink for SvgDocument {
    fn selection_size(&self) -> Result<Option<(f64, f64)>, HostError> {
        match self.selected.as_slice() {
            [] => Ok(None),
            [id] => Ok(Some(self.element_size(id)?)),
            more => Err(HostError::MultipleSelection(more.len())),
        }
    }

    fn insert_path(&mut self, d: &str, style: &PathStyle, label: &str) -> Result<(), HostError> {
        let css = style.to_css();
        let mut reader = Reader::from_str(&self.content);
        let mut writer = Writer::new(Vec::new());
        let mut svg_depth = 0usize;
        let mut inserted = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    if e.name().as_ref() == b"svg" {
                        svg_depth += 1;
                    }
                    writer
                        .write_event(Event::Start(e))
                        .map_err(|e| SvgError::Xml(e.to_string()))?;
                }
                Ok(Event::End(e)) => {
                    // Append the path just before the outermost </svg>.
                    if e.name().as_ref() == b"svg" && svg_depth == 1 && !inserted {
                        let mut elem = BytesStart::new("path");
                        elem.push_attribute(("style", css.as_str()));
                        elem.push_attribute(("inkscape:label", label));
                        elem.push_attribute(("d", d));
                        writer
                            .write_event(Event::Empty(elem))
                            .map_err(|e| SvgError::Xml(e.to_string()))?;
                        inserted = true;
                    }
                    if e.name().as_ref() == b"svg" {
                        svg_depth = svg_depth.saturating_sub(1);
                    }
                    writer
                        .write_event(Event::End(e))
                        .map_err(|e| SvgError::Xml(e.to_string()))?;
                }
                Ok(Event::Eof) => break,
                Ok(event) => {
                    writer
                        .write_event(event)
                        .map_err(|e| SvgError::Xml(e.to_string()))?;
                }
                Err(e) => {
                    return Err(SvgError::Xml(format!(
                        "at position {}: {}",
                        reader.error_position(),
                        e
                    ))
                    .into());
                }
            }
        }

        if !inserted {
            return Err(SvgError::Xml("document has no closing </svg>".to_string()).into());
        }

        self.content = String::from_utf8(writer.into_inner())
            .map_err(|e| SvgError::Xml(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 100">
  <rect id="panel" x="10" y="20" width="120" height="60"/>
  <g id="frame">
    <rect x="0" y="0" width="200" height="10"/>
    <rect x="0" y="90" width="200" height="10"/>
  </g>
</svg>"#;

    #[test]
    fn no_selection_means_no_override() {
        let doc = SvgDocument::parse(DOC).unwrap();
        assert_eq!(doc.selection_size().unwrap(), None);
    }

    #[test]
    fn selected_element_reports_its_size() {
        let mut doc = SvgDocument::parse(DOC).unwrap();
        doc.select("panel");
        let (width, height) = doc.selection_size().unwrap().unwrap();
        assert!((width - 120.0).abs() < 1e-6);
        assert!((height - 60.0).abs() < 1e-6);
    }

    #[test]
    fn selected_group_unions_its_children() {
        let mut doc = SvgDocument::parse(DOC).unwrap();
        doc.select("frame");
        let (width, height) = doc.selection_size().unwrap().unwrap();
        assert!((width - 200.0).abs() < 1e-6);
        assert!((height - 100.0).abs() < 1e-6);
    }

    #[test]
    fn selected_element_size_applies_transforms() {
        let doc_with_transform = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 100">
  <rect id="scaled" x="0" y="0" width="10" height="5" transform="scale(2)"/>
  <g transform="translate(50 0) scale(3)">
    <rect id="nested" x="0" y="0" width="10" height="5"/>
  </g>
</svg>"#;

        let mut doc = SvgDocument::parse(doc_with_transform).unwrap();
        doc.select("scaled");
        let (width, height) = doc.selection_size().unwrap().unwrap();
        assert!((width - 20.0).abs() < 1e-6, "width: got {}, want 20", width);
        assert!((height - 10.0).abs() < 1e-6, "height: got {}, want 10", height);

        let mut doc = SvgDocument::parse(doc_with_transform).unwrap();
        doc.select("nested");
        let (width, height) = doc.selection_size().unwrap().unwrap();
        assert!((width - 30.0).abs() < 1e-6, "width: got {}, want 30", width);
        assert!((height - 15.0).abs() < 1e-6, "height: got {}, want 15", height);
    }

    #[test]
    fn unknown_id_is_an_error() {
        let mut doc = SvgDocument::parse(DOC).unwrap();
        doc.select("missing");
        let err = doc.selection_size().unwrap_err();
        assert!(matches!(err, HostError::Backend(_)));
    }

    #[test]
    fn two_selections_abort() {
        let mut doc = SvgDocument::parse(DOC).unwrap();
        doc.select("panel");
        doc.select("frame");
        assert_eq!(
            doc.selection_size().unwrap_err(),
            HostError::MultipleSelection(2)
        );
    }

    #[test]
    fn insert_appends_path_before_svg_close() {
        let mut doc = SvgDocument::parse(DOC).unwrap();
        let style = PathStyle::cut_line(2.0);
        doc.insert_path("M 0.0000,0.0000 h 20.0000", &style, "lattice")
            .unwrap();

        let out = doc.into_string();
        let path_pos = out.find("<path").expect("path element present");
        let close_pos = out.rfind("</svg>").unwrap();
        assert!(path_pos < close_pos);
        assert!(out.contains(r#"d="M 0.0000,0.0000 h 20.0000""#));
        assert!(out.contains(r#"style="stroke:#ff0000;stroke-width:2;fill:none""#));
        assert!(out.contains(r#"inkscape:label="lattice""#));
        // Existing content survives the rewrite.
        assert!(out.contains(r#"id="panel""#));
    }

    #[test]
    fn malformed_document_fails_at_parse() {
        assert!(SvgDocument::parse("<svg><unclosed").is_err());
    }
}
