//! WordprocessingML extraction.
//!
//! Walks `word/document.xml` and emits the small HTML rendition that the
//! Markdown transducer understands: paragraphs, heading styles,
//! bold/italic runs, line breaks, tables, and list paragraphs. Constructs
//! outside that set (embedded images, mostly) are skipped and recorded as
//! warnings instead of failing the conversion.

use std::fmt::Write;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::DocxError;

/// HTML rendition of a document body plus extraction warnings.
pub(crate) struct ExtractedHtml {
    pub(crate) html: String,
    pub(crate) warnings: Vec<String>,
}

/// Walk the document XML and emit HTML.
pub(crate) fn document_html(xml: &str) -> Result<ExtractedHtml, DocxError> {
    let mut reader = Reader::from_str(xml);
    let mut state = Extractor::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => state.on_start(&e),
            Event::Empty(e) => state.on_marker(e.local_name().as_ref(), &e),
            Event::End(e) => state.on_end(e.local_name().as_ref()),
            Event::Text(t) => state.on_text(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(state.finish())
}

/// Streaming state for one pass over the document body.
#[derive(Default)]
struct Extractor {
    html: String,
    warnings: Vec<String>,
    /// Content accumulated for the paragraph currently being read.
    para: String,
    para_style: Option<String>,
    para_in_list: bool,
    list_open: bool,
    table_depth: usize,
    cell_paragraphs: usize,
    bold: bool,
    italic: bool,
    in_run_props: bool,
    in_text: bool,
    images_skipped: usize,
}

impl Extractor {
    fn on_start(&mut self, e: &BytesStart<'_>) {
        match e.local_name().as_ref() {
            b"p" => self.begin_paragraph(),
            b"r" => {
                self.bold = false;
                self.italic = false;
            }
            b"rPr" => self.in_run_props = true,
            b"t" => self.in_text = true,
            b"tbl" => {
                self.close_list();
                self.html.push_str("<table>");
                self.table_depth += 1;
            }
            b"tr" => self.html.push_str("<tr>"),
            b"tc" => {
                self.html.push_str("<td>");
                self.cell_paragraphs = 0;
            }
            other => self.on_marker(other, e),
        }
    }

    /// Property and leaf elements; these usually arrive as empty tags.
    fn on_marker(&mut self, name: &[u8], e: &BytesStart<'_>) {
        match name {
            b"pStyle" => self.para_style = attr_val(e),
            b"numPr" => self.para_in_list = true,
            b"b" if self.in_run_props => self.bold = !is_off(e),
            b"i" if self.in_run_props => self.italic = !is_off(e),
            b"br" => self.para.push_str("<br/>"),
            b"tab" => self.para.push('\t'),
            b"drawing" | b"pict" => self.images_skipped += 1,
            _ => {}
        }
    }

    fn on_end(&mut self, name: &[u8]) {
        match name {
            b"p" => self.end_paragraph(),
            b"rPr" => self.in_run_props = false,
            b"t" => self.in_text = false,
            b"tbl" => {
                self.html.push_str("</table>");
                self.table_depth = self.table_depth.saturating_sub(1);
            }
            b"tr" => self.html.push_str("</tr>"),
            b"tc" => self.html.push_str("</td>"),
            _ => {}
        }
    }

    fn on_text(&mut self, text: &str) {
        if !self.in_text {
            // Whitespace between elements, not document content.
            return;
        }
        let escaped = escape_html(text);
        match (self.bold, self.italic) {
            (true, true) => write!(self.para, "<strong><em>{escaped}</em></strong>").unwrap(),
            (true, false) => write!(self.para, "<strong>{escaped}</strong>").unwrap(),
            (false, true) => write!(self.para, "<em>{escaped}</em>").unwrap(),
            (false, false) => self.para.push_str(&escaped),
        }
    }

    fn begin_paragraph(&mut self) {
        self.para.clear();
        self.para_style = None;
        self.para_in_list = false;
    }

    fn end_paragraph(&mut self) {
        let content = std::mem::take(&mut self.para);

        // Table cells collect their paragraphs inline: block tags inside
        // a cell would break the Markdown table the transducer emits.
        if self.table_depth > 0 {
            if !content.is_empty() {
                if self.cell_paragraphs > 0 {
                    self.html.push(' ');
                }
                self.html.push_str(&content);
                self.cell_paragraphs += 1;
            }
            return;
        }

        if content.is_empty() {
            self.close_list();
            return;
        }

        if let Some(level) = self.heading_level() {
            self.close_list();
            write!(self.html, "<h{level}>{content}</h{level}>").unwrap();
        } else if self.para_in_list {
            if !self.list_open {
                self.html.push_str("<ul>");
                self.list_open = true;
            }
            write!(self.html, "<li>{content}</li>").unwrap();
        } else {
            self.close_list();
            write!(self.html, "<p>{content}</p>").unwrap();
        }
    }

    /// Heading level from the paragraph style, if it names one.
    fn heading_level(&self) -> Option<u8> {
        let style = self.para_style.as_deref()?;
        if style.eq_ignore_ascii_case("Title") {
            return Some(1);
        }
        let digits = style
            .strip_prefix("Heading")
            .or_else(|| style.strip_prefix("heading"))?;
        let level: u8 = digits.parse().ok()?;
        (1..=6).contains(&level).then_some(level)
    }

    fn close_list(&mut self) {
        if self.list_open {
            self.html.push_str("</ul>");
            self.list_open = false;
        }
    }

    fn finish(mut self) -> ExtractedHtml {
        self.close_list();
        if self.images_skipped > 0 {
            self.warnings.push(format!(
                "skipped {} embedded image(s)",
                self.images_skipped
            ));
        }
        ExtractedHtml {
            html: self.html,
            warnings: self.warnings,
        }
    }
}

/// Value of the `w:val` attribute, if present.
fn attr_val(e: &BytesStart<'_>) -> Option<String> {
    let attr = e
        .try_get_attribute("w:val")
        .ok()
        .flatten()
        .or_else(|| e.try_get_attribute("val").ok().flatten())?;
    Some(String::from_utf8_lossy(&attr.value).into_owned())
}

/// Run properties like `<w:b/>` may carry an explicit off value.
fn is_off(e: &BytesStart<'_>) -> bool {
    matches!(attr_val(e).as_deref(), Some("false" | "0" | "none"))
}

/// Escape text content for embedding in the intermediate HTML.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
