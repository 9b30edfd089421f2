//! Streaming walk over a TRX document.
//!
//! Elements are matched by local name so both the namespaced Visual Studio
//! schema and prefix-free fixtures are accepted. Only the pieces the report
//! needs are kept: result attributes, their diagnostic text and the
//! `TestDefinitions/UnitTest` id to name map.

use std::collections::HashMap;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::ParseError;

const ROOT: &str = "TestRun";
const RESULT: &str = "UnitTestResult";
const DEFINITIONS: &str = "TestDefinitions";
const DEFINITION: &str = "UnitTest";

/// Attributes and diagnostic text of one `UnitTestResult`, before any
/// interpretation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawResult {
    pub test_id: Option<String>,
    pub test_name: Option<String>,
    pub outcome: Option<String>,
    pub duration: Option<String>,
    pub start_time: Option<String>,
    /// `Output/ErrorInfo/Message`
    pub error_message: Option<String>,
    /// `Output/ErrorInfo/StackTrace`
    pub stack_trace: Option<String>,
    /// `Output/StdOut`
    pub std_out: Option<String>,
}

#[derive(Debug, Default)]
pub struct RawDocument {
    /// Document order; nested (data-driven) results follow their parent.
    pub results: Vec<RawResult>,
    /// Test definition id to method name.
    pub definitions: HashMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextSlot {
    ErrorMessage,
    StackTrace,
    StdOut,
}

impl TextSlot {
    /// Which slot, if any, an element fills given its parent element.
    fn for_element(name: &str, parent: Option<&str>) -> Option<Self> {
        match (parent?, name) {
            ("ErrorInfo", "Message") => Some(TextSlot::ErrorMessage),
            ("ErrorInfo", "StackTrace") => Some(TextSlot::StackTrace),
            ("Output", "StdOut") => Some(TextSlot::StdOut),
            _ => None,
        }
    }

    fn field<'a>(&self, result: &'a mut RawResult) -> &'a mut Option<String> {
        match self {
            TextSlot::ErrorMessage => &mut result.error_message,
            TextSlot::StackTrace => &mut result.stack_trace,
            TextSlot::StdOut => &mut result.std_out,
        }
    }
}

/// Text being collected for a result until its element closes.
struct Capture {
    result: usize,
    slot: TextSlot,
    depth: usize,
    text: String,
}

#[derive(Default)]
struct Walker {
    doc: RawDocument,
    /// Open element local names.
    path: Vec<String>,
    /// Indexes into `doc.results` of the open `UnitTestResult` elements.
    open_results: Vec<usize>,
    capture: Option<Capture>,
    seen_root: bool,
}

impl Walker {
    fn open(&mut self, element: &BytesStart<'_>, position: usize) -> Result<(), ParseError> {
        let name = local_name(element)?;

        if self.path.is_empty() {
            if self.seen_root || name != ROOT {
                return Err(ParseError::UnexpectedRoot { found: name });
            }
            self.seen_root = true;
        }

        match name.as_str() {
            RESULT => {
                self.doc.results.push(read_result(element, position)?);
                self.open_results.push(self.doc.results.len() - 1);
            }
            DEFINITION if self.path.iter().any(|p| p == DEFINITIONS) => {
                let id = attribute(element, b"id", position)?;
                let test_name = attribute(element, b"name", position)?;
                if let (Some(id), Some(test_name)) = (id, test_name) {
                    self.doc.definitions.entry(id).or_insert(test_name);
                }
            }
            _ => {}
        }

        if self.capture.is_none()
            && let Some(&result) = self.open_results.last()
            && let Some(slot) =
                TextSlot::for_element(&name, self.path.last().map(String::as_str))
            && slot.field(&mut self.doc.results[result]).is_none()
        {
            self.capture = Some(Capture {
                result,
                slot,
                depth: self.path.len(),
                text: String::new(),
            });
        }

        self.path.push(name);
        Ok(())
    }

    fn close(&mut self) {
        let Some(name) = self.path.pop() else {
            return;
        };

        if let Some(capture) = self.capture.take_if(|c| c.depth == self.path.len()) {
            *capture.slot.field(&mut self.doc.results[capture.result]) = Some(capture.text);
        }

        if name == RESULT {
            self.open_results.pop();
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(capture) = self.capture.as_mut() {
            capture.text.push_str(text);
        }
    }
}

/// Walk `document`, failing on malformed XML or a root other than `TestRun`.
pub fn read_document(document: &str) -> Result<RawDocument, ParseError> {
    let document = document.strip_prefix('\u{feff}').unwrap_or(document);
    let mut reader = Reader::from_str(document);
    let mut walker = Walker::default();

    loop {
        let position = reader.buffer_position();
        let event = reader
            .read_event()
            .map_err(|source| ParseError::Xml { position, source })?;

        match event {
            Event::Start(element) => walker.open(&element, position)?,
            Event::Empty(element) => {
                walker.open(&element, position)?;
                walker.close();
            }
            Event::End(_) => walker.close(),
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|source| ParseError::Xml { position, source })?;
                walker.text(&text);
            }
            Event::CData(data) => {
                let data = data.into_inner();
                walker.text(std::str::from_utf8(&data)?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(element) = walker.path.pop() {
        return Err(ParseError::Unclosed { element });
    }
    if !walker.seen_root {
        return Err(ParseError::Empty);
    }

    Ok(walker.doc)
}

fn read_result(element: &BytesStart<'_>, position: usize) -> Result<RawResult, ParseError> {
    Ok(RawResult {
        test_id: attribute(element, b"testId", position)?,
        test_name: attribute(element, b"testName", position)?,
        outcome: attribute(element, b"outcome", position)?,
        duration: attribute(element, b"duration", position)?,
        start_time: attribute(element, b"startTime", position)?,
        ..RawResult::default()
    })
}

fn local_name(element: &BytesStart<'_>) -> Result<String, ParseError> {
    Ok(std::str::from_utf8(element.local_name().as_ref())?.to_string())
}

fn attribute(
    element: &BytesStart<'_>,
    key: &[u8],
    position: usize,
) -> Result<Option<String>, ParseError> {
    for attr in element.attributes() {
        let attr = attr.map_err(|source| ParseError::Attribute { position, source })?;
        if attr.key.local_name().as_ref() == key {
            let value = attr
                .unescape_value()
                .map_err(|source| ParseError::Xml { position, source })?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}
