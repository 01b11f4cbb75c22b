//! MPD document inspection
//!
//! A camera clip's MPD document describes its segments with a single
//! `SegmentTemplate` element; this module extracts the three values needed to
//! enumerate them (initialization segment name, `$Number$` media pattern,
//! starting segment number) and rewrites MPD URIs into segment URIs.

use crate::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::Event;

/// Recognized MPD URI file endings, replaced when building segment URIs
pub const URI_FILE_ENDINGS: [&str; 3] = ["clip.mpd", "file.mpd", "live.mpd"];

/// Segment layout of an MPD document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MpdInfo {
    /// Initialization segment name, e.g. `seg_init.mp4`
    pub init_string: String,
    /// Media segment name pattern with a `$Number$` placeholder,
    /// e.g. `seg_$Number$.m4v`
    pub segment_pattern: String,
    /// Number of the first media segment
    pub start_index: u32,
}

impl MpdInfo {
    /// Extract segment layout from an MPD document.
    ///
    /// Reads the first `SegmentTemplate` element; its `initialization` and
    /// `media` attributes are required, `startNumber` defaults to 1.
    pub fn parse(doc: &str) -> Result<Self> {
        let mut reader = Reader::from_str(doc);

        loop {
            match reader.read_event() {
                Ok(Event::Start(element)) | Ok(Event::Empty(element))
                    if element.local_name().as_ref() == b"SegmentTemplate" =>
                {
                    let mut init_string = None;
                    let mut segment_pattern = None;
                    let mut start_index = 1;

                    for attribute in element.attributes() {
                        let attribute = attribute
                            .map_err(|e| Error::mpd(format!("malformed attribute: {e}")))?;
                        let value = attribute
                            .unescape_value()
                            .map_err(|e| Error::mpd(format!("malformed attribute value: {e}")))?;

                        match attribute.key.local_name().as_ref() {
                            b"initialization" => init_string = Some(value.into_owned()),
                            b"media" => segment_pattern = Some(value.into_owned()),
                            b"startNumber" => {
                                start_index = value.parse().map_err(|e| {
                                    Error::mpd(format!("invalid startNumber: {e}"))
                                })?;
                            }
                            _ => {}
                        }
                    }

                    return Ok(Self {
                        init_string: init_string.ok_or_else(|| {
                            Error::mpd("SegmentTemplate missing initialization attribute")
                        })?,
                        segment_pattern: segment_pattern.ok_or_else(|| {
                            Error::mpd("SegmentTemplate missing media attribute")
                        })?,
                        start_index,
                    });
                }
                Ok(Event::Eof) => return Err(Error::mpd("no SegmentTemplate element found")),
                Err(e) => return Err(Error::mpd(format!("malformed document: {e}"))),
                Ok(_) => {}
            }
        }
    }

    /// Name of the media segment at `index` (starting from 0)
    pub fn segment_name(&self, index: u32) -> String {
        self.segment_pattern
            .replace("$Number$", &(index + self.start_index).to_string())
    }
}

/// Rewrite an MPD URI into the URI of a named segment.
///
/// Returns `None` when the URI does not end in one of the recognized MPD
/// file names.
pub fn segment_uri(mpd_uri: &str, segment_name: &str) -> Option<String> {
    URI_FILE_ENDINGS.iter().find_map(|ending| {
        mpd_uri
            .strip_suffix(ending)
            .map(|base| format!("{base}{segment_name}"))
    })
}

/// URI of the media segment at `index` (starting from 0)
pub fn segment_uri_at(info: &MpdInfo, mpd_uri: &str, index: u32) -> Option<String> {
    segment_uri(mpd_uri, &info.segment_name(index))
}
