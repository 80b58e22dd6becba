//! Request-target parsing: split path and query, percent-decode components.

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::resolve::{append_desc_mode, DescMode};

/// Characters escaped inside one path segment of a `Location` header.
/// Segment and query delimiters are escaped so a name always stays one segment.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'/')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget<'a> {
    pub path: &'a str,
    query: Vec<(String, String)>,
}

impl<'a> RequestTarget<'a> {
    pub fn parse(target: &'a str) -> Self {
        let (path, raw_query) = match target.split_once('?') {
            Some((path, query)) => (path, query),
            None => (target, ""),
        };
        let query = raw_query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_query_component(key), decode_query_component(value))
            })
            .collect();
        RequestTarget { path, query }
    }

    /// First non-empty value for `key`. Empty values count as absent.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, v)| k == key && !v.is_empty())
            .map(|(_, v)| v.as_str())
    }
}

/// Decode a path segment. `+` is literal in paths.
pub fn decode_path_segment(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

/// Decode a form-style query component, where `+` means space.
fn decode_query_component(component: &str) -> String {
    let spaced: Cow<'_, str> = if component.contains('+') {
        Cow::Owned(component.replace('+', " "))
    } else {
        Cow::Borrowed(component)
    };
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Build a header-safe redirect target from unencoded path segments.
pub fn encode_location(segments: &[&str], desc_mode: Option<DescMode>) -> String {
    let mut path = String::new();
    for segment in segments {
        path.push('/');
        path.extend(utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET));
    }
    append_desc_mode(path, desc_mode)
}
