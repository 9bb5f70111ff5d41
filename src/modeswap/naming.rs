//! # Naming Convention
//!
//! Resources are tagged with a mode through their names: `component/mode/variant`,
//! e.g. `button/light/primary`. Only the second segment matters to switching; it is
//! compared case-insensitively and with surrounding whitespace ignored, so
//! `card / LIGHT / default` is a light resource.
//!
//! Two revisions of the convention exist in the wild. The current one separates
//! segments with a bare `/`; the older one used ` / `. The separator is therefore
//! configuration (see [`crate::config::SwitchConfig`]) rather than a literal.
//!
//! Malformed names are not errors. A name with fewer than two segments, or whose
//! second segment is not a known mode, simply has no mode.

use crate::model::Mode;

pub const DEFAULT_SEPARATOR: &str = "/";
pub const LEGACY_SEPARATOR: &str = " / ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedName<'a> {
    pub segments: Vec<&'a str>,
    pub mode: Option<Mode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCodec {
    separator: String,
}

impl Default for NameCodec {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

impl NameCodec {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    pub fn legacy() -> Self {
        Self::new(LEGACY_SEPARATOR)
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    fn split<'a>(&self, name: &'a str) -> Vec<&'a str> {
        // An empty separator would split between every character.
        if self.separator.is_empty() {
            return vec![name];
        }
        name.split(self.separator.as_str()).collect()
    }

    pub fn decode<'a>(&self, name: &'a str) -> DecodedName<'a> {
        let segments = self.split(name);
        let mode = segments
            .get(1)
            .and_then(|segment| segment.parse::<Mode>().ok());
        DecodedName { segments, mode }
    }

    pub fn mode_of(&self, name: &str) -> Option<Mode> {
        self.decode(name).mode
    }

    /// Rewrite the mode segment of `name`. Names with fewer than two segments are
    /// returned unchanged.
    pub fn encode(&self, name: &str, mode: Mode) -> String {
        let mut segments = self.split(name);
        if segments.len() < 2 {
            return name.to_string();
        }
        segments[1] = mode.as_str();
        segments.join(&self.separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_replaces_second_segment() {
        let codec = NameCodec::default();
        assert_eq!(
            codec.encode("button/light/primary", Mode::Dark),
            "button/dark/primary"
        );
    }

    #[test]
    fn encode_leaves_single_segment_names_alone() {
        let codec = NameCodec::default();
        assert_eq!(codec.encode("no-slash-name", Mode::Dark), "no-slash-name");
    }

    #[test]
    fn encode_does_not_require_a_mode_segment() {
        let codec = NameCodec::default();
        assert_eq!(codec.encode("icon/outline", Mode::Light), "icon/light");
    }

    #[test]
    fn decode_is_case_and_whitespace_tolerant() {
        let codec = NameCodec::legacy();
        let decoded = codec.decode("card / LIGHT / default");
        assert_eq!(decoded.mode, Some(Mode::Light));
        assert_eq!(decoded.segments, vec!["card", "LIGHT", "default"]);

        // The bare separator still finds the mode, the segments just keep their padding.
        let decoded = NameCodec::default().decode("card / LIGHT / default");
        assert_eq!(decoded.mode, Some(Mode::Light));
        assert_eq!(decoded.segments[1], " LIGHT ");
    }

    #[test]
    fn decode_without_separator_has_no_mode() {
        let codec = NameCodec::default();
        assert_eq!(codec.decode("card-light-default").mode, None);
    }

    #[test]
    fn decode_unknown_mode_segment_has_no_mode() {
        let codec = NameCodec::default();
        let decoded = codec.decode("button/dim/primary");
        assert_eq!(decoded.segments.len(), 3);
        assert_eq!(decoded.mode, None);
    }

    #[test]
    fn legacy_encode_keeps_separator() {
        let codec = NameCodec::legacy();
        assert_eq!(
            codec.encode("card / light / default", Mode::Dark),
            "card / dark / default"
        );
    }

    #[test]
    fn switching_back_restores_the_name() {
        let codec = NameCodec::default();
        let original = "button/light/primary";
        let dark = codec.encode(original, Mode::Dark);
        assert_eq!(codec.mode_of(&dark), Some(Mode::Dark));
        assert_eq!(codec.encode(&dark, Mode::Light), original);
    }

    #[test]
    fn empty_separator_never_splits() {
        let codec = NameCodec::new("");
        assert_eq!(codec.decode("button/light/primary").segments.len(), 1);
        assert_eq!(codec.encode("button/light/primary", Mode::Dark), "button/light/primary");
    }
}
