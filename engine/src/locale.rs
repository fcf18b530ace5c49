//! Localization seam
//!
//! Counter results carry localization keys only. Turning keys into display
//! names belongs to whoever renders them.

use std::borrow::Cow;
use std::collections::HashMap;

/// Maps a localization key to display text
pub trait Translate {
    fn translate<'a>(&'a self, key: &'a str) -> Cow<'a, str>;
}

/// Shows keys as they are
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyTranslator;

impl Translate for KeyTranslator {
    fn translate<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(key)
    }
}

/// Dictionary lookup, falling back to the key when missing
impl Translate for HashMap<String, String> {
    fn translate<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        match self.get(key) {
            Some(text) => Cow::Borrowed(text.as_str()),
            None => Cow::Borrowed(key),
        }
    }
}
