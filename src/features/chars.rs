//! Character-Count Signals
//!
//! Raw, case-sensitive substring counts over the full URL string. `www` and
//! `com` are plain substring counts ("company" contains "com"); the trained
//! artifact expects exactly this looseness, so do not "fix" it to whole-token
//! matching.

use super::vector::{FeatureSignal, FeatureVector};

/// Counts of the punctuation/token set the classifier was trained on.
#[derive(Debug, Clone, Default)]
pub struct CharCounts {
    pub dots: usize,
    pub hyphens: usize,
    pub underscores: usize,
    pub percent: usize,
    pub slashes: usize,
    pub equal_signs: usize,
    pub semicolons: usize,
    pub ampersands: usize,
    pub exclamations: usize,
    pub spaces: usize,
    pub www: usize,
    pub com: usize,
}

impl CharCounts {
    pub fn from_url(url: &str) -> Self {
        Self {
            dots: count_char(url, '.'),
            hyphens: count_char(url, '-'),
            underscores: count_char(url, '_'),
            percent: count_char(url, '%'),
            slashes: count_char(url, '/'),
            equal_signs: count_char(url, '='),
            semicolons: count_char(url, ';'),
            ampersands: count_char(url, '&'),
            exclamations: count_char(url, '!'),
            spaces: count_char(url, ' '),
            www: url.matches("www").count(),
            com: url.matches("com").count(),
        }
    }
}

fn count_char(url: &str, c: char) -> usize {
    url.chars().filter(|&ch| ch == c).count()
}

impl FeatureSignal for CharCounts {
    fn apply(&self, vector: &mut FeatureVector) {
        vector.set_by_name("num_dots", self.dots as f32);
        vector.set_by_name("num_hyphens", self.hyphens as f32);
        vector.set_by_name("num_underscores", self.underscores as f32);
        vector.set_by_name("num_percent", self.percent as f32);
        vector.set_by_name("num_slashes", self.slashes as f32);
        vector.set_by_name("num_equal_signs", self.equal_signs as f32);
        vector.set_by_name("num_semicolons", self.semicolons as f32);
        vector.set_by_name("num_ampersands", self.ampersands as f32);
        vector.set_by_name("num_exclamations", self.exclamations as f32);
        vector.set_by_name("num_spaces", self.spaces as f32);
        vector.set_by_name("num_www", self.www as f32);
        vector.set_by_name("num_com", self.com as f32);
    }
}
