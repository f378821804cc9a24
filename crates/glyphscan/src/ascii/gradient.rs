/// Density ramp ordered from the lightest glyph to the densest one.
pub const DEFAULT_GRADIENT: &str =
    "`^\",:;Il!i~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gradient {
    chars: Vec<char>,
}

impl Gradient {
    pub fn new(chars: impl Into<String>) -> Self {
        let chars: Vec<char> = chars.into().chars().collect();
        assert!(chars.len() >= 2, "gradient must contain at least two characters");
        Self { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Bucket a brightness value into a gradient index.
    ///
    /// Computes `floor(brightness / 255 * (len - 1))` in integer arithmetic, so
    /// `0` lands on the first glyph and `255` on the last one.
    pub fn index_for(&self, brightness: u8) -> usize {
        let levels = self.chars.len() - 1;
        (usize::from(brightness) * levels / 255).min(levels)
    }

    pub fn char_at(&self, index: usize) -> char {
        self.chars[index.min(self.chars.len() - 1)]
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::new(DEFAULT_GRADIENT)
    }
}
