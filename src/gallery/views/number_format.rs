//! Locale-aware integer formatting for population figures

/// Grouping conventions for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    tag: &'static str,
    group_separator: &'static str,
    /// Digits required in the leading group before grouping kicks in
    min_grouping_digits: usize,
}

const NARROW_NO_BREAK_SPACE: &str = "\u{202F}";
const NO_BREAK_SPACE: &str = "\u{A0}";

impl NumberLocale {
    pub const EN_US: NumberLocale = NumberLocale::new("en-US", ",", 1);
    pub const EN_GB: NumberLocale = NumberLocale::new("en-GB", ",", 1);
    pub const DE_DE: NumberLocale = NumberLocale::new("de-DE", ".", 1);
    pub const DE_CH: NumberLocale = NumberLocale::new("de-CH", "\u{2019}", 1);
    pub const FR_FR: NumberLocale = NumberLocale::new("fr-FR", NARROW_NO_BREAK_SPACE, 1);
    pub const SV_SE: NumberLocale = NumberLocale::new("sv-SE", NO_BREAK_SPACE, 1);
    pub const ES_ES: NumberLocale = NumberLocale::new("es-ES", ".", 2);
    pub const IT_IT: NumberLocale = NumberLocale::new("it-IT", ".", 1);
    pub const PL_PL: NumberLocale = NumberLocale::new("pl-PL", NO_BREAK_SPACE, 2);
    pub const JA_JP: NumberLocale = NumberLocale::new("ja-JP", ",", 1);

    const KNOWN: [NumberLocale; 10] = [
        Self::EN_US,
        Self::EN_GB,
        Self::DE_DE,
        Self::DE_CH,
        Self::FR_FR,
        Self::SV_SE,
        Self::ES_ES,
        Self::IT_IT,
        Self::PL_PL,
        Self::JA_JP,
    ];

    const fn new(tag: &'static str, group_separator: &'static str, min_grouping_digits: usize) -> Self {
        Self {
            tag,
            group_separator,
            min_grouping_digits,
        }
    }

    /// Resolve a BCP 47-ish tag such as `de-DE`, `de_DE.UTF-8` or `fr`.
    ///
    /// Exact language-region matches win, then the first locale sharing the
    /// language. Anything else falls back to `en-US`.
    pub fn from_tag(tag: &str) -> Self {
        let normalized = tag
            .split('.')
            .next()
            .unwrap_or_default()
            .replace('_', "-")
            .to_lowercase();
        let language = normalized.split('-').next().unwrap_or_default();

        if let Some(locale) = Self::KNOWN
            .iter()
            .find(|l| l.tag.to_lowercase() == normalized)
        {
            return *locale;
        }
        if let Some(locale) = Self::KNOWN
            .iter()
            .find(|l| l.tag.split('-').next() == Some(language))
        {
            return *locale;
        }

        tracing::debug!("unknown locale '{}', formatting numbers as en-US", tag);
        Self::EN_US
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Format with thousands grouping, e.g. `1234567` → `1,234,567` in en-US
    pub fn format_integer(&self, value: u64) -> String {
        let digits = value.to_string();
        if digits.len() < 3 + self.min_grouping_digits {
            return digits;
        }

        let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 3);
        let lead = match digits.len() % 3 {
            0 => 3,
            n => n,
        };
        out.push_str(&digits[..lead]);
        for group in digits.as_bytes()[lead..].chunks(3) {
            out.push_str(self.group_separator);
            // ASCII digits only
            out.extend(group.iter().map(|b| *b as char));
        }
        out
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::EN_US
    }
}
