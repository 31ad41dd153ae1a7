use serde::{Deserialize, Serialize};

/// Fraction digits used for every rendered amount.
pub const CURRENCY_PRECISION: usize = 2;

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("EUR")
    }
}

/// Where the currency symbol sits relative to the number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    /// `€1,234.56`
    Prefix,
    /// `1.234,56 €`
    Suffix,
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub symbol_position: SymbolPosition,
}

impl LocaleConfig {
    pub fn es_es() -> Self {
        Self {
            language_tag: "es-ES".into(),
            decimal_separator: ',',
            grouping_separator: '.',
            symbol_position: SymbolPosition::Suffix,
        }
    }

    pub fn en_us() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
            symbol_position: SymbolPosition::Prefix,
        }
    }

    /// Recognised language tags only.
    pub fn parse_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "es-es" | "es" => Some(Self::es_es()),
            "en-us" | "en" => Some(Self::en_us()),
            _ => None,
        }
    }

    /// Resolves a language tag, falling back to `es-ES` for unknown tags.
    pub fn from_tag(tag: &str) -> Self {
        Self::parse_tag(tag).unwrap_or_default()
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::es_es()
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        _ => code.into(),
    }
}

/// Rounds half away from zero on the shortest decimal form of `value`, so
/// `2.675` gives `2.68` even though the nearest `f64` sits just below it.
///
/// Output is unsigned when the rounded figure is zero.
pub fn round_decimal(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let shortest = value.abs().to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
    let mut digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    digits.extend(
        frac_part
            .bytes()
            .chain(std::iter::repeat(b'0'))
            .take(precision)
            .map(|b| b - b'0'),
    );
    if frac_part.as_bytes().get(precision).is_some_and(|&b| b >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }
    let split = digits.len() - precision;
    let render = |slice: &[u8]| slice.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 && digits.iter().any(|&d| d != 0) {
        out.push('-');
    }
    out.push_str(&render(&digits[..split]));
    if precision > 0 {
        out.push('.');
        out.push_str(&render(&digits[split..]));
    }
    out
}

/// Renders `value` with `precision` fraction digits and locale separators.
pub fn format_number(locale: &LocaleConfig, value: f64, precision: usize) -> String {
    let body = round_decimal(value, precision);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };
    let grouped = match int_part.strip_prefix('-') {
        Some(digits) => format!("-{}", group_digits(digits, locale.grouping_separator)),
        None => group_digits(int_part, locale.grouping_separator),
    };
    match frac_part {
        Some(frac) => format!("{}{}{}", grouped, locale.decimal_separator, frac),
        None => grouped,
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (count, ch) in digits.chars().enumerate() {
        if count != 0 && (digits.len() - count) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats an amount as currency, e.g. `1.234,56 €` for `es-ES`/`EUR`.
///
/// Always two fraction digits. A value that rounds to zero is never signed.
pub fn format_currency_value(amount: f64, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    let body = format_number(locale, amount.abs(), CURRENCY_PRECISION);
    let is_zero = body.chars().all(|ch| !ch.is_ascii_digit() || ch == '0');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };
    let symbol = symbol_for(code.as_str());
    match locale.symbol_position {
        SymbolPosition::Prefix => format!("{}{}{}", sign, symbol, body),
        SymbolPosition::Suffix => format!("{}{} {}", sign, body, symbol),
    }
}

/// Plain two-decimal rendering without grouping or symbol (`1234.50`).
pub fn format_plain(value: f64) -> String {
    round_decimal(value, CURRENCY_PRECISION)
}

/// Bundles currency and locale so renderers can format without threading both around.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoneyFormatter {
    pub currency: CurrencyCode,
    pub locale: LocaleConfig,
}

impl MoneyFormatter {
    pub fn new(currency: CurrencyCode, locale: LocaleConfig) -> Self {
        Self { currency, locale }
    }

    pub fn format(&self, amount: f64) -> String {
        format_currency_value(amount, &self.currency, &self.locale)
    }
}
