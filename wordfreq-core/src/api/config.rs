//! Configuration API for word counting

use crate::api::Error;
use crate::domain::{SeparatorAlphabet, WordOrder};

/// Default configuration constants
pub mod defaults {
    /// Default separator characters: space, tab, newline, comma, period,
    /// semicolon, colon and hyphen
    pub const SEPARATORS: &str = " \t\n,.;:-";
}

/// Counting configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) separators: SeparatorAlphabet,
    pub(crate) order: WordOrder,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separators: SeparatorAlphabet::from_chars(defaults::SEPARATORS),
            order: WordOrder::default(),
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Separator alphabet used to split words
    pub fn separators(&self) -> &SeparatorAlphabet {
        &self.separators
    }

    /// Order in which reports list words
    pub fn order(&self) -> WordOrder {
        self.order
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.separators.is_empty() {
            return Err(Error::Configuration(
                "separator alphabet must contain at least one character".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    separators: Option<SeparatorAlphabet>,
    order: Option<WordOrder>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the characters of `chars` as separators, taken literally
    pub fn separators(mut self, chars: &str) -> Self {
        self.separators = Some(SeparatorAlphabet::from_chars(chars));
        self
    }

    /// Use separators written with escape sequences (see [`parse_escaped`])
    pub fn separators_escaped(mut self, escaped: &str) -> Result<Self, Error> {
        self.separators = Some(parse_escaped(escaped)?);
        Ok(self)
    }

    /// Use an already built alphabet
    pub fn separator_alphabet(mut self, alphabet: SeparatorAlphabet) -> Self {
        self.separators = Some(alphabet);
        self
    }

    /// Set the report order
    pub fn order(mut self, order: WordOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the report order by name
    pub fn order_name(mut self, name: &str) -> Result<Self, Error> {
        self.order = Some(name.parse()?);
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(separators) = self.separators {
            config.separators = separators;
        }

        if let Some(order) = self.order {
            config.order = order;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Parse a separator definition that may contain escape sequences
///
/// Recognized escapes are `\s` (space), `\t`, `\n`, `\r` and `\\`. Every
/// other character stands for itself.
pub fn parse_escaped(escaped: &str) -> Result<SeparatorAlphabet, Error> {
    let mut alphabet = SeparatorAlphabet::new();
    let mut chars = escaped.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            alphabet.insert(ch);
            continue;
        }
        let unescaped = match chars.next() {
            Some('s') => ' ',
            Some('t') => '\t',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('\\') => '\\',
            Some(other) => {
                return Err(Error::Configuration(format!(
                    "unknown escape sequence '\\{other}' in separators"
                )))
            }
            None => {
                return Err(Error::Configuration(
                    "separators end with a dangling '\\'".into(),
                ))
            }
        };
        alphabet.insert(unescaped);
    }

    Ok(alphabet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_separators() {
        let config = Config::default();
        for ch in [' ', '\t', '\n', ',', '.', ';', ':', '-'] {
            assert!(config.separators().contains(ch), "missing {ch:?}");
        }
        assert_eq!(config.separators().len(), 8);
        assert_eq!(config.order(), WordOrder::FirstSeen);
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::builder()
            .separators(" !")
            .order(WordOrder::Alphabetical)
            .build()
            .unwrap();

        assert!(config.separators().contains('!'));
        assert!(!config.separators().contains(','));
        assert_eq!(config.order(), WordOrder::Alphabetical);
    }

    #[test]
    fn test_empty_separators_rejected() {
        let result = Config::builder().separators("").build();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_order_name() {
        let config = Config::builder()
            .order_name("alphabetical")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.order(), WordOrder::Alphabetical);

        assert!(Config::builder().order_name("backwards").is_err());
    }

    #[test]
    fn test_parse_escaped() {
        let alphabet = parse_escaped("\\s\\t\\n\\r\\\\,").unwrap();
        assert_eq!(alphabet.sorted_chars(), vec!['\t', '\n', '\r', ' ', ',', '\\']);
    }

    #[test]
    fn test_parse_escaped_matches_escaped_rendering() {
        let alphabet = SeparatorAlphabet::from_chars(defaults::SEPARATORS);
        assert_eq!(parse_escaped(&alphabet.escaped()).unwrap(), alphabet);
    }

    #[test]
    fn test_parse_escaped_errors() {
        assert!(parse_escaped("\\q").is_err());
        assert!(parse_escaped("abc\\").is_err());
    }
}
