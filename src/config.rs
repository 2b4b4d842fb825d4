/// Reader configuration.
///
/// The defaults match the census files: comma separated, `.csv` extension, blanks around
/// fields are trimmed.
///
/// # Examples
/// ```
/// use census_analyser::config::Config;
/// let config = Config::default()
///     .with_delimiter(b';')
///     .with_trim(false);
/// assert_eq!(config.delimiter(), b';');
/// ```
#[derive(Clone, Debug)]
pub struct Config {
    delimiter: u8,
    extension: String,
    trim: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            delimiter: b',',
            extension: "csv".to_string(),
            trim: true,
        }
    }
}

impl Config {
    /// Specify the field delimiter. The default is ','
    pub fn with_delimiter(mut self, delimiter: u8) -> Config {
        self.delimiter = delimiter;
        self
    }

    /// Specify the required file extension, without the dot. The default is "csv".
    /// The comparison ignores case.
    pub fn with_extension(mut self, extension: &str) -> Config {
        self.extension = extension.to_string();
        self
    }

    /// Specify whether blanks around header and data fields are trimmed. The default is true
    pub fn with_trim(mut self, trim: bool) -> Config {
        self.trim = trim;
        self
    }

    /// Get the field delimiter.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Get the required file extension.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Get the trim setting.
    pub fn trim(&self) -> bool {
        self.trim
    }
}
