use tabula_core::Converters;

/// Adapter configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Log every statement at `info` level under the `tabula::query` target.
    /// When off, statements are still logged at `trace`.
    pub debug: bool,

    /// Converters handed to models when they produce write values.
    pub converters: Converters,
}

impl Config {
    pub fn new() -> Config {
        Config::default()
    }

    /// Reads `TABULA_DEBUG`. `1`, `true`, `yes` and `on` (any case) enable
    /// statement logging; anything else, or an unset variable, leaves it off.
    pub fn from_env() -> Config {
        let debug = std::env::var("TABULA_DEBUG")
            .map(|value| parse_flag(&value))
            .unwrap_or(false);

        Config {
            debug,
            ..Config::default()
        }
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn converters(mut self, converters: Converters) -> Self {
        self.converters = converters;
        self
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
