use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

impl OutputFormat {
    /// Parse a configured format name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns the list of accepted names if `value` matches none of them.
    pub fn from_config(value: &str) -> Result<Self, String> {
        <Self as ValueEnum>::from_str(value.trim(), true)
            .map_err(|_| format!("unknown output format '{value}' (expected json, table or raw)"))
    }
}

/// Flags the command handlers read, with the output format already resolved
/// against configuration. Logging and store selection are settled before
/// dispatch from the parsed [`crate::cli::Cli`].
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("json", OutputFormat::Json)]
    #[case("TABLE", OutputFormat::Table)]
    #[case(" raw ", OutputFormat::Raw)]
    fn config_names_parse(#[case] value: &str, #[case] expected: OutputFormat) {
        assert_eq!(OutputFormat::from_config(value), Ok(expected));
    }

    #[test]
    fn unknown_config_name_is_rejected() {
        let err = OutputFormat::from_config("xml").unwrap_err();
        assert!(err.contains("xml"));
    }
}
