//! Flags shared by `lex` and `parse`.

use fcx_diagnostic::emitter::ColorMode;
use fcx_parse::ParserOptions;


/// Options collected from the command line.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CliOptions {
    pub parser: ParserOptions,
    pub color: ColorMode,
}

impl CliOptions {
    /// The color mode to use, with a non-empty `NO_COLOR` turning `auto`
    /// into `never`. An explicit `--color=always` still wins.
    pub fn effective_color(&self, no_color: bool) -> ColorMode {
        match self.color {
            ColorMode::Auto if no_color => ColorMode::Never,
            mode => mode,
        }
    }
}

/// Split `args` into options and positional arguments.
///
/// Recognized flags: `--max-depth=N`, `--error-limit=N`, `--strict` and
/// `--color=auto|always|never`.
pub fn parse_cli_options(args: &[String]) -> Result<(CliOptions, Vec<&str>), String> {
    let mut options = CliOptions::default();
    let mut positional = Vec::new();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--max-depth=") {
            let depth = parse_count("--max-depth", value)?;
            if depth == 0 {
                return Err("--max-depth must be at least 1".to_string());
            }
            options.parser = options.parser.with_max_depth(depth);
        } else if let Some(value) = arg.strip_prefix("--error-limit=") {
            options.parser = options
                .parser
                .with_error_limit(parse_count("--error-limit", value)?);
        } else if arg == "--strict" {
            options.parser = options.parser.strict();
        } else if let Some(value) = arg.strip_prefix("--color=") {
            options.color = value.parse()?;
        } else if arg.starts_with("--") {
            return Err(format!("unknown option `{arg}`"));
        } else {
            positional.push(arg.as_str());
        }
    }

    Ok((options, positional))
}

fn parse_count(flag: &str, value: &str) -> Result<usize, String> {
    value
        .parse()
        .map_err(|_| format!("invalid value for {flag}: `{value}` (expected a number)"))
}
