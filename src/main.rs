//! Typing-practice launcher: resolves configuration and opens the window.

use anyhow::Context;
use clap::Parser;
use typerace::{Config, DeletionPolicy, SkipMode};

#[derive(Parser, Debug)]
#[command(name = "typerace", about = "Typing practice with line-break skipping", version)]
struct Cli {
    /// Reference text file (can also be set via TYPERACE_TEXT_FILE)
    #[arg(short = 'f', long, conflicts_with = "text")]
    text_file: Option<String>,

    /// Inline reference text (can also be set via TYPERACE_TEXT)
    #[arg(short, long)]
    text: Option<String>,

    /// Line-break handling: off, line-break, or whitespace
    #[arg(short, long)]
    skip_mode: Option<SkipMode>,

    /// Forget typed positions past the caret when deleting
    #[arg(long)]
    truncate_on_delete: bool,

    /// Print the resolved configuration and exit
    #[arg(long)]
    print_config: bool,
}

/// Layer CLI flags over the environment-derived config.
fn resolve_config(cli: &Cli, mut config: Config) -> anyhow::Result<Config> {
    if let Some(path) = cli.text_file.as_deref() {
        config
            .set_text_file(path)
            .with_context(|| format!("loading --text-file {}", path))?;
    } else if let Some(text) = cli.text.as_deref() {
        config.set_inline_text(text).context("parsing --text")?;
    }
    if let Some(skip_mode) = cli.skip_mode {
        config.skip_mode = skip_mode;
    }
    if cli.truncate_on_delete {
        config.deletion_policy = DeletionPolicy::Truncate;
    }
    Ok(config)
}

fn print_config(config: &Config) {
    println!("skip mode:       {}", config.skip_mode);
    println!("deletion policy: {:?}", config.deletion_policy);
    println!(
        "reference text:  {} chars, {} lines",
        config.reference_text.chars().count(),
        config.reference_text.lines().count()
    );
    println!();
    println!("{}", config.reference_text);
}

fn main() -> anyhow::Result<()> {
    typerace_gui::init_tracing();
    let cli = Cli::parse();

    let config = Config::from_env().context("loading configuration from environment")?;
    let config = resolve_config(&cli, config)?;
    if cli.print_config {
        print_config(&config);
        return Ok(());
    }

    tracing::info!(skip_mode = %config.skip_mode, "starting typing window");
    typerace_gui::run(config).map_err(|err| anyhow::anyhow!("typing window failed: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("typerace").chain(args.iter().copied()))
            .expect("cli parse")
    }

    #[test]
    fn flags_override_environment_config() {
        let cli = parse(&["--text", "hi\nthere\n", "--skip-mode", "off", "--truncate-on-delete"]);
        let config = resolve_config(&cli, Config::default()).expect("config");
        assert_eq!(config.reference_text, "hi\nthere");
        assert_eq!(config.skip_mode, SkipMode::Off);
        assert_eq!(config.deletion_policy, DeletionPolicy::Truncate);
    }

    #[test]
    fn missing_flags_keep_environment_config() {
        let cli = parse(&[]);
        let base = Config {
            reference_text: "base".to_string(),
            skip_mode: SkipMode::LineBreak,
            deletion_policy: DeletionPolicy::Retain,
        };
        let config = resolve_config(&cli, base).expect("config");
        assert_eq!(config.reference_text, "base");
        assert_eq!(config.skip_mode, SkipMode::LineBreak);
        assert_eq!(config.deletion_policy, DeletionPolicy::Retain);
    }

    #[test]
    fn unknown_skip_mode_is_rejected_by_the_parser() {
        let result = Cli::try_parse_from(["typerace", "--skip-mode", "sideways"]);
        assert!(result.is_err());
    }

    #[test]
    fn text_file_flag_loads_and_prepares_file() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("drill.txt");
        std::fs::write(&path, "line one\r\n  line two\r\n").expect("write drill");
        let path_str = path.to_string_lossy().to_string();

        let cli = parse(&["--text-file", &path_str]);
        let config = resolve_config(&cli, Config::default()).expect("config");
        assert_eq!(config.reference_text, "line one\n  line two");
    }

    #[test]
    fn blank_inline_text_reports_context() {
        let cli = parse(&["--text", "   "]);
        let err = resolve_config(&cli, Config::default()).expect_err("blank text");
        assert!(format!("{:#}", err).contains("--text"));
    }
}
