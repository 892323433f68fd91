use anyhow::{Context, Result};
use clap::Parser;
use soup_lib::app::App;
use soup_lib::model::config::{AppConfig, Ruleset, SurvivalRule};
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_HEADLESS_MS: u64 = 60_000;

#[derive(Parser, Debug)]
#[command(author, version, about = "Primordial soup cell simulation", long_about = None)]
struct Args {
    /// How time is driven
    #[arg(short, long, value_enum, default_value = "headless")]
    mode: Mode,

    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Run length in milliseconds: virtual time when headless (default
    /// 60000), wall-clock time when live (default: until Ctrl-C)
    #[arg(short, long)]
    duration_ms: Option<u64>,

    /// Overrides `simulation.seed`
    #[arg(long)]
    seed: Option<u64>,

    /// Overrides `simulation.ruleset`
    #[arg(long, value_enum)]
    ruleset: Option<RulesetArg>,

    /// Overrides `simulation.survival_rule`
    #[arg(long, value_enum)]
    survival_rule: Option<SurvivalRuleArg>,

    /// Directory for the `live.jsonl` event log
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Write the final state as JSON to this file
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Print the final frame as text
    #[arg(long)]
    render: bool,

    #[arg(long, default_value_t = 100)]
    render_cols: u16,

    #[arg(long, default_value_t = 40)]
    render_rows: u16,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Mode {
    Headless,
    Live,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum RulesetArg {
    Primordial,
    Environmental,
    Adaptive,
}

impl From<RulesetArg> for Ruleset {
    fn from(arg: RulesetArg) -> Self {
        match arg {
            RulesetArg::Primordial => Ruleset::Primordial,
            RulesetArg::Environmental => Ruleset::Environmental,
            RulesetArg::Adaptive => Ruleset::Adaptive,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum SurvivalRuleArg {
    Uniform,
    Literal,
}

impl From<SurvivalRuleArg> for SurvivalRule {
    fn from(arg: SurvivalRuleArg) -> Self {
        match arg {
            SurvivalRuleArg::Uniform => SurvivalRule::Uniform,
            SurvivalRuleArg::Literal => SurvivalRule::Literal,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", AppConfig::default().to_toml_string()?);
        return Ok(());
    }

    soup_core::init_logging();

    let mut config = AppConfig::load(&args.config)?;
    if let Some(seed) = args.seed {
        config.simulation.seed = Some(seed);
    }
    if let Some(ruleset) = args.ruleset {
        config.simulation.ruleset = ruleset.into();
    }
    if let Some(rule) = args.survival_rule {
        config.simulation.survival_rule = rule.into();
    }

    let mut app = App::new(config)?;
    if let Some(dir) = &args.log_dir {
        app = app
            .with_history(dir)
            .with_context(|| format!("opening event log in {}", dir.display()))?;
    }
    app.shutdown.listen_for_ctrl_c();

    match args.mode {
        Mode::Headless => app.run_headless(args.duration_ms.unwrap_or(DEFAULT_HEADLESS_MS))?,
        Mode::Live => app.run_live(args.duration_ms.map(Duration::from_millis)).await?,
    }

    if let Some(path) = &args.snapshot {
        app.save_snapshot(path)
            .with_context(|| format!("writing snapshot {}", path.display()))?;
    }
    if args.render {
        print!("{}", app.render_text(args.render_cols, args.render_rows));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_mode_defaults_to_open_ended_run() {
        let args = Args::try_parse_from(["soup", "--mode", "live"]).unwrap();
        assert!(matches!(args.mode, Mode::Live));
        assert_eq!(args.duration_ms, None);
    }

    #[test]
    fn test_duration_is_passed_through() {
        let args = Args::try_parse_from(["soup", "--duration-ms", "250"]).unwrap();
        assert!(matches!(args.mode, Mode::Headless));
        assert_eq!(args.duration_ms, Some(250));
    }
}
