use clap::Parser;
use person_demo::utils::error::PersonError;
use person_demo::utils::{logger, validation::Validate};
use person_demo::{CliConfig, ScriptRunner};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌 (stderr)
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting person-demo");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        if e.is_broken_pipe() {
            tracing::debug!("stdout closed early, stopping");
            return;
        }

        tracing::error!(
            "❌ person-demo failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.severity().exit_code());
    }
}

fn run(config: &CliConfig) -> Result<(), PersonError> {
    config.validate()?;

    let script = config.load_script()?;
    let runner = ScriptRunner::new(&*script);
    let lines = runner.run()?;

    tracing::info!("✅ Wrote {} lines", lines);
    Ok(())
}
