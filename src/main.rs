mod cli;
mod config;

use cli::{Args, ProbeSettings};
use config::{discover_config, load_config_from_path, ConfigFile};
use dpkg_probe::prelude::*;
use std::process;

fn main() {
    // Parse command-line arguments (clap exits with code 2 on invalid input)
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let settings = args.into_settings(config)?;

    let request = InventoryRequest::builder()
        .package_opt(settings.package.clone())
        .strict_format(settings.strict_format)
        .build()?;

    let progress_reporter = if settings.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    // Create use case with injected dependencies
    let use_case = CollectInventoryUseCase::new(
        DpkgDatabase::with_program(&settings.dpkg_command),
        &progress_reporter,
    );

    let response = use_case.execute(request)?;

    let formatted_output = render(&settings, &response, &progress_reporter)?;

    // Nothing reaches stdout until the whole document is ready
    StdoutPresenter::new().present(&formatted_output)?;

    progress_reporter.report_completion(&format!(
        "✨ Listed {} installed package(s)",
        response.packages.len()
    ));

    Ok(())
}

fn load_config(args: &Args) -> Result<ConfigFile> {
    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };
    Ok(config.unwrap_or_default())
}

fn render(
    settings: &ProbeSettings,
    response: &InventoryResponse,
    progress_reporter: &StderrProgressReporter,
) -> Result<String> {
    progress_reporter.report(FormatterFactory::progress_message(settings.format));

    let formatter = FormatterFactory::create(settings.format);
    formatter.format(&response.packages)
}
