use explorer_rs::tui::{self, App};
use explorer_rs::validation::InputValidator;
use explorer_rs::{logging, Cli, Result};

fn main() {
    if let Err(err) = run() {
        logging::error_log(&err.plain_message());
        eprintln!("{}", err);
        if let Some(suggestion) = err.get_recovery_suggestion() {
            eprintln!("{}", suggestion);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();

    if cli.debug {
        let log_path = logging::init_debug_logging()?;
        eprintln!("Debug log: {}", log_path.display());
    }
    logging::debug_log(&format!("Arguments: {:?}", cli));

    cli.validate()?;
    let catalog = cli.load_catalog()?;
    let report = InputValidator::validate_catalog(&catalog);
    logging::info_log(&format!(
        "Loaded catalog: {} components, {} apis, {} duplicate titles, {} empty titles",
        catalog.components.len(),
        catalog.apis.len(),
        report.duplicates.len(),
        report.empty_titles
    ));

    let app = App::new(catalog, cli.search_text())?;
    tui::runtime::run(app)
}
