use clap::Parser;
use pwvault::cli::commands;
use pwvault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    pwvault::logging::init();

    let result = match cli.command {
        Commands::Add {
            ref service,
            ref username,
            ref password,
            generate,
            length,
        } => commands::add::execute(
            &cli,
            service,
            username,
            password.as_deref(),
            generate,
            length,
        ),
        Commands::List {
            ref search,
            reveal,
        } => commands::list::execute(&cli, search.as_deref(), reveal),
        Commands::Show { number } => commands::show::execute(&cli, number),
        Commands::Copy { number } => commands::copy::execute(&cli, number),
        Commands::Delete { number, force } => commands::delete::execute(&cli, number, force),
        Commands::Shell => commands::shell::execute(&cli),
        Commands::Generate { length } => commands::generate::execute(length),
        Commands::Completions { shell } => commands::completions::execute(shell),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        pwvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
