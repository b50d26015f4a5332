use anyhow::Result;
use clap::Parser;

use opstation::cli::{Cli, Command};
use opstation::config::TerminalConfig;
use opstation::terminal::Terminal;
use opstation::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = TerminalConfig::load()?;
    let mut terminal = Terminal::from_config(config)?;

    match cli.command {
        Command::Login { pin } => match terminal.login(&pin, cli.machine.as_deref()) {
            Ok(operator) => {
                ui::print_login_ok(&operator);
                if let Some(machine_id) = terminal.session.machine_id() {
                    println!("  bound to {machine_id}");
                }
            }
            // Denied attempts are reported, not crashed on.
            Err(err) => ui::print_login_failure(&err),
        },
        Command::Status => {
            for line in terminal.status_lines()? {
                println!("{line}");
            }
            if cli.verbose {
                println!("operators: {}", terminal.directory.operators().len());
            }
        }
        Command::Demo => terminal.run_demo(cli.machine.as_deref()).await?,
    }

    Ok(())
}
