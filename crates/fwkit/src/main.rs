mod cli;

use clap::Parser;
use fwkit_lib::Result;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = cli::Cli::parse();

    match cli.command {
        cli::Commands::Review {
            file,
            config,
            export,
            output,
            json,
        } => cli::review::handle_review_command(
            file,
            config,
            export,
            output,
            json,
            cli.verbose,
            cli.quiet,
        ),

        cli::Commands::Hosts { ticket, group, file } => {
            cli::objects::handle_hosts_command(ticket, group, file)
        }

        cli::Commands::Networks { ticket, group, file } => {
            cli::objects::handle_networks_command(ticket, group, file)
        }

        cli::Commands::Domains {
            ticket,
            group,
            top_level,
            file,
        } => cli::objects::handle_domains_command(ticket, group, top_level, file),
    }
}
