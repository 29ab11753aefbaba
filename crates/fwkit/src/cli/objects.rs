use fwkit_lib::{domain_script, host_script, network_script, Result, ScriptOptions};
use std::io::Read;
use std::path::PathBuf;

pub fn handle_hosts_command(ticket: String, group: String, file: Option<PathBuf>) -> Result<()> {
    let opts = ScriptOptions {
        ticket_ref: ticket,
        group_name: group,
    };
    let input = read_input(file)?;
    print!("{}", host_script(&opts, &input));
    Ok(())
}

pub fn handle_networks_command(ticket: String, group: String, file: Option<PathBuf>) -> Result<()> {
    let opts = ScriptOptions {
        ticket_ref: ticket,
        group_name: group,
    };
    let input = read_input(file)?;
    print!("{}", network_script(&opts, &input));
    Ok(())
}

pub fn handle_domains_command(
    ticket: String,
    group: String,
    top_level: bool,
    file: Option<PathBuf>,
) -> Result<()> {
    let opts = ScriptOptions {
        ticket_ref: ticket,
        group_name: group,
    };
    let input = read_input(file)?;
    print!("{}", domain_script(&opts, &input, !top_level));
    Ok(())
}

fn read_input(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
