use crate::mgmt::ScriptOptions;

/// Generate `add host` commands from pasted `name,ip` or bare-IP lines.
///
/// Single values starting with a dot look like DNS domains and are
/// skipped with a pointer to the domain tool; bare IPs get an
/// auto-generated `H_<ip>` name.
pub fn host_script(opts: &ScriptOptions, input: &str) -> String {
    let mut out = String::new();

    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        match parts.as_slice() {
            [name, ip] => out.push_str(&add_host(opts, name, ip)),
            [value] if value.starts_with('.') => {
                out.push_str(&format!(
                    "# Skipping domain-like input: {} (Use DNS Domain Tool)\n",
                    value
                ));
            }
            [value] => {
                let name = format!("H_{}", value);
                out.push_str(&add_host(opts, &name, value));
            }
            _ => out.push_str(&format!("# Skipping invalid line: {}\n", line)),
        }
    }

    out
}

fn add_host(opts: &ScriptOptions, name: &str, ip: &str) -> String {
    format!(
        "add host name \"{}\" ip-address \"{}\" comments \"Ref:{}\" groups.1 \"{}\"\n",
        name, ip, opts.ticket_ref, opts.group_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> ScriptOptions {
        ScriptOptions {
            ticket_ref: "CHG0001".to_string(),
            group_name: "G_TEST".to_string(),
        }
    }

    #[test]
    fn test_named_host() {
        let script = host_script(&opts(), "web01, 10.0.0.5");
        assert_eq!(
            script,
            "add host name \"web01\" ip-address \"10.0.0.5\" comments \"Ref:CHG0001\" groups.1 \"G_TEST\"\n"
        );
    }

    #[test]
    fn test_bare_ip_gets_auto_name() {
        let script = host_script(&opts(), "192.168.1.10");
        assert!(script.starts_with("add host name \"H_192.168.1.10\" ip-address \"192.168.1.10\""));
    }

    #[test]
    fn test_domain_like_input_is_skipped() {
        let script = host_script(&opts(), ".example.com");
        assert_eq!(
            script,
            "# Skipping domain-like input: .example.com (Use DNS Domain Tool)\n"
        );
    }

    #[test]
    fn test_invalid_arity_is_skipped() {
        let script = host_script(&opts(), "a,b,c");
        assert_eq!(script, "# Skipping invalid line: a,b,c\n");
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let script = host_script(&opts(), "\n\n  \nweb01, 10.0.0.5\n\n");
        assert_eq!(script.lines().count(), 1);
    }
}
