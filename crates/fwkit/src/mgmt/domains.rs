use crate::mgmt::ScriptOptions;

/// Generate `add dns-domain` commands plus group membership for pasted
/// `.domain` lines. `sub_domain` maps to the `is-sub-domain` flag.
///
/// Domain objects must start with a dot; anything else is skipped with a
/// pointer to the host tool.
pub fn domain_script(opts: &ScriptOptions, input: &str, sub_domain: bool) -> String {
    let mut out = String::new();

    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('.') {
            out.push_str(&format!(
                "add dns-domain name \"{}\" is-sub-domain {} comments \"Ref:{}\"\n",
                line, sub_domain, opts.ticket_ref
            ));
            out.push_str(&format!(
                "set group name \"{}\" members.add \"{}\"\n",
                opts.group_name, line
            ));
        } else {
            out.push_str(&format!(
                "# Skipping non-domain input: {} (Use Host Tool)\n",
                line
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> ScriptOptions {
        ScriptOptions {
            ticket_ref: "CHG0002".to_string(),
            group_name: "G_DOMAINS".to_string(),
        }
    }

    #[test]
    fn test_domain_emits_add_and_group_membership() {
        let script = domain_script(&opts(), ".example.com", true);
        assert_eq!(
            script,
            "add dns-domain name \".example.com\" is-sub-domain true comments \"Ref:CHG0002\"\n\
             set group name \"G_DOMAINS\" members.add \".example.com\"\n"
        );
    }

    #[test]
    fn test_top_level_domain_flag() {
        let script = domain_script(&opts(), ".example.com", false);
        assert!(script.contains("is-sub-domain false"));
    }

    #[test]
    fn test_non_domain_input_is_skipped() {
        let script = domain_script(&opts(), "10.0.0.1", true);
        assert_eq!(
            script,
            "# Skipping non-domain input: 10.0.0.1 (Use Host Tool)\n"
        );
    }
}
