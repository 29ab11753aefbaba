use crate::mgmt::ScriptOptions;
use std::net::Ipv4Addr;

/// Generate `add network` commands from pasted `name,cidr` or bare-CIDR
/// lines. The management API takes dotted-quad masks, so the prefix
/// length is converted; bare entries get an auto-generated
/// `N_<addr>_<len>` name.
pub fn network_script(opts: &ScriptOptions, input: &str) -> String {
    let mut out = String::new();

    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        let entry = match parts.as_slice() {
            [cidr] => parse_cidr(cidr).map(|(addr, len)| (format!("N_{}_{}", addr, len), addr, len)),
            [name, cidr] => parse_cidr(cidr).map(|(addr, len)| (name.to_string(), addr, len)),
            _ => None,
        };

        match entry {
            Some((name, addr, len)) => out.push_str(&format!(
                "add network name \"{}\" subnet \"{}\" subnet-mask \"{}\" comments \"Ref:{}\" groups.1 \"{}\"\n",
                name,
                addr,
                prefix_to_mask(len),
                opts.ticket_ref,
                opts.group_name
            )),
            None => out.push_str(&format!("# Skipping invalid line: {}\n", line)),
        }
    }

    out
}

/// Dotted-quad mask for an IPv4 prefix length. Lengths beyond 32
/// saturate to a full mask.
pub fn prefix_to_mask(len: u8) -> Ipv4Addr {
    let hosts = u32::MAX.checked_shr(u32::from(len));
    Ipv4Addr::from(hosts.map_or(u32::MAX, |h| !h))
}

fn parse_cidr(s: &str) -> Option<(Ipv4Addr, u8)> {
    let (addr, len) = s.split_once('/')?;
    let addr: Ipv4Addr = addr.trim().parse().ok()?;
    let len: u8 = len.trim().parse().ok()?;
    (len <= 32).then_some((addr, len))
}
