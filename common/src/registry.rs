//! # Tool Catalog
//!
//! The fixed set of external reconnaissance utilities sweepr knows how
//! to drive, together with their invocation templates. The catalog is
//! immutable after startup; lookup and target substitution are the only
//! operations on it.

use crate::target::Target;

/// One entry in the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolSpec {
    /// Menu index, unique and nonzero (`0` is the "all" sentinel).
    pub index: usize,
    pub name: String,
    pub description: String,
    /// Command line with a single `{target}` placeholder.
    pub template: String,
}

impl ToolSpec {
    pub fn new(index: usize, name: &str, description: &str, template: &str) -> Self {
        Self {
            index,
            name: name.to_string(),
            description: description.to_string(),
            template: template.to_string(),
        }
    }

    /// Substitutes the target into the template and splits the result
    /// into an argument vector.
    ///
    /// Substitution happens token by token, so the target value never
    /// passes through a shell and cannot smuggle in extra arguments or
    /// metacharacters.
    pub fn command_for(&self, target: &Target) -> ToolCommand {
        let mut tokens = self
            .template
            .split_whitespace()
            .map(|token| token.replace("{target}", target.as_str()));

        let program = tokens.next().unwrap_or_default();
        let args: Vec<String> = tokens.collect();

        ToolCommand { program, args }
    }
}

/// A fully substituted invocation, ready to spawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolCommand {
    /// First token of the template; also what the availability check
    /// resolves against the search path.
    pub program: String,
    pub args: Vec<String>,
}

impl ToolCommand {
    /// The human-readable command line shown on the console and in the
    /// report.
    pub fn display_line(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// The catalog itself, ordered by menu index.
#[derive(Clone, Debug)]
pub struct ToolRegistry {
    tools: Vec<ToolSpec>,
}

impl ToolRegistry {
    /// Builds a registry from arbitrary specs. Tool names must be
    /// unique; they key the result table.
    pub fn new(tools: Vec<ToolSpec>) -> Self {
        Self { tools }
    }

    /// The built-in catalog of supported scanners.
    pub fn builtin() -> Self {
        Self::new(vec![
            ToolSpec::new(
                1,
                "ARP-scan",
                "Layer 2 network discovery",
                "sudo arp-scan {target}",
            ),
            ToolSpec::new(2, "Nmap (Basic)", "Service/version detection", "nmap -sV {target}"),
            ToolSpec::new(
                3,
                "Nmap (Aggressive)",
                "Aggressive scan with OS detection, versioning, scripts, traceroute",
                "nmap -A -T4 {target}",
            ),
            ToolSpec::new(
                4,
                "Masscan (Top Ports)",
                "High-speed scan of top 1000 ports",
                "sudo masscan {target} --top-ports 1000 --rate 5000",
            ),
            ToolSpec::new(
                5,
                "Masscan (Full Range)",
                "Full range scan on all 65535 ports",
                "sudo masscan {target} --ports 1-65535 --rate 10000",
            ),
            ToolSpec::new(
                6,
                "Nmap NSE",
                "Vulnerability scanning using NSE scripts",
                "nmap --script vuln {target}",
            ),
            ToolSpec::new(7, "SNMP-check (Basic)", "SNMP enumeration", "snmp-check {target}"),
            ToolSpec::new(
                8,
                "SNMPwalk (Advanced)",
                "Deep SNMP enumeration",
                "snmpwalk -v2c -c public {target}",
            ),
        ])
    }

    pub fn get(&self, index: usize) -> Option<&ToolSpec> {
        self.tools.iter().find(|spec| spec.index == index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolSpec> {
        self.tools.iter()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
