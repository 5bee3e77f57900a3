//! Interactive fallbacks for anything not given on the command line.
//!
//! Both prompts loop until the answer parses; parse failures are
//! reported and the question is asked again.

use std::str::FromStr;

use colored::*;
use console::Term;
use sweepr_common::registry::ToolRegistry;
use sweepr_common::selection::Selection;
use sweepr_common::target::Target;
use tracing::error;

use super::print;

pub fn target() -> anyhow::Result<Target> {
    let term = Term::stdout();
    loop {
        let answer = ask(&term, "Enter IP or network range (e.g. 192.168.1.0/24): ")?;
        match Target::from_str(&answer) {
            Ok(target) => return Ok(target),
            Err(err) => error!("Invalid input: {err}. Please try again."),
        }
    }
}

pub fn selection(registry: &ToolRegistry) -> anyhow::Result<Selection> {
    print::header("available scanning tools");
    print::catalog(registry);

    let term = Term::stdout();
    loop {
        let answer = ask(&term, "Select scans to run (comma separated, 0 for all): ")?;
        match Selection::from_str(&answer) {
            // Expanding here catches out-of-range indices while the
            // user can still correct them.
            Ok(selection) => match selection.expand(registry) {
                Ok(_) => return Ok(selection),
                Err(err) => error!("Invalid selection: {err}. Please try again."),
            },
            Err(err) => error!("Invalid selection: {err}. Please try again."),
        }
    }
}

fn ask(term: &Term, question: &str) -> anyhow::Result<String> {
    term.write_str(&format!("{}", question.bold()))?;
    Ok(term.read_line()?)
}
