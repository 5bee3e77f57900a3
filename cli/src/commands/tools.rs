use sweepr_common::registry::ToolRegistry;

use crate::terminal::print;

pub fn tools() {
    print::header("available scanning tools");
    print::catalog(&ToolRegistry::builtin());
}
