use std::path::PathBuf;

/// Process-wide settings, fixed at startup and injected where needed.
#[derive(Clone, Debug)]
pub struct Config {
    /// Name stamped into the banner and the report header.
    pub author: String,
    /// Directory the HTML report is written into.
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            author: String::from("sweepr"),
            output_dir: PathBuf::from("."),
        }
    }
}
