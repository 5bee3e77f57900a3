#[cfg(test)]
mod scans;
