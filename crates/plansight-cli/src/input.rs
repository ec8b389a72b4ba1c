//! Plan input: a file path, or `-` for stdin.

use std::io::Read;

use anyhow::{Context, Result};

/// Read the whole plan text from `source`.
pub fn read_plan(source: &str) -> Result<String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read plan from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(source).with_context(|| format!("failed to read plan file {source}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use plansight_test_utils::{ELEVATOR, write_plan};

    #[test]
    fn reads_file_contents() {
        let file = write_plan(ELEVATOR);
        let path = file.path().to_str().unwrap();
        assert_eq!(read_plan(path).unwrap(), ELEVATOR);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_plan("/nonexistent/plan.txt").unwrap_err();
        assert!(
            format!("{err:#}").contains("/nonexistent/plan.txt"),
            "unexpected error: {err:#}"
        );
    }
}
