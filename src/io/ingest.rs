//! Read parameter values from a text file, one entry per line.
//!
//! Only I/O failures are errors here. Deciding which lines are numeric is left
//! to `ParamDomain::from_lines`, which skips anything it cannot parse. Invalid
//! UTF-8 is replaced rather than rejected so that such lines are simply skipped.

use std::fs;
use std::path::Path;

use crate::error::AppError;

/// Read all lines of `path`.
pub fn read_param_lines(path: &Path) -> Result<Vec<String>, AppError> {
    let bytes = fs::read(path).map_err(|e| {
        AppError::new(2, format!("Failed to read t file '{}': {e}", path.display()))
    })?;
    Ok(String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ParamDomain;
    use crate::interp::generate_parameter_domain;

    #[test]
    fn reads_lines_and_skips_garbage_downstream() {
        let path = std::env::temp_dir().join(format!("curvekit_ingest_{}.txt", std::process::id()));
        fs::write(&path, "0.0\nabc\n0.5\n\n1e0\r\n").unwrap();

        let lines = read_param_lines(&path).unwrap();
        assert_eq!(lines.len(), 5);

        let domain = ParamDomain::from_lines(&lines);
        assert_eq!(generate_parameter_domain(&domain).unwrap(), vec![0.0, 0.5, 1.0]);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_exit_code_2() {
        let err = read_param_lines(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
