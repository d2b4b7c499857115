//! Utility functions and helpers.

pub mod http;

use regex::Regex;

use crate::error::{AppError, Result};

/// Compile a key glob (`*` any run, `?` one character) into an anchored regex.
pub fn glob_matcher(pattern: &str) -> Result<Regex> {
    let mut expr = String::with_capacity(pattern.len() + 2);
    expr.push('^');
    for ch in pattern.chars() {
        match ch {
            '*' => expr.push_str(".*"),
            '?' => expr.push('.'),
            other => expr.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
        }
    }
    expr.push('$');

    Regex::new(&expr).map_err(|e| AppError::validation(format!("bad key pattern '{pattern}': {e}")))
}
