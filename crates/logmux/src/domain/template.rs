//! Message template rendering
//!
//! Messages may embed `{name}` placeholders that are substituted from the
//! call context. Placeholder names are ASCII identifiers
//! (`[A-Za-z_][A-Za-z0-9_]*`). `{{` and `}}` escape literal braces. A brace
//! that does not open a placeholder (for example inside a JSON payload)
//! passes through untouched, and placeholders without a matching context
//! entry are kept verbatim so the gap stays visible in the output.

use std::collections::BTreeMap;

use thiserror::Error;

/// A placeholder was opened but never closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unterminated placeholder at byte {at}")]
pub struct RenderError {
    /// Byte offset of the opening brace
    pub at: usize,
}

/// Substitute `{name}` placeholders from `vars`
pub fn render(template: &str, vars: &BTreeMap<String, String>) -> Result<String, RenderError> {
    let bytes = template.as_bytes();
    let mut out = String::with_capacity(template.len());
    // Start of the literal run not yet copied into `out`.
    let mut run_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                if bytes.get(i + 1) == Some(&b'{') {
                    out.push_str(&template[run_start..=i]);
                    i += 2;
                    run_start = i;
                    continue;
                }
                let name_start = i + 1;
                let mut j = name_start;
                while j < bytes.len() && (bytes[j].is_ascii_alphanumeric() || bytes[j] == b'_') {
                    j += 1;
                }
                let is_ident = j > name_start && !bytes[name_start].is_ascii_digit();
                if is_ident {
                    if j == bytes.len() {
                        return Err(RenderError { at: i });
                    }
                    if bytes[j] == b'}' {
                        out.push_str(&template[run_start..i]);
                        match vars.get(&template[name_start..j]) {
                            Some(value) => out.push_str(value),
                            None => out.push_str(&template[i..=j]),
                        }
                        i = j + 1;
                        run_start = i;
                        continue;
                    }
                }
                i += 1;
            }
            b'}' => {
                if bytes.get(i + 1) == Some(&b'}') {
                    out.push_str(&template[run_start..=i]);
                    i += 2;
                    run_start = i;
                    continue;
                }
                i += 1;
            }
            _ => i += 1,
        }
    }

    out.push_str(&template[run_start..]);
    Ok(out)
}
