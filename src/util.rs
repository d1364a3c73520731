//! Small utility helpers used across modules.

/// Render a value with the fewest decimals that still represent it:
/// whole numbers drop the decimal point entirely ("2", not "2.0"),
/// everything else keeps only the digits it needs ("4.7", not "4.70").
pub fn trim_number(v: f64) -> String {
  if v == v.trunc() {
    format!("{}", v as i64)
  } else {
    format!("{}", v)
  }
}

/// Log-safe truncation for large strings.
/// Avoids spamming logs with huge payloads; cuts on a char boundary since
/// answers and explanations carry multi-byte symbols (Ω, ±).
pub fn trunc_for_log(s: &str, max_chars: usize) -> String {
  match s.char_indices().nth(max_chars) {
    Some((idx, _)) => format!("{}… ({} bytes total)", &s[..idx], s.len()),
    None => s.to_string(),
  }
}
