//! Output file naming.

const OUTPUT_SUFFIX: &str = "_ANALYSIS.xlsx";
const SOURCE_EXTENSIONS: [&str; 3] = [".xlsx", ".xls", ".csv"];

/// Suggested file name for the analysis workbook of `source_name`.
///
/// A trailing `.xlsx`, `.xls` or `.csv` (any case) is dropped before the
/// suffix is appended; other extensions are kept as part of the base.
pub fn analysis_file_name(source_name: &str) -> String {
    let base = SOURCE_EXTENSIONS
        .iter()
        .find_map(|ext| strip_suffix_ignore_case(source_name, ext))
        .unwrap_or(source_name);
    format!("{base}{OUTPUT_SUFFIX}")
}

fn strip_suffix_ignore_case<'a>(value: &'a str, suffix: &str) -> Option<&'a str> {
    let split = value.len().checked_sub(suffix.len())?;
    let tail = value.get(split..)?;
    if tail.eq_ignore_ascii_case(suffix) {
        value.get(..split)
    } else {
        None
    }
}
