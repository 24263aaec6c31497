//! Cell formats and column sizing.

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder};

use listing_model::CellValue;

const FONT_NAME: &str = "Aptos Narrow";
const FONT_SIZE: f64 = 10.0;
const HEADER_FILL: u32 = 0x2D2D2D;
const BORDER_COLOR: u32 = 0x3A3A3A;

/// Data rows sampled when sizing a column.
pub const AUTOFIT_SAMPLE_ROWS: usize = 18;
/// Longest cell text considered when sizing a column.
pub const AUTOFIT_MAX_CHARS: usize = 50;
/// Padding added to the longest text.
pub const AUTOFIT_PADDING: usize = 4;
/// Widest column the sizing will produce.
pub const AUTOFIT_MAX_WIDTH: usize = 45;

/// Formats shared by every sheet of the workbook.
#[derive(Debug, Clone)]
pub struct SheetStyles {
    pub header: Format,
    pub body: Format,
}

impl SheetStyles {
    pub fn new() -> Self {
        Self {
            header: header_format(),
            body: body_format(),
        }
    }
}

impl Default for SheetStyles {
    fn default() -> Self {
        Self::new()
    }
}

fn bordered(format: Format) -> Format {
    format
        .set_font_name(FONT_NAME)
        .set_font_size(FONT_SIZE)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(BORDER_COLOR))
}

/// Bold white header text on a dark fill, centered and wrapped.
pub fn header_format() -> Format {
    bordered(Format::new())
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap()
}

/// Body cells, vertically centered.
pub fn body_format() -> Format {
    bordered(Format::new()).set_align(FormatAlign::VerticalCenter)
}

/// Width for a column from its header and the first sampled values.
pub fn column_width<'a>(header: &str, values: impl IntoIterator<Item = &'a CellValue>) -> f64 {
    let longest = values
        .into_iter()
        .take(AUTOFIT_SAMPLE_ROWS)
        .map(|value| value.to_text().chars().count().min(AUTOFIT_MAX_CHARS))
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0);
    let width = (longest + AUTOFIT_PADDING).min(AUTOFIT_MAX_WIDTH);
    width as f64
}
