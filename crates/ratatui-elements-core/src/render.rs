use ratatui::buffer::Buffer;
use ratatui::style::Style;
use unicode_width::UnicodeWidthChar;

/// Display width of a single-line label in terminal columns.
///
/// Zero-width characters (combining marks) contribute nothing, wide CJK
/// characters contribute two columns.
pub fn display_width(input: &str) -> u16 {
    input
        .chars()
        .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
        .sum::<usize>()
        .min(u16::MAX as usize) as u16
}

/// Writes a single-line label at `(x, y)`, clipped to `max_cols` columns.
///
/// A wide character that would straddle the clip boundary is dropped rather
/// than half-rendered; its trailing cell is written as an empty continuation
/// symbol, matching how ratatui buffers store wide glyphs.
pub fn render_label(x: u16, y: u16, max_cols: u16, buf: &mut Buffer, input: &str, style: Style) {
    if max_cols == 0 {
        return;
    }

    let max_cols = max_cols as usize;
    let mut out_cols = 0usize;
    let mut dx = 0u16;
    let mut tmp = [0u8; 4];

    for ch in input.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if w == 0 {
            continue;
        }
        if out_cols + w > max_cols {
            return;
        }

        let s = ch.encode_utf8(&mut tmp);
        if let Some(cell) = buf.cell_mut((x + dx, y)) {
            cell.set_style(style);
            cell.set_symbol(s);
        }
        dx += 1;
        out_cols += 1;

        if w == 2 {
            if out_cols >= max_cols {
                return;
            }
            if let Some(cell) = buf.cell_mut((x + dx, y)) {
                cell.set_style(style);
                cell.set_symbol("");
            }
            dx += 1;
            out_cols += 1;
        }
    }
}
