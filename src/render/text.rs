use std::io::{self, Write};

use crossterm::style::{Color, Stylize};

use crate::field::{Field, Position};

/// Writes one (dim-2, dim-3) layer of the field as plain ASCII: a `+--+`
/// wall row and a `|  ` body row per room row, closed with a bottom border.
pub fn write_layer<W: Write>(field: &Field, layer: [usize; 2], out: &mut W) -> io::Result<()> {
    let width = field.sizes()[0];
    let height = field.sizes()[1];
    for y in 0..height {
        let mut wall_row = String::new();
        let mut body_row = String::new();
        for x in 0..width {
            let position = [x, y, layer[0], layer[1]];
            let (open_left, _) = field.is_wall_open(&position, 0);
            let (open_up, _) = field.is_wall_open(&position, 1);
            wall_row.push('+');
            wall_row.push_str(if open_up { "  " } else { "--" });
            body_row.push(if open_left { ' ' } else { '|' });
            body_row.push_str("  ");
        }
        wall_row.push_str("+\n");
        body_row.push_str("|\n");
        out.write_all(wall_row.as_bytes())?;
        out.write_all(body_row.as_bytes())?;
    }
    let mut border = "+--".repeat(width);
    border.push_str("+\n");
    out.write_all(border.as_bytes())
}

/// Prints a layer to stdout with the start, end and reported shortest path
/// marked in color. Rooms outside this layer's slice of the path are left
/// blank, so a path crossing layers shows up in pieces.
pub fn print_layer(field: &Field, layer: [usize; 2]) -> io::Result<()> {
    let width = field.sizes()[0];
    let height = field.sizes()[1];
    let path: std::collections::HashSet<Position> = field.shortest_path().into_iter().collect();
    let start = field.start_position();
    let end = field.end_position();

    let mut out = io::stdout();
    for y in 0..height {
        let mut wall_row = String::new();
        for x in 0..width {
            let position = [x, y, layer[0], layer[1]];
            let open_up = field.is_wall_open(&position, 1).0;
            wall_row.push('+');
            wall_row.push_str(if open_up { "  " } else { "--" });
        }
        wall_row.push_str("+\n");
        out.write_all(wall_row.as_bytes())?;

        for x in 0..width {
            let position = [x, y, layer[0], layer[1]];
            let open_left = field.is_wall_open(&position, 0).0;
            write!(out, "{}", if open_left { ' ' } else { '|' })?;
            let glyph = if position == start {
                cell("()").with(Color::Green)
            } else if position == end {
                cell("[]").with(Color::Red)
            } else if path.contains(&position) {
                cell("..").with(Color::Yellow)
            } else {
                cell("  ").with(Color::Reset)
            };
            write!(out, "{}", glyph)?;
        }
        out.write_all(b"|\n")?;
    }
    let mut border = "+--".repeat(width);
    border.push_str("+\n");
    out.write_all(border.as_bytes())?;
    out.flush()
}

/// Every room cell spans exactly two terminal columns.
fn cell(symbol: &str) -> &str {
    #[cfg(debug_assertions)]
    {
        use unicode_width::UnicodeWidthStr;
        assert_eq!(
            symbol.width(),
            2,
            "each room cell must occupy exactly two character widths"
        );
    }
    symbol
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;

    #[test]
    fn test_layer_shape() {
        let field = Field::create(&mut get_rng(Some(6)), [5, 3, 1, 1]);
        let mut out = Vec::new();
        write_layer(&field, [0, 0], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        // Two rows per room row plus the closing border.
        assert_eq!(lines.len(), 3 * 2 + 1);
        // 3 characters per room plus the right edge.
        assert!(lines.iter().all(|line| line.len() == 5 * 3 + 1));
        assert_eq!(lines[lines.len() - 1], "+--+--+--+--+--+");
        // The outer boundary is never breached.
        assert!(lines.iter().step_by(2).all(|line| line.starts_with('+')));
        assert!(
            lines
                .iter()
                .skip(1)
                .step_by(2)
                .all(|line| line.starts_with('|') && line.ends_with('|'))
        );
    }

    #[test]
    fn test_top_row_border_is_solid() {
        // Rooms in row 0 have no upper neighbor, so the first wall row is
        // always a full border.
        let field = Field::create(&mut get_rng(Some(13)), [4, 4, 1, 1]);
        let mut out = Vec::new();
        write_layer(&field, [0, 0], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().next(), Some("+--+--+--+--+"));
    }
}
