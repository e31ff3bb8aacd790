use std::io::{self, Write};

use crate::field::Field;

/// Edge length of one room square, in SVG user units.
const ROOM_SIZE: usize = 8;

const TEMPLATE: &str = r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg xmlns='http://www.w3.org/2000/svg' xmlns:xlink="http://www.w3.org/1999/xlink" version="1.1" viewBox="0 0 {{width}} {{height}}" background-color="#fff">
<g transform="translate({{offsetX}}, {{offsetY}})" stroke="black" stroke-width="1" stroke-linecap="round">
{{lines}}
</g>
</svg>
"##;

/// Writes one (dim-2, dim-3) layer of the field as an SVG drawing: one line
/// per closed wall, plus the bottom and right outer borders.
// TODO: render one tile per (dim-2, dim-3) layer instead of a single slice.
pub fn write_layer<W: Write>(field: &Field, layer: [usize; 2], out: &mut W) -> io::Result<()> {
    let width = field.sizes()[0];
    let height = field.sizes()[1];
    let padding_x = ROOM_SIZE;
    let padding_y = ROOM_SIZE;

    let mut lines = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let position = [x, y, layer[0], layer[1]];
            let (open_left, _) = field.is_wall_open(&position, 0);
            let (open_up, _) = field.is_wall_open(&position, 1);
            let x1 = x * ROOM_SIZE;
            let y1 = y * ROOM_SIZE;
            if !open_left {
                lines.push(svg_line(x1, y1, x1, y1 + ROOM_SIZE));
            }
            if !open_up {
                lines.push(svg_line(x1, y1, x1 + ROOM_SIZE, y1));
            }
        }
    }
    let drawing_width = width * ROOM_SIZE;
    let drawing_height = height * ROOM_SIZE;
    lines.push(svg_line(0, drawing_height, drawing_width, drawing_height));
    lines.push(svg_line(drawing_width, 0, drawing_width, drawing_height));

    let svg = TEMPLATE
        .replace("{{width}}", &(drawing_width + padding_x * 2).to_string())
        .replace("{{height}}", &(drawing_height + padding_y * 2).to_string())
        .replace("{{offsetX}}", &padding_x.to_string())
        .replace("{{offsetY}}", &padding_y.to_string())
        .replace("{{lines}}", &lines.join("\n"));
    out.write_all(svg.as_bytes())
}

fn svg_line(x1: usize, y1: usize, x2: usize, y2: usize) -> String {
    format!(r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" />"#)
}
