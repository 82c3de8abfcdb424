//! ASCII rendering of a Hilbert curve walk.
//!
//! Each grid cell becomes a glyph of three text lines, five columns wide,
//! chosen by which edges the path uses to enter and leave the cell. The
//! first and last curve points have only one neighbour; their missing side
//! is simply absent rather than faked with a sentinel coordinate.

use hilbertgrid::{Coord, HilbertCurve};

/// Width in characters of one rendered cell.
const CELL_WIDTH: usize = 5;
/// Number of text lines per rendered cell.
const CELL_LINES: usize = 3;
/// Padding row with no vertical connection.
const BLANK: &str = "     ";
/// Padding row carrying a vertical connection.
const VBAR: &str = "  |  ";
/// Middle-row glyphs indexed by `left + 2 * right` connectivity.
const MID: [&str; 4] = ["  |  ", "--+  ", "  +--", "-----"];

/// The three text lines making up one rendered cell.
#[derive(Debug, Clone, Copy)]
struct CellGlyph {
    /// Line above the cell centre.
    top: &'static str,
    /// Centre line, carrying the horizontal connections.
    mid: &'static str,
    /// Line below the cell centre.
    bottom: &'static str,
}

/// Render the full walk of `curve` as ASCII art.
///
/// The output has `3 * side` lines of `5 * side` characters each, one
/// trailing newline per line, row 0 of the grid first.
pub fn render(curve: &HilbertCurve) -> String {
    let side = curve.side() as usize;
    let points: Vec<Coord> = curve.points().collect();

    let mut cells = vec![
        CellGlyph {
            top: BLANK,
            mid: MID[0],
            bottom: BLANK,
        };
        side * side
    ];
    for (index, &cur) in points.iter().enumerate() {
        let prev = (index > 0).then(|| points[index - 1]);
        let next = points.get(index + 1).copied();
        cells[cur.y as usize * side + cur.x as usize] = cell_glyph(cur, prev, next);
    }

    let mut out = String::with_capacity(CELL_LINES * side * (CELL_WIDTH * side + 1));
    for row in cells.chunks(side) {
        push_line(&mut out, row, |cell| cell.top);
        push_line(&mut out, row, |cell| cell.mid);
        push_line(&mut out, row, |cell| cell.bottom);
    }
    out
}

/// Append one text line of a grid row, selecting a glyph field per cell.
fn push_line(out: &mut String, row: &[CellGlyph], field: impl Fn(&CellGlyph) -> &'static str) {
    for cell in row {
        out.push_str(field(cell));
    }
    out.push('\n');
}

/// Choose the glyph for `cur` from its walk neighbours.
///
/// Neighbours are always edge-adjacent, so each one contributes exactly one
/// connection direction.
fn cell_glyph(cur: Coord, prev: Option<Coord>, next: Option<Coord>) -> CellGlyph {
    let (mut up, mut down, mut left, mut right) = (false, false, false, false);
    for n in [prev, next].into_iter().flatten() {
        up |= n.y < cur.y;
        down |= n.y > cur.y;
        left |= n.x < cur.x;
        right |= n.x > cur.x;
    }

    CellGlyph {
        top: if up { VBAR } else { BLANK },
        mid: MID[usize::from(left) + 2 * usize::from(right)],
        bottom: if down { VBAR } else { BLANK },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Render the walk for a grid of side `2^order`.
    fn render_order(order: u32) -> String {
        let curve = HilbertCurve::from_order(order).expect("valid order");
        render(&curve)
    }

    #[test]
    fn single_cell() {
        // A lone cell has no connections; only the centre mark is drawn.
        assert_eq!(render_order(0), "     \n  |  \n     \n");
    }

    #[test]
    fn side_2_walk() {
        let expected = concat!(
            "          \n",
            "  |    |  \n",
            "  |    |  \n",
            "  |    |  \n",
            "  +----+  \n",
            "          \n",
        );
        assert_eq!(render_order(1), expected);
    }

    #[test]
    fn side_4_walk() {
        let expected = concat!(
            "                    \n",
            "  +----+    +----+  \n",
            "       |    |       \n",
            "       |    |       \n",
            "  +----+    +----+  \n",
            "  |              |  \n",
            "  |              |  \n",
            "  |    +----+    |  \n",
            "  |    |    |    |  \n",
            "  |    |    |    |  \n",
            "  +----+    +----+  \n",
            "                    \n",
        );
        assert_eq!(render_order(2), expected);
    }

    #[test]
    fn output_geometry() {
        for order in 0..=4u32 {
            let side = 1usize << order;
            let out = render_order(order);
            let lines: Vec<&str> = out.lines().collect();
            assert_eq!(lines.len(), CELL_LINES * side, "order {order}");
            for line in lines {
                assert_eq!(line.len(), CELL_WIDTH * side, "order {order}");
            }
        }
    }

    #[test]
    fn endpoints_have_single_connection() {
        // Side 2: the walk starts at (0, 0) going down and ends at (1, 0)
        // arriving from below. Neither endpoint grows a horizontal stub.
        let out = render_order(1);
        let mid_row_0 = out.lines().nth(1).expect("line exists");
        assert_eq!(mid_row_0, "  |    |  ");
    }
}
