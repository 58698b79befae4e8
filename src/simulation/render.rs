use crate::simulation::Snapshot;
use colored::Colorize;
use std::fmt::Write;

/// Draw the tape one row per line with the ant glyph on its cell, followed
/// by a `Step: n` line.
pub fn render(snapshot: &Snapshot<'_>, color: bool) -> String {
    let width = snapshot.width() as usize;
    let mut out = String::with_capacity((width + 1) * snapshot.height() as usize + 16);

    for y in 0..snapshot.height() {
        for x in 0..snapshot.width() {
            if snapshot.is_ant_at(x, y) {
                let glyph = snapshot.ant_symbol();
                if color {
                    let _ = write!(out, "{}", glyph.to_string().red().bold());
                } else {
                    out.push(glyph);
                }
            } else {
                out.push(snapshot.cell_char(x, y));
            }
        }
        out.push('\n');
    }

    if color {
        let _ = writeln!(out, "{} {}", "Step:".cyan(), snapshot.steps());
    } else {
        let _ = writeln!(out, "Step: {}", snapshot.steps());
    }
    out
}

/// [`render`] without ANSI styling
pub fn render_plain(snapshot: &Snapshot<'_>) -> String {
    render(snapshot, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Orientation;
    use crate::simulation::Engine;

    #[test]
    fn test_render_fresh_tape() {
        let engine = Engine::new(3, 2, 1, 0, Orientation::Down).unwrap();

        assert_eq!(render_plain(&engine.snapshot()), " v \n   \nStep: 0\n");
    }

    #[test]
    fn test_render_after_steps() {
        let mut engine = Engine::new(3, 3, 1, 1, Orientation::Right).unwrap();
        engine.run_steps(2);

        assert_eq!(render_plain(&engine.snapshot()), "<X \n X \n   \nStep: 2\n");
    }

    #[test]
    fn test_ant_glyph_hides_black_cell() {
        let mut engine = Engine::new(2, 1, 0, 0, Orientation::Up).unwrap();
        engine.seed_black_cells(&[(0, 0), (1, 0)]);

        assert_eq!(render_plain(&engine.snapshot()), "^X\nStep: 0\n");
    }
}
