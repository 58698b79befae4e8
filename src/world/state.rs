use crate::simulation::Snapshot;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write the state in the same format the setup parser reads: tape size,
/// ant `x y orientation`, then every black cell in row-major order.
pub fn write_state<W: Write>(snapshot: &Snapshot<'_>, mut out: W) -> io::Result<()> {
    writeln!(out, "{} {}", snapshot.width(), snapshot.height())?;
    let (x, y) = snapshot.ant_position();
    writeln!(out, "{} {} {}", x, y, snapshot.orientation().code())?;
    for (bx, by) in snapshot.black_cells() {
        writeln!(out, "{} {}", bx, by)?;
    }
    out.flush()
}

/// Write the state to a file, replacing it if it exists
pub fn save_state<P: AsRef<Path>>(snapshot: &Snapshot<'_>, path: P) -> io::Result<()> {
    let file = File::create(path.as_ref())?;
    write_state(snapshot, BufWriter::new(file))?;
    log::info!("state saved to {}", path.as_ref().display());
    Ok(())
}
