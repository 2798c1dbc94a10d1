use crate::options::Locate;
use anyhow::Result;
use geochain::{locate, Located, TrackStore};
use std::io::Write;

impl Locate {
    pub fn run(&self) -> Result<()> {
        let store = TrackStore::build(tracklog::load_all(&self.tracks)?);
        let Located {
            position,
            elevation,
        } = locate(&store, self.time)?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "Latitude,Longitude,Elevation")?;
        writeln!(
            stdout,
            "{},{},{elevation}",
            position.latitude(),
            position.longitude()
        )?;
        Ok(())
    }
}
