use crate::options::Merge;
use anyhow::Result;
use log::info;

impl Merge {
    pub fn run(&self) -> Result<()> {
        let n_tracks = tracklog::merge_files(&self.input, &self.out)?;
        info!("merged {n_tracks} tracks into {:?}", self.out);
        Ok(())
    }
}
