use crate::options::Chain;
use anyhow::Result;
use geochain::{link, resolve, Extent, PhotoMetadata, PhotoPosition, TrackStore};
use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;
use std::{
    fs::File,
    io::{BufReader, Write},
};

#[derive(Serialize)]
struct Output<'a> {
    photos: &'a [PhotoPosition],
    extent: Option<Extent>,
}

impl Chain {
    pub fn run(&self) -> Result<()> {
        let records: Vec<PhotoMetadata> =
            serde_json::from_reader(BufReader::new(File::open(&self.photos)?))?;
        let store = TrackStore::build(tracklog::load_all(&self.tracks)?);
        if let Some((first, last)) = store.time_span() {
            info!("tracks: {}, points: {}, {first} .. {last}", store.tracks().len(), store.len());
        }

        let mut photos = Self::resolve_all(&records, &store);
        if self.skip_connections {
            info!("skipping connections");
        } else {
            link(&mut photos);
            for photo in &photos {
                let targets: Vec<&str> = photo.connections.iter().map(|id| id.as_str()).collect();
                info!(
                    "{}: connect to {}, heading {}",
                    photo.id,
                    targets.join(" and "),
                    photo.heading
                );
            }
        }

        let output = Output {
            photos: &photos,
            extent: Extent::of(photos.iter().map(|photo| &photo.position)),
        };
        let mut stdout = std::io::stdout().lock();
        if self.pretty {
            serde_json::to_writer_pretty(&mut stdout, &output)?;
        } else {
            serde_json::to_writer(&mut stdout, &output)?;
        }
        writeln!(stdout)?;
        Ok(())
    }

    /// Positions every record, dropping those that can't be placed.
    ///
    /// Order of the returned photos follows `records`.
    fn resolve_all(records: &[PhotoMetadata], store: &TrackStore) -> Vec<PhotoPosition> {
        records
            .par_iter()
            .map(|record| (record, resolve(record, store)))
            .collect::<Vec<_>>()
            .into_iter()
            .filter_map(|(record, resolved)| match resolved {
                Ok(photo) => {
                    info!("{}: timestamp {}", photo.id, photo.timestamp);
                    info!(
                        "{}: latitude {}, longitude {}",
                        photo.id,
                        photo.position.latitude(),
                        photo.position.longitude()
                    );
                    info!("{}: altitude {}", photo.id, photo.altitude);
                    Some(photo)
                }
                Err(e) => {
                    warn!("{}: unable to position photo: {e}, skipping", record.id);
                    None
                }
            })
            .collect()
    }
}
