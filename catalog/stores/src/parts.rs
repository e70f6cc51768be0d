use std::io::Write;
use std::path::Path;

use anyhow::{Context, Error};
use catalog::part::Part;
use catalog::Catalog;
use tracing::Level;
use tracing::{info, trace};
use util::source::Source;

use crate::builtin::builtin_parts;
use crate::csv::PartRecord;

pub type CatalogSource = Source;

#[tracing::instrument(level = Level::DEBUG)]
pub fn load_catalog(source: &CatalogSource) -> Result<Catalog, Error> {
    info!("Loading catalog. source: {}", source);

    let parts = match source {
        Source::Builtin => builtin_parts(),
        Source::File(path) => load_parts(path)?,
    };

    let catalog = Catalog::new(parts).with_context(|| format!("Building catalog. source: {}", source))?;
    info!("Loaded catalog. parts: {}", catalog.len());

    Ok(catalog)
}

#[tracing::instrument(level = Level::DEBUG)]
pub fn load_parts(path: &Path) -> Result<Vec<Part>, Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(path)
        .with_context(|| format!("Error reading parts. file: {}", path.display()))?;

    let mut parts: Vec<Part> = vec![];

    for result in csv_reader.deserialize() {
        let record: PartRecord = result.with_context(|| "Deserializing part record".to_string())?;

        trace!("{:?}", record);

        let part = record
            .build_part()
            .with_context(|| format!("Building part from record. record: {:?}", record))?;

        parts.push(part);
    }
    Ok(parts)
}

pub fn store_parts(path: &Path, parts: &[Part]) -> Result<(), Error> {
    info!("Storing parts. file: {}", path.display());

    let file = std::fs::File::create(path).with_context(|| format!("Error creating file. file: {}", path.display()))?;

    write_parts(file, parts)
}

pub fn write_parts<W: Write>(writer: W, parts: &[Part]) -> Result<(), Error> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);

    for part in parts {
        let record = PartRecord::from_part(part).with_context(|| format!("Writing part. id: {}", part.id))?;
        writer.serialize(record)?;
    }

    writer.flush()?;

    Ok(())
}
