use crate::core::error::Result;
use crate::core::types::Movie;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::rc::Rc;

/// Reads a JSON array of movie records. Deserialization funnels through the
/// normalizing constructors, so whitespace and casing come back canonical.
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Vec<Movie>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Writes the records as a pretty-printed JSON array.
pub fn store_json<P: AsRef<Path>>(path: P, movies: &[Rc<Movie>]) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    let records: Vec<&Movie> = movies.iter().map(|movie| movie.as_ref()).collect();
    serde_json::to_writer_pretty(writer, &records)?;
    Ok(())
}
