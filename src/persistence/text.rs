use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{Movie, Person};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::rc::Rc;

/// Fields of one record under construction. A record is complete at the next
/// blank line (or end of file) and must carry all five keys by then.
#[derive(Default)]
struct RecordFields {
    title: Option<String>,
    year: Option<i32>,
    director: Option<Person>,
    cast: Option<Vec<Person>>,
    votes: Option<u64>,
}

impl RecordFields {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.year.is_none()
            && self.director.is_none()
            && self.cast.is_none()
            && self.votes.is_none()
    }

    fn finish(self, line_number: usize) -> Result<Movie> {
        let missing = |field: &str| {
            Error::new(
                ErrorKind::Parse,
                format!("record ending at line {line_number} is missing '{field}'"),
            )
        };

        let title = self.title.ok_or_else(|| missing("Title"))?;
        let year = self.year.ok_or_else(|| missing("Year"))?;
        let director = self.director.ok_or_else(|| missing("Director"))?;
        let cast = self.cast.ok_or_else(|| missing("Cast"))?;
        let votes = self.votes.ok_or_else(|| missing("Votes"))?;
        Ok(Movie::new(&title, year, votes, cast, director))
    }
}

fn parse_number<T: std::str::FromStr<Err = std::num::ParseIntError>>(
    value: &str,
    line_number: usize,
) -> Result<T> {
    value.parse().map_err(|err| {
        Error::new(
            ErrorKind::Parse,
            format!("line {line_number}: '{value}' is not a number ({err})"),
        )
    })
}

/// Reads `Title:/Year:/Director:/Cast:/Votes:` records, blank-line separated,
/// keys case-insensitive, `Cast` comma-separated. Each complete record is
/// handed to `consumer` as it is parsed.
pub fn load_movies<P: AsRef<Path>>(path: P, consumer: &mut dyn FnMut(Movie)) -> Result<()> {
    let reader = BufReader::new(File::open(path)?);
    let mut fields = RecordFields::default();
    let mut line_number = 0;

    for line in reader.lines() {
        line_number += 1;
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            if !fields.is_empty() {
                consumer(std::mem::take(&mut fields).finish(line_number)?);
            }
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            return Err(Error::new(
                ErrorKind::Parse,
                format!("line {line_number} has no ':' separator: '{line}'"),
            ));
        };
        let value = value.trim();

        match key.trim().to_lowercase().as_str() {
            "title" => fields.title = Some(value.to_owned()),
            "year" => fields.year = Some(parse_number(value, line_number)?),
            "director" => fields.director = Some(Person::new(value)),
            "cast" => {
                fields.cast = Some(
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|name| !name.is_empty())
                        .map(Person::new)
                        .collect(),
                )
            }
            "votes" => fields.votes = Some(parse_number(value, line_number)?),
            other => {
                return Err(Error::new(
                    ErrorKind::Parse,
                    format!("unknown key '{other}' at line {line_number}"),
                ));
            }
        }
    }

    if !fields.is_empty() {
        consumer(fields.finish(line_number)?);
    }
    Ok(())
}

/// Writes records in the same line format `load_movies` reads.
pub fn store_movies<P: AsRef<Path>>(path: P, movies: &[Rc<Movie>]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    for movie in movies {
        writeln!(writer, "Title: {}", movie.title())?;
        writeln!(writer, "Year: {}", movie.year())?;
        writeln!(writer, "Director: {}", movie.director().name())?;
        let cast: Vec<&str> = movie.cast().iter().map(Person::name).collect();
        writeln!(writer, "Cast: {}", cast.join(", "))?;
        writeln!(writer, "Votes: {}", movie.votes())?;
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}
