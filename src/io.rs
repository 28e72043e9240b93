use crate::error::Error;
use crate::point::Point;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Reads points from a file, one per line, two whitespace-separated integers.
///
/// Reading stops at the first malformed line, which is reported with its
/// line number; nothing parsed so far is returned in that case. A missing
/// file surfaces as [`Error::Io`] for the caller to handle.
pub fn read_points(path: impl AsRef<Path>) -> Result<Vec<Point>, Error> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut points = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let mut fields = line.split_whitespace();
        let parsed = (|| {
            let x = fields.next()?.parse::<i64>().ok()?;
            let y = fields.next()?.parse::<i64>().ok()?;
            if fields.next().is_some() {
                return None;
            }
            Some(Point::new(x, y))
        })();
        match parsed {
            Some(p) => points.push(p),
            None => {
                return Err(Error::PointFormat {
                    line: number + 1,
                    content: line,
                });
            }
        }
    }
    Ok(points)
}

/// Writes points to a file in the same one-per-line integer format.
pub fn write_points(path: impl AsRef<Path>, points: &[Point]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for p in points {
        writeln!(writer, "{} {}", p.x, p.y)?;
    }
    writer.flush()?;
    Ok(())
}
