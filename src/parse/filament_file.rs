use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{ConfigError, ParseError, Result};
use crate::geometry::Filament;
use crate::math::Point3;

/// Reads filament point loci from a coil data file.
///
/// After `start_line` header lines, every record is `x y z current [...]`.
/// A zero current closes the current filament (the point itself belongs to
/// it); a line starting with `end` stops reading. Trailing columns such as
/// coil group and name are ignored.
pub struct ExtractFilaments {
    start_line: usize,
    sample_mod: usize,
    scale: f64,
}

impl ExtractFilaments {
    /// Creates a new `ExtractFilaments` operation.
    ///
    /// * `start_line` - Number of header lines to skip.
    /// * `sample_mod` - Keep every `sample_mod`-th interior point.
    /// * `scale` - Factor converting file units to [cm].
    #[must_use]
    pub fn new(start_line: usize, sample_mod: usize, scale: f64) -> Self {
        Self {
            start_line,
            sample_mod,
            scale,
        }
    }

    /// Reads the filament file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or a record is malformed.
    pub fn execute_path(&self, path: impl AsRef<Path>) -> Result<Vec<Filament>> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading filament file");
        let file = File::open(path)?;
        self.execute(BufReader::new(file))
    }

    /// Reads filaments from `reader`.
    ///
    /// Points after the last zero-current record do not form a filament and
    /// are dropped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSampleMod`] for a zero sampling modifier,
    /// a [`ParseError`] for a malformed record, or an I/O error.
    #[allow(clippy::float_cmp)]
    pub fn execute<R: BufRead>(&self, reader: R) -> Result<Vec<Filament>> {
        if self.sample_mod == 0 {
            return Err(ConfigError::InvalidSampleMod.into());
        }

        let mut filaments = Vec::new();
        let mut coords: Vec<Point3> = Vec::new();
        // Sampling restarts on the first point of each filament.
        let mut sample_counter = 0usize;

        for (index, line) in reader.lines().enumerate().skip(self.start_line) {
            let line = line?;
            let line_number = index + 1;

            let Some(record) = parse_record(&line, line_number)? else {
                continue;
            };
            let Record::Point { point, current } = record else {
                break;
            };
            let point = Point3::from(point.coords * self.scale);

            if current == 0.0 {
                coords.push(point);
                filaments.push(Filament::new(std::mem::take(&mut coords))?);
                sample_counter = 0;
            } else {
                if sample_counter % self.sample_mod == 0 {
                    coords.push(point);
                }
                sample_counter += 1;
            }
        }

        if !coords.is_empty() {
            warn!(
                dropped_points = coords.len(),
                "filament data ends without a zero-current record; discarding the unterminated filament"
            );
        }
        if filaments.is_empty() {
            warn!("no filaments found in coil data");
        } else {
            info!(count = filaments.len(), "extracted filaments");
        }

        Ok(filaments)
    }
}

enum Record {
    Point { point: Point3, current: f64 },
    End,
}

/// Parses one data line. Blank lines yield `None`.
fn parse_record(line: &str, line_number: usize) -> std::result::Result<Option<Record>, ParseError> {
    let mut tokens = line.split_whitespace();
    let Some(first) = tokens.next() else {
        return Ok(None);
    };
    if first == "end" {
        return Ok(Some(Record::End));
    }

    let mut values = [0.0; 4];
    let mut found = 0;
    for (column, token) in std::iter::once(first).chain(tokens).take(4).enumerate() {
        let invalid = || ParseError::InvalidNumber {
            line: line_number,
            column: column + 1,
            token: token.to_owned(),
        };
        let value: f64 = token.parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }
        values[column] = value;
        found += 1;
    }
    if found < 4 {
        return Err(ParseError::MissingColumns {
            line: line_number,
            found,
        });
    }

    let [x, y, z, current] = values;
    Ok(Some(Record::Point {
        point: Point3::new(x, y, z),
        current,
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::error::CoilError;

    const HEADER: &str = "periods 4\nbegin filament\nmirror NIL\n";

    fn extract(body: &str, sample_mod: usize) -> Result<Vec<Filament>> {
        let text = format!("{HEADER}{body}");
        ExtractFilaments::new(3, sample_mod, 100.0).execute(Cursor::new(text))
    }

    #[test]
    fn splits_filaments_on_zero_current() {
        let body = "\
0.10 0.0 -0.01 1.0e6
0.10 0.0  0.01 1.0e6
0.08 0.0  0.01 1.0e6
0.08 0.0 -0.01 0.0 1 Modular
0.0 0.10 -0.01 1.0e6
0.0 0.10  0.01 0.0 1 Modular
end
";
        let filaments = extract(body, 1).unwrap();
        assert_eq!(filaments.len(), 2);
        assert_eq!(filaments[0].len(), 4);
        assert_eq!(filaments[1].len(), 2);

        let first = filaments[0].points()[0];
        assert!((first.x - 10.0).abs() < 1e-9);
        assert!((first.z + 1.0).abs() < 1e-9);
    }

    #[test]
    fn sampling_keeps_first_and_terminal_points() {
        let body = "\
1 0 0 5
2 0 0 5
3 0 0 5
4 0 0 5
5 0 0 5
6 0 0 0
7 0 0 5
8 0 0 0
";
        let filaments = extract(body, 2).unwrap();
        let xs: Vec<f64> = filaments[0].points().iter().map(|p| p.x / 100.0).collect();
        assert_eq!(xs, vec![1.0, 3.0, 5.0, 6.0]);
        // Counter restarts for each filament.
        let xs: Vec<f64> = filaments[1].points().iter().map(|p| p.x / 100.0).collect();
        assert_eq!(xs, vec![7.0, 8.0]);
    }

    #[test]
    fn header_lines_are_skipped_even_if_numeric() {
        let text = "1 1 1 0\n2 2 2 0\n3 3 3 0\n4 0 0 0\n";
        let filaments = ExtractFilaments::new(3, 1, 1.0)
            .execute(Cursor::new(text))
            .unwrap();
        assert_eq!(filaments.len(), 1);
        assert_eq!(filaments[0].points()[0], Point3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn unterminated_filament_is_dropped() {
        let body = "1 0 0 1\n2 0 0 0\n3 0 0 1\n4 0 0 1\n";
        let filaments = extract(body, 1).unwrap();
        assert_eq!(filaments.len(), 1);
    }

    #[test]
    fn empty_input_yields_no_filaments() {
        assert!(extract("", 1).unwrap().is_empty());
    }

    #[test]
    fn malformed_number_reports_line_and_column() {
        let err = extract("1 0 0 1\n1 zero 0 1\n", 1).unwrap_err();
        match err {
            CoilError::Parse(ParseError::InvalidNumber {
                line,
                column,
                token,
            }) => {
                assert_eq!(line, 5);
                assert_eq!(column, 2);
                assert_eq!(token, "zero");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_finite_values_are_rejected() {
        for (body, column, token) in [
            ("1 0 nan 1\n", 3, "nan"),
            ("inf 0 0 1\n", 1, "inf"),
            ("1 0 0 -infinity\n", 4, "-infinity"),
        ] {
            let err = extract(body, 1).unwrap_err();
            assert!(
                matches!(
                    &err,
                    CoilError::Parse(ParseError::InvalidNumber { line: 4, column: c, token: t })
                        if *c == column && t == token
                ),
                "{body:?}: {err}"
            );
        }
    }

    #[test]
    fn short_record_is_rejected() {
        let err = extract("1 0 0\n", 1).unwrap_err();
        assert!(matches!(
            err,
            CoilError::Parse(ParseError::MissingColumns { line: 4, found: 3 })
        ));
    }

    #[test]
    fn zero_sample_mod_is_a_config_error() {
        let err = extract("1 0 0 0\n", 0).unwrap_err();
        assert!(matches!(
            err,
            CoilError::Config(ConfigError::InvalidSampleMod)
        ));
    }
}
