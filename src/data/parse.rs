//! Dataset loading from text formats.
//!
//! Two on-disk formats are supported:
//!
//! - **Sparse text**: one example per line, whitespace separated:
//!   `label [weight] index:value index:value ...`. The second token is taken
//!   as a weight when it contains no `:`; otherwise the weight defaults to
//!   1.0. Blank lines and lines starting with `#` are skipped.
//! - **Dense CSV**: `label[,weight],f0,...,fn` rows, no header, loaded with
//!   the `csv` crate.
//!
//! Weights are validated (non-negative, finite) at load time so that
//! evaluation never sees a malformed example.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use super::{dataset::Dataset, example::Example, vector::DataVector};
use crate::{Error, Result};

impl Dataset {
    /// Load a sparse-text dataset from a file.
    pub fn load_sparse<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(&path).map_err(|source| Error::Io {
            operation: format!("open dataset file {}", path.as_ref().display()),
            source,
        })?;
        Self::read_sparse(BufReader::new(file))
    }

    /// Parse a sparse-text dataset from any buffered reader.
    pub fn read_sparse<R: BufRead>(reader: R) -> Result<Self> {
        let mut dataset = Dataset::new();
        for (line_index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| Error::Io {
                operation: "read dataset line".to_string(),
                source,
            })?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            dataset.push(parse_sparse_line(trimmed, line_index + 1)?);
        }
        Ok(dataset)
    }

    /// Load a dense CSV dataset from a file.
    ///
    /// When `has_weights` is true the second column is the example weight;
    /// otherwise every example gets weight 1.0.
    pub fn load_csv<P: AsRef<Path>>(path: P, has_weights: bool) -> Result<Self> {
        let file = File::open(&path).map_err(|source| Error::Io {
            operation: format!("open dataset file {}", path.as_ref().display()),
            source,
        })?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut dataset = Dataset::new();
        for (record_index, record) in reader.records().enumerate() {
            let record = record?;
            let line = record_index + 1;
            let mut fields = record.iter();

            let label = parse_field(fields.next(), "label", line)?;
            let weight = if has_weights {
                parse_field(fields.next(), "weight", line)?
            } else {
                1.0
            };
            let values = fields
                .enumerate()
                .map(|(column, field)| {
                    field.trim().parse::<f64>().map_err(|_| Error::ParseExample {
                        line,
                        message: format!("feature column {column} is not a number: '{field}'"),
                    })
                })
                .collect::<Result<Vec<f64>>>()?;

            let example = Example::checked(DataVector::dense(values), label, weight)?;
            dataset.push(example);
        }
        Ok(dataset)
    }
}

fn parse_field(field: Option<&str>, name: &str, line: usize) -> Result<f64> {
    let field = field.ok_or_else(|| Error::ParseExample {
        line,
        message: format!("missing {name} column"),
    })?;
    field.trim().parse::<f64>().map_err(|_| Error::ParseExample {
        line,
        message: format!("{name} is not a number: '{field}'"),
    })
}

fn parse_sparse_line(line: &str, line_number: usize) -> Result<Example> {
    let mut tokens = line.split_whitespace().peekable();

    let label_token = tokens.next().ok_or_else(|| Error::ParseExample {
        line: line_number,
        message: "empty example".to_string(),
    })?;
    let label = label_token
        .parse::<f64>()
        .map_err(|_| Error::ParseExample {
            line: line_number,
            message: format!("label is not a number: '{label_token}'"),
        })?;

    // A second token without ':' is the optional weight.
    let weight = match tokens.peek() {
        Some(token) if !token.contains(':') => {
            let token = tokens.next().unwrap();
            token.parse::<f64>().map_err(|_| Error::ParseExample {
                line: line_number,
                message: format!("weight is not a number: '{token}'"),
            })?
        }
        _ => 1.0,
    };

    let mut pairs = Vec::new();
    for token in tokens {
        let (index_str, value_str) = token.split_once(':').ok_or_else(|| Error::ParseExample {
            line: line_number,
            message: format!("expected index:value, got '{token}'"),
        })?;
        let index = index_str
            .parse::<usize>()
            .map_err(|_| Error::ParseExample {
                line: line_number,
                message: format!("index is not an integer: '{index_str}'"),
            })?;
        let value = value_str
            .parse::<f64>()
            .map_err(|_| Error::ParseExample {
                line: line_number,
                message: format!("value is not a number: '{value_str}'"),
            })?;
        pairs.push((index, value));
    }

    let vector = DataVector::sparse(pairs).map_err(|error| Error::ParseExample {
        line: line_number,
        message: error.to_string(),
    })?;
    Example::checked(vector, label, weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_labels_weights_and_features() {
        let input = "\
# binary toy data
1 0:0.5 3:2.0

-1 2.0 1:1.5
";
        let dataset = Dataset::read_sparse(Cursor::new(input)).unwrap();
        assert_eq!(dataset.len(), 2);

        let first = dataset.iter().next().unwrap();
        assert_eq!(first.label(), 1.0);
        assert_eq!(first.weight(), 1.0);
        assert_eq!(first.vector().get(3), 2.0);

        let second = dataset.iter().nth(1).unwrap();
        assert_eq!(second.label(), -1.0);
        assert_eq!(second.weight(), 2.0);
        assert_eq!(second.vector().get(1), 1.5);
    }

    #[test]
    fn reports_line_numbers_on_malformed_input() {
        let input = "1 0:1.0\nnot-a-label 0:1.0\n";
        let error = Dataset::read_sparse(Cursor::new(input)).unwrap_err();
        match error {
            Error::ParseExample { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_unordered_indices() {
        let input = "1 3:1.0 1:2.0\n";
        assert!(matches!(
            Dataset::read_sparse(Cursor::new(input)),
            Err(Error::ParseExample { line: 1, .. })
        ));
    }

    #[test]
    fn rejects_negative_weights() {
        let input = "1 -2.0 0:1.0\n";
        assert!(matches!(
            Dataset::read_sparse(Cursor::new(input)),
            Err(Error::InvalidWeight { .. })
        ));
    }
}
