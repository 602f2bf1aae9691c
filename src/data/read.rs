/*!
Reading a dataset from tabular text.

The first line which is neither blank nor a comment (beginning with `#`) is a header of column names, and each following line is a row.
Fields are separated by commas, tabs, or runs of whitespace.

```rust
# use dnf_fit::config::ReadConfig;
# use dnf_fit::data::read::read_dataset;
let table = b"
## snp data
rs1  rs2  status
0    2    case
1    0    control
2    1    case
";

let dataset = read_dataset(table.as_slice(), &ReadConfig::default()).unwrap();
assert_eq!(dataset.rows(), 3);
assert_eq!(dataset.feature_count(), 2);
assert_eq!(dataset.labels(), &[true, false, true]);
```

Labels are read by [parse_label].
*/

use std::io::BufRead;

use crate::{
    config::ReadConfig,
    data::{Dataset, Value},
    types::err::{self},
};

/// Reads a label from a token.
///
/// Accepted tokens (ignoring case) are `true`/`false`, `case`/`control`, `1`/`0`.
/// Otherwise, the token must be an integer, and any non-zero integer is a positive label.
pub fn parse_label(token: &str) -> Option<bool> {
    match token.to_ascii_lowercase().as_str() {
        "true" | "case" | "1" => Some(true),
        "false" | "control" | "0" => Some(false),
        other => other.parse::<i64>().ok().map(|int| int != 0),
    }
}

fn split_fields(line: &str) -> Vec<&str> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty())
        .collect()
}

/// Reads a dataset from `reader`.
///
/// Any failure, whether to read a line or to interpret some field, is returned as an error.
pub fn read_dataset(mut reader: impl BufRead, config: &ReadConfig) -> Result<Dataset, err::ErrorKind> {
    let mut buffer = String::with_capacity(1024);
    let mut line_counter = 0;

    let mut header: Option<(Vec<String>, usize)> = None;
    let mut rows: Vec<Vec<Value>> = Vec::default();
    let mut labels: Vec<bool> = Vec::default();

    loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_counter += 1,
            Err(_) => {
                return Err(err::ParseError::Io {
                    line: line_counter + 1,
                }
                .into())
            }
        }

        let line = buffer.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields = split_fields(line);

        match &header {
            None => {
                let label_index = match &config.label_column {
                    None => fields.len().saturating_sub(1),
                    Some(name) => match fields.iter().position(|field| *field == name.as_str()) {
                        Some(index) => index,
                        None => return Err(err::ParseError::NoLabelColumn(name.clone()).into()),
                    },
                };

                if fields.len() < 2 {
                    return Err(err::ParseError::NoFeatures.into());
                }

                let names = fields
                    .iter()
                    .enumerate()
                    .filter(|(index, _)| *index != label_index)
                    .map(|(_, name)| name.to_string())
                    .collect();

                header = Some((names, label_index));
            }

            Some((names, label_index)) => {
                if fields.len() != names.len() + 1 {
                    return Err(err::ParseError::FieldCount {
                        line: line_counter,
                        expected: names.len() + 1,
                        found: fields.len(),
                    }
                    .into());
                }

                let mut row = Vec::with_capacity(names.len());
                for (column, field) in fields.iter().enumerate() {
                    if column == *label_index {
                        match parse_label(field) {
                            Some(label) => labels.push(label),
                            None => return Err(err::ParseError::Label { line: line_counter }.into()),
                        }
                    } else {
                        match field.parse::<Value>() {
                            Ok(value) => row.push(value),
                            Err(_) => {
                                return Err(err::ParseError::Value {
                                    line: line_counter,
                                    column: column + 1,
                                }
                                .into())
                            }
                        }
                    }
                }
                rows.push(row);
            }
        }
    }

    match header {
        None => Err(err::ParseError::NoHeader.into()),
        Some((names, _)) => Dataset::new(names, rows, labels),
    }
}
