//! Line-oriented persistence for the fact store.
//!
//! Each fact occupies three lines, in ingestion order:
//!
//! ```text
//! subject lincoln
//! predicate was killed by Booth
//! object Booth
//! ```
//!
//! The value is everything after the first space. A missing field is
//! written as the bare label.

use std::io::{BufRead, Write};

use crate::error::{Error, Result};
use crate::store::FactStore;
use crate::triple::Triple;

const LABELS: [&str; 3] = ["subject", "predicate", "object"];

/// Write every fact of `store` in ingestion order.
pub fn write<W: Write>(store: &FactStore, writer: &mut W) -> Result<()> {
    for triple in store.iter() {
        let fields = [&triple.subject, &triple.predicate, &triple.object];
        for (label, value) in LABELS.iter().zip(fields) {
            match value {
                Some(value) => writeln!(writer, "{label} {value}")?,
                None => writeln!(writer, "{label}")?,
            }
        }
    }
    Ok(())
}

/// Rebuild a fact store from its persisted form.
///
/// Facts are keyed by the persisted subject, which was normalized when it
/// was first extracted.
///
/// # Errors
/// `CorpusFormat` when a line carries the wrong label or the last record is
/// cut short.
pub fn read<R: BufRead>(reader: R) -> Result<FactStore> {
    let mut store = FactStore::new();
    let mut fields: [Option<String>; 3] = [None, None, None];
    let mut line_no = 0;

    for line in reader.lines() {
        let line = line?;
        let slot = line_no % 3;
        line_no += 1;
        fields[slot] = parse_line(&line, LABELS[slot], line_no)?;

        if slot == 2 {
            let [subject, predicate, object] = std::mem::take(&mut fields);
            store.insert(Triple {
                subject,
                predicate,
                object,
            });
        }
    }

    if line_no % 3 != 0 {
        return Err(Error::CorpusFormat {
            line: line_no,
            reason: format!(
                "truncated record, expected '{}' next",
                LABELS[line_no % 3]
            ),
        });
    }

    Ok(store)
}

fn parse_line(line: &str, label: &str, line_no: usize) -> Result<Option<String>> {
    let (found, value) = line.split_once(' ').unwrap_or((line, ""));
    if found != label {
        return Err(Error::CorpusFormat {
            line: line_no,
            reason: format!("expected '{label}', found '{found}'"),
        });
    }
    Ok((!value.is_empty()).then(|| value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn writes_three_lines_per_fact() {
        let store: FactStore = [
            Triple::new("lincoln", "was killed by Booth", "Booth"),
            Triple {
                subject: Some("booth".to_string()),
                predicate: Some("fled".to_string()),
                object: None,
            },
        ]
        .into_iter()
        .collect();

        let mut out = Vec::new();
        write(&store, &mut out).expect("write to Vec should succeed");
        let text = String::from_utf8(out).expect("output is UTF-8");
        assert_eq!(
            text,
            "subject lincoln\npredicate was killed by Booth\nobject Booth\n\
             subject booth\npredicate fled\nobject\n"
        );
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn reload_reproduces_store() {
        let store: FactStore = [
            Triple::new("lincoln", "was born in Kentucky", "Kentucky"),
            Triple::new("booth", "shot lincoln", "lincoln"),
            Triple {
                subject: Some("lincoln".to_string()),
                predicate: Some("died".to_string()),
                object: None,
            },
            Triple {
                subject: None,
                predicate: Some("rained".to_string()),
                object: None,
            },
        ]
        .into_iter()
        .collect();

        let mut out = Vec::new();
        write(&store, &mut out).expect("write to Vec should succeed");
        let reloaded = read(Cursor::new(out)).expect("written corpus should read back");

        assert_eq!(reloaded, store);
        assert_eq!(reloaded.facts_for("lincoln").map(Iterator::count), Some(2));
    }

    #[test]
    fn wrong_label_reports_line() {
        let input = "subject lincoln\nverb was killed\nobject booth\n";
        match read(Cursor::new(input)) {
            Err(Error::CorpusFormat { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("predicate"));
            }
            other => panic!("expected CorpusFormat, got {other:?}"),
        }
    }

    #[test]
    fn truncated_record_is_rejected() {
        let input = "subject lincoln\npredicate won\n";
        match read(Cursor::new(input)) {
            Err(Error::CorpusFormat { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected CorpusFormat, got {other:?}"),
        }
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn empty_file_is_an_empty_store() {
        let store = read(Cursor::new("")).expect("empty input is valid");
        assert!(store.is_empty());
    }
}
