//! # Map File IO

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::CMResult,
    map::{
        CharMap,
        CharMapBuilder,
        EntryNote,
        LineOutcome,
        LoadOptions,
        SkipReason,
        describe_char,
        format_map_line,
        parse_map_line,
    },
};

/// What happened to a map file line that was not accepted cleanly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The line was accepted with a remark.
    Note(EntryNote),

    /// The line was skipped.
    Skip(SkipReason),
}

/// A per-line load diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadDiagnostic {
    /// The 1-based line number.
    pub line: usize,

    /// The diagnostic.
    pub kind: DiagnosticKind,
}

/// The result of loading a map file.
#[derive(Debug, Clone)]
pub struct LoadReport {
    /// The loaded map.
    pub map: CharMap,

    /// Diagnostics, in line order.
    pub diagnostics: Vec<LoadDiagnostic>,
}

impl LoadReport {
    /// The number of skipped lines.
    pub fn skipped(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.kind, DiagnosticKind::Skip(_)))
            .count()
    }
}

/// Load a [`CharMap`] from a map file.
///
/// Lines are:
/// ```terminaloutput
/// {INDEX}\t{VALUE}
/// ```
///
/// Malformed lines are skipped and reported; only IO errors are fatal.
///
/// # Arguments
/// * `path` - the path to the map file.
/// * `options` - load options.
pub fn load_char_map_path<P: AsRef<Path>>(
    path: P,
    options: &LoadOptions,
) -> CMResult<LoadReport> {
    let path = path.as_ref();
    log::info!("loading character map from {}", path.display());

    let reader = BufReader::new(File::open(path)?);
    read_char_map(reader, options)
}

/// Read a [`CharMap`] from a map file line reader.
///
/// # Arguments
/// * `reader` - the line reader.
/// * `options` - load options.
pub fn read_char_map<R: BufRead>(
    reader: R,
    options: &LoadOptions,
) -> CMResult<LoadReport> {
    let mut builder = CharMapBuilder::with_capacity(options.capacity);
    let mut diagnostics = Vec::new();

    for (offset, line) in reader.lines().enumerate() {
        let line = line?;
        let line_num = offset + 1;

        let kind = match parse_map_line(&line, options.capacity) {
            LineOutcome::Entry(entry, note) => {
                builder.insert(entry.index, entry.ch)?;
                match note {
                    Some(note) => DiagnosticKind::Note(note),
                    None => continue,
                }
            }
            LineOutcome::Skip(reason) => DiagnosticKind::Skip(reason),
        };

        match &kind {
            DiagnosticKind::Note(note @ EntryNote::EmptyAsSpace) => {
                log::info!("line {line_num}: {note}")
            }
            DiagnosticKind::Note(note) => log::warn!("line {line_num}: {note}"),
            DiagnosticKind::Skip(reason) => log::warn!("line {line_num}: {reason}, skipping"),
        }
        diagnostics.push(LoadDiagnostic {
            line: line_num,
            kind,
        });
    }

    let map = builder.build();
    log::info!(
        "character map loaded with {} characters ({} assigned)",
        map.size(),
        map.len()
    );

    Ok(LoadReport { map, diagnostics })
}

/// Save a [`CharMap`] to a map file.
///
/// # Arguments
/// * `map` - the map to save.
/// * `path` - the path to save the map to.
pub fn save_char_map_path<P: AsRef<Path>>(
    map: &CharMap,
    path: P,
) -> CMResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_char_map(map, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`CharMap`] to a [`Write`] writer, in map file format.
///
/// Each assigned slot is written with a token that loads back to it.
pub fn write_char_map<W: Write>(
    map: &CharMap,
    writer: &mut W,
) -> CMResult<()> {
    for (index, ch) in map.iter() {
        writeln!(writer, "{}", format_map_line(index, ch))?;
    }
    Ok(())
}

/// Write a human-readable listing of a [`CharMap`].
///
/// ```terminaloutput
/// character map: 3 characters, 2 assigned
/// MAP[1] = 'a'
/// MAP[3] = '\x0a'
/// ```
pub fn write_char_map_listing<W: Write>(
    map: &CharMap,
    writer: &mut W,
) -> CMResult<()> {
    writeln!(
        writer,
        "character map: {} characters, {} assigned",
        map.size(),
        map.len()
    )?;
    for (index, ch) in map.iter() {
        writeln!(writer, "MAP[{index}] = {}", describe_char(ch))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const SAMPLE: &str = "1\ta\n2\tSpace\n3\t\\n\nbad line\nx\tq\n5\tTab\n6\t\\z\n7\tlong\n";

    #[test]
    fn test_read_char_map() {
        let report = read_char_map(Cursor::new(SAMPLE), &LoadOptions::default()).unwrap();
        let map = &report.map;

        assert_eq!(map.size(), 7);
        assert_eq!(
            map.iter().collect::<Vec<_>>(),
            vec![(1, 'a'), (2, ' '), (3, '\n'), (5, '\t'), (7, 'l')]
        );

        assert_eq!(report.skipped(), 3);
        assert_eq!(
            report.diagnostics,
            vec![
                LoadDiagnostic {
                    line: 4,
                    kind: DiagnosticKind::Skip(SkipReason::MissingTab),
                },
                LoadDiagnostic {
                    line: 5,
                    kind: DiagnosticKind::Skip(SkipReason::InvalidIndex("x".to_string())),
                },
                LoadDiagnostic {
                    line: 7,
                    kind: DiagnosticKind::Skip(SkipReason::UnknownEscape("\\z".to_string())),
                },
                LoadDiagnostic {
                    line: 8,
                    kind: DiagnosticKind::Note(EntryNote::Truncated {
                        token: "long".to_string()
                    }),
                },
            ]
        );
    }

    #[test]
    fn test_read_char_map_trailing_whitespace() {
        let report = read_char_map(
            Cursor::new("1\tSpace \n2\t\\n \n3\tTab\t\n4\t \n"),
            &LoadOptions::default(),
        )
        .unwrap();

        assert_eq!(
            report.map.iter().collect::<Vec<_>>(),
            vec![(1, ' '), (2, '\n'), (3, '\t'), (4, ' ')]
        );
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn test_capacity_option() {
        let options = LoadOptions::default().with_capacity(2);
        let report = read_char_map(Cursor::new(SAMPLE), &options).unwrap();

        assert_eq!(report.map.size(), 2);
        assert_eq!(report.map.capacity(), 2);
        assert!(report.diagnostics.iter().any(|d| matches!(
            d.kind,
            DiagnosticKind::Skip(SkipReason::IndexOutOfRange {
                index: 3,
                capacity: 2
            })
        )));
    }

    #[test]
    fn test_listing() {
        let map = CharMapBuilder::default()
            .with_entry(1, 'a')
            .and_then(|b| b.with_entry(3, '\n'))
            .unwrap()
            .build();

        let mut buf = Vec::new();
        write_char_map_listing(&map, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "character map: 3 characters, 2 assigned\nMAP[1] = 'a'\nMAP[3] = '\\x0a'\n"
        );
    }

    #[test]
    fn test_large_alphabet_loads_back_with_capacity() {
        let alphabet: String = ('\u{100}'..='\u{163}').collect();
        assert_eq!(alphabet.chars().count(), 100);

        assert!(CharMap::from_alphabet(alphabet.chars(), 64).is_err());

        let map = CharMap::from_alphabet(alphabet.chars(), 100).unwrap();
        let mut buf = Vec::new();
        write_char_map(&map, &mut buf).unwrap();

        let report = read_char_map(
            Cursor::new(buf.as_slice()),
            &LoadOptions::default().with_capacity(map.capacity()),
        )
        .unwrap();
        assert_eq!(report.map, map);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn test_save_load_char_map() {
        let map = CharMap::from_alphabet("ab \t\n\r\\\u{0b}".chars(), 256).unwrap();

        tempdir::TempDir::new("charmap_test")
            .and_then(|dir| {
                let path = dir.path().join("1.txt");

                save_char_map_path(&map, &path).expect("Failed to save map");

                let report =
                    load_char_map_path(&path, &LoadOptions::default()).expect("Failed to load map");

                assert_eq!(&report.map, &map);
                assert!(report.diagnostics.is_empty());

                Ok(())
            })
            .unwrap();
    }
}
