use std::{fmt, io::BufRead, str::FromStr};

use proptest::prelude::*;

use crate::{
    error::{Error, Result},
    text::collapse_whitespace,
};

/// One row of the cleaned crime-data export.
///
/// The file is comma-delimited: field 0 is the date occurred, field 1 the
/// time occurred, fields 2 through 5 are administrative columns this index
/// does not use, and field 6 is the location. Location text arrives padded
/// with filler spaces and is whitespace-collapsed on load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrimeRecord {
    pub date_occurred: String,
    pub time_occurred: String,
    pub location: String,
}

impl FromStr for CrimeRecord {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 7 {
            return Err(Error::MalformedRecord(format!(
                "expected at least 7 comma-delimited fields, got {}: `{}`",
                fields.len(),
                line
            )));
        }

        Ok(Self {
            date_occurred: fields[0].to_owned(),
            time_occurred: fields[1].to_owned(),
            location: collapse_whitespace(fields[6]),
        })
    }
}

impl fmt::Display for CrimeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Date Occurred: {:>15} || Time Occurred: {:>6} || Location: {}",
            self.date_occurred, self.time_occurred, self.location
        )
    }
}

impl Arbitrary for CrimeRecord {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            "[0-9]{2}/[0-9]{2}/[0-9]{4}",
            "[0-9]{4}",
            "[0-9]{1,4} [A-Z ]{4,24}",
        )
            .prop_map(|(date_occurred, time_occurred, location)| Self {
                date_occurred,
                time_occurred,
                location: collapse_whitespace(&location),
            })
            .boxed()
    }
}

/// Reads up to `limit` records, skipping the header line, and numbers them
/// sequentially from 0.
///
/// The record numbers are unique and ascending by construction, which is
/// exactly the shape [`SplayMap::from_sorted`](crate::splay::SplayMap::from_sorted)
/// wants for its initial load.
pub fn read_records<R: BufRead>(reader: R, limit: usize) -> Result<Vec<(u32, CrimeRecord)>> {
    let mut lines = reader.lines();

    let Some(header) = lines.next() else {
        return Err(Error::MissingHeader);
    };
    header?;

    let mut records = Vec::new();
    for line in lines.take(limit) {
        let record: CrimeRecord = line?.parse()?;
        records.push((records.len() as u32, record));
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use proptest::prelude::*;
    use test_strategy::proptest;

    use super::{read_records, CrimeRecord};
    use crate::{error::Error, splay::SplayMap};

    type RecordMap = SplayMap<u32, CrimeRecord>;

    crate::test_map_invariants!(RecordMap);

    const HEADER: &str = "DATE OCC,TIME OCC,YEAR,AREA,AREA NAME,RPT DIST,LOCATION";
    const SAMPLE_LINE: &str =
        "01/08/2020,2230,2020,1,Central,163,700  W  7TH                          ST";

    #[test]
    fn test_parses_the_indexed_columns() {
        let record: CrimeRecord = SAMPLE_LINE.parse().unwrap();
        assert_eq!(record.date_occurred, "01/08/2020");
        assert_eq!(record.time_occurred, "2230");
        assert_eq!(record.location, "700 W 7TH ST");
    }

    #[test]
    fn test_rejects_short_lines() {
        let error = "01/08/2020,2230,Central".parse::<CrimeRecord>().unwrap_err();
        assert!(matches!(error, Error::MalformedRecord(_)));
    }

    #[test]
    fn test_numbers_records_sequentially() {
        let file = format!("{HEADER}\n{SAMPLE_LINE}\n{SAMPLE_LINE}\n");
        let records = read_records(Cursor::new(file), 500).unwrap();

        let numbers: Vec<u32> = records.iter().map(|(number, _)| *number).collect();
        assert_eq!(numbers, vec![0, 1]);
    }

    #[test]
    fn test_honors_the_record_limit() {
        let file = format!("{HEADER}\n{SAMPLE_LINE}\n{SAMPLE_LINE}\n{SAMPLE_LINE}\n");
        let records = read_records(Cursor::new(file), 2).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_empty_file_is_missing_its_header() {
        assert_eq!(read_records(Cursor::new(""), 500), Err(Error::MissingHeader));
    }

    #[proptest(fork = false)]
    fn test_roundtrips_through_the_delimited_layout(record: CrimeRecord) {
        let line = format!(
            "{},{},2020,1,Central,163,{}",
            record.date_occurred, record.time_occurred, record.location
        );
        prop_assert_eq!(line.parse::<CrimeRecord>()?, record);
    }
}
