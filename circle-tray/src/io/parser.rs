//! Permissive parsing of the textual input formats.
//!
//! Rows that cannot be parsed are not an error, they are reported as [`ParseResult::Skipped`]
//! and do not consume an original index.

use crate::entities::{DiscRecord, Side};

/// Separator between the fields of an arrow record
pub const FIELD_SEPARATOR: &str = " => ";

/// Number of fields of an arrow record
pub const N_RECORD_FIELDS: usize = 5;

/// Group key of the implicit group formed by a plain diameter list
pub const IMPLICIT_GROUP_KEY: &str = "";

#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// Empty or whitespace-only row
    Blank,
    /// The row does not consist of exactly [`N_RECORD_FIELDS`] fields
    FieldCount(usize),
    /// The diameter field is not a number
    UnparsableDiameter(String),
    /// The diameter is a number, but not a finite, positive one
    InvalidDiameter(f32),
    /// A row that does not have the expected JSON shape, kept as raw JSON
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult {
    Parsed(DiscRecord),
    Skipped(SkipReason),
}

impl ParseResult {
    pub fn parsed(self) -> Option<DiscRecord> {
        match self {
            ParseResult::Parsed(record) => Some(record),
            ParseResult::Skipped(_) => None,
        }
    }
}

/// Parses a diameter, rejecting anything that is not a finite, positive number.
pub fn parse_diameter(field: &str) -> Result<f32, SkipReason> {
    let field = field.trim();
    let diameter: f32 = field
        .parse()
        .map_err(|_| SkipReason::UnparsableDiameter(field.to_owned()))?;
    validate_diameter(diameter)
}

pub fn validate_diameter(diameter: f32) -> Result<f32, SkipReason> {
    match diameter.is_finite() && diameter > 0.0 {
        true => Ok(diameter),
        false => Err(SkipReason::InvalidDiameter(diameter)),
    }
}

/// Parses a single arrow record: `<ignored> => <group key> => <diameter> => <ignored> => <right side?>`.
///
/// The side flag places the group on the right side if it reads `true`, on the left side otherwise.
pub fn parse_record(row: &str) -> ParseResult {
    if row.trim().is_empty() {
        return ParseResult::Skipped(SkipReason::Blank);
    }
    let fields = row.split(FIELD_SEPARATOR).map(str::trim).collect::<Vec<_>>();
    if fields.len() != N_RECORD_FIELDS {
        return ParseResult::Skipped(SkipReason::FieldCount(fields.len()));
    }

    let diameter = match parse_diameter(fields[2]) {
        Ok(d) => d,
        Err(reason) => return ParseResult::Skipped(reason),
    };
    let side = match fields[4] {
        "true" => Side::Right,
        _ => Side::Left,
    };

    ParseResult::Parsed(DiscRecord {
        group_key: fields[1].to_owned(),
        diameter,
        side,
    })
}

/// Parses every line of `text` as an arrow record.
pub fn parse_records(text: &str) -> impl Iterator<Item = ParseResult> + '_ {
    text.lines().map(parse_record)
}

/// Parses a comma-separated list of diameters (newlines also separate values).
/// All diameters belong to one implicit group on the left side.
pub fn parse_diameter_list(text: &str) -> impl Iterator<Item = ParseResult> + '_ {
    text.split([',', '\n'])
        .map(|token| match token.trim() {
            "" => ParseResult::Skipped(SkipReason::Blank),
            token => match parse_diameter(token) {
                Ok(diameter) => ParseResult::Parsed(DiscRecord {
                    group_key: IMPLICIT_GROUP_KEY.to_owned(),
                    diameter,
                    side: Side::Left,
                }),
                Err(reason) => ParseResult::Skipped(reason),
            },
        })
}
