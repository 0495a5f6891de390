use itertools::Itertools;
use log::{debug, info};

use crate::entities::{DiscRecord, TrayInstance, Tray, ValidationError, group_records};
use crate::io::ext_repr::{ExtCircles, ExtRow, ExtTrayInstance};
use crate::io::parser::{self, ParseResult, SkipReason};

/// Converts external representations of an instance into internal ones.
#[derive(Clone, Debug, Copy)]
pub struct Importer {
    /// Uniform factor applied to the tray dimensions, the spacing and every diameter
    pub scale: f32,
    /// Spacing used when the instance does not specify one (before scaling)
    pub default_spacing: f32,
}

impl Importer {
    pub fn new(scale: f32, default_spacing: f32) -> Result<Importer, ValidationError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ValidationError::InvalidScaleFactor(scale));
        }
        Ok(Importer {
            scale,
            default_spacing,
        })
    }

    /// Parses, scales and groups the circles of the instance.
    /// Rows that cannot be parsed are skipped, an invalid tray or spacing is rejected.
    pub fn import_instance(&self, ext: &ExtTrayInstance) -> Result<TrayInstance, ValidationError> {
        let tray = Tray::try_new(ext.tray.width * self.scale, ext.tray.height * self.scale)?;
        let spacing = ext.spacing.unwrap_or(self.default_spacing) * self.scale;

        let (records, skipped): (Vec<DiscRecord>, Vec<SkipReason>) = parse_circles(&ext.circles)
            .into_iter()
            .partition_map(|r| match r {
                ParseResult::Parsed(record) => itertools::Either::Left(record),
                ParseResult::Skipped(reason) => itertools::Either::Right(reason),
            });

        for reason in skipped.iter().filter(|r| **r != SkipReason::Blank) {
            debug!("[IMPORT] skipped row: {reason:?}");
        }

        let records = records.into_iter().map(|r| DiscRecord {
            diameter: r.diameter * self.scale,
            ..r
        });
        let instance = TrayInstance::try_new(tray, spacing, group_records(records))?;

        info!(
            "[IMPORT] instance {:?}: tray {:.3}x{:.3}, spacing {:.3}, {} circles in {} groups ({} rows skipped)",
            ext.name,
            tray.width(),
            tray.height(),
            spacing,
            instance.n_discs(),
            instance.groups.len(),
            skipped.iter().filter(|r| **r != SkipReason::Blank).count()
        );

        Ok(instance)
    }
}

/// Parses the circles of any supported external format, in input order.
pub fn parse_circles(circles: &ExtCircles) -> Vec<ParseResult> {
    match circles {
        ExtCircles::Diameters(text) => parser::parse_diameter_list(text).collect(),
        ExtCircles::Records(rows) => rows
            .iter()
            .flat_map(|row| match row {
                ExtRow::Valid(text) => parser::parse_records(text).collect_vec(),
                ExtRow::Malformed(value) => vec![malformed(value)],
            })
            .collect(),
        ExtCircles::Structured(rows) => rows
            .iter()
            .map(|row| match row {
                ExtRow::Valid(c) => match parser::validate_diameter(c.diameter) {
                    Ok(diameter) => ParseResult::Parsed(DiscRecord {
                        group_key: c.group.clone(),
                        diameter,
                        side: c.side,
                    }),
                    Err(reason) => ParseResult::Skipped(reason),
                },
                ExtRow::Malformed(value) => malformed(value),
            })
            .collect(),
    }
}

fn malformed(value: &serde_json::Value) -> ParseResult {
    ParseResult::Skipped(SkipReason::Malformed(value.to_string()))
}
