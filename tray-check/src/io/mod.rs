use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use circle_tray::entities::TrayInstance;
use circle_tray::io::ext_repr::ExtTrayInstance;
use circle_tray::io::import::Importer;
use log::{LevelFilter, info};
use serde::Serialize;
use serde::de::DeserializeOwned;
use svg::Document;

use crate::EPOCH;
use crate::config::TrayCheckConfig;

pub mod cli;
pub mod output;

pub fn read_instance(path: &Path) -> Result<ExtTrayInstance> {
    read_json(path).with_context(|| format!("could not read instance file: {}", path.display()))
}

pub fn read_config(path: &Path) -> Result<TrayCheckConfig> {
    read_json(path).with_context(|| format!("incorrect config file format: {}", path.display()))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

/// Scales, parses and groups the external instance according to the config.
pub fn import_instance(ext: &ExtTrayInstance, config: &TrayCheckConfig) -> Result<TrayInstance> {
    let importer = Importer::new(config.scale_factor, config.default_spacing)?;
    let instance = importer
        .import_instance(ext)
        .with_context(|| format!("invalid instance: {:?}", ext.name))?;
    Ok(instance)
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!("solution written to file://{}", fs::canonicalize(path)?.display());
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!("svg written to file://{}", fs::canonicalize(path)?.display());
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("epoch: {}", jiff::Timestamp::now());
    Ok(())
}
