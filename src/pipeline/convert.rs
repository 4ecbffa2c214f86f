//! The panorama to skybox conversion pipeline.

use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::cubemap::{
    is_auto_face_size, project_cubemap, resolve_face_size, Cubemap, FaceSizeError,
};
use crate::export::{export_cubemap_jpeg, JpegExportError, JpegExportOptions};
use crate::panorama::{load_panorama, LoadError, Panorama};
use crate::tonemap::{tonemap, ToneMapConfig};

use super::reporter::{ConversionStage, ProgressReporter};

/// Errors that can abort a conversion.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to load panorama: {0}")]
    Load(#[from] LoadError),
    #[error("Invalid face size: {0}")]
    FaceSize(#[from] FaceSizeError),
    #[error("Failed to write cubemap: {0}")]
    Export(#[from] JpegExportError),
}

/// Settings for a conversion run.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Explicit face edge length. `None` (or 0) derives it from the panorama height.
    pub face_size: Option<u32>,
    /// HDR to LDR mapping.
    pub tonemap: ToneMapConfig,
    /// Output encoding.
    pub jpeg: JpegExportOptions,
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone)]
pub struct ConversionSummary {
    pub source_width: u32,
    pub source_height: u32,
    pub face_size: u32,
    /// True if the face size was derived from the panorama height.
    pub auto_face_size: bool,
    pub output_dir: PathBuf,
    /// Written files in face order.
    pub outputs: Vec<PathBuf>,
    pub elapsed: Duration,
}

/// Runs a fallible stage. `stage_finished` is only reported on success.
fn try_stage<T, E>(
    reporter: &dyn ProgressReporter,
    stage: ConversionStage,
    f: impl FnOnce() -> Result<T, E>,
) -> Result<T, E> {
    reporter.stage_started(stage);
    let start = Instant::now();
    let out = f()?;
    reporter.stage_finished(stage, start.elapsed());
    Ok(out)
}

fn run_stage<T>(
    reporter: &dyn ProgressReporter,
    stage: ConversionStage,
    f: impl FnOnce() -> T,
) -> T {
    match try_stage(reporter, stage, || Ok::<T, Infallible>(f())) {
        Ok(out) => out,
        Err(never) => match never {},
    }
}

/// Tonemaps the panorama and resamples it into six faces.
///
/// Performs no I/O. The face size is resolved, and reported, before any
/// face buffer is allocated.
pub fn build_cubemap(
    panorama: &Panorama,
    options: &ConvertOptions,
    reporter: &dyn ProgressReporter,
) -> Result<Cubemap, ConvertError> {
    let ldr = run_stage(reporter, ConversionStage::Tonemap, || {
        tonemap(panorama, &options.tonemap)
    });

    let face_size = try_stage(reporter, ConversionStage::ResolveFaceSize, || {
        resolve_face_size(ldr.height(), options.face_size)
    })?;
    reporter.face_size_resolved(
        face_size,
        is_auto_face_size(options.face_size),
        ldr.width(),
        ldr.height(),
    );

    reporter.generation_started(face_size);
    let cubemap = run_stage(reporter, ConversionStage::Project, || {
        project_cubemap(&ldr, face_size)
    });

    Ok(cubemap)
}

/// Converts an in-memory panorama and writes the six faces to `output_dir`.
pub fn convert_loaded(
    panorama: &Panorama,
    output_dir: &Path,
    options: &ConvertOptions,
    reporter: &dyn ProgressReporter,
) -> Result<ConversionSummary, ConvertError> {
    let start = Instant::now();
    let cubemap = build_cubemap(panorama, options, reporter)?;

    let outputs = try_stage(reporter, ConversionStage::Write, || {
        export_cubemap_jpeg(&cubemap, output_dir, &options.jpeg, |face, path| {
            reporter.face_saved(face, path)
        })
    })?;

    let summary = ConversionSummary {
        source_width: panorama.width(),
        source_height: panorama.height(),
        face_size: cubemap.face_size(),
        auto_face_size: is_auto_face_size(options.face_size),
        output_dir: output_dir.to_path_buf(),
        outputs,
        elapsed: start.elapsed(),
    };
    reporter.finished(&summary);
    Ok(summary)
}

/// Loads the panorama at `input` and writes its six cubemap faces to
/// `output_dir` as `right.jpg`, `left.jpg`, `top.jpg`, `bottom.jpg`,
/// `front.jpg` and `back.jpg`.
///
/// # Errors
/// Fails without writing anything if the input cannot be loaded or is too
/// small. Fails at the first face that cannot be written; earlier faces stay
/// on disk.
pub fn convert_panorama(
    input: &Path,
    output_dir: &Path,
    options: &ConvertOptions,
    reporter: &dyn ProgressReporter,
) -> Result<ConversionSummary, ConvertError> {
    let start = Instant::now();
    let panorama = try_stage(reporter, ConversionStage::Load, || load_panorama(input))?;
    reporter.panorama_loaded(panorama.width(), panorama.height());

    let mut summary = convert_loaded(&panorama, output_dir, options, reporter)?;
    summary.elapsed = start.elapsed();
    Ok(summary)
}
