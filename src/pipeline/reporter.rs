//! Progress reporting for the conversion pipeline.

use std::path::Path;
use std::time::Duration;

use crate::geometry::CubeFaceId;

use super::ConversionSummary;

/// Steps of the conversion, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionStage {
    /// Reading the HDR panorama from disk.
    Load,
    /// Exposure and gamma mapping to 8-bit.
    Tonemap,
    /// Choosing the face edge length.
    ResolveFaceSize,
    /// Resampling the six faces.
    Project,
    /// Encoding and writing the face images.
    Write,
}

impl ConversionStage {
    /// Returns the name of the stage.
    pub fn name(&self) -> &'static str {
        match self {
            ConversionStage::Load => "load",
            ConversionStage::Tonemap => "tonemap",
            ConversionStage::ResolveFaceSize => "resolve face size",
            ConversionStage::Project => "project",
            ConversionStage::Write => "write",
        }
    }
}

/// Receives status updates while a panorama is converted.
///
/// Every method has an empty default, so implementors only override what
/// they care about.
pub trait ProgressReporter {
    /// Called before each stage runs.
    fn stage_started(&self, _stage: ConversionStage) {}

    /// Called after each stage completes successfully; a failed stage only
    /// sees `stage_started`.
    fn stage_finished(&self, _stage: ConversionStage, _elapsed: Duration) {}

    /// Called once the source panorama is in memory.
    fn panorama_loaded(&self, _width: u32, _height: u32) {}

    /// Called with the chosen face size before projection starts.
    fn face_size_resolved(
        &self,
        _face_size: u32,
        _auto_detected: bool,
        _source_width: u32,
        _source_height: u32,
    ) {
    }

    /// Called when face generation begins.
    fn generation_started(&self, _face_size: u32) {}

    /// Called after each face file is written.
    fn face_saved(&self, _face: CubeFaceId, _path: &Path) {}

    /// Called once all faces are on disk.
    fn finished(&self, _summary: &ConversionSummary) {}
}

/// Discards all progress updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}

/// Prints human-readable status lines to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn stage_finished(&self, stage: ConversionStage, elapsed: Duration) {
        log::debug!("Stage '{}' took {:.2?}", stage.name(), elapsed);
    }

    fn face_size_resolved(
        &self,
        face_size: u32,
        auto_detected: bool,
        source_width: u32,
        source_height: u32,
    ) {
        if auto_detected {
            println!(
                "Auto-detected face size: {}x{} (from {}x{} equirect)",
                face_size, face_size, source_width, source_height
            );
        } else {
            println!("Face size: {}x{} (requested)", face_size, face_size);
        }
    }

    fn generation_started(&self, face_size: u32) {
        println!("Generating {}x{} cubemap faces...", face_size, face_size);
    }

    fn face_saved(&self, face: CubeFaceId, _path: &Path) {
        println!("  Saved {}.jpg", face.name());
    }

    fn finished(&self, summary: &ConversionSummary) {
        println!(
            "Saved {} cubemap faces to {} in {:.2?}",
            summary.outputs.len(),
            summary.output_dir.display(),
            summary.elapsed
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names_are_distinct() {
        let stages = [
            ConversionStage::Load,
            ConversionStage::Tonemap,
            ConversionStage::ResolveFaceSize,
            ConversionStage::Project,
            ConversionStage::Write,
        ];
        let mut names: Vec<&str> = stages.iter().map(|s| s.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), stages.len());
    }
}
