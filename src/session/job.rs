use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::assets::fonts::FontTable;
use crate::calibrate::scale::{DrawnLine, ReferenceMeasurement, ScaleRatio};
use crate::composite::Composite;
use crate::composite::placement::Placement;
use crate::foundation::error::{SignscaleError, SignscaleResult};
use crate::session::design::DesignSession;
use crate::sign::render::RenderedSign;
use crate::sign::spec::SignSpec;

/// How a job establishes its scale ratio.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Calibration {
    /// Two points typed in photo pixel coordinates.
    Points(ReferenceMeasurement),
    /// A line drawn over a display-resized copy of the photo.
    DrawnLine {
        #[serde(flatten)]
        line: DrawnLine,
        real_length_in: f64,
    },
    /// A ratio measured earlier.
    Ratio { px_per_inch: ScaleRatio },
}

/// One full design pass described as JSON: photo, calibration, sign and placement.
///
/// A relative `photo` path is resolved against the job file's directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DesignJob {
    pub photo: PathBuf,
    pub calibration: Calibration,
    #[serde(default)]
    pub sign: SignSpec,
    #[serde(default)]
    pub placement: Placement,
}

/// Everything a job produces.
#[derive(Clone, Debug)]
pub struct JobOutput {
    pub ratio: ScaleRatio,
    pub sign: RenderedSign,
    pub composite: Composite,
}

impl DesignJob {
    pub fn from_json(json: &str) -> SignscaleResult<Self> {
        serde_json::from_str(json).map_err(|e| SignscaleError::serde(e.to_string()))
    }

    pub fn from_path(path: &Path) -> SignscaleResult<Self> {
        let f = File::open(path).with_context(|| format!("open job '{}'", path.display()))?;
        serde_json::from_reader(BufReader::new(f))
            .map_err(|e| SignscaleError::serde(format!("parse job '{}': {e}", path.display())))
    }

    pub fn to_json_pretty(&self) -> SignscaleResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SignscaleError::serde(e.to_string()))
    }

    /// Run calibrate, render and composite in order within a fresh session.
    #[tracing::instrument(skip(self, fonts), fields(photo = %self.photo.display()))]
    pub fn run(&self, fonts: FontTable, base_dir: &Path) -> SignscaleResult<JobOutput> {
        let photo_path = base_dir.join(&self.photo);
        let bytes = std::fs::read(&photo_path)
            .with_context(|| format!("read photo '{}'", photo_path.display()))?;

        let mut session = DesignSession::new(fonts);
        session.load_photo(&bytes)?;

        let ratio = match &self.calibration {
            Calibration::Points(reference) => session.calibrate(*reference)?,
            Calibration::DrawnLine {
                line,
                real_length_in,
            } => session.calibrate_drawn_line(*line, *real_length_in)?,
            Calibration::Ratio { px_per_inch } => {
                session.set_ratio(*px_per_inch);
                *px_per_inch
            }
        };

        let sign = session.render_sign(&self.sign)?;
        let composite = session.composite(&sign, self.placement)?;
        Ok(JobOutput {
            ratio,
            sign,
            composite,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/job.rs"]
mod tests;
