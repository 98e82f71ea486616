use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::effects::kernel::MAX_RADIUS;
use crate::foundation::error::{BlurError, BlurResult};
use crate::host::memory::ImportFormat;

/// Radius used when a job does not name one.
pub const DEFAULT_RADIUS: u32 = 10;

fn default_radius() -> u32 {
    DEFAULT_RADIUS
}

/// A single blur request: which image to read, where to write, and how hard to blur.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlurJob {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default = "default_radius")]
    pub radius: u32,
    #[serde(default)]
    pub format: ImportFormat,
}

impl BlurJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            radius: DEFAULT_RADIUS,
            format: ImportFormat::Auto,
        }
    }

    /// Read a job from a JSON file.
    ///
    /// Relative `input`/`output` paths are resolved against the file's directory.
    pub fn load(path: &Path) -> BlurResult<Self> {
        let f = File::open(path).with_context(|| format!("open job '{}'", path.display()))?;
        let mut job: Self = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse job JSON '{}'", path.display()))?;

        let root = path.parent().unwrap_or_else(|| Path::new("."));
        job.input = resolve(root, &job.input);
        job.output = resolve(root, &job.output);
        Ok(job)
    }

    pub fn validate(&self) -> BlurResult<()> {
        if self.radius > MAX_RADIUS {
            return Err(BlurError::radius_out_of_range(self.radius, MAX_RADIUS));
        }
        if self.input == self.output {
            return Err(BlurError::validation(format!(
                "job input and output are the same path '{}'",
                self.input.display()
            )));
        }
        Ok(())
    }
}

fn resolve(root: &Path, p: &Path) -> PathBuf {
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        root.join(p)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/job.rs"]
mod tests;
