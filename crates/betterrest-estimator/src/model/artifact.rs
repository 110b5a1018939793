// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Sleep model that reloads its artifact for every prediction.

use super::{LinearSleepModel, ModelResult, SleepFeatures, SleepModel};
use std::path::{Path, PathBuf};

/// Loads the artifact at `path` on each call
///
/// Nothing is cached between predictions, so replacing or breaking the file
/// takes effect on the very next calculation.
#[derive(Debug, Clone)]
pub struct ArtifactSleepModel {
    path: PathBuf,
    name: String,
}

impl ArtifactSleepModel {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "artifact".to_string());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SleepModel for ArtifactSleepModel {
    fn predict(&self, features: &SleepFeatures) -> ModelResult<f64> {
        LinearSleepModel::load(&self.path)?.predict(features)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
