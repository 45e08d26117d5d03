// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Applying manifests through the kubectl binary

use crate::config::Config;
use crate::error::{RegistryIngressError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, instrument};

/// Captured result of one apply invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyOutput {
    /// -1 when the process was terminated by a signal
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ApplyOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Applies a manifest file to the cluster
pub trait ApplyRunner {
    fn apply(&self, manifest: &Path) -> Result<ApplyOutput>;
}

/// Runs `kubectl apply -f <manifest>`
#[derive(Debug, Clone)]
pub struct Kubectl {
    binary: String,
    kubeconfig: Option<PathBuf>,
}

impl Kubectl {
    pub fn new(binary: impl Into<String>, kubeconfig: Option<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            kubeconfig,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.kubectl.clone(), config.kubeconfig.clone())
    }

    fn apply_command(&self, manifest: &Path) -> Command {
        let mut cmd = Command::new(&self.binary);
        if let Some(kubeconfig) = &self.kubeconfig {
            cmd.arg("--kubeconfig").arg(kubeconfig);
        }
        cmd.arg("apply").arg("-f").arg(manifest);
        cmd
    }
}

impl ApplyRunner for Kubectl {
    #[instrument(skip(self), fields(binary = %self.binary))]
    fn apply(&self, manifest: &Path) -> Result<ApplyOutput> {
        let output = self
            .apply_command(manifest)
            .output()
            .map_err(RegistryIngressError::ApplySpawn)?;

        let result = ApplyOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!("{} exited with {}", self.binary, result.exit_code);

        Ok(result)
    }
}
