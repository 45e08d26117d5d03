// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryIngressError {
    #[error("{0}")]
    Validation(String),

    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    Kubeconfig(String),

    #[error("Failed to render manifest: {0}")]
    Render(#[from] serde_yaml::Error),

    #[error("Failed to write manifest to a temporary file: {0}")]
    TempFile(#[source] std::io::Error),

    #[error("Failed to run the apply command: {0}")]
    ApplySpawn(#[source] std::io::Error),

    #[error(
        "Unable to apply YAML files.\nHave you got the Registry running and cert-manager 0.11.0 or higher installed? {stderr}"
    )]
    ApplyFailed { stderr: String },
}

pub type Result<T> = std::result::Result<T, RegistryIngressError>;
