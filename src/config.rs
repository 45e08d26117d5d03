// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::env;
use std::path::PathBuf;

/// Process-wide settings for talking to the target cluster
#[derive(Debug, Clone)]
pub struct Config {
    /// kubectl binary used to apply the rendered manifest
    pub kubectl: String,
    /// Explicit kubeconfig; `None` lets kube and kubectl infer one
    pub kubeconfig: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables, letting an explicit
    /// `--kubeconfig` take precedence over `KUBECONFIG`
    pub fn from_env(kubeconfig: Option<PathBuf>) -> Self {
        let kubectl = env::var("KUBECTL")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "kubectl".to_string());
        let kubeconfig = kubeconfig.or_else(|| {
            env::var_os("KUBECONFIG")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        });

        Config {
            kubectl,
            kubeconfig,
        }
    }
}
