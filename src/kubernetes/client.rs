// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation and kubeconfig utilities

use crate::error::{RegistryIngressError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use std::path::Path;
use tracing::{debug, instrument};

/// Create a client from an explicit kubeconfig, or infer one from the environment
#[instrument]
pub async fn create_client(kubeconfig: Option<&Path>) -> Result<Client> {
    let client_config = match kubeconfig {
        Some(path) => config_from_kubeconfig_file(path).await?,
        None => KConfig::infer().await.map_err(|e| {
            RegistryIngressError::Kubeconfig(format!("Failed to infer config: {}", e))
        })?,
    };

    debug!("Using cluster {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| RegistryIngressError::Kubeconfig(format!("Failed to create client: {}", e)))
}

async fn config_from_kubeconfig_file(path: &Path) -> Result<KConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        RegistryIngressError::Kubeconfig(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let kubeconfig: Kubeconfig = serde_yaml::from_str(&contents).map_err(|e| {
        RegistryIngressError::Kubeconfig(format!(
            "Failed to parse kubeconfig {}: {}",
            path.display(),
            e
        ))
    })?;

    KConfig::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| RegistryIngressError::Kubeconfig(format!("Failed to create config: {}", e)))
}
