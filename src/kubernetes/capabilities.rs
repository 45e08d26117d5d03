// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! API group discovery used to pick the Ingress dialect

use crate::error::Result;
use crate::kubernetes::client::create_client;
use kube::Client;
use std::collections::BTreeSet;
use std::future::Future;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// The `group/version` strings served by a cluster. Core versions are bare (`v1`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities(BTreeSet<String>);

impl Capabilities {
    pub fn has(&self, group_version: &str) -> bool {
        self.0.contains(group_version)
    }

    pub fn insert(&mut self, group_version: impl Into<String>) {
        self.0.insert(group_version.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Capabilities {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Capabilities(iter.into_iter().map(Into::into).collect())
    }
}

/// Something that can report which API versions a cluster serves
pub trait CapabilitySource {
    fn capabilities(&self) -> impl Future<Output = Result<Capabilities>> + Send;
}

impl CapabilitySource for Client {
    #[instrument(skip(self))]
    async fn capabilities(&self) -> Result<Capabilities> {
        let mut caps = Capabilities::default();

        let core = self.list_core_api_versions().await?;
        for version in core.versions {
            caps.insert(version);
        }

        let groups = self.list_api_groups().await?;
        for group in groups.groups {
            for version in group.versions {
                caps.insert(version.group_version);
            }
        }

        debug!("Cluster serves {} API versions", caps.0.len());
        Ok(caps)
    }
}

/// Builds the cluster client on first use, so nothing touches the kubeconfig
/// until discovery is actually needed
#[derive(Debug, Clone)]
pub struct ClusterDiscovery {
    kubeconfig: Option<PathBuf>,
}

impl ClusterDiscovery {
    pub fn new(kubeconfig: Option<PathBuf>) -> Self {
        Self { kubeconfig }
    }
}

impl CapabilitySource for ClusterDiscovery {
    async fn capabilities(&self) -> Result<Capabilities> {
        let client = create_client(self.kubeconfig.as_deref()).await?;
        info!("Discovering API versions served by the cluster");
        client.capabilities().await
    }
}
