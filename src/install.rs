// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The docker-registry-ingress install command

use crate::constants::{defaults, NETWORKING_V1};
use crate::error::{RegistryIngressError, Result};
use crate::kubernetes::{ApplyRunner, CapabilitySource};
use crate::manifest::{issuer_for, render, IngressConfig};
use std::io::Write;
use tempfile::NamedTempFile;
use tracing::{error, info, instrument};

/// User-supplied flags for one install
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOptions {
    pub domain: String,
    pub email: String,
    pub ingress_class: String,
    pub namespace: String,
    pub max_size: String,
    pub staging: bool,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            domain: String::new(),
            email: String::new(),
            ingress_class: defaults::INGRESS_CLASS.to_string(),
            namespace: defaults::NAMESPACE.to_string(),
            max_size: defaults::MAX_SIZE.to_string(),
            staging: false,
        }
    }
}

impl InstallOptions {
    pub fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() || self.domain.trim().is_empty() {
            return Err(RegistryIngressError::Validation(
                "both --email and --domain flags should be set and not empty, please set these values"
                    .to_string(),
            ));
        }

        if self.ingress_class.trim().is_empty() {
            return Err(RegistryIngressError::Validation(
                "--ingress-class must be set".to_string(),
            ));
        }

        Ok(())
    }

    /// Name of the Issuer this install creates
    pub fn issuer_name(&self) -> &'static str {
        issuer_for(self.staging).0
    }

    fn ingress_config(&self, has_networking_v1: bool) -> IngressConfig {
        IngressConfig {
            domain: self.domain.clone(),
            email: self.email.clone(),
            ingress_class: self.ingress_class.clone(),
            namespace: self.namespace.clone(),
            max_size: self.max_size.clone(),
            staging: self.staging,
            has_networking_v1,
        }
    }
}

/// Validate, render and apply the registry Ingress and Issuer.
///
/// Nothing touches the cluster until the options have been validated. The
/// rendered manifest lives in a temporary file that is removed on return.
#[instrument(skip_all, fields(domain = %opts.domain, namespace = %opts.namespace))]
pub async fn install_registry_ingress<C, A>(
    opts: &InstallOptions,
    capabilities: &C,
    runner: &A,
) -> Result<()>
where
    C: CapabilitySource,
    A: ApplyRunner,
{
    opts.validate()?;

    let caps = capabilities.capabilities().await?;
    let has_networking_v1 = caps.has(NETWORKING_V1);
    info!("{} available: {}", NETWORKING_V1, has_networking_v1);

    let manifest = render(&opts.ingress_config(has_networking_v1)).inspect_err(|_| {
        error!("Unable to install the application. Could not build the templated yaml file for the resources");
    })?;

    let manifest_file = write_manifest(&manifest).inspect_err(|_| {
        error!("Unable to save generated yaml file into the temporary directory");
    })?;

    info!("Applying {}", manifest_file.path().display());
    let output = runner.apply(manifest_file.path())?;
    if !output.success() {
        return Err(RegistryIngressError::ApplyFailed {
            stderr: output.stderr,
        });
    }

    info!("Docker registry ingress applied");
    Ok(())
}

fn write_manifest(manifest: &[u8]) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("temp_registry_ingress")
        .suffix(".yaml")
        .tempfile()
        .map_err(RegistryIngressError::TempFile)?;
    file.write_all(manifest)
        .and_then(|_| file.flush())
        .map_err(RegistryIngressError::TempFile)?;
    Ok(file)
}

fn info_message(issuer_name: &str) -> String {
    format!(
        "# You will need to ensure that your domain points to your cluster and is
# accessible through ports 80 and 443.
#
# This is used to validate your ownership of this domain by LetsEncrypt
# and then you can use https with your installation.

# Ingress to your domain has been installed for the Registry
# to see the ingress record run
kubectl get -n <installed-namespace> ingress docker-registry

# Check the cert-manager logs with:
kubectl logs -n cert-manager deploy/cert-manager

# A cert-manager Issuer has been installed into the provided
# namespace - to see the resource run
kubectl describe -n <installed-namespace> Issuer {}

# To check the status of your certificate you can run
kubectl describe -n <installed-namespace> Certificate docker-registry

# It may take a while to be issued by LetsEncrypt, in the meantime a
# self-signed cert will be installed",
        issuer_name
    )
}

pub const INSTALL_BANNER: &str = "=======================================================================
= Docker Registry Ingress and cert-manager Issuer have been installed =
=======================================================================";

/// Printed after a successful install that created `issuer_name`
pub fn install_message(issuer_name: &str) -> String {
    format!("{}\n\n{}", INSTALL_BANNER, info_message(issuer_name))
}
