// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Renders the registry Ingress and its cert-manager Issuer as a two-document
//! YAML manifest.

use crate::constants::{annotations, issuer, registry, NGINX_INGRESS_CLASS, PATH_TYPE};
use crate::error::Result;
use crate::types::legacy_ingress::{
    LegacyBackend, LegacyHttpPath, LegacyHttpRule, LegacyIngressRule, LegacyIngressTls,
};
use crate::types::{Issuer, IssuerSpec, LegacyIngress, LegacyIngressSpec};
use k8s_openapi::api::networking::v1::{
    HTTPIngressPath, HTTPIngressRuleValue, Ingress, IngressBackend, IngressRule,
    IngressServiceBackend, IngressSpec, IngressTLS, ServiceBackendPort,
};
use kube::api::ObjectMeta;
use std::collections::BTreeMap;
use tracing::debug;

/// Everything needed to render the manifest for one install
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngressConfig {
    pub domain: String,
    pub email: String,
    pub ingress_class: String,
    pub namespace: String,
    pub max_size: String,
    pub staging: bool,
    /// Whether the cluster serves networking.k8s.io/v1
    pub has_networking_v1: bool,
}

impl IngressConfig {
    /// Issuer name and ACME directory URL for the selected environment
    pub fn issuer(&self) -> (&'static str, &'static str) {
        issuer_for(self.staging)
    }

    fn annotations(&self) -> BTreeMap<String, String> {
        let (issuer_name, _) = self.issuer();
        let mut values = BTreeMap::from([
            (annotations::ISSUER.to_string(), issuer_name.to_string()),
            (
                annotations::INGRESS_CLASS.to_string(),
                self.ingress_class.clone(),
            ),
        ]);
        if self.ingress_class == NGINX_INGRESS_CLASS {
            values.insert(
                annotations::PROXY_BODY_SIZE.to_string(),
                self.max_size.clone(),
            );
        }
        values
    }

    fn ingress_metadata(&self) -> ObjectMeta {
        ObjectMeta {
            name: Some(registry::NAME.to_string()),
            namespace: Some(self.namespace.clone()),
            annotations: Some(self.annotations()),
            ..Default::default()
        }
    }
}

/// Issuer name and ACME directory URL for production or staging Let's Encrypt
pub fn issuer_for(staging: bool) -> (&'static str, &'static str) {
    if staging {
        (issuer::STAGING_NAME, issuer::STAGING_SERVER)
    } else {
        (issuer::PROD_NAME, issuer::PROD_SERVER)
    }
}

/// Render the Ingress and Issuer for `config`.
///
/// The Ingress dialect follows `has_networking_v1`: networking.k8s.io/v1 with
/// an explicit `pathType`, or the legacy extensions/v1beta1 form without it.
pub fn render(config: &IngressConfig) -> Result<Vec<u8>> {
    let ingress = if config.has_networking_v1 {
        serde_yaml::to_string(&networking_ingress(config))?
    } else {
        serde_yaml::to_string(&legacy_ingress(config))?
    };
    let issuer = serde_yaml::to_string(&acme_issuer(config))?;

    debug!(
        "Rendered {} Ingress for {} with issuer {}",
        if config.has_networking_v1 {
            "networking.k8s.io/v1"
        } else {
            "extensions/v1beta1"
        },
        config.domain,
        config.issuer().0
    );

    Ok(format!("{}---\n{}", ingress, issuer).into_bytes())
}

fn networking_ingress(config: &IngressConfig) -> Ingress {
    let backend = IngressBackend {
        service: Some(IngressServiceBackend {
            name: registry::NAME.to_string(),
            port: Some(ServiceBackendPort {
                number: Some(registry::PORT),
                ..Default::default()
            }),
        }),
        ..Default::default()
    };

    Ingress {
        metadata: config.ingress_metadata(),
        spec: Some(IngressSpec {
            rules: Some(vec![IngressRule {
                host: Some(config.domain.clone()),
                http: Some(HTTPIngressRuleValue {
                    paths: vec![HTTPIngressPath {
                        path: Some(registry::PATH.to_string()),
                        path_type: PATH_TYPE.to_string(),
                        backend,
                    }],
                }),
            }]),
            tls: Some(vec![IngressTLS {
                hosts: Some(vec![config.domain.clone()]),
                secret_name: Some(registry::NAME.to_string()),
            }]),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn legacy_ingress(config: &IngressConfig) -> LegacyIngress {
    let mut ingress = LegacyIngress::new(
        registry::NAME,
        LegacyIngressSpec {
            rules: vec![LegacyIngressRule {
                host: config.domain.clone(),
                http: LegacyHttpRule {
                    paths: vec![LegacyHttpPath {
                        backend: LegacyBackend {
                            service_name: registry::NAME.to_string(),
                            service_port: registry::PORT,
                        },
                        path: registry::PATH.to_string(),
                    }],
                },
            }],
            tls: vec![LegacyIngressTls {
                hosts: vec![config.domain.clone()],
                secret_name: registry::NAME.to_string(),
            }],
        },
    );
    ingress.metadata = config.ingress_metadata();
    ingress
}

fn acme_issuer(config: &IngressConfig) -> Issuer {
    let (name, server) = config.issuer();
    let mut issuer = Issuer::new(
        name,
        IssuerSpec::http01(name, &config.email, server, &config.ingress_class),
    );
    issuer.metadata.namespace = Some(config.namespace.clone());
    issuer
}
