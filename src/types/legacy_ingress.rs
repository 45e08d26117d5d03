// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! extensions/v1beta1 Ingress.
//!
//! Removed in Kubernetes 1.22 and no longer generated by k8s-openapi, so it is
//! declared here with the same envelope as any other typed resource.

use kube::CustomResource;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[kube(group = "extensions", version = "v1beta1", kind = "Ingress")]
#[kube(root = "LegacyIngress")]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct LegacyIngressSpec {
    pub rules: Vec<LegacyIngressRule>,
    pub tls: Vec<LegacyIngressTls>,
}

#[derive(Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
pub struct LegacyIngressRule {
    pub host: String,
    pub http: LegacyHttpRule,
}

#[derive(Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
pub struct LegacyHttpRule {
    pub paths: Vec<LegacyHttpPath>,
}

/// Path without `pathType`, which this API version predates
#[derive(Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
pub struct LegacyHttpPath {
    pub backend: LegacyBackend,
    pub path: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LegacyBackend {
    pub service_name: String,
    pub service_port: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LegacyIngressTls {
    pub hosts: Vec<String>,
    pub secret_name: String,
}
