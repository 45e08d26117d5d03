// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// cert-manager Issuer, limited to the ACME fields the registry needs
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[kube(group = "cert-manager.io", version = "v1", kind = "Issuer")]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct IssuerSpec {
    pub acme: AcmeIssuer,
}

#[derive(Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcmeIssuer {
    pub email: String,
    pub server: String,
    pub private_key_secret_ref: SecretRef,
    pub solvers: Vec<AcmeSolver>,
}

#[derive(Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
pub struct SecretRef {
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
pub struct AcmeSolver {
    pub http01: Http01Solver,
}

#[derive(Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
pub struct Http01Solver {
    pub ingress: Http01Ingress,
}

#[derive(Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
pub struct Http01Ingress {
    pub class: String,
}

impl IssuerSpec {
    /// ACME issuer that answers HTTP-01 challenges through `ingress_class`.
    /// The account key is stored in a secret named after the issuer.
    pub fn http01(issuer_name: &str, email: &str, server: &str, ingress_class: &str) -> Self {
        IssuerSpec {
            acme: AcmeIssuer {
                email: email.to_string(),
                server: server.to_string(),
                private_key_secret_ref: SecretRef {
                    name: issuer_name.to_string(),
                },
                solvers: vec![AcmeSolver {
                    http01: Http01Solver {
                        ingress: Http01Ingress {
                            class: ingress_class.to_string(),
                        },
                    },
                }],
            },
        }
    }
}
