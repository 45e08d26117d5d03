// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Annotation keys set on the registry Ingress
pub mod annotations {
    pub const ISSUER: &str = "cert-manager.io/issuer";
    pub const INGRESS_CLASS: &str = "kubernetes.io/ingress.class";
    /// Only emitted for the nginx ingress class
    pub const PROXY_BODY_SIZE: &str = "nginx.ingress.kubernetes.io/proxy-body-size";
}

/// Let's Encrypt issuers, selected by the `--staging` flag
pub mod issuer {
    pub const PROD_NAME: &str = "letsencrypt-prod-issuer";
    pub const PROD_SERVER: &str = "https://acme-v02.api.letsencrypt.org/directory";
    pub const STAGING_NAME: &str = "letsencrypt-staging-issuer";
    pub const STAGING_SERVER: &str = "https://acme-staging-v02.api.letsencrypt.org/directory";
}

/// The registry Service the Ingress routes to
pub mod registry {
    /// Used for the Ingress, the backend Service and the TLS secret
    pub const NAME: &str = "docker-registry";
    pub const PORT: i32 = 5000;
    pub const PATH: &str = "/";
}

/// Flag defaults for the install command
pub mod defaults {
    pub const INGRESS_CLASS: &str = super::NGINX_INGRESS_CLASS;
    pub const NAMESPACE: &str = "default";
    pub const MAX_SIZE: &str = "200m";
}

/// Ingress class whose controller understands the proxy-body-size annotation
pub const NGINX_INGRESS_CLASS: &str = "nginx";

/// API group/version gating the networking.k8s.io/v1 Ingress dialect
pub const NETWORKING_V1: &str = "networking.k8s.io/v1";

pub const PATH_TYPE: &str = "ImplementationSpecific";
