// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed resources that k8s-openapi does not ship.

pub mod issuer;
pub mod legacy_ingress;

pub use issuer::{Issuer, IssuerSpec};
pub use legacy_ingress::{LegacyIngress, LegacyIngressSpec};
