// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation, API discovery, and applying manifests.

pub mod capabilities;
pub mod client;
pub mod kubectl;

pub use capabilities::{Capabilities, CapabilitySource, ClusterDiscovery};
pub use client::create_client;
pub use kubectl::{ApplyOutput, ApplyRunner, Kubectl};
