// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use registry_ingress::config::Config;
use registry_ingress::constants::defaults;
use registry_ingress::install::{install_message, install_registry_ingress, InstallOptions};
use registry_ingress::kubernetes::{ClusterDiscovery, Kubectl};

/// Installs cluster add-ons by rendering manifests and applying them with kubectl.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Path to the kubeconfig file; defaults to $KUBECONFIG or ~/.kube/config
    #[arg(long, global = true)]
    kubeconfig: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Install registry ingress with TLS
    ///
    /// Requires cert-manager 0.11.0 or higher installation in the cluster.
    /// Please set --domain to your custom domain and set --email to your
    /// email - this email is used by letsencrypt for domain expiry etc.
    #[command(
        alias = "registry-ingress",
        after_help = "Example:\n  registry-ingress docker-registry-ingress --domain registry.example.com --email openfaas@example.com"
    )]
    DockerRegistryIngress(RegistryIngressArgs),
}

#[derive(Args, Debug)]
struct RegistryIngressArgs {
    /// Custom Ingress Domain
    #[arg(short, long, default_value = "")]
    domain: String,

    /// Letsencrypt Email
    #[arg(short, long, default_value = "")]
    email: String,

    /// Ingress class to be used such as nginx or traefik
    #[arg(long, default_value = defaults::INGRESS_CLASS)]
    ingress_class: String,

    /// The max size for the ingress proxy
    #[arg(long, default_value = defaults::MAX_SIZE)]
    max_size: String,

    /// The namespace where the registry is installed
    #[arg(short, long, default_value = defaults::NAMESPACE)]
    namespace: String,

    /// Use the staging Letsencrypt issuer
    #[arg(long)]
    staging: bool,
}

impl From<RegistryIngressArgs> for InstallOptions {
    fn from(args: RegistryIngressArgs) -> Self {
        InstallOptions {
            domain: args.domain,
            email: args.email,
            ingress_class: args.ingress_class,
            namespace: args.namespace,
            max_size: args.max_size,
            staging: args.staging,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout only carries the install message
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env(cli.kubeconfig);
    debug!("Configuration loaded: {:?}", config);

    match cli.command {
        Command::DockerRegistryIngress(args) => {
            let opts = InstallOptions::from(args);
            let discovery = ClusterDiscovery::new(config.kubeconfig.clone());
            let kubectl = Kubectl::from_config(&config);

            info!("Installing docker registry ingress for {}", opts.domain);
            install_registry_ingress(&opts, &discovery, &kubectl).await?;

            println!("{}", install_message(opts.issuer_name()));
        }
    }

    Ok(())
}
