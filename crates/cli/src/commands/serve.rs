//! Run the web form

use anyhow::Result;
use clap::Args;
use maxarea_web::WebConfig;
use std::net::SocketAddr;
use std::path::PathBuf;

use super::LimitArgs;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Listen address
    #[arg(short, long, env = "MAXAREA_WEB_ADDR")]
    pub listen: Option<SocketAddr>,

    /// TOML configuration file
    #[arg(short, long, env = "MAXAREA_CONFIG")]
    pub config: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs, limits: LimitArgs) -> Result<()> {
    let cfg = resolve_config(&args, limits)?;
    maxarea_web::serve(cfg).await
}

/// Config file (or environment), then command-line flags.
fn resolve_config(args: &ServeArgs, limits: LimitArgs) -> Result<WebConfig> {
    let mut cfg = match &args.config {
        Some(path) => WebConfig::load(path)?,
        None => WebConfig::from_env()?,
    };
    if let Some(listen) = args.listen {
        cfg.listen = listen;
    }
    cfg.limits = limits.apply(cfg.limits);
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maxarea.toml");
        std::fs::write(&path, "listen = \"127.0.0.1:6000\"\n[limits]\nmax_len = 4\n").unwrap();

        let args = ServeArgs {
            listen: Some("127.0.0.1:7000".parse().unwrap()),
            config: Some(path),
        };
        let limits = LimitArgs {
            max_height: Some(3),
            max_len: None,
        };
        let cfg = resolve_config(&args, limits).unwrap();
        assert_eq!(cfg.listen.port(), 7000);
        assert_eq!(cfg.limits.max_height, 3);
        assert_eq!(cfg.limits.max_len, 4);
    }

    #[test]
    fn test_file_listen_is_kept_without_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maxarea.toml");
        std::fs::write(&path, "listen = \"127.0.0.1:6000\"\n").unwrap();

        let args = ServeArgs {
            listen: None,
            config: Some(path),
        };
        let cfg = resolve_config(&args, LimitArgs::default()).unwrap();
        assert_eq!(cfg.listen.port(), 6000);
    }
}
