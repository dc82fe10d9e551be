use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clightningrpc_conf::{CLNConf, SyncCLNConf};

/// How the `style` member of a route hop is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RouteStylePolicy {
    /// `"legacy"` is legacy, every other value is tlv.
    #[default]
    Lenient,
    /// Only `"legacy"` and `"tlv"` are accepted.
    Strict,
}

impl FromStr for RouteStylePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            _ => anyhow::bail!("route-style `{s}` is not one of `lenient` or `strict`"),
        }
    }
}

impl fmt::Display for RouteStylePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => write!(f, "lenient"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RpcClientConf {
    pub path: Option<String>,
    pub route_style: RouteStylePolicy,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for RpcClientConf {
    fn default() -> Self {
        Self {
            path: None,
            route_style: RouteStylePolicy::default(),
            log_level: "info".to_owned(),
            log_file: None,
        }
    }
}

impl TryFrom<String> for RpcClientConf {
    type Error = anyhow::Error;

    /// Load `rpcclient.conf` from the directory `value`.
    fn try_from(value: String) -> Result<Self, Self::Error> {
        let path = format!("{value}/rpcclient.conf");
        let mut conf = CLNConf::new(path.clone(), false);
        conf.parse()
            .map_err(|err| anyhow::anyhow!("{}", err.cause))?;

        let route_style = conf
            .get_conf("route-style")
            .map_err(|err| anyhow::anyhow!("{err}"))?
            .map(|style| RouteStylePolicy::from_str(&style))
            .transpose()?
            .unwrap_or_default();
        let log_level = conf
            .get_conf("log-level")
            .map_err(|err| anyhow::anyhow!("{err}"))?
            .unwrap_or("info".to_owned());
        let log_file = conf
            .get_conf("log-file")
            .map_err(|err| anyhow::anyhow!("{err}"))?
            .map(PathBuf::from);

        log::debug!("loaded configuration from `{path}`");
        Ok(Self {
            path: Some(value),
            route_style,
            log_level,
            log_file,
        })
    }
}

impl RpcClientConf {
    pub fn set_route_style(&mut self, style: &str) -> anyhow::Result<()> {
        self.route_style = RouteStylePolicy::from_str(style)?;
        Ok(())
    }
}
