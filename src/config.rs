use serde::Deserialize;

/// Server configuration.
///
/// Loaded from an optional YAML file (path in `FRAMEWIRE_CONFIG`), with the
/// listen address overridable via the `FRAMEWIRE_LISTEN` environment variable
/// as `host:port`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen: ListenConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ListenConfig {
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: ListenConfig::default(),
        }
    }
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8888,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("FRAMEWIRE_CONFIG") {
            Ok(path) => {
                let contents = std::fs::read_to_string(&path)?;
                Self::from_yaml(&contents)?
            }
            Err(_) => Self::default(),
        };

        if let Ok(listen) = std::env::var("FRAMEWIRE_LISTEN") {
            cfg.apply_listen_override(&listen)?;
        }

        Ok(cfg)
    }

    pub fn from_yaml(contents: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Address string suitable for `TcpListener::bind`.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.listen.host, self.listen.port)
    }

    fn apply_listen_override(&mut self, listen: &str) -> anyhow::Result<()> {
        let (host, port) = listen
            .rsplit_once(':')
            .ok_or_else(|| anyhow::anyhow!("invalid listen address: {}", listen))?;
        self.listen.host = host.to_string();
        self.listen.port = port.parse()?;
        Ok(())
    }
}
