use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::{Connection, Outcome};
use crate::http::handler::LogHandler;
use crate::http::stream::ByteStream;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let addr = cfg.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        tokio::spawn(async move {
            let mut conn = Connection::new(ByteStream::new(socket), LogHandler);
            match conn.run().await {
                Ok(Outcome::Clean) => {
                    info!("Connection from {} ended", peer);
                }
                Ok(Outcome::Aborted(kind)) => {
                    tracing::warn!("Connection from {} aborted: {}", peer, kind);
                }
                Err(e) => {
                    tracing::error!("Connection error from {}: {}", peer, e);
                }
            }
        });
    }
}
