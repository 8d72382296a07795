use futures::channel::mpsc;
use futures::{SinkExt, StreamExt};
use iced::Subscription;
use pokerview_protocol::{ClientMessage, ServerMessage};
use tokio_tungstenite::{connect_async, tungstenite::Message};

use crate::config::ClientConfig;
use crate::messages::Msg;

/// Messages sent right after the socket opens: pick a name, optionally list
/// the tables, then create a table or join one.
pub fn greeting(config: &ClientConfig) -> Vec<ClientMessage> {
    let mut out = vec![ClientMessage::SetName { player_name: config.name.clone() }];
    if config.list {
        out.push(ClientMessage::List);
    }
    if let Some(create) = config.create_request() {
        out.push(create);
    } else if let Some(table) = &config.table {
        out.push(ClientMessage::Join { table_name: table.clone(), password: config.password.clone() });
    }
    out
}

pub fn subscription(config: ClientConfig) -> Subscription<Msg> {
    let id = format!("ws:{}:{}:{:?}", config.server, config.name, config.table);
    let stream = iced::stream::channel(100, move |mut output| async move {
        let url = config.server.to_string();
        tracing::info!(%url, "connecting");

        match connect_async(url.as_str()).await {
            Ok((mut ws, _)) => {
                tracing::info!(%url, "connected");
                let (tx_out, mut rx_out) = mpsc::unbounded::<ClientMessage>();
                let _ = output.send(Msg::WsConnected(tx_out)).await;

                for msg in greeting(&config) {
                    if let Err(e) = send_frame(&mut ws, &msg).await {
                        tracing::error!(error = %e, "failed to send greeting");
                    }
                }

                loop {
                    tokio::select! {
                        Some(cmd) = rx_out.next() => {
                            if let Err(e) = send_frame(&mut ws, &cmd).await {
                                tracing::error!(error = %e, ?cmd, "send failed");
                                let _ = output.send(Msg::WsError(format!("send: {e}"))).await;
                            }
                        }
                        Some(frame) = ws.next() => {
                            match frame {
                                Ok(Message::Text(t)) => {
                                    tracing::debug!(len = t.len(), "received frame");
                                    match ServerMessage::decode(&t) {
                                        Ok(ev) => { let _ = output.send(Msg::WsEvent(ev)).await; }
                                        Err(e) => {
                                            tracing::warn!(error = %e, "dropping undecodable frame");
                                            let _ = output.send(Msg::WsError(e.to_string())).await;
                                        }
                                    }
                                }
                                Ok(Message::Close(_)) => break,
                                Ok(_) => {}
                                Err(e) => {
                                    tracing::warn!(error = %e, "socket error");
                                    break;
                                }
                            }
                        }
                        else => break,
                    }
                }
                tracing::info!(%url, "socket closed");
                let _ = output.send(Msg::WsClosed("socket closed".into())).await;
            }
            Err(e) => {
                tracing::error!(%url, error = %e, "connect failed");
                let _ = output.send(Msg::WsClosed(format!("connect: {e}"))).await;
            }
        }
    });
    Subscription::run_with_id(id, stream)
}

async fn send_frame<S>(ws: &mut S, msg: &ClientMessage) -> anyhow::Result<()>
where
    S: futures::Sink<Message> + Unpin,
    S::Error: std::error::Error + Send + Sync + 'static,
{
    let text = msg.encode()?;
    tracing::debug!(%text, "sending");
    ws.send(Message::Text(text)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn greets_with_name_then_join() {
        let config = ClientConfig::parse_from(["pokerview", "--name", "ann", "--table", "friday"]);
        assert_eq!(
            greeting(&config),
            vec![
                ClientMessage::SetName { player_name: "ann".into() },
                ClientMessage::Join { table_name: "friday".into(), password: None },
            ]
        );

        let lobby_only = ClientConfig::parse_from(["pokerview", "--name", "ann"]);
        assert_eq!(greeting(&lobby_only).len(), 1);
    }

    #[test]
    fn greets_with_list_then_create() {
        let config = ClientConfig::parse_from(["pokerview", "--name", "ann", "--list", "--create"]);
        let sent = greeting(&config);
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[1], ClientMessage::List);
        assert!(matches!(sent[2], ClientMessage::Create { max_players: 6, num_bots: 0, .. }));
    }
}
