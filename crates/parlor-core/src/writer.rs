//! Single serialized writer for message appends.
//!
//! Every append in the process flows through one tokio task that owns
//! exclusive append rights to the logs. Requests arrive over an unbounded
//! `mpsc` channel and are processed strictly in arrival order; each carries a
//! `oneshot` ack so callers block until their specific request commits or is
//! rejected. Sequence markers (UUIDv7 message ids) are assigned here, inside
//! the writer, so they are monotonic per room no matter how producer clocks
//! race.
//!
//! The channel is unbounded by choice: expected message rates are low and
//! the queue doubles as the ordering queue, so no backpressure bound is
//! applied.

use chrono::Utc;
use parlor_types::error::StoreError;
use parlor_types::message::Message;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::directory::RoomDirectory;
use crate::log::MessageLogs;

/// A pending append, waiting in the writer's queue.
pub(crate) struct AppendRequest {
    pub room_id: String,
    pub sender: String,
    pub content: String,
    /// Ack channel; the writer sends exactly one result per request.
    pub reply: oneshot::Sender<Result<Message, StoreError>>,
}

/// Spawn the writer task.
///
/// The task drains the request channel until every sender is dropped, then
/// exits. Each request either fully commits and acks, or rejects and acks --
/// never a partial mutation.
pub(crate) fn spawn(
    directory: RoomDirectory,
    logs: MessageLogs,
    mut rx: mpsc::UnboundedReceiver<AppendRequest>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        debug!("append writer started");
        while let Some(req) = rx.recv().await {
            let result = commit(&directory, &logs, &req);
            if req.reply.send(result).is_err() {
                // Caller gave up (e.g. connection dropped). The commit, if
                // any, already happened and stays.
                warn!(room_id = %req.room_id, "append ack receiver dropped");
            }
        }
        debug!("append writer stopped");
    })
}

/// Process one request against the store.
///
/// Room existence is checked here, at commit time, so referential integrity
/// holds even if the room was created after the request was enqueued.
fn commit(
    directory: &RoomDirectory,
    logs: &MessageLogs,
    req: &AppendRequest,
) -> Result<Message, StoreError> {
    if !directory.contains(&req.room_id) {
        return Err(StoreError::RoomNotFound(req.room_id.clone()));
    }

    let msg = Message {
        id: Uuid::now_v7(),
        room_id: req.room_id.clone(),
        timestamp: Utc::now(),
        sender: req.sender.clone(),
        content: req.content.clone(),
    };
    logs.push(msg.clone());
    debug!(room_id = %msg.room_id, message_id = %msg.id, "message committed");
    Ok(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        room: &str,
        content: &str,
    ) -> (AppendRequest, oneshot::Receiver<Result<Message, StoreError>>) {
        let (reply, rx) = oneshot::channel();
        (
            AppendRequest {
                room_id: room.to_string(),
                sender: "tester".to_string(),
                content: content.to_string(),
                reply,
            },
            rx,
        )
    }

    #[tokio::test]
    async fn commits_in_arrival_order() {
        let directory = RoomDirectory::new();
        let logs = MessageLogs::new();
        logs.init("general");
        directory.upsert("general", None);

        let (tx, rx) = mpsc::unbounded_channel();
        let handle = spawn(directory, logs.clone(), rx);

        let mut acks = Vec::new();
        for i in 0..10 {
            let (req, ack) = request("general", &format!("m{i}"));
            tx.send(req).unwrap();
            acks.push(ack);
        }
        for ack in acks {
            ack.await.unwrap().unwrap();
        }

        let log = logs.snapshot("general").unwrap();
        let contents: Vec<String> = log.iter().map(|m| m.content.clone()).collect();
        let expected: Vec<String> = (0..10).map(|i| format!("m{i}")).collect();
        assert_eq!(contents, expected);
        assert!(log.windows(2).all(|w| w[0].id < w[1].id));

        drop(tx);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn rejects_missing_room_without_mutation() {
        let directory = RoomDirectory::new();
        let logs = MessageLogs::new();

        let (tx, rx) = mpsc::unbounded_channel();
        let handle = spawn(directory, logs.clone(), rx);

        let (req, ack) = request("ghost", "boo");
        tx.send(req).unwrap();
        assert_eq!(
            ack.await.unwrap(),
            Err(StoreError::RoomNotFound("ghost".to_string()))
        );
        assert_eq!(logs.snapshot("ghost"), None);

        drop(tx);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn exits_when_senders_drop() {
        let directory = RoomDirectory::new();
        let logs = MessageLogs::new();
        let (tx, rx) = mpsc::unbounded_channel::<AppendRequest>();
        let handle = spawn(directory, logs, rx);
        drop(tx);
        handle.await.unwrap();
    }
}
