//! Enqueueing download jobs with the aria2 download agent over WebSocket.

use std::path::PathBuf;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use futures::SinkExt;
use tokio::net::TcpStream;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};

use crate::config::DownloaderConfig;
use crate::download::job::DownloadJob;
use crate::download::rpc::AddUriRequest;
use crate::error::{Error, Result};
use crate::fs::destination_dir;

type Session = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Result of submitting one job.
#[derive(Debug)]
pub struct JobOutcome<'a> {
    pub job: &'a DownloadJob,

    /// Raw reply from the agent, or the dispatch error.
    pub result: Result<String>,
}

/// Submits download jobs to the agent, one session per job.
#[derive(Debug, Clone)]
pub struct DownloadDispatcher {
    endpoint: String,
    secret: String,
    base_directory: PathBuf,
    allow_overwrite: bool,
    request_id: Option<String>,
    concurrency: usize,
    timeout: Duration,
}

impl DownloadDispatcher {
    pub fn new(config: &DownloaderConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            secret: config.secret.clone(),
            base_directory: config.base_directory.clone(),
            allow_overwrite: config.allow_overwrite,
            request_id: config.request_id.clone(),
            concurrency: config.concurrency.max(1),
            timeout: Duration::from_secs(config.timeout_seconds.max(1)),
        }
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the enqueue request for a job.
    pub fn build_request(&self, job: &DownloadJob) -> AddUriRequest {
        let id = self
            .request_id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let dir = destination_dir(&self.base_directory, &job.folder);

        AddUriRequest::new(
            id,
            &self.secret,
            job.url.clone(),
            dir.to_string_lossy().into_owned(),
            job.file_name.clone(),
            self.allow_overwrite,
        )
    }

    /// Enqueue a single job and return the agent's raw reply.
    ///
    /// Any reply counts as success; connect, send and read failures, an early
    /// close, and the timeout are dispatch errors.
    pub async fn submit(&self, job: &DownloadJob) -> Result<String> {
        let request = self.build_request(job);
        let payload =
            serde_json::to_string(&request).map_err(|e| Error::dispatch(&job.url, e))?;

        match tokio::time::timeout(self.timeout, self.exchange(&job.url, payload)).await {
            Ok(result) => result,
            Err(_) => Err(Error::dispatch(
                &job.url,
                format!("timed out after {:?}", self.timeout),
            )),
        }
    }

    /// Open a session, send one request, read one reply, close.
    async fn exchange(&self, url: &str, payload: String) -> Result<String> {
        let (mut session, _) = connect_async(self.endpoint.as_str())
            .await
            .map_err(|e| Error::dispatch(url, format!("connect to {}: {}", self.endpoint, e)))?;

        let result = send_and_receive(&mut session, url, payload).await;

        if let Err(e) = session.close(None).await {
            tracing::debug!("Closing downloader session: {}", e);
        }

        result
    }

    /// Submit every job. One job's failure does not stop the others.
    ///
    /// Outcomes are returned in job order. `on_done` runs as each job
    /// finishes.
    pub async fn dispatch_all<'a, F>(
        &self,
        jobs: &'a [DownloadJob],
        mut on_done: F,
    ) -> Vec<JobOutcome<'a>>
    where
        F: FnMut(&JobOutcome<'a>),
    {
        if self.concurrency <= 1 {
            let mut outcomes = Vec::with_capacity(jobs.len());
            for job in jobs {
                let outcome = self.submit_logged(job).await;
                on_done(&outcome);
                outcomes.push(outcome);
            }
            return outcomes;
        }

        let mut indexed: Vec<(usize, JobOutcome<'a>)> = stream::iter(jobs.iter().enumerate())
            .map(|(i, job)| async move { (i, self.submit_logged(job).await) })
            .buffer_unordered(self.concurrency)
            .inspect(|(_, outcome)| on_done(outcome))
            .collect()
            .await;

        indexed.sort_by_key(|(i, _)| *i);
        indexed.into_iter().map(|(_, outcome)| outcome).collect()
    }

    async fn submit_logged<'a>(&self, job: &'a DownloadJob) -> JobOutcome<'a> {
        tracing::info!("Downloading {}", job.url);

        let result = self.submit(job).await;
        match &result {
            Ok(reply) => tracing::debug!("Received: {}", reply),
            Err(e) => tracing::warn!("{}", e),
        }

        JobOutcome { job, result }
    }
}

async fn send_and_receive(session: &mut Session, url: &str, payload: String) -> Result<String> {
    session
        .send(Message::Text(payload))
        .await
        .map_err(|e| Error::dispatch(url, format!("send: {}", e)))?;

    while let Some(msg) = session.next().await {
        let msg = msg.map_err(|e| Error::dispatch(url, format!("read: {}", e)))?;

        match msg {
            Message::Text(text) => return Ok(text),
            Message::Binary(bytes) => return Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Message::Close(frame) => {
                return Err(Error::dispatch(
                    url,
                    format!("session closed before reply ({:?})", frame),
                ))
            }
            // Ping/pong are answered by tungstenite itself.
            _ => continue,
        }
    }

    Err(Error::dispatch(url, "session closed before reply"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;
    use tokio::sync::mpsc;
    use tokio_tungstenite::accept_async;

    const REPLY: &str = r#"{"id":"qwer","jsonrpc":"2.0","result":"2089b05ecca3d829"}"#;

    /// Fake download agent. Records each request; closes without replying
    /// when the request mentions "fail" and stalls when it mentions "hang".
    async fn spawn_agent() -> (String, mpsc::UnboundedReceiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("ws://{}/jsonrpc", listener.local_addr().unwrap());
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let tx = tx.clone();
                tokio::spawn(async move {
                    let Ok(mut ws) = accept_async(stream).await else {
                        return;
                    };
                    if let Some(Ok(Message::Text(text))) = ws.next().await {
                        let _ = tx.send(text.clone());
                        if text.contains("fail") {
                            let _ = ws.close(None).await;
                        } else if text.contains("hang") {
                            tokio::time::sleep(Duration::from_secs(10)).await;
                        } else {
                            let _ = ws.send(Message::Text(REPLY.to_string())).await;
                            // Drain until the client closes.
                            while let Some(Ok(_)) = ws.next().await {}
                        }
                    }
                });
            }
        });

        (endpoint, rx)
    }

    fn dispatcher(endpoint: &str, concurrency: usize) -> DownloadDispatcher {
        DownloadDispatcher::new(&DownloaderConfig {
            endpoint: endpoint.to_string(),
            secret: "p3terx".into(),
            request_id: Some("qwer".into()),
            concurrency,
            ..Default::default()
        })
    }

    fn job(key: &str, url: &str) -> DownloadJob {
        DownloadJob {
            folder: "alice".into(),
            media_key: key.into(),
            url: url.into(),
            file_name: format!("{}.jpg", key),
        }
    }

    #[tokio::test]
    async fn test_submit_sends_add_uri() {
        let (endpoint, mut requests) = spawn_agent().await;
        let reply = dispatcher(&endpoint, 1)
            .submit(&job("3_1", "https://pbs.twimg.com/media/a.jpg:orig"))
            .await
            .unwrap();
        assert_eq!(reply, REPLY);

        let sent: serde_json::Value =
            serde_json::from_str(&requests.recv().await.unwrap()).unwrap();
        assert_eq!(
            sent,
            serde_json::json!({
                "jsonrpc": "2.0",
                "method": "aria2.addUri",
                "id": "qwer",
                "params": [
                    "token:p3terx",
                    ["https://pbs.twimg.com/media/a.jpg:orig"],
                    {"dir": "/downloads/alice", "out": "3_1.jpg", "allow-overwrite": "true"}
                ]
            })
        );
    }

    #[test]
    fn test_request_id_defaults_to_uuid() {
        let dispatcher = DownloadDispatcher::new(&DownloaderConfig::default());
        let request = dispatcher.build_request(&job("3_1", "u"));
        assert!(uuid::Uuid::parse_str(&request.id).is_ok());
    }

    #[tokio::test]
    async fn test_connection_refused_is_dispatch_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("ws://{}/jsonrpc", listener.local_addr().unwrap());
        drop(listener);

        let err = dispatcher(&endpoint, 1)
            .submit(&job("3_1", "https://pbs.twimg.com/a.jpg"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Dispatch { ref url, .. } if url == "https://pbs.twimg.com/a.jpg"));
    }

    #[tokio::test]
    async fn test_close_without_reply_is_dispatch_error() {
        let (endpoint, _requests) = spawn_agent().await;
        let err = dispatcher(&endpoint, 1)
            .submit(&job("3_1", "https://pbs.twimg.com/fail.jpg"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Dispatch { .. }));
    }

    #[tokio::test]
    async fn test_timeout_is_dispatch_error() {
        let (endpoint, _requests) = spawn_agent().await;
        let err = dispatcher(&endpoint, 1)
            .with_timeout(Duration::from_millis(200))
            .submit(&job("3_1", "https://pbs.twimg.com/hang.jpg"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Dispatch { ref message, .. } if message.contains("timed out")));
    }

    #[tokio::test]
    async fn test_sequential_dispatch_isolates_failures() {
        let (endpoint, mut requests) = spawn_agent().await;
        let jobs = vec![
            job("1", "https://pbs.twimg.com/one.jpg"),
            job("2", "https://pbs.twimg.com/fail.jpg"),
            job("3", "https://pbs.twimg.com/three.jpg"),
        ];

        let mut finished = 0;
        let outcomes = dispatcher(&endpoint, 1)
            .dispatch_all(&jobs, |_| finished += 1)
            .await;

        assert_eq!(finished, 3);
        assert!(outcomes[0].result.is_ok());
        assert!(outcomes[1].result.is_err());
        assert!(outcomes[2].result.is_ok());

        // Submitted in job order.
        for expected in ["one.jpg", "fail.jpg", "three.jpg"] {
            assert!(requests.recv().await.unwrap().contains(expected));
        }
    }

    #[tokio::test]
    async fn test_pooled_dispatch_reports_in_job_order() {
        let (endpoint, _requests) = spawn_agent().await;
        let jobs: Vec<DownloadJob> = (0..6)
            .map(|i| {
                let name = if i == 2 { "fail".to_string() } else { format!("m{}", i) };
                job(&i.to_string(), &format!("https://pbs.twimg.com/{}.jpg", name))
            })
            .collect();

        let outcomes = dispatcher(&endpoint, 3).dispatch_all(&jobs, |_| {}).await;

        assert_eq!(outcomes.len(), 6);
        for (i, outcome) in outcomes.iter().enumerate() {
            assert_eq!(outcome.job.media_key, i.to_string());
            assert_eq!(outcome.result.is_err(), i == 2);
        }
    }
}
