// Helper functions for backend implementations

use std::process::Stdio;

use tokio::io::AsyncReadExt;
use tokio::process::Command as TokioCommand;
use tokio::time::{timeout, Duration as TokioDuration};

use super::errors::CrawlError;

/// Network and auth options shared by every yt-dlp invocation
#[derive(Debug, Clone)]
pub struct YtDlpOptions {
    /// Path or name of the yt-dlp binary
    pub binary: String,
    /// SOCKS5/HTTP proxy URL
    pub proxy: Option<String>,
    /// Path to cookies.txt file
    pub cookies_path: Option<String>,
    /// Socket timeout passed to yt-dlp, in seconds
    pub socket_timeout: u32,
    /// Hard limit for a metadata/listing call, in seconds
    pub command_timeout: u64,
    /// Hard limit for a media download, in seconds
    pub download_timeout: u64,
}

impl Default for YtDlpOptions {
    fn default() -> Self {
        Self {
            binary: find_ytdlp(),
            proxy: None,
            cookies_path: None,
            socket_timeout: 15,
            command_timeout: 90,
            download_timeout: 600,
        }
    }
}

impl YtDlpOptions {
    pub fn with_proxy(mut self, proxy: Option<String>) -> Self {
        self.proxy = proxy;
        self
    }

    pub fn with_cookies_path(mut self, path: Option<String>) -> Self {
        self.cookies_path = path;
        self
    }

    pub fn with_binary(mut self, binary: String) -> Self {
        self.binary = binary;
        self
    }

    /// Arguments every call shares: quiet output, timeouts, proxy, cookies
    pub fn common_args(&self) -> Vec<String> {
        let mut args = vec![
            "--no-warnings".to_string(),
            "--socket-timeout".to_string(),
            self.socket_timeout.to_string(),
            "--retries".to_string(),
            "2".to_string(),
        ];

        if let Some(path) = &self.cookies_path {
            args.push("--cookies".to_string());
            args.push(path.clone());
        }

        if let Some(proxy) = &self.proxy {
            args.push("--proxy".to_string());
            args.push(proxy.clone());
        }

        args
    }
}

/// Find yt-dlp: `YTDLP_PATH`, common install paths, then `which`
pub fn find_ytdlp() -> String {
    if let Ok(path) = std::env::var("YTDLP_PATH") {
        if !path.trim().is_empty() {
            return path;
        }
    }

    let common_paths = [
        "/opt/homebrew/bin/yt-dlp", // Homebrew on Apple Silicon
        "/usr/local/bin/yt-dlp",    // Homebrew on Intel Mac
        "/usr/bin/yt-dlp",          // System installation
    ];

    for path in common_paths {
        if std::path::Path::new(path).exists() {
            return path.to_string();
        }
    }

    if let Ok(output) = std::process::Command::new("which").arg("yt-dlp").output() {
        if output.status.success() {
            if let Ok(path) = String::from_utf8(output.stdout) {
                let trimmed = path.trim();
                if !trimmed.is_empty() {
                    return trimmed.to_string();
                }
            }
        }
    }

    // Last resort: hope it's in PATH
    "yt-dlp".to_string()
}

/// Run command with timeout; the child is killed when the timeout expires
pub async fn run_output_with_timeout(
    program: &str,
    args: Vec<String>,
    timeout_secs: u64,
) -> Result<std::process::Output, CrawlError> {
    let mut child = TokioCommand::new(program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CrawlError::ToolNotFound(program.to_string()),
            _ => CrawlError::ExecutionError(format!("Failed to start {}: {}", program, e)),
        })?;

    let mut stdout_pipe = child.stdout.take().ok_or_else(|| {
        CrawlError::ExecutionError(format!("Failed to capture stdout from {}", program))
    })?;
    let mut stderr_pipe = child.stderr.take().ok_or_else(|| {
        CrawlError::ExecutionError(format!("Failed to capture stderr from {}", program))
    })?;

    let stdout_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        stdout_pipe.read_to_end(&mut buf).await.map(|_| buf)
    });
    let stderr_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        stderr_pipe.read_to_end(&mut buf).await.map(|_| buf)
    });

    let waited = timeout(TokioDuration::from_secs(timeout_secs), child.wait()).await;
    match waited {
        Ok(status_res) => {
            let status = status_res?;
            let stdout = join_pipe(stdout_task, "stdout").await?;
            let stderr = join_pipe(stderr_task, "stderr").await?;
            Ok(std::process::Output {
                status,
                stdout,
                stderr,
            })
        }
        Err(_) => {
            let _ = child.kill().await;
            stdout_task.abort();
            stderr_task.abort();
            tracing::warn!(program, timeout_secs, "Command timed out, killed");
            Err(CrawlError::NetworkTimeout)
        }
    }
}

async fn join_pipe(
    task: tokio::task::JoinHandle<std::io::Result<Vec<u8>>>,
    name: &str,
) -> Result<Vec<u8>, CrawlError> {
    task.await
        .map_err(|e| CrawlError::ExecutionError(format!("{} task failed: {}", name, e)))?
        .map_err(CrawlError::from)
}
