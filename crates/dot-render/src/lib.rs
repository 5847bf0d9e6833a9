//! Graphviz rendering of DOT diagrams
//!
//! Runs the `dot` program as a subprocess, feeding the diagram source on
//! stdin and reading the raster image from stdout.

mod example;

pub use example::EXAMPLE_FLOWCHART;

use std::io::Cursor;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

#[derive(Error, Debug)]
pub enum RenderError {
    /// Graphviz is missing, could not be started or did not finish in time
    #[error("Graphviz unavailable: {0}")]
    Unavailable(String),
    /// Graphviz rejected the diagram; carries its diagnostics verbatim
    #[error("Graphviz error: {0}")]
    Syntax(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// Raster output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RasterFormat {
    #[default]
    Png,
}

impl RasterFormat {
    /// Value passed to `dot -T`
    pub fn dot_name(self) -> &'static str {
        match self {
            RasterFormat::Png => "png",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub format: RasterFormat,
    pub dpi: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: RasterFormat::Png,
            dpi: 300,
        }
    }
}

/// Encoded image produced by the renderer
#[derive(Debug, Clone)]
pub struct RenderedDiagram {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Handle on a Graphviz `dot` executable
#[derive(Debug, Clone)]
pub struct GraphvizRenderer {
    program: PathBuf,
    timeout: Option<Duration>,
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self::new("dot")
    }
}

impl GraphvizRenderer {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            timeout: None,
        }
    }

    /// Give up on renders that take longer than `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn program(&self) -> &std::path::Path {
        &self.program
    }

    /// Version banner reported by `dot -V`
    pub async fn version(&self) -> Result<String> {
        let output = Command::new(&self.program)
            .arg("-V")
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| self.unavailable(e))?;

        // dot prints its version on stderr
        let banner = if output.stderr.is_empty() {
            output.stdout
        } else {
            output.stderr
        };
        Ok(String::from_utf8_lossy(&banner).trim().to_string())
    }

    /// Whether the configured program can be started
    pub async fn check_installed(&self) -> bool {
        match self.version().await {
            Ok(version) => {
                log::debug!("Found {}", version);
                true
            }
            Err(e) => {
                log::debug!("{}", e);
                false
            }
        }
    }

    /// Render DOT source to an encoded raster image.
    pub async fn render(&self, dot_source: &str, options: &RenderOptions) -> Result<RenderedDiagram> {
        if dot_source.trim().is_empty() {
            return Err(RenderError::Syntax("Diagram source is empty".to_string()));
        }

        log::debug!(
            "Running {} -T{} -Gdpi={}",
            self.program.display(),
            options.format.dot_name(),
            options.dpi
        );

        let mut child = Command::new(&self.program)
            .arg(format!("-T{}", options.format.dot_name()))
            .arg(format!("-Gdpi={}", options.dpi))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| self.unavailable(e))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| RenderError::Unavailable("stdin of dot was not captured".to_string()))?;
        let source = dot_source.as_bytes().to_vec();
        let feed = async move {
            let result = stdin.write_all(&source).await;
            drop(stdin);
            result
        };

        let run = async move { tokio::join!(feed, child.wait_with_output()) };
        let (fed, output) = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, run).await.map_err(|_| {
                RenderError::Unavailable(format!("dot did not finish within {:?}", limit))
            })?,
            None => run.await,
        };
        let output = output?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                format!("dot exited with {}", output.status)
            } else {
                stderr
            };
            return Err(RenderError::Syntax(message));
        }
        // dot may close stdin early only when it fails, so a write error here is real
        fed?;

        let (width, height) = image::ImageReader::new(Cursor::new(&output.stdout))
            .with_guessed_format()?
            .into_dimensions()?;
        log::debug!("Rendered {}x{} pixels", width, height);

        Ok(RenderedDiagram {
            bytes: output.stdout,
            width,
            height,
        })
    }

    fn unavailable(&self, error: std::io::Error) -> RenderError {
        RenderError::Unavailable(format!(
            "cannot run '{}' ({}); install Graphviz and make sure it is on PATH",
            self.program.display(),
            error
        ))
    }
}
