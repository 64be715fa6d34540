//! Blender subprocess orchestrator.
//!
//! Writes a [`LodJob`] to a temp directory, runs Blender headless on the
//! Python entrypoint and reads back the [`LodReport`] it leaves behind.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::error::{BlenderError, BlenderResult};
use crate::report::LodReport;
use crate::script::LodJob;

const EMBEDDED_ENTRYPOINT_PY: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../blender/lod_entrypoint.py"
));

/// Default timeout for Blender execution (5 minutes).
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Environment variable overriding the Blender executable.
pub const BLENDER_PATH_ENV: &str = "BLENDER_PATH";

/// Environment variable overriding the Python entrypoint.
pub const ENTRYPOINT_ENV: &str = "ASSETKIT_BLENDER_ENTRYPOINT";

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Configuration for the Blender orchestrator.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Explicit Blender executable; searched for when unset or missing.
    pub blender_path: Option<PathBuf>,
    /// Explicit Python entrypoint; the embedded copy is used when unset.
    pub entrypoint_path: Option<PathBuf>,
    /// How long Blender may run before it is killed.
    pub timeout: Duration,
    /// Whether Blender's stderr is collected for error messages.
    pub capture_output: bool,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            blender_path: None,
            entrypoint_path: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            capture_output: true,
        }
    }
}

impl OrchestratorConfig {
    /// Creates a new config with the given entrypoint path.
    pub fn with_entrypoint(entrypoint_path: impl Into<PathBuf>) -> Self {
        Self {
            entrypoint_path: Some(entrypoint_path.into()),
            ..Default::default()
        }
    }

    /// Sets the Blender executable path.
    pub fn blender_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.blender_path = Some(path.into());
        self
    }

    /// Sets the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }
}

/// Where the Python entrypoint comes from.
enum Entrypoint {
    /// A script on disk.
    File(PathBuf),
    /// The embedded script, written out for the duration of the run.
    Embedded(tempfile::NamedTempFile),
}

impl Entrypoint {
    fn path(&self) -> &Path {
        match self {
            Entrypoint::File(path) => path,
            Entrypoint::Embedded(file) => file.path(),
        }
    }
}

/// Returns the places Blender is commonly installed on this platform.
fn install_locations() -> &'static [&'static str] {
    if cfg!(windows) {
        &[
            "C:\\Program Files\\Blender Foundation\\Blender 4.2\\blender.exe",
            "C:\\Program Files\\Blender Foundation\\Blender 4.1\\blender.exe",
            "C:\\Program Files\\Blender Foundation\\Blender 3.6\\blender.exe",
        ]
    } else if cfg!(target_os = "macos") {
        &["/Applications/Blender.app/Contents/MacOS/Blender"]
    } else {
        &["/usr/bin/blender", "/usr/local/bin/blender", "/snap/bin/blender"]
    }
}

/// Finds Blender: explicit path, then `BLENDER_PATH`, then `PATH`, then
/// common install locations.
pub fn locate_blender(explicit: Option<&Path>) -> BlenderResult<PathBuf> {
    let from_env = std::env::var_os(BLENDER_PATH_ENV).map(PathBuf::from);

    if let Some(path) = explicit
        .map(Path::to_path_buf)
        .into_iter()
        .chain(from_env)
        .find(|p| p.exists())
    {
        return Ok(path);
    }

    if let Ok(path) = which::which("blender") {
        return Ok(path);
    }

    install_locations()
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
        .ok_or(BlenderError::BlenderNotFound)
}

/// Runs LOD jobs in a Blender subprocess.
#[derive(Debug, Clone, Default)]
pub struct Orchestrator {
    config: OrchestratorConfig,
}

impl Orchestrator {
    /// Creates a new orchestrator with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new orchestrator with the given configuration.
    pub fn with_config(config: OrchestratorConfig) -> Self {
        Self { config }
    }

    fn entrypoint(&self) -> BlenderResult<Entrypoint> {
        let configured = self
            .config
            .entrypoint_path
            .clone()
            .or_else(|| std::env::var_os(ENTRYPOINT_ENV).map(PathBuf::from));

        if let Some(path) = configured {
            return if path.exists() {
                Ok(Entrypoint::File(path))
            } else {
                Err(BlenderError::EntrypointNotFound { path })
            };
        }

        let mut file = tempfile::Builder::new()
            .prefix("assetkit_lod_entrypoint_")
            .suffix(".py")
            .tempfile()?;
        file.write_all(EMBEDDED_ENTRYPOINT_PY.as_bytes())?;
        file.flush()?;

        Ok(Entrypoint::Embedded(file))
    }

    /// Runs Blender on a job file and returns the report it writes.
    ///
    /// The command line is
    /// `blender --background --factory-startup --python <entrypoint> -- --job <job> --report <report>`.
    pub fn run(&self, job_path: &Path, report_path: &Path) -> BlenderResult<LodReport> {
        let blender = locate_blender(self.config.blender_path.as_deref())?;
        let entrypoint = self.entrypoint()?;

        let mut cmd = Command::new(&blender);
        cmd.args(["--background", "--factory-startup", "--python"])
            .arg(entrypoint.path())
            .args(["--", "--job"])
            .arg(job_path)
            .arg("--report")
            .arg(report_path)
            .stdin(Stdio::null())
            .stdout(Stdio::null());

        if self.config.capture_output {
            cmd.stderr(Stdio::piped());
        }

        let child = cmd.spawn().map_err(BlenderError::SpawnFailed)?;
        let (status, stderr) = wait_with_timeout(child, self.config.timeout)?;

        if !status.success() {
            return Err(BlenderError::process_failed(
                status.code().unwrap_or(-1),
                stderr,
            ));
        }

        let content =
            std::fs::read_to_string(report_path).map_err(|source| BlenderError::ReadReportFailed {
                path: report_path.to_path_buf(),
                source,
            })?;
        let report: LodReport =
            serde_json::from_str(&content).map_err(BlenderError::ParseReportFailed)?;

        match report.ok {
            true => Ok(report),
            false => Err(BlenderError::generation_failed(
                report.error.unwrap_or_else(|| "Unknown error".to_string()),
            )),
        }
    }

    /// Runs Blender on an in-memory job.
    ///
    /// The job and report live in a temporary directory removed afterwards.
    pub fn run_job(&self, job: &LodJob) -> BlenderResult<LodReport> {
        if !job.scene.exists() {
            return Err(BlenderError::SceneNotFound {
                path: job.scene.clone(),
            });
        }

        let temp_dir = tempfile::tempdir()?;
        let job_path = temp_dir.path().join("job.json");
        let report_path = temp_dir.path().join("report.json");

        std::fs::write(&job_path, job.to_json()?).map_err(BlenderError::WriteJobFailed)?;

        self.run(&job_path, &report_path)
    }
}

/// Drains a child's stderr on a separate thread so a chatty process cannot
/// block on a full pipe while we poll for exit.
fn spawn_stderr_reader(child: &mut Child) -> Option<JoinHandle<String>> {
    let mut stderr = child.stderr.take()?;
    Some(thread::spawn(move || {
        let mut buf = String::new();
        let _ = stderr.read_to_string(&mut buf);
        buf
    }))
}

fn wait_with_timeout(mut child: Child, timeout: Duration) -> BlenderResult<(ExitStatus, String)> {
    let reader = spawn_stderr_reader(&mut child);
    let deadline = Instant::now() + timeout;

    let status = loop {
        if let Some(status) = child.try_wait().map_err(BlenderError::SpawnFailed)? {
            break status;
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Err(BlenderError::Timeout {
                timeout_secs: timeout.as_secs(),
            });
        }
        thread::sleep(POLL_INTERVAL);
    };

    let stderr = reader
        .and_then(|handle| handle.join().ok())
        .unwrap_or_default();

    Ok((status, stderr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::{plan_job, LodRequest};

    fn shell(script: &str) -> Command {
        let mut cmd = if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", script]);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.args(["-c", script]);
            cmd
        };
        cmd.stdout(Stdio::null()).stderr(Stdio::piped());
        cmd
    }

    #[test]
    fn test_config_builder() {
        let config = OrchestratorConfig::with_entrypoint("custom/lod.py")
            .blender_path("/opt/blender/blender")
            .timeout_secs(600);

        assert_eq!(config.entrypoint_path, Some(PathBuf::from("custom/lod.py")));
        assert_eq!(config.blender_path, Some(PathBuf::from("/opt/blender/blender")));
        assert_eq!(config.timeout, Duration::from_secs(600));
    }

    #[test]
    fn test_wait_with_timeout_captures_stderr() {
        let child = shell("echo hello 1>&2").spawn().unwrap();

        let (status, stderr) = wait_with_timeout(child, Duration::from_secs(5)).unwrap();
        assert!(status.success());
        assert!(stderr.to_lowercase().contains("hello"));
    }

    #[cfg(unix)]
    #[test]
    fn test_wait_with_timeout_kills_slow_process() {
        let child = shell("sleep 5").spawn().unwrap();

        let err = wait_with_timeout(child, Duration::from_millis(200)).unwrap_err();
        assert!(matches!(err, BlenderError::Timeout { .. }));
    }

    #[test]
    fn test_missing_configured_entrypoint_is_an_error() {
        let orchestrator = Orchestrator::with_config(OrchestratorConfig::with_entrypoint(
            "this/does/not/exist.py",
        ));

        assert!(matches!(
            orchestrator.entrypoint(),
            Err(BlenderError::EntrypointNotFound { .. })
        ));
    }

    #[test]
    fn test_entrypoint_falls_back_to_embedded() {
        if std::env::var_os(ENTRYPOINT_ENV).is_some() {
            eprintln!("{} is set; skipping embedded entrypoint test", ENTRYPOINT_ENV);
            return;
        }

        let entrypoint = Orchestrator::new().entrypoint().unwrap();
        assert!(matches!(entrypoint, Entrypoint::Embedded(_)));

        let content = std::fs::read_to_string(entrypoint.path()).unwrap();
        assert!(content.contains("AssetKit LOD Entrypoint"));
    }

    #[test]
    fn test_embedded_entrypoint_applies_modifier_by_assigned_name() {
        // The job names the modifier "Decimate"; Blender may call it "Decimate.001".
        assert!(EMBEDDED_ENTRYPOINT_PY.contains("modifier_names[op[\"name\"]] = modifier.name"));
        assert!(EMBEDDED_ENTRYPOINT_PY.contains("modifier_names.get(op[\"name\"], op[\"name\"])"));
    }

    #[test]
    fn test_locate_blender_prefers_existing_explicit_path() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(locate_blender(Some(file.path())).unwrap(), file.path());
    }

    #[test]
    fn test_run_job_rejects_missing_scene() {
        let job = plan_job(&LodRequest::new("does/not/exist.blend", "Rock")).unwrap();

        assert!(matches!(
            Orchestrator::new().run_job(&job),
            Err(BlenderError::SceneNotFound { .. })
        ));
    }
}
