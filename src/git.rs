use std::{
    fs,
    path::Path,
    process::{Command, Output},
};

use crate::{config::Programs, error::AppError, gateway::ConfigGateway, profile::Scope};

/// Gateway backed by the `git`, `ssh-add` and `ssh-keygen` executables
#[derive(Debug, Clone, Default)]
pub struct SystemGateway {
    programs: Programs,
}

impl SystemGateway {
    pub fn new(programs: Programs) -> Self {
        Self { programs }
    }

    fn run(program: &str, args: &[&str]) -> Result<Output, AppError> {
        log::debug!("running {} {}", program, args.join(" "));
        Ok(Command::new(program).args(args).output()?)
    }

    fn git(&self, args: &[&str]) -> Result<Output, AppError> {
        Self::run(&self.programs.git, args)
    }

    fn ssh_add(&self, args: &[&str]) -> Result<Output, AppError> {
        Self::run(&self.programs.ssh_add, args)
    }

    fn ssh_keygen(&self, args: &[&str]) -> Result<Output, AppError> {
        Self::run(&self.programs.ssh_keygen, args)
    }
}

/// Combined stderr and stdout of a finished command, trimmed
fn diagnostics(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let combined = format!("{}\n{}", stderr.trim(), stdout.trim());
    let combined = combined.trim();
    if combined.is_empty() {
        format!("exited with {}", output.status)
    } else {
        combined.to_string()
    }
}

impl ConfigGateway for SystemGateway {
    fn is_inside_repository(&self) -> bool {
        match self.git(&["rev-parse", "--is-inside-work-tree"]) {
            Ok(output) => output.status.success() && String::from_utf8_lossy(&output.stdout).trim() == "true",
            Err(err) => {
                log::debug!("repository check failed: {err}");
                false
            }
        }
    }

    fn reset_agent(&self) -> Result<(), AppError> {
        let agent_error = |output: String| AppError::Agent {
            action: "clearing keys".to_string(),
            output,
        };
        let output = self.ssh_add(&["-D"]).map_err(|err| agent_error(err.to_string()))?;
        if !output.status.success() {
            return Err(agent_error(diagnostics(&output)));
        }
        Ok(())
    }

    fn load_key(&self, path: &Path) -> Result<(), AppError> {
        let agent_error = |output: String| AppError::Agent {
            action: format!("adding key {}", path.display()),
            output,
        };
        let path_arg = path.to_string_lossy();
        let output = self.ssh_add(&[&*path_arg]).map_err(|err| agent_error(err.to_string()))?;
        if !output.status.success() {
            return Err(agent_error(diagnostics(&output)));
        }
        Ok(())
    }

    fn set_config(&self, scope: Scope, key: &str, value: &str) -> Result<(), AppError> {
        let config_error = |output: String| AppError::ConfigWrite {
            key: key.to_string(),
            applied: Vec::new(),
            output,
        };
        let output = self
            .git(&["config", scope.git_flag(), key, value])
            .map_err(|err| config_error(err.to_string()))?;
        if !output.status.success() {
            return Err(config_error(diagnostics(&output)));
        }
        Ok(())
    }

    fn get_config(&self, key: &str) -> Result<Option<String>, AppError> {
        let output = self.git(&["config", "--get", key])?;
        if output.status.success() {
            return Ok(Some(String::from_utf8_lossy(&output.stdout).trim().to_string()));
        }
        // git exits with 1 when the key is simply not set
        if output.status.code() == Some(1) {
            return Ok(None);
        }
        Err(AppError::Io(std::io::Error::other(format!(
            "git config --get {key}: {}",
            diagnostics(&output)
        ))))
    }

    fn validate_key(&self, path: &Path) -> Result<(), AppError> {
        if !path.is_file() {
            return Err(AppError::KeyNotFound(path.to_path_buf()));
        }
        // Readability is checked separately so a permission problem is reported as such.
        fs::File::open(path).map_err(|err| AppError::InvalidKey {
            path: path.to_path_buf(),
            output: err.to_string(),
        })?;

        let path_arg = path.to_string_lossy();
        let output = self.ssh_keygen(&["-l", "-f", &*path_arg]).map_err(|err| AppError::InvalidKey {
            path: path.to_path_buf(),
            output: err.to_string(),
        })?;
        if !output.status.success() {
            return Err(AppError::InvalidKey {
                path: path.to_path_buf(),
                output: diagnostics(&output),
            });
        }
        Ok(())
    }

    fn generate_key(&self, email: &str, path: &Path) -> Result<(), AppError> {
        let keygen_error = |output: String| AppError::KeyGen {
            path: path.to_path_buf(),
            output,
        };
        if path.exists() {
            return Err(keygen_error(format!(
                "file already exists, pass --key {} to reuse it",
                path.display()
            )));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| keygen_error(err.to_string()))?;
        }

        let path_arg = path.to_string_lossy();
        let output = self
            .ssh_keygen(&["-t", "rsa", "-b", "4096", "-C", email, "-f", &*path_arg, "-N", ""])
            .map_err(|err| keygen_error(err.to_string()))?;
        if !output.status.success() {
            return Err(keygen_error(diagnostics(&output)));
        }
        Ok(())
    }

    fn has_url_rewrites(&self, scope: Scope) -> bool {
        match self.git(&["config", scope.git_flag(), "--get-regexp", r"^url\..*\.insteadOf"]) {
            Ok(output) => output.status.success() && !output.stdout.is_empty(),
            Err(_) => false,
        }
    }
}
