use std::process::{Command, Stdio};

use anyhow::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalLink {
    pub label: &'static str,
    pub target: &'static str,
}

pub const GITHUB: ExternalLink = ExternalLink {
    label: "GitHub",
    target: "https://github.com/anasnaeem80",
};

pub const LINKEDIN: ExternalLink = ExternalLink {
    label: "LinkedIn",
    target: "https://www.linkedin.com/in/muhammad-anas-naeem-832229246",
};

pub const EMAIL: ExternalLink = ExternalLink {
    label: "Email",
    target: "mailto:anas.naeem.998@gmail.com",
};

pub const SOCIAL_LINKS: [ExternalLink; 3] = [GITHUB, LINKEDIN, EMAIL];

/// Program and arguments that hand `target` to the desktop's default handler.
pub fn launcher_command(target: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "macos") {
        ("open", vec![target.to_string()])
    } else if cfg!(target_os = "windows") {
        (
            "cmd",
            vec!["/C".into(), "start".into(), String::new(), target.to_string()],
        )
    } else {
        ("xdg-open", vec![target.to_string()])
    }
}

impl ExternalLink {
    /// Spawns the platform opener and returns without waiting for it.
    pub fn open(&self) -> anyhow::Result<()> {
        let (program, args) = launcher_command(self.target);
        Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to launch {} for {}", program, self.target))?;
        tracing::info!(target = self.target, "opened external link");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launcher_passes_target_last() {
        let (_, args) = launcher_command(EMAIL.target);
        assert_eq!(args.last().map(String::as_str), Some(EMAIL.target));
    }

    #[test]
    fn social_links_are_fixed() {
        assert!(SOCIAL_LINKS.iter().all(|l| !l.target.is_empty()));
        assert!(EMAIL.target.starts_with("mailto:"));
    }
}
