//! Interactive construction of a [`LauncherConfig`].

use ignite_core::probe::command_exists;
use ignite_core::{LauncherConfig, Platform};

use crate::net::local_ip;
use crate::prompt::{PromptError, Prompter};

pub const DEFAULT_COMMAND: &str = "npm run dev";
pub const DEFAULT_EDITOR: &str = "code";
pub const DEFAULT_PORT: &str = "3000";
pub const DEFAULT_CUSTOM_URL: &str = "https://google.com";
pub const DEFAULT_DELAY: &str = "3";

const FEATURES: [(&str, bool); 4] = [
    ("Open Folder", true),
    ("Run Execution Command", true),
    ("Open Code Editor", true),
    ("Open Browser", false),
];

const BROWSER_MODES: [&str; 4] = [
    "Localhost URL",
    "Local network URL",
    "Custom URL",
    "No browser",
];

/// Where the browser should point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BrowserMode {
    Localhost,
    Network,
    Custom,
    None,
}

impl BrowserMode {
    fn from_index(i: usize) -> Self {
        match i {
            0 => BrowserMode::Localhost,
            1 => BrowserMode::Network,
            2 => BrowserMode::Custom,
            _ => BrowserMode::None,
        }
    }
}

/// Walks the user through feature selection, command/editor entry and
/// browser setup.
///
/// Editor and browser commands are checked against `PATH`; a miss offers a
/// retry, and declining keeps the unverified command.
pub struct ConfigWizard<'a, P: Prompter + ?Sized> {
    prompter: &'a mut P,
    platform: Platform,
    probe: Box<dyn Fn(&str) -> bool + 'a>,
    host: Option<String>,
}

impl<'a, P: Prompter + ?Sized> ConfigWizard<'a, P> {
    pub fn new(prompter: &'a mut P, platform: Platform) -> Self {
        Self {
            prompter,
            platform,
            probe: Box::new(command_exists),
            host: None,
        }
    }

    /// Replace the `PATH` lookup used to verify editor and browser commands.
    pub fn with_probe(mut self, probe: impl Fn(&str) -> bool + 'a) -> Self {
        self.probe = Box::new(probe);
        self
    }

    /// Fix the host used for "Local network URL" instead of detecting it.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn run(mut self) -> Result<LauncherConfig, PromptError> {
        let items: Vec<String> = FEATURES.iter().map(|(label, _)| label.to_string()).collect();
        let defaults: Vec<bool> = FEATURES.iter().map(|(_, on)| *on).collect();
        let chosen = self
            .prompter
            .multi_select("Select features:", &items, &defaults)?;

        let mut config = LauncherConfig {
            folder: chosen.contains(&0),
            command: None,
            editor: None,
            browser: None,
            browser_urls: Vec::new(),
            browser_delay: 3,
        };

        if chosen.contains(&1) {
            config.command = Some(self.ask_command()?);
        }
        if chosen.contains(&2) {
            config.editor = Some(self.ask_verified(
                "Enter code editor command (e.g. code):",
                DEFAULT_EDITOR,
                "Editor",
                "Try a different editor command?",
            )?);
        }
        if chosen.contains(&3) {
            self.ask_browser(&mut config)?;
        }
        Ok(config)
    }

    fn ask_command(&mut self) -> Result<String, PromptError> {
        let not_blank = |s: &str| {
            if s.trim().is_empty() {
                Err("Command cannot be empty".to_string())
            } else {
                Ok(())
            }
        };
        let answer =
            self.prompter
                .input("Enter execution command:", Some(DEFAULT_COMMAND), Some(&not_blank))?;
        Ok(answer.trim().to_string())
    }

    /// Ask for a command until it is found on `PATH` or the user stops retrying.
    fn ask_verified(
        &mut self,
        message: &str,
        default: &str,
        what: &str,
        retry: &str,
    ) -> Result<String, PromptError> {
        let mut current = default.to_string();
        loop {
            current = self
                .prompter
                .input(message, Some(current.as_str()), None)?
                .trim()
                .to_string();
            if (self.probe)(current.as_str()) {
                return Ok(current);
            }
            let again = self
                .prompter
                .confirm(&format!("{what} command \"{current}\" not found. {retry}"), true)?;
            if !again {
                return Ok(current);
            }
        }
    }

    fn ask_browser(&mut self, config: &mut LauncherConfig) -> Result<(), PromptError> {
        let modes: Vec<String> = BROWSER_MODES.iter().map(|m| m.to_string()).collect();
        let mode = BrowserMode::from_index(
            self.prompter
                .select("How should the browser open?", &modes, 0)?,
        );

        let url = match mode {
            BrowserMode::None => return Ok(()),
            BrowserMode::Localhost => format!("http://localhost:{}", self.ask_port()?),
            BrowserMode::Network => {
                let host = match &self.host {
                    Some(h) => h.clone(),
                    None => local_ip().to_string(),
                };
                format!("http://{host}:{}", self.ask_port()?)
            }
            BrowserMode::Custom => self
                .prompter
                .input("Enter full URL:", Some(DEFAULT_CUSTOM_URL), None)?
                .trim()
                .to_string(),
        };
        config.browser_urls.push(url);

        let delay = self.prompter.input(
            "Browser delay (seconds):",
            Some(DEFAULT_DELAY),
            Some(&|s: &str| parse_delay(s).map(|_| ())),
        )?;
        config.browser_delay = parse_delay(&delay).unwrap_or(3);

        let default_browser = self.platform.default_browser_command();
        config.browser = Some(self.ask_verified(
            "Browser command:",
            default_browser,
            "Browser",
            "Try another browser command?",
        )?);
        Ok(())
    }

    fn ask_port(&mut self) -> Result<u16, PromptError> {
        let answer = self.prompter.input(
            "Enter port number:",
            Some(DEFAULT_PORT),
            Some(&|s: &str| parse_port(s).map(|_| ())),
        )?;
        Ok(parse_port(&answer).unwrap_or(3000))
    }
}

/// TCP port in `1..=65535`.
pub fn parse_port(raw: &str) -> Result<u16, String> {
    match raw.trim().parse::<u16>() {
        Ok(0) | Err(_) => Err("Enter valid port".to_string()),
        Ok(port) => Ok(port),
    }
}

/// Whole seconds, zero allowed.
pub fn parse_delay(raw: &str) -> Result<u32, String> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| "Enter a whole number of seconds".to_string())
}
