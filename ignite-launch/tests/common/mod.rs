//! Scripted prompter and recording spawner shared by the integration suites.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use ignite_launch::{PromptError, Prompter, Spawner, Validator};

#[derive(Debug, Clone)]
pub enum Answer {
    Yes,
    No,
    /// Accept whatever default the prompt offers.
    Default,
    Text(&'static str),
    Pick(usize),
    Picks(Vec<usize>),
}

/// Replays a fixed list of answers and records every question asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub asked: Vec<String>,
    pub rejected: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn exhausted(&self) -> bool {
        self.answers.is_empty()
    }

    fn next(&mut self, message: &str) -> Answer {
        self.asked.push(message.to_string());
        self.answers
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted answer left for: {message}"))
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError> {
        match self.next(message) {
            Answer::Yes => Ok(true),
            Answer::No => Ok(false),
            Answer::Default => Ok(default),
            other => panic!("confirm `{message}` got {other:?}"),
        }
    }

    fn input(
        &mut self,
        message: &str,
        default: Option<&str>,
        validate: Option<Validator<'_>>,
    ) -> Result<String, PromptError> {
        loop {
            let value = match self.next(message) {
                Answer::Text(t) => t.to_string(),
                Answer::Default => default.unwrap_or_default().to_string(),
                other => panic!("input `{message}` got {other:?}"),
            };
            match validate.map(|v| v(&value)) {
                Some(Err(_)) => self.rejected.push(value),
                _ => return Ok(value),
            }
        }
    }

    fn select(
        &mut self,
        message: &str,
        _items: &[String],
        default: usize,
    ) -> Result<usize, PromptError> {
        match self.next(message) {
            Answer::Pick(i) => Ok(i),
            Answer::Default => Ok(default),
            other => panic!("select `{message}` got {other:?}"),
        }
    }

    fn multi_select(
        &mut self,
        message: &str,
        _items: &[String],
        defaults: &[bool],
    ) -> Result<Vec<usize>, PromptError> {
        match self.next(message) {
            Answer::Picks(v) => Ok(v),
            Answer::Default => Ok(defaults
                .iter()
                .enumerate()
                .filter(|(_, on)| **on)
                .map(|(i, _)| i)
                .collect()),
            other => panic!("multi_select `{message}` got {other:?}"),
        }
    }
}

/// Records spawn requests instead of running anything.
#[derive(Debug, Default)]
pub struct RecordingSpawner {
    pub spawned: RefCell<Vec<PathBuf>>,
    pub fail: bool,
}

impl Spawner for RecordingSpawner {
    fn spawn_detached(&self, script: &Path) -> std::io::Result<u32> {
        if self.fail {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no shell",
            ));
        }
        self.spawned.borrow_mut().push(script.to_path_buf());
        Ok(4242)
    }
}

impl Spawner for &RecordingSpawner {
    fn spawn_detached(&self, script: &Path) -> std::io::Result<u32> {
        (**self).spawn_detached(script)
    }
}
