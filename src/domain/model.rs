use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

pub const TALK_LINE: &str = "Hello world!";
pub const WALK_LINE: &str = "The person is walking.";

/// 沒有任何狀態的人，每個實例的行為都相同
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Person;

impl Person {
    pub fn new() -> Self {
        Self
    }

    /// 在標準輸出印出 `Hello world!`
    pub fn talk(&self) {
        println!("{}", TALK_LINE);
    }

    /// 在標準輸出印出 `The person is walking.`
    pub fn walk(&self) {
        println!("{}", WALK_LINE);
    }

    pub fn talk_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        self.perform_to(Action::Talk, out)
    }

    pub fn walk_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        self.perform_to(Action::Walk, out)
    }

    pub fn perform(&self, action: Action) {
        match action {
            Action::Talk => self.talk(),
            Action::Walk => self.walk(),
        }
    }

    pub fn perform_to<W: Write + ?Sized>(&self, action: Action, out: &mut W) -> Result<()> {
        writeln!(out, "{}", action.line())?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Talk,
    Walk,
}

impl Action {
    /// 該動作輸出的文字 (不含換行)
    pub fn line(&self) -> &'static str {
        match self {
            Action::Talk => TALK_LINE,
            Action::Walk => WALK_LINE,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Talk => write!(f, "talk"),
            Action::Walk => write!(f, "walk"),
        }
    }
}

fn default_times() -> usize {
    1
}

/// 腳本中的一個步驟：哪個人、做什麼、做幾次
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub person: String,
    pub action: Action,
    #[serde(default = "default_times")]
    pub times: usize,
}

impl Step {
    pub fn new(person: impl Into<String>, action: Action) -> Self {
        Self {
            person: person.into(),
            action,
            times: default_times(),
        }
    }

    pub fn with_times(mut self, times: usize) -> Self {
        self.times = times;
        self
    }
}
