use crate::config::script::ScriptConfig;
use crate::core::{Action, ScriptProvider, Step};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_times, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "person-demo")]
#[command(about = "Make people talk and walk")]
pub struct CliConfig {
    /// Actions to perform, each by a new person
    #[arg(value_enum, default_values_t = [Action::Talk])]
    pub actions: Vec<Action>,

    /// How many times each action is repeated
    #[arg(long, default_value = "1")]
    pub times: usize,

    /// Run a TOML script instead of the positional actions
    #[arg(long, conflicts_with = "actions")]
    pub script: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Write logs to stderr as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// 把命令列參數展開成腳本步驟
    pub fn to_script(&self) -> CliScript {
        let steps = self
            .actions
            .iter()
            .enumerate()
            .map(|(i, action)| Step::new(format!("person-{}", i + 1), *action).with_times(self.times))
            .collect();

        CliScript { steps }
    }

    /// 依參數決定腳本來源：`--script` 檔案或命令列動作
    pub fn load_script(&self) -> Result<Box<dyn ScriptProvider>> {
        match &self.script {
            Some(path) => {
                let script = ScriptConfig::from_file(path)?;
                script.validate()?;
                Ok(Box::new(script))
            }
            None => Ok(Box::new(self.to_script())),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_times("times", self.times)?;
        if let Some(path) = &self.script {
            validate_path("script", path)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CliScript {
    steps: Vec<Step>,
}

impl ScriptProvider for CliScript {
    fn name(&self) -> &str {
        "command line"
    }

    fn steps(&self) -> &[Step] {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_action_is_talk() {
        let config = CliConfig::parse_from(["person-demo"]);
        assert_eq!(config.actions, vec![Action::Talk]);
        assert_eq!(config.times, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_each_action_gets_its_own_person() {
        let config = CliConfig::parse_from(["person-demo", "talk", "walk", "--times", "2"]);
        let script = config.to_script();

        assert_eq!(
            script.steps(),
            &[
                Step::new("person-1", Action::Talk).with_times(2),
                Step::new("person-2", Action::Walk).with_times(2),
            ]
        );
    }

    #[test]
    fn test_times_out_of_range() {
        let config = CliConfig::parse_from(["person-demo", "--times", "0"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_action_rejected() {
        assert!(CliConfig::try_parse_from(["person-demo", "run"]).is_err());
    }

    #[test]
    fn test_script_conflicts_with_actions() {
        assert!(CliConfig::try_parse_from(["person-demo", "walk", "--script", "a.toml"]).is_err());
        let config = CliConfig::try_parse_from(["person-demo", "--script", "a.toml"]).unwrap();
        assert_eq!(config.script.as_deref(), Some("a.toml"));
    }
}
