use crate::core::{Person, Result, ScriptProvider};
use std::collections::HashMap;
use std::io::Write;

pub struct ScriptRunner<P: ScriptProvider> {
    provider: P,
}

impl<P: ScriptProvider> ScriptRunner<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// 在標準輸出上執行整個腳本，回傳輸出的行數
    pub fn run(&self) -> Result<usize> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let lines = self.run_to(&mut out)?;
        out.flush()?;
        Ok(lines)
    }

    pub fn run_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<usize> {
        tracing::info!("🚀 Running script '{}'", self.provider.name());

        // 同一個標籤在整個腳本中對應同一個 Person
        let mut people: HashMap<&str, Person> = HashMap::new();
        let mut lines = 0;

        for (index, step) in self.provider.steps().iter().enumerate() {
            let person = *people.entry(step.person.as_str()).or_insert_with(|| {
                tracing::debug!("New person '{}'", step.person);
                Person::new()
            });

            tracing::debug!(
                "Step {}: {} -> {} x{}",
                index,
                step.person,
                step.action,
                step.times
            );

            for _ in 0..step.times {
                person.perform_to(step.action, out)?;
                lines += 1;
            }
        }

        tracing::info!(
            "✅ Script '{}' finished: {} people, {} lines",
            self.provider.name(),
            people.len(),
            lines
        );
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, Step};

    struct FixedScript(Vec<Step>);

    impl ScriptProvider for FixedScript {
        fn name(&self) -> &str {
            "fixed"
        }

        fn steps(&self) -> &[Step] {
            &self.0
        }
    }

    #[test]
    fn test_run_to_follows_step_order() {
        let runner = ScriptRunner::new(FixedScript(vec![
            Step::new("p1", Action::Talk),
            Step::new("p2", Action::Walk),
        ]));

        let mut buf = Vec::new();
        let lines = runner.run_to(&mut buf).unwrap();

        assert_eq!(lines, 2);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Hello world!\nThe person is walking.\n"
        );
    }

    #[test]
    fn test_run_to_repeats_steps() {
        let runner = ScriptRunner::new(FixedScript(vec![
            Step::new("guido", Action::Walk).with_times(2),
            Step::new("guido", Action::Talk),
        ]));

        let mut buf = Vec::new();
        assert_eq!(runner.run_to(&mut buf).unwrap(), 3);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "The person is walking.\nThe person is walking.\nHello world!\n"
        );
    }

    #[test]
    fn test_empty_script_writes_nothing() {
        let runner = ScriptRunner::new(FixedScript(Vec::new()));
        let mut buf = Vec::new();
        assert_eq!(runner.run_to(&mut buf).unwrap(), 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_runner_accepts_borrowed_provider() {
        let script = FixedScript(vec![Step::new("p1", Action::Talk)]);
        let runner = ScriptRunner::new(&script);
        let mut buf = Vec::new();
        assert_eq!(runner.run_to(&mut buf).unwrap(), 1);
    }
}
