use crate::domain::model::Step;

/// 任何能提供執行步驟的來源 (命令列、TOML 腳本)
pub trait ScriptProvider {
    fn name(&self) -> &str;
    fn steps(&self) -> &[Step];
}

impl<T: ScriptProvider + ?Sized> ScriptProvider for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn steps(&self) -> &[Step] {
        (**self).steps()
    }
}
