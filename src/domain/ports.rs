use crate::domain::model::OutputFormat;

pub trait ConfigProvider {
    /// Strip surrounding whitespace before folding.
    fn trim(&self) -> bool;
    /// Drop lines that are empty after trimming.
    fn skip_empty(&self) -> bool;
    fn output_format(&self) -> OutputFormat;
    /// `None` writes to stdout.
    fn output_path(&self) -> Option<&str>;
}
