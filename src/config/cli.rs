use crate::utils::error::Result;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// 開啟輸入檔案，未指定時讀取 stdin
pub fn open_input(path: Option<&str>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            tracing::debug!("Reading input from {}", path);
            let file = File::open(path)?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// 寫入輸出檔案（自動建立上層目錄），未指定時寫到 stdout
pub fn write_output(path: Option<&str>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            let full_path = Path::new(path);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(full_path, data)?;
            tracing::debug!("Wrote {} bytes to {}", data.len(), path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
