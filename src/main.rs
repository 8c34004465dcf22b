use std::io;

use file_converter::action::cli::process_args;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let written = process_args(args)?;
    if let Some(first) = written.first() {
        log::info!("程式執行完成，共產生 {} 個檔案", written.len());
        println!("轉換完成！輸出檔案位於：{}", first.display());
    }
    Ok(())
}
