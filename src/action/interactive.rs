use dialoguer::{Confirm, Input, Select};
use std::io;
use std::path::PathBuf;

use crate::action::shell::{validate_selection, ConverterOption, MenuChoice, PromptPort, Shell};
use crate::facade::conversion_facade::ConversionFacade;
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::utils::setup_logging;

pub fn process_interactive_mode() -> io::Result<Vec<PathBuf>> {
    println!("=== 歡迎使用檔案轉換互動模式 ===");
    let config_service = ConfigService::new(Box::new(DefaultConfigAdapter::new()));
    let config = config_service.get_config()?;
    setup_logging(&config.log_level)?;

    let facade = Box::new(ConversionFacade::new(&config));
    let mut shell = Shell::new(facade, DialoguerPrompt::new());
    shell.run()?;
    Ok(Vec::new())
}

/// 選單項目文字，未啟用的轉換加上標記
pub fn menu_items(options: &[ConverterOption]) -> Vec<String> {
    options
        .iter()
        .map(|o| {
            if o.enabled {
                o.label.to_string()
            } else {
                format!("{}（尚未實作）", o.label)
            }
        })
        .chain(std::iter::once("離開".to_string()))
        .collect()
}

// 以 dialoguer 實作的互動 Port
#[derive(Default)]
pub struct DialoguerPrompt;

impl DialoguerPrompt {
    pub fn new() -> Self {
        DialoguerPrompt
    }
}

impl PromptPort for DialoguerPrompt {
    fn select_converter(&mut self, options: &[ConverterOption]) -> io::Result<MenuChoice> {
        let items = menu_items(options);
        let index = Select::new()
            .with_prompt("選擇轉換類型（使用方向鍵選擇，按 Enter 確認）")
            .items(&items)
            .default(0)
            .interact()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("轉換類型選擇失敗: {}", e)))?;
        Ok(if index >= options.len() {
            MenuChoice::Exit
        } else {
            MenuChoice::Converter(index)
        })
    }

    fn input_path(&mut self, extensions: &[&str]) -> io::Result<Option<String>> {
        let filter = if extensions.is_empty() {
            "所有檔案".to_string()
        } else {
            extensions.join("、")
        };
        let path: String = Input::new()
            .with_prompt(format!("請輸入檔案路徑（{}，直接按 Enter 取消）", filter))
            .allow_empty(true)
            .validate_with(|input: &String| -> Result<(), String> {
                let input = input.trim();
                if input.is_empty() {
                    Ok(())
                } else {
                    validate_selection(input, extensions)
                }
            })
            .interact_text()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("檔案路徑輸入失敗: {}", e)))?;
        let path = path.trim();
        Ok(if path.is_empty() { None } else { Some(path.to_string()) })
    }

    fn confirm_rename(&mut self, file_name: &str) -> io::Result<bool> {
        println!("已選擇檔案：{}", file_name);
        Confirm::new()
            .with_prompt("是否變更輸出檔名？")
            .default(false)
            .interact()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("檔名選項輸入失敗: {}", e)))
    }

    fn input_name(&mut self, default: &str) -> io::Result<String> {
        Input::new()
            .with_prompt("輸入新的檔案名稱")
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("檔案名稱輸入失敗: {}", e)))
    }

    fn info(&mut self, message: &str) {
        log::info!("{}", message);
        println!("{}", message);
    }

    fn warn(&mut self, message: &str) {
        log::warn!("{}", message);
        println!("警告：{}", message);
    }

    fn error(&mut self, message: &str) {
        println!("錯誤：{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::shell::CONVERTERS;

    #[test]
    fn menu_marks_disabled_entries_and_adds_exit() {
        let items = menu_items(&CONVERTERS);
        assert_eq!(items.len(), CONVERTERS.len() + 1);
        assert_eq!(items[0], "IMG to PDF");
        assert_eq!(items[1], "DOC to PDF（尚未實作）");
        assert_eq!(items.last().map(String::as_str), Some("離開"));
    }

    #[test]
    fn prompt_can_be_built_by_default() {
        let mut prompt = DialoguerPrompt::default();
        prompt.error("測試訊息");
    }
}
