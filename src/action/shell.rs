use std::io;
use std::path::Path;
use log::{debug, info};
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{ConversionRequest, SourceKind, TargetKind};
use crate::service::path_resolver::{file_extension, split_input_path};

/// 選單上的一個轉換項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConverterOption {
    pub label: &'static str,
    pub source: SourceKind,
    pub target: Option<TargetKind>,
    pub enabled: bool,
}

const fn entry(
    label: &'static str,
    source: SourceKind,
    target: Option<TargetKind>,
    enabled: bool,
) -> ConverterOption {
    ConverterOption { label, source, target, enabled }
}

pub static CONVERTERS: [ConverterOption; 9] = [
    entry("IMG to PDF", SourceKind::Image, Some(TargetKind::Pdf), true),
    entry("DOC to PDF", SourceKind::Doc, Some(TargetKind::Pdf), false),
    entry("TXT to PDF", SourceKind::Txt, Some(TargetKind::Pdf), false),
    entry("PDF to PNG", SourceKind::Pdf, Some(TargetKind::Png), true),
    entry("JPG to PNG", SourceKind::Jpg, Some(TargetKind::Png), true),
    entry("PDF to JPG", SourceKind::Pdf, Some(TargetKind::Jpg), true),
    entry("PNG to JPG", SourceKind::Png, Some(TargetKind::Jpg), true),
    entry("MP4 to MP3", SourceKind::Mp4, None, false),
    entry("CSV to XLSX", SourceKind::Csv, None, false),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Converter(usize),
    Exit,
}

#[derive(Debug, Clone)]
pub enum ShellState {
    Idle,
    FileSelected {
        option: ConverterOption,
        target: TargetKind,
        path: String,
    },
    ConfirmingName {
        option: ConverterOption,
        target: TargetKind,
        path: String,
        file_name: String,
        output_name: String,
    },
    Converting {
        request: ConversionRequest,
    },
    Exit,
}

// 使用者互動的 Port，互動模式以 dialoguer 實作，測試使用腳本
pub trait PromptPort {
    fn select_converter(&mut self, options: &[ConverterOption]) -> io::Result<MenuChoice>;
    /// 回傳 None 表示取消選擇
    fn input_path(&mut self, extensions: &[&str]) -> io::Result<Option<String>>;
    fn confirm_rename(&mut self, file_name: &str) -> io::Result<bool>;
    fn input_name(&mut self, default: &str) -> io::Result<String>;
    fn info(&mut self, message: &str);
    fn warn(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// 預設輸出名稱：檔名第一個點之前的部分加上目標副檔名
pub fn default_output_name(file_name: &str, extension: &str) -> String {
    let stem = file_name.split('.').next().unwrap_or_default();
    format!("{}.{}", stem, extension)
}

/// 檢查選取的檔案存在且副檔名符合過濾條件，空過濾條件接受任何檔案
pub fn validate_selection(path: &str, extensions: &[&str]) -> Result<(), String> {
    if !Path::new(path).is_file() {
        return Err(format!("檔案 '{}' 不存在", path));
    }
    if extensions.is_empty() {
        return Ok(());
    }
    let (_, file_name) = split_input_path(path);
    match file_extension(file_name) {
        Some(ext) if extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)) => Ok(()),
        _ => Err(format!("只接受以下格式：{}", extensions.join("、"))),
    }
}

pub struct Shell<P: PromptPort> {
    facade: Box<dyn ConversionFacadeTrait>,
    prompt: P,
}

impl<P: PromptPort> Shell<P> {
    pub fn new(facade: Box<dyn ConversionFacadeTrait>, prompt: P) -> Self {
        Shell { facade, prompt }
    }

    #[cfg(test)]
    fn prompt(&self) -> &P {
        &self.prompt
    }

    /// 從 Idle 開始執行，直到使用者選擇離開
    pub fn run(&mut self) -> io::Result<()> {
        let mut state = ShellState::Idle;
        while !matches!(state, ShellState::Exit) {
            state = self.step(state)?;
        }
        info!("離開互動模式");
        Ok(())
    }

    pub fn step(&mut self, state: ShellState) -> io::Result<ShellState> {
        debug!("目前狀態：{:?}", state);
        match state {
            ShellState::Idle => self.idle(),
            ShellState::FileSelected { option, target, path } => {
                let (_, file_name) = split_input_path(&path);
                let file_name = file_name.to_string();
                let output_name = default_output_name(&file_name, target.extension());
                Ok(ShellState::ConfirmingName { option, target, path, file_name, output_name })
            }
            ShellState::ConfirmingName { option, target, path, file_name, output_name } => {
                self.confirm_name(option, target, path, file_name, output_name)
            }
            ShellState::Converting { request } => Ok(self.convert(request)),
            ShellState::Exit => Ok(ShellState::Exit),
        }
    }

    fn idle(&mut self) -> io::Result<ShellState> {
        let index = match self.prompt.select_converter(&CONVERTERS)? {
            MenuChoice::Exit => return Ok(ShellState::Exit),
            MenuChoice::Converter(index) => index,
        };
        let Some(option) = CONVERTERS.get(index).copied() else {
            return Ok(ShellState::Idle);
        };
        let target = match (option.enabled, option.target) {
            (true, Some(target)) => target,
            _ => {
                self.prompt.info(&format!("{} 尚未實作", option.label));
                return Ok(ShellState::Idle);
            }
        };

        let extensions = option.source.extensions();
        let Some(path) = self.prompt.input_path(extensions)? else {
            return Ok(ShellState::Idle);
        };
        if let Err(message) = validate_selection(&path, extensions) {
            self.prompt.warn(&message);
            return Ok(ShellState::Idle);
        }
        Ok(ShellState::FileSelected { option, target, path })
    }

    fn confirm_name(
        &mut self,
        option: ConverterOption,
        target: TargetKind,
        path: String,
        file_name: String,
        output_name: String,
    ) -> io::Result<ShellState> {
        let mut desired = output_name.clone();
        if self.prompt.confirm_rename(&file_name)? {
            let new_name = self.prompt.input_name(&output_name)?.trim().to_string();
            if new_name.is_empty() {
                self.prompt.warn("請輸入新的檔案名稱");
                return Ok(ShellState::ConfirmingName { option, target, path, file_name, output_name });
            }
            self.prompt.info(&format!("檔案將重新命名為：{}", new_name));
            desired = new_name;
        }

        Ok(ShellState::Converting {
            request: ConversionRequest {
                source_path: path,
                source_kind: option.source,
                target_kind: target,
                desired_output_name: Some(desired),
            },
        })
    }

    fn convert(&mut self, request: ConversionRequest) -> ShellState {
        let result = self.facade.execute_conversion(&request);
        match &result.output_path {
            Some(output) if result.is_success() => {
                let name = output
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| output.display().to_string());
                if result.written.len() > 1 {
                    self.prompt.info(&format!("{} 等 {} 個檔案建立成功！", name, result.written.len()));
                } else {
                    self.prompt.info(&format!("{} 建立成功！", name));
                }
            }
            _ => self.prompt.error("轉換時發生錯誤"),
        }
        ShellState::Idle
    }
}
