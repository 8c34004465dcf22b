use log::debug;

use crate::models::paths::ResolvedPaths;

/// 路徑解析器，負責由輸入路徑推導輸出檔案路徑
///
/// 以字串處理路徑，同時支援 `/` 與 `\` 分隔符號，
/// 讓 Windows 路徑在任何平台上都能得到相同結果。
pub struct PathResolver;

impl PathResolver {
    /// 解析輸出路徑
    /// # 參數
    /// - input_path: 輸入檔案路徑
    /// - desired_output_name: 使用者指定的輸出檔名（可省略）
    /// - target_extension: 目標副檔名（不含點）
    /// # 回傳
    /// - 輸入目錄、輸入檔名與輸出檔案路徑
    pub fn resolve(
        input_path: &str,
        desired_output_name: Option<&str>,
        target_extension: &str,
    ) -> ResolvedPaths {
        let (input_directory, input_file_name) = split_input_path(input_path);
        let suffix = format!(".{}", target_extension);

        let output_name = match desired_output_name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => name.to_string(),
            None => format!("{}{}", strip_extension(input_file_name), suffix),
        };

        let output_name = if output_name
            .to_ascii_lowercase()
            .ends_with(&suffix.to_ascii_lowercase())
        {
            output_name
        } else {
            format!("{}{}", output_name, suffix)
        };

        let output_file_path = if is_absolute(&output_name) {
            output_name
        } else {
            format!("{}{}", input_directory, output_name)
        };

        debug!("解析輸出路徑：{} -> {}", input_path, output_file_path);
        ResolvedPaths {
            input_directory: input_directory.to_string(),
            input_file_name: input_file_name.to_string(),
            output_file_path,
        }
    }
}

/// 將路徑拆成（含結尾分隔符號的目錄, 檔名）
pub fn split_input_path(input_path: &str) -> (&str, &str) {
    let separator = if input_path.contains('/') { '/' } else { '\\' };
    match input_path.rfind(separator) {
        Some(idx) => (&input_path[..=idx], &input_path[idx + 1..]),
        None => ("", input_path),
    }
}

/// 取得檔名的副檔名（不含點），沒有副檔名時回傳 None
pub fn file_extension(file_name: &str) -> Option<&str> {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < file_name.len() => Some(&file_name[idx + 1..]),
        _ => None,
    }
}

fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => &file_name[..idx],
        _ => file_name,
    }
}

fn is_absolute(name: &str) -> bool {
    let bytes = name.as_bytes();
    name.starts_with('/')
        || name.starts_with('\\')
        || (bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':')
}
