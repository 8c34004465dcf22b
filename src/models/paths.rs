/// 由轉換請求推導出的路徑資訊
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// 含結尾分隔符號的輸入目錄，純檔名時為空字串
    pub input_directory: String,
    pub input_file_name: String,
    pub output_file_path: String,
}

impl ResolvedPaths {
    /// 去掉最後一個副檔名的輸入檔名
    pub fn input_base_name(&self) -> &str {
        match self.input_file_name.rfind('.') {
            Some(idx) if idx > 0 => &self.input_file_name[..idx],
            _ => &self.input_file_name,
        }
    }
}
