use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use log::{debug, info, warn};
use tempfile::TempDir;
use crate::error::ConvertError;
use crate::models::conversion::WORD_EXTENSIONS;
use crate::service::traits::i_service::{DocumentLoaderTrait, LoadedDocument};

/// 文件服務，負責 Word 轉 PDF 的載入、匯出與釋放流程
pub struct DocumentService {
    loader: Box<dyn DocumentLoaderTrait>,
}

impl DocumentService {
    /// 創建新的 DocumentService 實例
    pub fn new(loader: Box<dyn DocumentLoaderTrait>) -> Self {
        DocumentService { loader }
    }

    /// 將 Word 文件轉為 PDF
    /// # 參數
    /// - input: 輸入文件路徑（doc 或 docx）
    /// - output: 輸出 PDF 路徑
    /// # 回傳
    /// - 成功時返回 ()，失敗時返回轉換錯誤；文件在任何情況下都會被釋放
    pub fn convert(&self, input: &Path, output: &Path) -> Result<(), ConvertError> {
        let is_word = input
            .extension()
            .and_then(|e| e.to_str())
            .map_or(false, |ext| WORD_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
        if !is_word {
            return Err(ConvertError::UnsupportedFormat {
                path: input.to_string_lossy().to_string(),
                expected: WORD_EXTENSIONS,
            });
        }

        let mut document = DocumentGuard::new(self.loader.load(input)?);
        document.save_to_pdf(output)?;
        info!("文件轉換完成：{} -> {}", input.display(), output.display());
        Ok(())
    }
}

/// 已載入文件的守衛，離開作用域時釋放文件
pub struct DocumentGuard {
    document: Option<Box<dyn LoadedDocument>>,
}

impl DocumentGuard {
    pub fn new(document: Box<dyn LoadedDocument>) -> Self {
        DocumentGuard { document: Some(document) }
    }

    pub fn save_to_pdf(&mut self, output: &Path) -> Result<(), ConvertError> {
        match self.document.as_mut() {
            Some(document) => document.save_to_pdf(output),
            None => Err(ConvertError::Conversion("文件已關閉".to_string())),
        }
    }
}

impl Drop for DocumentGuard {
    fn drop(&mut self) {
        if let Some(document) = self.document.take() {
            document.close();
        }
    }
}

/// 透過 LibreOffice 無頭模式轉換文件的載入器
pub struct OfficeDocumentLoader {
    office_bin: String,
}

impl OfficeDocumentLoader {
    pub fn new(office_bin: impl Into<String>) -> Self {
        OfficeDocumentLoader { office_bin: office_bin.into() }
    }
}

impl DocumentLoaderTrait for OfficeDocumentLoader {
    fn load(&self, input: &Path) -> Result<Box<dyn LoadedDocument>, ConvertError> {
        if !input.is_file() {
            return Err(ConvertError::NotFound { path: input.to_string_lossy().to_string() });
        }
        let file_name = input
            .file_name()
            .ok_or_else(|| ConvertError::InvalidArgument(format!("無效的文件路徑：{}", input.display())))?;

        // 複製到暫存目錄，避免 LibreOffice 在來源目錄留下鎖定檔
        let staging = TempDir::new()?;
        let staged = staging.path().join(file_name);
        fs::copy(input, &staged)?;
        debug!("載入文件：{} -> {}", input.display(), staged.display());

        Ok(Box::new(OfficeDocument {
            office_bin: self.office_bin.clone(),
            staging,
            staged,
        }))
    }
}

struct OfficeDocument {
    office_bin: String,
    staging: TempDir,
    staged: PathBuf,
}

impl LoadedDocument for OfficeDocument {
    fn save_to_pdf(&mut self, output: &Path) -> Result<(), ConvertError> {
        let result = Command::new(&self.office_bin)
            .arg("--headless")
            .arg("--convert-to")
            .arg("pdf")
            .arg("--outdir")
            .arg(self.staging.path())
            .arg(&self.staged)
            .output()
            .map_err(|e| ConvertError::Conversion(format!("無法執行 {}：{}", self.office_bin, e)))?;

        if !result.status.success() {
            return Err(ConvertError::Conversion(format!(
                "{} 結束代碼 {:?}：{}",
                self.office_bin,
                result.status.code(),
                String::from_utf8_lossy(&result.stderr).trim()
            )));
        }

        let produced = self.staged.with_extension("pdf");
        if !produced.exists() {
            return Err(ConvertError::Conversion(format!(
                "未產生 PDF：{}",
                produced.display()
            )));
        }

        fs::copy(&produced, output)?;
        Ok(())
    }

    fn close(self: Box<Self>) {
        let document = *self;
        let staging = document.staging.path().to_path_buf();
        if let Err(e) = document.staging.close() {
            warn!("無法清除暫存目錄 {}：{}", staging.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct Counters {
        loads: AtomicUsize,
        saves: AtomicUsize,
        closes: AtomicUsize,
    }

    struct FakeLoader {
        counters: Arc<Counters>,
        fail_save: bool,
    }

    struct FakeDocument {
        counters: Arc<Counters>,
        fail_save: bool,
    }

    impl DocumentLoaderTrait for FakeLoader {
        fn load(&self, _input: &Path) -> Result<Box<dyn LoadedDocument>, ConvertError> {
            self.counters.loads.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(FakeDocument {
                counters: self.counters.clone(),
                fail_save: self.fail_save,
            }))
        }
    }

    impl LoadedDocument for FakeDocument {
        fn save_to_pdf(&mut self, output: &Path) -> Result<(), ConvertError> {
            self.counters.saves.fetch_add(1, Ordering::SeqCst);
            if self.fail_save {
                return Err(ConvertError::Conversion("save failed".into()));
            }
            fs::write(output, b"%PDF-1.7")?;
            Ok(())
        }

        fn close(self: Box<Self>) {
            self.counters.closes.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn service(fail_save: bool) -> (DocumentService, Arc<Counters>) {
        let counters = Arc::new(Counters::default());
        let loader = FakeLoader { counters: counters.clone(), fail_save };
        (DocumentService::new(Box::new(loader)), counters)
    }

    #[test]
    fn success_closes_document_once() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.pdf");
        let (service, counters) = service(false);

        service.convert(Path::new("example.docx"), &output).unwrap();

        assert!(output.exists());
        assert_eq!(counters.loads.load(Ordering::SeqCst), 1);
        assert_eq!(counters.saves.load(Ordering::SeqCst), 1);
        assert_eq!(counters.closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failed_save_still_closes_document_once() {
        let dir = tempfile::tempdir().unwrap();
        let (service, counters) = service(true);

        let err = service
            .convert(Path::new("example.docx"), &dir.path().join("out.pdf"))
            .unwrap_err();

        assert!(matches!(err, ConvertError::Conversion(_)));
        assert_eq!(counters.closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn non_word_extension_is_rejected_before_loading() {
        let (service, counters) = service(false);

        let err = service
            .convert(Path::new("example.txt"), Path::new("out.pdf"))
            .unwrap_err();

        assert!(matches!(err, ConvertError::UnsupportedFormat { .. }));
        assert_eq!(counters.loads.load(Ordering::SeqCst), 0);
        assert_eq!(counters.closes.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn office_loader_reports_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let loader = OfficeDocumentLoader::new("soffice");
        let err = loader.load(&dir.path().join("gone.docx")).err().unwrap();
        assert!(matches!(err, ConvertError::NotFound { .. }));
    }

    #[test]
    fn office_document_fails_cleanly_without_binary() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("letter.docx");
        fs::write(&input, b"PK").unwrap();

        let loader = OfficeDocumentLoader::new("definitely-not-an-office-binary");
        let mut document = DocumentGuard::new(loader.load(&input).unwrap());
        let err = document.save_to_pdf(&dir.path().join("letter.pdf")).unwrap_err();

        assert!(matches!(err, ConvertError::Conversion(_)), "got: {err:?}");
    }
}
