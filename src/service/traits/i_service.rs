use std::path::Path;
use image::DynamicImage;
use crate::error::ConvertError;

// 圖片服務接口，負責點陣圖格式轉換
pub trait ImageConverterTrait: Send + Sync {
    /// 開啟點陣圖，轉為 RGB 後以輸出副檔名對應的格式寫出
    /// # 參數
    /// - input: 輸入圖片路徑（png、jpg、jpeg、gif）
    /// - output: 輸出檔案路徑，副檔名決定輸出格式（含 pdf）
    /// # 回傳
    /// - 成功時返回 ()，失敗時返回轉換錯誤
    fn convert(&self, input: &Path, output: &Path) -> Result<(), ConvertError>;

    /// 將已解碼的圖片轉為 RGB 並寫出
    fn save(&self, image: &DynamicImage, output: &Path) -> Result<(), ConvertError>;
}

// PDF 渲染接口，負責將每一頁轉為點陣圖
pub trait PdfRendererTrait: Send + Sync {
    /// 渲染 PDF 的所有頁面
    /// # 參數
    /// - pdf: PDF 檔案路徑
    /// # 回傳
    /// - 成功時依頁序返回圖片列表（可能為空），失敗時返回轉換錯誤
    fn render_pages(&self, pdf: &Path) -> Result<Vec<DynamicImage>, ConvertError>;
}

// 文件載入接口，負責開啟文書處理文件
pub trait DocumentLoaderTrait: Send + Sync {
    /// 載入文件並返回文件控制代碼
    fn load(&self, input: &Path) -> Result<Box<dyn LoadedDocument>, ConvertError>;
}

// 已載入的文件，必須在使用完畢後釋放
pub trait LoadedDocument {
    /// 將文件匯出為 PDF
    fn save_to_pdf(&mut self, output: &Path) -> Result<(), ConvertError>;

    /// 釋放文件資源，取得所有權以確保只會呼叫一次
    fn close(self: Box<Self>);
}
