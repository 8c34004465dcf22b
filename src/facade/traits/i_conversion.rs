use std::path::PathBuf;
use crate::error::ConvertError;
use crate::models::conversion::{ConversionRequest, ConversionResult};

// Facade 接口，負責將轉換請求交給對應的分派器
pub trait ConversionFacadeTrait: Send + Sync {
    /// 執行轉換並保留錯誤類型
    /// # 參數
    /// - request: 單次轉換請求
    /// # 回傳
    /// - 成功時返回所有寫出的檔案路徑
    fn try_execute(&self, request: &ConversionRequest) -> Result<Vec<PathBuf>, ConvertError>;

    /// 執行轉換，錯誤只記錄在日誌並以失敗結果回傳
    fn execute_conversion(&self, request: &ConversionRequest) -> ConversionResult {
        ConversionResult::from_outcome(self.try_execute(request))
    }
}
