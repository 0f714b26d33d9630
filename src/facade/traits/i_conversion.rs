use crate::error::ConvertResult;
use crate::models::conversion::{ConversionInput, ConversionOutput};

// Facade 接口，負責協調驗證、路徑修正與影像轉換
pub trait ConversionFacadeTrait {
    /// 執行單一影像轉換
    /// # 參數
    /// - input: 轉換所需的輸入參數（未經驗證的原始值）
    /// # 回傳
    /// - 成功時返回實際輸出路徑與來源影像資訊，失敗時返回第一個遇到的錯誤
    fn execute_conversion(&self, input: ConversionInput) -> ConvertResult<ConversionOutput>;
}
