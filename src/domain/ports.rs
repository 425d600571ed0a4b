use crate::domain::model::BookRecord;

/// 提供目錄初始資料的來源（TOML 檔或內建資料）
pub trait SeedSource {
    fn catalog_name(&self) -> &str;
    fn records(&self) -> &[BookRecord];
    fn sort_on_load(&self) -> bool;
}
